//! Narrow-terminal blocking view.
//!
//! Rendered exclusively while the responsive gate is active; no navigation
//! state is consulted until the terminal is wide enough again.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the blocking view into `area`.
pub fn draw_blocker(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    f.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Brand line
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area);

    let message = Paragraph::new("Please open with a wider terminal")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    let centered = vertical_center(inner[0], 1);
    f.render_widget(message, centered);

    let brand = Paragraph::new("UxGeek .")
        .style(Style::default().fg(Color::LightBlue))
        .alignment(Alignment::Center);
    f.render_widget(brand, inner[1]);
}

fn vertical_center(area: Rect, height: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: area.width,
        height: height.min(area.height),
    }
}
