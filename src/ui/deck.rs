//! Deck rendering.
//!
//! Derives on-screen page rectangles from the viewport scale (the terminal
//! equivalent of the original canvas transform) and renders every visible
//! slide into its spread slot.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::audit;
use crate::app::App;
use crate::constants::{canvas, scaling};
use crate::deck::{Slide, SlideKind};
use crate::nav::{SpreadSlot, ViewMode};

/// Render the deck into `area`.
pub fn draw_deck(f: &mut Frame, app: &App, area: Rect) {
    let (page_w, page_h) = page_size_cells(app.scale, area, app.nav.mode);

    match app.nav.mode {
        ViewMode::Single => {
            if let Some(slide) = app.current_slide() {
                let rect = centered_rect(area, page_w, page_h);
                draw_slide(f, app, app.nav.current, slide, rect);
            }
        }
        ViewMode::Book => {
            for index in 0..app.deck.len() {
                let placed = app.placement_for(index);
                let Some(slot) = placed.slot else { continue };
                let rect = match slot {
                    SpreadSlot::Center => centered_rect(area, page_w, page_h),
                    SpreadSlot::Left => spread_rect(area, page_w, page_h, false),
                    SpreadSlot::Right => spread_rect(area, page_w, page_h, true),
                };
                if let Some(slide) = app.deck.get(index) {
                    draw_slide(f, app, index, slide, rect);
                }
            }
        }
    }
}

/// Scaled page size in terminal cells, clamped so the page (or the spread
/// pair in book mode) always fits the available area.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn page_size_cells(scale: f32, area: Rect, mode: ViewMode) -> (u16, u16) {
    let raw_w = (canvas::PAGE_WIDTH * scale / scaling::CELL_WIDTH).floor().max(0.0) as u16;
    let raw_h = (canvas::PAGE_HEIGHT * scale / scaling::CELL_HEIGHT).floor().max(0.0) as u16;
    let max_w = match mode {
        ViewMode::Single => area.width,
        ViewMode::Book => area.width / 2,
    };
    // Floors keep a degenerate area from collapsing the page to nothing.
    let w = raw_w.min(max_w).max(20.min(max_w));
    let h = raw_h.min(area.height).max(10.min(area.height));
    (w, h)
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn spread_rect(area: Rect, width: u16, height: u16, right: bool) -> Rect {
    let pair_width = width.saturating_mul(2);
    let x0 = area.x + (area.width.saturating_sub(pair_width)) / 2;
    Rect {
        x: if right { x0 + width } else { x0 },
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

const fn accent(kind: SlideKind) -> Color {
    match kind {
        SlideKind::Cover | SlideKind::BackCover => Color::LightBlue,
        SlideKind::CallToAction => Color::Green,
        SlideKind::Stats | SlideKind::Process => Color::Gray,
    }
}

fn draw_slide(f: &mut Frame, app: &App, index: usize, slide: &Slide, rect: Rect) {
    let color = accent(slide.kind);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    f.render_widget(block, rect);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(rect);

    let title = Paragraph::new(slide.title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, inner[0]);

    if slide.kind == SlideKind::CallToAction {
        // The call-to-action page splits its body to host the audit panel.
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(9)])
            .split(inner[1]);
        draw_body(f, slide, parts[0]);
        audit::draw_audit_panel(f, app, parts[1]);
    } else {
        draw_body(f, slide, inner[1]);
    }

    draw_footer(f, app, index, slide, inner[2]);
}

fn draw_body(f: &mut Frame, slide: &Slide, area: Rect) {
    let alignment = match slide.kind {
        SlideKind::Cover | SlideKind::BackCover => Alignment::Center,
        _ => Alignment::Left,
    };
    let lines: Vec<Line> = slide.body.iter().map(|line| Line::raw(*line)).collect();
    let body = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .alignment(alignment);
    f.render_widget(body, area);
}

fn draw_footer(f: &mut Frame, app: &App, index: usize, slide: &Slide, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let dim = Style::default().fg(Color::DarkGray);

    if let Some(back) = &slide.back {
        let text = Paragraph::new(format!("< {}", back.label))
            .style(dim)
            .alignment(Alignment::Left);
        f.render_widget(text, chunks[0]);
    }

    if let Some(label) = app.deck.page_label(index) {
        let number = Paragraph::new(label).style(dim).alignment(Alignment::Center);
        f.render_widget(number, chunks[1]);
    }

    if let Some(forward) = &slide.forward {
        let text = Paragraph::new(format!("{} >", forward.label))
            .style(dim)
            .alignment(Alignment::Right);
        f.render_widget(text, chunks[2]);
    }
}
