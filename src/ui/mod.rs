//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod audit;
mod blocker;
mod deck;

pub use blocker::draw_blocker;
pub use deck::draw_deck;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::deck::SlideKind;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &App) {
    // The narrow gate replaces everything; the slide controller is not
    // consulted at all while it is active.
    if app.narrow {
        draw_blocker(f, f.size());
        return;
    }

    // Create the base layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    draw_deck(f, app, chunks[0]);

    // Draw loading indicator if needed
    if app.is_generating {
        draw_loading_indicator(f);
    }

    // Draw status/info modal (blocking)
    if let Some(status) = &app.status_message {
        draw_status_message(f, status);
        return;
    }
    // Draw error message if present (blocking)
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    // Draw help modal if shown
    if app.show_help {
        draw_help_modal(f);
    }

    // Draw command/status bar at the bottom
    draw_command_bar(f, app, chunks[1]);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_global_command_mode {
        "Command"
    } else if app.input_active {
        "Product Name"
    } else {
        "Commands/Status"
    };

    let border_color = if app.input_active { Color::Cyan } else { Color::Yellow };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));

    f.render_widget(block, area);

    // Calculate the inner area to render text with more padding
    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Add a margin of 1 to account for the border
        .split(area)[0];

    if app.is_global_command_mode {
        // Show command input with more left padding
        let command = Paragraph::new(format!(" :{}", app.global_command_buffer))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(command, inner_area);
        f.set_cursor(
            inner_area.left() + app.global_command_buffer.len() as u16 + 2,
            inner_area.top(),
        );
    } else if app.input_active {
        let input = Paragraph::new(format!(" > {}", app.product_input))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(input, inner_area);
        f.set_cursor(
            inner_area.left() + app.product_input.len() as u16 + 3,
            inner_area.top(),
        );
    } else {
        // Context-sensitive hints based on the current slide
        let hints: &[(&str, &str)] = match app.current_slide().map(|s| s.kind) {
            Some(SlideKind::Cover) => &[
                ("Enter", "Open"),
                ("v", "View mode"),
                ("?", "Help"),
                (":q", "Quit"),
            ],
            Some(SlideKind::CallToAction) => &[
                ("i", "Product name"),
                ("g", "Generate audit"),
                ("y", "Copy link"),
                (":export", "Save report"),
                ("Enter", "Cover"),
            ],
            Some(SlideKind::BackCover) => &[
                ("Enter", "Restart"),
                ("p", "Back"),
                (":q", "Quit"),
            ],
            _ => &[
                ("n/p", "Next/Prev"),
                ("v", "View mode"),
                ("c", "Cover"),
                ("0-7", "Jump"),
                ("?", "Help"),
            ],
        };

        let mut text = create_help_text(hints);
        text.push(Span::styled(
            format!(" | {}", app.nav.mode.name()),
            Style::default().fg(Color::Gray),
        ));

        let status_bar = Paragraph::new(Line::from(text)).style(Style::default().fg(Color::Gray));
        f.render_widget(status_bar, inner_area);
    }
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        // Add the key with bold styling
        text.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));

        // Add the description
        text.push(Span::raw(format!(": {description}")));

        // Add separator unless it's the last item
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

// Draw a loading indicator overlay
fn draw_loading_indicator(f: &mut Frame) {
    let size = f.size();

    // Create a smaller centered box for the loading indicator
    let width = 26;
    let height = 3;

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    // Create a block with a border
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new("Generating audit...")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);

    // Adjust area for inner text
    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Add a margin for the border
        .split(area)[0];

    f.render_widget(text, inner_area);
}

// Draw an error message overlay
fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();

    // Create a smaller centered box for the error message
    let width = 44.min(size.width.saturating_sub(4));
    let height = 6;

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Space for the dismiss hint
        ])
        .margin(1) // Add a margin for the border
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, inner_area[1]);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_status_message(f: &mut Frame, message: &str) {
    use unicode_width::UnicodeWidthStr;
    let size = f.size();

    // Calculate box width (max 80% of screen)
    let max_width = (size.width as usize * 80) / 100;
    let width = message.width().saturating_add(6).min(max_width).max(30) as u16;
    let height = 5;

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Status",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, inner_area[1]);
}

fn draw_help_modal(f: &mut Frame) {
    let size = f.size();

    let width = 52.min(size.width.saturating_sub(4));
    let height = 16.min(size.height.saturating_sub(2));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Keys",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let entries = [
        ("Right / n / Space", "Next page or spread"),
        ("Left / p", "Previous page or spread"),
        ("Home / c", "Return to cover"),
        ("End", "Back cover"),
        ("0-7", "Jump to page"),
        ("v", "Toggle book / single page"),
        ("Enter", "Follow the slide's footer link"),
        ("i", "Edit product name (audit page)"),
        ("g", "Generate audit report (audit page)"),
        ("y", "Copy scheduling link (audit page)"),
        (":export [path]", "Save the report as JSON"),
        (":q", "Quit"),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<16}"),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {description}")),
            ])
        })
        .collect();

    let text = Paragraph::new(lines).style(Style::default().fg(Color::White));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1)
        .split(area)[0];

    f.render_widget(text, inner_area);
}
