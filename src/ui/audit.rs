//! Audit panel rendering on the call-to-action page.
//!
//! Shows the product-name field, the generation state, and the latest
//! fabricated report.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::report::{AuditReport, Severity};

/// Render the audit form and report summary into `area`.
pub fn draw_audit_panel(f: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.input_active { Color::Cyan } else { Color::Green };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            "Instant Audit",
            Style::default().fg(border_color).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input field
            Constraint::Min(1),    // Report / prompt
        ])
        .margin(1)
        .split(area);

    draw_input_line(f, app, inner[0]);

    if app.is_generating {
        let waiting = Paragraph::new(format!(
            "Analyzing {}...",
            app.product_input.trim()
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        f.render_widget(waiting, inner[1]);
    } else if let Some(generated) = &app.report {
        draw_report(f, generated, inner[1]);
    } else {
        let prompt = Paragraph::new("Press i to enter a product name, g to generate.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(prompt, inner[1]);
    }
}

fn draw_input_line(f: &mut Frame, app: &App, area: Rect) {
    let value = if app.product_input.is_empty() && !app.input_active {
        Span::styled("<product name>", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.product_input.as_str(), Style::default().fg(Color::White))
    };
    let line = Line::from(vec![
        Span::styled("Product: ", Style::default().fg(Color::Gray)),
        value,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::High => Style::default().fg(Color::Red),
        Severity::Medium => Style::default().fg(Color::Yellow),
        Severity::Low => Style::default().fg(Color::Gray),
    }
}

fn draw_report(f: &mut Frame, generated: &AuditReport, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "UX {}  Technical {}  Accessibility {}",
                generated.scores.ux, generated.scores.technical, generated.scores.accessibility
            ),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for finding in generated.ux_findings.iter().chain(&generated.tech_findings) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", finding.severity.name()),
                severity_style(finding.severity),
            ),
            Span::raw(finding.title.as_str()),
        ]));
    }

    let report_view = Paragraph::new(lines).style(Style::default().fg(Color::White));
    f.render_widget(report_view, area);
}
