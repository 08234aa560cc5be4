//! Integration flows for the deck controller.
//!
//! Drives the whole `App` through key and resize events, the way the event
//! loop does, and checks the observable state after each flow.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pitchbook::app::App;
use pitchbook::constants::deck::PAGE_COUNT;
use pitchbook::nav::{NavRequest, ViewMode};
use pitchbook::scale::{compute_scale, is_narrow, LogicalSize, Viewport};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn desktop_app() -> App {
    let mut app = App::new();
    app.handle_resize(160, 48);
    assert!(!app.narrow, "160 columns should clear the gate");
    app
}

/// Pump async updates until the loading flag clears or the budget runs out.
async fn pump(app: &mut App) {
    for _ in 0..200 {
        app.handle_updates();
        if !app.is_generating {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("generation never completed");
}

#[test]
fn single_mode_walks_every_page_and_stops() {
    let mut app = desktop_app();
    app.dispatch(NavRequest::ToggleView);
    assert_eq!(app.nav.mode, ViewMode::Single);

    let mut visited = vec![app.nav.current];
    for _ in 0..PAGE_COUNT {
        app.handle_key(key(KeyCode::Right));
        visited.push(app.nav.current);
    }
    assert_eq!(visited, vec![0, 1, 2, 3, 4, 5, 6, 7, 7]);

    for _ in 0..PAGE_COUNT {
        app.handle_key(key(KeyCode::Left));
    }
    assert_eq!(app.nav.current, 0);
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.nav.current, 0, "prev at the cover is a no-op");
}

#[test]
fn book_mode_walks_cover_spreads_and_back() {
    let mut app = desktop_app();
    assert_eq!(app.nav.mode, ViewMode::Book);

    let mut visited = vec![app.nav.current];
    loop {
        let before = app.nav.current;
        app.handle_key(key(KeyCode::Right));
        if app.nav.current == before {
            break;
        }
        visited.push(app.nav.current);
    }
    assert_eq!(visited, vec![0, 1, 3, 5, 7]);

    let mut back = vec![app.nav.current];
    loop {
        let before = app.nav.current;
        app.handle_key(key(KeyCode::Left));
        if app.nav.current == before {
            break;
        }
        back.push(app.nav.current);
    }
    assert_eq!(back, vec![7, 5, 3, 1, 0]);
}

#[test]
fn resize_flips_the_gate_both_ways() {
    let mut app = App::new();

    // 80 columns is far below the desktop threshold.
    app.handle_resize(80, 40);
    assert!(app.narrow);

    // Navigation is not evaluated while gated.
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.nav.current, 0);

    // Widening the terminal re-mounts the controller.
    app.handle_resize(160, 48);
    assert!(!app.narrow);
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.nav.current, 1);
}

#[test]
fn gate_boundary_sits_exactly_at_the_threshold() {
    assert!(is_narrow(Viewport::new(1023.0, 800.0)));
    assert!(!is_narrow(Viewport::new(1024.0, 800.0)));
}

#[test]
fn scale_is_finite_for_every_terminal_size() {
    let canvas = LogicalSize { width: 1000.0, height: 1000.0 };
    for cols in [0u16, 1, 80, 120, 500] {
        for rows in [0u16, 1, 24, 60, 200] {
            let scale = compute_scale(Viewport::from_cells(cols, rows), canvas);
            assert!(scale.is_finite() && scale > 0.0, "{cols}x{rows} -> {scale}");
        }
    }
}

#[tokio::test]
async fn generating_from_the_form_produces_a_report() {
    let mut app = desktop_app();
    app.config.report_delay_ms = 1;

    // Jump to the audit page, focus the form, type a name, submit.
    app.handle_key(key(KeyCode::Char('6')));
    app.handle_key(key(KeyCode::Char('i')));
    assert!(app.input_active);
    for c in "Acme".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    assert!(app.is_generating, "submission must raise the loading flag");

    pump(&mut app).await;

    let report = app.report.as_ref().expect("report should be present");
    assert!(report.executive_summary.contains("Acme"));
    assert!(report.scores.ux <= 100);
    assert!(report.scores.technical <= 100);
    assert!(report.scores.accessibility <= 100);
    assert!(!report.ux_findings.is_empty());
    assert!(!report.tech_findings.is_empty());
}

#[tokio::test]
async fn whitespace_submission_is_inert() {
    let mut app = desktop_app();
    app.handle_key(key(KeyCode::Char('6')));
    app.handle_key(key(KeyCode::Char('i')));
    for _ in 0..3 {
        app.handle_key(key(KeyCode::Char(' ')));
    }
    app.handle_key(key(KeyCode::Enter));

    assert!(!app.is_generating, "blank input must not start a generation");
    assert!(app.report.is_none());
    assert!(app.error_message.is_none());
}

#[tokio::test]
async fn export_command_round_trips_the_report() {
    let mut app = desktop_app();
    app.config.report_delay_ms = 1;
    app.handle_key(key(KeyCode::Char('6')));
    app.handle_key(key(KeyCode::Char('i')));
    for c in "Acme".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    pump(&mut app).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acme.json");

    app.handle_key(key(KeyCode::Char(':')));
    for c in format!("export {}", path.display()).chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));

    assert!(app.error_message.is_none(), "export should succeed");
    let restored = pitchbook::report::import_report(&path).unwrap();
    assert_eq!(restored.report.product_name, "Acme");
}

#[test]
fn toggling_view_mode_mid_deck_keeps_spreads_consistent() {
    let mut app = desktop_app();
    app.dispatch(NavRequest::ToggleView); // Single
    app.handle_key(key(KeyCode::Char('4')));
    app.handle_key(key(KeyCode::Char('v'))); // back to Book, snaps 4 -> 3
    assert_eq!(app.nav.mode, ViewMode::Book);
    assert_eq!(app.nav.current, 3);

    // The active spread shows pages 3 and 4 and nothing else.
    let visible: Vec<usize> = (0..app.deck.len())
        .filter(|&i| app.placement_for(i).is_visible())
        .collect();
    assert_eq!(visible, vec![3, 4]);
}
