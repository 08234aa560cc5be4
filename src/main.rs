//! `pitchbook` - terminal pitch-deck presenter binary.

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::{io, panic, time::Duration};

use pitchbook::app::App;
use pitchbook::error::Result;
use pitchbook::ui;

// Helper function to ensure the terminal is cleaned up on exit
fn cleanup_terminal<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup better panic handling that cleans up terminal first
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // First disable raw mode
        let _ = disable_raw_mode();
        // Try to restore terminal to normal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        // Call the original panic handler
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and seed the scaler/gate with the real terminal size before
    // the first frame; every later resize event keeps them current.
    let mut app = App::new();
    let (cols, rows) = crossterm::terminal::size()?;
    app.handle_resize(cols, rows);

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    if let Err(e) = cleanup_terminal(&mut terminal) {
        eprintln!("Error cleaning up terminal: {e:?}");
    }

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.handle_updates(); // Handle async updates first

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                event::Event::Key(key) => app.handle_key(key),
                event::Event::Resize(cols, rows) => app.handle_resize(cols, rows),
                _ => {}
            }
        } else {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(()) // Return Ok(()) after loop breaks
}
