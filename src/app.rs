//! Application state and event handling.
//!
//! A single [`App`] owns every piece of mutable UI state: the navigation
//! snapshot, the derived viewport scale, the audit form, modal messages, and
//! the channel that async report generation reports back on. All mutation
//! goes through named handlers called from the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::async_tasks;
use crate::deck::{Deck, Slide};
use crate::error::Result;
use crate::nav::{placement, NavRequest, NavState, Placement, ViewMode};
use crate::report::{self, AuditReport};
use crate::scale::{self, Viewport};

// Define messages for async communication
/// Updates delivered from spawned tasks back to the controller.
#[derive(Debug)]
pub enum AppUpdate {
    /// A report generation finished. `seq` identifies the request so a
    /// superseded completion can be discarded.
    ReportReady {
        /// Sequence number of the generation this result belongs to.
        seq: u64,
        /// Outcome of the generation.
        result: Result<AuditReport>,
    },
}

/// Top-level application state.
pub struct App {
    /// The immutable slide registry.
    pub deck: Deck,
    /// Current navigation snapshot.
    pub nav: NavState,
    /// Viewport in logical units, updated on every resize.
    pub viewport: Viewport,
    /// Scale fitting the current canvas into the viewport.
    pub scale: f32,
    /// Whether the narrow-terminal gate is active.
    pub narrow: bool,
    /// Audit form input buffer.
    pub product_input: String,
    /// Whether keystrokes go to the audit form.
    pub input_active: bool,
    /// Whether a report generation is in flight.
    pub is_generating: bool,
    /// Latest generated report, replaced wholesale by the next one.
    pub report: Option<AuditReport>,
    /// Global command bar buffer.
    pub global_command_buffer: String,
    /// Whether the global command bar is active.
    pub is_global_command_mode: bool,
    /// Blocking error modal text.
    pub error_message: Option<String>,
    /// Blocking status modal text.
    pub status_message: Option<String>,
    /// Whether the help modal is shown.
    pub show_help: bool,
    /// Set when the app should exit after the current tick.
    pub should_quit: bool,
    /// Loaded configuration.
    pub config: Config,
    /// Sender cloned into spawned generation tasks.
    pub async_task_tx: mpsc::Sender<AppUpdate>,
    async_task_rx: mpsc::Receiver<AppUpdate>,
    generation_seq: u64,
}

impl App {
    /// Build the app with a zero-size viewport; the first resize event (sent
    /// by `main` before the loop starts) establishes real dimensions.
    #[must_use]
    pub fn new() -> Self {
        // Load configuration (fallback to default on error)
        let config = Config::load().unwrap_or_default();

        // Create the async channel
        let (async_task_tx, async_task_rx) = mpsc::channel(async_tasks::CHANNEL_BUFFER_SIZE);

        let viewport = Viewport::new(0.0, 0.0);
        let nav = NavState::default();

        Self {
            deck: Deck::standard(),
            nav,
            viewport,
            scale: scale::scale_for_mode(viewport, nav.mode),
            narrow: scale::is_narrow(viewport),
            product_input: String::new(),
            input_active: false,
            is_generating: false,
            report: None,
            global_command_buffer: String::new(),
            is_global_command_mode: false,
            error_message: None,
            status_message: None,
            show_help: false,
            should_quit: false,
            config,
            async_task_tx,
            async_task_rx,
            generation_seq: 0,
        }
    }

    /// Whether the main loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request a clean exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Recompute viewport-derived state from a terminal size in cells.
    ///
    /// Subscribed to every resize event, not evaluated once: the gate and
    /// the scale both track the live terminal.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::from_cells(cols, rows);
        self.narrow = scale::is_narrow(self.viewport);
        self.refresh_scale();
    }

    fn refresh_scale(&mut self) {
        self.scale = scale::scale_for_mode(self.viewport, self.nav.mode);
    }

    /// Apply a navigation request through the reducer. Out-of-range requests
    /// leave the state untouched.
    pub fn dispatch(&mut self, request: NavRequest) {
        let next = self.nav.apply(request, self.deck.len());
        if next != self.nav {
            tracing::debug!(
                "Navigate {:?}: page {} -> {} ({:?})",
                request,
                self.nav.current,
                next.current,
                next.mode
            );
        }
        self.nav = next;
        // Mode toggles change the canvas width, so the scale moves with them.
        self.refresh_scale();
    }

    /// Placement of `index` under the current navigation state.
    #[must_use]
    pub fn placement_for(&self, index: usize) -> Placement {
        placement(index, self.nav, self.deck.len())
    }

    /// The slide at the current index.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.nav.current)
    }

    /// Whether the audit page is on screen (alone or as part of a spread).
    #[must_use]
    pub fn audit_visible(&self) -> bool {
        self.placement_for(self.deck.audit_index()).is_visible()
    }

    /// Route a key event to the right handler.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // While the gate is active the controller is not mounted; only exit
        // keys are honored so the terminal is never stuck.
        if self.narrow {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                self.quit();
            }
            return;
        }

        // First, check if help modal is shown
        if self.show_help {
            if key.code == KeyCode::Esc || key.code == KeyCode::F(1) || key.code == KeyCode::Char('?') {
                self.show_help = false;
            }
            return; // Don't process other keys while help is displayed
        }

        // Check if we need to dismiss an error or status message
        if self.error_message.is_some() {
            if key.code == KeyCode::Esc || key.code == KeyCode::Enter {
                self.error_message = None;
            }
            return; // Don't process other keys while error is displayed
        }
        if self.status_message.is_some() {
            if key.code == KeyCode::Esc || key.code == KeyCode::Enter {
                self.status_message = None;
            }
            return;
        }

        // Then, handle global commands
        if self.is_global_command_mode {
            self.handle_global_command_input(key);
            return;
        }

        // Form input steals everything printable
        if self.input_active {
            self.handle_form_input(key);
            return;
        }

        // Global help shortcut (? or F1)
        if key.code == KeyCode::F(1) || key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        // Check for global shortcuts
        if key.code == KeyCode::Char(':') {
            self.is_global_command_mode = true;
            self.global_command_buffer.clear();
            return;
        }

        self.handle_deck_input(key);
    }

    fn handle_deck_input(&mut self, key: KeyEvent) {
        match key.code {
            // Audit page affordances, only while the page is on screen
            KeyCode::Char('i') | KeyCode::Char('e') if self.audit_visible() => {
                self.input_active = true;
            }
            KeyCode::Char('g') if self.audit_visible() => {
                self.try_generate();
            }
            KeyCode::Char('y') if self.audit_visible() => {
                self.copy_scheduling_link();
            }

            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => {
                self.dispatch(NavRequest::Next);
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.dispatch(NavRequest::Prev);
            }
            KeyCode::Home | KeyCode::Char('c') => {
                self.dispatch(NavRequest::JumpTo(0));
            }
            KeyCode::End => {
                self.dispatch(NavRequest::JumpTo(self.deck.last_index()));
            }
            KeyCode::Char('v') => {
                self.dispatch(NavRequest::ToggleView);
            }
            KeyCode::Enter => {
                // Enter follows the slide's own forward affordance, so the
                // call-to-action page returns to the cover like its footer says.
                if let Some(affordance) = self.current_slide().and_then(|s| s.forward) {
                    self.dispatch(affordance.request);
                }
            }
            KeyCode::Char('q') => {
                self.quit();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = c.to_digit(10) {
                    self.dispatch(NavRequest::JumpTo(index as usize));
                }
            }
            _ => {}
        }
    }

    /// Handle input while the audit form is focused.
    fn handle_form_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_active = false;
            }
            KeyCode::Enter => {
                self.input_active = false;
                self.try_generate();
            }
            KeyCode::Backspace => {
                self.product_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.product_input.push(c);
            }
            _ => {}
        }
    }

    fn handle_global_command_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.is_global_command_mode = false;
                self.global_command_buffer.clear();
            }
            KeyCode::Enter => {
                self.execute_global_command();
                self.is_global_command_mode = false;
                self.global_command_buffer.clear();
            }
            KeyCode::Backspace => {
                self.global_command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.global_command_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Execute the buffered `:` command.
    pub fn execute_global_command(&mut self) {
        let buffer = self.global_command_buffer.clone();
        match buffer.as_str() {
            "q" | "quit" => {
                self.quit();
            }
            "h" | "help" => {
                self.show_help = true;
            }
            "cover" => {
                self.dispatch(NavRequest::JumpTo(0));
            }
            "book" => {
                if self.nav.mode == ViewMode::Single {
                    self.dispatch(NavRequest::ToggleView);
                }
            }
            "single" => {
                if self.nav.mode == ViewMode::Book {
                    self.dispatch(NavRequest::ToggleView);
                }
            }
            "export" => {
                self.export_report(None);
            }
            _ if buffer.starts_with("export ") => {
                let path = buffer[7..].trim().to_string();
                let path = (!path.is_empty()).then(|| PathBuf::from(path));
                self.export_report(path);
            }
            _ => {}
        }
    }

    /// Start a report generation for the current form input.
    ///
    /// Blank input performs no state change at all: no loading flag, no
    /// spawn, no modal. A non-blank submission supersedes any in-flight
    /// generation; only the newest result will be surfaced.
    pub fn try_generate(&mut self) {
        let name = self.product_input.trim().to_string();
        if name.is_empty() {
            return;
        }

        self.is_generating = true;
        self.generation_seq += 1;
        let seq = self.generation_seq;
        let delay = Duration::from_millis(self.config.report_delay_ms);
        let tx_clone = self.async_task_tx.clone(); // Clone sender for the task

        tracing::debug!("Generating audit report for {name:?} (seq {seq})");

        // Spawn the async task using tokio::spawn
        tokio::spawn(async move {
            let result = report::generate(&name, delay).await;
            if let Err(_e) = tx_clone.send(AppUpdate::ReportReady { seq, result }).await {
            }
        });
    }

    /// Drain one pending async update, if any.
    pub fn handle_updates(&mut self) {
        match self.async_task_rx.try_recv() {
            Ok(AppUpdate::ReportReady { seq, result }) => {
                if seq != self.generation_seq {
                    // Superseded by a newer request; that one still owns the
                    // loading flag.
                    tracing::debug!("Dropping stale report result (seq {seq})");
                    return;
                }
                self.is_generating = false;
                match result {
                    Ok(generated) => {
                        self.report = Some(generated);
                    }
                    Err(e) => {
                        self.error_message = Some(format!("Failed to generate report: {e}"));
                    }
                }
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                // Channel disconnected - could log this if needed
            }
        }
    }

    /// Copy the scheduling link to the system clipboard.
    pub fn copy_scheduling_link(&mut self) {
        let url = self.config.scheduling_url.clone();
        let copied = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(url))
            .map_err(|e| crate::error::Error::Clipboard(e.to_string()));
        match copied {
            Ok(()) => {
                self.status_message =
                    Some(format!("Scheduling link copied: {}", self.config.scheduling_url));
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Export the latest report as JSON.
    pub fn export_report(&mut self, path: Option<PathBuf>) {
        let Some(generated) = &self.report else {
            self.status_message = Some("No report to export yet".to_string());
            return;
        };

        let path = path.unwrap_or_else(|| {
            let slug = generated
                .product_name
                .to_lowercase()
                .replace(|c: char| !c.is_alphanumeric(), "-");
            PathBuf::from(format!("{slug}-audit.json"))
        });

        match report::export_report(generated, &path) {
            Ok(()) => {
                self.status_message = Some(format!("Exported: {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {e}"));
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::nav::SpreadSlot;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn desktop_app() -> App {
        let mut app = App::new();
        app.handle_resize(160, 48);
        app
    }

    #[test]
    fn resize_below_threshold_activates_gate() {
        let mut app = App::new();
        app.handle_resize(80, 40);
        assert!(app.narrow);
        app.handle_resize(160, 48);
        assert!(!app.narrow);
    }

    #[test]
    fn gate_swallows_navigation_but_not_quit() {
        let mut app = App::new();
        app.handle_resize(80, 40);
        let before = app.nav;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.nav, before);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn navigation_keys_drive_the_reducer() {
        let mut app = desktop_app();
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.nav.current, 1);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.nav.current, 0);
        app.handle_key(key(KeyCode::Char('6')));
        assert_eq!(app.nav.current, 6);
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.nav.current, 0);
    }

    #[test]
    fn toggle_key_snaps_even_interior_page() {
        let mut app = desktop_app();
        app.handle_key(key(KeyCode::Char('v'))); // Book -> Single
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.nav.current, 4);
        app.handle_key(key(KeyCode::Char('v'))); // Single -> Book snaps
        assert_eq!(app.nav.current, 3);
        assert_eq!(
            app.placement_for(4).slot,
            Some(SpreadSlot::Right),
            "page 4 should be the right page of the active spread"
        );
    }

    #[test]
    fn toggle_view_mode_rescales_the_canvas() {
        let mut app = desktop_app();
        // Make the viewport width-bound so the canvas width dominates.
        app.handle_resize(200, 200);
        let book_scale = app.scale;
        app.dispatch(NavRequest::ToggleView);
        assert!(app.scale > book_scale);
    }

    #[test]
    fn enter_follows_the_slide_affordance() {
        let mut app = desktop_app();
        app.handle_key(key(KeyCode::Enter)); // cover opens the deck
        assert_eq!(app.nav.current, 1);
        app.dispatch(NavRequest::JumpTo(app.deck.audit_index()));
        app.handle_key(key(KeyCode::Enter)); // CTA returns to cover
        assert_eq!(app.nav.current, 0);
    }

    #[test]
    fn blank_generate_changes_nothing() {
        let mut app = desktop_app();
        app.product_input = "   ".to_string();
        app.try_generate();
        assert!(!app.is_generating);
        assert!(app.report.is_none());
        assert!(app.error_message.is_none());
    }

    #[test]
    fn form_keys_only_work_when_audit_page_is_visible() {
        let mut app = desktop_app();
        app.handle_key(key(KeyCode::Char('i')));
        assert!(!app.input_active, "cover must not focus the form");
        app.dispatch(NavRequest::JumpTo(app.deck.audit_index()));
        app.handle_key(key(KeyCode::Char('i')));
        assert!(app.input_active);
        app.handle_key(key(KeyCode::Char('A')));
        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.product_input, "A");
    }

    #[test]
    fn audit_page_visible_from_spread_left_page() {
        let mut app = desktop_app();
        // Book mode: spread (5, 6) shows the audit page while current is 5.
        app.dispatch(NavRequest::JumpTo(5));
        assert!(app.audit_visible());
        app.handle_key(key(KeyCode::Char('i')));
        assert!(app.input_active);
    }

    #[tokio::test]
    async fn generation_round_trip_through_the_channel() {
        let mut app = desktop_app();
        app.config.report_delay_ms = 1;
        app.product_input = "Acme".to_string();
        app.try_generate();
        assert!(app.is_generating);

        for _ in 0..100 {
            app.handle_updates();
            if !app.is_generating {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert!(!app.is_generating, "loading flag must clear");
        let generated = app.report.expect("report should be present");
        assert!(generated.executive_summary.contains("Acme"));
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let mut app = desktop_app();
        app.config.report_delay_ms = 1;
        app.product_input = "First".to_string();
        app.try_generate();
        app.product_input = "Second".to_string();
        app.try_generate();

        for _ in 0..100 {
            app.handle_updates();
            if !app.is_generating && app.report.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let generated = app.report.expect("newest report should win");
        assert_eq!(generated.product_name, "Second");
    }

    #[test]
    fn command_bar_switches_modes() {
        let mut app = desktop_app();
        app.handle_key(key(KeyCode::Char(':')));
        assert!(app.is_global_command_mode);
        for c in "single".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.nav.mode, ViewMode::Single);
        assert!(!app.is_global_command_mode);
    }

    #[test]
    fn export_without_report_is_a_status_not_an_error() {
        let mut app = desktop_app();
        app.export_report(None);
        assert!(app.status_message.is_some());
        assert!(app.error_message.is_none());
    }
}
