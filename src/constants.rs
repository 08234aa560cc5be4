//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Logical canvas dimensions the slides are authored against.
pub mod canvas {
    /// Width of a single page in logical units.
    pub const PAGE_WIDTH: f32 = 1699.0;

    /// Height of a page in logical units.
    pub const PAGE_HEIGHT: f32 = 1960.0;
}

/// Viewport scaling constants.
pub mod scaling {
    /// Safety margin applied to the raw fit scale so pages never touch the edges.
    pub const MARGIN: f32 = 0.95;

    /// Scale used when the viewport reports degenerate dimensions.
    pub const FALLBACK_SCALE: f32 = 0.5;

    /// Approximate width of one terminal cell in logical units.
    pub const CELL_WIDTH: f32 = 10.0;

    /// Approximate height of one terminal cell in logical units.
    pub const CELL_HEIGHT: f32 = 20.0;
}

/// Responsive gate constants.
pub mod gate {
    /// Minimum logical viewport width treated as a desktop terminal.
    pub const MIN_DESKTOP_WIDTH: f32 = 1024.0;
}

/// Deck layout constants.
pub mod deck {
    /// Total number of slides, covers included.
    pub const PAGE_COUNT: usize = 8;

    /// Index of the call-to-action slide hosting the audit form.
    pub const AUDIT_PAGE: usize = 6;
}

/// Mock report generation constants.
pub mod report {
    /// Default simulated generation delay in milliseconds.
    pub const DEFAULT_DELAY_MS: u64 = 1500;
}

/// Outbound link constants.
pub mod links {
    /// Default scheduling page copied to the clipboard from the call-to-action slide.
    pub const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/samsudeenafolabi/30min";
}

/// Async task constants.
pub mod async_tasks {
    /// Channel buffer size for async task communication.
    pub const CHANNEL_BUFFER_SIZE: usize = 10;
}
