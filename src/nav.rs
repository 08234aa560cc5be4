//! Deck navigation state machine.
//!
//! All page movement goes through a single reducer: the UI translates key
//! presses and per-slide affordances into [`NavRequest`] values and applies
//! them to an immutable [`NavState`] snapshot. Out-of-range requests are
//! no-ops, never errors.
//!
//! Book mode pairs interior pages into two-wide spreads. The cover (index 0)
//! and back cover (last index) always render alone; odd interior indices are
//! left pages and even interior indices are right pages of their spread.

/// How many pages are shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One page at a time.
    Single,
    /// Interior pages paired into spreads, covers alone.
    #[default]
    Book,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Book,
            Self::Book => Self::Single,
        }
    }

    /// Human-readable name for status lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single page",
            Self::Book => "two-page spread",
        }
    }
}

/// A navigation transition request, dispatched by key handlers and slide
/// affordances alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Advance to the next page or spread.
    Next,
    /// Return to the previous page or spread.
    Prev,
    /// Jump straight to a page index.
    JumpTo(usize),
    /// Flip between single-page and book layout.
    ToggleView,
}

/// Current position in the deck plus the active view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    /// Index of the current page, always in `[0, len)`.
    pub current: usize,
    /// Active layout mode.
    pub mode: ViewMode,
}

impl NavState {
    /// Apply a transition request against a deck of `len` pages, returning
    /// the successor state. Requests that would leave the deck are no-ops.
    #[must_use]
    pub fn apply(self, request: NavRequest, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        match request {
            NavRequest::Next => self.next(len),
            NavRequest::Prev => self.prev(len),
            NavRequest::JumpTo(index) => {
                if index < len {
                    Self { current: index, ..self }
                } else {
                    self
                }
            }
            NavRequest::ToggleView => self.toggle_view(len),
        }
    }

    fn next(self, len: usize) -> Self {
        if self.current + 1 >= len {
            return self;
        }
        let current = match self.mode {
            ViewMode::Single => self.current + 1,
            ViewMode::Book => {
                if self.current == 0 {
                    // Opening the cover lands on the first spread's left page.
                    1
                } else if self.current + 2 < len {
                    self.current + 2
                } else {
                    self.current + 1
                }
            }
        };
        Self { current, ..self }
    }

    fn prev(self, len: usize) -> Self {
        if self.current == 0 {
            return self;
        }
        let current = match self.mode {
            ViewMode::Single => self.current - 1,
            ViewMode::Book => {
                if self.current == len - 1 {
                    // Back cover returns to the last spread's left page.
                    len.saturating_sub(3)
                } else if self.current > 1 {
                    self.current - 2
                } else {
                    0
                }
            }
        };
        Self { current, ..self }
    }

    fn toggle_view(self, len: usize) -> Self {
        let mode = self.mode.toggled();
        let mut current = self.current;
        // Entering book mode from an interior right page snaps back to its
        // paired left page so the spread renders consistently. The covers are
        // deliberately left untouched.
        if mode == ViewMode::Book
            && current > 0
            && current + 1 < len
            && current % 2 == 0
        {
            current -= 1;
        }
        Self { current, mode }
    }
}

/// Layering tag for a slide relative to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    /// Part of the active page or spread.
    Current,
    /// Before the current position; stacked above later pages.
    Past,
    /// After the current position.
    Future,
}

/// Horizontal slot of a visible slide in book mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadSlot {
    /// Cover or back cover, shown alone and centered.
    Center,
    /// Left page of a spread (odd index).
    Left,
    /// Right page of a spread (even index).
    Right,
}

/// Derived render placement for one slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Whether the slide is current, past, or future.
    pub phase: PagePhase,
    /// Spread slot; `Some` only for slides visible in book mode.
    pub slot: Option<SpreadSlot>,
    /// Stacking order: earlier slides always stack above later ones.
    pub z: usize,
}

impl Placement {
    /// Whether this slide is on screen in the current state.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.phase, PagePhase::Current)
    }
}

/// Compute the placement of `index` under `nav` for a deck of `len` pages.
#[must_use]
pub fn placement(index: usize, nav: NavState, len: usize) -> Placement {
    let z = len.saturating_sub(index);
    match nav.mode {
        ViewMode::Single => {
            let phase = if index == nav.current {
                PagePhase::Current
            } else if index < nav.current {
                PagePhase::Past
            } else {
                PagePhase::Future
            };
            Placement { phase, slot: None, z }
        }
        ViewMode::Book => {
            let last = len.saturating_sub(1);
            let visible = (nav.current == 0 && index == 0)
                || (nav.current == last && index == last)
                || index == nav.current
                || (index > 0
                    && nav.current == index - 1
                    && nav.current > 0
                    && nav.current < last);
            if visible {
                let slot = if index == 0 || index == last {
                    SpreadSlot::Center
                } else if index % 2 == 1 {
                    SpreadSlot::Left
                } else {
                    SpreadSlot::Right
                };
                Placement { phase: PagePhase::Current, slot: Some(slot), z }
            } else {
                let phase = if index < nav.current {
                    PagePhase::Past
                } else {
                    PagePhase::Future
                };
                Placement { phase, slot: None, z }
            }
        }
    }
}
