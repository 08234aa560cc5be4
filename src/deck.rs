//! The page registry: an ordered, immutable list of slides.
//!
//! Slide content is fixed at startup. Each slide carries its copy plus the
//! navigation affordances its footer advertises; the affordances resolve to
//! [`NavRequest`] values so the controller can dispatch them through the same
//! reducer as the raw navigation keys.

use crate::constants::deck;
use crate::nav::NavRequest;

/// Broad category of a slide, used for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    /// Front cover.
    Cover,
    /// Statistics / argument page.
    Stats,
    /// Process timeline page.
    Process,
    /// Closing page with the audit form and scheduling link.
    CallToAction,
    /// Back cover.
    BackCover,
}

/// A footer navigation affordance: a label and the transition it dispatches.
#[derive(Debug, Clone, Copy)]
pub struct NavAffordance {
    /// Label shown in the slide footer.
    pub label: &'static str,
    /// Transition dispatched when the affordance is activated.
    pub request: NavRequest,
}

/// One addressable screen of content in the deck.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    /// Slide category.
    pub kind: SlideKind,
    /// Headline shown at the top of the page.
    pub title: &'static str,
    /// Body copy, one entry per line; empty strings are vertical spacing.
    pub body: &'static [&'static str],
    /// Backward affordance, if the slide advertises one.
    pub back: Option<NavAffordance>,
    /// Forward affordance, if the slide advertises one.
    pub forward: Option<NavAffordance>,
}

/// The ordered slide list. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// The pitch deck: cover, six interior pages, back cover.
    #[must_use]
    pub fn standard() -> Self {
        let slides = vec![
            Slide {
                kind: SlideKind::Cover,
                title: "A UX & Technical Audit for PayAI",
                body: &["", "UxGeek ."],
                back: None,
                forward: Some(NavAffordance { label: "Open", request: NavRequest::Next }),
            },
            Slide {
                kind: SlideKind::Stats,
                title: "In November,",
                body: &[
                    "22k different people opened the PayAI website.",
                    "Sadly, over half of them leave without clicking anything.",
                    "",
                    "52%  .  They leave",
                    "",
                    "84% of them are on their phones.",
                    "18,480 people open the PayAI website on their mobile phones",
                    "and about 12k leave without clicking a button.",
                    "",
                    "Who are these users?",
                ],
                back: Some(NavAffordance { label: "Cover", request: NavRequest::Prev }),
                forward: Some(NavAffordance { label: "Next Page", request: NavRequest::Next }),
            },
            Slide {
                kind: SlideKind::Stats,
                title: "Proof of Product",
                body: &[
                    "We know they are on mobile. About 10k from X,",
                    "2k from GMGN and CoinGecko.",
                    "",
                    "They are users looking for \"Proof of Product\":",
                    "  . an item of 'live'",
                    "  . a 'slide' interactive coherence",
                    "  . a story well told",
                    "  . reviews and social proof",
                    "",
                    "otherwise, the user assumes the product doesn't exist yet.",
                    "",
                    "Hence, losing 12k potential holders and users a month",
                    "because the mobile site is asking them to find the truth.",
                ],
                back: Some(NavAffordance { label: "Prev. Page", request: NavRequest::Prev }),
                forward: Some(NavAffordance { label: "Next Page", request: NavRequest::Next }),
            },
            Slide {
                kind: SlideKind::Stats,
                title: "A subconscious disconnect",
                body: &[
                    "It is not a \"bad\" product, it is a subconscious",
                    "disconnect between the user and the interface.",
                    "",
                    "If we are launching a product for users on X,",
                    "the messaging should be fast,",
                    "the layout should be familiar,",
                    "the icons should be recognizable.",
                    "",
                    "They know the product is great, they just need",
                    "the interface to not get in the way.",
                    "",
                    "Hence, the need for a Mobile-First Audit & Fix.",
                    "",
                    "What now?",
                ],
                back: Some(NavAffordance { label: "Prev. Page", request: NavRequest::Prev }),
                forward: Some(NavAffordance { label: "Next Page", request: NavRequest::Next }),
            },
            Slide {
                kind: SlideKind::Stats,
                title: "The Mobile-First Fix.",
                body: &[
                    "100% of social traffic comes from X. These users",
                    "are on their phones, scrolling fast.",
                    "",
                    "Globally simplified copy that reads well on a",
                    "vertical screen, for users from:",
                    "  54.82%  America      13.36%  France",
                    "  12.95%  Indonesia     7.95%  Singapore",
                    "   4.93%  Germany",
                    "",
                    "Larger touch targets for 'actionable' buttons.",
                    "A slippery interaction flow.",
                    "An array of social proof/partnerships/reviews.",
                    "Active confirmation and feedbacks.",
                    "Idempotent end-points.",
                    "",
                    "Just enough of all these.",
                ],
                back: Some(NavAffordance { label: "Prev. Page", request: NavRequest::Prev }),
                forward: Some(NavAffordance { label: "Next Page", request: NavRequest::Next }),
            },
            Slide {
                kind: SlideKind::Process,
                title: "The six-week process",
                body: &[
                    "I'm Samsudeen, a design engineer.",
                    "",
                    "I'll start with a walkthrough of the product to have a",
                    "solid context and define how far the problem reaches.",
                    "",
                    "In a week, I'll design multiple low fidelity iterations",
                    "of a better performing interface, unlimited iterations",
                    "till taste.",
                    "",
                    "In another week or two, I'll design the highest fidelity",
                    "of the iteration and hand it off for staging.",
                    "",
                    "After shipping, I'll monitor performance and stay",
                    "available for implementations, for three weeks.",
                    "",
                    "Why me?",
                ],
                back: Some(NavAffordance { label: "Prev. Page", request: NavRequest::Prev }),
                forward: Some(NavAffordance { label: "Next Page", request: NavRequest::Next }),
            },
            Slide {
                kind: SlideKind::CallToAction,
                title: "Let's Build",
                body: &[
                    "The self-fulfilling prophecy of how much hard work will",
                    "go into converting the 88% increase in eyeballs to",
                    "holders and paying users is the amount of work that",
                    "went into executing this proposal.",
                    "",
                    "I used to work with YC companies, with over two years",
                    "of experience as a designer and a design engineer.",
                    "",
                    "Every day we wait is 400 new users lost.",
                ],
                back: Some(NavAffordance { label: "Prev. Page", request: NavRequest::Prev }),
                forward: Some(NavAffordance { label: "Cover", request: NavRequest::JumpTo(0) }),
            },
            Slide {
                kind: SlideKind::BackCover,
                title: "A UX & Technical Audit for PayAI",
                body: &["", "UxGeek ."],
                back: None,
                forward: Some(NavAffordance { label: "Restart", request: NavRequest::JumpTo(0) }),
            },
        ];
        Self { slides }
    }

    /// Number of slides in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Index of the last slide (the back cover).
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    /// Index of the slide hosting the audit form.
    #[must_use]
    pub const fn audit_index(&self) -> usize {
        deck::AUDIT_PAGE
    }

    /// Page-number label for interior pages; covers carry none.
    #[must_use]
    pub fn page_label(&self, index: usize) -> Option<String> {
        (index > 0 && index < self.last_index()).then(|| index.to_string())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::constants::deck::PAGE_COUNT;

    #[test]
    fn standard_deck_has_expected_shape() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), PAGE_COUNT);
        assert_eq!(deck.get(0).unwrap().kind, SlideKind::Cover);
        assert_eq!(deck.get(deck.last_index()).unwrap().kind, SlideKind::BackCover);
        assert_eq!(deck.get(deck.audit_index()).unwrap().kind, SlideKind::CallToAction);
    }

    #[test]
    fn interior_pages_advertise_both_directions() {
        let deck = Deck::standard();
        for index in 1..deck.last_index() {
            let slide = deck.get(index).unwrap();
            assert!(slide.back.is_some(), "page {index} missing back affordance");
            assert!(slide.forward.is_some(), "page {index} missing forward affordance");
        }
    }

    #[test]
    fn cta_forward_returns_to_cover() {
        let deck = Deck::standard();
        let cta = deck.get(deck.audit_index()).unwrap();
        let forward = cta.forward.unwrap();
        assert_eq!(forward.request, NavRequest::JumpTo(0));
    }

    #[test]
    fn page_labels_only_on_interior_pages() {
        let deck = Deck::standard();
        assert!(deck.page_label(0).is_none());
        assert!(deck.page_label(deck.last_index()).is_none());
        assert_eq!(deck.page_label(3).as_deref(), Some("3"));
    }
}
