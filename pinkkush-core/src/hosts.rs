//! Host collaborator seams.
//!
//! The core never renders or scrolls anything itself; it calls these traits
//! with computed state and the embedding host does the rest.

use pinkkush_model::SectionId;

/// Scroll-into-view collaborator.
///
/// Invoked on every explicit navigation and on every auto-advance; the
/// host is expected to bring the section's anchor on screen.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSink: Send {
    fn scroll_to(&mut self, section: SectionId);
}

/// Sink that ignores scroll requests, for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScrollSink;

impl ScrollSink for NullScrollSink {
    fn scroll_to(&mut self, _section: SectionId) {}
}
