//! Host collaborator implementations for headless runs.

use pinkkush_core::ScrollSink;
use pinkkush_model::SectionId;

/// Scroll sink that reports requests through the logger instead of moving
/// a viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScrollSink;

impl ScrollSink for LogScrollSink {
    fn scroll_to(&mut self, section: SectionId) {
        log::info!("[Scroll] bringing #{section} into view");
    }
}
