//! Section carousel state.

use pinkkush_model::SectionId;

/// Top-level carousel over the fixed section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    /// Whether the auto-advance timer is declared. Toggled only by explicit
    /// user action, never by `go_to`.
    pub auto_play: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            current: 0,
            auto_play: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> SectionId {
        SectionId::from_index(self.current).unwrap_or(SectionId::Hero)
    }

    /// Fill fraction for the fixed top progress bar.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / SectionId::ALL.len() as f32
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = index;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
