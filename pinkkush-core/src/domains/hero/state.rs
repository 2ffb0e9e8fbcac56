//! Hero state.

/// Pointer position as percentages of the viewport, 0..=100 on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPercent {
    pub x: f32,
    pub y: f32,
}

/// Hero section state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeroState {
    /// Last normalized pointer position; the gradient focal point.
    pub pointer: PointerPercent,
}

impl HeroState {
    pub fn new() -> Self {
        Self::default()
    }
}
