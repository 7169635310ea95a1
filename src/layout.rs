//! Layout module for tracking UI component regions
//!
//! Records where components landed in the last frame so mouse events can be
//! routed by position. `region_at()` answers which component sits under a
//! screen coordinate; anything it does not match counts as "outside".

use ratatui::layout::Rect;

/// UI regions that react to mouse clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Dropdown,
}

/// Rectangles of the components rendered in the last frame
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub dropdown: Option<Rect>,
}

impl LayoutRegions {
    /// Determine which region contains the given screen position
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        // The dropdown overlays the area below the input, so test it first
        if let Some(rect) = self.dropdown
            && contains(rect, column, row)
        {
            return Some(Region::Dropdown);
        }
        if let Some(rect) = self.input
            && contains(rect, column, row)
        {
            return Some(Region::InputField);
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
