//! Mouse click handling
//!
//! Routes click events: a click on a suggestion row copies it into the input,
//! a click anywhere outside the input and dropdown dismisses the dropdown.

use ratatui::crossterm::event::MouseEvent;

use crate::layout::Region;
use crate::suggest::SuggestPhase;

use super::state::App;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Dropdown) => click_dropdown(app, mouse),
        Some(Region::InputField) => {}
        // Anything else is outside both the input and the dropdown
        None => app.suggest.dismiss(),
    }
}

/// Copy the clicked row into the input field.
///
/// Only real result rows are selectable; the placeholder row is inert, and
/// clicks on the border do nothing.
fn click_dropdown(app: &mut App, mouse: MouseEvent) {
    let Some(dropdown) = app.layout_regions.dropdown else {
        return;
    };

    // Rows start inside the border
    let inner_x = dropdown.x.saturating_add(1);
    let inner_y = dropdown.y.saturating_add(1);
    let inner_width = dropdown.width.saturating_sub(2);
    let inner_height = dropdown.height.saturating_sub(2);

    if mouse.column < inner_x
        || mouse.column >= inner_x.saturating_add(inner_width)
        || mouse.row < inner_y
        || mouse.row >= inner_y.saturating_add(inner_height)
    {
        return;
    }

    let SuggestPhase::Results(items) = &app.suggest.phase else {
        return;
    };

    let index = (mouse.row - inner_y) as usize;
    if let Some(text) = items.get(index) {
        let text = text.clone();
        app.accept_suggestion(&text);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
