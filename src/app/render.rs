use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::suggest;

use super::state::App;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Search input on top; the dropdown overlays the area below it
        let layout = Layout::vertical([
            Constraint::Length(3), // Input field is fixed 3 lines
            Constraint::Min(0),    // Remaining space for the dropdown overlay
        ])
        .split(frame.area());

        let input_area = layout[0];

        // Render the input field
        frame.render_widget(&self.input.textarea, input_area);

        // Render the dropdown and record where everything landed for
        // mouse hit-testing
        let dropdown_area =
            suggest::render_dropdown(&self.suggest, frame, input_area, self.max_visible);
        self.layout_regions.input = Some(input_area);
        self.layout_regions.dropdown = dropdown_area;
    }
}
