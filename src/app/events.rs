use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::suggest::SuggestPhase;

use super::mouse_click;
use super::state::App;

impl App {
    /// Handle a terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return; // Key was handled globally
        }

        // Not a global key, it belongs to the input field
        self.handle_input_key(key);
    }

    /// Handle keys that work regardless of dropdown state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Esc: close the dropdown first, quit when nothing is open
        if key.code == KeyCode::Esc {
            if self.suggest.is_visible() {
                self.suggest.dismiss();
            } else {
                self.should_quit = true;
            }
            return true;
        }

        // Enter: accept the current input and exit with output
        if key.code == KeyCode::Enter {
            self.accepted = Some(self.query().trim().to_string());
            self.should_quit = true;
            return true;
        }

        // Tab: accept the highlighted suggestion (if the dropdown is open)
        if key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.suggest.is_visible() {
                self.accept_selected();
                return true;
            }
            // Tab without a dropdown does nothing
            return true;
        }

        false // Key not handled
    }

    /// Handle keys in the input field
    fn handle_input_key(&mut self, key: KeyEvent) {
        // Dropdown navigation
        if matches!(self.suggest.phase, SuggestPhase::Results(_)) {
            match key.code {
                KeyCode::Down => {
                    self.suggest.select_next();
                    return;
                }
                KeyCode::Up => {
                    self.suggest.select_previous();
                    return;
                }
                _ => {}
            }
        }

        // Forward everything else to the textarea; an actual edit re-queries
        let before = self.query().to_string();
        self.input.textarea.input(key);
        if self.query() != before {
            self.on_query_edited();
        }
    }

    /// Handle mouse events (left click selection and dismissal)
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = self.layout_regions.region_at(mouse.column, mouse.row);
            mouse_click::handle_click(self, region, mouse);
        }
    }
}
