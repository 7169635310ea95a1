//! Suggestion dropdown rendering
//!
//! A pure function of the dropdown phase: nothing for `Idle`, `Loading` and
//! `Error`, the placeholder row for `Empty`, one row per suggestion for
//! `Results`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::widgets::popup;

use super::state::{NO_RESULTS_TEXT, SuggestPhase, SuggestState};

// Dropdown display constants
const MAX_DROPDOWN_WIDTH: usize = 60;
const BORDER_HEIGHT: u16 = 2;
const PADDING: u16 = 4;
const OFFSET_X: u16 = 2;

/// Render the dropdown below the input field.
///
/// Returns the rectangle the dropdown occupied so the caller can record it
/// for mouse hit-testing, or `None` when nothing was drawn.
pub fn render_dropdown(
    suggest: &SuggestState,
    frame: &mut Frame,
    input_area: Rect,
    max_visible: usize,
) -> Option<Rect> {
    let rows: Vec<&str> = match &suggest.phase {
        SuggestPhase::Results(items) => items.iter().map(String::as_str).collect(),
        SuggestPhase::Empty => vec![NO_RESULTS_TEXT],
        SuggestPhase::Idle | SuggestPhase::Loading | SuggestPhase::Error => return None,
    };

    // Calculate dropdown dimensions from the visible rows
    let visible_count = rows.len().min(max_visible);
    let dropdown_height = (visible_count as u16) + BORDER_HEIGHT;
    let max_text_width = rows
        .iter()
        .take(max_visible)
        .map(|row| row.width())
        .max()
        .unwrap_or(20)
        .min(MAX_DROPDOWN_WIDTH);
    let dropdown_width = (max_text_width as u16) + PADDING;

    let dropdown_area = popup::popup_below_anchor(
        input_area,
        dropdown_width,
        dropdown_height,
        OFFSET_X,
        frame.area(),
    );
    if dropdown_area.height == 0 || dropdown_area.width == 0 {
        return None;
    }

    let selectable = matches!(suggest.phase, SuggestPhase::Results(_));
    let items: Vec<ListItem> = rows
        .iter()
        .take(max_visible)
        .enumerate()
        .map(|(i, row)| {
            let line = if selectable && i == suggest.selected_index() {
                // Highlight selected row with high contrast colors
                Line::from(Span::styled(
                    format!("► {row}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if selectable {
                Line::from(Span::styled(
                    format!("  {row}"),
                    Style::default().fg(Color::White),
                ))
            } else {
                // Placeholder row, visually inert
                Line::from(Span::styled(
                    format!("  {row}"),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, dropdown_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, dropdown_area);
    Some(dropdown_area)
}
