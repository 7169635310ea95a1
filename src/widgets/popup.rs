use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect directly below an anchor, clamped to the frame.
pub fn popup_below_anchor(
    anchor: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
    frame_area: Rect,
) -> Rect {
    let popup_x = anchor.x.saturating_add(x_offset);
    let popup_y = anchor.y.saturating_add(anchor.height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.width.saturating_sub(popup_x)),
        height: height.min(frame_area.height.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
