use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Return a rectangle of the given percentage size centered inside `area`.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Choose the range of items to show so that `focused` stays on screen,
/// given each item's height and the space available.
///
pub fn visible_window(heights: &[u16], focused: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }
    let focused = focused.min(heights.len() - 1);
    let mut start = 0;
    loop {
        let mut used = 0u16;
        let mut end = start;
        while end < heights.len() && used + heights[end] <= available {
            used += heights[end];
            end += 1;
        }
        if focused < end || start == focused {
            return (start, end.max(start + 1));
        }
        start += 1;
    }
}
