use super::*;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let area = frame.size();
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    title(frame, chunks[0], state);
    match state.current_view() {
        View::Form => form(frame, chunks[1], state),
        View::Acknowledgment => {
            form(frame, chunks[1], state);
            acknowledgment(frame, area, state);
        }
        View::Summary => summary(frame, chunks[1], state),
    }
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);
}
