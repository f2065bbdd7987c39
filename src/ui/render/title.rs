use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render the form title banner.
///
pub fn title(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let title = Paragraph::new(state.session().schema().title)
        .style(styling::banner_style(theme))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(title, size);
}
