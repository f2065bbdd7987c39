use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the read-only summary of the submitted record.
///
pub fn summary(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let label_width = state
        .summary_lines()
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = state
        .summary_lines()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:width$}  ", label, width = label_width),
                    styling::active_block_title_style().fg(theme.primary.to_color()),
                ),
                Span::styled(value, styling::normal_text_style(theme)),
            ])
        })
        .collect();

    let title = state
        .record()
        .map(|r| r.form().summary_title())
        .unwrap_or("Summary");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style(theme));
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, size);
}
