use super::Frame;
use crate::state::State;
use crate::ui::widgets::{layout, styling};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the success modal shown right after a submission is accepted.
///
pub fn acknowledgment(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let area = layout::centered_rect(50, 25, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Submitted")
        .border_style(Style::default().fg(theme.success.to_color()));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Form submitted successfully!",
            Style::default()
                .fg(theme.success.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to view the summary",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
