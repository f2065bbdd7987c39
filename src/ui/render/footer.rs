use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the footer: a mode badge, key hints and the latest status message.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (mode, color, hints) = match state.current_view() {
        View::Form => (
            " EDIT ",
            theme.footer_edit,
            "Tab/↓ next  ⇧Tab/↑ prev  ←/→/Space choose  Enter submit  F2 log  Esc quit",
        ),
        View::Acknowledgment => (" DONE ", theme.footer_summary, "Enter continue"),
        View::Summary => (" SUMMARY ", theme.footer_summary, "y copy  F2 log  q quit"),
    };

    let mut spans = vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(hints, styling::muted_text_style(theme)),
    ];
    if let Some(status) = state.get_status() {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(status, styling::normal_text_style(theme)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}
