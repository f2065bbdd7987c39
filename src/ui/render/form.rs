use super::Frame;
use crate::form::{FieldKind, FieldSpec, FieldValue};
use crate::state::State;
use crate::ui::widgets::{layout, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the editable form. Only fields that currently apply are drawn.
///
pub fn form(frame: &mut Frame, size: Rect, state: &State) {
    let fields = state.visible_fields();
    let errors = state.session().errors();
    let focused = state.focused_index();

    // Fields with an error take one extra line for the message
    let heights: Vec<u16> = fields
        .iter()
        .map(|f| if errors.get(f.name).is_some() { 4 } else { 3 })
        .collect();
    let (start, end) = layout::visible_window(&heights, focused, size.height);

    let mut constraints: Vec<Constraint> = heights[start..end]
        .iter()
        .map(|h| Constraint::Length(*h))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (chunk, idx) in (start..end).enumerate() {
        let field = fields[idx];
        let is_focused = idx == focused && !state.session().is_submitted();
        let mut lines = vec![value_line(field, state, is_focused)];
        if let Some(message) = errors.get(field.name) {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                styling::error_text_style(state.get_theme()),
            )));
        }
        render_field(frame, chunks[chunk], field, lines, is_focused, state.get_theme());
    }
}

fn render_field(
    frame: &mut Frame,
    size: Rect,
    field: &FieldSpec,
    lines: Vec<Line>,
    is_focused: bool,
    theme: &Theme,
) {
    let (border_style, title) = if is_focused {
        (
            styling::active_block_border_style(theme),
            Span::styled(field.input_label(), styling::active_block_title_style()),
        )
    } else {
        (
            styling::normal_block_border_style(theme),
            Span::raw(field.input_label()),
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), size);
}

fn value_line<'a>(field: &'a FieldSpec, state: &'a State, is_focused: bool) -> Line<'a> {
    let theme = state.get_theme();
    let values = state.session().values();
    match field.kind {
        FieldKind::Text => {
            let value = values.text(field.name);
            let mut spans = if value.is_empty() {
                let hint = if is_focused { "Type to enter value..." } else { "Empty" };
                vec![Span::styled(hint, styling::muted_text_style(theme))]
            } else {
                vec![Span::styled(value, styling::normal_text_style(theme))]
            };
            if is_focused {
                spans.push(Span::styled(" █", styling::active_block_border_style(theme)));
            }
            Line::from(spans)
        }
        FieldKind::Choice(_) => {
            let value = values.text(field.name);
            let (text, style) = if value.is_empty() {
                ("Not selected", styling::muted_text_style(theme))
            } else {
                (value, styling::normal_text_style(theme))
            };
            if is_focused {
                Line::from(vec![
                    Span::styled("◂ ", styling::active_block_border_style(theme)),
                    Span::styled(text, style),
                    Span::styled(" ▸", styling::active_block_border_style(theme)),
                ])
            } else {
                Line::from(Span::styled(text, style))
            }
        }
        FieldKind::Checklist(options) => {
            let checked = |option: &str| match values.get(field.name) {
                Some(FieldValue::Group(g)) => g.get(option).copied().unwrap_or(false),
                _ => false,
            };
            let spans: Vec<Span> = options
                .iter()
                .enumerate()
                .flat_map(|(i, option)| {
                    let mark = if checked(*option) { "[x]" } else { "[ ]" };
                    let style: Style = if is_focused && i == state.option_cursor() {
                        styling::highlighted_option_style(theme)
                    } else {
                        styling::normal_text_style(theme)
                    };
                    [
                        Span::styled(format!("{} {}", mark, option), style),
                        Span::raw("  "),
                    ]
                })
                .collect();
            Line::from(spans)
        }
    }
}
