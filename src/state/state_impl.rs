use super::error::StateError;
use super::form::{cycle_choice, display_value, pop_char, push_char, toggle_option};
use super::navigation::View;
use crate::form::{
    FieldKind, FieldSpec, FieldValue, FormKind, FormSession, SubmitOutcome, SubmittedRecord,
};
use crate::ui::Theme;
use log::*;

/// Houses data representative of application state.
///
pub struct State {
    session: FormSession,
    focused_field: Option<&'static str>, // Name of the focused field
    option_cursor: usize,                // Cursor inside a checklist
    acknowledgment_pending: bool,        // Success modal still on screen
    show_log: bool,
    status: Option<String>,
    theme: Theme,
}

impl State {
    /// Return a new state for the given form.
    ///
    pub fn new(form: FormKind, theme: Theme, show_log: bool) -> Self {
        let session = FormSession::new(form.schema());
        let focused_field = session.visible_fields().first().map(|f| f.name);
        State {
            session,
            focused_field,
            option_cursor: 0,
            acknowledgment_pending: false,
            show_log,
            status: None,
            theme,
        }
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the view to render.
    ///
    pub fn current_view(&self) -> View {
        if !self.session.is_submitted() {
            View::Form
        } else if self.acknowledgment_pending {
            View::Acknowledgment
        } else {
            View::Summary
        }
    }

    /// Return the submitted record, if any.
    ///
    pub fn record(&self) -> Option<&SubmittedRecord> {
        self.session.record()
    }

    pub fn visible_fields(&self) -> Vec<&FieldSpec> {
        self.session.visible_fields()
    }

    /// Return the index of the focused field among the visible fields.
    ///
    pub fn focused_index(&self) -> usize {
        let fields = self.visible_fields();
        self.focused_field
            .and_then(|name| fields.iter().position(|f| f.name == name))
            .unwrap_or(0)
    }

    pub fn focused_field(&self) -> Option<&FieldSpec> {
        self.visible_fields().get(self.focused_index()).copied()
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    /// Move focus to the next visible field, wrapping at the end.
    ///
    pub fn next_field(&mut self) -> &mut Self {
        let names = self.visible_names();
        if !names.is_empty() {
            let next = (self.focused_index() + 1) % names.len();
            self.focus(names[next]);
        }
        self
    }

    /// Move focus to the previous visible field, wrapping at the start.
    ///
    pub fn previous_field(&mut self) -> &mut Self {
        let names = self.visible_names();
        if !names.is_empty() {
            let previous = (self.focused_index() + names.len() - 1) % names.len();
            self.focus(names[previous]);
        }
        self
    }

    /// Type a character into the focused field. A space toggles choice and
    /// checklist fields.
    ///
    pub fn add_char(&mut self, c: char) -> &mut Self {
        let Some(field) = self.focused_field().cloned() else {
            return self;
        };
        match field.kind {
            FieldKind::Text => {
                let value = push_char(self.session.values().get(field.name), c);
                self.change_field(field.name, value);
            }
            FieldKind::Choice(_) | FieldKind::Checklist(_) if c == ' ' => {
                self.toggle_option();
            }
            _ => {}
        }
        self
    }

    /// Delete the last character of the focused text field.
    ///
    pub fn remove_char(&mut self) -> &mut Self {
        if let Some(field) = self.focused_field().cloned() {
            if field.kind == FieldKind::Text {
                let value = pop_char(self.session.values().get(field.name));
                self.change_field(field.name, value);
            }
        }
        self
    }

    /// Step a choice field, or move the cursor inside a checklist.
    ///
    pub fn cycle_option(&mut self, forward: bool) -> &mut Self {
        let Some(field) = self.focused_field().cloned() else {
            return self;
        };
        match field.kind {
            FieldKind::Choice(options) => {
                let current = self.session.values().text(field.name).to_string();
                self.change_field(field.name, cycle_choice(options, &current, forward));
            }
            FieldKind::Checklist(options) if !options.is_empty() => {
                self.option_cursor = if forward {
                    (self.option_cursor + 1) % options.len()
                } else {
                    (self.option_cursor + options.len() - 1) % options.len()
                };
            }
            _ => {}
        }
        self
    }

    /// Toggle the checklist option under the cursor, or step a choice field
    /// forward.
    ///
    pub fn toggle_option(&mut self) -> &mut Self {
        let Some(field) = self.focused_field().cloned() else {
            return self;
        };
        match field.kind {
            FieldKind::Checklist(options) => {
                if let Some(option) = options.get(self.option_cursor) {
                    let value = toggle_option(self.session.values().get(field.name), options, option);
                    self.change_field(field.name, value);
                }
            }
            FieldKind::Choice(_) => {
                self.cycle_option(true);
            }
            FieldKind::Text => {}
        }
        self
    }

    /// Submit the form. On rejection focus jumps to the first field in error.
    ///
    pub fn submit(&mut self) -> &mut Self {
        match self.session.submit() {
            Ok(SubmitOutcome::Accepted) => {
                self.acknowledgment_pending = true;
                self.status = Some("Form submitted successfully".to_string());
            }
            Ok(SubmitOutcome::Rejected { error_count }) => {
                let first_error = self
                    .visible_names()
                    .into_iter()
                    .find(|name| self.session.errors().get(name).is_some());
                if let Some(name) = first_error {
                    self.focus(name);
                }
                self.status = Some(format!("{} field(s) need attention", error_count));
            }
            Err(e) => warn!("Submit ignored: {}", e),
        }
        self
    }

    /// Close the success modal and reveal the summary.
    ///
    pub fn dismiss_acknowledgment(&mut self) -> &mut Self {
        self.acknowledgment_pending = false;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn get_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.status = Some(status.into());
        self
    }

    /// Return label/value pairs for the fields that applied at submission.
    ///
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        let Some(record) = self.session.record() else {
            return vec![];
        };
        self.session
            .schema()
            .visible_fields(record.values())
            .map(|f| {
                let value = display_value(record.values().get(f.name), f.kind.options());
                match f.unit {
                    Some(unit) if !value.is_empty() => (f.label, format!("{} {}", value, unit)),
                    _ => (f.label, value),
                }
            })
            .collect()
    }

    /// Return the summary as plain text, one `label: value` line per field.
    ///
    pub fn summary_text(&self) -> Result<String, StateError> {
        let record = self.session.record().ok_or(StateError::NothingToCopy)?;
        let mut text = format!("{}\n", record.form().summary_title());
        for (label, value) in self.summary_lines() {
            text.push_str(&format!("{}: {}\n", label, value));
        }
        Ok(text)
    }

    fn visible_names(&self) -> Vec<&'static str> {
        self.visible_fields().iter().map(|f| f.name).collect()
    }

    fn focus(&mut self, name: &'static str) {
        if self.focused_field != Some(name) {
            self.focused_field = Some(name);
            self.option_cursor = 0;
        }
    }

    fn change_field(&mut self, name: &str, value: FieldValue) {
        if let Err(e) = self.session.change_field(name, value) {
            warn!("Failed to update field '{}': {}", name, e);
        }
        self.status = None;
    }
}
