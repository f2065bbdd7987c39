//! Field editing helpers.
//!
//! Each helper takes the current value and returns the replacement, leaving
//! the caller to hand it to the controller.

use crate::form::FieldValue;
use std::collections::BTreeMap;

/// Append a character to a text value.
///
pub fn push_char(value: Option<&FieldValue>, c: char) -> FieldValue {
    let mut text = value.and_then(FieldValue::as_text).unwrap_or("").to_string();
    text.push(c);
    FieldValue::Text(text)
}

/// Remove the last character of a text value.
///
pub fn pop_char(value: Option<&FieldValue>) -> FieldValue {
    let mut text = value.and_then(FieldValue::as_text).unwrap_or("").to_string();
    text.pop();
    FieldValue::Text(text)
}

/// Step through the options of a choice field, wrapping at either end. An
/// unset choice steps to the first or last option.
///
pub fn cycle_choice(options: &[&str], current: &str, forward: bool) -> FieldValue {
    if options.is_empty() {
        return FieldValue::text(current);
    }
    let next = match options.iter().position(|o| *o == current) {
        Some(i) if forward => (i + 1) % options.len(),
        Some(i) => (i + options.len() - 1) % options.len(),
        None if forward => 0,
        None => options.len() - 1,
    };
    FieldValue::text(options[next])
}

/// Flip one option of a checkbox group.
///
pub fn toggle_option(value: Option<&FieldValue>, options: &[&str], option: &str) -> FieldValue {
    let mut group: BTreeMap<String, bool> = match value {
        Some(FieldValue::Group(g)) => g.clone(),
        _ => options.iter().map(|o| (o.to_string(), false)).collect(),
    };
    let checked = group.entry(option.to_string()).or_insert(false);
    *checked = !*checked;
    FieldValue::Group(group)
}

/// Render a value for read-only display. Checked options are listed in the
/// order `options` declares them.
///
pub fn display_value(value: Option<&FieldValue>, options: &[&str]) -> String {
    match value {
        Some(FieldValue::Text(s)) => s.clone(),
        Some(FieldValue::Flag(true)) => "Yes".to_string(),
        Some(FieldValue::Flag(false)) => "No".to_string(),
        Some(FieldValue::Group(g)) => {
            let is_checked = |name: &str| g.get(name).copied().unwrap_or(false);
            let mut checked: Vec<&str> =
                options.iter().copied().filter(|o| is_checked(*o)).collect();
            // Options the form does not declare go last
            checked.extend(
                g.iter()
                    .filter(|(name, c)| **c && !options.iter().any(|o| *o == name.as_str()))
                    .map(|(name, _)| name.as_str()),
            );
            if checked.is_empty() {
                "None".to_string()
            } else {
                checked.join(", ")
            }
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: &[&str] = &["Developer", "Designer", "Manager"];

    #[test]
    fn test_push_and_pop_char() {
        let value = push_char(None, 'A');
        let value = push_char(Some(&value), 'd');
        assert_eq!(value, FieldValue::text("Ad"));
        assert_eq!(pop_char(Some(&value)), FieldValue::text("A"));
        assert_eq!(pop_char(None), FieldValue::text(""));
    }

    #[test]
    fn test_cycle_choice_forward_wraps() {
        assert_eq!(cycle_choice(POSITIONS, "", true), FieldValue::text("Developer"));
        assert_eq!(cycle_choice(POSITIONS, "Designer", true), FieldValue::text("Manager"));
        assert_eq!(cycle_choice(POSITIONS, "Manager", true), FieldValue::text("Developer"));
    }

    #[test]
    fn test_cycle_choice_backward_wraps() {
        assert_eq!(cycle_choice(POSITIONS, "", false), FieldValue::text("Manager"));
        assert_eq!(cycle_choice(POSITIONS, "Developer", false), FieldValue::text("Manager"));
        assert_eq!(cycle_choice(&["No", "Yes"], "No", false), FieldValue::text("Yes"));
    }

    #[test]
    fn test_toggle_option() {
        let options = &["Ruby", "CSS"];
        let value = toggle_option(None, options, "Ruby");
        assert_eq!(display_value(Some(&value), options), "Ruby");
        let value = toggle_option(Some(&value), options, "CSS");
        assert_eq!(display_value(Some(&value), options), "Ruby, CSS");
        let value = toggle_option(Some(&value), options, "Ruby");
        assert_eq!(display_value(Some(&value), options), "CSS");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(Some(&FieldValue::text("Ada")), &[]), "Ada");
        assert_eq!(display_value(Some(&FieldValue::Flag(true)), &[]), "Yes");
        assert_eq!(
            display_value(Some(&FieldValue::unchecked_group(&["CSS"])), &["CSS"]),
            "None"
        );
        assert_eq!(display_value(None, &[]), "");
    }

    #[test]
    fn test_display_value_follows_declared_order() {
        let skills = &["JavaScript", "CSS", "Python", "Java", "Ruby", "Other"];
        let mut value = FieldValue::unchecked_group(skills);
        for skill in ["Ruby", "Java", "JavaScript", "CSS"] {
            value = toggle_option(Some(&value), skills, skill);
        }
        assert_eq!(display_value(Some(&value), skills), "JavaScript, CSS, Java, Ruby");
        assert_eq!(display_value(Some(&value), &["Ruby"]), "Ruby, CSS, Java, JavaScript");
    }
}
