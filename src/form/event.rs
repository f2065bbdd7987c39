//! Event registration form.

use super::rules::Rule;
use super::schema::{Condition, FieldSpec, FormSchema};
use super::FormKind;

pub const ATTENDING_ANSWERS: &[&str] = &["No", "Yes"];

/// Build the event registration schema.
///
pub fn schema() -> FormSchema {
    FormSchema::new(
        FormKind::EventRegistration,
        "Event Registration",
        vec![
            FieldSpec::text("name", "Name").rule(Rule::Required("Name is required")),
            FieldSpec::text("email", "Email")
                .rule(Rule::Required("Email is required"))
                .rule(Rule::Email("Email is not valid")),
            FieldSpec::text("age", "Age")
                .rule(Rule::Required("Age is required"))
                .rule(Rule::PositiveNumber("Age must be a number greater than 0")),
            FieldSpec::choice("attendingWithGuest", "Attending with a guest?", ATTENDING_ANSWERS)
                .default_value("No"),
            FieldSpec::text("guestName", "Guest Name")
                .shown_when(Condition::any_of("attendingWithGuest", &["Yes"]))
                .rule(Rule::Required("Guest name is required")),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{submit, validate, FieldValue, FieldValues};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (*k, FieldValue::text(*v)))
            .collect()
    }

    fn valid() -> FieldValues {
        values(&[
            ("name", "Ada"),
            ("email", "ada@x.com"),
            ("age", "30"),
            ("attendingWithGuest", "No"),
        ])
    }

    #[test]
    fn test_valid_registration_has_no_errors() {
        let input = valid();
        assert!(validate(&schema(), &input).is_empty());
        let record = submit(&schema(), &input).unwrap();
        assert_eq!(record.values(), &input);
    }

    #[test]
    fn test_generated_registrations_are_valid() {
        for _ in 0..20 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let age = (1..120u32).fake::<u32>().to_string();
            let input = values(&[
                ("name", name.as_str()),
                ("email", email.as_str()),
                ("age", age.as_str()),
                ("attendingWithGuest", "No"),
            ]);
            assert!(validate(&schema(), &input).is_empty(), "{:?}", input);
        }
    }

    #[test]
    fn test_invalid_registration_reports_each_field() {
        let input = values(&[
            ("name", ""),
            ("email", "bad"),
            ("age", "-1"),
            ("attendingWithGuest", "No"),
        ]);
        let errors = validate(&schema(), &input);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is not valid"));
        assert_eq!(errors.get("age"), Some("Age must be a number greater than 0"));
        assert_eq!(errors.get("guestName"), None);
    }

    #[test]
    fn test_each_missing_required_field_reports_only_itself() {
        let cases = [
            ("name", "Name is required"),
            ("email", "Email is required"),
            ("age", "Age is required"),
        ];
        for (field, message) in cases {
            let input = valid().with(field, FieldValue::text(""));
            let errors = validate(&schema(), &input);
            assert_eq!(errors.len(), 1, "{}", field);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn test_whitespace_only_input_is_present() {
        let input = valid().with("name", FieldValue::text("   "));
        assert!(validate(&schema(), &input).is_empty());

        let input = valid()
            .with("email", FieldValue::text("  "))
            .with("age", FieldValue::text(" "));
        let errors = validate(&schema(), &input);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("Email is not valid"));
        assert_eq!(errors.get("age"), Some("Age must be a number greater than 0"));
    }

    #[test]
    fn test_non_numeric_age() {
        let input = valid().with("age", FieldValue::text("thirty"));
        let errors = validate(&schema(), &input);
        assert_eq!(errors.get("age"), Some("Age must be a number greater than 0"));
    }

    #[test]
    fn test_guest_name_required_only_with_guest() {
        let with_guest = valid().with("attendingWithGuest", FieldValue::text("Yes"));
        let errors = validate(&schema(), &with_guest);
        assert_eq!(errors.get("guestName"), Some("Guest name is required"));
        assert_eq!(errors.len(), 1);

        let without_guest = with_guest.with("attendingWithGuest", FieldValue::text("No"));
        assert!(validate(&schema(), &without_guest).is_empty());

        let named = with_guest.with("guestName", FieldValue::text("Charles"));
        assert!(validate(&schema(), &named).is_empty());
    }
}
