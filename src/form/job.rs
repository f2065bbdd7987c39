//! Job application form.

use super::rules::Rule;
use super::schema::{Condition, FieldSpec, FormSchema};
use super::FormKind;

pub const POSITIONS: &[&str] = &["Developer", "Designer", "Manager"];

pub const SKILLS: &[&str] = &["JavaScript", "CSS", "Python", "Java", "Ruby", "Other"];

/// Build the job application schema.
///
pub fn schema() -> FormSchema {
    FormSchema::new(
        FormKind::JobApplication,
        "Job Application",
        vec![
            FieldSpec::text("fullName", "Full Name").rule(Rule::Required("Full Name is required")),
            FieldSpec::text("email", "Email")
                .rule(Rule::Required("Email is required"))
                .rule(Rule::Email("Email is not valid")),
            FieldSpec::text("phoneNumber", "Phone Number")
                .rule(Rule::Required("Phone Number is required"))
                .rule(Rule::Numeric {
                    min_len: 10,
                    message: "Phone Number must be a valid number",
                }),
            FieldSpec::choice("applyingForPosition", "Applying for Position", POSITIONS)
                .rule(Rule::Required("Applying for Position is required"))
                .rule(Rule::OneOf(POSITIONS, "Applying for Position is not valid")),
            FieldSpec::text("relevantExperience", "Relevant Experience")
                .unit("years")
                .shown_when(Condition::any_of(
                    "applyingForPosition",
                    &["Developer", "Designer"],
                ))
                .rule(Rule::Required("Relevant Experience is required"))
                .rule(Rule::PositiveNumber(
                    "Relevant Experience must be a number greater than 0",
                )),
            FieldSpec::text("portfolioURL", "Portfolio URL")
                .shown_when(Condition::any_of("applyingForPosition", &["Designer"]))
                .rule(Rule::Required("Portfolio URL is required"))
                .rule(Rule::Url("Portfolio URL is not valid")),
            FieldSpec::text("managementExperience", "Management Experience")
                .shown_when(Condition::any_of("applyingForPosition", &["Manager"]))
                .rule(Rule::Required("Management Experience is required")),
            FieldSpec::checklist("additionalSkills", "Additional Skills", SKILLS)
                .rule(Rule::AnyChecked("At least one additional skill must be selected")),
            FieldSpec::text("preferredInterviewTime", "Preferred Interview Time (YYYY-MM-DDTHH:MM)")
                .rule(Rule::Required("Preferred Interview Time is required"))
                .rule(Rule::DateTime("Preferred Interview Time is not valid")),
        ],
    )
}
