//! Command line interface.
//!
//! Defines the argument parser and the non-interactive `check` command, which
//! validates a JSON object of field values against one of the forms.

use crate::error::AppResult;
use crate::form::{validate, ErrorSet, FieldValues, FormKind};
use clap::{App, AppSettings, Arg, SubCommand};
use log::*;

/// Build the argument parser.
///
pub fn build() -> App<'static, 'static> {
    let form_arg = Arg::with_name("form")
        .short("f")
        .long("form")
        .value_name("FORM")
        .help("Form to open")
        .possible_values(&FormKind::NAMES)
        .takes_value(true);

    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(form_arg.clone())
        .subcommand(
            SubCommand::with_name("check")
                .about("Validate field values given as a JSON object")
                .arg(form_arg.required(true))
                .arg(
                    Arg::with_name("INPUT")
                        .help("JSON file to read; stdin when omitted")
                        .index(1),
                ),
        )
}

/// Parse a JSON object of field values and validate it against a form.
///
pub fn check(form: FormKind, input: &str) -> AppResult<ErrorSet> {
    let values: FieldValues = serde_json::from_str(input)?;
    debug!("Checking {} value(s) against the {} form", values.len(), form);
    Ok(validate(&form.schema(), &values))
}

/// Format an error set for the terminal, one `field: message` per line.
///
pub fn report(errors: &ErrorSet) -> String {
    if errors.is_empty() {
        return "OK\n".to_string();
    }
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}\n", field, message))
        .collect()
}
