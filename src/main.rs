use anyhow::{Context, Result};
use clap::ArgMatches;
use forms_tui::app::App;
use forms_tui::cli;
use forms_tui::config::Config;
use forms_tui::form::FormKind;
use std::io::Read;
use std::{fs, io, process};

fn main() -> Result<()> {
    let matches = cli::build().get_matches();
    match matches.subcommand() {
        ("check", Some(sub)) => run_check(sub),
        _ => run_tui(&matches),
    }
}

/// Validate values from a file or stdin and exit non-zero on any error.
///
fn run_check(matches: &ArgMatches) -> Result<()> {
    let form: FormKind = matches.value_of("form").unwrap_or_default().parse()?;
    let input = match matches.value_of("INPUT") {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let errors = cli::check(form, &input)?;
    print!("{}", cli::report(&errors));
    if !errors.is_empty() {
        process::exit(1);
    }
    Ok(())
}

/// Open the interactive form and print the submitted record on exit.
///
fn run_tui(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    let form = match matches.value_of("form") {
        Some(name) => name.parse()?,
        None => config.default_form.unwrap_or_default(),
    };
    if let Some(record) = App::start(&config, form)? {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}
