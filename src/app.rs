use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::form::{FormKind, SubmittedRecord};
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tui_logger::{init_logger, set_default_level};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start the application for the given form. Returns the submitted
    /// record if the user completed the form before exiting.
    ///
    pub fn start(config: &Config, form: FormKind) -> Result<Option<SubmittedRecord>> {
        init_logger(LevelFilter::Trace).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Debug);

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using default (available: {})",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let mut app = App {
            state: State::new(form, theme, config.show_log),
        };
        info!("Opened {} form", form);

        let result = app.start_ui();
        restore_terminal()?;
        result?;

        info!("Exiting application...");
        Ok(app.state.record().cloned())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            tui_logger::move_events();
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        terminal.show_cursor()?;
        Ok(())
    }
}

/// Leave raw mode and the alternate screen.
///
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
