use crate::state::{State, StateError, View};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
/// The poll thread owns the only sender, so the channel disconnects when it
/// stops and `handle_next` returns an error instead of blocking.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    #[cfg(test)]
    fn from_receiver(rx: mpsc::Receiver<Event<KeyEvent>>) -> Self {
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::F(2), _) => {
            state.toggle_log();
            return true;
        }
        _ => {}
    }
    match state.current_view() {
        View::Form => handle_form_key(key, state),
        View::Acknowledgment => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                debug!("Processing acknowledgment event '{:?}'...", key);
                state.dismiss_acknowledgment();
            }
            true
        }
        View::Summary => handle_summary_key(key, state),
    }
}

fn handle_form_key(key: KeyEvent, state: &mut State) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::Enter, _) => {
            debug!("Processing submit event '{:?}'...", key);
            state.submit();
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            state.next_field();
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            state.previous_field();
        }
        (KeyCode::Left, _) => {
            state.cycle_option(false);
        }
        (KeyCode::Right, _) => {
            state.cycle_option(true);
        }
        (KeyCode::Backspace, _) => {
            state.remove_char();
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.add_char(c);
        }
        _ => {}
    }
    true
}

fn handle_summary_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('y') => match copy_summary(state) {
            Ok(_) => {
                info!("Copied summary to clipboard");
                state.set_status("Copied summary to clipboard");
            }
            Err(e) => {
                error!("Failed to copy summary: {}", e);
                state.set_status(e.to_string());
            }
        },
        _ => {}
    }
    true
}

fn copy_summary(state: &State) -> Result<(), StateError> {
    let text = state.summary_text()?;
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| StateError::Clipboard(e.to_string()))?;
    ctx.set_contents(text)
        .map_err(|e| StateError::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormKind;
    use crate::ui::Theme;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle_key(press(KeyCode::Char(c)), state));
        }
    }

    #[test]
    fn test_ctrl_c_exits_from_any_view() {
        let mut state = State::new(FormKind::EventRegistration, Theme::default(), false);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(key, &mut state));
    }

    #[test]
    fn test_q_is_typed_into_form() {
        let mut state = State::new(FormKind::EventRegistration, Theme::default(), false);
        type_text(&mut state, "quinn");
        assert_eq!(state.session().values().text("name"), "quinn");
    }

    #[test]
    fn test_shifted_characters_are_typed() {
        let mut state = State::new(FormKind::EventRegistration, Theme::default(), false);
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        handle_key(key, &mut state);
        assert_eq!(state.session().values().text("name"), "A");
    }

    #[test]
    fn test_f2_toggles_log() {
        let mut state = State::new(FormKind::JobApplication, Theme::default(), false);
        handle_key(press(KeyCode::F(2)), &mut state);
        assert!(state.is_log_visible());
    }

    #[test]
    fn test_full_registration_flow() {
        let mut state = State::new(FormKind::EventRegistration, Theme::default(), false);
        type_text(&mut state, "Ada");
        handle_key(press(KeyCode::Tab), &mut state);
        type_text(&mut state, "ada@x.com");
        handle_key(press(KeyCode::Tab), &mut state);
        type_text(&mut state, "30");
        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.current_view(), View::Acknowledgment);

        // Keys other than Enter/Esc leave the modal in place
        handle_key(press(KeyCode::Char('x')), &mut state);
        assert_eq!(state.current_view(), View::Acknowledgment);

        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.current_view(), View::Summary);
        assert!(!handle_key(press(KeyCode::Char('q')), &mut state));
    }

    #[test]
    fn test_handle_next_errors_once_sender_is_gone() {
        let mut state = State::new(FormKind::EventRegistration, Theme::default(), false);
        let (tx, rx) = mpsc::channel();
        let handler = Handler::from_receiver(rx);
        tx.send(Event::Tick).unwrap();
        drop(tx);
        assert!(handler.handle_next(&mut state).unwrap());
        assert!(handler.handle_next(&mut state).is_err());
    }

    #[test]
    fn test_esc_quits_form() {
        let mut state = State::new(FormKind::EventRegistration, Theme::default(), false);
        assert!(!handle_key(press(KeyCode::Esc), &mut state));
    }
}
