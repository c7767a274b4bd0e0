//! Drawing and key handling shared by the terminal prompts
//!
//! Public in case you want to implement your own renderer on top of crossterm

use crate::error::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers},
    style::{style, Color, PrintStyledContent, Stylize},
    terminal::disable_raw_mode,
};
use futures::StreamExt;
use std::io;

/// Figures that are used for the prompts
pub enum Figures {
    Tick,
    Cross,
    Ellipsis,
    PointerSmall,
}
impl Figures {
    #[cfg(windows)]
    pub fn as_str(&self) -> &'static str {
        match self {
            Figures::Tick => "√",
            Figures::Cross => "×",
            Figures::Ellipsis => "...",
            Figures::PointerSmall => "»",
        }
    }
    #[cfg(not(windows))]
    pub fn as_str(&self) -> &'static str {
        match self {
            Figures::Tick => "✔",
            Figures::Cross => "✖",
            Figures::Ellipsis => "…",
            Figures::PointerSmall => "›",
        }
    }
}

/// Internal state of a prompt
#[derive(Eq, PartialEq, Debug)]
pub enum PromptState {
    /// Prompt was just created (and has not yet been displayed for the first time)
    Created,
    /// Prompt is running/displaying
    Running,
    /// Prompt input needs validation
    Validate,
    /// The prompt was aborted by the user
    Aborted,
    /// The prompt completed successfully
    Success,
}
impl Default for PromptState {
    fn default() -> PromptState {
        PromptState::Created
    }
}
impl PromptState {
    pub fn is_done(&self) -> bool {
        *self == PromptState::Aborted || *self == PromptState::Success
    }
}

/// Should we abort on this event
///
/// Returns true on CTRL+c, CTRL+d and ESC
pub fn is_abort_event(event: KeyEvent) -> bool {
    match event {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            code: KeyCode::Char('c'),
            ..
        } => true,
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            code: KeyCode::Char('d'),
            ..
        } => true,
        KeyEvent {
            modifiers,
            code: KeyCode::Esc,
            ..
        } if modifiers == KeyModifiers::empty() => true,
        _ => false,
    }
}

/// Waits for the next key press, skipping every other terminal event
///
/// A closed event stream is an error, there is nobody left to answer.
pub async fn next_key(reader: &mut EventStream) -> Result<KeyEvent> {
    loop {
        match reader.next().await {
            Some(Ok(Event::Key(event))) => return Ok(event),
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e.into()),
            None => {
                return Err(
                    io::Error::new(io::ErrorKind::UnexpectedEof, "Terminal input closed").into(),
                )
            }
        }
    }
}

/// Leaves raw mode, then hands back `outcome`
///
/// The prompt's own failure wins over a failure to restore the terminal.
pub fn restore<T>(outcome: Result<T>) -> Result<T> {
    let restored = disable_raw_mode();
    let value = outcome?;
    restored?;
    Ok(value)
}

/// Prints a cross, a tick or a question mark depending on prompt state
pub fn print_state_icon(state: &PromptState) -> PrintStyledContent<&'static str> {
    PrintStyledContent(match state {
        PromptState::Aborted => style(Figures::Cross.as_str()).with(Color::Red),
        PromptState::Success => style(Figures::Tick.as_str()).with(Color::Green),
        _ => style("?").with(Color::Magenta),
    })
}

/// Prints a pointer or ellipsis depending on prompt state
pub fn print_input_icon(state: &PromptState) -> PrintStyledContent<String> {
    PrintStyledContent(
        style(match state {
            PromptState::Aborted => "".to_string(),
            PromptState::Success => format!("{} ", Figures::Ellipsis.as_str()),
            _ => format!("{} ", Figures::PointerSmall.as_str()),
        })
        .with(Color::Grey),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    #[cfg(not(windows))]
    fn write_all() {
        let figures = [
            Figures::Tick,
            Figures::Cross,
            Figures::Ellipsis,
            Figures::PointerSmall,
        ];
        let s: String = figures.iter().map(Figures::as_str).collect();
        assert_eq!(s, "✔✖…›");
    }

    #[test]
    fn abort_keys() {
        assert!(is_abort_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(is_abort_event(key(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert!(is_abort_event(key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!is_abort_event(key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_abort_event(key(KeyCode::Esc, KeyModifiers::SHIFT)));
    }

    #[test]
    fn done_states() {
        assert!(PromptState::Success.is_done());
        assert!(PromptState::Aborted.is_done());
        assert!(!PromptState::Validate.is_done());
        assert_eq!(PromptState::default(), PromptState::Created);
    }

    #[test]
    fn restore_keeps_prompt_failure() {
        let failed: Result<()> = Err(PromptError::Aborted);
        assert!(matches!(restore(failed), Err(PromptError::Aborted)));
    }
}
