//! Interactive prompt where the user can choose yes or no

use crate::{
    error::Result,
    utils::{is_abort_event, next_key, print_input_icon, print_state_icon, restore, PromptState},
    Prompt,
};
use async_trait::async_trait;
use crossterm::{
    cursor,
    event::{EventStream, KeyCode, KeyEvent, KeyModifiers},
    queue,
    style::{style, Attribute, Color, Print, PrintStyledContent, Stylize},
    terminal::{enable_raw_mode, Clear, ClearType},
};
use std::fmt;
use std::io::{stdout, Write};

/// Interactive prompt where the user can choose yes or no
///
/// Use <kbd>y</kbd>/<kbd>n</kbd> to answer the prompt.
/// If default/initial is set <kbd>enter</kbd> will submit that value.
///
/// # Examples
///
/// ```rust,ignore
/// use chained_prompts::{confirm::ConfirmPrompt, Prompt};
/// let mut prompt = ConfirmPrompt::new("Are you sure?");
///
/// match prompt.run().await {
///     Ok(Some(true)) => println!("You were sure!"),
///     Ok(Some(false)) => println!("You were not sure!"),
///     Ok(None) => println!("Prompt was aborted!"),
///     Err(e) => println!("Prompt failed: {}", e),
/// }
/// ```
#[derive(Default)]
pub struct ConfirmPrompt {
    message: String,
    state: PromptState,
    answer: bool,
    initial: Option<bool>,
}
impl fmt::Debug for ConfirmPrompt {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("ConfirmPrompt")
            .field("message", &self.message)
            .field("initial", &self.initial)
            .finish()
    }
}
impl ConfirmPrompt {
    /// Returns a ConfirmPrompt ready to be run
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display to the user before the prompt
    pub fn new<S>(message: S) -> ConfirmPrompt
    where
        S: Into<String>,
    {
        ConfirmPrompt {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set default/initial answer
    pub fn set_initial(mut self, initial: bool) -> ConfirmPrompt {
        self.initial = Some(initial);
        self
    }

    fn hint(&self) -> &'static str {
        match self.initial {
            Some(true) => "(Y/n)",
            Some(false) => "(y/N)",
            None => "(y/n)",
        }
    }

    fn answered(&mut self, answer: bool) {
        self.answer = answer;
        self.state = PromptState::Success;
    }

    async fn drive(&mut self) -> Result<Option<bool>> {
        let mut reader = EventStream::new();

        self.display()?;

        loop {
            let event = next_key(&mut reader).await?;
            self.handle_key_event(event);

            self.display()?;

            match self.state {
                PromptState::Aborted => return Ok(None),
                PromptState::Success => return Ok(Some(self.answer)),
                _ => (),
            }
        }
    }
}
#[async_trait]
impl Prompt<bool> for ConfirmPrompt {
    /// Runs the prompt
    ///
    /// Stops either when the user selects an option, an error occurs,
    /// or the prompt is aborted by the user using CTRL+c, CTRL+d or ESC.
    async fn run(&mut self) -> Result<Option<bool>> {
        enable_raw_mode()?;
        let outcome = self.drive().await;
        restore(outcome)
    }
    fn display(&mut self) -> crossterm::Result<()> {
        let mut stdout = stdout();

        queue!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
            print_state_icon(&self.state),
            Print(" "),
            PrintStyledContent(style(&self.message).attribute(Attribute::Bold)),
            Print(" "),
            print_input_icon(&self.state),
        )?;
        match self.state {
            PromptState::Success => {
                queue!(stdout, Print(if self.answer { "yes" } else { "no" }))?;
            }
            PromptState::Aborted => {}
            _ => queue!(stdout, PrintStyledContent(style(self.hint()).with(Color::DarkGrey)))?,
        }
        if self.state.is_done() {
            queue!(stdout, Print("\n\r"), cursor::Show)?;
        }
        stdout.flush()?;
        crossterm::Result::Ok(())
    }
    fn handle_key_event(&mut self, event: KeyEvent) {
        if is_abort_event(event) {
            self.state = PromptState::Aborted;
            return;
        }
        if event.modifiers != KeyModifiers::empty() && event.modifiers != KeyModifiers::SHIFT {
            return;
        }
        match event.code {
            KeyCode::Enter => {
                if let Some(initial) = self.initial {
                    self.answered(initial);
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => self.answered(true),
            KeyCode::Char('n') | KeyCode::Char('N') => self.answered(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(prompt: &mut ConfirmPrompt, code: KeyCode) {
        prompt.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn enter_without_initial_waits() {
        let mut prompt = ConfirmPrompt::new("Proceed?");
        press(&mut prompt, KeyCode::Enter);
        assert!(!prompt.state.is_done());
    }

    #[test]
    fn enter_submits_initial() {
        let mut prompt = ConfirmPrompt::new("Proceed?").set_initial(true);
        press(&mut prompt, KeyCode::Enter);
        assert_eq!(prompt.state, PromptState::Success);
        assert!(prompt.answer);
    }

    #[test]
    fn letters_answer() {
        let mut prompt = ConfirmPrompt::new("Proceed?").set_initial(true);
        press(&mut prompt, KeyCode::Char('n'));
        assert_eq!(prompt.state, PromptState::Success);
        assert!(!prompt.answer);

        let mut prompt = ConfirmPrompt::new("Proceed?");
        prompt.handle_key_event(KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT));
        assert!(prompt.answer);
    }

    #[test]
    fn hint_follows_initial() {
        assert_eq!(ConfirmPrompt::new("?").hint(), "(y/n)");
        assert_eq!(ConfirmPrompt::new("?").set_initial(true).hint(), "(Y/n)");
        assert_eq!(ConfirmPrompt::new("?").set_initial(false).hint(), "(y/N)");
    }

    #[test]
    fn ctrl_c_aborts() {
        let mut prompt = ConfirmPrompt::new("Proceed?");
        prompt.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(prompt.state, PromptState::Aborted);
    }
}
