//! Interactive prompt that accepts text input

use crate::{
    error::Result,
    renderer::{InputKind, ValidateHook, Verdict},
    utils::{is_abort_event, next_key, print_input_icon, print_state_icon, restore, Figures, PromptState},
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
use std::cmp;
use std::fmt;
use std::io::{stdout, Write};

/// Interactive prompt that accepts text input
///
/// Every submitted answer goes through the [`ValidateHook`]. A rejected
/// answer stays in the input with the message shown below it. With a default
/// set, submitting an empty input submits the default instead.
///
/// # Examples
///
/// ```rust,ignore
/// use chained_prompts::{text::TextPrompt, Prompt};
/// let mut prompt = TextPrompt::new("What is your name?").with_default("Bob");
/// match prompt.run().await {
///     Ok(Some(s)) => println!("You wrote: {}", s),
///     Ok(None) => println!("Prompt was aborted!"),
///     Err(e) => println!("Prompt failed: {}", e),
/// }
/// ```
#[derive(Default)]
pub struct TextPrompt {
    message: String,
    state: PromptState,
    input: String,
    /// In characters, not bytes
    cursor: usize,
    kind: InputKind,
    default: Option<String>,
    hook: ValidateHook,
    error: Option<String>,
}
impl fmt::Debug for TextPrompt {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("TextPrompt")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("hook", &self.hook)
            .finish()
    }
}
impl TextPrompt {
    /// Returns a TextPrompt ready to be run
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display to the user before the prompt
    pub fn new<S>(message: S) -> TextPrompt
    where
        S: Into<String>,
    {
        TextPrompt {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Mask typed letters (password or invisible)
    pub fn with_kind(mut self, kind: InputKind) -> TextPrompt {
        self.kind = kind;
        self
    }

    /// Answer submitted when the user submits an empty input
    pub fn with_default<S>(mut self, default: S) -> TextPrompt
    where
        S: Into<String>,
    {
        self.default = Some(default.into());
        self
    }

    /// Validation every submitted answer has to pass
    pub fn with_hook(mut self, hook: ValidateHook) -> TextPrompt {
        self.hook = hook;
        self
    }

    /// What a submit right now would answer
    fn answer(&self) -> String {
        match &self.default {
            Some(default) if self.input.is_empty() => default.clone(),
            _ => self.input.clone(),
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or_else(|| self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    async fn drive(&mut self) -> Result<Option<String>> {
        let mut reader = EventStream::new();

        self.display()?;

        loop {
            let event = next_key(&mut reader).await?;
            self.handle_key_event(event);

            if self.state == PromptState::Validate {
                let answer = self.answer();
                match self.hook.call(&answer).await {
                    Ok(Verdict::Accept) => {
                        self.input = answer;
                        self.state = PromptState::Success;
                    }
                    Ok(Verdict::Reject(msg)) => {
                        self.error = Some(msg);
                        self.state = PromptState::Running;
                    }
                    Err(fault) => {
                        self.state = PromptState::Aborted;
                        self.display()?;
                        return Err(fault.into());
                    }
                }
            }

            self.display()?;

            match self.state {
                PromptState::Aborted => return Ok(None),
                PromptState::Success => return Ok(Some(self.input.clone())),
                _ => (),
            }
        }
    }
}
#[async_trait]
impl Prompt<String> for TextPrompt {
    /// Runs the prompt
    ///
    /// Stops either when an answer passes validation, an error occurs,
    /// a validator faults, or the prompt is aborted by the user using
    /// CTRL+c, CTRL+d or ESC.
    async fn run(&mut self) -> Result<Option<String>> {
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
        )?;
        let hint = match &self.default {
            Some(default) if !self.state.is_done() => format!("({}) ", self.kind.transform(default)),
            _ => String::default(),
        };
        queue!(
            stdout,
            PrintStyledContent(style(&hint).with(Color::DarkGrey)),
            print_input_icon(&self.state),
        )?;
        if !self.state.is_done() {
            let input_column = (2
                + self.message.chars().count()
                + hint.chars().count()
                + 3
                + (self.cursor * self.kind.cursor_mult())
                + 1) as u16;

            queue!(stdout, Print(self.kind.transform(&self.input)))?;
            match &self.error {
                None => queue!(stdout, cursor::MoveToColumn(input_column))?,
                Some(msg) => queue!(
                    stdout,
                    Print(format!("\n\r{} ", Figures::PointerSmall.as_str())),
                    PrintStyledContent(style(msg).with(Color::Red).attribute(Attribute::Italic)),
                    cursor::MoveToPreviousLine(1),
                    cursor::MoveToColumn(input_column)
                )?,
            }
        } else {
            if self.state == PromptState::Success {
                queue!(stdout, Print(self.kind.transform(&self.input)))?;
            }
            queue!(stdout, Print("\n\r"))?;
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
            KeyCode::Enter => self.state = PromptState::Validate,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let index = self.byte_index();
                    self.input.remove(index);
                    self.error = None;
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = cmp::min(self.cursor + 1, self.char_count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.char_count();
            }
            KeyCode::Char(c) => {
                let index = self.byte_index();
                self.input.insert(index, c);
                self.cursor += 1;
                self.error = None;
            }
            _ => {}
        }
    }
}
