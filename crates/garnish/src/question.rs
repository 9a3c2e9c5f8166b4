//! Interactive prompts.
//!
//! Questions read answers through the [`TerminalIo`] trait so prompt logic
//! can be tested against a [`MockTerminal`] with scripted responses.
//! Validation failures re-ask in a loop; EOF cancels; non-interactive
//! sessions fall back to the default answer when one exists.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::QuestionError;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIo {
    /// Check if stdin is a terminal.
    fn is_interactive(&self) -> bool;

    /// Write a prompt to stdout.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read a line from stdin. An empty string (no trailing newline)
    /// signals EOF.
    fn read_line(&self) -> io::Result<String>;

    /// Read a line without echoing it.
    fn read_hidden(&self) -> io::Result<String> {
        self.read_line()
    }
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIo for RealTerminal {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        print!("{}", prompt);
        io::stdout().flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }

    fn read_hidden(&self) -> io::Result<String> {
        console::Term::stdout().read_secure_line()
    }
}

/// Mock terminal for testing prompts.
#[derive(Debug)]
pub struct MockTerminal {
    interactive: bool,
    responses: Vec<String>,
    response_index: AtomicUsize,
    written: Mutex<Vec<String>>,
}

impl MockTerminal {
    /// Simulate a non-interactive session (piped stdin).
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            responses: vec![],
            response_index: AtomicUsize::new(0),
            written: Mutex::new(vec![]),
        }
    }

    /// An interactive session answering with one response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// An interactive session answering with responses in sequence.
    ///
    /// Useful for testing retry scenarios. Once responses run out the
    /// terminal signals EOF.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            interactive: true,
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
            written: Mutex::new(vec![]),
        }
    }

    /// Simulate immediate EOF (Ctrl+D).
    pub fn eof() -> Self {
        Self::with_responses(Vec::<String>::new())
    }

    /// Everything written to the prompt so far, concatenated.
    pub fn written(&self) -> String {
        self.written.lock().map(|w| w.concat()).unwrap_or_default()
    }
}

impl TerminalIo for MockTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        if let Ok(mut written) = self.written.lock() {
            written.push(prompt.to_string());
        }
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(index) {
            // Real read_line keeps the newline.
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}

type Validator<T> = Box<dyn Fn(&str) -> Result<T, String>>;

/// A free-text question with an optional default and validator.
///
/// The validator turns the raw answer into the final value; re-asking on
/// failure is handled by [`Question::ask`].
pub struct Question<T> {
    prompt: String,
    default: Option<T>,
    validator: Validator<T>,
    hidden: bool,
    max_attempts: Option<usize>,
}

impl Question<String> {
    /// A question whose answer is the raw trimmed line.
    pub fn new(prompt: impl Into<String>) -> Self {
        Question {
            prompt: prompt.into(),
            default: None,
            validator: Box::new(|answer| Ok(answer.to_string())),
            hidden: false,
            max_attempts: None,
        }
    }
}

impl<T: Clone> Question<T> {
    /// A question whose answer passes through `validator`.
    pub fn with_validator(
        prompt: impl Into<String>,
        validator: impl Fn(&str) -> Result<T, String> + 'static,
    ) -> Self {
        Question {
            prompt: prompt.into(),
            default: None,
            validator: Box::new(validator),
            hidden: false,
            max_attempts: None,
        }
    }

    /// The answer when the user just presses Enter, or when the session
    /// is not interactive.
    pub fn default_answer(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    /// Read the answer without echoing (passwords).
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Give up after this many failed validations instead of re-asking
    /// forever.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    /// Ask the question, re-asking until an answer validates. Rejection
    /// messages go back through the prompt stream.
    pub fn ask(&self, terminal: &dyn TerminalIo) -> Result<T, QuestionError> {
        self.ask_with(terminal, &mut |message| {
            terminal.write_prompt(&format!("{}\n", message))?;
            Ok(())
        })
    }

    /// Like [`Question::ask`], but rejection messages go through
    /// `report_error` so a caller can render them with its own styling.
    pub fn ask_with(
        &self,
        terminal: &dyn TerminalIo,
        report_error: &mut dyn FnMut(&str) -> Result<(), QuestionError>,
    ) -> Result<T, QuestionError> {
        if !terminal.is_interactive() {
            return self.default.clone().ok_or(QuestionError::NotInteractive);
        }

        let mut attempts = 0;
        loop {
            terminal.write_prompt(&self.prompt)?;
            let line = if self.hidden {
                terminal.read_hidden()?
            } else {
                terminal.read_line()?
            };
            if line.is_empty() {
                return Err(QuestionError::Cancelled);
            }

            let answer = line.trim();
            if answer.is_empty() {
                if let Some(default) = &self.default {
                    return Ok(default.clone());
                }
            }

            match (self.validator)(answer) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    attempts += 1;
                    if let Some(max) = self.max_attempts {
                        if attempts >= max {
                            return Err(QuestionError::Validation(message));
                        }
                    }
                    report_error(&message)?;
                }
            }
        }
    }
}

/// A yes/no question.
///
/// Accepts `y`/`yes`/`n`/`no` case-insensitively; an empty answer takes
/// the default. The prompt suffix shows which side the default is on.
pub struct ConfirmationQuestion {
    prompt: String,
    default: bool,
}

impl ConfirmationQuestion {
    pub fn new(prompt: impl Into<String>, default: bool) -> Self {
        ConfirmationQuestion {
            prompt: prompt.into(),
            default,
        }
    }

    pub fn ask(&self, terminal: &dyn TerminalIo) -> Result<bool, QuestionError> {
        self.question().ask(terminal)
    }

    /// See [`Question::ask_with`].
    pub fn ask_with(
        &self,
        terminal: &dyn TerminalIo,
        report_error: &mut dyn FnMut(&str) -> Result<(), QuestionError>,
    ) -> Result<bool, QuestionError> {
        self.question().ask_with(terminal, report_error)
    }

    fn question(&self) -> Question<bool> {
        let suffix = if self.default { "[Y/n]" } else { "[y/N]" };
        Question::with_validator(
            format!("{} {} ", self.prompt, suffix),
            |answer: &str| match answer.to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err("Please answer y or n".to_string()),
            },
        )
        .default_answer(self.default)
    }
}

/// A pick-one question over a fixed list of choices.
///
/// Answers may be a zero-based index or a choice name (case-insensitive).
pub struct ChoiceQuestion {
    prompt: String,
    choices: Vec<String>,
    default: Option<usize>,
}

impl ChoiceQuestion {
    pub fn new(
        prompt: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        ChoiceQuestion {
            prompt: prompt.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Index of the choice taken when the user just presses Enter.
    pub fn default_choice(mut self, index: usize) -> Self {
        self.default = Some(index);
        self
    }

    pub fn ask(&self, terminal: &dyn TerminalIo) -> Result<String, QuestionError> {
        self.question().ask(terminal)
    }

    /// See [`Question::ask_with`].
    pub fn ask_with(
        &self,
        terminal: &dyn TerminalIo,
        report_error: &mut dyn FnMut(&str) -> Result<(), QuestionError>,
    ) -> Result<String, QuestionError> {
        self.question().ask_with(terminal, report_error)
    }

    fn question(&self) -> Question<String> {
        let mut menu = format!("{}\n", self.prompt);
        for (index, choice) in self.choices.iter().enumerate() {
            menu.push_str(&format!("  [{}] {}\n", index, choice));
        }
        menu.push_str("> ");

        let choices = self.choices.clone();
        let mut question = Question::with_validator(menu, move |answer: &str| {
            if let Ok(index) = answer.parse::<usize>() {
                if let Some(choice) = choices.get(index) {
                    return Ok(choice.clone());
                }
            }
            choices
                .iter()
                .find(|choice| choice.eq_ignore_ascii_case(answer))
                .cloned()
                .ok_or_else(|| format!("\"{}\" is not a valid choice", answer))
        });
        if let Some(index) = self.default {
            if let Some(choice) = self.choices.get(index) {
                question = question.default_answer(choice.clone());
            }
        }
        question
    }
}
