//! Input and output surface traits.
//!
//! These traits allow the core to prompt and report without depending on a
//! specific terminal implementation. The CLI provides dialoguer-backed
//! implementations; tests use the scripted doubles shipped here.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Input surface: command-line arguments and interactivity.
pub trait Input {
    /// Get a named argument supplied on the command line, if any.
    fn argument(&self, name: &str) -> Option<String>;

    /// Whether the session may prompt the user.
    fn is_interactive(&self) -> bool;
}

/// Output surface: prompts and messages.
///
/// Rendering methods are fire-and-forget; the core consumes no return
/// value from them.
pub trait Console {
    /// Ask the user to pick one of `options`, returning its index.
    fn choose(&self, prompt: &str, options: &[String]) -> Result<usize>;

    /// Ask the user a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask the user for a line of input.
    fn prompt_line(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Report an informational message.
    fn info(&self, message: &str);

    /// Report an error message.
    fn error(&self, message: &str);
}

/// Input surface backed by a fixed argument map.
///
/// The CLI builds one per command from parsed arguments; tests build them
/// directly.
#[derive(Debug, Clone, Default)]
pub struct StaticInput {
    arguments: HashMap<String, String>,
    interactive: bool,
}

impl StaticInput {
    /// Create an input surface with no arguments.
    #[must_use]
    pub fn new(interactive: bool) -> Self {
        Self {
            arguments: HashMap::new(),
            interactive,
        }
    }

    /// Add an argument (builder style). `None` values are skipped so
    /// optional clap arguments can be passed through directly.
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.arguments.insert(name.into(), value);
        }
        self
    }
}

impl Input for StaticInput {
    fn argument(&self, name: &str) -> Option<String> {
        self.arguments.get(name).cloned()
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Scripted console for tests.
///
/// Queue up the answers a test expects to give, then assert on the
/// recorded messages afterwards. Running out of scripted answers is a
/// prompt failure, which keeps tests honest about every interaction.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    choices: RefCell<VecDeque<usize>>,
    confirmations: RefCell<VecDeque<bool>>,
    lines: RefCell<VecDeque<String>>,
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    /// Create a console with no scripted answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a choice answer (index into the options).
    pub fn push_choice(&self, index: usize) {
        self.choices.borrow_mut().push_back(index);
    }

    /// Queue a confirmation answer.
    pub fn push_confirm(&self, answer: bool) {
        self.confirmations.borrow_mut().push_back(answer);
    }

    /// Queue a line answer.
    pub fn push_line(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push_back(line.into());
    }

    /// Messages reported via [`Console::info`].
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Messages reported via [`Console::error`].
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Console for ScriptedConsole {
    fn choose(&self, prompt: &str, options: &[String]) -> Result<usize> {
        let index = self
            .choices
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("unexpected choice prompt: {}", prompt)))?;
        if index >= options.len() {
            return Err(Error::Prompt(format!(
                "scripted choice {} out of range ({} options)",
                index,
                options.len()
            )));
        }
        Ok(index)
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("unexpected confirm prompt: {}", prompt)))
    }

    fn prompt_line(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        match self.lines.borrow_mut().pop_front() {
            Some(line) => Ok(line),
            None => default
                .map(str::to_string)
                .ok_or_else(|| Error::Prompt(format!("unexpected line prompt: {}", prompt))),
        }
    }

    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
