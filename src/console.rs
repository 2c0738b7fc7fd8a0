//! Terminal implementation of the cloudkit output surface.

use cloudkit::console::Console;
use cloudkit::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

use crate::ui;

/// Dialoguer-backed console for interactive sessions.
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn choose(&self, prompt: &str, options: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn prompt_line(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn info(&self, message: &str) {
        ui::info(message);
    }

    fn error(&self, message: &str) {
        ui::error(message);
    }
}
