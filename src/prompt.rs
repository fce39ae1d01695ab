//! Interactive confirmation
//!
//! All confirmations go through the `Prompter` trait so the install flow can
//! be driven without a terminal (`--yes`, tests).

use inquire::Confirm;

use crate::error::{EnvxError, Result};

/// Asks the operator yes/no questions
pub trait Prompter {
    /// Ask for confirmation; `default` applies when the operator just presses Enter
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Prompts on the controlling terminal
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::new(message)
            .with_default(default)
            .with_help_message("Press Enter to accept the default")
            .prompt()
            .map_err(|e| EnvxError::PromptFailed {
                reason: e.to_string(),
            })
    }
}

/// Answers yes to every question (`--yes`)
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _message: &str, _default: bool) -> Result<bool> {
        Ok(true)
    }
}
