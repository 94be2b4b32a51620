//! Cancellation-aware prompt surface.
//!
//! [`Console`] wraps a [`UserInterface`] with the operations the synthesis
//! and environment flows need (`input`, `confirm`, `select`, `message`,
//! `warning`) and checks a [`CancellationToken`] around every blocking
//! prompt.

use crate::cancel::CancellationToken;
use crate::error::{Result, SkyforgeError};

use super::{
    NonInteractiveUI, Prompt, PromptOption, PromptResult, PromptType, SpinnerHandle,
    UserInterface,
};

/// Prompt surface over a [`UserInterface`].
pub struct Console<'a> {
    ui: &'a mut dyn UserInterface,
    cancel: CancellationToken,
}

impl<'a> Console<'a> {
    /// Wrap a UI with a cancellation token.
    pub fn new(ui: &'a mut dyn UserInterface, cancel: CancellationToken) -> Self {
        Self { ui, cancel }
    }

    /// The token checked at every blocking boundary.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Fail with `Cancelled` if cancellation was requested.
    pub fn check(&self) -> Result<()> {
        self.cancel.check()
    }

    /// Whether a person is answering the prompts.
    pub fn is_interactive(&self) -> bool {
        self.ui.is_interactive()
    }

    /// Report that the answer to `key` was rejected for `reason`.
    ///
    /// Interactive sessions see `reason` and may be asked again. A headless
    /// session would receive the same answer on every retry, so there the
    /// rejection is returned as [`SkyforgeError::Prompt`].
    pub fn reject(&mut self, key: &str, reason: &str) -> Result<()> {
        if self.is_interactive() {
            self.ui.message(reason);
            Ok(())
        } else {
            Err(Self::rejection(key, reason))
        }
    }

    /// The error for a rejected headless answer to `key`.
    pub fn rejection(key: &str, reason: &str) -> SkyforgeError {
        SkyforgeError::Prompt {
            key: key.to_string(),
            message: format!(
                "{} (set {} to an accepted answer)",
                reason,
                NonInteractiveUI::env_key(key)
            ),
        }
    }

    /// Display a message. Never blocks.
    pub fn message(&mut self, msg: &str) {
        self.ui.message(msg);
    }

    /// Display a non-fatal advisory.
    pub fn warning(&mut self, msg: &str) {
        self.ui.warning(msg);
    }

    /// Start a spinner on the underlying UI.
    pub fn start_spinner(&mut self, msg: &str) -> Box<dyn SpinnerHandle> {
        self.ui.start_spinner(msg)
    }

    /// Ask for free-form text.
    pub fn input(&mut self, key: &str, question: &str, help: Option<&str>) -> Result<String> {
        let mut prompt = Prompt::new(key, question, PromptType::Input);
        prompt.help = help.map(String::from);
        Ok(self.ask(&prompt)?.as_string())
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, key: &str, question: &str, default: bool) -> Result<bool> {
        let prompt =
            Prompt::new(key, question, PromptType::Confirm).with_default(default.to_string());
        match self.ask(&prompt)? {
            PromptResult::Bool(b) => Ok(b),
            PromptResult::String(s) => Ok(matches!(
                s.to_lowercase().as_str(),
                "true" | "yes" | "y" | "1"
            )),
        }
    }

    /// Ask the user to pick one of `labels`, returning its index.
    pub fn select(
        &mut self,
        key: &str,
        question: &str,
        labels: &[String],
        default: Option<usize>,
    ) -> Result<usize> {
        let options = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| PromptOption {
                label: label.clone(),
                value: idx.to_string(),
            })
            .collect();
        let mut prompt = Prompt::new(key, question, PromptType::Select { options });
        prompt.default = default.map(|idx| idx.to_string());

        let answer = self.ask(&prompt)?.as_string();
        match answer.trim().parse::<usize>() {
            Ok(idx) if idx < labels.len() => Ok(idx),
            _ => Err(SkyforgeError::Prompt {
                key: key.to_string(),
                message: format!("'{}' is not one of the {} options", answer, labels.len()),
            }),
        }
    }

    fn ask(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.cancel.check()?;
        let result = match self.ui.prompt(prompt) {
            Err(e) if e.is_cancelled() => {
                self.cancel.cancel();
                return Err(SkyforgeError::Cancelled);
            }
            other => other?,
        };
        self.cancel.check()?;
        tracing::debug!(key = %prompt.key, "prompt answered");
        Ok(result)
    }
}
