//! Reedline-backed prompt helpers.
//!
//! # Responsibility
//! - Provide single-line prompts with inline validation and retry.
//! - Map editor interrupts onto a typed abort the shell can handle.
//!
//! # Invariants
//! - Validation failures re-prompt; only interrupts and input stream
//!   errors escape as `PromptAbort`.

use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};
use roster_core::ValidationError;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised when the operator interrupts a prompt or the input stream fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptAbort;

impl Display for PromptAbort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "prompt aborted")
    }
}

impl Error for PromptAbort {}

/// Plain one-line label prompt without indicators.
struct LabelPrompt {
    label: String,
}

impl Prompt for LabelPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}: ", self.label))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse search) ", prefix))
    }
}

/// Line-editor wrapper shared by all shell prompts.
pub struct Prompter {
    editor: Reedline,
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }

    /// Reads one raw line under `label`. Ctrl-C and Ctrl-D abort.
    pub fn read_line(&mut self, label: &str) -> Result<String, PromptAbort> {
        let prompt = LabelPrompt {
            label: label.to_string(),
        };
        match self.editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => Ok(line),
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => Err(PromptAbort),
            Err(_) => Err(PromptAbort),
        }
    }

    /// Re-prompts until `validate` accepts the input.
    ///
    /// With a `default`, the current value is shown in the label and an
    /// empty line returns it unchanged.
    pub fn read_validated<T>(
        &mut self,
        label: &str,
        default: Option<&str>,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<String, PromptAbort> {
        let display_label = match default {
            Some(value) => format!("{label} [{value}]"),
            None => label.to_string(),
        };

        loop {
            let line = self.read_line(&display_label)?;
            if line.is_empty() {
                if let Some(value) = default {
                    return Ok(value.to_string());
                }
            }
            match validate(&line) {
                Ok(_) => return Ok(line),
                Err(err) => println!("{err}"),
            }
        }
    }

    /// Numbered selection over `items`; returns the chosen zero-based index.
    pub fn select(&mut self, label: &str, items: &[&str]) -> Result<usize, PromptAbort> {
        loop {
            println!("{label}:");
            for (position, item) in items.iter().enumerate() {
                println!("  {}) {}", position + 1, item);
            }
            let line = self.read_line("Enter a number")?;
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=items.len()).contains(&choice) => return Ok(choice - 1),
                _ => println!("Enter a number between 1 and {}.", items.len()),
            }
        }
    }
}
