use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::Result;

/// Validation callback: `Err` carries the message shown before re-prompting.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive questions asked by the configurator.
pub trait Prompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Asks for free text, re-prompting until `validate` accepts it.
    fn input(&self, message: &str, default: Option<&str>, validate: Validator<'_>)
    -> Result<String>;
}

/// Terminal prompts rendered with dialoguer.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input
            .validate_with(|value: &String| validate(value))
            .interact_text()?;
        Ok(answer)
    }
}
