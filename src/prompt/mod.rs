//! Interactive prompts
//!
//! Each call blocks until the user answers. [`DialoguerPrompter`] renders the
//! prompts in the terminal; tests script the answers instead.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// User-input service returning one answer per prompt
pub trait Prompter: Send + Sync {
    /// Yes/no question
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Free-text answer, pre-filled with `default`
    fn input(&self, message: &str, default: &str) -> Result<String>;

    /// Pick one of `options`, returning its index
    fn select(&self, message: &str, options: &[String], default: usize) -> Result<usize>;

    /// Pick any number of `options`, returning their indices
    fn multi_select(&self, message: &str, options: &[String]) -> Result<Vec<usize>>;
}

/// Terminal prompts using dialoguer
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn input(&self, message: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }

    fn select(&self, message: &str, options: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(message)
            .items(options)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn multi_select(&self, message: &str, options: &[String]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(message)
            .items(options)
            .interact()
            .map_err(prompt_error)
    }
}
