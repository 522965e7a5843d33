//! Scripted prompts and recorded progress

use async_trait::async_trait;
use multi_merge_prs::error::Result;
use multi_merge_prs::progress::ProgressCallback;
use multi_merge_prs::prompt::Prompter;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Prompter answering from queues
///
/// When a queue runs dry: confirms answer with the fallback, inputs and
/// selects take their defaults, multi-selects pick nothing.
pub struct ScriptedPrompter {
    confirm_fallback: bool,
    confirms: Mutex<VecDeque<bool>>,
    inputs: Mutex<VecDeque<String>>,
    selects: Mutex<VecDeque<usize>>,
    multi_selects: Mutex<VecDeque<Vec<usize>>>,
    asked: Mutex<Vec<String>>,
    select_options: Mutex<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    fn with_fallback(confirm_fallback: bool) -> Self {
        Self {
            confirm_fallback,
            confirms: Mutex::new(VecDeque::new()),
            inputs: Mutex::new(VecDeque::new()),
            selects: Mutex::new(VecDeque::new()),
            multi_selects: Mutex::new(VecDeque::new()),
            asked: Mutex::new(Vec::new()),
            select_options: Mutex::new(Vec::new()),
        }
    }

    /// Says yes to every confirmation and accepts every default
    pub fn accepting() -> Self {
        Self::with_fallback(true)
    }

    /// Says no to every confirmation
    pub fn declining() -> Self {
        Self::with_fallback(false)
    }

    /// Queue a confirmation answer
    pub fn answer_confirm(self, answer: bool) -> Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }

    /// Queue a free-text answer
    pub fn answer_input(self, answer: &str) -> Self {
        self.inputs.lock().unwrap().push_back(answer.to_string());
        self
    }

    /// Queue a single-select answer
    pub fn answer_select(self, index: usize) -> Self {
        self.selects.lock().unwrap().push_back(index);
        self
    }

    /// Queue a multi-select answer
    pub fn answer_multi_select(self, indices: Vec<usize>) -> Self {
        self.multi_selects.lock().unwrap().push_back(indices);
        self
    }

    /// Prompt messages in the order they were asked
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    /// Options offered by each select and multi-select prompt
    pub fn select_options(&self) -> Vec<Vec<String>> {
        self.select_options.lock().unwrap().clone()
    }

    fn ask(&self, message: &str) {
        self.asked.lock().unwrap().push(message.to_string());
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        self.ask(message);
        Ok(self
            .confirms
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.confirm_fallback))
    }

    fn input(&self, message: &str, default: &str) -> Result<String> {
        self.ask(message);
        Ok(self
            .inputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }

    fn select(&self, message: &str, options: &[String], default: usize) -> Result<usize> {
        self.ask(message);
        self.select_options.lock().unwrap().push(options.to_vec());
        Ok(self.selects.lock().unwrap().pop_front().unwrap_or(default))
    }

    fn multi_select(&self, message: &str, options: &[String]) -> Result<Vec<usize>> {
        self.ask(message);
        self.select_options.lock().unwrap().push(options.to_vec());
        Ok(self
            .multi_selects
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

/// Progress callback that keeps every line
#[derive(Default)]
pub struct RecordingProgress {
    messages: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingProgress {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Recorded warnings
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    async fn on_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
