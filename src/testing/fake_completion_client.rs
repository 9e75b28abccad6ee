use crate::domain::AppError;
use crate::ports::CompletionClient;
use std::cell::RefCell;

/// Completion client returning a canned response and recording prompts.
pub struct FakeCompletionClient {
    pub prompts: RefCell<Vec<String>>,
    response: Result<String, String>,
}

impl FakeCompletionClient {
    pub fn responding(text: impl Into<String>) -> Self {
        Self { prompts: RefCell::new(vec![]), response: Ok(text.into()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { prompts: RefCell::new(vec![]), response: Err(message.into()) }
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match &self.response {
            Ok(text) => Ok(text.trim().to_string()),
            Err(message) => Err(AppError::CompletionFailed { message: message.clone(), status: None }),
        }
    }
}
