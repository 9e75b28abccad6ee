//! Completion client port definition.

use crate::domain::AppError;

/// Port for chat-completion operations.
pub trait CompletionClient {
    /// Send `prompt` as a single user message and return the generated text,
    /// trimmed of surrounding whitespace.
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}
