use std::io;

use thiserror::Error;

/// Library-wide error type for prognote operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// No API key in the environment or the `.env` file.
    #[error("{0} is not set. Export it or add it to the .env file.")]
    MissingApiKey(String),

    /// One or more required form fields were left empty.
    #[error("Please fill in all fields. Missing: {}", .0.join(", "))]
    IncompleteInput(Vec<&'static str>),

    /// The completion endpoint could not produce a result.
    #[error("Something went wrong: {message}")]
    CompletionFailed { message: String, status: Option<u16> },

    /// Export requested before any content was generated.
    #[error("No generated content to export.")]
    NothingToExport,

    /// The fixed template document is missing.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The template is not a readable Word document.
    #[error("Invalid template '{path}': {reason}")]
    InvalidTemplate { path: String, reason: String },

    /// Copy, substitution, or save failed during export.
    #[error("Export failed: {0}")]
    Export(String),

    /// Document archive error.
    #[error("Document archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Interactive prompt failure.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on broad categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::IncompleteInput(_)
            | AppError::NothingToExport
            | AppError::InvalidTemplate { .. } => io::ErrorKind::InvalidInput,
            AppError::MissingApiKey(_) | AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::CompletionFailed { .. }
            | AppError::Export(_)
            | AppError::Archive(_)
            | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
