//! API key discovery: process environment first, then the `.env` file.

use std::path::Path;

use crate::domain::{API_KEY_VAR, AppError};

/// Name of the optional dotenv file in the application directory.
pub const DOTENV_FILE: &str = ".env";

/// Resolve the API key for the application directory at `root`.
pub fn load_api_key(root: &Path) -> Result<String, AppError> {
    resolve_api_key(root, |name| std::env::var(name).ok())
}

/// Resolve the API key using `env` for process lookups. The `.env` file is
/// read without modifying the process environment.
pub fn resolve_api_key(
    root: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    if let Some(key) = env(API_KEY_VAR).filter(|value| !value.trim().is_empty()) {
        return Ok(key);
    }

    let path = root.join(DOTENV_FILE);
    let entries = match dotenvy::from_path_iter(&path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return Err(AppError::MissingApiKey(API_KEY_VAR.into())),
        Err(err) => {
            return Err(AppError::config_error(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            )));
        }
    };

    for entry in entries {
        let (name, value) = entry.map_err(|err| {
            AppError::config_error(format!("Failed to parse {}: {}", path.display(), err))
        })?;
        if name == API_KEY_VAR && !value.trim().is_empty() {
            tracing::debug!(path = %path.display(), "using API key from dotenv file");
            return Ok(value);
        }
    }

    Err(AppError::MissingApiKey(API_KEY_VAR.into()))
}
