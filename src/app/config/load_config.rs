//! Configuration loading from the application directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppConfig, AppError, CONFIG_FILE};

/// Load `prognote.toml` from `root`. A missing file yields the defaults.
pub fn load_config(root: &Path) -> Result<AppConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            AppConfig::parse(&content).map_err(|err| match err {
                AppError::TomlParseError(e) => {
                    AppError::config_error(format!("Invalid {}: {}", path.display(), e))
                }
                other => other,
            })
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(err) => Err(err.into()),
    }
}
