//! Application configuration loaded from `prognote.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration file name inside the application directory.
pub const CONFIG_FILE: &str = "prognote.toml";

/// Environment variable holding the completion API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Completion endpoint configuration.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// File locations, relative to the application directory unless absolute.
    #[serde(default)]
    pub paths: PathsConfig,
}

impl AppConfig {
    /// Parse configuration from TOML content and validate it.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()?;
        self.paths.validate()?;
        Ok(())
    }

    pub fn template_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.template)
    }

    pub fn settings_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.settings)
    }

    pub fn reports_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.reports_dir)
    }
}

/// Chat-completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model() }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("completion.model must not be empty"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_template")]
    pub template: PathBuf,
    #[serde(default = "default_settings")]
    pub settings: PathBuf,
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            settings: default_settings(),
            reports_dir: default_reports_dir(),
        }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("paths.template", &self.template),
            ("paths.settings", &self.settings),
            ("paths.reports_dir", &self.reports_dir),
        ] {
            if value.as_os_str().is_empty() {
                return Err(AppError::config_error(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}

fn default_template() -> PathBuf {
    PathBuf::from("Progress Note Template.docx")
}

fn default_settings() -> PathBuf {
    PathBuf::from("settings.txt")
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("Generated Reports")
}
