use std::path::PathBuf;

use crate::domain::{AppConfig, AppError, Preamble};
use crate::ports::PreambleStore;

/// Application context holding the application directory, its configuration,
/// and the preamble store.
pub struct AppContext<S: PreambleStore> {
    root: PathBuf,
    config: AppConfig,
    preamble_store: S,
}

impl<S: PreambleStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(root: PathBuf, config: AppConfig, preamble_store: S) -> Self {
        Self { root, config, preamble_store }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the preamble store.
    pub fn preamble_store(&self) -> &S {
        &self.preamble_store
    }

    /// Load the preamble once for the current operation.
    pub fn load_preamble(&self) -> Result<Preamble, AppError> {
        self.preamble_store.load()
    }

    pub fn template_path(&self) -> PathBuf {
        self.config.template_path(&self.root)
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.config.reports_dir(&self.root)
    }
}
