//! Preamble persistence port definition.

use crate::domain::{AppError, Preamble};

/// Port for loading and saving the prompt preamble.
pub trait PreambleStore {
    /// Load the stored preamble, or the built-in default when none is stored.
    fn load(&self) -> Result<Preamble, AppError>;

    /// Overwrite the stored preamble.
    fn save(&self, preamble: &Preamble) -> Result<(), AppError>;

    /// Remove the stored preamble so the default applies again.
    /// Returns whether anything was removed.
    fn reset(&self) -> Result<bool, AppError>;
}
