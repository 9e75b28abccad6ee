//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution for an application directory.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemPreambleStore, HttpCompletionClient};
use crate::app::AppContext;
use crate::app::commands::{export, generate, settings};
use crate::app::config::{load_api_key, load_config};

pub use crate::app::commands::export::ExportOutcome;
pub use crate::domain::{AppError, Preamble, SessionInput, SessionMetadata};

/// Create an `AppContext` for the application directory at `root`.
fn create_context(root: &Path) -> Result<AppContext<FilesystemPreambleStore>, AppError> {
    let config = load_config(root)?;
    let store = FilesystemPreambleStore::new(config.settings_path(root));
    Ok(AppContext::new(root.to_path_buf(), config, store))
}

// =============================================================================
// Generate / Export
// =============================================================================

/// Generate a draft progress note from the session input.
///
/// The preamble is read once here and passed down. Input is validated before
/// the API key is looked up or any request is made.
pub fn generate(root: &Path, input: &SessionInput) -> Result<String, AppError> {
    input.validate()?;

    let ctx = create_context(root)?;
    let preamble = ctx.load_preamble()?;
    let api_key = load_api_key(root)?;
    let client = HttpCompletionClient::new(api_key, &ctx.config().completion)?;

    generate::execute(&client, &preamble, input)
}

/// Resolve where an export should be written. See
/// [`export::choose_destination`].
pub fn export_destination(
    root: &Path,
    output: Option<PathBuf>,
    metadata: &SessionMetadata,
    force: bool,
    confirm_overwrite: impl FnOnce(&Path) -> Result<bool, AppError>,
) -> Result<Option<PathBuf>, AppError> {
    metadata.validate()?;
    let ctx = create_context(root)?;
    export::choose_destination(output, &ctx.reports_dir(), metadata, force, confirm_overwrite)
}

/// Export `draft` into a copy of the configured template at `destination`.
pub fn export(
    root: &Path,
    draft: &str,
    metadata: &SessionMetadata,
    destination: &Path,
) -> Result<ExportOutcome, AppError> {
    let ctx = create_context(root)?;
    export::execute(draft, metadata, &ctx.template_path(), destination)
}

// =============================================================================
// Settings
// =============================================================================

/// The preamble currently in effect.
pub fn preamble(root: &Path) -> Result<Preamble, AppError> {
    create_context(root)?.load_preamble()
}

/// Replace the stored preamble.
pub fn set_preamble(root: &Path, text: &str) -> Result<Preamble, AppError> {
    let ctx = create_context(root)?;
    settings::set(ctx.preamble_store(), text)
}

/// Edit the stored preamble. Returns `None` when nothing changed.
pub fn edit_preamble(
    root: &Path,
    editor: impl FnOnce(&str) -> Result<Option<String>, AppError>,
) -> Result<Option<Preamble>, AppError> {
    let ctx = create_context(root)?;
    settings::edit(ctx.preamble_store(), editor)
}

/// Restore the built-in preamble. The flag reports whether a stored value was
/// removed.
pub fn reset_preamble(root: &Path) -> Result<(Preamble, bool), AppError> {
    let ctx = create_context(root)?;
    settings::reset(ctx.preamble_store())
}

/// Path of the settings file for `root`.
pub fn settings_path(root: &Path) -> Result<PathBuf, AppError> {
    Ok(create_context(root)?.preamble_store().path().clone())
}
