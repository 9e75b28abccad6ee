//! Preamble settings: show, replace, edit, reset.
//!
//! Every change returns the new `Preamble` value; the running pipeline never
//! sees a preamble mutated underneath it.

use crate::domain::{AppError, Preamble};
use crate::ports::PreambleStore;

/// Replace the stored preamble with `text`, trimmed of surrounding whitespace.
pub fn set<S: PreambleStore>(store: &S, text: &str) -> Result<Preamble, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::config_error(
            "Preamble must not be empty. Use `prognote settings reset` to restore the default.",
        ));
    }

    let preamble = Preamble::new(text);
    store.save(&preamble)?;
    Ok(preamble)
}

/// Edit the current preamble with `editor`.
///
/// `editor` receives the current text and returns `None` when the user aborts,
/// in which case nothing is saved.
pub fn edit<S, E>(store: &S, editor: E) -> Result<Option<Preamble>, AppError>
where
    S: PreambleStore,
    E: FnOnce(&str) -> Result<Option<String>, AppError>,
{
    let current = store.load()?;
    match editor(current.as_str())? {
        Some(text) if text.trim() == current.as_str().trim() => Ok(None),
        Some(text) => set(store, &text).map(Some),
        None => Ok(None),
    }
}

/// Remove the stored preamble. Returns the default now in effect and whether a
/// stored value was removed.
pub fn reset<S: PreambleStore>(store: &S) -> Result<(Preamble, bool), AppError> {
    let removed = store.reset()?;
    Ok((Preamble::default(), removed))
}
