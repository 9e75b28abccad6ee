//! Completion request assembly.

use super::Preamble;

/// Join the preamble and the case notes with a single newline.
///
/// Both parts are used verbatim. Callers strip the notes and apply any size
/// limit the endpoint imposes.
pub fn assemble(preamble: &Preamble, notes: &str) -> String {
    let mut request = String::with_capacity(preamble.as_str().len() + 1 + notes.len());
    request.push_str(preamble.as_str());
    request.push('\n');
    request.push_str(notes);
    request
}
