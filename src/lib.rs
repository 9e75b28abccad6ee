//! prognote: turn raw session notes into a formatted progress note and fill
//! the Word template with it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ExportOutcome, edit_preamble, export, export_destination, generate, preamble, reset_preamble,
    set_preamble,
};
pub use domain::{AppError, Preamble, Section, SectionMap, SessionInput, SessionMetadata};
