//! Word template filling.
//!
//! The template is copied to the destination first; the copy is then opened,
//! its main document part rewritten, and saved over itself. The template file
//! is only ever read.

mod paragraph;

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::domain::{AppError, Replacements};

pub use paragraph::substitute_paragraphs;

/// Archive entry holding the document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Result of a successful fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOutcome {
    pub path: PathBuf,
    pub paragraphs_rewritten: usize,
}

/// Copy `template` to `destination` and replace placeholders in the copy.
///
/// On failure after the copy was made, the partial destination file is
/// removed.
pub fn fill_template(
    template: &Path,
    destination: &Path,
    replacements: &Replacements,
) -> Result<FillOutcome, AppError> {
    if !template.is_file() {
        return Err(AppError::TemplateNotFound(template.display().to_string()));
    }
    if destination.exists() && fs::canonicalize(template)? == fs::canonicalize(destination)? {
        return Err(AppError::Export(format!(
            "{} is the template itself; choose another destination",
            destination.display()
        )));
    }

    fs::copy(template, destination).map_err(|e| {
        AppError::Export(format!(
            "Failed to copy template to {}: {}",
            destination.display(),
            e
        ))
    })?;
    tracing::debug!(from = %template.display(), to = %destination.display(), "copied template");

    match substitute_in_place(destination, replacements) {
        Ok(paragraphs_rewritten) => {
            tracing::info!(
                path = %destination.display(),
                paragraphs_rewritten,
                "filled progress note template"
            );
            Ok(FillOutcome { path: destination.to_path_buf(), paragraphs_rewritten })
        }
        Err(err) => {
            if let Err(cleanup) = fs::remove_file(destination) {
                tracing::warn!(
                    path = %destination.display(),
                    error = %cleanup,
                    "could not remove partial export"
                );
            }
            Err(err)
        }
    }
}

/// Rewrite the document part of the `.docx` at `path`, keeping every other
/// entry byte-for-byte and in its original order.
fn substitute_in_place(path: &Path, replacements: &Replacements) -> Result<usize, AppError> {
    let bytes = fs::read(path)?;
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| AppError::InvalidTemplate {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut rewritten = None;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        let options = FileOptions::default().compression_method(match entry.compression() {
            CompressionMethod::Stored => CompressionMethod::Stored,
            _ => CompressionMethod::Deflated,
        });

        if entry.is_dir() {
            writer.add_directory(name, options)?;
            continue;
        }

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;

        if name == DOCUMENT_PART {
            let xml = String::from_utf8(data).map_err(|e| AppError::InvalidTemplate {
                path: path.display().to_string(),
                reason: format!("{} is not UTF-8: {}", DOCUMENT_PART, e),
            })?;
            let (updated, count) = substitute_paragraphs(&xml, replacements);
            rewritten = Some(count);
            data = updated.into_bytes();
        }

        writer.start_file(name, options)?;
        writer.write_all(&data)?;
    }

    let Some(count) = rewritten else {
        return Err(AppError::InvalidTemplate {
            path: path.display().to_string(),
            reason: format!("missing {}", DOCUMENT_PART),
        });
    };

    let buffer = writer.finish()?.into_inner();
    fs::write(path, buffer).map_err(|e| {
        AppError::Export(format!("Failed to save {}: {}", path.display(), e))
    })?;
    Ok(count)
}
