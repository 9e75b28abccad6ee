//! Export: parse the draft into sections and fill the Word template.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::fill_template;
use crate::domain::{AppError, Replacements, Section, SessionMetadata, parse_sections};

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    /// Sections the draft did not contain; their placeholders were emptied.
    pub missing_sections: Vec<Section>,
    pub paragraphs_rewritten: usize,
}

/// Pick the export path.
///
/// Without an explicit `output`, the report goes to `reports_dir` under the
/// default file name. An existing file is only replaced when `force` is set
/// or `confirm_overwrite` approves; otherwise `None` is returned and nothing
/// is written.
pub fn choose_destination(
    output: Option<PathBuf>,
    reports_dir: &Path,
    metadata: &SessionMetadata,
    force: bool,
    confirm_overwrite: impl FnOnce(&Path) -> Result<bool, AppError>,
) -> Result<Option<PathBuf>, AppError> {
    let path = match output {
        Some(path) if path.extension().is_none() => path.with_extension("docx"),
        Some(path) => path,
        None => {
            fs::create_dir_all(reports_dir)?;
            reports_dir.join(metadata.default_filename())
        }
    };

    if path.exists() && !force && !confirm_overwrite(&path)? {
        tracing::info!(path = %path.display(), "overwrite declined");
        return Ok(None);
    }
    Ok(Some(path))
}

/// Fill `template` into `destination` from the draft text.
///
/// An empty draft or an incomplete form is refused before any file is
/// touched.
pub fn execute(
    draft: &str,
    metadata: &SessionMetadata,
    template: &Path,
    destination: &Path,
) -> Result<ExportOutcome, AppError> {
    let draft = draft.trim();
    if draft.is_empty() {
        return Err(AppError::NothingToExport);
    }
    metadata.validate()?;

    let sections = parse_sections(draft);
    let replacements = Replacements::resolve(metadata, &sections);
    let outcome = fill_template(template, destination, &replacements)?;

    Ok(ExportOutcome {
        path: outcome.path,
        missing_sections: sections.missing(),
        paragraphs_rewritten: outcome.paragraphs_rewritten,
    })
}
