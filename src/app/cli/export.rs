//! Export command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use super::form::{self, MetadataArgs};
use crate::app::api;
use crate::domain::{AppError, SessionMetadata};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Draft text file to export (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    draft: PathBuf,
    #[command(flatten)]
    metadata: MetadataArgs,
    #[command(flatten)]
    target: ExportTarget,
}

/// Where the report goes.
#[derive(Args, Debug, Default)]
pub struct ExportTarget {
    /// Report path (default: <reports dir>/<Client_Name>_Session_<N>.docx)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Overwrite an existing report without asking
    #[arg(short, long)]
    force: bool,
}

pub fn run_export(root: &Path, args: ExportArgs) -> Result<(), AppError> {
    let interactive = form::is_interactive();
    let draft = form::read_text_source(&args.draft)?;
    if draft.trim().is_empty() {
        return Err(AppError::NothingToExport);
    }

    let Some(metadata) = args.metadata.resolve(interactive)? else {
        return Ok(());
    };
    export_draft(root, &draft, &metadata, args.target, interactive)
}

pub(super) fn export_draft(
    root: &Path,
    draft: &str,
    metadata: &SessionMetadata,
    target: ExportTarget,
    interactive: bool,
) -> Result<(), AppError> {
    let destination = api::export_destination(root, target.output, metadata, target.force, |path| {
        form::confirm_overwrite(path, interactive)
    })?;
    let Some(destination) = destination else {
        println!("ℹ️ Export cancelled; nothing was written");
        return Ok(());
    };

    let outcome = api::export(root, draft, metadata, &destination)?;
    if !outcome.missing_sections.is_empty() {
        let headings: Vec<&str> =
            outcome.missing_sections.iter().map(|section| section.heading()).collect();
        println!("⚠️  Sections not found in draft (left empty): {}", headings.join(", "));
    }
    println!("✅ Report successfully saved to: {}", outcome.path.display());
    Ok(())
}
