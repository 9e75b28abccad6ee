//! Generate command implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Args;

use super::export::{ExportTarget, export_draft};
use super::form::{self, MetadataArgs};
use crate::app::api;
use crate::domain::{AppError, SessionInput};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    metadata: MetadataArgs,
    /// Case notes text
    #[arg(long, conflicts_with = "notes_file")]
    notes: Option<String>,
    /// Read case notes from a file (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    notes_file: Option<PathBuf>,
    /// Also save the draft text to this file
    #[arg(long, value_name = "PATH")]
    draft_out: Option<PathBuf>,
    /// Export the draft into the Word template after generating it
    #[arg(short = 'x', long)]
    export: bool,
    #[command(flatten)]
    target: ExportTarget,
}

pub fn run_generate(root: &Path, args: GenerateArgs) -> Result<(), AppError> {
    let interactive = form::is_interactive();

    let Some(metadata) = args.metadata.resolve(interactive)? else {
        return Ok(());
    };
    let Some(notes) = form::read_notes(args.notes, args.notes_file, interactive)? else {
        return Ok(());
    };
    let input = SessionInput { metadata, notes };

    eprintln!("⏳ Generating progress note...");
    let draft = api::generate(root, &input)?;
    println!("{}", draft);

    if let Some(path) = &args.draft_out {
        fs::write(path, &draft).map_err(|e| {
            AppError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        })?;
        println!("✅ Draft saved to {}", path.display());
    }

    if args.export {
        export_draft(root, &draft, &input.metadata, args.target, interactive)?;
    }
    Ok(())
}
