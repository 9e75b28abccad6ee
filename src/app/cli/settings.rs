//! Settings command implementation.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use dialoguer::Editor;

use super::form;
use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the preamble currently in effect
    Show,
    /// Edit the preamble in $EDITOR
    Edit,
    /// Replace the preamble with the contents of a file (`-` for stdin)
    Set {
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
    },
    /// Delete the settings file and restore the built-in preamble
    Reset,
}

pub fn run_settings(root: &Path, command: SettingsCommands) -> Result<(), AppError> {
    match command {
        SettingsCommands::Show => {
            let preamble = api::preamble(root)?;
            if preamble.is_default() {
                eprintln!("ℹ️ Using the built-in preamble");
            } else {
                eprintln!("ℹ️ Loaded from {}", api::settings_path(root)?.display());
            }
            println!("{}", preamble);
        }
        SettingsCommands::Edit => {
            let updated = api::edit_preamble(root, |current| {
                Editor::new()
                    .edit(current)
                    .map_err(|err| AppError::Prompt(format!("Failed to open editor: {}", err)))
            })?;
            match updated {
                Some(_) => println!("✅ Prompt updated successfully."),
                None => println!("ℹ️ Prompt unchanged"),
            }
        }
        SettingsCommands::Set { file } => {
            let text = form::read_text_source(&file)?;
            api::set_preamble(root, &text)?;
            println!("✅ Prompt updated successfully.");
        }
        SettingsCommands::Reset => {
            let (_, removed) = api::reset_preamble(root)?;
            if removed {
                println!("✅ Restored the built-in prompt");
            } else {
                println!("ℹ️ Already using the built-in prompt");
            }
        }
    }
    Ok(())
}
