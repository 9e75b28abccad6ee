//! CLI Adapter.

mod export;
mod form;
mod generate;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, SessionMetadata};

#[derive(Parser)]
#[command(name = "prognote")]
#[command(version)]
#[command(
    about = "Turn raw session notes into a formatted progress note",
    long_about = None
)]
struct Cli {
    /// Application directory holding the template, settings and .env
    #[arg(long, global = true, value_name = "PATH")]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a draft progress note and optionally export it
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Export a saved draft into the Word template
    #[clap(visible_alias = "e")]
    Export(export::ExportArgs),
    /// Show or change the prompt preamble
    #[clap(visible_alias = "s")]
    Settings {
        #[command(subcommand)]
        command: settings::SettingsCommands,
    },
    /// Print the default report file name for a client and session
    Filename {
        /// Client name
        #[arg(long)]
        name: String,
        /// Session number
        #[arg(long)]
        sessions: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = std::env::current_dir()
        .map_err(AppError::from)
        .map(|cwd| cli.dir.unwrap_or(cwd))
        .and_then(|root| match cli.command {
            Commands::Generate(args) => generate::run_generate(&root, args),
            Commands::Export(args) => export::run_export(&root, args),
            Commands::Settings { command } => settings::run_settings(&root, command),
            Commands::Filename { name, sessions } => {
                let metadata =
                    SessionMetadata { client_name: name, session_count: sessions, ..Default::default() };
                println!("{}", metadata.default_filename());
                Ok(())
            }
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
