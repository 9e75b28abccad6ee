//! Session form: flags first, interactive prompts for whatever is missing.

use std::fs;
use std::io::{self, ErrorKind, IsTerminal, Read};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use clap::Args;
use dialoguer::{Confirm, Editor, Error as DialoguerError, Input, Select};

use crate::domain::{AppError, MERIDIEMS, MONTHS, SessionMetadata};

#[derive(Args, Debug, Default)]
pub struct MetadataArgs {
    /// Client name
    #[arg(long)]
    pub name: Option<String>,
    /// Number of sessions
    #[arg(long)]
    pub sessions: Option<String>,
    /// Day of month, e.g. 07
    #[arg(long)]
    pub day: Option<String>,
    /// Month abbreviation, JAN to DEC
    #[arg(long)]
    pub month: Option<String>,
    /// Year, e.g. 2025
    #[arg(long)]
    pub year: Option<String>,
    /// Hour, e.g. 10
    #[arg(long)]
    pub hour: Option<String>,
    /// Minute, e.g. 30
    #[arg(long)]
    pub minute: Option<String>,
    /// AM or PM
    #[arg(long = "ampm", value_name = "AM|PM")]
    pub am_pm: Option<String>,
}

/// Values pre-filled in the form: today's date and 10:30 AM.
struct FormDefaults {
    day: String,
    month_index: usize,
    year: String,
    hour: &'static str,
    minute: &'static str,
}

impl FormDefaults {
    fn today() -> Self {
        let now = Local::now();
        Self {
            day: format!("{:02}", now.day()),
            month_index: now.month0() as usize,
            year: now.year().to_string(),
            hour: "10",
            minute: "30",
        }
    }
}

impl MetadataArgs {
    /// Fill in missing fields. Interactive sessions are prompted; otherwise
    /// date and time take their defaults and name/sessions stay empty so that
    /// validation reports them. Returns `None` if the user cancels.
    pub fn resolve(self, interactive: bool) -> Result<Option<SessionMetadata>, AppError> {
        let defaults = FormDefaults::today();

        if !interactive {
            return Ok(Some(SessionMetadata {
                client_name: self.name.unwrap_or_default(),
                session_count: self.sessions.unwrap_or_default(),
                day: self.day.unwrap_or(defaults.day),
                month: self.month.unwrap_or_else(|| MONTHS[defaults.month_index].to_string()),
                year: self.year.unwrap_or(defaults.year),
                hour: self.hour.unwrap_or_else(|| defaults.hour.to_string()),
                minute: self.minute.unwrap_or_else(|| defaults.minute.to_string()),
                am_pm: self.am_pm.unwrap_or_else(|| MERIDIEMS[0].to_string()),
            }));
        }

        macro_rules! ask {
            ($value:expr, $prompt:expr) => {
                match $value {
                    Some(value) => value,
                    None => match $prompt? {
                        Some(value) => value,
                        None => return Ok(None),
                    },
                }
            };
        }

        Ok(Some(SessionMetadata {
            client_name: ask!(self.name, prompt_text("Client name", None)),
            day: ask!(self.day, prompt_text("Day", Some(&defaults.day))),
            month: ask!(self.month, prompt_choice("Month", &MONTHS, defaults.month_index)),
            year: ask!(self.year, prompt_text("Year", Some(&defaults.year))),
            hour: ask!(self.hour, prompt_text("Hour", Some(defaults.hour))),
            minute: ask!(self.minute, prompt_text("Minute", Some(defaults.minute))),
            am_pm: ask!(self.am_pm, prompt_choice("AM/PM", &MERIDIEMS, 0)),
            session_count: ask!(self.sessions, prompt_text("# of sessions", None)),
        }))
    }
}

/// Whether prompts can be shown.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Read free text from `--notes`, a file (`-` for stdin), or the editor.
pub fn read_notes(
    inline: Option<String>,
    file: Option<PathBuf>,
    interactive: bool,
) -> Result<Option<String>, AppError> {
    if let Some(text) = inline {
        return Ok(Some(text.trim().to_string()));
    }
    if let Some(path) = file {
        return read_text_source(&path).map(|text| Some(text.trim().to_string()));
    }
    if !interactive {
        return Ok(Some(String::new()));
    }

    Editor::new()
        .edit("")
        .map(|notes| notes.map(|text| text.trim().to_string()))
        .map_err(|err| AppError::Prompt(format!("Failed to read case notes: {}", err)))
}

/// Read a text file, or stdin when `path` is `-`.
pub fn read_text_source(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|e| {
        AppError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    })
}

/// Ask before replacing an existing report. Non-interactive sessions decline.
pub fn confirm_overwrite(path: &Path, interactive: bool) -> Result<bool, AppError> {
    if !interactive {
        eprintln!(
            "⚠️  {} already exists. Re-run with --force to overwrite it.",
            path.display()
        );
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact_opt()
        .map(|answer| answer.unwrap_or(false))
        .map_err(|err| AppError::Prompt(format!("Failed to confirm overwrite: {}", err)))
}

fn prompt_text(label: &str, default: Option<&str>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(label);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }

    match input.interact_text() {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", label, err))),
    }
}

fn prompt_choice(
    label: &str,
    items: &[&str],
    default: usize,
) -> Result<Option<String>, AppError> {
    let selection = Select::new()
        .with_prompt(label)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select {}: {}", label, err)))?;

    Ok(selection.map(|index| items[index].to_string()))
}
