//! Session metadata captured from the form.

use crate::domain::AppError;

/// Month abbreviations offered by the date picker.
pub const MONTHS: [&str; 12] =
    ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];

/// Meridiem choices offered by the time picker.
pub const MERIDIEMS: [&str; 2] = ["AM", "PM"];

/// Form fields describing one session. Values are kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMetadata {
    pub client_name: String,
    pub session_count: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub hour: String,
    pub minute: String,
    pub am_pm: String,
}

impl SessionMetadata {
    /// `day-MONTH-year`, e.g. `07-MAR-2025`.
    pub fn formatted_date(&self) -> String {
        format!("{}-{}-{}", self.day, self.month, self.year)
    }

    /// `hour:minute AMPM`, e.g. `10:30 AM`.
    pub fn formatted_time(&self) -> String {
        format!("{}:{} {}", self.hour, self.minute, self.am_pm)
    }

    /// Default export name: spaces in the client name become underscores.
    pub fn default_filename(&self) -> String {
        format!("{}_Session_{}.docx", self.client_name.replace(' ', "_"), self.session_count)
    }

    /// Names of the fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("client name", &self.client_name),
            ("day", &self.day),
            ("month", &self.month),
            ("year", &self.year),
            ("hour", &self.hour),
            ("minute", &self.minute),
            ("am/pm", &self.am_pm),
            ("session count", &self.session_count),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Refuse export when any form field is empty.
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();
        if missing.is_empty() { Ok(()) } else { Err(AppError::IncompleteInput(missing)) }
    }
}

/// Everything the generation pipeline needs from the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInput {
    pub metadata: SessionMetadata,
    pub notes: String,
}

impl SessionInput {
    /// Refuse generation when any field is empty.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = self.metadata.missing_fields();
        if self.notes.trim().is_empty() {
            missing.push("notes");
        }
        if missing.is_empty() { Ok(()) } else { Err(AppError::IncompleteInput(missing)) }
    }
}
