//! Template placeholders and their replacement values.

use super::{Section, SectionMap, SessionMetadata};

pub const NAME: &str = "[Replace with input Name]";
pub const DATE: &str = "[Replace with input Date]";
pub const TIME: &str = "[Replace with input Time]";
pub const SESSIONS: &str = "[Replace with input Sessions]";

/// Placeholder for a parsed section. The template spells some of these with a
/// space before the closing bracket, so they must stay exact.
pub fn section_placeholder(section: Section) -> &'static str {
    match section {
        Section::PresentingProblems => "[Replace with output of Presenting Problem(s): ]",
        Section::Assessment => "[Replace with output of Assessment:]",
        Section::Intervention => "[Replace with output of Intervention: ]",
        Section::Plan => "[Replace with output of Plan:]",
    }
}

/// Ordered placeholder table applied to each paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(&'static str, String)>,
}

impl Replacements {
    /// Resolve all eight placeholders. Absent sections become empty strings.
    pub fn resolve(metadata: &SessionMetadata, sections: &SectionMap) -> Self {
        let mut entries = vec![
            (NAME, metadata.client_name.clone()),
            (DATE, metadata.formatted_date()),
            (TIME, metadata.formatted_time()),
            (SESSIONS, metadata.session_count.clone()),
        ];
        entries.extend(Section::ALL.into_iter().map(|section| {
            (section_placeholder(section), sections.get(section).unwrap_or_default().to_string())
        }));
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Apply every placeholder in order. Returns `None` when nothing matched.
    pub fn apply(&self, text: &str) -> Option<String> {
        let mut current: Option<String> = None;
        for (key, value) in self.iter() {
            let source = current.as_deref().unwrap_or(text);
            if source.contains(key) {
                current = Some(source.replace(key, value));
            }
        }
        current
    }
}
