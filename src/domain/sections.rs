//! Progress-note section parsing.
//!
//! The completion result is expected to contain four headings, each on its own
//! line. Matching is exact: a heading with different case, punctuation, or
//! inner spacing is treated as body text.

use std::collections::BTreeMap;

/// The four progress-note sections, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    PresentingProblems,
    Assessment,
    Intervention,
    Plan,
}

impl Section {
    pub const ALL: [Section; 4] =
        [Section::PresentingProblems, Section::Assessment, Section::Intervention, Section::Plan];

    /// Heading line as it must appear in the completion result.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::PresentingProblems => "Presenting Problem(s):",
            Section::Assessment => "Assessment:",
            Section::Intervention => "Intervention:",
            Section::Plan => "Plan:",
        }
    }

    pub fn from_heading(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.heading() == line)
    }
}

/// Body text accumulated per section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    bodies: BTreeMap<Section, String>,
}

impl SectionMap {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.bodies.get(&section).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Sections from `Section::ALL` the result did not contain.
    pub fn missing(&self) -> Vec<Section> {
        Section::ALL.into_iter().filter(|section| !self.bodies.contains_key(section)).collect()
    }
}

/// Split a completion result into its sections.
///
/// Each trimmed line either starts a section (resetting it if the heading
/// repeats) or is appended with one trailing space to the current section.
/// Lines before the first heading are dropped.
pub fn parse_sections(text: &str) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current: Option<Section> = None;

    for line in split_lines(text) {
        let line = line.trim();
        if let Some(section) = Section::from_heading(line) {
            map.bodies.insert(section, String::new());
            current = Some(section);
        } else if let Some(section) = current {
            let body = map.bodies.entry(section).or_default();
            body.push_str(line);
            body.push(' ');
        }
    }

    tracing::debug!(found = map.len(), missing = ?map.missing(), "parsed progress note sections");
    map
}

/// Universal-newline split: `\r\n` counts as one break and a trailing break
/// does not produce an empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..index]);
        let mut end = index + ch.len_utf8();
        if ch == '\r'
            && let Some(&(next_index, '\n')) = chars.peek()
        {
            chars.next();
            end = next_index + 1;
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}
