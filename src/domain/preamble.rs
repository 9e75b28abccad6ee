//! Instructional text prefixed to the case notes.

use std::fmt;

/// Built-in preamble used when no settings file exists.
pub const DEFAULT_PREAMBLE: &str = "
You are a mental health professional. Analyze the following raw case notes and rewrite them into a formal progress note format under these headings:

Presenting Problem(s):
Assessment:
Intervention:
Plan:

Use simple, professional language. Maintain similar word count to the sample in the template. Do not fabricate or exaggerate. Follow a person-centred approach. I often use mindfulness and deep breathing. With kids I use play therapy and expressive arts. With some clients, I use psychoanalysis.

Case Notes:
";

/// Immutable preamble value. Editing produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble(String);

impl Preamble {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_PREAMBLE
    }
}

impl Default for Preamble {
    fn default() -> Self {
        Self(DEFAULT_PREAMBLE.to_string())
    }
}

impl fmt::Display for Preamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
