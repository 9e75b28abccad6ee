pub mod config;
pub mod error;
pub mod placeholders;
pub mod preamble;
pub mod prompt;
pub mod sections;
pub mod session;

pub use config::{API_KEY_VAR, AppConfig, CONFIG_FILE, CompletionConfig, PathsConfig};
pub use error::AppError;
pub use placeholders::Replacements;
pub use preamble::{DEFAULT_PREAMBLE, Preamble};
pub use prompt::assemble;
pub use sections::{Section, SectionMap, parse_sections};
pub use session::{MERIDIEMS, MONTHS, SessionInput, SessionMetadata};
