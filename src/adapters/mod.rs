pub mod completion_client_http;
pub mod docx;
pub mod preamble_filesystem;

pub use completion_client_http::HttpCompletionClient;
pub use docx::{FillOutcome, fill_template};
pub use preamble_filesystem::FilesystemPreambleStore;
