mod docx;
mod fake_completion_client;
mod memory_preamble_store;

pub use docx::{document_text, template_docx};
pub use fake_completion_client::FakeCompletionClient;
pub use memory_preamble_store::MemoryPreambleStore;
