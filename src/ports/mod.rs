mod completion_client;
mod preamble_store;

pub use completion_client::CompletionClient;
pub use preamble_store::PreambleStore;
