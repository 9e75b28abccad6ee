//! Application-directory configuration loaders.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_api_key;
mod load_config;

pub use load_api_key::{load_api_key, resolve_api_key};
pub use load_config::load_config;
