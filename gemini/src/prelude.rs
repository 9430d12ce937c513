pub use crate::client::Client;
pub use crate::config::{Config, DEFAULT_MODEL};
pub use crate::error::{GeminiError, Result};
pub use crate::types::request::GenerateContentRequest;
pub use crate::types::response::GenerateContentResponse;
