use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// error from reqwest, including the request timeout
    #[error("http error")]
    Reqwest(#[from] reqwest::Error),
    /// non-success status returned by the API
    #[error("api returned status {status}")]
    Api { status: u16, message: String },
    /// the response carried no candidate text
    #[error("response contained no text")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, GeminiError>;
