use reqwest::header::HeaderMap;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_base: String,
    pub headers: HeaderMap,
}

impl Config {
    /// Reads `GEMINI_API_KEY` from the environment. A missing key falls
    /// back to a placeholder that the provider rejects, so callers exercise
    /// their failure path instead of crashing at startup.
    pub fn from_env() -> Self {
        let api_key = std::env::var(GEMINI_API_KEY).unwrap_or_else(|_| "demo-key".to_string());
        let mut headers = HeaderMap::new();
        headers.insert("x-goog-api-key", api_key.parse().expect("header value"));
        Self {
            api_base: GEMINI_BASE_URL.into(),
            headers,
        }
    }
}
