use std::time::Duration;

use reqwest::Client as RequestClient;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::error::{GeminiError, Result};

/// A hanging provider call must not hang the request that triggered it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct Client {
    http_client: RequestClient,
    config: Config,
}

impl Client {
    pub fn from_env() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .default_headers(config.headers.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self {
            config,
            http_client: client,
        }
    }

    pub fn with_client(self, client: RequestClient) -> Self {
        Self {
            http_client: client,
            ..self
        }
    }

    pub(crate) async fn post<I, O>(&self, path: &str, request: &I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(format!("{}{}", self.config.api_base, path))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<O>().await?)
    }
}
