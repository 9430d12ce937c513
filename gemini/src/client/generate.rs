use crate::client::Client;
use crate::error::{GeminiError, Result};
use crate::types::request::GenerateContentRequest;
use crate::types::response::GenerateContentResponse;

impl Client {
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let path = format!("/v1beta/models/{model}:generateContent");
        self.post(&path, request).await
    }

    /// One-shot text in, text out. Errors if the provider answered with an
    /// empty candidate set.
    pub async fn generate_text(&self, model: &str, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_text(prompt);
        let response = self.generate_content(model, &request).await?;
        response.text().ok_or(GeminiError::EmptyResponse)
    }
}
