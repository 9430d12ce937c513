use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use model::product::Product;

pub mod get_messages;
pub mod post_message;

use crate::api::context::AppState;

/// Substituted for the advisory output whenever the provider fails; the
/// exchange is persisted and returned as a success either way.
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I'm having trouble processing your request right now. Please try again later.";

const SYSTEM_PREAMBLE: &str = "You are an AI assistant for an ecommerce admin panel. \
Help with product-related questions, business insights, and general ecommerce advice.";

/// Boundary to the external generative-text collaborator.
#[async_trait]
pub trait AdvisoryService: Send + Sync + std::fmt::Debug + 'static {
    async fn advise(&self, message: &str, product: Option<&Product>) -> anyhow::Result<String>;
}

#[derive(Clone, Debug)]
pub struct GeminiAdvisor {
    client: gemini::client::Client,
}

impl GeminiAdvisor {
    pub fn from_env() -> Self {
        Self {
            client: gemini::client::Client::from_env(),
        }
    }

    fn build_prompt(message: &str, product: Option<&Product>) -> String {
        let mut prompt = format!("{SYSTEM_PREAMBLE}\n\nUser question: {message}");
        if let Some(product) = product {
            let context = serde_json::to_string(product).unwrap_or_default();
            prompt.push_str("\n\nProduct context: ");
            prompt.push_str(&context);
        }
        prompt
    }
}

#[async_trait]
impl AdvisoryService for GeminiAdvisor {
    async fn advise(&self, message: &str, product: Option<&Product>) -> anyhow::Result<String> {
        let prompt = Self::build_prompt(message, product);
        let text = self
            .client
            .generate_text(gemini::config::DEFAULT_MODEL, &prompt)
            .await?;
        Ok(text)
    }
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockAdvisor;

#[cfg(test)]
#[async_trait]
impl AdvisoryService for MockAdvisor {
    async fn advise(&self, message: &str, product: Option<&Product>) -> anyhow::Result<String> {
        match product {
            Some(product) => Ok(format!("Advice about {}: keep it stocked.", product.name)),
            None => Ok(format!("Advice: {message}")),
        }
    }
}

/// Simulates an unreachable provider.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct FailingAdvisor;

#[cfg(test)]
#[async_trait]
impl AdvisoryService for FailingAdvisor {
    async fn advise(&self, _message: &str, _product: Option<&Product>) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("provider unreachable"))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_messages::handler))
        .route("/", post(post_message::handler))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::FALLBACK_RESPONSE;
    use crate::api::chat::FailingAdvisor;
    use crate::api::test_util::{send, test_router, test_router_with};

    #[tokio::test]
    async fn post_requires_a_message() {
        let api = test_router().await;
        let (status, body) = send(&api, "POST", "/chat", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");
    }

    #[tokio::test]
    async fn post_persists_the_exchange() {
        let api = test_router().await;

        let (status, body) = send(
            &api,
            "POST",
            "/chat",
            Some(json!({"message": "Should I restock mugs?"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user_message"], "Should I restock mugs?");
        assert_eq!(body["data"]["ai_response"], "Advice: Should I restock mugs?");

        let (status, body) = send(&api, "GET", "/chat", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn product_context_reaches_the_advisor() {
        let api = test_router().await;

        let (_, body) = send(
            &api,
            "POST",
            "/products",
            Some(json!({"name": "Mug", "price": 12.5})),
        )
        .await;
        let product_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &api,
            "POST",
            "/chat",
            Some(json!({"message": "How is this selling?", "product_id": product_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["data"]["ai_response"],
            "Advice about Mug: keep it stocked."
        );
    }

    #[tokio::test]
    async fn advisor_failure_falls_back_and_still_persists() {
        let api = test_router_with(Arc::new(FailingAdvisor)).await;

        let (status, body) = send(
            &api,
            "POST",
            "/chat",
            Some(json!({"message": "Should I restock mugs?"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["ai_response"], FALLBACK_RESPONSE);

        let (_, body) = send(&api, "GET", "/chat", None).await;
        let messages = body["data"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["ai_response"], FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn history_is_returned_oldest_first() {
        let api = test_router().await;

        for i in 0..3 {
            send(
                &api,
                "POST",
                "/chat",
                Some(json!({"message": format!("question {i}")})),
            )
            .await;
        }

        let (status, body) = send(&api, "GET", "/chat", None).await;
        assert_eq!(status, StatusCode::OK);
        let messages = body["data"].as_array().unwrap();
        assert_eq!(messages.len(), 3);

        let times: Vec<&str> = messages
            .iter()
            .map(|m| m["created_at"].as_str().unwrap())
            .collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted, "messages must be in ascending created_at order");
    }
}
