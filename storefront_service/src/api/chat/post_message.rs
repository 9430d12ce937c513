use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use model::chat::ChatMessage;
use model::response::DataResponse;
use serde::{Deserialize, Serialize};
use storefront_db_client::DbError;
use storefront_db_client::chat_messages::create::create_message;
use storefront_db_client::products::get::get_product;
use utoipa::ToSchema;

use crate::api::chat::FALLBACK_RESPONSE;
use crate::api::context::AppState;
use crate::api::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostMessageRequest {
    pub message: Option<String>,
    /// Optional product the question is about; its row is passed to the
    /// advisor as context but not persisted as a relation.
    pub product_id: Option<String>,
}

#[utoipa::path(post,
    tag = "chat",
    operation_id = "post_chat_message",
    path = "/chat",
    responses(
    (status = 201, body = DataResponse<ChatMessage>),
    (status = 400, body = model::response::ErrorResponse),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Json(req): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<DataResponse<ChatMessage>>), ApiError> {
    let Some(message) = req.message.filter(|message| !message.trim().is_empty()) else {
        return Err(ApiError::Validation("Message is required".to_string()));
    };

    let product = match req.product_id {
        Some(product_id) => match get_product(&state.db, &product_id).await {
            Ok(product) => Some(product),
            // an unknown product id degrades to a context-free question
            Err(DbError::NotFound) => None,
            Err(e) => {
                tracing::error!(error = ?e, "unable to resolve product context");
                return Err(ApiError::Internal(
                    "Failed to process chat message".to_string(),
                ));
            }
        },
        None => None,
    };

    let ai_response = match state.advisor.advise(&message, product.as_ref()).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = ?e, "advisory call failed, substituting fallback");
            FALLBACK_RESPONSE.to_string()
        }
    };

    let saved = create_message(&state.db, &message, &ai_response)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "unable to persist chat message");
            ApiError::Internal("Failed to process chat message".to_string())
        })?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(saved))))
}
