use axum::Json;
use axum::extract::State;
use model::chat::ChatMessage;
use model::response::DataResponse;
use storefront_db_client::chat_messages::list::list_messages;

use crate::api::context::AppState;
use crate::api::error::ApiError;

/// The newest 50 exchanges, presented oldest-first.
#[utoipa::path(get,
    tag = "chat",
    operation_id = "get_chat_messages",
    path = "/chat",
    responses(
    (status = 200, body = DataResponse<Vec<ChatMessage>>),
    (status = 500, body = model::response::ErrorResponse)))
]
#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ChatMessage>>>, ApiError> {
    let mut messages = list_messages(&state.db).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to list chat messages");
        ApiError::Internal("Failed to fetch chat messages".to_string())
    })?;

    // the repository serves the window newest-first
    messages.reverse();

    Ok(Json(DataResponse::new(messages)))
}
