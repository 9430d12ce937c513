use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One persisted chat exchange. `ai_response` is always populated; advisory
/// failures are stored as the substituted apology text.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChatMessage {
    pub id: String,
    pub user_message: String,
    pub ai_response: String,
    pub created_at: NaiveDateTime,
}
