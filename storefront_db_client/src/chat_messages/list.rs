use model::chat::ChatMessage;
use sqlx::SqlitePool;

use crate::chat_messages::HISTORY_LIMIT;
use crate::error::DbError;

/// The newest messages, newest first. Callers that present a transcript
/// reverse the window to oldest-first.
pub async fn list_messages(db: &SqlitePool) -> Result<Vec<ChatMessage>, DbError> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT * FROM chat_messages ORDER BY created_at DESC LIMIT ?
        "#,
    )
    .bind(HISTORY_LIMIT)
    .fetch_all(db)
    .await?;

    Ok(messages)
}
