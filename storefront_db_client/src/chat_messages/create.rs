use model::chat::ChatMessage;
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::ids;

/// Persists one exchange. `ai_response` is whatever the caller resolved,
/// advisory output or the substituted fallback text.
#[tracing::instrument(skip(db, user_message, ai_response))]
pub async fn create_message(
    db: &SqlitePool,
    user_message: &str,
    ai_response: &str,
) -> Result<ChatMessage, DbError> {
    let id = ids::generate_id();

    sqlx::query(
        r#"
        INSERT INTO chat_messages (id, user_message, ai_response)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(user_message)
    .bind(ai_response)
    .execute(db)
    .await?;

    let message = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT * FROM chat_messages WHERE id = ?
        "#,
    )
    .bind(&id)
    .fetch_one(db)
    .await?;

    Ok(message)
}
