use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::common::{ChatMessageId, UserId};

/// An append-only chat message. Messages are never edited or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub chat_id: String,
    pub sender_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub async fn create(
        chat_id: &str,
        sender: UserId,
        text: &str,
        executor: impl PgExecutor<'_>,
    ) -> Result<Self> {
        let message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (id, chat_id, sender_id, text)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(ChatMessageId::new())
        .bind(chat_id)
        .bind(sender)
        .bind(text)
        .fetch_one(executor)
        .await?;
        Ok(message)
    }

    /// Keyset page of messages in a chat. Message ids are time-ordered, so
    /// cursoring on the id is chronological. Rows come back in query order;
    /// the caller trims the extra row and restores ascending order for
    /// backward pages.
    pub async fn list_for_chat(
        chat_id: &str,
        cursor: Option<uuid::Uuid>,
        forward: bool,
        fetch_limit: i64,
        executor: impl PgExecutor<'_>,
    ) -> Result<Vec<Self>> {
        let query = match (cursor.is_some(), forward) {
            (true, true) => {
                "SELECT * FROM chat_messages WHERE chat_id = $1 AND id > $3 \
                 ORDER BY id ASC LIMIT $2"
            }
            (true, false) => {
                "SELECT * FROM chat_messages WHERE chat_id = $1 AND id < $3 \
                 ORDER BY id DESC LIMIT $2"
            }
            (false, true) => {
                "SELECT * FROM chat_messages WHERE chat_id = $1 ORDER BY id ASC LIMIT $2"
            }
            (false, false) => {
                "SELECT * FROM chat_messages WHERE chat_id = $1 ORDER BY id DESC LIMIT $2"
            }
        };

        let mut q = sqlx::query_as::<_, ChatMessage>(query)
            .bind(chat_id)
            .bind(fetch_limit);
        if let Some(cursor) = cursor {
            q = q.bind(cursor);
        }
        let messages = q.fetch_all(executor).await?;
        Ok(messages)
    }
}
