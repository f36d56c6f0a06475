use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::common::UserId;

/// Canonical chat key for an unordered user pair: the two UUIDs in sorted
/// order joined by an underscore. Any two participants derive the same key
/// independently, so a conversation can be addressed before it exists.
pub fn pair_key(a: UserId, b: UserId) -> String {
    let (lo, hi) = if a.as_uuid() <= b.as_uuid() {
        (a, b)
    } else {
        (b, a)
    };
    format!("{}_{}", lo, hi)
}

/// A chat summary row. One per matched pair, keyed by [`pair_key`]. The
/// last-message fields are denormalized at send time so chat lists render
/// without touching the messages table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Chat {
    pub id: String,
    pub participant_a: UserId,
    pub participant_b: UserId,
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    /// Set to the sender on send, cleared when the recipient opens the
    /// chat. Present means "unread by the other participant".
    pub last_message_sender_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Materialize the chat summary for a pair, preserving any existing
    /// message state. Re-running on an existing chat is a no-op.
    pub async fn get_or_create_for_pair(
        a: UserId,
        b: UserId,
        executor: impl PgExecutor<'_>,
    ) -> Result<Self> {
        let (lo, hi) = if a.as_uuid() <= b.as_uuid() {
            (a, b)
        } else {
            (b, a)
        };
        let chat = sqlx::query_as::<_, Chat>(
            r#"
            INSERT INTO chats (id, participant_a, participant_b)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET id = chats.id
            RETURNING *
            "#,
        )
        .bind(pair_key(a, b))
        .bind(lo)
        .bind(hi)
        .fetch_one(executor)
        .await?;
        Ok(chat)
    }

    pub async fn find_by_id(id: &str, executor: impl PgExecutor<'_>) -> Result<Option<Self>> {
        let chat = sqlx::query_as::<_, Chat>("SELECT * FROM chats WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(chat)
    }

    /// All chats the user participates in, most recent activity first.
    /// Chats with no messages yet sort by creation time.
    pub async fn list_for_user(user: UserId, executor: impl PgExecutor<'_>) -> Result<Vec<Self>> {
        let chats = sqlx::query_as::<_, Chat>(
            r#"
            SELECT * FROM chats
            WHERE participant_a = $1 OR participant_b = $1
            ORDER BY COALESCE(last_message_at, created_at) DESC
            "#,
        )
        .bind(user)
        .fetch_all(executor)
        .await?;
        Ok(chats)
    }

    /// Denormalize the latest message onto the summary row.
    pub async fn update_last_message(
        id: &str,
        text: &str,
        sender: UserId,
        sent_at: DateTime<Utc>,
        executor: impl PgExecutor<'_>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE chats
            SET last_message = $2, last_message_at = $3, last_message_sender_id = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(sent_at)
        .bind(sender)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Clear the unread marker when the non-sender opens the chat. Only
    /// clears if the last sender is someone other than `reader`, so a
    /// sender re-opening their own chat does not mark it read for the
    /// counterpart.
    pub async fn clear_unread_marker(
        id: &str,
        reader: UserId,
        executor: impl PgExecutor<'_>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE chats
            SET last_message_sender_id = NULL
            WHERE id = $1
              AND last_message_sender_id IS NOT NULL
              AND last_message_sender_id <> $2
            "#,
        )
        .bind(id)
        .bind(reader)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub fn is_participant(&self, user: UserId) -> bool {
        self.participant_a == user || self.participant_b == user
    }

    /// The other participant from `user`'s point of view.
    pub fn counterpart_of(&self, user: UserId) -> UserId {
        if self.participant_a == user {
            self.participant_b
        } else {
            self.participant_a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_canonical() {
        let a = UserId::new();
        let b = UserId::new();
        assert_eq!(pair_key(a, b), pair_key(b, a));

        let key = pair_key(a, b);
        let (lo, hi) = key.split_once('_').unwrap();
        assert!(lo <= hi);
        assert!(key.contains(&a.to_string()));
        assert!(key.contains(&b.to_string()));
    }

    #[test]
    fn test_counterpart_of() {
        let a = UserId::new();
        let b = UserId::new();
        let (lo, hi) = if a.as_uuid() <= b.as_uuid() {
            (a, b)
        } else {
            (b, a)
        };
        let chat = Chat {
            id: pair_key(a, b),
            participant_a: lo,
            participant_b: hi,
            last_message: None,
            last_message_at: None,
            last_message_sender_id: None,
            created_at: Utc::now(),
        };
        assert_eq!(chat.counterpart_of(a), b);
        assert_eq!(chat.counterpart_of(b), a);
        assert!(chat.is_participant(a));
        assert!(!chat.is_participant(UserId::new()));
    }
}
