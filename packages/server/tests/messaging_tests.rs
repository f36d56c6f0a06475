//! Integration tests for chat messaging: sends, block gating, read markers.

mod common;

use common::*;
use test_context::test_context;

use server_core::common::UserId;
use server_core::domains::chats::actions::{
    list_chats, mark_chat_read, send_message, ChatError,
};
use server_core::domains::chats::{pair_key, Chat};
use server_core::domains::interactions::actions::{block_profile, like_profile, unblock_profile};
use server_core::kernel::ServerDeps;
use sqlx::PgPool;

async fn matched_pair(pool: &PgPool, deps: &ServerDeps) -> (UserId, UserId, String) {
    let alice = create_test_profile(pool, "alice").await.unwrap();
    let bob = create_test_profile(pool, "bob").await.unwrap();
    like_profile(alice, false, bob, deps).await.unwrap();
    let outcome = like_profile(bob, false, alice, deps).await.unwrap();
    (alice, bob, outcome.chat_id.unwrap())
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_send_message_denormalizes_summary(ctx: &mut TestHarness) {
    let (alice, bob, chat_id) = matched_pair(&ctx.db_pool, &ctx.deps).await;

    let message = send_message(alice, &chat_id, "hey bob", &ctx.deps)
        .await
        .unwrap();
    assert_eq!(message.text, "hey bob");
    assert_eq!(message.sender_id, alice);

    let chat = Chat::find_by_id(&chat_id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(chat.last_message.as_deref(), Some("hey bob"));
    assert_eq!(chat.last_message_sender_id, Some(alice));
    assert!(chat.last_message_at.is_some());

    // The chat shows as unread for bob, read for alice
    let bob_chats = list_chats(bob, &ctx.deps).await.unwrap();
    assert_eq!(bob_chats.len(), 1);
    assert!(bob_chats[0].unread);

    let alice_chats = list_chats(alice, &ctx.deps).await.unwrap();
    assert!(!alice_chats[0].unread);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_empty_message_is_rejected(ctx: &mut TestHarness) {
    let (alice, _bob, chat_id) = matched_pair(&ctx.db_pool, &ctx.deps).await;

    let err = send_message(alice, &chat_id, "   ", &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::EmptyMessage));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_non_participant_cannot_send_or_read(ctx: &mut TestHarness) {
    let (_alice, _bob, chat_id) = matched_pair(&ctx.db_pool, &ctx.deps).await;
    let eve = create_test_profile(&ctx.db_pool, "eve").await.unwrap();

    let err = send_message(eve, &chat_id, "hello", &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::NotAParticipant));

    let err = mark_chat_read(eve, &chat_id, &ctx.deps).await.unwrap_err();
    assert!(matches!(err, ChatError::NotAParticipant));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_block_gates_sends_in_both_directions(ctx: &mut TestHarness) {
    let (alice, bob, chat_id) = matched_pair(&ctx.db_pool, &ctx.deps).await;

    block_profile(alice, false, bob, &ctx.deps).await.unwrap();

    // Blocker cannot send
    let err = send_message(alice, &chat_id, "hi", &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::ConversationBlocked));

    // Blocked side cannot send either
    let err = send_message(bob, &chat_id, "hi", &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::ConversationBlocked));

    // Unblocking restores delivery
    unblock_profile(alice, false, bob, &ctx.deps).await.unwrap();
    send_message(bob, &chat_id, "we're back", &ctx.deps)
        .await
        .unwrap();
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_mark_read_clears_only_for_recipient(ctx: &mut TestHarness) {
    let (alice, bob, chat_id) = matched_pair(&ctx.db_pool, &ctx.deps).await;

    send_message(alice, &chat_id, "ping", &ctx.deps).await.unwrap();

    // The sender opening the chat does not clear the marker
    let cleared = mark_chat_read(alice, &chat_id, &ctx.deps).await.unwrap();
    assert!(!cleared);

    // The recipient does
    let cleared = mark_chat_read(bob, &chat_id, &ctx.deps).await.unwrap();
    assert!(cleared);

    let bob_chats = list_chats(bob, &ctx.deps).await.unwrap();
    assert!(!bob_chats[0].unread);

    // Marking again is a no-op
    let cleared = mark_chat_read(bob, &chat_id, &ctx.deps).await.unwrap();
    assert!(!cleared);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_messages_paginate_in_order(ctx: &mut TestHarness) {
    let (alice, bob, chat_id) = matched_pair(&ctx.db_pool, &ctx.deps).await;

    for i in 0..5 {
        let sender = if i % 2 == 0 { alice } else { bob };
        send_message(sender, &chat_id, &format!("msg {}", i), &ctx.deps)
            .await
            .unwrap();
    }

    let client = ctx.graphql_as(alice.into_uuid(), false);
    let result = client
        .execute(&format!(
            r#"query {{ chatMessages(chatId: "{}", first: 3) {{
                edges {{ node {{ text }} cursor }}
                pageInfo {{ hasNextPage endCursor }}
            }} }}"#,
            chat_id
        ))
        .await;
    assert!(result.is_ok(), "errors: {:?}", result.errors);

    let edges = result.get("chatMessages.edges");
    let texts: Vec<&str> = edges
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["node"]["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["msg 0", "msg 1", "msg 2"]);
    assert_eq!(
        result.get("chatMessages.pageInfo.hasNextPage"),
        serde_json::json!(true)
    );

    // Next page picks up where the cursor left off
    let cursor = result.get("chatMessages.pageInfo.endCursor");
    let result = client
        .execute(&format!(
            r#"query {{ chatMessages(chatId: "{}", first: 3, after: {}) {{
                edges {{ node {{ text }} }}
                pageInfo {{ hasNextPage }}
            }} }}"#,
            chat_id, cursor
        ))
        .await;
    let edges = result.get("chatMessages.edges");
    let texts: Vec<&str> = edges
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["node"]["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["msg 3", "msg 4"]);
    assert_eq!(
        result.get("chatMessages.pageInfo.hasNextPage"),
        serde_json::json!(false)
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_chat_list_orders_by_recent_activity(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();
    let carol = create_test_profile(&ctx.db_pool, "carol").await.unwrap();

    for other in [bob, carol] {
        like_profile(alice, false, other, &ctx.deps).await.unwrap();
        like_profile(other, false, alice, &ctx.deps).await.unwrap();
    }

    // Activity in the bob chat makes it the most recent
    send_message(bob, &pair_key(alice, bob), "hello", &ctx.deps)
        .await
        .unwrap();

    let chats = list_chats(alice, &ctx.deps).await.unwrap();
    assert_eq!(chats.len(), 2);
    assert_eq!(chats[0].id, pair_key(alice, bob));
    assert_eq!(chats[0].counterpart_id, bob.to_string());
}
