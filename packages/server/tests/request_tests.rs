//! Integration tests for accepting and declining match requests.

mod common;

use common::*;
use test_context::test_context;

use server_core::domains::chats::{pair_key, Chat};
use server_core::domains::interactions::actions::{
    accept_request, block_profile, decline_request, like_profile, my_ledger, InteractionError,
};
use server_core::domains::interactions::TransitionError;

#[test_context(TestHarness)]
#[tokio::test]
async fn test_accept_creates_match_on_both_sides(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    like_profile(alice, false, bob, &ctx.deps).await.unwrap();
    let outcome = accept_request(bob, false, alice, &ctx.deps).await.unwrap();

    assert!(outcome.matched);
    assert_eq!(outcome.chat_id, Some(pair_key(alice, bob)));

    // The request is consumed and both sides hold a matched edge; the
    // requester's liked edge is superseded by the match.
    let bob_ledger = my_ledger(bob, &ctx.deps).await.unwrap();
    assert!(bob_ledger.requests.is_empty());
    assert_eq!(bob_ledger.matches, vec![alice]);

    let alice_ledger = my_ledger(alice, &ctx.deps).await.unwrap();
    assert!(alice_ledger.liked.is_empty());
    assert_eq!(alice_ledger.matches, vec![bob]);

    let chat = Chat::find_by_id(&pair_key(alice, bob), &ctx.db_pool)
        .await
        .unwrap();
    assert!(chat.is_some());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_accept_without_request_fails(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    let err = accept_request(bob, false, alice, &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InteractionError::Transition(TransitionError::RequestNotFound)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_decline_moves_requester_to_disliked(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    like_profile(alice, false, bob, &ctx.deps).await.unwrap();
    let outcome = decline_request(bob, false, alice, &ctx.deps).await.unwrap();

    assert!(!outcome.matched);
    assert!(outcome.chat_id.is_none());

    let bob_ledger = my_ledger(bob, &ctx.deps).await.unwrap();
    assert!(bob_ledger.requests.is_empty());
    assert_eq!(bob_ledger.disliked, vec![alice]);

    // The requester keeps their liked edge; no match ever forms
    let alice_ledger = my_ledger(alice, &ctx.deps).await.unwrap();
    assert_eq!(alice_ledger.liked, vec![bob]);
    assert!(alice_ledger.matches.is_empty());

    let chat = Chat::find_by_id(&pair_key(alice, bob), &ctx.db_pool)
        .await
        .unwrap();
    assert!(chat.is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_decline_then_accept_fails(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    like_profile(alice, false, bob, &ctx.deps).await.unwrap();
    decline_request(bob, false, alice, &ctx.deps).await.unwrap();

    // The request was consumed; a second resolution has nothing to accept
    let err = accept_request(bob, false, alice, &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InteractionError::Transition(TransitionError::RequestNotFound)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_decline_from_blocked_requester_keeps_edges_exclusive(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    // Bob blocks Alice; Alice's like still lands in Bob's inbox
    block_profile(bob, false, alice, &ctx.deps).await.unwrap();
    like_profile(alice, false, bob, &ctx.deps).await.unwrap();

    let ledger = my_ledger(bob, &ctx.deps).await.unwrap();
    assert_eq!(ledger.requests, vec![alice]);

    decline_request(bob, false, alice, &ctx.deps).await.unwrap();

    // The request is consumed; the block records the rejection and no
    // disliked edge appears alongside it
    let ledger = my_ledger(bob, &ctx.deps).await.unwrap();
    assert!(ledger.requests.is_empty());
    assert!(ledger.disliked.is_empty());
    assert_eq!(ledger.blocked, vec![alice]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_accept_from_blocked_requester_fails(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    block_profile(bob, false, alice, &ctx.deps).await.unwrap();
    like_profile(alice, false, bob, &ctx.deps).await.unwrap();

    let err = accept_request(bob, false, alice, &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InteractionError::Transition(TransitionError::CounterpartBlocked)
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_accept_via_graphql(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    like_profile(alice, false, bob, &ctx.deps).await.unwrap();

    let client = ctx.graphql_as(bob.into_uuid(), false);
    let result = client
        .execute(&format!(
            r#"mutation {{ acceptRequest(userId: "{}") {{ matched chatId }} }}"#,
            alice
        ))
        .await;
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert_eq!(result.get("acceptRequest.matched"), serde_json::json!(true));
    assert_eq!(
        result.get("acceptRequest.chatId"),
        serde_json::json!(pair_key(alice, bob))
    );

    let result = client.execute("query { myMatches { username } }").await;
    assert_eq!(
        result.get("myMatches"),
        serde_json::json!([{ "username": "alice" }])
    );
}
