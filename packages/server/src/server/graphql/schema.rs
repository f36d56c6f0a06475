//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldResult, RootNode};

use super::context::GraphQLContext;

use crate::domains::chats::data::{ChatData, MessageConnection, MessageData};
use crate::domains::chats::edges as chat_edges;
use crate::domains::interactions::data::{InteractionResult, LedgerData};
use crate::domains::interactions::edges as interaction_edges;
use crate::domains::profiles::data::{ProfileConnection, ProfileData};
use crate::domains::profiles::edges as profile_edges;
use crate::domains::reports::data::ReportData;
use crate::domains::reports::edges as report_edges;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Get a profile by id
    async fn profile(ctx: &GraphQLContext, id: String) -> FieldResult<Option<ProfileData>> {
        profile_edges::query::get_profile(ctx, id).await
    }

    /// Discovery feed: profiles the viewer has not interacted with,
    /// with cursor-based pagination (Relay spec)
    async fn discovery_candidates(
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> FieldResult<ProfileConnection> {
        profile_edges::query::discovery_candidates(ctx, first, after, last, before).await
    }

    /// The viewer's interaction ledger (liked / disliked / blocked /
    /// requests / matches id sets)
    async fn my_ledger(ctx: &GraphQLContext) -> FieldResult<LedgerData> {
        interaction_edges::query::my_ledger(ctx).await
    }

    /// Profiles awaiting the viewer's response, newest first
    async fn my_requests(ctx: &GraphQLContext) -> FieldResult<Vec<ProfileData>> {
        interaction_edges::query::my_requests(ctx).await
    }

    /// Profiles the viewer has matched with, newest first
    async fn my_matches(ctx: &GraphQLContext) -> FieldResult<Vec<ProfileData>> {
        interaction_edges::query::my_matches(ctx).await
    }

    /// The viewer's chats, most recent activity first
    async fn my_chats(ctx: &GraphQLContext) -> FieldResult<Vec<ChatData>> {
        chat_edges::query::my_chats(ctx).await
    }

    /// A page of messages in a chat
    async fn chat_messages(
        ctx: &GraphQLContext,
        chat_id: String,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> FieldResult<MessageConnection> {
        chat_edges::query::chat_messages(ctx, chat_id, first, after, last, before).await
    }

    /// Recent reports (admin only)
    async fn recent_reports(
        ctx: &GraphQLContext,
        limit: Option<i32>,
    ) -> FieldResult<Vec<ReportData>> {
        report_edges::query::recent_reports(ctx, limit).await
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Like a profile. Returns whether a match formed (and the chat id)
    async fn like_profile(
        ctx: &GraphQLContext,
        user_id: String,
    ) -> FieldResult<InteractionResult> {
        interaction_edges::mutation::like_profile(ctx, user_id).await
    }

    /// Pass on a profile
    async fn dislike_profile(
        ctx: &GraphQLContext,
        user_id: String,
    ) -> FieldResult<InteractionResult> {
        interaction_edges::mutation::dislike_profile(ctx, user_id).await
    }

    /// Block a profile
    async fn block_profile(
        ctx: &GraphQLContext,
        user_id: String,
    ) -> FieldResult<InteractionResult> {
        interaction_edges::mutation::block_profile(ctx, user_id).await
    }

    /// Remove a block the viewer holds
    async fn unblock_profile(
        ctx: &GraphQLContext,
        user_id: String,
    ) -> FieldResult<InteractionResult> {
        interaction_edges::mutation::unblock_profile(ctx, user_id).await
    }

    /// Accept a pending match request
    async fn accept_request(
        ctx: &GraphQLContext,
        user_id: String,
    ) -> FieldResult<InteractionResult> {
        interaction_edges::mutation::accept_request(ctx, user_id).await
    }

    /// Decline a pending match request
    async fn decline_request(
        ctx: &GraphQLContext,
        user_id: String,
    ) -> FieldResult<InteractionResult> {
        interaction_edges::mutation::decline_request(ctx, user_id).await
    }

    /// Send a message to a chat
    async fn send_message(
        ctx: &GraphQLContext,
        chat_id: String,
        text: String,
    ) -> FieldResult<MessageData> {
        chat_edges::mutation::send_message(ctx, chat_id, text).await
    }

    /// Mark a chat as read by the viewer
    async fn mark_chat_read(ctx: &GraphQLContext, chat_id: String) -> FieldResult<bool> {
        chat_edges::mutation::mark_chat_read(ctx, chat_id).await
    }

    /// Report a user for moderation review
    async fn submit_report(
        ctx: &GraphQLContext,
        user_id: String,
        reason: String,
    ) -> FieldResult<ReportData> {
        report_edges::mutation::submit_report(ctx, user_id, reason).await
    }

    /// Suspend or reinstate a profile (admin)
    async fn set_profile_suspended(
        ctx: &GraphQLContext,
        user_id: String,
        suspended: bool,
    ) -> FieldResult<ProfileData> {
        profile_edges::mutation::set_profile_suspended(ctx, user_id, suspended).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
