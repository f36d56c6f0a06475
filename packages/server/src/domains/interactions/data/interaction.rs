//! GraphQL data types for the interaction ledger.

use serde::{Deserialize, Serialize};

use crate::domains::interactions::actions::IntentOutcome;
use crate::domains::interactions::models::Ledger;

/// GraphQL-friendly result of a ledger mutation
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "Outcome of an interaction intent")]
pub struct InteractionResult {
    /// Whether a match now exists with the counterpart
    pub matched: bool,

    /// Chat created by this interaction, if a match formed
    pub chat_id: Option<String>,
}

impl From<IntentOutcome> for InteractionResult {
    fn from(outcome: IntentOutcome) -> Self {
        Self {
            matched: outcome.matched,
            chat_id: outcome.chat_id,
        }
    }
}

/// GraphQL-friendly view of a user's own interaction ledger
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "The viewer's interaction record")]
pub struct LedgerData {
    pub liked: Vec<String>,
    pub disliked: Vec<String>,
    pub blocked: Vec<String>,
    pub requests: Vec<String>,
    pub matches: Vec<String>,
}

impl From<Ledger> for LedgerData {
    fn from(ledger: Ledger) -> Self {
        let ids = |v: Vec<crate::common::UserId>| v.into_iter().map(|id| id.to_string()).collect();
        Self {
            liked: ids(ledger.liked),
            disliked: ids(ledger.disliked),
            blocked: ids(ledger.blocked),
            requests: ids(ledger.requests),
            matches: ids(ledger.matches),
        }
    }
}
