pub mod apply;
pub mod block;
pub mod like;
pub mod queries;
pub mod requests;

pub use apply::{IntentOutcome, InteractionError};
pub use block::{block_profile, unblock_profile};
pub use like::{dislike_profile, like_profile};
pub use queries::{list_matches, list_requests, my_ledger};
pub use requests::{accept_request, decline_request};
