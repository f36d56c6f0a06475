// Emberline - Interaction Ledger & Match Resolver API
//
// Backend service for a swipe-based matching product: per-user interaction
// ledgers, mutual-match resolution, request accept/decline, block-gated
// chat, discovery filtering, and report submission.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
