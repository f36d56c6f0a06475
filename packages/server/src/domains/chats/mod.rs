//! Pair chats: the conversation summary and message log behind each match.

pub mod actions;
pub mod data;
pub mod edges;
pub mod events;
pub mod models;

pub use models::{pair_key, Chat, ChatMessage};
