pub mod chat;
pub mod message;

pub use chat::{pair_key, Chat};
pub use message::ChatMessage;
