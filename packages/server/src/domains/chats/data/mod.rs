pub mod chat;
pub mod message;

pub use chat::ChatData;
pub use message::{MessageConnection, MessageData, MessageEdge};
