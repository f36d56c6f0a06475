pub mod mark_read;
pub mod queries;
pub mod send_message;

pub use mark_read::mark_chat_read;
pub use queries::{list_chats, list_messages};
pub use send_message::{send_message, ChatError};
