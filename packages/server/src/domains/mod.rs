pub mod auth;
pub mod chats;
pub mod interactions;
pub mod profiles;
pub mod reports;
