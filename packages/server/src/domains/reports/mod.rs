//! User reports and the moderation notification hook.

pub mod actions;
pub mod data;
pub mod edges;
pub mod models;

pub use models::Report;
