//! Typed id definitions for the domain entities.
//!
//! Chat ids are deliberately NOT here: a chat is keyed by the canonical
//! pair key (a sorted-and-joined string), not a UUID. See
//! `domains::chats::pair_key`.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for user profiles.
pub struct User;

/// Marker type for chat messages.
pub struct ChatMessage;

/// Marker type for abuse reports.
pub struct Report;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed id for user profiles.
pub type UserId = Id<User>;

/// Typed id for chat messages.
pub type ChatMessageId = Id<ChatMessage>;

/// Typed id for abuse reports.
pub type ReportId = Id<Report>;
