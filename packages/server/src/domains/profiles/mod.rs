//! Profiles domain - the profile store.
//!
//! Read-only from the core's perspective apart from the admin suspension
//! flag; profile creation and editing belong to the identity/profile
//! provider.

pub mod actions;
pub mod data;
pub mod edges;
pub mod models;

pub use data::ProfileData;
pub use models::Profile;
