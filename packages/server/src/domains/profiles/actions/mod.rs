//! Profile domain actions - business logic functions

mod queries;
mod suspend;

pub use queries::discovery_candidates;
pub use suspend::set_profile_suspended;
