pub mod profile;

pub use profile::{ProfileConnection, ProfileData, ProfileEdge};
