//! Profiles domain edges - GraphQL entry points

pub mod mutation;
pub mod query;

pub use mutation::*;
pub use query::*;
