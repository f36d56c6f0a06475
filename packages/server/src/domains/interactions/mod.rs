//! The interaction ledger: per-user liked / disliked / blocked / requests /
//! matches sets, and the resolver that reconciles them into matches.

pub mod actions;
pub mod data;
pub mod edges;
pub mod events;
pub mod models;
pub mod resolver;

pub use models::{EdgeKind, Ledger};
pub use resolver::{Intent, PairState, Transition, TransitionError};
