pub mod interaction;

pub use interaction::{InteractionResult, LedgerData};
