pub mod ledger;

pub use ledger::{
    add_edge, has_edge, load_pair_state, pair_advisory_lock, pair_blocked, remove_edge, EdgeKind,
    InteractionEdge, Ledger,
};
