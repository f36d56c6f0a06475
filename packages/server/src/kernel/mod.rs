//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod stream_hub;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, WebhookNotifier};
pub use stream_hub::StreamHub;
pub use traits::{BaseNotifier, ReportNotification};
