pub mod queries;
pub mod submit_report;

pub use queries::list_reports;
pub use submit_report::{submit_report, ReportError};
