pub mod report;

pub use report::ReportData;
