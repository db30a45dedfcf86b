pub mod report;
pub mod types;

pub use report::{NormocontrolReport, ReportSummary};
pub use types::{Issue, Severity};
