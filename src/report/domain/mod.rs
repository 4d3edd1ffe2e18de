//! Domain model for daily closing reports.

mod closing_report;
mod error;

pub use closing_report::{ClosingReport, ClosingReportId, PersistedClosingReportData};
pub use error::ReportDomainError;
