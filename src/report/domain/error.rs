//! Error types for closing reports.

use thiserror::Error;

/// Errors returned while creating or amending a closing report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportDomainError {
    /// The generated PDF URL is empty after trimming.
    #[error("generated pdf url must not be blank")]
    EmptyPdfUrl,
}
