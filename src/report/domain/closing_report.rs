//! Closing report aggregate root.

use super::ReportDomainError;
use crate::entity::{Entity, Persisted, Version};
use crate::member::domain::{Member, MemberId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted closing report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClosingReportId(i64);

impl ClosingReportId {
    /// Wraps a storage-assigned identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClosingReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closing report aggregate root.
///
/// The report date and both counts are immutable once created; the counts
/// describe the member's tasks as of the close of `report_date` in their
/// own time zone. Only the PDF attachment may change, guarded by the
/// version counter against concurrent regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingReport {
    report_date: NaiveDate,
    completed_count: u32,
    incomplete_count: u32,
    generated_pdf_url: Option<String>,
    version: Version,
    member: MemberId,
}

/// Parameter object for reconstructing a persisted closing report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedClosingReportData {
    /// Persisted calendar day the report covers.
    pub report_date: NaiveDate,
    /// Persisted count of tasks completed on the report date.
    pub completed_count: u32,
    /// Persisted count of tasks still open at the close of the report date.
    pub incomplete_count: u32,
    /// Persisted PDF URL, if one was generated.
    pub generated_pdf_url: Option<String>,
    /// Persisted optimistic-concurrency counter.
    pub version: Version,
    /// Persisted owning member identifier.
    pub member: MemberId,
}

impl ClosingReport {
    /// Creates a report without a PDF attachment.
    #[must_use]
    pub const fn create(
        report_date: NaiveDate,
        completed_count: u32,
        incomplete_count: u32,
        member: &Persisted<Member>,
    ) -> Self {
        Self {
            report_date,
            completed_count,
            incomplete_count,
            generated_pdf_url: None,
            version: Version::initial(),
            member: member.id(),
        }
    }

    /// Creates a report with an optional PDF attachment.
    ///
    /// A blank URL is treated as absent rather than rejected, matching how
    /// report generation passes through a possibly-empty renderer result.
    #[must_use]
    pub fn create_with_pdf(
        report_date: NaiveDate,
        completed_count: u32,
        incomplete_count: u32,
        generated_pdf_url: Option<&str>,
        member: &Persisted<Member>,
    ) -> Self {
        let mut report = Self::create(report_date, completed_count, incomplete_count, member);
        report.generated_pdf_url = normalize_pdf_url(generated_pdf_url);
        report
    }

    /// Reconstructs a report from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedClosingReportData) -> Self {
        Self {
            report_date: data.report_date,
            completed_count: data.completed_count,
            incomplete_count: data.incomplete_count,
            generated_pdf_url: data.generated_pdf_url,
            version: data.version,
            member: data.member,
        }
    }

    /// Returns the calendar day the report covers.
    #[must_use]
    pub const fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    /// Returns the count of tasks completed on the report date.
    #[must_use]
    pub const fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Returns the count of tasks still open at the close of the report
    /// date.
    #[must_use]
    pub const fn incomplete_count(&self) -> u32 {
        self.incomplete_count
    }

    /// Returns the combined completed and incomplete count.
    ///
    /// Saturates rather than wrapping; real counts sit far below the limit.
    #[must_use]
    pub const fn total_count(&self) -> u32 {
        self.completed_count.saturating_add(self.incomplete_count)
    }

    /// Returns the generated PDF URL, if any.
    #[must_use]
    pub fn generated_pdf_url(&self) -> Option<&str> {
        self.generated_pdf_url.as_deref()
    }

    /// Returns the optimistic-concurrency counter.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the owning member's identifier.
    #[must_use]
    pub const fn member(&self) -> MemberId {
        self.member
    }

    /// Attaches or replaces the generated PDF URL and bumps the version.
    ///
    /// # Errors
    ///
    /// Returns [`ReportDomainError::EmptyPdfUrl`] when the URL is empty
    /// after trimming.
    pub fn attach_pdf_url(&mut self, url: &str) -> Result<(), ReportDomainError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ReportDomainError::EmptyPdfUrl);
        }
        self.generated_pdf_url = Some(trimmed.to_owned());
        self.version = self.version.next();
        Ok(())
    }

    /// Removes the PDF attachment and bumps the version.
    ///
    /// Removing an attachment that is already absent still bumps the
    /// version, so two concurrent regenerations cannot both win.
    pub fn remove_pdf_url(&mut self) {
        self.generated_pdf_url = None;
        self.version = self.version.next();
    }
}

impl Entity for ClosingReport {
    type Id = ClosingReportId;
}

fn normalize_pdf_url(url: Option<&str>) -> Option<String> {
    let trimmed = url.map(str::trim)?;
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
