//! Unit tests for task status parsing and rendering.

use crate::task::domain::{ParseTaskStatusError, TaskStatus};
use eyre::{bail, ensure};
use rstest::rstest;

#[rstest]
#[case(TaskStatus::Active, "active")]
#[case(TaskStatus::Completed, "completed")]
#[case(TaskStatus::Trashed, "trashed")]
fn as_str_returns_the_storage_form(#[case] status: TaskStatus, #[case] expected: &str) {
    assert_eq!(status.as_str(), expected);
}

#[rstest]
#[case("active", TaskStatus::Active)]
#[case("COMPLETED", TaskStatus::Completed)]
#[case("  trashed  ", TaskStatus::Trashed)]
fn parsing_tolerates_case_and_whitespace(
    #[case] raw: &str,
    #[case] expected: TaskStatus,
) -> eyre::Result<()> {
    let status = TaskStatus::try_from(raw)?;
    ensure!(status == expected);
    Ok(())
}

#[rstest]
#[case("")]
#[case("done")]
#[case("archived")]
fn unknown_statuses_are_rejected(#[case] raw: &str) -> eyre::Result<()> {
    let result = TaskStatus::try_from(raw);
    if result != Err(ParseTaskStatusError(raw.to_owned())) {
        bail!("expected parse failure for {raw:?}, got {result:?}");
    }
    Ok(())
}
