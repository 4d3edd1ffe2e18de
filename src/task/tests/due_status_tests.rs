//! Unit tests for due-status classification boundaries.

use crate::task::domain::{DueStatus, Task};
use crate::test_support::{epoch_plus_hours, sample_queue};
use chrono::TimeDelta;
use eyre::ensure;
use rstest::rstest;

const IMMINENT_HOURS: u32 = 3;

#[rstest]
fn undated_task_is_always_normal() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let task = Task::create("Write report", &queue)?;

    let status = task.check_due_status(epoch_plus_hours(100), IMMINENT_HOURS);

    ensure!(status == DueStatus::Normal);
    Ok(())
}

// `now` is fixed at hour 100; the due time moves around it. Both window
// edges are pinned: due exactly now is Normal, due exactly at the window
// edge is Imminent, one second past either edge flips the class.
#[rstest]
#[case(TimeDelta::hours(-1), DueStatus::Overdue)]
#[case(TimeDelta::seconds(-1), DueStatus::Overdue)]
#[case(TimeDelta::zero(), DueStatus::Normal)]
#[case(TimeDelta::seconds(1), DueStatus::Imminent)]
#[case(TimeDelta::hours(1), DueStatus::Imminent)]
#[case(TimeDelta::hours(3), DueStatus::Imminent)]
#[case(TimeDelta::hours(3) + TimeDelta::seconds(1), DueStatus::Normal)]
#[case(TimeDelta::hours(48), DueStatus::Normal)]
fn classification_is_boundary_exact(
    #[case] due_offset: TimeDelta,
    #[case] expected: DueStatus,
) -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    let now = epoch_plus_hours(100);
    task.set_due(Some(now + due_offset));

    let status = task.check_due_status(now, IMMINENT_HOURS);

    ensure!(status == expected, "offset {due_offset}: got {status:?}");
    Ok(())
}

#[rstest]
fn zero_imminent_hours_collapses_the_window() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    let now = epoch_plus_hours(100);
    task.set_due(Some(now + TimeDelta::seconds(1)));

    // with an empty window nothing upcoming classifies as imminent
    let status = task.check_due_status(now, 0);

    ensure!(status == DueStatus::Normal);
    Ok(())
}

#[rstest]
fn classification_does_not_mutate_the_task() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    let now = epoch_plus_hours(100);
    task.set_due(Some(now - TimeDelta::hours(5)));

    let first = task.check_due_status(now, IMMINENT_HOURS);
    let second = task.check_due_status(now, IMMINENT_HOURS);

    ensure!(first == DueStatus::Overdue);
    ensure!(second == DueStatus::Overdue);
    ensure!(task.due_at() == Some(now - TimeDelta::hours(5)));
    Ok(())
}

#[rstest]
fn wider_window_picks_up_a_farther_due_time() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    let now = epoch_plus_hours(100);
    task.set_due(Some(now + TimeDelta::hours(24)));

    ensure!(task.check_due_status(now, 3) == DueStatus::Normal);
    ensure!(task.check_due_status(now, 24) == DueStatus::Imminent);
    Ok(())
}
