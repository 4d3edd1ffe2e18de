//! Unit tests for the task lifecycle.

use crate::entity::Persisted;
use crate::queue::domain::TaskQueueId;
use crate::task::domain::{Task, TaskDomainError, TaskImportance, TaskStatus};
use crate::test_support::{
    FixedClock, epoch_plus_hours, persisted_database, persisted_member, persisted_queue,
    sample_queue,
};
use chrono::TimeDelta;
use eyre::{bail, ensure};
use rstest::rstest;

#[rstest]
fn create_starts_active_with_empty_optionals() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let task = Task::create("Write report", &queue)?;

    ensure!(task.status() == TaskStatus::Active);
    ensure!(task.progress() == 0);
    ensure!(task.content().is_none());
    ensure!(task.importance().is_none());
    ensure!(task.due_at().is_none());
    ensure!(task.completed_at().is_none());
    ensure!(task.trashed_at().is_none());
    ensure!(task.priority_index().is_none());
    ensure!(task.queue() == queue.id());
    Ok(())
}

#[rstest]
fn title_is_stored_verbatim() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let task = Task::create("  Title  ", &queue)?;
    ensure!(task.title() == "  Title  ");
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_titles_are_rejected(#[case] title: &str) -> eyre::Result<()> {
    let queue = sample_queue()?;
    let result = Task::create(title, &queue);
    if result != Err(TaskDomainError::BlankTitle) {
        bail!("expected BlankTitle, got {result:?}");
    }
    Ok(())
}

#[rstest]
fn failed_title_edit_keeps_old_title() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Original", &queue)?;

    let result = task.edit_title("  ");

    ensure!(result == Err(TaskDomainError::BlankTitle));
    ensure!(task.title() == "Original");
    Ok(())
}

#[rstest]
fn blank_content_normalizes_to_absent() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    task.edit_content(Some("notes"));
    ensure!(task.content() == Some("notes"));

    task.edit_content(Some("   "));
    ensure!(task.content().is_none());
    Ok(())
}

#[rstest]
#[case(0)]
#[case(55)]
#[case(100)]
fn progress_within_range_is_accepted(#[case] percent: u8) -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    task.update_progress(percent)?;
    ensure!(task.progress() == percent);
    Ok(())
}

#[rstest]
fn progress_over_hundred_is_rejected() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    let result = task.update_progress(101);

    ensure!(result == Err(TaskDomainError::InvalidProgress(101)));
    ensure!(task.progress() == 0);
    Ok(())
}

#[rstest]
fn defer_days_pushes_an_existing_due_time() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    task.set_due(Some(epoch_plus_hours(24)));

    task.defer_days(3, &FixedClock(epoch_plus_hours(0)))?;

    ensure!(task.due_at() == Some(epoch_plus_hours(24) + TimeDelta::days(3)));
    Ok(())
}

#[rstest]
fn defer_days_seeds_from_the_clock_when_undated() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    task.defer_days(1, &FixedClock(epoch_plus_hours(6)))?;

    ensure!(task.due_at() == Some(epoch_plus_hours(6) + TimeDelta::days(1)));
    Ok(())
}

#[rstest]
fn defer_by_zero_days_is_rejected() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    let result = task.defer_days(0, &FixedClock(epoch_plus_hours(0)));

    ensure!(result == Err(TaskDomainError::ZeroDeferDays));
    ensure!(task.due_at().is_none());
    Ok(())
}

#[rstest]
fn mark_completed_records_status_and_instant() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    task.mark_completed(&FixedClock(epoch_plus_hours(8)));

    ensure!(task.status() == TaskStatus::Completed);
    ensure!(task.completed_at() == Some(epoch_plus_hours(8)));
    Ok(())
}

#[rstest]
fn reopen_clears_completion_and_is_idempotent() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    task.mark_completed(&FixedClock(epoch_plus_hours(8)));

    task.reopen();
    ensure!(task.status() == TaskStatus::Active);
    ensure!(task.completed_at().is_none());

    // reopening an already-active task is a no-op, not an error
    task.reopen();
    ensure!(task.status() == TaskStatus::Active);
    Ok(())
}

#[rstest]
fn soft_delete_trashes_at_the_clock_instant() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    task.soft_delete(&FixedClock(epoch_plus_hours(12)));

    ensure!(task.status() == TaskStatus::Trashed);
    ensure!(task.trashed_at() == Some(epoch_plus_hours(12)));
    Ok(())
}

#[rstest]
fn move_within_queue_reassigns_the_priority_index() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    task.move_within_queue(&queue, Some(7))?;

    ensure!(task.priority_index() == Some(7));
    Ok(())
}

#[rstest]
fn cross_queue_move_is_rejected() -> eyre::Result<()> {
    let member = persisted_member(1)?;
    let database = persisted_database(1, &member)?;
    let home = persisted_queue(1, &database)?;
    let other = persisted_queue(2, &database)?;
    let mut task = Task::create("Write report", &home)?;
    task.move_within_queue(&home, Some(3))?;

    let result = task.move_within_queue(&other, Some(0));
    let expected = Err(TaskDomainError::CrossQueueMove {
        from: home.id(),
        to: other.id(),
    });

    if result != expected {
        bail!("expected {expected:?}, got {result:?}");
    }
    ensure!(task.queue() == home.id());
    ensure!(task.priority_index() == Some(3));
    Ok(())
}

#[rstest]
fn active_task_is_never_hard_deletable() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let task = Task::create("Write report", &queue)?;
    ensure!(!task.can_hard_delete(&FixedClock(epoch_plus_hours(1000))));
    Ok(())
}

#[rstest]
fn manual_hard_delete_opens_at_the_trashing_instant() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    task.soft_delete(&FixedClock(epoch_plus_hours(10)));

    ensure!(task.can_hard_delete(&FixedClock(epoch_plus_hours(10))));
    ensure!(task.can_hard_delete(&FixedClock(epoch_plus_hours(11))));
    Ok(())
}

#[rstest]
// inclusive boundary on the retention end
#[case(TimeDelta::hours(72), 81, false)]
#[case(TimeDelta::hours(72), 82, true)]
#[case(TimeDelta::hours(72), 83, true)]
#[case(TimeDelta::zero(), 10, true)]
fn retention_hard_delete_waits_out_the_window(
    #[case] retention: TimeDelta,
    #[case] now_hours: i64,
    #[case] expected: bool,
) -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;
    task.soft_delete(&FixedClock(epoch_plus_hours(10)));

    let eligible = task.can_hard_delete_after(&FixedClock(epoch_plus_hours(now_hours)), retention);

    ensure!(eligible == expected);
    Ok(())
}

#[rstest]
fn importance_can_be_set_and_cleared() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let mut task = Task::create("Write report", &queue)?;

    task.change_importance(Some(TaskImportance::High));
    ensure!(task.importance() == Some(TaskImportance::High));

    task.change_importance(None);
    ensure!(task.importance().is_none());
    Ok(())
}

#[rstest]
fn tasks_in_different_queues_are_independent() -> eyre::Result<()> {
    let member = persisted_member(1)?;
    let database = persisted_database(1, &member)?;
    let first = persisted_queue(1, &database)?;
    let second = persisted_queue(2, &database)?;

    let task_one = Task::create("One", &first)?;
    let task_two = Task::create("Two", &second)?;

    ensure!(task_one.queue() != task_two.queue());
    ensure!(task_one.queue() == TaskQueueId::new(1));
    Ok(())
}

#[rstest]
fn persisted_wrapper_derefs_to_the_task() -> eyre::Result<()> {
    let queue = sample_queue()?;
    let task = Task::create("Write report", &queue)?;
    let persisted = Persisted::new(crate::task::domain::TaskId::new(9), task);

    ensure!(persisted.title() == "Write report");
    ensure!(persisted.id() == crate::task::domain::TaskId::new(9));
    Ok(())
}
