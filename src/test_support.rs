//! Shared fixtures for the domain test suites.

use crate::database::domain::{Database, DatabaseId};
use crate::entity::Persisted;
use crate::member::domain::{Member, MemberId};
use crate::queue::domain::{TaskQueue, TaskQueueId};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

/// Clock pinned to a single instant, for boundary-exact assertions.
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A deterministic instant `hours` hours past the Unix epoch.
pub(crate) fn epoch_plus_hours(hours: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::hours(hours)
}

pub(crate) fn persisted_member(id: i64) -> eyre::Result<Persisted<Member>> {
    let member = Member::create("alice01", "$argon2id$stub-hash", "Alice", "Asia/Seoul")?;
    Ok(Persisted::new(MemberId::new(id), member))
}

pub(crate) fn persisted_database(id: i64, owner: &Persisted<Member>) -> eyre::Result<Persisted<Database>> {
    let database = Database::create("Personal", Some("daily work"), owner)?;
    Ok(Persisted::new(DatabaseId::new(id), database))
}

pub(crate) fn persisted_queue(
    id: i64,
    database: &Persisted<Database>,
) -> eyre::Result<Persisted<TaskQueue>> {
    let queue = TaskQueue::create("Inbox", None, database)?;
    Ok(Persisted::new(TaskQueueId::new(id), queue))
}

/// Builds the member, database, queue chain most suites start from.
pub(crate) fn sample_queue() -> eyre::Result<Persisted<TaskQueue>> {
    let member = persisted_member(1)?;
    let database = persisted_database(1, &member)?;
    persisted_queue(1, &database)
}
