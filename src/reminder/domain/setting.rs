//! Per-member reminder thresholds.

use super::ReminderDomainError;
use crate::entity::{Entity, Persisted};
use crate::member::domain::{Member, MemberId};
use serde::{Deserialize, Serialize};

const DEFAULT_IMMINENT_HOURS: u32 = 3;
const DEFAULT_OVERDUE_INTERVAL_HOURS: u32 = 24;
const MAX_IMMINENT_HOURS: u32 = 168;

/// Per-member reminder thresholds.
///
/// One per member; the identifier is the member's own. `imminent_hours`
/// feeds the due-status classifier (0 to 168 hours, a week at most);
/// `overdue_interval_hours` is the repeat period for overdue reminders,
/// zero meaning a single notification. Non-negativity of the interval is
/// carried by the unsigned type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSetting {
    imminent_hours: u32,
    overdue_interval_hours: u32,
    notify_day_before: bool,
    notify_on_due_day: bool,
    member: MemberId,
}

/// Parameter object for reconstructing a persisted reminder setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReminderSettingData {
    /// Persisted imminent window in hours.
    pub imminent_hours: u32,
    /// Persisted overdue repeat period in hours.
    pub overdue_interval_hours: u32,
    /// Persisted day-before toggle.
    pub notify_day_before: bool,
    /// Persisted due-day toggle.
    pub notify_on_due_day: bool,
    /// Persisted owning member identifier.
    pub member: MemberId,
}

impl ReminderSetting {
    /// Creates a setting with explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::ImminentHoursOutOfRange`] when
    /// `imminent_hours` exceeds 168.
    pub fn create(
        imminent_hours: u32,
        overdue_interval_hours: u32,
        notify_day_before: bool,
        notify_on_due_day: bool,
        member: &Persisted<Member>,
    ) -> Result<Self, ReminderDomainError> {
        validate_imminent_hours(imminent_hours)?;
        Ok(Self {
            imminent_hours,
            overdue_interval_hours,
            notify_day_before,
            notify_on_due_day,
            member: member.id(),
        })
    }

    /// Creates the default setting: three imminent hours, a daily overdue
    /// reminder, both toggles on.
    #[must_use]
    pub const fn default_for(member: &Persisted<Member>) -> Self {
        Self {
            imminent_hours: DEFAULT_IMMINENT_HOURS,
            overdue_interval_hours: DEFAULT_OVERDUE_INTERVAL_HOURS,
            notify_day_before: true,
            notify_on_due_day: true,
            member: member.id(),
        }
    }

    /// Reconstructs a setting from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedReminderSettingData) -> Self {
        Self {
            imminent_hours: data.imminent_hours,
            overdue_interval_hours: data.overdue_interval_hours,
            notify_day_before: data.notify_day_before,
            notify_on_due_day: data.notify_on_due_day,
            member: data.member,
        }
    }

    /// Returns the imminent window in hours.
    #[must_use]
    pub const fn imminent_hours(&self) -> u32 {
        self.imminent_hours
    }

    /// Returns the overdue repeat period in hours.
    #[must_use]
    pub const fn overdue_interval_hours(&self) -> u32 {
        self.overdue_interval_hours
    }

    /// Returns the day-before toggle.
    #[must_use]
    pub const fn notify_day_before(&self) -> bool {
        self.notify_day_before
    }

    /// Returns the due-day toggle.
    #[must_use]
    pub const fn notify_on_due_day(&self) -> bool {
        self.notify_on_due_day
    }

    /// Returns the owning member's identifier.
    #[must_use]
    pub const fn member(&self) -> MemberId {
        self.member
    }

    /// Replaces every threshold and toggle at once.
    ///
    /// Validates before assigning, so a failed call changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::ImminentHoursOutOfRange`] when
    /// `imminent_hours` exceeds 168.
    pub fn update_all(
        &mut self,
        imminent_hours: u32,
        overdue_interval_hours: u32,
        notify_day_before: bool,
        notify_on_due_day: bool,
    ) -> Result<(), ReminderDomainError> {
        validate_imminent_hours(imminent_hours)?;
        self.imminent_hours = imminent_hours;
        self.overdue_interval_hours = overdue_interval_hours;
        self.notify_day_before = notify_day_before;
        self.notify_on_due_day = notify_on_due_day;
        Ok(())
    }

    /// Changes the imminent window.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::ImminentHoursOutOfRange`] when the
    /// value exceeds 168.
    pub fn change_imminent_hours(&mut self, value: u32) -> Result<(), ReminderDomainError> {
        validate_imminent_hours(value)?;
        self.imminent_hours = value;
        Ok(())
    }

    /// Changes the overdue repeat period.
    pub const fn change_overdue_interval_hours(&mut self, value: u32) {
        self.overdue_interval_hours = value;
    }

    /// Toggles the day-before reminder.
    pub const fn enable_day_before(&mut self, enabled: bool) {
        self.notify_day_before = enabled;
    }

    /// Toggles the due-day reminder.
    pub const fn enable_on_due_day(&mut self, enabled: bool) {
        self.notify_on_due_day = enabled;
    }
}

impl Entity for ReminderSetting {
    type Id = MemberId;
}

const fn validate_imminent_hours(value: u32) -> Result<(), ReminderDomainError> {
    if value > MAX_IMMINENT_HOURS {
        return Err(ReminderDomainError::ImminentHoursOutOfRange(value));
    }
    Ok(())
}
