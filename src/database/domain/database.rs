//! Database aggregate root.

use super::DatabaseDomainError;
use crate::entity::{Entity, Persisted};
use crate::member::domain::{Member, MemberId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Surrogate identifier for a persisted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseId(i64);

impl DatabaseId {
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

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database aggregate root.
///
/// Owned by exactly one member; the owner is captured at creation and never
/// changes. The name preserves the caller's original whitespace; only
/// whitespace-only names are rejected. A blank description normalizes to
/// absent. Deletion is a soft-delete timestamp, `None` meaning active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    name: String,
    description: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
    owner: MemberId,
}

/// Parameter object for reconstructing a persisted database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDatabaseData {
    /// Persisted name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted soft-deletion timestamp, if any.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Persisted owner identifier.
    pub owner: MemberId,
}

impl Database {
    /// Creates a new active database owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns a [`DatabaseDomainError`] when the name is blank or too long,
    /// or the description is too long.
    pub fn create(
        name: &str,
        description: Option<&str>,
        owner: &Persisted<Member>,
    ) -> Result<Self, DatabaseDomainError> {
        Ok(Self {
            name: validate_name(name)?,
            description: normalize_description(description)?,
            deleted_at: None,
            owner: owner.id(),
        })
    }

    /// Reconstructs a database from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDatabaseData) -> Self {
        Self {
            name: data.name,
            description: data.description,
            deleted_at: data.deleted_at,
            owner: data.owner,
        }
    }

    /// Returns the database name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the soft-deletion timestamp, if any.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns whether the database has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the owning member's identifier.
    #[must_use]
    pub const fn owner(&self) -> MemberId {
        self.owner
    }

    /// Renames the database and replaces its description.
    ///
    /// Both inputs are validated before either field is assigned, so a
    /// failed call leaves the database unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseDomainError::NotOwner`] when `actor` is not the
    /// owner, or a validation error for the name or description.
    pub fn rename(
        &mut self,
        new_name: &str,
        new_description: Option<&str>,
        actor: &Persisted<Member>,
    ) -> Result<(), DatabaseDomainError> {
        self.ensure_owner(actor)?;
        let name = validate_name(new_name)?;
        let description = normalize_description(new_description)?;
        self.name = name;
        self.description = description;
        Ok(())
    }

    /// Soft-deletes the database at the clock's current instant.
    ///
    /// Idempotent: a second call keeps the original deletion timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseDomainError::NotOwner`] when `actor` is not the
    /// owner.
    pub fn delete_by_owner(
        &mut self,
        clock: &impl Clock,
        actor: &Persisted<Member>,
    ) -> Result<(), DatabaseDomainError> {
        self.ensure_owner(actor)?;
        if self.deleted_at.is_none() {
            self.deleted_at = Some(clock.utc());
        }
        Ok(())
    }

    fn ensure_owner(&self, actor: &Persisted<Member>) -> Result<(), DatabaseDomainError> {
        if actor.id() != self.owner {
            return Err(DatabaseDomainError::NotOwner { actor: actor.id() });
        }
        Ok(())
    }
}

impl Entity for Database {
    type Id = DatabaseId;
}

fn validate_name(raw: &str) -> Result<String, DatabaseDomainError> {
    if raw.trim().is_empty() {
        return Err(DatabaseDomainError::BlankName);
    }
    let length = raw.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(DatabaseDomainError::NameTooLong(length));
    }
    // original text preserved, including interior and edge whitespace
    Ok(raw.to_owned())
}

fn normalize_description(raw: Option<&str>) -> Result<Option<String>, DatabaseDomainError> {
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => {
            let length = text.chars().count();
            if length > MAX_DESCRIPTION_LENGTH {
                return Err(DatabaseDomainError::DescriptionTooLong(length));
            }
            Ok(Some(text.to_owned()))
        }
    }
}
