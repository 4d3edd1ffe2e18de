//! Persistence identity markers shared by every aggregate.
//!
//! Domain constructors return bare draft values without identifiers. Only the
//! storage collaborator assigns a surrogate identifier and wraps the value as
//! [`Persisted`]. Relationship-building operations take `&Persisted<_>`
//! references, so "the reference must not be transient" is enforced by the
//! type system rather than by a runtime null check.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// Domain aggregate identified by a storage-assigned surrogate identifier.
pub trait Entity {
    /// Surrogate identifier type assigned by the storage layer.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned;
}

/// Entity value paired with its storage-assigned identifier.
///
/// Constructed by the storage collaborator after a successful insert; the
/// core never mints identifiers itself. The wrapper derefs to the entity, so
/// lifecycle mutators stay callable on the persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Persisted<T: Entity> {
    id: T::Id,
    entity: T,
}

impl<T: Entity> Persisted<T> {
    /// Pairs an entity with its storage-assigned identifier.
    #[must_use]
    pub const fn new(id: T::Id, entity: T) -> Self {
        Self { id, entity }
    }

    /// Returns the surrogate identifier.
    #[must_use]
    pub const fn id(&self) -> T::Id {
        self.id
    }

    /// Returns the wrapped entity value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.entity
    }

    /// Returns the wrapped entity value mutably.
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.entity
    }

    /// Unwraps the entity, discarding the identifier.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.entity
    }
}

impl<T: Entity> Deref for Persisted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.entity
    }
}

impl<T: Entity> DerefMut for Persisted<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.entity
    }
}

/// Optimistic concurrency counter compared at write time.
///
/// Entities that may be mutated by concurrent callers carry a version; the
/// storage collaborator performs the compare-and-swap and signals a conflict,
/// after which the caller retries the whole read-decide-write cycle. The core
/// only transports the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// Version carried by a freshly constructed draft.
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// Wraps a persisted version value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the successor version written by a successful commit.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Persisted, Version};
    use crate::member::domain::{Member, MemberId};
    use eyre::ensure;
    use rstest::rstest;

    #[rstest]
    fn version_counts_up_from_zero() {
        assert_eq!(Version::initial().value(), 0);
        assert_eq!(Version::initial().next(), Version::new(1));
        assert_eq!(Version::new(41).next().value(), 42);
    }

    #[rstest]
    fn persisted_serializes_with_a_flat_id_field() -> eyre::Result<()> {
        let member = Member::create("alice01", "$argon2id$stub-hash", "Alice", "Asia/Seoul")?;
        let persisted = Persisted::new(MemberId::new(7), member);

        let json = serde_json::to_value(&persisted)?;

        ensure!(json["id"] == serde_json::json!(7));
        ensure!(json["entity"]["nickname"] == serde_json::json!("Alice"));

        let restored: Persisted<Member> = serde_json::from_value(json)?;
        ensure!(restored.id() == MemberId::new(7));
        ensure!(restored.nickname() == "Alice");
        Ok(())
    }

    #[rstest]
    fn deref_exposes_entity_accessors() -> eyre::Result<()> {
        let member = Member::create("alice01", "$argon2id$stub-hash", "Alice", "Asia/Seoul")?;
        let mut persisted = Persisted::new(MemberId::new(7), member);

        persisted.change_nickname("Alicia")?;

        ensure!(persisted.nickname() == "Alicia");
        ensure!(persisted.into_inner().nickname() == "Alicia");
        Ok(())
    }
}
