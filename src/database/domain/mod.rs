//! Domain model for owned task databases.

mod database;
mod error;

pub use database::{Database, DatabaseId, PersistedDatabaseData};
pub use error::DatabaseDomainError;
