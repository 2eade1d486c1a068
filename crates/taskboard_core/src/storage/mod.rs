//! Named key-value slots backing task persistence.
//!
//! # Responsibility
//! - Define the durable storage contract consumed by repositories.
//! - Provide in-memory and SQLite backends.
//!
//! # Invariants
//! - A slot holds one opaque string value; writes replace it wholesale.
//! - Reading a slot that was never written returns `Ok(None)`, not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemorySlotStorage;
pub use sqlite::SqliteSlotStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a slot backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Failure reported by a backend outside this crate.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string storage addressed by slot name.
pub trait SlotStorage {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>>;
    fn write_slot(&mut self, name: &str, value: &str) -> StorageResult<()>;
    /// Removes a slot. Removing an absent slot is not an error.
    fn remove_slot(&mut self, name: &str) -> StorageResult<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        (**self).read_slot(name)
    }

    fn write_slot(&mut self, name: &str, value: &str) -> StorageResult<()> {
        (**self).write_slot(name, value)
    }

    fn remove_slot(&mut self, name: &str) -> StorageResult<()> {
        (**self).remove_slot(name)
    }
}
