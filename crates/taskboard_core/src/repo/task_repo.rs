//! Task collection repository.
//!
//! # Responsibility
//! - Serialize the ordered task collection as a JSON array in one slot.
//! - Report absent, unreadable and malformed data distinctly.
//!
//! # Invariants
//! - Encoding then decoding yields the same tasks in the same order.
//! - No record-shape versioning: unknown shapes fail to decode.

use crate::model::task::Task;
use crate::storage::{SlotStorage, StorageError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name used when no configuration overrides it.
pub const DEFAULT_SLOT_NAME: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    /// Persisted text is not a valid task array.
    Codec(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "invalid persisted task data: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Persistence contract for the whole task collection.
pub trait TaskRepository {
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>>;
    fn save_tasks(&mut self, tasks: &[Task]) -> RepoResult<()>;
}

/// Repository storing the collection as JSON in a named slot.
pub struct SlotTaskRepository<S: SlotStorage> {
    storage: S,
    slot: String,
}

impl<S: SlotStorage> SlotTaskRepository<S> {
    /// Uses [`DEFAULT_SLOT_NAME`].
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT_NAME)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: SlotStorage> TaskRepository for SlotTaskRepository<S> {
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>> {
        let Some(raw) = self.storage.read_slot(&self.slot)? else {
            return Ok(None);
        };
        Ok(Some(decode_tasks(&raw)?))
    }

    fn save_tasks(&mut self, tasks: &[Task]) -> RepoResult<()> {
        let encoded = encode_tasks(tasks)?;
        self.storage.write_slot(&self.slot, &encoded)?;
        Ok(())
    }
}

/// Encodes tasks as the persisted JSON array.
pub fn encode_tasks(tasks: &[Task]) -> RepoResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decodes the persisted JSON array.
pub fn decode_tasks(raw: &str) -> RepoResult<Vec<Task>> {
    Ok(serde_json::from_str(raw)?)
}
