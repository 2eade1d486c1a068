//! Core configuration.
//!
//! # Responsibility
//! - Describe where tasks are persisted and how logging starts.
//! - Wire storage, repository, store and board from one value.
//!
//! # Invariants
//! - Missing JSON fields take their defaults; unknown fields are rejected.
//! - A validated config has a non-blank slot name and, when set, an absolute
//!   log directory.

use crate::logging::{default_log_level, init_logging, LoggingError};
use crate::repo::task_repo::{SlotTaskRepository, DEFAULT_SLOT_NAME};
use crate::service::task_store::TaskStore;
use crate::storage::{MemorySlotStorage, SlotStorage, SqliteSlotStorage, StorageError};
use crate::view::board::TaskBoard;
use crate::view::projector::SortCriterion;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Board type produced by [`CoreConfig::open_board`].
pub type ConfiguredBoard = TaskBoard<SlotTaskRepository<Box<dyn SlotStorage>>>;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(String),
    Storage(StorageError),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
            Self::Storage(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<StorageError> for ConfigError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// Startup configuration for one task board.
///
/// ```json
/// {
///   "storage_slot": "tasks",
///   "database_path": "/home/me/.taskboard/tasks.sqlite3",
///   "log_level": "info",
///   "log_dir": "/home/me/.taskboard/logs",
///   "default_sort": "alphabetical"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Slot holding the serialized task array.
    pub storage_slot: String,
    /// SQLite file; `None` keeps tasks in memory only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` leaves logging off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    pub default_sort: SortCriterion,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage_slot: DEFAULT_SLOT_NAME.to_string(),
            database_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            default_sort: SortCriterion::default(),
        }
    }
}

impl CoreConfig {
    /// Reads and validates a JSON config file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_slot.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage_slot cannot be blank".to_string(),
            ));
        }
        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be absolute, got `{}`",
                    log_dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Starts logging when `log_dir` is set. Returns whether it did.
    pub fn init_logging(&self) -> Result<bool, ConfigError> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        init_logging(&self.log_level, log_dir)?;
        Ok(true)
    }

    /// Opens storage, loads the store and returns a board using
    /// `default_sort`.
    pub fn open_board(&self) -> Result<ConfiguredBoard, ConfigError> {
        self.validate()?;

        let storage: Box<dyn SlotStorage> = match &self.database_path {
            Some(path) => Box::new(SqliteSlotStorage::open(path)?),
            None => Box::new(MemorySlotStorage::new()),
        };
        let repo = SlotTaskRepository::with_slot(storage, self.storage_slot.as_str());
        let store = TaskStore::load(repo);
        info!(
            "event=board_open module=config status=ok persistent={} count={}",
            self.database_path.is_some(),
            store.len()
        );

        Ok(TaskBoard::with_sort(store, self.default_sort))
    }
}
