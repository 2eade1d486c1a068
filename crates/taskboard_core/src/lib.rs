//! Core domain logic for Taskboard.
//! This crate is the single source of truth for the task collection and
//! its derived views; renderers consume it and never mutate tasks directly.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod view;

pub use config::{ConfigError, ConfiguredBoard, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use repo::task_repo::{
    RepoError, RepoResult, SlotTaskRepository, TaskRepository, DEFAULT_SLOT_NAME,
};
pub use service::task_store::TaskStore;
pub use storage::{MemorySlotStorage, SlotStorage, SqliteSlotStorage, StorageError, StorageResult};
pub use view::board::{TaskBoard, TaskRow, EMPTY_DESCRIPTION_TEXT};
pub use view::projector::{locale_compare, project, SortCriterion, ViewQuery};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
