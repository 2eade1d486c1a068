//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its wire field names.
//! - Provide creation helpers that normalize user input.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `title` is trimmed and non-empty when created through `Task::new`.
//! - Persisted titles are not re-validated on read.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier of a task.
///
/// Serialized as a bare string. Legacy ids (for example numeric timestamps)
/// are accepted verbatim on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Draws a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All values in ascending order, as offered by priority pickers.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Numeric sort rank: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised by task constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record, serialized as one element of the persisted array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    /// Creates a task with a freshly generated id.
    ///
    /// # Invariants
    /// - `title` and `description` are trimmed.
    /// - `completed` starts as `false` and `priority` as `Medium`.
    ///
    /// # Errors
    /// - Returns `EmptyTitle` when the trimmed title is empty.
    pub fn new(title: &str, description: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), title, description)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used when the owner must guarantee id uniqueness against an existing
    /// collection.
    pub fn with_id(
        id: TaskId,
        title: &str,
        description: &str,
    ) -> Result<Self, TaskValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            description: description.trim().to_string(),
            completed: false,
            priority: Priority::Medium,
        })
    }

    /// Flips the completion flag.
    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}
