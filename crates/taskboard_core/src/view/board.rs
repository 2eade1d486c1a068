//! Task board session.
//!
//! # Responsibility
//! - Own the task store and the transient state of one open board.
//! - Translate renderer actions (by task id) into store operations.
//! - Produce renderable rows from the current projection.
//!
//! # Invariants
//! - At most one task is expanded at a time.
//! - The expanded id never refers to a deleted task.
//! - Drafts are cleared only when submitting them created a task.

use crate::model::task::{Priority, Task, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::service::task_store::TaskStore;
use crate::view::projector::{SortCriterion, ViewQuery};

/// Detail text shown for tasks without a description.
pub const EMPTY_DESCRIPTION_TEXT: &str = "No description provided.";

/// One rendered task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    /// Whether the detail panel is open for this row.
    pub expanded: bool,
    /// Description, or [`EMPTY_DESCRIPTION_TEXT`] when it is empty.
    pub description_text: &'a str,
}

pub struct TaskBoard<R: TaskRepository> {
    store: TaskStore<R>,
    query: ViewQuery,
    expanded: Option<TaskId>,
    draft_title: String,
    draft_description: String,
}

impl<R: TaskRepository> TaskBoard<R> {
    /// Opens a board with an empty search and the default sort.
    pub fn new(store: TaskStore<R>) -> Self {
        Self::with_sort(store, SortCriterion::default())
    }

    pub fn with_sort(store: TaskStore<R>, sort: SortCriterion) -> Self {
        Self {
            store,
            query: ViewQuery::new(String::new(), sort),
            expanded: None,
            draft_title: String::new(),
            draft_description: String::new(),
        }
    }

    pub fn store(&self) -> &TaskStore<R> {
        &self.store
    }

    pub fn into_store(self) -> TaskStore<R> {
        self.store
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn sort(&self) -> SortCriterion {
        self.query.sort
    }

    pub fn set_sort(&mut self, sort: SortCriterion) {
        self.query.sort = sort;
    }

    pub fn expanded(&self) -> Option<&TaskId> {
        self.expanded.as_ref()
    }

    /// Expands `id`, or collapses it when it is already expanded.
    ///
    /// Unknown ids are ignored.
    pub fn toggle_expanded(&mut self, id: &TaskId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else if self.store.get(id).is_some() {
            self.expanded = Some(id.clone());
        }
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    pub fn set_draft_title(&mut self, text: impl Into<String>) {
        self.draft_title = text.into();
    }

    pub fn set_draft_description(&mut self, text: impl Into<String>) {
        self.draft_description = text.into();
    }

    /// Adds a task from the drafts.
    ///
    /// Drafts are cleared only when a task was created; a blank title keeps
    /// both fields as typed.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let id = self.store.add(&self.draft_title, &self.draft_description)?;
        self.draft_title.clear();
        self.draft_description.clear();
        Some(id)
    }

    pub fn toggle_completion(&mut self, id: &TaskId) -> bool {
        self.store.toggle_completion(id)
    }

    pub fn set_priority(&mut self, id: &TaskId, priority: Priority) -> bool {
        self.store.set_priority(id, priority)
    }

    pub fn delete(&mut self, id: &TaskId) -> bool {
        let removed = self.store.delete(id);
        if removed && self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        }
        removed
    }

    /// Current projection as renderable rows.
    pub fn rows(&self) -> Vec<TaskRow<'_>> {
        self.query
            .project(self.store.tasks())
            .into_iter()
            .map(|task| TaskRow {
                task,
                expanded: self.expanded.as_ref() == Some(&task.id),
                description_text: if task.description.is_empty() {
                    EMPTY_DESCRIPTION_TEXT
                } else {
                    task.description.as_str()
                },
            })
            .collect()
    }
}
