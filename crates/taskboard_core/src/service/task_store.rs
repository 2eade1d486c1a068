//! Task store: authoritative owner of the task collection.
//!
//! # Responsibility
//! - Load the collection once at startup, recovering to empty on bad data.
//! - Apply add/delete/toggle/priority mutations by task id.
//! - Write the full collection through to the repository after each mutation.
//!
//! # Invariants
//! - Task ids in the collection are unique.
//! - Insertion order is preserved; new tasks are appended.
//! - Unknown ids and blank titles are silent no-ops and trigger no write.
//! - Mutations never return persistence errors; the in-memory collection
//!   stays authoritative and the failure is logged and retained.

use crate::model::task::{Priority, Task, TaskId};
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};
use log::{debug, error, info, warn};
use std::collections::HashSet;

/// Owns the task collection and its persistence collaborator.
pub struct TaskStore<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
    last_persist_error: Option<RepoError>,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Creates a store and loads the persisted collection.
    ///
    /// Absent, unreadable or malformed data yields an empty collection.
    pub fn load(repo: R) -> Self {
        let mut store = Self {
            repo,
            tasks: Vec::new(),
            last_persist_error: None,
        };
        store.reload();
        store
    }

    /// Replaces the in-memory collection with the persisted one.
    pub fn reload(&mut self) {
        self.tasks = match self.repo.load_tasks() {
            Ok(Some(tasks)) => {
                let loaded = tasks.len();
                let tasks = dedupe_ids(tasks);
                if tasks.len() != loaded {
                    warn!(
                        "event=tasks_load module=store status=repaired loaded={} dropped_duplicates={}",
                        loaded,
                        loaded - tasks.len()
                    );
                }
                info!(
                    "event=tasks_load module=store status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Ok(None) => {
                info!("event=tasks_load module=store status=empty");
                Vec::new()
            }
            Err(err) => {
                warn!("event=tasks_load module=store status=fallback error={err}");
                Vec::new()
            }
        };
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new task built from trimmed input.
    ///
    /// Returns the new id, or `None` when the trimmed title is empty.
    pub fn add(&mut self, title: &str, description: &str) -> Option<TaskId> {
        let Ok(task) = Task::with_id(self.fresh_id(), title, description) else {
            debug!("event=task_add module=store status=skipped reason=empty_title");
            return None;
        };

        let id = task.id.clone();
        self.tasks.push(task);
        self.write_through("task_add", &id);
        Some(id)
    }

    /// Removes the task with `id`. Returns whether a task was removed.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        self.write_through("task_delete", id);
        true
    }

    /// Flips completion of the task with `id`. Returns whether it exists.
    pub fn toggle_completion(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks[index].toggle_completion();
        self.write_through("task_toggle", id);
        true
    }

    /// Sets priority of the task with `id`. Returns whether it exists.
    pub fn set_priority(&mut self, id: &TaskId, priority: Priority) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks[index].priority = priority;
        self.write_through("task_set_priority", id);
        true
    }

    /// Writes the full collection to the repository.
    ///
    /// # Errors
    /// - Returns repository failures unchanged.
    pub fn persist(&mut self) -> RepoResult<()> {
        self.repo.save_tasks(&self.tasks)
    }

    /// Failure from the most recent write-through, cleared on success.
    pub fn last_persist_error(&self) -> Option<&RepoError> {
        self.last_persist_error.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == id)
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn write_through(&mut self, event: &'static str, id: &TaskId) {
        match self.persist() {
            Ok(()) => {
                self.last_persist_error = None;
                debug!(
                    "event={event} module=store status=ok task_id={id} count={}",
                    self.tasks.len()
                );
            }
            Err(err) => {
                error!(
                    "event={event} module=store status=error error_code=persist_failed task_id={id} error={err}"
                );
                self.last_persist_error = Some(err);
            }
        }
    }
}

/// Keeps the first task for each id, preserving order.
fn dedupe_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .into_iter()
        .filter(|task| seen.insert(task.id.clone()))
        .collect()
}
