//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical `Task` record and its priority scale.
//! - Enforce creation-time invariants (trimmed, non-empty title).
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal owned by the store; the model has no tombstones.

pub mod task;
