//! Derived views over the task collection.
//!
//! # Responsibility
//! - Project the collection into the ordered rows a renderer displays.
//! - Hold transient UI state that must never reach persistent storage.
//!
//! # Invariants
//! - Projection never mutates or copies tasks.
//! - Search, sort, expansion and drafts are not persisted.

pub mod board;
pub mod projector;
