//! Repository layer over slot storage.
//!
//! # Responsibility
//! - Encode and decode the task collection for one persistence slot.
//! - Keep storage backends decoupled from the store.
//!
//! # Invariants
//! - The whole collection is written on every save; there are no partial
//!   updates.

pub mod task_repo;
