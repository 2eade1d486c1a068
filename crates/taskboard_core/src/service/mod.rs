//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative task collection and its mutations.
//! - Keep presentation layers decoupled from persistence details.

pub mod task_store;
