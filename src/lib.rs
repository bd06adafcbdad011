//! A priority queue with first-in-first-out tie-breaking, and a bounded
//! service desk built on top of it.
//!
//! Larger priorities are served first.

pub mod desk;
pub mod error;
pub mod queue;

pub use error::{DeskError, EmptyQueue, ScriptError};
pub use queue::PriorityQueue;
