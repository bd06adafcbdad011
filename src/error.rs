use thiserror::Error;

/// Returned when a value is requested from a queue with nothing waiting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dequeue from an empty queue")]
pub struct EmptyQueue;

/// Reasons the service desk turns a request away.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeskError {
    #[error("maximum number of customers ({max_size}) in queue")]
    Full { max_size: usize },
    #[error("no customers in the queue")]
    Empty,
}

impl From<EmptyQueue> for DeskError {
    fn from(_: EmptyQueue) -> Self {
        Self::Empty
    }
}

/// A malformed line in a desk script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    pub line: usize,
    pub reason: String,
}

impl ScriptError {
    pub(crate) fn new<S: Into<String>>(line: usize, reason: S) -> Self {
        let reason = reason.into();
        Self { line, reason }
    }
}
