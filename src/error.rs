//! Error types for boundq.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("out of memory")]
    OutOfMemory,

    #[error("message too big: {size} bytes exceeds queue maximum of {max}")]
    MessageTooBig { size: usize, max: usize },

    #[error("queue is full or empty, try again")]
    TryAgain,

    #[error("timed out waiting on queue")]
    Timeout,

    /// Placeholder for a failed lock/condvar primitive. `parking_lot`'s
    /// primitives don't poison or fail to lock, so this is unreachable
    /// with the default feature set; kept so the façade's `Result` return
    /// type is stable if a fallible mutex implementation is ever swapped
    /// in.
    #[error("monitor primitive failed: {reason}")]
    Poisoned { reason: String },
}

impl QueueError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }
}
