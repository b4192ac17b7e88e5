//! Task error types

use thiserror::Error;

use crate::domain::FieldKind;
use crate::store::StoreError;

/// Conditions a task reports. None of them stop a running loop.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Can't find queue for task {name}, will retry next period")]
    MissingQueue { name: String },

    #[error("Can't send {kind} {value} to task {to}: queue doesn't exist")]
    MissingDestination { to: String, kind: FieldKind, value: f32 },

    #[error("Rejected message: {0}")]
    Store(#[from] StoreError),

    #[error("Task {name} was stopped and cannot be restarted")]
    Stopped { name: String },

    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl TaskError {
    /// True for conditions the loop logs and moves past
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TaskError::MissingQueue { .. } | TaskError::MissingDestination { .. } | TaskError::Store(_)
        )
    }
}
