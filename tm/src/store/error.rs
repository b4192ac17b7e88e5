//! Store error types

use thiserror::Error;

use crate::domain::FieldKind;

/// Errors reported by store setters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{kind} value {value} outside [{min}, {max}]")]
    OutOfRange { kind: FieldKind, value: f32, min: f32, max: f32 },
}

impl StoreError {
    /// The field the rejected value was meant for
    pub fn kind(&self) -> FieldKind {
        match self {
            StoreError::OutOfRange { kind, .. } => *kind,
        }
    }
}
