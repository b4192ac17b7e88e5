//! Message exchanged between task queues

use super::FieldKind;

/// A single typed sample routed to another task's queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Message {
    pub payload: f32,
    pub kind: FieldKind,
}

impl Message {
    pub fn new(payload: f32, kind: FieldKind) -> Self {
        Self { payload, kind }
    }
}
