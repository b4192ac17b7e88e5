//! Domain types shared by queues, tasks, and the store

mod field;
mod message;

pub use field::{ANGLE_RANGE, COORD_RANGE, FieldKind, FieldRange, PI};
pub use message::Message;

/// Name of the 10ms task
pub const TASK10_NAME: &str = "Task10";

/// Name of the 20ms task
pub const TASK20_NAME: &str = "Task20";

/// Name of the 40ms task
pub const TASK40_NAME: &str = "Task40";
