//! TaskMesh - periodic producer/consumer task harness
//!
//! Periodic tasks, each on its own OS thread, compute a coordinate/angle
//! sample and exchange it through per-task named queues. Every received
//! message lands in a shared store holding the latest x, y, z, roll, pitch
//! and yaw for an external reader.
//!
//! # Architecture
//!
//! ```text
//! task     period   coord -> queue (field)   angle -> queue (field)
//! Task10   10ms     Task20 (z)               Task40 (roll)
//! Task20   20ms     Task10 (x)               Task40 (pitch)
//! Task40   40ms     Task10 (y)               Task20 (yaw)
//!
//! each period: dequeue one -> SharedStore::apply -> sample -> route -> sleep
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskmesh::{Harness, SharedStore, default_task_set};
//!
//! let mut harness = Harness::new(default_task_set(), Arc::new(SharedStore::new()));
//! harness.start_all()?;
//! std::thread::sleep(std::time::Duration::from_millis(200));
//! println!("{}", harness.snapshot());
//! harness.stop_all();
//! # Ok::<(), taskmesh::TaskError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod harness;
pub mod queue;
pub mod store;
pub mod task;

// Re-export commonly used types
pub use config::{Config, ReaderConfig};
pub use domain::{ANGLE_RANGE, COORD_RANGE, FieldKind, FieldRange, Message};
pub use harness::Harness;
pub use queue::{MessageQueue, QueueRegistry, QueueRegistryBuilder, TaskQueue};
pub use store::{SharedStore, Snapshot, StoreError};
pub use task::{PeriodicTask, Route, TaskConfig, TaskError, TaskState, TaskStatsSnapshot, default_task_set, make_step};
