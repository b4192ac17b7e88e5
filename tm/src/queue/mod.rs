//! Per-task message queues and the name-based registry that routes between them
//!
//! Queues are created on a [`QueueRegistryBuilder`] during setup, then frozen
//! into a read-only [`QueueRegistry`] before any task thread starts.

mod registry;
mod task_queue;

pub use registry::{MessageQueue, QueueRegistry, QueueRegistryBuilder};
pub use task_queue::TaskQueue;
