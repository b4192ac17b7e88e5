//! Periodic tasks
//!
//! Every task runs the same loop on its own OS thread. What differs between
//! tasks is data only: a [`TaskConfig`] naming the task, its period, and where
//! its coordinate and angle samples are routed.

mod config;
mod error;
mod periodic;
mod stats;
mod waveform;

pub use config::{Route, TaskConfig, default_task_set};
pub use error::TaskError;
pub use periodic::{PeriodicTask, TaskState};
pub use stats::{TaskStats, TaskStatsSnapshot};
pub use waveform::{WAVE_PERIOD, make_step, triangle_wave};
