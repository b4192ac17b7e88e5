//! Wires a task set to one registry and one store
//!
//! Queues for every task are created before any task is constructed, so the
//! registry is frozen by the time a worker thread can look anything up.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::queue::QueueRegistry;
use crate::store::{SharedStore, Snapshot};
use crate::task::{PeriodicTask, TaskConfig, TaskError, TaskStatsSnapshot};

/// A set of periodic tasks sharing a registry and a store
pub struct Harness {
    registry: Arc<QueueRegistry>,
    store: Arc<SharedStore>,
    tasks: Vec<PeriodicTask>,
}

impl Harness {
    /// Create a queue for every task name, then the tasks themselves
    pub fn new(configs: Vec<TaskConfig>, store: Arc<SharedStore>) -> Self {
        let mut builder = QueueRegistry::builder();
        for config in &configs {
            builder.create_queue(config.name.as_str());
        }
        Self::with_registry(configs, builder.build(), store)
    }

    /// Use a registry built elsewhere. Tasks whose queue it lacks run without input.
    pub fn with_registry(configs: Vec<TaskConfig>, registry: Arc<QueueRegistry>, store: Arc<SharedStore>) -> Self {
        debug!(tasks = configs.len(), queues = registry.len(), "Harness::with_registry: called");
        let tasks = configs
            .into_iter()
            .map(|config| PeriodicTask::new(config, Arc::clone(&registry), Arc::clone(&store)))
            .collect();
        Self { registry, store, tasks }
    }

    pub fn registry(&self) -> &Arc<QueueRegistry> {
        &self.registry
    }

    pub fn store(&self) -> &Arc<SharedStore> {
        &self.store
    }

    pub fn tasks(&self) -> &[PeriodicTask] {
        &self.tasks
    }

    /// Start every task in order, stopping at the first failure
    pub fn start_all(&mut self) -> Result<(), TaskError> {
        for task in &mut self.tasks {
            task.start()?;
        }
        info!(count = self.tasks.len(), "All tasks started");
        Ok(())
    }

    /// Stop every task, joining each worker in turn
    pub fn stop_all(&mut self) {
        for task in &mut self.tasks {
            task.stop();
        }
        info!(count = self.tasks.len(), "All tasks stopped");
    }

    pub fn any_running(&self) -> bool {
        self.tasks.iter().any(PeriodicTask::is_running)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Counters for each task, in task order
    pub fn stats(&self) -> Vec<(String, TaskStatsSnapshot)> {
        self.tasks.iter().map(|t| (t.name().to_string(), t.stats())).collect()
    }

    /// Read the store `ticks` times, `interval` apart, handing each snapshot to `on_tick`
    pub fn poll<F>(&self, ticks: u32, interval: Duration, mut on_tick: F)
    where
        F: FnMut(u32, Snapshot),
    {
        for tick in 0..ticks {
            on_tick(tick, self.snapshot());
            thread::sleep(interval);
        }
    }
}
