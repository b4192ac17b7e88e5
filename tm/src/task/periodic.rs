//! PeriodicTask lifecycle and the shared worker loop

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle, ThreadId};
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::config::{Route, TaskConfig};
use super::error::TaskError;
use super::stats::{TaskStats, TaskStatsSnapshot};
use super::waveform::make_step;
use crate::domain::{ANGLE_RANGE, COORD_RANGE, Message};
use crate::queue::QueueRegistry;
use crate::store::SharedStore;

/// Lifecycle of a [`PeriodicTask`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Constructed, never started
    Idle,
    /// Worker thread is looping
    Running,
    /// Worker has been joined. Terminal.
    Stopped,
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// A task that wakes every period on its own thread, drains one message
/// from its queue into the store, and routes a fresh sample to its peers.
pub struct PeriodicTask {
    config: Arc<TaskConfig>,
    registry: Arc<QueueRegistry>,
    store: Arc<SharedStore>,
    running: Arc<AtomicBool>,
    stats: Arc<TaskStats>,
    state: TaskState,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    pub fn new(config: TaskConfig, registry: Arc<QueueRegistry>, store: Arc<SharedStore>) -> Self {
        debug!(name = %config.name, period_ms = config.period_ms, "PeriodicTask::new: called");
        Self {
            config: Arc::new(config),
            registry,
            store,
            running: Arc::new(AtomicBool::new(false)),
            stats: Arc::new(TaskStats::default()),
            state: TaskState::Idle,
            handle: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TaskState::Running
    }

    /// Id of the worker thread while running
    pub fn worker_id(&self) -> Option<ThreadId> {
        self.handle.as_ref().map(|h| h.thread().id())
    }

    pub fn stats(&self) -> TaskStatsSnapshot {
        self.stats.snapshot()
    }

    /// Spawn the worker thread. Does nothing if already running.
    pub fn start(&mut self) -> Result<(), TaskError> {
        match self.state {
            TaskState::Running => {
                debug!(name = %self.config.name, "PeriodicTask::start: already running");
                return Ok(());
            }
            TaskState::Stopped => {
                return Err(TaskError::Stopped {
                    name: self.config.name.clone(),
                });
            }
            TaskState::Idle => {}
        }

        self.running.store(true, Ordering::Release);
        let worker = Worker {
            config: Arc::clone(&self.config),
            registry: Arc::clone(&self.registry),
            store: Arc::clone(&self.store),
            running: Arc::clone(&self.running),
            stats: Arc::clone(&self.stats),
            started_at: None,
        };

        let spawned = thread::Builder::new()
            .name(self.config.name.clone())
            .spawn(move || worker.run());

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                self.state = TaskState::Running;
                info!(name = %self.config.name, "Task started");
                Ok(())
            }
            Err(e) => {
                self.running.store(false, Ordering::Release);
                Err(TaskError::Spawn(e))
            }
        }
    }

    /// Clear the running flag and join the worker. Does nothing unless running.
    ///
    /// Blocks for up to one period while the worker finishes its sleep.
    pub fn stop(&mut self) {
        if self.state != TaskState::Running {
            debug!(name = %self.config.name, state = %self.state, "PeriodicTask::stop: not running");
            return;
        }

        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!(name = %self.config.name, "Worker thread panicked");
            }
        }
        self.state = TaskState::Stopped;
        info!(name = %self.config.name, "Task stopped");
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.stop();
    }
}

/// State owned by the worker thread
struct Worker {
    config: Arc<TaskConfig>,
    registry: Arc<QueueRegistry>,
    store: Arc<SharedStore>,
    running: Arc<AtomicBool>,
    stats: Arc<TaskStats>,
    started_at: Option<Instant>,
}

impl Worker {
    fn run(mut self) {
        debug!(name = %self.config.name, "Worker::run: entering loop");
        while self.running.load(Ordering::Acquire) {
            self.run_once();
            thread::yield_now();
            thread::sleep(self.config.period());
        }
        debug!(name = %self.config.name, "Worker::run: exiting loop");
    }

    /// One period's worth of work, minus the sleep
    fn run_once(&mut self) {
        self.stats.record_iteration();

        if let Err(e) = self.receive() {
            if e.is_transient() {
                warn!(task = %self.config.name, error = %e, "Skipping message");
            } else {
                error!(task = %self.config.name, error = %e, "Receive failed");
            }
        }

        let (coord, angle) = sample_at(self.elapsed());

        self.send(coord, &self.config.coord_routes);
        self.send(angle, &self.config.angle_routes);
    }

    /// Drain at most one message from our queue into the store
    fn receive(&self) -> Result<(), TaskError> {
        let Some(queue) = self.registry.get_queue(&self.config.name) else {
            self.stats.record_missing_queue();
            return Err(TaskError::MissingQueue {
                name: self.config.name.clone(),
            });
        };

        let Some(msg) = queue.try_dequeue() else {
            return Ok(());
        };
        self.stats.record_received();

        match self.store.apply(&msg) {
            Ok(()) => {
                self.stats.record_applied();
                Ok(())
            }
            Err(e) => {
                self.stats.record_rejected();
                debug!(task = %self.config.name, kind = %e.kind(), "Worker::receive: rejected");
                Err(e.into())
            }
        }
    }

    fn send(&self, value: f32, routes: &[Route]) {
        for route in routes {
            match self.registry.get_queue(&route.to) {
                Some(queue) => {
                    queue.enqueue(Message::new(value, route.kind));
                    self.stats.record_sent();
                }
                None => {
                    self.stats.record_dropped();
                    let e = TaskError::MissingDestination {
                        to: route.to.clone(),
                        kind: route.kind,
                        value,
                    };
                    warn!(task = %self.config.name, error = %e, "Dropping message");
                }
            }
        }
    }

    /// Time since the first iteration
    fn elapsed(&mut self) -> Duration {
        let started_at = *self.started_at.get_or_insert_with(Instant::now);
        started_at.elapsed()
    }
}

/// Coordinate and angle samples `elapsed` into a task's run
fn sample_at(elapsed: Duration) -> (f32, f32) {
    (make_step(elapsed, COORD_RANGE), make_step(elapsed, ANGLE_RANGE))
}
