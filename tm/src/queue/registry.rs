//! Name -> queue registry
//!
//! All queue creation happens on the builder. Once frozen, the registry
//! offers lookups only and can be shared freely across task threads.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::TaskQueue;
use crate::domain::Message;

/// Queue type every task consumes from
pub type MessageQueue = TaskQueue<Message>;

/// Mutable setup phase of the registry
#[derive(Debug, Default)]
pub struct QueueRegistryBuilder {
    queues: BTreeMap<String, Arc<MessageQueue>>,
}

impl QueueRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a queue under `name` unless one already exists
    pub fn create_queue(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if self.queues.contains_key(&name) {
            debug!(%name, "QueueRegistryBuilder::create_queue: already exists");
        } else {
            debug!(%name, "QueueRegistryBuilder::create_queue: created");
            self.queues.insert(name, Arc::new(MessageQueue::new()));
        }
        self
    }

    /// Freeze into a read-only registry
    pub fn build(self) -> Arc<QueueRegistry> {
        debug!(count = self.queues.len(), "QueueRegistryBuilder::build: called");
        Arc::new(QueueRegistry { queues: self.queues })
    }
}

/// Read-only view of the registered queues
#[derive(Debug)]
pub struct QueueRegistry {
    queues: BTreeMap<String, Arc<MessageQueue>>,
}

impl QueueRegistry {
    pub fn builder() -> QueueRegistryBuilder {
        QueueRegistryBuilder::new()
    }

    /// Shared handle to the queue registered under `name`
    pub fn get_queue(&self, name: &str) -> Option<Arc<MessageQueue>> {
        self.queues.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.queues.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}
