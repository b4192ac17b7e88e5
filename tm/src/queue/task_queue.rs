//! Unbounded thread-safe FIFO

use std::collections::VecDeque;

use parking_lot::Mutex;

/// Unbounded FIFO shared between producer threads and one consuming task.
///
/// The lock is held only for the push or pop itself. Nothing ever blocks
/// waiting for items; consumers poll with [`TaskQueue::try_dequeue`].
#[derive(Debug)]
pub struct TaskQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    /// Append to the back
    pub fn enqueue(&self, item: T) {
        self.items.lock().push_back(item);
    }

    /// Pop the front item, or `None` if the queue is empty
    pub fn try_dequeue(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    /// Number of pending items. Stale as soon as it returns.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}
