//! Shared handle over a [`ModalQueue`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use super::{ModalQueue, ModalSnapshot, Prompt, PromptId};

/// Cloneable handle to one modal queue.
///
/// Every operation runs one update cycle: the mutation, then a presentation
/// pass, then a [`ModalSnapshot`] is published to subscribers. Use
/// [`batch`](Self::batch) to apply several mutations in a single cycle, so
/// that prompts enqueued together are ordered by priority.
///
/// Handles created with [`new`](Self::new) never share state; clones do.
#[derive(Clone)]
pub struct ModalQueueHandle {
    queue: Arc<Mutex<ModalQueue>>,
    snapshots: Arc<watch::Sender<ModalSnapshot>>,
}

impl ModalQueueHandle {
    /// Creates a handle to a fresh, empty queue at the given location.
    pub fn new(location: impl Into<String>) -> Self {
        let queue = ModalQueue::new(location);
        let (tx, _) = watch::channel(queue.snapshot());
        Self {
            queue: Arc::new(Mutex::new(queue)),
            snapshots: Arc::new(tx),
        }
    }

    /// Subscribes to snapshots published after every update cycle.
    pub fn subscribe(&self) -> watch::Receiver<ModalSnapshot> {
        self.snapshots.subscribe()
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> ModalSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Enqueues a prompt. See [`ModalQueue::enqueue`].
    pub fn enqueue(&self, prompt: Prompt, priority: i32, persistent: bool) -> PromptId {
        self.batch(|queue| queue.enqueue(prompt, priority, persistent))
    }

    /// Dismisses the current prompt and presents the next one, if any.
    pub fn dismiss_current_modal(&self) {
        self.batch(|queue| {
            queue.dismiss_current_modal();
        });
    }

    /// Drops every prompt.
    pub fn clear_queue(&self) {
        self.batch(ModalQueue::clear_queue);
    }

    /// Reports the current navigation location.
    pub fn observe_location(&self, location: impl Into<String>) {
        let location = location.into();
        self.batch(|queue| {
            queue.observe_location(location);
        });
    }

    /// Runs `f` against the queue as a single update cycle.
    pub fn batch<R>(&self, f: impl FnOnce(&mut ModalQueue) -> R) -> R {
        let (result, snapshot) = {
            let mut queue = self.lock();
            let result = f(&mut queue);
            queue.try_present_next();
            (result, queue.snapshot())
        };
        self.snapshots.send_replace(snapshot);
        result
    }

    fn lock(&self) -> MutexGuard<'_, ModalQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
