//! The modal queue coordinator.

use log::debug;

use super::{Prompt, PromptId};

/// A prompt waiting in, or presented from, the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedPrompt {
    /// Id assigned at enqueue time.
    pub id: PromptId,
    /// Kind and payload.
    pub prompt: Prompt,
    /// Higher is presented sooner.
    pub priority: i32,
    /// Whether the prompt survives a navigation change.
    pub persistent: bool,
    /// Arrival order, used to break priority ties.
    seq: u64,
}

/// What the rendering layer needs to know about the queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSnapshot {
    /// The prompt currently presented, if any.
    pub current: Option<QueuedPrompt>,
    /// Whether a prompt is presented.
    pub is_showing: bool,
    /// Number of prompts waiting in the backlog.
    pub queue_length: usize,
    /// Last observed navigation location.
    pub location: String,
}

/// Priority-ordered, navigation-aware queue of prompts.
///
/// Mutations never present anything on their own. The host calls
/// [`try_present_next`](Self::try_present_next) once per update cycle, which
/// moves the best waiting prompt into the active slot if nothing is shown.
/// Enqueues made in the same cycle therefore compete on priority instead of
/// on arrival.
///
/// # Example
///
/// ```
/// use worlddex_lib::{ModalQueue, Prompt};
///
/// let mut queue = ModalQueue::new("/camera");
/// queue.enqueue(Prompt::location("Oak tree"), 10, true);
/// queue.enqueue(Prompt::level_up(3), 100, true);
/// queue.try_present_next();
///
/// assert_eq!(queue.current_modal().map(|p| p.priority), Some(100));
/// assert_eq!(queue.queue_length(), 1);
/// ```
#[derive(Debug)]
pub struct ModalQueue {
    backlog: Vec<QueuedPrompt>,
    active: Option<QueuedPrompt>,
    location: String,
    next_seq: u64,
}

impl ModalQueue {
    /// Creates an empty queue at the given navigation location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            backlog: Vec::new(),
            active: None,
            location: location.into(),
            next_seq: 0,
        }
    }

    /// Adds a prompt to the backlog and returns its id.
    ///
    /// Always legal, including while another prompt is shown. Identical
    /// prompts are not deduplicated.
    pub fn enqueue(&mut self, prompt: Prompt, priority: i32, persistent: bool) -> PromptId {
        let id = PromptId::new();
        debug!(
            "ModalQueue: enqueue {} ({}) priority={} persistent={}",
            prompt.kind_name(),
            id,
            priority,
            persistent
        );
        self.backlog.push(QueuedPrompt {
            id,
            prompt,
            priority,
            persistent,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        id
    }

    /// Presents the next prompt if nothing is shown.
    ///
    /// Picks the highest priority, earliest enqueued on ties. Returns true
    /// if a prompt became active.
    pub fn try_present_next(&mut self) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(index) = self
            .backlog
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.priority.cmp(&b.priority).then(b.seq.cmp(&a.seq)))
            .map(|(index, _)| index)
        else {
            return false;
        };

        let next = self.backlog.swap_remove(index);
        debug!(
            "ModalQueue: presenting {} ({}), {} waiting",
            next.prompt.kind_name(),
            next.id,
            self.backlog.len()
        );
        self.active = Some(next);
        true
    }

    /// Hides the current prompt, returning it. A no-op when nothing is shown.
    pub fn dismiss_current_modal(&mut self) -> Option<QueuedPrompt> {
        let dismissed = self.active.take();
        if let Some(prompt) = &dismissed {
            debug!("ModalQueue: dismissed {} ({})", prompt.prompt.kind_name(), prompt.id);
        }
        dismissed
    }

    /// Drops every waiting prompt and hides the current one.
    pub fn clear_queue(&mut self) {
        debug!(
            "ModalQueue: clearing {} waiting, active={}",
            self.backlog.len(),
            self.active.is_some()
        );
        self.backlog.clear();
        self.active = None;
    }

    /// Records the current navigation location.
    ///
    /// When it differs from the last observed one, non-persistent prompts are
    /// purged from the backlog and a non-persistent active prompt is hidden.
    /// Returns true if the location changed.
    pub fn observe_location(&mut self, location: impl Into<String>) -> bool {
        let location = location.into();
        if location == self.location {
            return false;
        }

        let before = self.backlog.len();
        self.backlog.retain(|prompt| prompt.persistent);
        let purged_active = self.active.as_ref().is_some_and(|prompt| !prompt.persistent);
        if purged_active {
            self.active = None;
        }
        debug!(
            "ModalQueue: navigation {} -> {}, purged {} waiting, active purged={}",
            self.location,
            location,
            before - self.backlog.len(),
            purged_active
        );

        self.location = location;
        true
    }

    /// The prompt currently shown, if any.
    pub fn current_modal(&self) -> Option<&QueuedPrompt> {
        self.active.as_ref()
    }

    /// Whether a prompt is shown.
    pub fn is_showing_modal(&self) -> bool {
        self.active.is_some()
    }

    /// Number of prompts waiting in the backlog.
    pub fn queue_length(&self) -> usize {
        self.backlog.len()
    }

    /// Last observed navigation location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Waiting prompts, in no particular order.
    pub fn backlog(&self) -> impl Iterator<Item = &QueuedPrompt> {
        self.backlog.iter()
    }

    /// Captures the presentation state for the rendering layer.
    pub fn snapshot(&self) -> ModalSnapshot {
        ModalSnapshot {
            current: self.active.clone(),
            is_showing: self.is_showing_modal(),
            queue_length: self.queue_length(),
            location: self.location.clone(),
        }
    }
}
