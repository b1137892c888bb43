//! Modal queue for post-capture prompts.
//!
//! Prompts (reward summaries, level-up announcements, permission requests,
//! onboarding tips) are enqueued by whoever produces them and presented one
//! at a time, highest priority first. Presentation is non-preemptive: a
//! shown prompt stays until it is dismissed or purged by navigation.
//!
//! [`ModalQueue`] is the plain coordinator. [`ModalQueueHandle`] wraps it for
//! sharing between tasks and publishes a [`ModalSnapshot`] to the rendering
//! layer after every change.

mod handle;
mod id;
mod prompt;
mod queue;
mod sequence;

pub use handle::ModalQueueHandle;
pub use id::PromptId;
pub use prompt::*;
pub use queue::{ModalQueue, ModalSnapshot, QueuedPrompt};
pub use sequence::*;
