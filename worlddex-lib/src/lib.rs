//! WorldDex capture-screen core
//!
//! Sequencing of post-capture prompts, the camera capture state machine and
//! the reward rules that decide which prompts a capture produces.

pub mod camera;
pub mod config;
pub mod error;
pub mod modal;
pub mod rarity;
pub mod rewards;

pub use config::PromptConfig;
pub use modal::{ModalQueue, ModalQueueHandle, ModalSnapshot, Prompt, PromptId, QueuedPrompt};
pub use rarity::RarityTier;
