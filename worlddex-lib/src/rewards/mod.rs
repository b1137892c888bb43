//! Reward rules applied after a capture.
//!
//! These are the pure calculations behind the reward prompts: XP per rarity
//! tier and the level curve, and the coin bonuses for daily captures,
//! streaks, milestones and completed collections. Looking up the counts they
//! depend on is the caller's job.

mod coins;
mod xp;

pub use coins::*;
pub use xp::*;

use serde::{Deserialize, Serialize};

/// A single reward line shown in the reward summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Amount of XP or coins awarded.
    pub amount: u32,
    /// Human readable reason.
    pub reason: String,
}

impl Reward {
    /// Creates a new reward line.
    pub fn new(amount: u32, reason: impl Into<String>) -> Self {
        Self {
            amount,
            reason: reason.into(),
        }
    }
}
