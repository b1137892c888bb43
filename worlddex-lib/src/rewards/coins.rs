//! Coin bonuses for captures.

use serde::{Deserialize, Serialize};

use super::Reward;

/// Coins for the first capture of the day.
pub const FIRST_CAPTURE_OF_DAY_COINS: u32 = 2;

/// Streak length in days and the coins awarded on reaching it.
pub const STREAK_BONUSES: [(u32, u32); 4] = [(7, 5), (30, 20), (100, 75), (365, 300)];

/// Total capture count and the coins awarded on reaching it.
pub const CAPTURE_MILESTONES: [(u64, u32); 4] = [(50, 10), (200, 30), (500, 100), (1000, 250)];

/// Upper bound on the collection completion bonus.
pub const COLLECTION_COMPLETE_MAX_COINS: u32 = 100;

/// A user's progress through one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionProgress {
    /// Number of items in the collection.
    pub item_count: u32,
    /// Whether the user holds every item of the collection.
    pub complete: bool,
    /// Whether the completion bonus was already paid out.
    pub reward_claimed: bool,
}

/// Counts the coin rules are evaluated against.
///
/// All counts include the capture being rewarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinContext {
    /// Captures made today.
    pub captures_today: u32,
    /// Current consecutive-day capture streak.
    pub streak_days: u32,
    /// Lifetime capture count.
    pub total_captures: u64,
    /// Collection the capture was added to, if any.
    pub collection: Option<CollectionProgress>,
}

/// Coins awarded for a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinRewards {
    pub total: u32,
    pub rewards: Vec<Reward>,
}

impl CoinRewards {
    /// Evaluates every coin rule for a capture.
    pub fn compute(ctx: &CoinContext) -> Self {
        let rewards: Vec<Reward> = [
            first_capture_of_day(ctx),
            streak_bonus(ctx),
            capture_milestone(ctx),
            ctx.collection.and_then(collection_completion),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            total: rewards.iter().map(|r| r.amount).sum(),
            rewards,
        }
    }
}

fn first_capture_of_day(ctx: &CoinContext) -> Option<Reward> {
    (ctx.captures_today == 1).then(|| Reward::new(FIRST_CAPTURE_OF_DAY_COINS, "First capture of the day"))
}

/// Streak bonuses are paid on the first capture of the day only.
fn streak_bonus(ctx: &CoinContext) -> Option<Reward> {
    if ctx.captures_today > 1 {
        return None;
    }
    STREAK_BONUSES
        .iter()
        .find(|(days, _)| *days == ctx.streak_days)
        .map(|(days, coins)| Reward::new(*coins, format!("{days}-day capture streak!")))
}

fn capture_milestone(ctx: &CoinContext) -> Option<Reward> {
    CAPTURE_MILESTONES
        .iter()
        .find(|(count, _)| *count == ctx.total_captures)
        .map(|(count, coins)| Reward::new(*coins, format!("Reached {count} total captures!")))
}

/// One coin per item, for collections of more than one item.
fn collection_completion(progress: CollectionProgress) -> Option<Reward> {
    if progress.reward_claimed || progress.item_count <= 1 || !progress.complete {
        return None;
    }
    Some(Reward::new(
        progress.item_count.min(COLLECTION_COMPLETE_MAX_COINS),
        format!("Completed collection with {} items!", progress.item_count),
    ))
}
