//! XP values, the level curve and level milestone rewards.

use serde::{Deserialize, Serialize};

use super::Reward;
use crate::rarity::RarityTier;

/// Bonus XP for the first capture of the day.
pub const DAILY_FIRST_CAPTURE_XP: u32 = 10;

/// Multiplier applied to the first capture of an item.
pub const FIRST_CAPTURE_MULTIPLIER: u32 = 2;

/// XP step of the level curve: reaching level `n` costs `n * LEVEL_STEP_XP`.
const LEVEL_STEP_XP: u64 = 50;

/// Base XP awarded for a capture of the given tier.
pub fn base_xp(tier: RarityTier) -> u32 {
    match tier {
        RarityTier::Common => 5,
        RarityTier::Uncommon => 10,
        RarityTier::Rare => 25,
        RarityTier::Epic => 50,
        RarityTier::Mythic => 100,
        RarityTier::Legendary => 200,
    }
}

/// XP for a capture, doubled for the first capture of an item.
pub fn capture_xp(tier: RarityTier, first_capture: bool) -> u32 {
    let base = base_xp(tier);
    if first_capture {
        base * FIRST_CAPTURE_MULTIPLIER
    } else {
        base
    }
}

/// Total XP required to reach `level`.
///
/// Level 1 is free; each further level `n` costs `n * 50` XP, so level 2
/// starts at 100, level 3 at 250 and level 4 at 450. Levels past what fits
/// in a `u64` saturate to `u64::MAX`.
pub fn xp_required_for_level(level: u32) -> u64 {
    u64::try_from(required_xp_wide(level)).unwrap_or(u64::MAX)
}

fn required_xp_wide(level: u32) -> u128 {
    if level <= 1 {
        return 0;
    }
    let n = level as u128;
    LEVEL_STEP_XP as u128 * (n * (n + 1) / 2 - 1)
}

/// Level reached with `total_xp`.
pub fn level_from_xp(total_xp: u64) -> u32 {
    let xp = total_xp as u128;
    let (mut lo, mut hi) = (1u32, u32::MAX);
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if required_xp_wide(mid) <= xp {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Progress through `level` towards the next one, in percent.
///
/// Level 1 spans 0 to 100 XP.
pub fn level_progress(total_xp: u64, level: u32) -> f64 {
    let floor = required_xp_wide(level);
    let ceiling = required_xp_wide(level.saturating_add(1));
    if ceiling <= floor {
        return 100.0;
    }
    let into = (total_xp as u128).saturating_sub(floor) as f64;
    into / (ceiling - floor) as f64 * 100.0
}

/// Formats an XP amount for display: `950`, `1.2K`, `12K`.
pub fn format_xp(xp: u64) -> String {
    if xp < 1_000 {
        xp.to_string()
    } else if xp < 10_000 {
        format!("{:.1}K", xp as f64 / 1_000.0)
    } else {
        format!("{}K", xp / 1_000)
    }
}

/// Kind of unlock granted at a level milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelRewardKind {
    Badge,
    Filter,
    CaptureLimit,
    Title,
}

/// An unlock granted when reaching a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReward {
    pub kind: LevelRewardKind,
    pub value: String,
    pub description: String,
}

impl LevelReward {
    fn new(kind: LevelRewardKind, value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            description: description.into(),
        }
    }
}

const CAMERA_FILTERS: [&str; 4] = ["vintage", "noir", "vibrant", "dreamy"];

/// Milestone rewards for reaching `level`.
pub fn level_rewards(level: u32) -> Vec<LevelReward> {
    let mut rewards = Vec::new();

    // Camera filters every 5 levels up to 20
    if level > 0 && level % 5 == 0 {
        if let Some(filter) = CAMERA_FILTERS.get((level / 5 - 1) as usize) {
            rewards.push(LevelReward::new(
                LevelRewardKind::Filter,
                *filter,
                format!("Unlock the {filter} camera filter"),
            ));
        }
    }

    let limit = match level {
        10 | 20 => Some(5),
        30 => Some(10),
        _ => None,
    };
    if let Some(extra) = limit {
        rewards.push(LevelReward::new(
            LevelRewardKind::CaptureLimit,
            format!("+{extra}"),
            format!("Increase daily capture limit by {extra}"),
        ));
    }

    match level {
        25 => {
            rewards.push(LevelReward::new(LevelRewardKind::Badge, "Explorer", "Earn the Explorer badge"));
        }
        50 => {
            rewards.push(LevelReward::new(LevelRewardKind::Badge, "Collector", "Earn the Collector badge"));
            rewards.push(LevelReward::new(
                LevelRewardKind::Title,
                "Master Explorer",
                "Unlock the Master Explorer title",
            ));
        }
        100 => {
            rewards.push(LevelReward::new(LevelRewardKind::Badge, "Legend", "Earn the Legend badge"));
            rewards.push(LevelReward::new(
                LevelRewardKind::Title,
                "WorldDex Legend",
                "Unlock the WorldDex Legend title",
            ));
        }
        _ => {}
    }

    rewards
}

/// Inputs for computing the XP of one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureXpInput {
    /// Tier of the identified item.
    pub tier: RarityTier,
    /// XP value supplied by the identification backend, used instead of the
    /// tier's base XP when non-zero.
    pub base_override: Option<u32>,
    /// Whether this is the user's first capture of the item.
    pub first_of_item: bool,
    /// Whether this is the user's first capture today.
    pub first_of_day: bool,
    /// The user's total XP before this capture.
    pub xp_before: u64,
}

impl CaptureXpInput {
    /// Creates an input for a repeat capture with no bonuses.
    pub fn new(tier: RarityTier, xp_before: u64) -> Self {
        Self {
            tier,
            base_override: None,
            first_of_item: false,
            first_of_day: false,
            xp_before,
        }
    }

    /// Sets the backend supplied XP value.
    pub fn with_base_override(mut self, xp: u32) -> Self {
        self.base_override = Some(xp);
        self
    }

    /// Marks this as the first capture of the item.
    pub fn first_of_item(mut self) -> Self {
        self.first_of_item = true;
        self
    }

    /// Marks this as the first capture of the day.
    pub fn first_of_day(mut self) -> Self {
        self.first_of_day = true;
        self
    }
}

/// XP awarded for one capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureXp {
    pub total: u32,
    pub rewards: Vec<Reward>,
    pub level_up: bool,
    /// Level reached, set only when the capture caused a level up.
    pub new_level: Option<u32>,
}

impl CaptureXp {
    /// Computes the XP reward lines and level change for a capture.
    pub fn compute(input: &CaptureXpInput) -> Self {
        let base = input
            .base_override
            .filter(|xp| *xp > 0)
            .unwrap_or_else(|| base_xp(input.tier));

        let mut rewards = Vec::new();
        if input.first_of_item {
            rewards.push(Reward::new(
                base.saturating_mul(FIRST_CAPTURE_MULTIPLIER),
                format!("First capture of item ({})", input.tier),
            ));
        } else {
            rewards.push(Reward::new(base, format!("Capture reward ({})", input.tier)));
        }
        if input.first_of_day {
            rewards.push(Reward::new(DAILY_FIRST_CAPTURE_XP, "Daily first capture bonus"));
        }

        let total = rewards.iter().fold(0u32, |acc, r| acc.saturating_add(r.amount));
        let before = level_from_xp(input.xp_before);
        let after = level_from_xp(input.xp_before.saturating_add(total as u64));
        let level_up = after > before;

        Self {
            total,
            rewards,
            level_up,
            new_level: level_up.then_some(after),
        }
    }
}
