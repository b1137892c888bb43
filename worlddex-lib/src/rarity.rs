//! Rarity tiers and score-based tier sampling.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RarityError;

/// Rarity tier of an identified capture, from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Mythic,
    Legendary,
}

impl RarityTier {
    /// All tiers in sampling order.
    pub const ALL: [RarityTier; 6] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::Epic,
        RarityTier::Mythic,
        RarityTier::Legendary,
    ];

    /// Lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RarityTier::Common => "common",
            RarityTier::Uncommon => "uncommon",
            RarityTier::Rare => "rare",
            RarityTier::Epic => "epic",
            RarityTier::Mythic => "mythic",
            RarityTier::Legendary => "legendary",
        }
    }

    /// Sampling weight of this tier at normalized score `x` in (0, 1].
    fn weight(&self, x: f64) -> f64 {
        match self {
            RarityTier::Common => (0.75 - 0.70 * x).max(0.0),
            RarityTier::Uncommon => (0.20 - 0.15 * x).max(0.0),
            RarityTier::Rare => (0.04 + 0.10 * x).max(0.0),
            RarityTier::Epic => (0.009 + 0.08 * x).max(0.0),
            RarityTier::Mythic => (0.001 + 0.05 * x).max(0.0),
            RarityTier::Legendary => 0.0005 + 0.02 * x,
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RarityTier {
    type Err = RarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RarityTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RarityError::unknown_tier(s))
    }
}

/// Samples a rarity tier for a 1-100 score.
///
/// Higher scores get much better odds at the rare tiers but nothing is
/// guaranteed. The weights do not sum to one; any remaining mass falls back
/// to [`RarityTier::Common`].
pub fn sample_rarity_tier<R: Rng>(score: f64, rng: &mut R) -> Result<RarityTier, RarityError> {
    if score.is_nan() || !(1.0..=100.0).contains(&score) {
        return Err(RarityError::score_out_of_range(score));
    }

    let x = score / 100.0;
    let r: f64 = rng.random();

    let mut acc = 0.0;
    for tier in RarityTier::ALL {
        acc += tier.weight(x);
        if r < acc {
            return Ok(tier);
        }
    }
    Ok(RarityTier::Common)
}
