//! RarityError for score sampling and tier parsing

/// Error type for rarity tier operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RarityError {
    /// The rarity score is outside the accepted 1-100 range, or NaN.
    #[error("rarity score must be within 1-100, got {score}")]
    ScoreOutOfRange { score: f64 },

    /// The string does not name a known rarity tier.
    #[error("unknown rarity tier '{name}'")]
    UnknownTier { name: String },
}

impl RarityError {
    /// Creates a new out-of-range score error.
    pub fn score_out_of_range(score: f64) -> Self {
        Self::ScoreOutOfRange { score }
    }

    /// Creates a new unknown tier error.
    pub fn unknown_tier(name: impl Into<String>) -> Self {
        Self::UnknownTier { name: name.into() }
    }
}
