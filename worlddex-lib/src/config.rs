//! Prompt configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Priority and persistence settings used when planning prompts.
///
/// Higher priorities are presented sooner. Reward prompts survive navigation
/// by default so the user still sees them after leaving the camera screen.
///
/// # Example
///
/// ```
/// use worlddex_lib::PromptConfig;
///
/// let config = PromptConfig::default()
///     .with_level_up(200)
///     .with_rewards_persistent(false);
/// assert_eq!(config.level_up, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Priority of the level-up announcement.
    ///
    /// Default: 100
    pub level_up: i32,

    /// Priority of onboarding prompts.
    ///
    /// Default: 80
    pub onboarding: i32,

    /// Priority of the coin/XP reward summary.
    ///
    /// Default: 50
    pub coin_reward: i32,

    /// Priority of the location permission prompt.
    ///
    /// Default: 10
    pub location_prompt: i32,

    /// Whether level-up and reward prompts survive navigation.
    ///
    /// Default: true
    pub rewards_persistent: bool,

    /// Whether the location prompt survives navigation.
    ///
    /// Default: true
    pub location_persistent: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            level_up: 100,
            onboarding: 80,
            coin_reward: 50,
            location_prompt: 10,
            rewards_persistent: true,
            location_persistent: true,
        }
    }
}

impl PromptConfig {
    /// Creates a new prompt config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sets the level-up priority.
    pub fn with_level_up(mut self, priority: i32) -> Self {
        self.level_up = priority;
        self
    }

    /// Sets the onboarding priority.
    pub fn with_onboarding(mut self, priority: i32) -> Self {
        self.onboarding = priority;
        self
    }

    /// Sets the coin reward priority.
    pub fn with_coin_reward(mut self, priority: i32) -> Self {
        self.coin_reward = priority;
        self
    }

    /// Sets the location prompt priority.
    pub fn with_location_prompt(mut self, priority: i32) -> Self {
        self.location_prompt = priority;
        self
    }

    /// Sets whether reward prompts survive navigation.
    pub fn with_rewards_persistent(mut self, persistent: bool) -> Self {
        self.rewards_persistent = persistent;
        self
    }

    /// Sets whether the location prompt survives navigation.
    pub fn with_location_persistent(mut self, persistent: bool) -> Self {
        self.location_persistent = persistent;
        self
    }
}
