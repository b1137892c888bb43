//! Prompt kinds and their payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rewards::Reward;

/// Payload of the coin/XP reward summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinRewardPayload {
    /// Coins awarded.
    pub total: u32,
    /// Coin reward lines.
    pub rewards: Vec<Reward>,
    /// XP awarded.
    pub xp_total: u32,
    /// XP reward lines.
    pub xp_rewards: Vec<Reward>,
    /// Whether the capture caused a level up.
    pub level_up: bool,
    /// Level reached, when `level_up` is set.
    pub new_level: Option<u32>,
}

/// Payload of the level-up announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpPayload {
    pub new_level: u32,
}

/// Payload of the location permission prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPromptPayload {
    /// Name of the item just captured, shown in the prompt copy.
    pub item_name: String,
}

/// A prompt to present, tagged by kind with its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    CoinReward(CoinRewardPayload),
    LevelUp(LevelUpPayload),
    LocationPrompt(LocationPromptPayload),
    NotificationPrompt,
    OnboardingCircle,
    OnboardingSwipe,
    /// A kind this crate does not know. Carried through the queue untouched;
    /// presenters are expected to render nothing for it.
    Custom { kind: String, data: Value },
}

/// Kind tag of a [`Prompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    CoinReward,
    LevelUp,
    LocationPrompt,
    NotificationPrompt,
    OnboardingCircle,
    OnboardingSwipe,
    Custom,
}

impl PromptKind {
    /// Known kinds, keyed by their wire names.
    const KNOWN: [PromptKind; 6] = [
        PromptKind::CoinReward,
        PromptKind::LevelUp,
        PromptKind::LocationPrompt,
        PromptKind::NotificationPrompt,
        PromptKind::OnboardingCircle,
        PromptKind::OnboardingSwipe,
    ];

    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::CoinReward => "coinReward",
            PromptKind::LevelUp => "levelUp",
            PromptKind::LocationPrompt => "locationPrompt",
            PromptKind::NotificationPrompt => "notificationPrompt",
            PromptKind::OnboardingCircle => "onboardingCircle",
            PromptKind::OnboardingSwipe => "onboardingSwipe",
            PromptKind::Custom => "custom",
        }
    }

    /// Looks up a known kind by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::KNOWN.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Prompt {
    /// Builds a prompt from a wire kind name and a JSON payload.
    ///
    /// Unknown kinds are accepted as [`Prompt::Custom`]. A known kind with a
    /// malformed payload is an error.
    pub fn from_parts(kind: &str, data: Value) -> Result<Self, serde_json::Error> {
        Ok(match PromptKind::from_name(kind) {
            Some(PromptKind::CoinReward) => Prompt::CoinReward(serde_json::from_value(data)?),
            Some(PromptKind::LevelUp) => Prompt::LevelUp(serde_json::from_value(data)?),
            Some(PromptKind::LocationPrompt) => Prompt::LocationPrompt(serde_json::from_value(data)?),
            Some(PromptKind::NotificationPrompt) => Prompt::NotificationPrompt,
            Some(PromptKind::OnboardingCircle) => Prompt::OnboardingCircle,
            Some(PromptKind::OnboardingSwipe) => Prompt::OnboardingSwipe,
            Some(PromptKind::Custom) | None => Prompt::Custom {
                kind: kind.to_string(),
                data,
            },
        })
    }

    /// Kind tag of this prompt.
    pub fn kind(&self) -> PromptKind {
        match self {
            Prompt::CoinReward(_) => PromptKind::CoinReward,
            Prompt::LevelUp(_) => PromptKind::LevelUp,
            Prompt::LocationPrompt(_) => PromptKind::LocationPrompt,
            Prompt::NotificationPrompt => PromptKind::NotificationPrompt,
            Prompt::OnboardingCircle => PromptKind::OnboardingCircle,
            Prompt::OnboardingSwipe => PromptKind::OnboardingSwipe,
            Prompt::Custom { .. } => PromptKind::Custom,
        }
    }

    /// Kind name for logging; custom prompts report their own kind.
    pub fn kind_name(&self) -> &str {
        match self {
            Prompt::Custom { kind, .. } => kind,
            other => other.kind().as_str(),
        }
    }

    /// Creates a level-up prompt.
    pub fn level_up(new_level: u32) -> Self {
        Prompt::LevelUp(LevelUpPayload { new_level })
    }

    /// Creates a location permission prompt.
    pub fn location(item_name: impl Into<String>) -> Self {
        Prompt::LocationPrompt(LocationPromptPayload {
            item_name: item_name.into(),
        })
    }
}
