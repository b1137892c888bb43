//! Planning of the prompts that follow a capture.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{CoinRewardPayload, ModalQueue, Prompt, PromptId};
use crate::config::PromptConfig;
use crate::rewards::{CaptureXp, CoinRewards};

/// Captures needed before the circle tutorial is shown.
pub const ONBOARDING_CIRCLE_CAPTURES: u64 = 3;

/// Captures needed before the swipe tutorial is shown.
pub const ONBOARDING_SWIPE_CAPTURES: u64 = 10;

/// Foreground location permission status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationPermission {
    Granted,
    Denied,
    #[default]
    Undetermined,
}

/// A prompt with the priority and persistence it should be enqueued with.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPrompt {
    pub prompt: Prompt,
    pub priority: i32,
    pub persistent: bool,
}

impl PlannedPrompt {
    /// Enqueues this prompt.
    pub fn enqueue_into(self, queue: &mut ModalQueue) -> PromptId {
        queue.enqueue(self.prompt, self.priority, self.persistent)
    }
}

/// Everything known about a capture once its rewards are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOutcome {
    /// Name of the identified item.
    pub item_name: String,
    /// XP awarded, if any was computed.
    pub xp: Option<CaptureXp>,
    /// Coins awarded.
    pub coins: CoinRewards,
    /// Location permission status read after the capture.
    pub location_permission: LocationPermission,
}

/// Plans the prompts for a completed capture, most urgent first.
///
/// 1. A level-up announcement if the XP pushed the user to a new level.
/// 2. A coin/XP summary if any coins or XP were awarded.
/// 3. A location prompt if permission has never been asked for.
pub fn plan_post_capture(outcome: &CaptureOutcome, config: &PromptConfig) -> Vec<PlannedPrompt> {
    let mut planned = Vec::new();
    let xp = outcome.xp.as_ref().filter(|xp| xp.total > 0);

    if let Some(new_level) = xp.filter(|xp| xp.level_up).and_then(|xp| xp.new_level) {
        planned.push(PlannedPrompt {
            prompt: Prompt::level_up(new_level),
            priority: config.level_up,
            persistent: config.rewards_persistent,
        });
    }

    if outcome.coins.total > 0 || xp.is_some() {
        planned.push(PlannedPrompt {
            prompt: Prompt::CoinReward(CoinRewardPayload {
                total: outcome.coins.total,
                rewards: outcome.coins.rewards.clone(),
                xp_total: xp.map_or(0, |xp| xp.total),
                xp_rewards: xp.map(|xp| xp.rewards.clone()).unwrap_or_default(),
                level_up: xp.is_some_and(|xp| xp.level_up),
                new_level: xp.and_then(|xp| xp.new_level),
            }),
            priority: config.coin_reward,
            persistent: config.rewards_persistent,
        });
    } else {
        debug!("Sequence: no coins or XP for {}, skipping reward prompt", outcome.item_name);
    }

    if outcome.location_permission == LocationPermission::Undetermined {
        planned.push(PlannedPrompt {
            prompt: Prompt::location(outcome.item_name.clone()),
            priority: config.location_prompt,
            persistent: config.location_persistent,
        });
    } else {
        debug!(
            "Sequence: location permission is {:?}, skipping location prompt",
            outcome.location_permission
        );
    }

    planned
}

/// A user's onboarding state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingProgress {
    pub total_captures: u64,
    pub circle_shown: bool,
    pub swipe_shown: bool,
}

/// Plans onboarding tips that are due and have not been shown.
///
/// Tips do not survive navigation.
pub fn plan_onboarding(progress: &OnboardingProgress, config: &PromptConfig) -> Vec<PlannedPrompt> {
    let due = [
        (
            Prompt::OnboardingCircle,
            ONBOARDING_CIRCLE_CAPTURES,
            progress.circle_shown,
        ),
        (
            Prompt::OnboardingSwipe,
            ONBOARDING_SWIPE_CAPTURES,
            progress.swipe_shown,
        ),
    ];

    due.into_iter()
        .filter(|(_, threshold, shown)| !shown && progress.total_captures >= *threshold)
        .map(|(prompt, _, _)| PlannedPrompt {
            prompt,
            priority: config.onboarding,
            persistent: false,
        })
        .collect()
}

/// Enqueues planned prompts in one go, returning their ids.
pub fn enqueue_all(queue: &mut ModalQueue, planned: Vec<PlannedPrompt>) -> Vec<PromptId> {
    planned.into_iter().map(|p| p.enqueue_into(queue)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rarity::RarityTier;
    use crate::rewards::{CaptureXpInput, Reward};

    fn outcome(xp: Option<CaptureXp>, coins: CoinRewards, permission: LocationPermission) -> CaptureOutcome {
        CaptureOutcome {
            item_name: "Golden Gate Bridge".to_string(),
            xp,
            coins,
            location_permission: permission,
        }
    }

    fn level_up_xp() -> CaptureXp {
        CaptureXp::compute(&CaptureXpInput::new(RarityTier::Legendary, 0))
    }

    #[test]
    fn test_full_sequence() {
        let coins = CoinRewards {
            total: 2,
            rewards: vec![Reward::new(2, "First capture of the day")],
        };
        let planned = plan_post_capture(
            &outcome(Some(level_up_xp()), coins, LocationPermission::Undetermined),
            &PromptConfig::default(),
        );

        assert_eq!(planned.len(), 3);
        assert_eq!(planned[0].prompt, Prompt::level_up(2));
        assert_eq!(planned[0].priority, 100);
        assert!(planned[0].persistent);

        let Prompt::CoinReward(payload) = &planned[1].prompt else {
            panic!("expected coin reward");
        };
        assert_eq!(payload.total, 2);
        assert_eq!(payload.xp_total, 200);
        assert!(payload.level_up);
        assert_eq!(payload.new_level, Some(2));
        assert_eq!(planned[1].priority, 50);

        assert_eq!(planned[2].prompt, Prompt::location("Golden Gate Bridge"));
        assert_eq!(planned[2].priority, 10);
        assert!(planned[2].persistent);
    }

    #[test]
    fn test_no_rewards_no_location() {
        let planned = plan_post_capture(
            &outcome(None, CoinRewards::default(), LocationPermission::Granted),
            &PromptConfig::default(),
        );
        assert!(planned.is_empty());
    }

    #[test]
    fn test_zero_xp_is_ignored() {
        let planned = plan_post_capture(
            &outcome(Some(CaptureXp::default()), CoinRewards::default(), LocationPermission::Denied),
            &PromptConfig::default(),
        );
        assert!(planned.is_empty());
    }

    #[test]
    fn test_xp_without_level_up() {
        let xp = CaptureXp::compute(&CaptureXpInput::new(RarityTier::Common, 0));
        let planned = plan_post_capture(
            &outcome(Some(xp), CoinRewards::default(), LocationPermission::Denied),
            &PromptConfig::default(),
        );
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].prompt.kind_name(), "coinReward");
    }

    #[test]
    fn test_config_overrides() {
        let config = PromptConfig::default().with_location_prompt(500).with_location_persistent(false);
        let planned = plan_post_capture(
            &outcome(None, CoinRewards::default(), LocationPermission::Undetermined),
            &config,
        );
        assert_eq!(planned[0].priority, 500);
        assert!(!planned[0].persistent);
    }

    #[test]
    fn test_sequence_presents_in_priority_order() {
        let mut queue = ModalQueue::new("/camera");
        let planned = plan_post_capture(
            &outcome(Some(level_up_xp()), CoinRewards::default(), LocationPermission::Undetermined),
            &PromptConfig::default(),
        );
        // Enqueue in reverse to show that order comes from priority
        enqueue_all(&mut queue, planned.into_iter().rev().collect());

        let mut shown = Vec::new();
        while queue.try_present_next() {
            shown.push(queue.current_modal().unwrap().prompt.kind_name().to_string());
            queue.dismiss_current_modal();
        }
        assert_eq!(shown, ["levelUp", "coinReward", "locationPrompt"]);
    }

    #[test]
    fn test_onboarding() {
        let config = PromptConfig::default();
        let mut progress = OnboardingProgress {
            total_captures: 2,
            ..Default::default()
        };
        assert!(plan_onboarding(&progress, &config).is_empty());

        progress.total_captures = 3;
        let planned = plan_onboarding(&progress, &config);
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].prompt, Prompt::OnboardingCircle);
        assert_eq!(planned[0].priority, 80);
        assert!(!planned[0].persistent);

        progress.total_captures = 12;
        progress.circle_shown = true;
        let planned = plan_onboarding(&progress, &config);
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].prompt, Prompt::OnboardingSwipe);
    }
}
