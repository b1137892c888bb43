//! Text rendering of the active prompt.

use worlddex_lib::QueuedPrompt;
use worlddex_lib::modal::Prompt;
use worlddex_lib::rewards::format_xp;

/// One-line description of what the screen would show for `queued`.
///
/// Returns `None` for kinds this build does not know how to render.
pub fn describe(queued: &QueuedPrompt) -> Option<String> {
    let text = match &queued.prompt {
        Prompt::CoinReward(payload) => {
            let mut text = format!(
                "Rewards: +{} coins, +{} XP",
                payload.total,
                format_xp(payload.xp_total as u64)
            );
            for reward in payload.rewards.iter().chain(&payload.xp_rewards) {
                text.push_str(&format!(" | {} (+{})", reward.reason, reward.amount));
            }
            text
        }
        Prompt::LevelUp(payload) => format!("Level up! You reached level {}", payload.new_level),
        Prompt::LocationPrompt(payload) => {
            format!("Remember where you found {}? Enable location", payload.item_name)
        }
        Prompt::NotificationPrompt => "Turn on notifications".to_string(),
        Prompt::OnboardingCircle => "Tip: circle an object to capture it".to_string(),
        Prompt::OnboardingSwipe => "Tip: swipe to browse your captures".to_string(),
        Prompt::Custom { .. } => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use worlddex_lib::ModalQueue;
    use worlddex_lib::modal::CoinRewardPayload;
    use worlddex_lib::rewards::Reward;

    use super::*;

    fn presented(prompt: Prompt) -> QueuedPrompt {
        let mut queue = ModalQueue::new("/camera");
        queue.enqueue(prompt, 0, false);
        queue.try_present_next();
        queue.current_modal().cloned().unwrap()
    }

    #[test]
    fn test_describe_known_kinds() {
        let text = describe(&presented(Prompt::level_up(5))).unwrap();
        assert!(text.contains("level 5"));

        let text = describe(&presented(Prompt::CoinReward(CoinRewardPayload {
            total: 2,
            rewards: vec![Reward::new(2, "First capture of the day")],
            xp_total: 1500,
            ..Default::default()
        })))
        .unwrap();
        assert!(text.starts_with("Rewards: +2 coins, +1.5K XP"));
        assert!(text.contains("First capture of the day (+2)"));
    }

    #[test]
    fn test_describe_custom_renders_nothing() {
        let prompt = Prompt::Custom {
            kind: "dailyQuest".to_string(),
            data: serde_json::Value::Null,
        };
        assert_eq!(describe(&presented(prompt)), None);
    }
}
