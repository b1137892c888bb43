//! End-to-end behavior of the modal queue as the camera screen drives it.

use worlddex_lib::camera::{CameraAction, CameraState, CapturePhase};
use worlddex_lib::modal::{
    CaptureOutcome, LocationPermission, ModalQueue, PromptKind, enqueue_all, plan_post_capture,
};
use worlddex_lib::rewards::{CaptureXp, CaptureXpInput, CoinContext, CoinRewards};
use worlddex_lib::{ModalQueueHandle, Prompt, PromptConfig, RarityTier};

fn tip() -> Prompt {
    Prompt::OnboardingCircle
}

#[test]
fn test_highest_priority_presented_first() {
    let mut queue = ModalQueue::new("/camera");
    for priority in [10, 100, 50] {
        queue.enqueue(tip(), priority, false);
    }
    queue.try_present_next();
    assert_eq!(queue.current_modal().unwrap().priority, 100);
}

#[test]
fn test_equal_priority_is_fifo() {
    let mut queue = ModalQueue::new("/camera");
    let a = queue.enqueue(tip(), 50, false);
    let b = queue.enqueue(tip(), 50, false);

    queue.try_present_next();
    assert_eq!(queue.current_modal().unwrap().id, a);
    queue.dismiss_current_modal();
    queue.try_present_next();
    assert_eq!(queue.current_modal().unwrap().id, b);
}

#[test]
fn test_active_prompt_is_not_preempted() {
    let handle = ModalQueueHandle::new("/camera");
    let a = handle.enqueue(tip(), 10, false);
    handle.enqueue(Prompt::level_up(9), 1000, true);

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.current.unwrap().id, a);
    assert_eq!(snapshot.queue_length, 1);
}

#[test]
fn test_navigation_purges_waiting_prompt() {
    let handle = ModalQueueHandle::new("/camera");
    handle.batch(|queue| {
        queue.enqueue(Prompt::level_up(2), 100, true);
        queue.enqueue(tip(), 80, false);
    });
    assert_eq!(handle.snapshot().queue_length, 1);

    handle.observe_location("/profile");
    assert_eq!(handle.snapshot().queue_length, 0);

    handle.dismiss_current_modal();
    assert!(!handle.snapshot().is_showing);
}

#[test]
fn test_persistent_prompt_survives_navigation() {
    let handle = ModalQueueHandle::new("/camera");
    handle.enqueue(Prompt::level_up(2), 100, true);
    let location = handle.enqueue(Prompt::location("Redwood"), 10, true);

    handle.observe_location("/captures");
    handle.observe_location("/camera");
    assert_eq!(handle.snapshot().queue_length, 1);

    handle.dismiss_current_modal();
    assert_eq!(handle.snapshot().current.unwrap().id, location);
}

#[test]
fn test_navigation_hides_active_non_persistent() {
    let handle = ModalQueueHandle::new("/camera");
    handle.enqueue(tip(), 80, false);
    assert!(handle.snapshot().is_showing);

    handle.observe_location("/social");
    let snapshot = handle.snapshot();
    assert!(snapshot.current.is_none());
    assert!(!snapshot.is_showing);
}

#[test]
fn test_dismiss_when_idle() {
    let handle = ModalQueueHandle::new("/camera");
    let before = handle.snapshot();
    handle.dismiss_current_modal();
    assert_eq!(handle.snapshot(), before);
}

#[test]
fn test_clear_queue() {
    let handle = ModalQueueHandle::new("/camera");
    handle.batch(|queue| {
        queue.enqueue(tip(), 1, false);
        queue.enqueue(tip(), 2, true);
        queue.enqueue(tip(), 3, true);
    });
    assert!(handle.snapshot().is_showing);

    handle.clear_queue();
    let snapshot = handle.snapshot();
    assert!(snapshot.current.is_none());
    assert_eq!(snapshot.queue_length, 0);
}

#[test]
fn test_capture_to_reward_prompts() {
    let mut camera = CameraState::new();
    camera.apply(CameraAction::StartCapture);
    camera.apply(CameraAction::CaptureSuccess {
        uri: "file:///owl.jpg".to_string(),
        capture_box: None,
    });
    camera.apply(CameraAction::VlmProcessingStart);
    camera.apply(CameraAction::VlmProcessingSuccess {
        label: "Barn owl".to_string(),
    });
    camera.apply(CameraAction::SetRarity {
        tier: RarityTier::Mythic,
        score: Some(91.0),
    });
    camera.apply(CameraAction::IdentificationComplete);
    assert_eq!(camera.phase(), CapturePhase::Complete);

    let xp = CaptureXp::compute(
        &CaptureXpInput::new(camera.metadata.rarity_tier, 0)
            .first_of_item()
            .first_of_day(),
    );
    let coins = CoinRewards::compute(&CoinContext {
        captures_today: 1,
        streak_days: 7,
        total_captures: 50,
        collection: None,
    });
    assert_eq!(coins.total, 2 + 5 + 10);

    let outcome = CaptureOutcome {
        item_name: camera.identified_label().unwrap().to_string(),
        xp: Some(xp),
        coins,
        location_permission: LocationPermission::Undetermined,
    };

    let handle = ModalQueueHandle::new("/camera");
    let planned = plan_post_capture(&outcome, &PromptConfig::default());
    handle.batch(|queue| enqueue_all(queue, planned));

    let mut shown = Vec::new();
    while let Some(current) = handle.snapshot().current {
        shown.push(current.prompt.kind());
        handle.dismiss_current_modal();
    }
    assert_eq!(
        shown,
        [PromptKind::LevelUp, PromptKind::CoinReward, PromptKind::LocationPrompt]
    );
}
