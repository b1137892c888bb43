//! Replays scripted camera-screen sessions through the modal queue.
//!
//! A script is JSON lines. Each line is either one event or an array of
//! events; everything on a line happens in the same update cycle, after
//! which the queue gets one chance to present a prompt.

use std::io::{BufRead, Write};

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use worlddex_lib::camera::{CameraAction, CameraState};
use worlddex_lib::modal::{
    CaptureOutcome, LocationPermission, OnboardingProgress, Prompt, enqueue_all, plan_onboarding,
    plan_post_capture,
};
use worlddex_lib::rewards::{CaptureXp, CaptureXpInput, CoinContext, CoinRewards};
use worlddex_lib::{ModalQueue, ModalQueueHandle, PromptConfig, RarityTier};

use crate::present::describe;

/// Replay error type.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid event: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: invalid payload for '{kind}': {source}")]
    Payload {
        line: usize,
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single scripted event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Enqueue a prompt by wire kind name.
    Enqueue {
        kind: String,
        #[serde(default)]
        data: Value,
        priority: i32,
        #[serde(default)]
        persistent: bool,
    },
    /// The router moved to a new location.
    Navigate { location: String },
    /// The user closed the shown prompt.
    Dismiss,
    /// Hard reset, e.g. sign-out.
    Clear,
    /// A camera state transition.
    Camera { action: CameraAction },
    /// A capture finished; compute its rewards and enqueue the prompts.
    Capture {
        item_name: String,
        tier: RarityTier,
        #[serde(default)]
        first_of_item: bool,
        #[serde(default)]
        first_of_day: bool,
        #[serde(default)]
        xp_before: u64,
        #[serde(default)]
        coins: CoinContext,
        #[serde(default)]
        location_permission: LocationPermission,
    },
    /// Onboarding state changed; enqueue any tips that are due.
    Onboarding { progress: OnboardingProgress },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptLine {
    Cycle(Vec<SessionEvent>),
    Single(SessionEvent),
}

/// Parses one script line into the events of a cycle.
pub fn parse_line(line: usize, text: &str) -> Result<Vec<SessionEvent>, ReplayError> {
    let parsed: ScriptLine =
        serde_json::from_str(text).map_err(|source| ReplayError::Parse { line, source })?;
    Ok(match parsed {
        ScriptLine::Cycle(events) => events,
        ScriptLine::Single(event) => vec![event],
    })
}

/// A camera screen: its modal queue plus the camera state.
pub struct Session {
    modals: ModalQueueHandle,
    camera: CameraState,
    config: PromptConfig,
}

impl Session {
    /// Creates a session starting at `location`.
    pub fn new(location: impl Into<String>, config: PromptConfig) -> Self {
        Self {
            modals: ModalQueueHandle::new(location),
            camera: CameraState::new(),
            config,
        }
    }

    /// Runs every line of `script`, writing one status line per cycle.
    pub fn replay(&mut self, script: impl BufRead, out: &mut impl Write) -> Result<(), ReplayError> {
        for (index, text) in script.lines().enumerate() {
            let text = text?;
            let line = index + 1;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            let events = parse_line(line, trimmed)?;
            self.cycle(line, events)?;
            writeln!(out, "{}", self.status(line))?;
        }
        Ok(())
    }

    /// Applies `events` as one update cycle.
    ///
    /// Every event is checked first; a line with an invalid event changes
    /// nothing.
    pub fn cycle(&mut self, line: usize, events: Vec<SessionEvent>) -> Result<(), ReplayError> {
        let steps = events
            .into_iter()
            .map(|event| Step::resolve(line, event))
            .collect::<Result<Vec<_>, _>>()?;

        let Self {
            modals,
            camera,
            config,
        } = self;
        modals.batch(|queue| {
            for step in steps {
                apply_step(queue, camera, config, step);
            }
        });
        Ok(())
    }

    /// Status line describing what the screen shows.
    pub fn status(&self, line: usize) -> String {
        let snapshot = self.modals.snapshot();
        let showing = match &snapshot.current {
            Some(current) => match describe(current) {
                Some(text) => text,
                None => {
                    warn!("No presenter for prompt kind '{}'", current.prompt.kind_name());
                    "(nothing)".to_string()
                }
            },
            None => "(nothing)".to_string(),
        };
        format!(
            "[{line:>3}] {} showing: {showing} | waiting: {}",
            snapshot.location, snapshot.queue_length
        )
    }

    /// The camera state.
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }
}

/// A validated event, ready to apply.
enum Step {
    Enqueue {
        prompt: Prompt,
        priority: i32,
        persistent: bool,
    },
    Event(SessionEvent),
}

impl Step {
    fn resolve(line: usize, event: SessionEvent) -> Result<Self, ReplayError> {
        match event {
            SessionEvent::Enqueue {
                kind,
                data,
                priority,
                persistent,
            } => {
                let prompt = Prompt::from_parts(&kind, data)
                    .map_err(|source| ReplayError::Payload { line, kind, source })?;
                Ok(Step::Enqueue {
                    prompt,
                    priority,
                    persistent,
                })
            }
            event => Ok(Step::Event(event)),
        }
    }
}

fn apply_step(queue: &mut ModalQueue, camera: &mut CameraState, config: &PromptConfig, step: Step) {
    let event = match step {
        Step::Enqueue {
            prompt,
            priority,
            persistent,
        } => {
            queue.enqueue(prompt, priority, persistent);
            return;
        }
        Step::Event(event) => event,
    };

    match event {
        // Resolved into `Step::Enqueue`
        SessionEvent::Enqueue { .. } => {}
        SessionEvent::Navigate { location } => {
            queue.observe_location(location);
        }
        SessionEvent::Dismiss => {
            queue.dismiss_current_modal();
        }
        SessionEvent::Clear => queue.clear_queue(),
        SessionEvent::Camera { action } => {
            camera.apply(action);
            info!("Camera phase: {:?}", camera.phase());
        }
        SessionEvent::Capture {
            item_name,
            tier,
            first_of_item,
            first_of_day,
            xp_before,
            coins,
            location_permission,
        } => {
            let xp = CaptureXp::compute(&CaptureXpInput {
                tier,
                base_override: None,
                first_of_item,
                first_of_day,
                xp_before,
            });
            let outcome = CaptureOutcome {
                item_name,
                xp: Some(xp),
                coins: CoinRewards::compute(&coins),
                location_permission,
            };
            let planned = plan_post_capture(&outcome, config);
            info!("Capture of {} planned {} prompts", outcome.item_name, planned.len());
            enqueue_all(queue, planned);
        }
        SessionEvent::Onboarding { progress } => {
            enqueue_all(queue, plan_onboarding(&progress, config));
        }
    }
}
