//! Camera state and the reducer.

use log::trace;
use serde::{Deserialize, Serialize};

use super::CameraAction;
use crate::rarity::RarityTier;

/// Region of the frame selected for capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: f64,
}

impl Default for CaptureBox {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            aspect_ratio: 1.0,
        }
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Shutter and captured image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureState {
    pub is_capturing: bool,
    pub uri: Option<String>,
    pub capture_box: CaptureBox,
}

/// Result of sending the capture to the identification model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    /// `None` until the model answers.
    pub vlm_success: Option<bool>,
    pub label: Option<String>,
    pub is_complete: bool,
}

/// Rarity assigned to the identified item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureMetadata {
    pub rarity_tier: RarityTier,
    pub rarity_score: Option<f64>,
}

/// Coarse position of the capture pipeline, derived from [`CameraState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// Nothing captured.
    Idle,
    /// Shutter pressed, waiting for the image.
    Capturing,
    /// Image taken, identification pending.
    Captured,
    /// The model recognized the item.
    Identified,
    /// The model could not recognize the item.
    Unidentified,
    /// Identification finished and the result was handed off.
    Complete,
}

/// Full state of the camera screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub capture: CaptureState,
    pub location: Option<GeoPoint>,
    pub identification: Identification,
    pub metadata: CaptureMetadata,
}

impl CameraState {
    /// Creates the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action.
    pub fn apply(&mut self, action: CameraAction) {
        trace!("CameraState: {:?}", action);
        match action {
            CameraAction::StartCapture => {
                self.capture.is_capturing = true;
                self.capture.uri = None;
            }
            CameraAction::CaptureSuccess { uri, capture_box } => {
                self.capture.is_capturing = false;
                self.capture.uri = Some(uri);
                if let Some(capture_box) = capture_box {
                    self.capture.capture_box = capture_box;
                }
            }
            CameraAction::CaptureFailed => {
                self.capture.is_capturing = false;
                self.capture.uri = None;
            }
            CameraAction::ResetCapture => {
                self.capture = CaptureState {
                    capture_box: self.capture.capture_box,
                    ..Default::default()
                };
            }
            CameraAction::SetCaptureBox { capture_box } => {
                self.capture.capture_box = capture_box;
            }
            CameraAction::SetLocation { location } => {
                self.location = location;
            }
            CameraAction::VlmProcessingStart => {
                self.identification = Identification::default();
            }
            CameraAction::VlmProcessingSuccess { label } => {
                self.identification.vlm_success = Some(true);
                self.identification.label = Some(label);
            }
            CameraAction::VlmProcessingFailed => {
                self.identification.vlm_success = Some(false);
                self.identification.label = None;
            }
            CameraAction::IdentificationComplete => {
                self.identification.is_complete = true;
            }
            CameraAction::ResetIdentification => {
                self.identification = Identification::default();
            }
            CameraAction::SetRarity { tier, score } => {
                self.metadata.rarity_tier = tier;
                if score.is_some() {
                    self.metadata.rarity_score = score;
                }
            }
            CameraAction::ResetMetadata => {
                self.metadata = CaptureMetadata::default();
            }
            CameraAction::ResetAll => {
                *self = Self::default();
            }
        }
    }

    /// Where the capture pipeline currently stands.
    pub fn phase(&self) -> CapturePhase {
        if self.capture.is_capturing {
            return CapturePhase::Capturing;
        }
        if self.capture.uri.is_none() {
            return CapturePhase::Idle;
        }
        if self.identification.is_complete {
            return CapturePhase::Complete;
        }
        match self.identification.vlm_success {
            Some(true) => CapturePhase::Identified,
            Some(false) => CapturePhase::Unidentified,
            None => CapturePhase::Captured,
        }
    }

    /// Label of the identified item, if the model recognized it.
    pub fn identified_label(&self) -> Option<&str> {
        self.identification.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured() -> CameraState {
        let mut state = CameraState::new();
        state.apply(CameraAction::StartCapture);
        state.apply(CameraAction::CaptureSuccess {
            uri: "file:///capture.jpg".to_string(),
            capture_box: None,
        });
        state
    }

    fn sample_box() -> CaptureBox {
        CaptureBox {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
            aspect_ratio: 2.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = CameraState::new();
        assert_eq!(state.phase(), CapturePhase::Idle);
        assert_eq!(state.capture.capture_box.aspect_ratio, 1.0);
        assert_eq!(state.metadata.rarity_tier, RarityTier::Common);
        assert!(state.location.is_none());
    }

    #[test]
    fn test_capture_flow() {
        let mut state = CameraState::new();
        state.apply(CameraAction::StartCapture);
        assert_eq!(state.phase(), CapturePhase::Capturing);

        state.apply(CameraAction::CaptureSuccess {
            uri: "file:///a.jpg".to_string(),
            capture_box: Some(sample_box()),
        });
        assert_eq!(state.phase(), CapturePhase::Captured);
        assert_eq!(state.capture.uri.as_deref(), Some("file:///a.jpg"));
        assert_eq!(state.capture.capture_box, sample_box());
    }

    #[test]
    fn test_capture_failed() {
        let mut state = CameraState::new();
        state.apply(CameraAction::StartCapture);
        state.apply(CameraAction::CaptureFailed);
        assert_eq!(state.phase(), CapturePhase::Idle);
        assert!(!state.capture.is_capturing);
    }

    #[test]
    fn test_reset_capture_keeps_box() {
        let mut state = captured();
        state.apply(CameraAction::SetCaptureBox {
            capture_box: sample_box(),
        });
        state.apply(CameraAction::ResetCapture);
        assert!(state.capture.uri.is_none());
        assert_eq!(state.capture.capture_box, sample_box());
    }

    #[test]
    fn test_identification_flow() {
        let mut state = captured();
        state.apply(CameraAction::VlmProcessingStart);
        assert_eq!(state.phase(), CapturePhase::Captured);

        state.apply(CameraAction::VlmProcessingSuccess {
            label: "Monarch butterfly".to_string(),
        });
        assert_eq!(state.phase(), CapturePhase::Identified);
        assert_eq!(state.identified_label(), Some("Monarch butterfly"));

        state.apply(CameraAction::IdentificationComplete);
        assert_eq!(state.phase(), CapturePhase::Complete);

        state.apply(CameraAction::ResetIdentification);
        assert_eq!(state.identification, Identification::default());
    }

    #[test]
    fn test_identification_failed() {
        let mut state = captured();
        state.apply(CameraAction::VlmProcessingSuccess {
            label: "stale".to_string(),
        });
        state.apply(CameraAction::VlmProcessingFailed);
        assert_eq!(state.phase(), CapturePhase::Unidentified);
        assert!(state.identified_label().is_none());
    }

    #[test]
    fn test_set_rarity_keeps_score() {
        let mut state = CameraState::new();
        state.apply(CameraAction::SetRarity {
            tier: RarityTier::Rare,
            score: Some(72.0),
        });
        state.apply(CameraAction::SetRarity {
            tier: RarityTier::Epic,
            score: None,
        });
        assert_eq!(state.metadata.rarity_tier, RarityTier::Epic);
        assert_eq!(state.metadata.rarity_score, Some(72.0));

        state.apply(CameraAction::ResetMetadata);
        assert_eq!(state.metadata, CaptureMetadata::default());
    }

    #[test]
    fn test_reset_all() {
        let mut state = captured();
        state.apply(CameraAction::SetLocation {
            location: Some(GeoPoint {
                latitude: 37.43,
                longitude: -122.17,
            }),
        });
        state.apply(CameraAction::ResetAll);
        assert_eq!(state, CameraState::default());
    }

    #[test]
    fn test_action_from_json() {
        let action: CameraAction =
            serde_json::from_str(r#"{"type": "set_rarity", "tier": "mythic"}"#).unwrap();
        assert_eq!(
            action,
            CameraAction::SetRarity {
                tier: RarityTier::Mythic,
                score: None
            }
        );
    }
}
