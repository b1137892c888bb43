//! Actions accepted by the camera reducer.

use serde::{Deserialize, Serialize};

use super::{CaptureBox, GeoPoint};
use crate::rarity::RarityTier;

/// A state transition of the camera screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraAction {
    StartCapture,
    CaptureSuccess {
        uri: String,
        #[serde(default)]
        capture_box: Option<CaptureBox>,
    },
    CaptureFailed,
    /// Clears the capture but keeps the capture box for the next one.
    ResetCapture,
    SetCaptureBox {
        capture_box: CaptureBox,
    },
    SetLocation {
        location: Option<GeoPoint>,
    },
    VlmProcessingStart,
    VlmProcessingSuccess {
        label: String,
    },
    VlmProcessingFailed,
    IdentificationComplete,
    ResetIdentification,
    /// Sets the tier; the previous score is kept when none is given.
    SetRarity {
        tier: RarityTier,
        #[serde(default)]
        score: Option<f64>,
    },
    ResetMetadata,
    ResetAll,
}
