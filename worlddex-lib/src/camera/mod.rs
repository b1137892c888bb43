//! Camera screen state machine.
//!
//! Tracks a capture from the shutter press through identification to the
//! rarity assigned to it. The state is updated only through
//! [`CameraState::apply`], a pure reducer over [`CameraAction`]s.

mod action;
mod state;

pub use action::CameraAction;
pub use state::*;
