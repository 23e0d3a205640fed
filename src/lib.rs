///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::Data;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod config;
pub mod error;
pub mod gesture;
pub mod knob;
pub mod mapping;
pub mod renderer;
pub mod rotation;
pub mod widget;

pub use config::KnobConfig;
pub use error::{KnobError, KnobResult};
pub use gesture::{GesturePhase, GestureSample, RotationGestureRecognizer};
pub use knob::Knob;
pub use mapping::{angle_to_value, clamp_value, value_to_angle, AngleSpan, ValueRange};
pub use renderer::{KnobRenderer, PointerRenderer};
pub use rotation::{RotationTracker, TrackerState, TrackerUpdate};
pub use widget::{KnobWidget, KNOB_VALUE_CHANGED, SET_DISABLED, SET_ENABLED, SET_KNOB_VALUE};

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// KnobState
//
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, PartialEq, Eq, Data, Debug)]
pub enum KnobState {
    Idle,
    Tracking,
    Disabled,
}
