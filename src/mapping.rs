///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::f64::consts::{PI, TAU};

use crate::error::{KnobError, KnobResult};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// ValueRange
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// The scalar interval a knob can take. `minimum < maximum` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRange"))]
pub struct ValueRange {
    minimum: f64,
    maximum: f64,
}

impl ValueRange {
    pub fn new(minimum: f64, maximum: f64) -> KnobResult<Self> {
        if !minimum.is_finite() {
            return Err(KnobError::NonFinite { field: "minimum_value" });
        }
        if !maximum.is_finite() {
            return Err(KnobError::NonFinite { field: "maximum_value" });
        }
        if maximum <= minimum {
            return Err(KnobError::DegenerateRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.maximum - self.minimum
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// AngleSpan
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// The arc the value range is mapped onto, in radians.
///
/// Angles follow screen coordinates: `0` points right and positive angles
/// turn clockwise. `end` may be smaller than `start`, in which case the value
/// grows counterclockwise. The width is never zero and always less than a
/// full turn, so the excluded arc between `end` and `start` is never empty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSpan"))]
pub struct AngleSpan {
    start: f64,
    end: f64,
}

impl AngleSpan {
    pub const DEFAULT_START: f64 = -11.0 * PI / 8.0;
    pub const DEFAULT_END: f64 = 3.0 * PI / 8.0;

    pub fn new(start: f64, end: f64) -> KnobResult<Self> {
        if !start.is_finite() {
            return Err(KnobError::NonFinite { field: "start_angle" });
        }
        if !end.is_finite() {
            return Err(KnobError::NonFinite { field: "end_angle" });
        }
        let width = end - start;
        if width == 0.0 || width.abs() >= TAU {
            return Err(KnobError::DegenerateSpan { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Signed sweep from `start` to `end`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.start.min(self.end)
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.start.max(self.end)
    }

    #[must_use]
    pub fn clamp(&self, angle: f64) -> f64 {
        self.lower().max(self.upper().min(angle))
    }

    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.lower() && angle <= self.upper()
    }

    /// Midpoint of the excluded arc, measured past the upper edge of the span.
    #[must_use]
    pub fn excluded_midpoint(&self) -> f64 {
        (TAU + self.lower() - self.upper()) / 2.0 + self.upper()
    }
}

impl Default for AngleSpan {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    minimum: f64,
    maximum: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for ValueRange {
    type Error = KnobError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        ValueRange::new(raw.minimum, raw.maximum)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpan {
    start: f64,
    end: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSpan> for AngleSpan {
    type Error = KnobError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        AngleSpan::new(raw.start, raw.end)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// ValueMapper
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[must_use]
pub fn clamp_value(value: f64, range: &ValueRange) -> f64 {
    range.minimum.max(range.maximum.min(value))
}

#[must_use]
pub fn value_to_angle(value: f64, range: &ValueRange, span: &AngleSpan) -> f64 {
    (value - range.minimum) / range.width() * span.width() + span.start
}

/// Inverse of [`value_to_angle`], clamped into `range`.
#[must_use]
pub fn angle_to_value(angle: f64, range: &ValueRange, span: &AngleSpan) -> f64 {
    let value = (angle - span.start) / span.width() * range.width() + range.minimum;
    clamp_value(value, range)
}
