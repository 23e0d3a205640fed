///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::f64::consts::TAU;

use crate::gesture::{GesturePhase, GestureSample};
use crate::mapping::{angle_to_value, AngleSpan, ValueRange};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// TrackerState
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Tracking,
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// TrackerUpdate
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerUpdate {
    /// Resolved touch angle, always inside the span.
    pub bounded_angle: f64,
    /// Value for `bounded_angle`, already clamped into the range.
    pub value: f64,
    /// Whether the owner should emit a value changed notification.
    pub notify: bool,
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationTracker
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Turns the raw touch angles of a drag into angles inside an [`AngleSpan`].
///
/// Touch angles arrive as principal values with a wrap discontinuity that can
/// sit anywhere relative to the span. The tracker moves that discontinuity to
/// the middle of the excluded arc, so a drag past either end of the span
/// saturates at that end until the pointer crosses the far side of the gap.
#[derive(Debug, Clone, Default)]
pub struct RotationTracker {
    state: TrackerState,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state == TrackerState::Tracking
    }

    /// Resolves `raw` to the angle inside `span` the user is pointing at.
    #[must_use]
    pub fn bounded_angle(raw: f64, span: &AngleSpan) -> f64 {
        let mid_point = span.excluded_midpoint();

        // Fold by whole turns into (mid_point - 2π, mid_point]. For principal
        // values this is a single 2π step down past the midpoint or up below
        // the window.
        let turns = ((raw - mid_point) / TAU).ceil();
        let bounded = if turns == 0.0 { raw } else { raw - turns * TAU };

        span.clamp(bounded)
    }

    /// Feeds one gesture update. Returns `None` when the sample carries no
    /// usable angle, in which case nothing changes.
    pub fn track(
        &mut self,
        sample: GestureSample,
        range: &ValueRange,
        span: &AngleSpan,
        is_continuous: bool,
    ) -> Option<TrackerUpdate> {
        if !sample.touch_angle.is_finite() {
            log::warn!("Ignoring non-finite touch angle {:?}", sample.touch_angle);
            return None;
        }

        match (self.state, sample.phase) {
            (TrackerState::Idle, GesturePhase::Began) => {
                log::debug!("Rotation began at {:.3}", sample.touch_angle);
                self.state = TrackerState::Tracking;
            }
            (TrackerState::Idle, GesturePhase::Changed) => {
                log::debug!("Rotation changed without a begin, tracking from {:.3}", sample.touch_angle);
                self.state = TrackerState::Tracking;
            }
            (TrackerState::Tracking, GesturePhase::Began) => {
                log::debug!("Rotation restarted at {:.3}", sample.touch_angle);
            }
            (_, GesturePhase::Ended | GesturePhase::Cancelled) => {
                log::debug!("Rotation {:?} at {:.3}", sample.phase, sample.touch_angle);
                self.state = TrackerState::Idle;
            }
            (TrackerState::Tracking, GesturePhase::Changed) => {}
        }

        let bounded_angle = Self::bounded_angle(sample.touch_angle, span);
        let value = angle_to_value(bounded_angle, range, span);
        let notify = is_continuous || sample.phase.is_terminal();
        log::trace!(
            "Touch {:.3} resolved to {:.3} (value {:.3}, notify {})",
            sample.touch_angle,
            bounded_angle,
            value,
            notify
        );

        Some(TrackerUpdate {
            bounded_angle,
            value,
            notify,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn sample(touch_angle: f64, phase: GesturePhase) -> GestureSample {
        GestureSample { touch_angle, phase }
    }

    #[test]
    fn zero_resolves_inside_default_span() {
        let span = AngleSpan::default();
        let bounded = RotationTracker::bounded_angle(0.0, &span);
        assert_eq!(bounded, 0.0);
        assert!(span.contains(bounded));
    }

    #[test]
    fn crossing_excluded_midpoint_flips_to_opposite_end() {
        let span = AngleSpan::default();
        let mid = span.excluded_midpoint();
        assert_eq!(RotationTracker::bounded_angle(mid - 1e-6, &span), span.end());
        assert_eq!(RotationTracker::bounded_angle(mid + 1e-6, &span), span.start());
    }

    #[test]
    fn just_below_start_saturates_at_start() {
        let span = AngleSpan::default();
        let epsilon = 1e-3;
        assert_eq!(RotationTracker::bounded_angle(span.start() - epsilon, &span), span.start());
        // Same direction reported as a principal value in (-π, π].
        let principal = span.start() - epsilon + TAU;
        assert!(principal <= PI);
        assert!((RotationTracker::bounded_angle(principal, &span) - span.start()).abs() < EPSILON);
    }

    #[test]
    fn principal_values_follow_the_live_span() {
        let span = AngleSpan::default();
        // Straight up, reported both ways round.
        let up = RotationTracker::bounded_angle(-FRAC_PI_2, &span);
        let up_wrapped = RotationTracker::bounded_angle(3.0 * FRAC_PI_2, &span);
        assert!((up - -FRAC_PI_2).abs() < EPSILON);
        assert!((up_wrapped - -FRAC_PI_2).abs() < EPSILON);
        // Pointing left lies at -π inside the span, even when reported as π.
        assert!((RotationTracker::bounded_angle(PI, &span) - -PI).abs() < EPSILON);
    }

    #[test]
    fn multi_revolution_angles_fold_to_the_same_reading() {
        let span = AngleSpan::default();
        for raw in [-2.0, 0.3, 1.0, -3.9] {
            let expected = RotationTracker::bounded_angle(raw, &span);
            for turns in [-3.0, -1.0, 1.0, 2.0, 5.0] {
                let folded = RotationTracker::bounded_angle(raw + turns * TAU, &span);
                assert!((folded - expected).abs() < 1e-9, "raw {raw} turned {turns}: {folded}");
            }
        }
    }

    #[test]
    fn below_window_shifts_up_a_turn() {
        // Span (0, π/2): excluded midpoint at 5π/4, so -0.9π reads as 1.1π,
        // which lies on the end side of the gap.
        let span = AngleSpan::new(0.0, FRAC_PI_2).unwrap();
        assert!((span.excluded_midpoint() - 5.0 * PI / 4.0).abs() < EPSILON);
        assert_eq!(RotationTracker::bounded_angle(-0.9 * PI, &span), span.end());
        assert_eq!(RotationTracker::bounded_angle(-0.6 * PI, &span), span.start());
    }

    #[test]
    fn reversed_span_tracks_towards_its_start() {
        let range = ValueRange::default();
        let span = AngleSpan::new(FRAC_PI_2, -PI).unwrap();
        let mut tracker = RotationTracker::new();
        let update = tracker.track(sample(0.0, GesturePhase::Began), &range, &span, true).unwrap();
        assert!((update.value - 1.0 / 3.0).abs() < EPSILON, "{update:?}");
        let update = tracker.track(sample(FRAC_PI_2, GesturePhase::Changed), &range, &span, true).unwrap();
        assert!(update.value.abs() < EPSILON, "{update:?}");
    }

    #[test]
    fn state_machine_transitions() {
        let range = ValueRange::default();
        let span = AngleSpan::default();
        let mut tracker = RotationTracker::new();
        assert_eq!(tracker.state(), TrackerState::Idle);

        tracker.track(sample(0.0, GesturePhase::Began), &range, &span, true);
        assert_eq!(tracker.state(), TrackerState::Tracking);
        tracker.track(sample(0.2, GesturePhase::Changed), &range, &span, true);
        assert_eq!(tracker.state(), TrackerState::Tracking);
        tracker.track(sample(0.2, GesturePhase::Ended), &range, &span, true);
        assert_eq!(tracker.state(), TrackerState::Idle);

        tracker.track(sample(0.1, GesturePhase::Changed), &range, &span, true);
        assert!(tracker.is_tracking());
        tracker.track(sample(0.1, GesturePhase::Cancelled), &range, &span, true);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn discrete_policy_only_notifies_on_completion() {
        let range = ValueRange::default();
        let span = AngleSpan::default();
        let mut tracker = RotationTracker::new();
        let phases = [
            GesturePhase::Began,
            GesturePhase::Changed,
            GesturePhase::Changed,
            GesturePhase::Changed,
        ];
        for (index, phase) in phases.into_iter().enumerate() {
            let update = tracker
                .track(sample(-1.0 + index as f64 * 0.1, phase), &range, &span, false)
                .unwrap();
            assert!(!update.notify, "{phase:?} notified");
        }
        let update = tracker.track(sample(-0.5, GesturePhase::Cancelled), &range, &span, false).unwrap();
        assert!(update.notify);
    }

    #[test]
    fn non_finite_angles_are_ignored() {
        let range = ValueRange::default();
        let span = AngleSpan::default();
        let mut tracker = RotationTracker::new();
        assert_eq!(tracker.track(sample(f64::NAN, GesturePhase::Began), &range, &span, true), None);
        assert_eq!(tracker.state(), TrackerState::Idle);
    }
}
