///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use crate::config::KnobConfig;
use crate::error::KnobResult;
use crate::gesture::GestureSample;
use crate::mapping::{clamp_value, value_to_angle, AngleSpan, ValueRange};
use crate::renderer::PointerRenderer;
use crate::rotation::{RotationTracker, TrackerState};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Knob
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Value model of a rotary knob.
///
/// The value only changes through [`Knob::set_value`] or
/// [`Knob::update_from_touch`], and both clamp and map the same way. Every
/// mapping ends with a call to the renderer's
/// [`PointerRenderer::set_pointer_angle`].
#[derive(Debug, Clone)]
pub struct Knob<R: PointerRenderer> {
    range: ValueRange,
    span: AngleSpan,
    value: f64,
    is_continuous: bool,
    tracker: RotationTracker,
    renderer: R,
}

impl<R: PointerRenderer> Knob<R> {
    pub fn new(renderer: R) -> Self {
        let range = ValueRange::default();
        let mut knob = Self {
            range,
            span: AngleSpan::default(),
            value: range.minimum(),
            is_continuous: true,
            tracker: RotationTracker::new(),
            renderer,
        };
        knob.sync_pointer();
        knob
    }

    pub fn from_config(config: &KnobConfig, renderer: R) -> KnobResult<Self> {
        let (range, span) = config.validate()?;
        let mut knob = Self {
            range,
            span,
            value: range.minimum(),
            is_continuous: config.is_continuous,
            tracker: RotationTracker::new(),
            renderer,
        };
        knob.sync_pointer();
        Ok(knob)
    }

    // Queries
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn span(&self) -> AngleSpan {
        self.span
    }

    #[must_use]
    pub fn minimum_value(&self) -> f64 {
        self.range.minimum()
    }

    #[must_use]
    pub fn maximum_value(&self) -> f64 {
        self.range.maximum()
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.span.start()
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.span.end()
    }

    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.is_continuous
    }

    #[must_use]
    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.state()
    }

    /// Angle the current value maps to, after clamping into the current range.
    #[must_use]
    pub fn pointer_angle(&self) -> f64 {
        value_to_angle(clamp_value(self.value, &self.range), &self.range, &self.span)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // Value
    pub fn set_value(&mut self, new_value: f64, animated: bool) {
        if !new_value.is_finite() {
            log::warn!("Ignoring non-finite knob value {new_value:?}");
            return;
        }
        self.value = clamp_value(new_value, &self.range);
        let angle = value_to_angle(self.value, &self.range, &self.span);
        self.renderer.set_pointer_angle(angle, animated);
    }

    /// Clamps the stored value into the current range and re-maps it.
    pub fn refresh(&mut self) {
        self.set_value(self.value, false);
    }

    /// Applies one gesture update. Returns the new value when the continuity
    /// policy asks for a value changed notification.
    pub fn update_from_touch(&mut self, sample: GestureSample) -> Option<f64> {
        let update = self
            .tracker
            .track(sample, &self.range, &self.span, self.is_continuous)?;
        self.value = update.value;
        self.renderer.set_pointer_angle(update.bounded_angle, false);
        update.notify.then_some(self.value)
    }

    // Configuration
    pub fn set_minimum_value(&mut self, minimum: f64) -> KnobResult<()> {
        self.set_range(minimum, self.range.maximum())
    }

    pub fn set_maximum_value(&mut self, maximum: f64) -> KnobResult<()> {
        self.set_range(self.range.minimum(), maximum)
    }

    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> KnobResult<()> {
        self.range = ValueRange::new(minimum, maximum)?;
        self.sync_pointer();
        Ok(())
    }

    pub fn set_start_angle(&mut self, start: f64) -> KnobResult<()> {
        self.set_span(start, self.span.end())
    }

    pub fn set_end_angle(&mut self, end: f64) -> KnobResult<()> {
        self.set_span(self.span.start(), end)
    }

    pub fn set_span(&mut self, start: f64, end: f64) -> KnobResult<()> {
        self.span = AngleSpan::new(start, end)?;
        self.sync_pointer();
        Ok(())
    }

    pub fn set_continuous(&mut self, is_continuous: bool) {
        self.is_continuous = is_continuous;
    }

    // The stored value is left alone; `refresh` re-clamps it.
    fn sync_pointer(&mut self) {
        let angle = self.pointer_angle();
        self.renderer.set_pointer_angle(angle, false);
    }
}
