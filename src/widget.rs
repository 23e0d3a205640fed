///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{
    BoxConstraints, Color, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx,
    Selector, Size, UpdateCtx, Widget,
};

use crate::config::KnobConfig;
use crate::error::KnobResult;
use crate::gesture::{GestureSample, RotationGestureRecognizer};
use crate::knob::Knob;
use crate::renderer::KnobRenderer;
use crate::KnobState;

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Command Selectors
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
pub const SET_DISABLED: Selector = Selector::new("disabled-knob-state");
pub const SET_ENABLED: Selector = Selector::new("idle-knob-state");
/// Sets the knob value with an animated pointer.
pub const SET_KNOB_VALUE: Selector<f64> = Selector::new("set-knob-value");
/// Notification carrying the value whenever the continuity policy fires.
pub const KNOB_VALUE_CHANGED: Selector<f64> = Selector::new("knob-value-changed");

pub const DEFAULT_KNOB_SIZE: f64 = 100.0;

type ValueChangedCallback = Box<dyn Fn(&mut EventCtx, f64, &Env)>;

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// KnobWidget
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
pub struct KnobWidget {
    knob: Knob<KnobRenderer>,
    recognizer: RotationGestureRecognizer,
    state: KnobState,
    on_value_changed: Option<ValueChangedCallback>,
}

impl KnobWidget {
    pub fn new() -> Self {
        Self::with_knob(Knob::new(KnobRenderer::default()))
    }

    pub fn from_config(config: &KnobConfig) -> KnobResult<Self> {
        let mut renderer = KnobRenderer::default();
        renderer.line_width = config.line_width;
        renderer.pointer_length = config.pointer_length;
        Ok(Self::with_knob(Knob::from_config(config, renderer)?))
    }

    fn with_knob(knob: Knob<KnobRenderer>) -> Self {
        Self {
            knob,
            recognizer: RotationGestureRecognizer::new(),
            state: KnobState::Idle,
            on_value_changed: None,
        }
    }

    // Builders
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> KnobResult<Self> {
        self.knob.set_range(minimum, maximum)?;
        self.knob.refresh();
        Ok(self)
    }

    pub fn with_span(mut self, start: f64, end: f64) -> KnobResult<Self> {
        self.knob.set_span(start, end)?;
        Ok(self)
    }

    pub fn with_continuous(mut self, is_continuous: bool) -> Self {
        self.knob.set_continuous(is_continuous);
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.knob.renderer_mut().line_width = line_width;
        self
    }

    pub fn with_pointer_length(mut self, pointer_length: f64) -> Self {
        self.knob.renderer_mut().pointer_length = pointer_length;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.knob.renderer_mut().color = Some(color);
        self
    }

    pub fn on_value_changed(mut self, callback: impl Fn(&mut EventCtx, f64, &Env) + 'static) -> Self {
        self.on_value_changed = Some(Box::new(callback));
        self
    }

    // Queries
    pub fn knob(&self) -> &Knob<KnobRenderer> {
        &self.knob
    }

    pub fn knob_mut(&mut self) -> &mut Knob<KnobRenderer> {
        &mut self.knob
    }

    pub fn state(&self) -> KnobState {
        self.state
    }

    fn apply_sample(&mut self, ctx: &mut EventCtx, sample: GestureSample, data: &mut f64, env: &Env) {
        let notification = self.knob.update_from_touch(sample);
        *data = self.knob.value();
        ctx.request_paint();

        if let Some(value) = notification {
            ctx.submit_notification(KNOB_VALUE_CHANGED.with(value));
            if let Some(callback) = &self.on_value_changed {
                callback(ctx, value, env);
            }
        }
    }
}

impl Default for KnobWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget<f64> for KnobWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut f64, env: &Env) {
        match event {
            Event::Command(cmd) if cmd.is(SET_DISABLED) => {
                if let Some(sample) = self.recognizer.cancel() {
                    ctx.set_active(false);
                    self.apply_sample(ctx, sample, data, env);
                }
                self.state = KnobState::Disabled;
                ctx.request_paint();
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(SET_ENABLED) => {
                self.state = KnobState::Idle;
                ctx.request_paint();
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(SET_KNOB_VALUE) => {
                let value = *cmd.get_unchecked(SET_KNOB_VALUE);
                self.knob.set_value(value, true);
                *data = self.knob.value();
                ctx.request_anim_frame();
                ctx.set_handled();
            }
            Event::AnimFrame(interval) => {
                if self.knob.renderer_mut().advance(*interval) {
                    ctx.request_anim_frame();
                }
                ctx.request_paint();
            }
            _ => {
                if self.state == KnobState::Disabled {
                    return;
                }
                if let Some(sample) = self.recognizer.recognize(ctx, event) {
                    self.state = if sample.phase.is_terminal() {
                        KnobState::Idle
                    } else {
                        KnobState::Tracking
                    };
                    self.apply_sample(ctx, sample, data, env);
                }
            }
        }
    }

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &f64, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            self.knob.set_value(*data, false);
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &f64, data: &f64, _env: &Env) {
        if !old_data.same(data) && !data.same(&self.knob.value()) {
            log::trace!("Knob data changed externally to {data}");
            self.knob.set_value(*data, false);
            ctx.request_paint();
        }
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &f64, _env: &Env) -> Size {
        let size = bc.constrain(Size::new(DEFAULT_KNOB_SIZE, DEFAULT_KNOB_SIZE));
        let side = size.width.min(size.height);
        bc.constrain(Size::new(side, side))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &f64, env: &Env) {
        let span = self.knob.span();
        self.knob.renderer().paint(ctx, &span, env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnobError;

    #[test]
    fn from_config_carries_renderer_settings() {
        let config = KnobConfig {
            minimum_value: -1.0,
            line_width: 5.0,
            pointer_length: 9.0,
            is_continuous: false,
            ..KnobConfig::default()
        };
        let widget = KnobWidget::from_config(&config).unwrap();
        assert_eq!(widget.knob().renderer().line_width, 5.0);
        assert_eq!(widget.knob().renderer().pointer_length, 9.0);
        assert_eq!(widget.knob().minimum_value(), -1.0);
        assert!(!widget.knob().is_continuous());
        assert_eq!(widget.state(), KnobState::Idle);
    }

    #[test]
    fn builders_validate_range_and_span() {
        assert!(matches!(
            KnobWidget::new().with_range(3.0, 2.0),
            Err(KnobError::DegenerateRange { .. })
        ));
        assert!(matches!(
            KnobWidget::new().with_span(0.0, 0.0),
            Err(KnobError::DegenerateSpan { .. })
        ));
        let widget = KnobWidget::new().with_range(10.0, 20.0).unwrap().with_continuous(false);
        assert_eq!(widget.knob().value(), 10.0);
        assert_eq!(widget.knob().renderer().target_angle(), widget.knob().start_angle());
    }
}
