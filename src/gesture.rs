///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{Event, EventCtx, KbKey, Point};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// GesturePhase
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    /// The gesture was interrupted from outside. The value reached so far is kept.
    Cancelled,
}

impl GesturePhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// GestureSample
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// One update of a rotation gesture: the raw angle of the touch around the
/// knob center and the phase the gesture is in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub touch_angle: f64,
    pub phase: GesturePhase,
}

/// Angle of `point` around `center` in screen coordinates, in `(-π, π]`.
#[must_use]
pub fn touch_angle(center: Point, point: Point) -> f64 {
    (point.y - center.y).atan2(point.x - center.x)
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationGestureRecognizer
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Turns left button drags over a widget into [`GestureSample`]s.
///
/// A press begins the gesture, moves while pressed change it and the release
/// ends it. Escape cancels it at the last angle.
#[derive(Debug, Clone, Default)]
pub struct RotationGestureRecognizer {
    last_angle: Option<f64>,
}

impl RotationGestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_angle.is_some()
    }

    pub fn press(&mut self, center: Point, pos: Point) -> GestureSample {
        let angle = touch_angle(center, pos);
        self.last_angle = Some(angle);
        GestureSample {
            touch_angle: angle,
            phase: GesturePhase::Began,
        }
    }

    pub fn drag(&mut self, center: Point, pos: Point) -> Option<GestureSample> {
        self.last_angle?;
        let angle = touch_angle(center, pos);
        self.last_angle = Some(angle);
        Some(GestureSample {
            touch_angle: angle,
            phase: GesturePhase::Changed,
        })
    }

    pub fn release(&mut self, center: Point, pos: Point) -> Option<GestureSample> {
        self.last_angle.take()?;
        Some(GestureSample {
            touch_angle: touch_angle(center, pos),
            phase: GesturePhase::Ended,
        })
    }

    pub fn cancel(&mut self) -> Option<GestureSample> {
        let angle = self.last_angle.take()?;
        Some(GestureSample {
            touch_angle: angle,
            phase: GesturePhase::Cancelled,
        })
    }

    /// Feeds a druid event. Returns a sample when the event moved the gesture
    /// along, and keeps the widget active and focused while it is running.
    pub fn recognize(&mut self, ctx: &mut EventCtx, event: &Event) -> Option<GestureSample> {
        let center = ctx.size().to_rect().center();

        match event {
            Event::MouseDown(mouse_event) if mouse_event.button.is_left() => {
                ctx.set_active(true);
                ctx.request_focus();
                ctx.set_handled();
                Some(self.press(center, mouse_event.pos))
            }
            Event::MouseMove(mouse_event) if ctx.is_active() => {
                let sample = self.drag(center, mouse_event.pos);
                if sample.is_some() {
                    ctx.set_handled();
                }
                sample
            }
            Event::MouseUp(mouse_event) if ctx.is_active() && mouse_event.button.is_left() => {
                ctx.set_active(false);
                ctx.set_handled();
                self.release(center, mouse_event.pos)
            }
            Event::KeyDown(key_event) if key_event.key == KbKey::Escape && self.is_active() => {
                ctx.set_active(false);
                ctx.set_handled();
                self.cancel()
            }
            _ => None,
        }
    }
}
