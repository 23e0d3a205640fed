///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::kurbo::{Arc, Circle, Line};
use druid::piet::{LineCap, StrokeStyle};
use druid::{theme, Color, Env, PaintCtx, Point, RenderContext, Vec2};
use druid_color_thesaurus::gray;

use crate::mapping::AngleSpan;

pub const POINTER_ANIMATION_NANOS: u64 = 150_000_000;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// PointerRenderer
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Receives the pointer position whenever the knob maps a new value.
pub trait PointerRenderer {
    fn set_pointer_angle(&mut self, angle: f64, animated: bool);
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// PointerAnimation
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerAnimation {
    from: f64,
    elapsed_nanos: u64,
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// KnobRenderer
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone)]
pub struct KnobRenderer {
    pointer_angle: f64,
    animation: Option<PointerAnimation>,
    pub line_width: f64,
    pub pointer_length: f64,
    pub color: Option<Color>,
}

impl KnobRenderer {
    pub fn new(pointer_angle: f64) -> Self {
        Self {
            pointer_angle,
            animation: None,
            line_width: 2.0,
            pointer_length: 6.0,
            color: None,
        }
    }

    /// The angle the pointer is heading to.
    #[must_use]
    pub fn target_angle(&self) -> f64 {
        self.pointer_angle
    }

    /// The angle the pointer is drawn at right now.
    #[must_use]
    pub fn displayed_angle(&self) -> f64 {
        match self.animation {
            Some(animation) => {
                let progress = animation.elapsed_nanos as f64 / POINTER_ANIMATION_NANOS as f64;
                animation.from + (self.pointer_angle - animation.from) * progress.min(1.0)
            }
            None => self.pointer_angle,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Moves a running animation forward. Returns whether another frame is needed.
    pub fn advance(&mut self, interval_nanos: u64) -> bool {
        if let Some(animation) = &mut self.animation {
            animation.elapsed_nanos = animation.elapsed_nanos.saturating_add(interval_nanos);
            if animation.elapsed_nanos >= POINTER_ANIMATION_NANOS {
                self.animation = None;
            }
        }
        self.animation.is_some()
    }

    pub fn paint(&self, ctx: &mut PaintCtx, span: &AngleSpan, env: &Env) {
        let size = ctx.size();
        let center = size.to_rect().center();
        let radius = (size.width.min(size.height) - self.line_width) / 2.0;
        if radius <= 0.0 {
            return;
        }
        let color = self.color.clone().unwrap_or_else(|| env.get(theme::PRIMARY_LIGHT));
        let style = StrokeStyle::new().line_cap(LineCap::Round);

        ctx.fill(Circle::new(center, radius), &gray::OUTER_SPACE);

        let track = Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle: span.start(),
            sweep_angle: span.width(),
            x_rotation: 0.0,
        };
        ctx.stroke_styled(track, &color, self.line_width, &style);

        let angle = self.displayed_angle();
        let direction = Vec2::new(angle.cos(), angle.sin());
        let outer: Point = center + direction * radius;
        let inner: Point = center + direction * (radius - self.pointer_length).max(0.0);
        ctx.stroke_styled(Line::new(inner, outer), &color, self.line_width, &style);
    }
}

impl Default for KnobRenderer {
    fn default() -> Self {
        Self::new(AngleSpan::DEFAULT_START)
    }
}

impl PointerRenderer for KnobRenderer {
    fn set_pointer_angle(&mut self, angle: f64, animated: bool) {
        if animated && angle == self.pointer_angle {
            return;
        }
        self.animation = if animated {
            Some(PointerAnimation {
                from: self.displayed_angle(),
                elapsed_nanos: 0,
            })
        } else {
            None
        };
        self.pointer_angle = angle;
    }
}
