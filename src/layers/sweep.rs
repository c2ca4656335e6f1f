use crate::context::RenderContext;
use crate::daylight::DaylightError;
use crate::layers::Layer;
use crate::surface::{Canvas, LinearGradient, SavedState};
use crate::types::{Bound, Color};

const SWEEP_DEGREES: f64 = 2.0;
const FADE_LENGTH: f64 = 20.0;

/// Thin fading wedge that shows which way the marker is moving.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub bound: Bound,
    pub clockwise: bool,
}

impl Sweep {
    pub fn new(bound: impl Into<Bound>, clockwise: bool) -> Self {
        Self {
            bound: bound.into(),
            clockwise,
        }
    }

    fn fade() -> LinearGradient {
        LinearGradient::new((0.0, 0.0), (0.0, FADE_LENGTH))
            .stop(0.0, Color::RED.with_alpha(0.4))
            .stop(0.4, Color::RED.with_alpha(0.2))
            .stop(0.6, Color::RED.with_alpha(0.1))
            .stop(1.0, Color::RED.with_alpha(0.0))
    }
}

impl Layer for Sweep {
    fn draw(&self, canvas: &mut dyn Canvas, context: &RenderContext<'_>) -> Result<(), DaylightError> {
        let angle = context.resolve(self.bound)?;
        let r = context.frame.radius;

        let mut c = SavedState::new(canvas);
        context.frame.rotate_to(&mut *c, angle);
        if self.clockwise {
            c.scale(1.0, -1.0);
        }

        c.begin_path();
        c.move_to(0.0, 0.0);
        c.line_to(r, 0.0);
        c.arc(0.0, 0.0, r, 0.0, SWEEP_DEGREES.to_radians());
        c.line_to(0.0, 0.0);

        c.set_line_width(2.0);
        c.set_fill(Self::fade().into());
        c.fill();

        Ok(())
    }
}
