use crate::context::RenderContext;
use crate::daylight::DaylightError;
use crate::layers::{Layer, label};
use crate::surface::{Canvas, SavedState};
use crate::types::{Bound, Color};

const TICK_LENGTH: f64 = 40.0;
const LABEL_GAP: f64 = 40.0;
const LABEL_PT: f64 = 16.0;

/// Short mark straddling the scale, optionally labeled outside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub bound: Bound,
    pub label: Option<String>,
}

impl Tick {
    pub fn new(bound: impl Into<Bound>, label: impl Into<String>) -> Self {
        Self {
            bound: bound.into(),
            label: Some(label.into()),
        }
    }
}

impl Layer for Tick {
    fn draw(&self, canvas: &mut dyn Canvas, context: &RenderContext<'_>) -> Result<(), DaylightError> {
        let angle = context.resolve(self.bound)?;
        let r = context.frame.radius;

        let mut c = SavedState::new(canvas);
        context.frame.rotate_to(&mut *c, angle);

        c.set_stroke(Color::BLACK.into());
        c.set_line_width(5.0);
        c.begin_path();
        c.move_to(r - TICK_LENGTH / 2.0, 0.0);
        c.line_to(r + TICK_LENGTH / 2.0, 0.0);
        c.stroke();

        if let Some(text) = &self.label {
            c.set_fill(Color::BLACK.into());
            label(&mut *c, text, r + LABEL_GAP, LABEL_PT);
        }

        Ok(())
    }
}
