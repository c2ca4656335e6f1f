use crate::context::RenderContext;
use crate::daylight::DaylightError;
use crate::layers::{Layer, label};
use crate::surface::{Canvas, SavedState};
use crate::types::{Bound, Color, Style};

const INSET: f64 = 5.0;
const LABELED_EXTENSION: f64 = 20.0;
const LABEL_GAP: f64 = 40.0;
const LINE_DASH: [f64; 2] = [10.0, 10.0];
const LABEL_PT: f64 = 10.0;

/// Line from near the center out past the scale.
///
/// Defaults: red stroke, solid. Labeled lines run 20 units further and put
/// their label 40 units beyond `radius + radial_offset`, colored with the
/// fill color or else the stroke color.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialLine {
    pub bound: Bound,
    pub label: Option<String>,
    pub style: Style,
}

impl RadialLine {
    pub fn new(bound: impl Into<Bound>, label: Option<&str>, style: Style) -> Self {
        Self {
            bound: bound.into(),
            label: label.map(str::to_string),
            style,
        }
    }
}

impl Layer for RadialLine {
    fn draw(&self, canvas: &mut dyn Canvas, context: &RenderContext<'_>) -> Result<(), DaylightError> {
        let angle = context.resolve(self.bound)?;
        let reach = context.frame.radius + self.style.radial_offset;
        let stroke = self.style.stroke.unwrap_or(Color::RED);

        let mut c = SavedState::new(canvas);
        context.frame.rotate_to(&mut *c, angle);

        c.set_stroke(stroke.into());
        c.set_line_width(1.0);
        if self.style.dashed {
            c.set_line_dash(&LINE_DASH);
        }

        let end = if self.label.is_some() {
            reach + LABELED_EXTENSION
        } else {
            reach
        };
        c.begin_path();
        c.move_to(INSET, 0.0);
        c.line_to(end, 0.0);
        c.stroke();

        if let Some(text) = &self.label {
            c.set_line_dash(&[]);
            c.set_fill(self.style.fill.unwrap_or(stroke).into());
            label(&mut *c, text, reach + LABEL_GAP, LABEL_PT);
        }

        Ok(())
    }
}
