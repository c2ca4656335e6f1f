use crate::context::RenderContext;
use crate::daylight::DaylightError;
use crate::geometry::ordered;
use crate::layers::{Layer, label};
use crate::surface::{Canvas, SavedState};
use crate::types::{Bound, Color, Style};

const OUTLINE_DASH: [f64; 2] = [20.0, 20.0];
const LABEL_PT: f64 = 14.0;

/// Filled wedge between two bounds, e.g. one season.
///
/// Bounds may be given in either order. Defaults: light grey fill, black
/// dashed outline.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSegment {
    pub start: Bound,
    pub end: Bound,
    pub label: String,
    pub style: Style,
}

impl SeasonSegment {
    pub fn new(
        start: impl Into<Bound>,
        end: impl Into<Bound>,
        label: impl Into<String>,
        style: Style,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            label: label.into(),
            style,
        }
    }
}

impl Layer for SeasonSegment {
    fn draw(&self, canvas: &mut dyn Canvas, context: &RenderContext<'_>) -> Result<(), DaylightError> {
        let (start, end) = ordered(context.resolve(self.start)?, context.resolve(self.end)?);
        let sweep = end - start;
        let r = context.frame.radius;

        let mut c = SavedState::new(canvas);
        context.frame.rotate_to(&mut *c, start);

        c.begin_path();
        c.move_to(0.0, 0.0);
        c.line_to(r, 0.0);
        c.arc(0.0, 0.0, r, 0.0, sweep);
        c.line_to(0.0, 0.0);

        c.set_line_width(2.0);
        c.set_fill(self.style.fill.unwrap_or(Color::LIGHT_GREY).into());
        c.set_stroke(self.style.stroke.unwrap_or(Color::BLACK).into());
        c.set_line_dash(&OUTLINE_DASH);
        c.fill();
        c.stroke();

        // Label sits halfway round the wedge, halfway out.
        c.rotate(sweep / 2.0);
        c.set_line_dash(&[]);
        c.set_fill(Color::GREY.into());
        label(&mut *c, &self.label, r / 2.0, LABEL_PT);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, RecordingCanvas};
    use crate::test_utils::{StubSunTimes, approx, make_context, ymd};
    use std::f64::consts::PI;

    fn draw(segment: &SeasonSegment, stub: &StubSunTimes) -> RecordingCanvas {
        let context = make_context(stub, |_| {});
        let mut canvas = RecordingCanvas::new();
        segment.draw(&mut canvas, &context).unwrap();
        canvas
    }

    #[test]
    fn wedge_spans_the_resolved_bounds() {
        let stub = StubSunTimes::constant(12.0);
        let seg = SeasonSegment::new(PI / 4.0, PI / 2.0, "Spring", Style::fill(Color::LIGHT_GREEN));
        let canvas = draw(&seg, &stub);

        let rotations = canvas.rotations();
        assert!(approx(rotations[0], PI + PI / 4.0, 1e-12));
        assert!(approx(rotations[1], PI / 8.0, 1e-12));
        assert!(canvas.ops().contains(&Op::Arc {
            cx: 0.0,
            cy: 0.0,
            radius: 600.0,
            start: 0.0,
            end: PI / 4.0
        }));
        assert!(canvas.ops().contains(&Op::SetFill(Color::LIGHT_GREEN.into())));
        assert!(canvas.ops().contains(&Op::SetLineDash(vec![20.0, 20.0])));
        // Outline goes over the fill.
        let fill = canvas.ops().iter().position(|op| *op == Op::Fill).unwrap();
        let stroke = canvas.ops().iter().position(|op| *op == Op::Stroke).unwrap();
        assert!(fill < stroke);
        assert_eq!(canvas.texts(), vec!["Spring"]);
    }

    #[test]
    fn swapping_bounds_draws_the_same_thing() {
        let stub = StubSunTimes::seasonal();
        let summer = ymd(2024, 6, 21);
        let autumn = ymd(2024, 9, 23);
        let forward = draw(
            &SeasonSegment::new(summer, autumn, "Summer", Style::fill(Color::YELLOW)),
            &stub,
        );
        let backward = draw(
            &SeasonSegment::new(autumn, summer, "Summer", Style::fill(Color::YELLOW)),
            &stub,
        );
        assert_eq!(forward.ops(), backward.ops());
    }

    #[test]
    fn defaults_apply_without_style() {
        let stub = StubSunTimes::constant(12.0);
        let canvas = draw(&SeasonSegment::new(0.0, 1.0, "x", Style::default()), &stub);
        assert!(canvas.ops().contains(&Op::SetFill(Color::LIGHT_GREY.into())));
        assert!(canvas.ops().contains(&Op::SetStroke(Color::BLACK.into())));
    }

    #[test]
    fn label_is_centered_halfway_out() {
        let stub = StubSunTimes::constant(12.0);
        let canvas = draw(&SeasonSegment::new(0.0, 1.0, "Fall", Style::default()), &stub);
        let text = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                Op::FillText(t, x, y) => Some((t.clone(), *x, *y)),
                _ => None,
            })
            .unwrap();
        assert_eq!(text.0, "Fall");
        assert!(approx(text.1, 300.0, 1e-12));
        // "Fall" has no descenders: half the ascent of 14pt text
        assert!(approx(text.2, 0.72 * (14.0 * 96.0 / 72.0) / 2.0, 1e-9));
    }

    #[test]
    fn unresolvable_bound_draws_nothing() {
        let stub = StubSunTimes::unavailable();
        let context = make_context(&stub, |_| {});
        let mut canvas = RecordingCanvas::new();
        let seg = SeasonSegment::new(ymd(2024, 1, 1), 1.0, "Winter", Style::default());
        assert!(seg.draw(&mut canvas, &context).is_err());
        assert!(canvas.ops().is_empty());
    }
}
