use std::f64::consts::PI;

use crate::surface::{Canvas, SavedState};
use crate::types::{Color, Point};

/// Working geometry of the dial.
///
/// The scale is a semicircle of `radius` whose flat edge sits on
/// y = `height`, inside a uniform `border`. Angle 0 lies at the left end of
/// the baseline and π at the right, sweeping over the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub radius: f64,
    pub width: f64,
    pub height: f64,
    pub border: f64,
}

impl Frame {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            width: 2.0 * radius,
            height: 1.2 * radius,
            border: 0.1 * radius,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.radius,
            y: self.height,
        }
    }

    /// Full surface size including the border on every side.
    pub fn canvas_size(&self) -> (f64, f64) {
        (
            self.width + 2.0 * self.border,
            self.height + 2.0 * self.border,
        )
    }

    /// Size the surface and move the origin inside the border.
    pub fn initialize(&self, canvas: &mut dyn Canvas) {
        let (w, h) = self.canvas_size();
        canvas.set_size(w, h);
        canvas.translate(self.border, self.border);
    }

    /// Put the origin at the dial center with +x pointing along `angle`.
    pub fn rotate_to(&self, canvas: &mut dyn Canvas, angle: f64) {
        let c = self.center();
        canvas.translate(c.x, c.y);
        canvas.rotate(PI + angle);
    }

    /// Outline of the scale: the upper semicircle plus a baseline slightly
    /// wider than it. Drawn last so it sits on top of everything else.
    pub fn draw_base(&self, canvas: &mut dyn Canvas) {
        let r = self.radius;
        let mut c = SavedState::new(canvas);
        c.set_line_width(10.0);
        c.set_stroke(Color::NAVY.into());
        c.begin_path();
        c.arc(r, self.height, r, PI, 2.0 * PI);
        c.move_to(2.0 * r + 5.0, self.height);
        c.line_to(-5.0, self.height);
        c.stroke();
    }
}
