//! Drawing surface abstraction.
//!
//! Renderers only talk to [`Canvas`], a small 2D vector context with a
//! transform stack, paths, paints and text. [`SvgCanvas`] turns those calls
//! into an SVG document.

use std::ops::{Deref, DerefMut};

use crate::types::Color;

pub mod svg_canvas;

#[cfg(test)]
pub mod recording;

pub use svg_canvas::SvgCanvas;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub stops: Vec<(f64, Color)>,
}

impl LinearGradient {
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            from,
            to,
            stops: Vec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push((offset, color));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Linear(gradient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl TextMetrics {
    /// Baseline shift that centers the glyphs vertically on y = 0.
    pub fn centered_baseline(&self) -> f64 {
        (self.ascent - self.descent) / 2.0
    }
}

pub fn points_to_pixels(pt: f64) -> f64 {
    pt * 96.0 / 72.0
}

/// Approximate Arial metrics; there is no font engine behind the SVG output.
pub fn estimate_text_metrics(text: &str, font_px: f64) -> TextMetrics {
    let descends = text.chars().any(|c| matches!(c, 'g' | 'j' | 'p' | 'q' | 'y'));
    TextMetrics {
        width: text.chars().count() as f64 * font_px * 0.55,
        ascent: font_px * 0.72,
        descent: if descends { font_px * 0.21 } else { 0.0 },
    }
}

/// 2D vector drawing context in a y-down coordinate system.
pub trait Canvas {
    fn set_size(&mut self, width: f64, height: f64);
    /// Drop all content and reset every piece of drawing state.
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Circular arc from `start` to `end`; increasing angles turn clockwise on screen.
    /// Connects to the current point with a straight line if there is one.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    fn set_stroke(&mut self, paint: Paint);
    fn set_fill(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn set_font_size(&mut self, points: f64);

    fn stroke(&mut self);
    fn fill(&mut self);

    fn measure_text(&self, text: &str) -> TextMetrics;
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Saves the canvas state on creation and restores it when dropped.
pub struct SavedState<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> SavedState<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<'a> Deref for SavedState<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for SavedState<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

impl Drop for SavedState<'_> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
