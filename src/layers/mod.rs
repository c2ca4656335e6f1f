use crate::context::RenderContext;
use crate::daylight::DaylightError;
use crate::surface::Canvas;

pub trait Layer {
    /// Draw this element onto the canvas. Bounds are resolved before any
    /// drawing happens, so a resolution failure leaves the canvas untouched.
    fn draw(&self, canvas: &mut dyn Canvas, context: &RenderContext<'_>) -> Result<(), DaylightError>;
}

/// Draw `content` at `x` along the local axis, vertically centered on it.
pub fn label(canvas: &mut dyn Canvas, content: &str, x: f64, font_pt: f64) {
    canvas.set_font_size(font_pt);
    let metrics = canvas.measure_text(content);
    canvas.fill_text(content, x, metrics.centered_baseline());
}

pub mod frame;
pub mod radial;
pub mod segment;
pub mod sweep;
pub mod tick;

pub use frame::Frame;
pub use radial::RadialLine;
pub use segment::SeasonSegment;
pub use sweep::Sweep;
pub use tick::Tick;
