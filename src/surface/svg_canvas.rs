use std::f64::consts::FRAC_PI_2;
use std::path::Path as FsPath;

use svg::node::element::path::Data;
use svg::node::element::{Definitions, Group, LinearGradient as SvgGradient, Path, Stop, Text};
use svg::{Document, Node};

use crate::geometry::{Affine, polar};
use crate::surface::{
    Canvas, LinearGradient, Paint, TextMetrics, estimate_text_metrics, points_to_pixels,
};
use crate::types::{Color, Point};

const DEFAULT_FONT_PT: f64 = 10.0;

#[derive(Debug, Clone)]
struct DrawState {
    transform: Affine,
    stroke: Paint,
    fill: Paint,
    line_width: f64,
    dash: Vec<f64>,
    font_pt: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::identity(),
            stroke: Paint::Solid(Color::BLACK),
            fill: Paint::Solid(Color::BLACK),
            line_width: 1.0,
            dash: Vec::new(),
            font_pt: DEFAULT_FONT_PT,
        }
    }
}

/// Canvas that accumulates SVG nodes.
///
/// Geometry is transformed on the way in, so every emitted path is in
/// document coordinates. Text keeps its local coordinates and carries the
/// transform as a `matrix(...)` attribute so labels rotate with the dial.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    state: DrawState,
    stack: Vec<DrawState>,
    path: Data,
    current: Option<Point>,
    body: Group,
    defs: Definitions,
    gradients: usize,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            state: DrawState::default(),
            stack: Vec::new(),
            path: Data::new(),
            current: None,
            body: Group::new().set("class", "dial"),
            defs: Definitions::new(),
            gradients: 0,
        }
    }

    pub fn to_document(&self) -> Document {
        Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", (0.0, 0.0, self.width, self.height))
            .add(self.defs.clone())
            .add(self.body.clone())
    }

    #[cfg(test)]
    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }

    pub fn save_to(&self, path: impl AsRef<FsPath>) -> std::io::Result<()> {
        svg::save(path, &self.to_document())
    }

    fn device(&self, x: f64, y: f64) -> Point {
        self.state.transform.apply(Point { x, y })
    }

    fn push_path_command(&mut self, f: impl FnOnce(Data) -> Data) {
        let data = std::mem::take(&mut self.path);
        self.path = f(data);
    }

    /// Turn a paint into an attribute value plus opacity, registering gradients as needed.
    fn paint_attr(&mut self, paint: &Paint) -> (String, f64) {
        match paint {
            Paint::Solid(color) => (color.to_hex(), color.alpha),
            Paint::Linear(gradient) => {
                let id = self.register_gradient(gradient);
                (format!("url(#{id})"), 1.0)
            }
        }
    }

    fn register_gradient(&mut self, gradient: &LinearGradient) -> String {
        self.gradients += 1;
        let id = format!("gradient-{}", self.gradients);

        // Gradient geometry lives in the frame that is current when it is used.
        let from = self.device(gradient.from.0, gradient.from.1);
        let to = self.device(gradient.to.0, gradient.to.1);
        let mut node = SvgGradient::new()
            .set("id", id.as_str())
            .set("gradientUnits", "userSpaceOnUse")
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to.x)
            .set("y2", to.y);
        for (offset, color) in &gradient.stops {
            node = node.add(
                Stop::new()
                    .set("offset", *offset)
                    .set("stop-color", color.to_hex())
                    .set("stop-opacity", color.alpha),
            );
        }
        self.defs.append(node);
        id
    }
}

impl Canvas for SvgCanvas {
    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.state = DrawState::default();
        self.stack.clear();
        self.path = Data::new();
        self.current = None;
        self.body = Group::new().set("class", "dial");
        self.defs = Definitions::new();
        self.gradients = 0;
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f64) {
        self.state.transform = self.state.transform.rotate(angle);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform.scale(sx, sy);
    }

    fn begin_path(&mut self) {
        self.path = Data::new();
        self.current = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.device(x, y);
        self.push_path_command(|d| d.move_to((p.x, p.y)));
        self.current = Some(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.device(x, y);
        if self.current.is_some() {
            self.push_path_command(|d| d.line_to((p.x, p.y)));
        } else {
            self.push_path_command(|d| d.move_to((p.x, p.y)));
        }
        self.current = Some(p);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        let center = Point { x: cx, y: cy };
        let first = polar(center, start, radius);
        self.line_to(first.x, first.y);

        let sweep = end - start;
        if sweep == 0.0 || radius <= 0.0 {
            return;
        }

        // SVG's sweep flag is screen-relative, so a mirrored transform reverses it.
        let device_radius = radius * self.state.transform.scale_factor();
        let clockwise = (sweep > 0.0) == (self.state.transform.determinant() > 0.0);
        let sweep_flag = if clockwise { 1.0 } else { 0.0 };

        // Quarter-turn pieces keep every command's large-arc flag at 0.
        let pieces = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        for i in 1..=pieces {
            let t = start + sweep * (i as f64 / pieces as f64);
            let p = self.device(cx + t.cos() * radius, cy + t.sin() * radius);
            self.push_path_command(|d| {
                d.elliptical_arc_to((device_radius, device_radius, 0.0, 0.0, sweep_flag, p.x, p.y))
            });
            self.current = Some(p);
        }
    }

    fn set_stroke(&mut self, paint: Paint) {
        self.state.stroke = paint;
    }

    fn set_fill(&mut self, paint: Paint) {
        self.state.fill = paint;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.state.dash = pattern.to_vec();
    }

    fn set_font_size(&mut self, points: f64) {
        self.state.font_pt = points;
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let paint = self.state.stroke.clone();
        let (stroke, opacity) = self.paint_attr(&paint);
        let scale = self.state.transform.scale_factor();

        let mut node = Path::new()
            .set("d", self.path.clone())
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", self.state.line_width * scale);
        if opacity < 1.0 {
            node = node.set("stroke-opacity", opacity);
        }
        if !self.state.dash.is_empty() {
            let dash = self
                .state
                .dash
                .iter()
                .map(|v| format!("{}", v * scale))
                .collect::<Vec<_>>()
                .join(" ");
            node = node.set("stroke-dasharray", dash);
        }
        self.body.append(node);
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let paint = self.state.fill.clone();
        let (fill, opacity) = self.paint_attr(&paint);

        let mut node = Path::new()
            .set("d", self.path.clone())
            .set("fill", fill)
            .set("stroke", "none");
        if opacity < 1.0 {
            node = node.set("fill-opacity", opacity);
        }
        self.body.append(node);
    }

    fn measure_text(&self, text: &str) -> TextMetrics {
        estimate_text_metrics(text, points_to_pixels(self.state.font_pt))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let paint = self.state.fill.clone();
        let (fill, opacity) = self.paint_attr(&paint);

        let mut node = Text::new(text)
            .set("x", x)
            .set("y", y)
            .set("transform", self.state.transform.to_svg())
            .set("font-family", "Arial, sans-serif")
            .set("font-size", points_to_pixels(self.state.font_pt))
            .set("fill", fill);
        if opacity < 1.0 {
            node = node.set("fill-opacity", opacity);
        }
        self.body.append(node);
    }
}
