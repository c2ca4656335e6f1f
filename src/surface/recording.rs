use crate::surface::{
    Canvas, Paint, TextMetrics, estimate_text_metrics, points_to_pixels,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetSize(f64, f64),
    Clear,
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Scale(f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    SetStroke(Paint),
    SetFill(Paint),
    SetLineWidth(f64),
    SetLineDash(Vec<f64>),
    SetFontSize(f64),
    Stroke,
    Fill,
    FillText(String, f64, f64),
}

/// Canvas that remembers every call, for asserting on draw sequences.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<Op>,
    depth: usize,
    font_sizes: Vec<f64>,
    font_pt: f64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            font_pt: 10.0,
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn rotations(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rotate(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillText(t, _, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn set_size(&mut self, width: f64, height: f64) {
        self.ops.push(Op::SetSize(width, height));
    }
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(Op::Clear);
        self.depth = 0;
        self.font_sizes.clear();
        self.font_pt = 10.0;
    }
    fn save(&mut self) {
        self.depth += 1;
        self.font_sizes.push(self.font_pt);
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if let Some(pt) = self.font_sizes.pop() {
            self.font_pt = pt;
        }
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(Op::Translate(dx, dy));
    }
    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate(angle));
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(Op::Scale(sx, sy));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(Op::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }
    fn set_stroke(&mut self, paint: Paint) {
        self.ops.push(Op::SetStroke(paint));
    }
    fn set_fill(&mut self, paint: Paint) {
        self.ops.push(Op::SetFill(paint));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::SetLineWidth(width));
    }
    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.ops.push(Op::SetLineDash(pattern.to_vec()));
    }
    fn set_font_size(&mut self, points: f64) {
        self.font_pt = points;
        self.ops.push(Op::SetFontSize(points));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn measure_text(&self, text: &str) -> TextMetrics {
        estimate_text_metrics(text, points_to_pixels(self.font_pt))
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(Op::FillText(text.to_string(), x, y));
    }
}
