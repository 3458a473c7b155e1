//! Stroke renderers.
//!
//! The fill algorithms compute *where* each hachure stroke goes; a
//! [`StrokeRenderer`] decides what pen operations that stroke becomes. The
//! seam keeps the geometry pure: tests plug in [`PlainStroke`] for exact
//! output, while [`SketchyStroke`] gives fills their hand-drawn character.

use crate::geometry::Point;
use crate::ops::Op;
use crate::options::FillOptions;
use crate::rng::Rng;

/// Turns one requested stroke into pen operations appended to `ops`.
pub trait StrokeRenderer {
    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        options: &FillOptions,
        ops: &mut Vec<Op>,
    );
}

impl<R: StrokeRenderer + ?Sized> StrokeRenderer for &mut R {
    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        options: &FillOptions,
        ops: &mut Vec<Op>,
    ) {
        (**self).draw_line(x1, y1, x2, y2, options, ops);
    }
}

/// Exact single-stroke renderer: one `Move` and one `Line` per request.
pub struct PlainStroke;

impl StrokeRenderer for PlainStroke {
    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        _options: &FillOptions,
        ops: &mut Vec<Op>,
    ) {
        ops.push(Op::Move { x: x1, y: y1 });
        ops.push(Op::Line { x: x2, y: y2 });
    }
}

/// Hand-drawn doubled stroke.
///
/// Randomizes endpoints, bows each stroke at its midpoint, and optionally
/// draws a lighter second pass, so parallel hachure rows stop looking
/// machine-made. Longer strokes are dampened so roughness does not grow with
/// length. Deterministic for a fixed seed.
pub struct SketchyStroke {
    rng: Rng,
    pub roughness: f64,
    pub bowing: f64,
    pub double_stroke: bool,
}

impl SketchyStroke {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            roughness: 1.0,
            bowing: 1.0,
            double_stroke: true,
        }
    }

    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_bowing(mut self, bowing: f64) -> Self {
        self.bowing = bowing;
        self
    }

    pub fn with_double_stroke(mut self, double_stroke: bool) -> Self {
        self.double_stroke = double_stroke;
        self
    }

    fn stroke_once(
        &mut self,
        start: Point,
        end: Point,
        perp: (f64, f64),
        roughness: f64,
        bowing: f64,
        ops: &mut Vec<Op>,
    ) {
        let sx = start.x + roughness * self.rng.next_signed();
        let sy = start.y + roughness * self.rng.next_signed();
        let ex = end.x + roughness * self.rng.next_signed();
        let ey = end.y + roughness * self.rng.next_signed();
        let bow = bowing * self.rng.next_signed();

        let mid_x = (sx + ex) / 2.0 + perp.0 * bow;
        let mid_y = (sy + ey) / 2.0 + perp.1 * bow;

        ops.push(Op::Move { x: sx, y: sy });
        ops.push(Op::Line { x: mid_x, y: mid_y });
        ops.push(Op::Line { x: ex, y: ey });
    }
}

impl StrokeRenderer for SketchyStroke {
    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        _options: &FillOptions,
        ops: &mut Vec<Op>,
    ) {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let length = (dx * dx + dy * dy).sqrt();
        if length < 0.001 {
            return;
        }

        // Longer strokes get proportionally less wobble per unit.
        let dampen = 1.0 / (length / 50.0 + 1.0);
        let roughness = self.roughness * dampen;
        let bowing = self.bowing * dampen;
        let perp = (-dy / length, dx / length);

        let start = Point::new(x1, y1);
        let end = Point::new(x2, y2);

        self.stroke_once(start, end, perp, roughness, bowing, ops);
        if self.double_stroke {
            self.stroke_once(start, end, perp, roughness * 0.5, bowing * 0.7, ops);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_stroke_is_two_ops() {
        let mut ops = Vec::new();
        PlainStroke.draw_line(0.0, 0.0, 10.0, 0.0, &FillOptions::default(), &mut ops);
        assert_eq!(
            ops,
            vec![Op::Move { x: 0.0, y: 0.0 }, Op::Line { x: 10.0, y: 0.0 }]
        );
    }

    #[test]
    fn sketchy_doubles_the_stroke() {
        let mut ops = Vec::new();
        let mut renderer = SketchyStroke::new(42);
        renderer.draw_line(0.0, 0.0, 100.0, 0.0, &FillOptions::default(), &mut ops);
        // Two passes of Move + Line + Line.
        assert_eq!(ops.len(), 6);

        let mut single = Vec::new();
        let mut renderer = SketchyStroke::new(42).with_double_stroke(false);
        renderer.draw_line(0.0, 0.0, 100.0, 0.0, &FillOptions::default(), &mut single);
        assert_eq!(single.len(), 3);
    }

    #[test]
    fn sketchy_skips_degenerate_strokes() {
        let mut ops = Vec::new();
        let mut renderer = SketchyStroke::new(42);
        renderer.draw_line(5.0, 5.0, 5.0, 5.0, &FillOptions::default(), &mut ops);
        assert!(ops.is_empty());
    }

    #[test]
    fn sketchy_is_deterministic_per_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        SketchyStroke::new(7).draw_line(0.0, 0.0, 50.0, 50.0, &FillOptions::default(), &mut a);
        SketchyStroke::new(7).draw_line(0.0, 0.0, 50.0, 50.0, &FillOptions::default(), &mut b);
        assert_eq!(a, b);

        let mut c = Vec::new();
        SketchyStroke::new(8).draw_line(0.0, 0.0, 50.0, 50.0, &FillOptions::default(), &mut c);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_roughness_stays_on_the_line() {
        let mut ops = Vec::new();
        let mut renderer = SketchyStroke::new(1).with_roughness(0.0).with_bowing(0.0);
        renderer.draw_line(0.0, 0.0, 10.0, 0.0, &FillOptions::default(), &mut ops);
        for op in &ops {
            let (Op::Move { y, .. } | Op::Line { y, .. }) = op;
            assert!(y.abs() < 1e-12);
        }
    }
}
