//! Ellipse hachure fill.
//!
//! Clipping sweep lines against a curved boundary would mean solving a
//! quadratic per line. Instead the fill is computed on a circle of radius
//! `rx`, where chord endpoints have a closed form, and every endpoint is
//! mapped into ellipse space through a single affine transform derived from
//! the aspect ratio and the fill angle. No intersection search is needed.

use crate::geometry::Point;
use crate::ops::OpSet;
use crate::options::FillOptions;
use crate::render::StrokeRenderer;
use crate::rng::Jitter;

/// Fill an axis-aligned ellipse (center, width, height) with hachure strokes.
///
/// The radii are perturbed by up to plus/minus 5 percent through the
/// injected jitter source to vary hand-drawn character between renders; pass
/// [`crate::rng::NoJitter`] for exact geometry.
///
/// A degenerate ellipse (either radius zero) yields an empty set: the
/// rescaled gap is not finite, so the chord walk never starts.
pub fn fill_ellipse<R: StrokeRenderer, J: Jitter>(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    options: &FillOptions,
    jitter: &mut J,
    renderer: &mut R,
) -> OpSet {
    let mut ops = Vec::new();

    let mut rx = (width / 2.0).abs();
    let mut ry = (height / 2.0).abs();
    rx += jitter.jitter(-rx * 0.05, rx * 0.05);
    ry += jitter.jitter(-ry * 0.05, ry * 0.05);

    let gap = options.effective_gap();
    let angle = options.angle.rem_euclid(180.0).to_radians();
    let tan_angle = angle.tan();

    // Angle of the line family in circle space that the affine map below
    // turns into the requested angle in ellipse space.
    let aspect_ratio = ry / rx;
    let hyp = ((aspect_ratio * tan_angle) * (aspect_ratio * tan_angle) + 1.0).sqrt();
    let sin_prime = aspect_ratio * tan_angle / hyp;
    let cos_prime = 1.0 / hyp;

    // Scale the gap so chord spacing matches the requested on-screen gap
    // once transformed.
    let local_radius = rx * ry / ((ry * cos_prime).hypot(rx * sin_prime));
    let gap_prime = gap / (local_radius / rx);

    let mut prev_exit: Option<Point> = None;
    let mut x = cx - rx + gap_prime;
    while x < cx + rx {
        let half_len = (rx * rx - (cx - x) * (cx - x)).sqrt();
        let p1 = affine(x, cy - half_len, cx, cy, sin_prime, cos_prime, aspect_ratio);
        let p2 = affine(x, cy + half_len, cx, cy, sin_prime, cos_prime, aspect_ratio);

        if options.connect_ends {
            if let Some(prev) = prev_exit {
                renderer.draw_line(prev.x, prev.y, p1.x, p1.y, options, &mut ops);
            }
        }
        renderer.draw_line(p1.x, p1.y, p2.x, p2.y, options, &mut ops);
        prev_exit = Some(p2);

        x += gap_prime;
    }

    OpSet::fill_sketch(ops)
}

/// Map a circle-space point into ellipse space.
fn affine(x: f64, y: f64, cx: f64, cy: f64, sin_prime: f64, cos_prime: f64, r: f64) -> Point {
    let a = -cx * cos_prime - cy * sin_prime + cx;
    let b = r * (cx * sin_prime - cy * cos_prime) + cy;
    Point::new(
        a + cos_prime * x + sin_prime * y,
        b - r * sin_prime * x + r * cos_prime * y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Op, OpSetKind};
    use crate::render::{PlainStroke, SketchyStroke};
    use crate::rng::{NoJitter, Rng};

    fn options(angle: f64, gap: f64) -> FillOptions {
        FillOptions::default().with_angle(angle).with_gap(gap)
    }

    #[test]
    fn circle_chords_are_closed_form() {
        // Circle r = 10 at the origin, angle 0, gap 2: the affine map is the
        // identity and chords sit at x = -8, -6, ..., 8 with half-length
        // sqrt(100 - x^2), symmetric about y = 0.
        let set = fill_ellipse(
            0.0,
            0.0,
            20.0,
            20.0,
            &options(0.0, 2.0),
            &mut NoJitter,
            &mut PlainStroke,
        );
        assert_eq!(set.kind, OpSetKind::FillSketch);
        assert_eq!(set.ops.len(), 18); // 9 chords

        for (i, pair) in set.ops.chunks(2).enumerate() {
            let x = -8.0 + 2.0 * i as f64;
            let half = (100.0 - x * x).sqrt();
            assert_eq!(pair[0], Op::Move { x, y: -half });
            assert_eq!(pair[1], Op::Line { x, y: half });
        }
    }

    #[test]
    fn chords_symmetric_about_center() {
        let set = fill_ellipse(
            5.0,
            -3.0,
            16.0,
            16.0,
            &options(0.0, 2.0),
            &mut NoJitter,
            &mut PlainStroke,
        );
        for pair in set.ops.chunks(2) {
            let (Op::Move { y: y1, .. }, Op::Line { y: y2, .. }) = (pair[0], pair[1]) else {
                panic!("unexpected op order");
            };
            assert!(((y1 + y2) / 2.0 + 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rotated_fill_spacing_matches_gap() {
        // For a circle the affine map is a pure rotation, so consecutive
        // chords must still be exactly `gap` apart.
        let gap = 3.0;
        let set = fill_ellipse(
            0.0,
            0.0,
            40.0,
            40.0,
            &options(45.0, gap),
            &mut NoJitter,
            &mut PlainStroke,
        );
        let mids: Vec<(f64, f64)> = set
            .ops
            .chunks(2)
            .map(|pair| {
                let (Op::Move { x: x1, y: y1 }, Op::Line { x: x2, y: y2 }) = (pair[0], pair[1])
                else {
                    panic!("unexpected op order");
                };
                ((x1 + x2) / 2.0, (y1 + y2) / 2.0)
            })
            .collect();
        assert!(mids.len() > 3);
        for pair in mids.windows(2) {
            let d = ((pair[1].0 - pair[0].0).powi(2) + (pair[1].1 - pair[0].1).powi(2)).sqrt();
            assert!((d - gap).abs() < 1e-9, "spacing {} != gap {}", d, gap);
        }
    }

    #[test]
    fn degenerate_ellipse_yields_no_chords() {
        let flat = fill_ellipse(
            0.0,
            0.0,
            0.0,
            20.0,
            &options(0.0, 2.0),
            &mut NoJitter,
            &mut PlainStroke,
        );
        assert!(flat.is_empty());

        let thin = fill_ellipse(
            0.0,
            0.0,
            20.0,
            0.0,
            &options(0.0, 2.0),
            &mut NoJitter,
            &mut PlainStroke,
        );
        assert!(thin.is_empty());
    }

    #[test]
    fn angle_is_periodic_mod_180() {
        let a = fill_ellipse(
            0.0,
            0.0,
            30.0,
            20.0,
            &options(25.0, 2.0),
            &mut NoJitter,
            &mut PlainStroke,
        );
        let b = fill_ellipse(
            0.0,
            0.0,
            30.0,
            20.0,
            &options(205.0, 2.0),
            &mut NoJitter,
            &mut PlainStroke,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_source_is_reproducible() {
        let opts = options(-41.0, 2.0);
        let mut run = |jitter_seed: u64| {
            fill_ellipse(
                0.0,
                0.0,
                20.0,
                12.0,
                &opts,
                &mut Rng::new(jitter_seed),
                &mut SketchyStroke::new(5),
            )
        };
        let a = run(5);
        let b = run(5);
        assert_eq!(a, b);

        let c = run(6);
        assert_ne!(a, c);
    }

    #[test]
    fn connect_ends_joins_chords() {
        let plain = fill_ellipse(
            0.0,
            0.0,
            20.0,
            20.0,
            &options(0.0, 5.0),
            &mut NoJitter,
            &mut PlainStroke,
        );
        let joined = fill_ellipse(
            0.0,
            0.0,
            20.0,
            20.0,
            &options(0.0, 5.0).with_connect_ends(true),
            &mut NoJitter,
            &mut PlainStroke,
        );
        let chords = plain.ops.len() / 2;
        assert_eq!(joined.ops.len(), plain.ops.len() + (chords - 1) * 2);
    }
}
