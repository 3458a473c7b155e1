//! Polygon hachure fill.
//!
//! Sweeps a family of parallel lines across a polygon's bounding box, clips
//! each line to the polygon interior by even-odd pairing of edge crossings,
//! and hands every interior segment to a stroke renderer.

use crate::geometry::{Line, Point, Polygon};
use crate::intersect::segment_intersection;
use crate::ops::OpSet;
use crate::options::FillOptions;
use crate::render::StrokeRenderer;
use crate::scanline::sweep_lines;

/// Fill a polygon with hachure strokes.
///
/// Degenerate input is not an error: an empty ring, or one the sweep never
/// crosses, simply yields an empty op set.
pub fn fill_polygon<R: StrokeRenderer>(
    polygon: &Polygon,
    options: &FillOptions,
    renderer: &mut R,
) -> OpSet {
    let mut ops = Vec::new();

    if let Some((min_x, min_y, max_x, max_y)) = polygon.bounding_box() {
        let gap = options.effective_gap();
        // Expand by one unit so edge-adjacent rows are not lost to rounding.
        let sweep = sweep_lines(
            min_y - 1.0,
            max_y + 1.0,
            min_x - 1.0,
            max_x + 1.0,
            gap,
            options.angle,
        );

        let mut prev_exit: Option<Point> = None;
        for line in sweep {
            let crossings = edge_crossings(line, &polygon.points);
            // chunks_exact silently drops a trailing unpaired crossing, which
            // is the intended behavior for tangent/degenerate sweep lines.
            let mut first_of_row = true;
            for pair in crossings.chunks_exact(2) {
                let (p1, p2) = (pair[0], pair[1]);
                if first_of_row && options.connect_ends {
                    if let Some(prev) = prev_exit {
                        renderer.draw_line(prev.x, prev.y, p1.x, p1.y, options, &mut ops);
                    }
                }
                renderer.draw_line(p1.x, p1.y, p2.x, p2.y, options, &mut ops);
                prev_exit = Some(p2);
                first_of_row = false;
            }
        }
    }

    OpSet::fill_sketch(ops)
}

/// Two hachure passes at right angles, appended into one op set.
pub fn fill_polygon_crosshatch<R: StrokeRenderer>(
    polygon: &Polygon,
    options: &FillOptions,
    renderer: &mut R,
) -> OpSet {
    let mut set = fill_polygon(polygon, options, renderer);
    let cross_options = options.clone().with_angle(options.angle + 90.0);
    let cross = fill_polygon(polygon, &cross_options, renderer);
    set.ops.extend(cross.ops);
    set
}

/// All crossings of one sweep line with the polygon's edges.
///
/// Crossings are collected in edge-visitation order, not sorted along the
/// line. For convex rings the two orders coincide; for non-convex or
/// self-intersecting rings consecutive pairs can join across exterior spans.
/// Known limitation, kept deliberately: downstream consumers depend on the
/// current pairing.
fn edge_crossings(sweep: Line, ring: &[Point]) -> Vec<Point> {
    let n = ring.len();
    let mut crossings = Vec::new();

    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let edge = Line::new(a.x, a.y, b.x, b.y);
        if let Some(hit) = segment_intersection(sweep, edge) {
            crossings.push(Point::new(hit.x, hit.y));
        }
    }

    crossings
}
