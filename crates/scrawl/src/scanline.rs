//! Sweep-line generation.
//!
//! Produces the family of parallel candidate lines that the polygon filler
//! probes a shape with. Lines are generated lazily through a cursor struct so
//! very large shapes never materialize the whole family at once; a fresh
//! cursor is built per fill call and no state survives between calls.
//!
//! Angle convention: 0 degrees yields vertical lines stepping left to right,
//! 90 degrees horizontal lines stepping top to bottom. Anything in between is
//! walked in a frame rotated into the fill angle and converted back before
//! being returned, so consecutive lines are exactly `gap` apart measured
//! perpendicular to the line family.

use crate::geometry::Line;
use crate::intersect::segment_intersection;

/// Lazy iterator over the sweep lines covering a bounding box.
///
/// Construct with the box edges, the gap, and the precomputed sin/cos/tan of
/// the fill angle (already normalized into `[0, 180)` degrees by the caller).
pub struct SweepLines {
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    gap: f64,
    sin_angle: f64,
    tan_angle: f64,
    // Cursor position: x for near-vertical and slanted families, y for
    // near-horizontal ones.
    pos: f64,
    // Slanted case only: horizontal drift of a line over the box height and
    // the x step that yields a perpendicular spacing of `gap`.
    delta_x: f64,
    h_gap: f64,
    wall_left: Line,
    wall_right: Line,
}

// Below this the line family is treated as exactly vertical; above the
// complementary threshold, exactly horizontal. Keeps tan out of the
// degenerate regimes.
const SIN_VERTICAL: f64 = 1e-4;
const SIN_HORIZONTAL: f64 = 0.9999;

impl SweepLines {
    pub fn new(
        top: f64,
        bottom: f64,
        left: f64,
        right: f64,
        gap: f64,
        sin_angle: f64,
        cos_angle: f64,
        tan_angle: f64,
    ) -> Self {
        let mut it = Self {
            top,
            bottom,
            left,
            right,
            gap,
            sin_angle,
            tan_angle,
            pos: 0.0,
            delta_x: 0.0,
            h_gap: 0.0,
            wall_left: Line::new(left, bottom, left, top),
            wall_right: Line::new(right, bottom, right, top),
        };

        if sin_angle.abs() < SIN_VERTICAL {
            it.pos = left + gap;
        } else if sin_angle.abs() > SIN_HORIZONTAL {
            it.pos = top + gap;
        } else {
            it.delta_x = (bottom - top) * tan_angle.abs();
            it.pos = left - it.delta_x;
            it.h_gap = (gap / cos_angle).abs();
        }

        it
    }

    fn next_slanted(&mut self) -> Option<Line> {
        let mut x_lower = self.pos - self.delta_x / 2.0;
        let mut x_upper = self.pos + self.delta_x / 2.0;
        let mut y_lower = self.bottom;
        let mut y_upper = self.top;

        if self.pos >= self.right + self.delta_x {
            return None;
        }

        // Skip positions whose span lies entirely outside the box.
        while (x_lower < self.left && x_upper < self.left)
            || (x_lower > self.right && x_upper > self.right)
        {
            self.pos += self.h_gap;
            x_lower = self.pos - self.delta_x / 2.0;
            x_upper = self.pos + self.delta_x / 2.0;
            if self.pos >= self.right + self.delta_x {
                return None;
            }
        }

        // Trim the line back to the box walls where it overshoots.
        let probe = Line::new(x_lower, y_lower, x_upper, y_upper);
        if let Some(hit) = segment_intersection(probe, self.wall_left) {
            x_lower = hit.x;
            y_lower = hit.y;
        }
        if let Some(hit) = segment_intersection(probe, self.wall_right) {
            x_upper = hit.x;
            y_upper = hit.y;
        }

        // The walk above assumes a negative slope; mirror for positive.
        if self.tan_angle > 0.0 {
            x_lower = self.right - (x_lower - self.left);
            x_upper = self.right - (x_upper - self.left);
        }

        self.pos += self.h_gap;
        Some(Line::new(x_lower, y_lower, x_upper, y_upper))
    }
}

impl Iterator for SweepLines {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.sin_angle.abs() < SIN_VERTICAL {
            if self.pos < self.right {
                let line = Line::new(self.pos, self.top, self.pos, self.bottom);
                self.pos += self.gap;
                return Some(line);
            }
            None
        } else if self.sin_angle.abs() > SIN_HORIZONTAL {
            if self.pos < self.bottom {
                let line = Line::new(self.left, self.pos, self.right, self.pos);
                self.pos += self.gap;
                return Some(line);
            }
            None
        } else {
            self.next_slanted()
        }
    }
}

/// Build a sweep iterator for an angle given in degrees.
///
/// Normalizes the angle into `[0, 180)` first; a line family and its
/// 180-degree rotation are the same family.
pub fn sweep_lines(
    top: f64,
    bottom: f64,
    left: f64,
    right: f64,
    gap: f64,
    angle_degrees: f64,
) -> SweepLines {
    let angle = angle_degrees.rem_euclid(180.0).to_radians();
    let (sin_angle, cos_angle) = angle.sin_cos();
    SweepLines::new(top, bottom, left, right, gap, sin_angle, cos_angle, angle.tan())
}
