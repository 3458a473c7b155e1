//! Segment-segment intersection primitive.
//!
//! This is the one geometric test the polygon clipper and the sweep-line
//! generator share. It is a pure function: no stored state, no error paths.

use crate::geometry::Line;

/// A valid crossing between two finite segments.
///
/// `ua` and `ub` are the parametric positions of the crossing along the
/// first and second segment respectively, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub x: f64,
    pub y: f64,
    pub ua: f64,
    pub ub: f64,
}

/// Find the crossing of two finite segments, if one exists within both
/// segments' extents.
///
/// Solves the 2x2 system formed by the parametric line equations. Parallel
/// and collinear segments (zero denominator) report no crossing; that is a
/// normal outcome, not a failure.
#[inline]
pub fn segment_intersection(a: Line, b: Line) -> Option<Crossing> {
    let denom = (b.y2 - b.y1) * (a.x2 - a.x1) - (b.x2 - b.x1) * (a.y2 - a.y1);
    if denom == 0.0 {
        return None;
    }

    let ua = ((b.x2 - b.x1) * (a.y1 - b.y1) - (b.y2 - b.y1) * (a.x1 - b.x1)) / denom;
    let ub = ((a.x2 - a.x1) * (a.y1 - b.y1) - (a.y2 - a.y1) * (a.x1 - b.x1)) / denom;

    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(Crossing {
            x: a.x1 + ua * (a.x2 - a.x1),
            y: a.y1 + ua * (a.y2 - a.y1),
            ua,
            ub,
        })
    } else {
        None
    }
}
