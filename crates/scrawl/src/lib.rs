//! # scrawl
//!
//! Hachure fill generation for sketchy, hand-drawn vector rendering.
//!
//! Given a closed polygon or an ellipse, scrawl produces the parallel
//! strokes that fill the shape's interior at a chosen angle and spacing:
//!
//! - polygons are probed with a lazy family of sweep lines, each clipped to
//!   the interior by even-odd pairing of edge crossings;
//! - ellipses skip the intersection search entirely and walk circle chords
//!   through a closed-form affine transform.
//!
//! The geometry is pure and deterministic; all hand-drawn character comes
//! from explicit, seedable sources plugged in at the [`render::StrokeRenderer`]
//! and [`rng::Jitter`] seams.
//!
//! ```
//! use scrawl::{fill_polygon, FillOptions, PlainStroke, Point, Polygon};
//!
//! let square = Polygon::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ]);
//! let options = FillOptions::default().with_angle(0.0).with_gap(2.0);
//! let sketch = fill_polygon(&square, &options, &mut PlainStroke);
//! assert!(!sketch.is_empty());
//! ```

pub mod ellipse;
pub mod geometry;
pub mod hachure;
pub mod intersect;
pub mod ops;
pub mod options;
pub mod render;
pub mod rng;
pub mod scanline;

pub use ellipse::fill_ellipse;
pub use geometry::{Line, Point, Polygon};
pub use hachure::{fill_polygon, fill_polygon_crosshatch};
pub use intersect::{segment_intersection, Crossing};
pub use ops::{Op, OpSet, OpSetKind};
pub use options::FillOptions;
pub use render::{PlainStroke, SketchyStroke, StrokeRenderer};
pub use rng::{Jitter, NoJitter, Rng};
pub use scanline::{sweep_lines, SweepLines};
