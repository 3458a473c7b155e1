//! CLI command implementations.
//!
//! - `polygon` - hachure-fill a polygon ring given as `x,y` pairs
//! - `ellipse` - hachure-fill an ellipse given as center and extents
//! - `demo`    - render a fixed sample scene to SVG

pub mod common;
pub mod fill;

pub use fill::{cmd_demo, cmd_ellipse, cmd_polygon};
