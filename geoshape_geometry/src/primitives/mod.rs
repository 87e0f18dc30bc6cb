//! Base shapes the geometry kinds are built on.
//!
//! Points, rectangles and line strings come straight from the `geo` crate. Polygons are
//! wrapped in [`Poly`], which caches the bounds and can carry an edge index.

mod poly;

pub use geo::{Coord, LineString, Point, Rect};
pub use poly::*;
