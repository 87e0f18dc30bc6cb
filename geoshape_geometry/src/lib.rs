//! A GeoJSON geometry model with spatial relation queries.
//!
//! Geometries are parsed from their GeoJSON text, can be written back, and answer
//! `contains`, `within` and `intersects` against any other geometry kind.
//!
//! # Example
//! ```
//! use geoshape_geometry::{GeoObject, Geometry, PointObject};
//!
//! let square: Geometry = r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]]]}"#
//! 	.parse()
//! 	.unwrap();
//! assert!(square.contains(&PointObject::new(1.0, 1.0)));
//! assert!(PointObject::new(1.0, 1.0).within(&square));
//! ```

mod error;
mod geometry;
pub mod geojson;
mod ledger;
mod object;
mod options;
pub mod primitives;
mod types;

pub use error::GeometryError;
pub use geojson::{parse_geometry, parse_geometry_object};
pub use geometry::Geometry;
pub use ledger::{Dimensions, SideLedger};
pub use object::{GeoObject, Relation};
pub use options::ParseOptions;
pub use types::*;
