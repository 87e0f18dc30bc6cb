//! Reading and writing the GeoJSON geometry encoding.

mod coordinates;
pub(crate) mod emit;
mod extras;
mod parse;

pub use parse::*;
