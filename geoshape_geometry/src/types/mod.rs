mod linestring;
mod point;
mod polygon;
mod rect;

pub use linestring::*;
pub use point::*;
pub use polygon::*;
pub use rect::*;
