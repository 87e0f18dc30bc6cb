//! Byte-level iteration over JSON text and the token helpers built on top of it.
//! The `iterator` module holds the cursor, `basics` the JSON value readers.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
