//! Low-level building blocks shared by the geoshape crates.
//!
//! The only module today is [`byte_iterator`], a cursor over JSON text together with the
//! token helpers the geometry parser is built on.

pub mod byte_iterator;
