/// Settings that influence how parsed geometries are built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
	/// Build an edge index for every polygon, which speeds up point queries on large rings.
	pub index_geometry: bool,
}

impl ParseOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_index(mut self, index_geometry: bool) -> Self {
		self.index_geometry = index_geometry;
		self
	}
}
