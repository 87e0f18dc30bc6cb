//! Optional per-geometry data that lives beside the 2D shape.
//!
//! A geometry's base shape only knows X and Y. Elevation and measure values are kept in a
//! flat list, one group per vertex in parse order, together with an optional bounding box
//! that replaces the computed bounds in every spatial query.

use geo::Rect;

/// How many numbers each vertex carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dimensions {
	#[default]
	XY,
	XYZ,
	XYZM,
}

impl Dimensions {
	/// Number of extra values per vertex beyond X and Y.
	pub fn count(self) -> usize {
		match self {
			Dimensions::XY => 0,
			Dimensions::XYZ => 1,
			Dimensions::XYZM => 2,
		}
	}

	/// Picks the dimensions for a vertex that supplied `count` numbers.
	///
	/// Returns `None` for fewer than 2 numbers. More than 4 are treated as 4.
	pub fn from_number_count(count: usize) -> Option<Self> {
		match count {
			0 | 1 => None,
			2 => Some(Dimensions::XY),
			3 => Some(Dimensions::XYZ),
			_ => Some(Dimensions::XYZM),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SideLedger {
	dims: Dimensions,
	values: Vec<f64>,
	bbox: Option<Rect>,
}

impl SideLedger {
	/// Creates a ledger holding `values`, `dims.count()` numbers per vertex.
	pub fn new(dims: Dimensions, values: Vec<f64>) -> Self {
		Self { dims, values, bbox: None }
	}

	pub fn dims(&self) -> Dimensions {
		self.dims
	}

	pub fn values(&self) -> &[f64] {
		&self.values
	}

	/// The bounding box override, if the geometry carried one.
	pub fn bbox(&self) -> Option<Rect> {
		self.bbox
	}

	pub(crate) fn set_bbox(&mut self, bbox: Rect) {
		self.bbox = Some(bbox);
	}

	/// The extra values of the vertex whose group starts at `index`.
	///
	/// Returns an empty slice when the ledger has no extra dimensions or the index is out of range.
	pub fn extra_at(&self, index: usize) -> &[f64] {
		self.values.get(index..index + self.dims.count()).unwrap_or(&[])
	}
}
