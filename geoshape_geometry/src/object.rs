//! The contract shared by every geometry kind.
//!
//! Binary relations are resolved by double dispatch: a public query on one object turns
//! into a [`Relation`] hook call on the other, passing the caller's base shape. Each kind
//! therefore only has to answer questions about the handful of base shapes, and adding a
//! new kind never touches the existing ones.

use crate::primitives::{LineString, Point, Poly, Rect};
use std::fmt::{Debug, Display};

/// Answers relation questions about `self` against one base shape.
pub trait Relation {
	/// `true` if `self` lies within `point`.
	fn within_point(&self, point: &Point) -> bool;
	fn within_rect(&self, rect: &Rect) -> bool;
	fn within_line(&self, line: &LineString) -> bool;
	fn within_poly(&self, poly: &Poly) -> bool;

	/// `true` if `self` and `point` share at least one location.
	fn intersects_point(&self, point: &Point) -> bool;
	fn intersects_rect(&self, rect: &Rect) -> bool;
	fn intersects_line(&self, line: &LineString) -> bool;
	fn intersects_poly(&self, poly: &Poly) -> bool;
}

/// Capabilities of every geometry kind.
pub trait GeoObject: Relation + Debug + Display + Send + Sync {
	fn is_empty(&self) -> bool;

	/// The bounding rectangle, or the bounding box override when the geometry carries one.
	fn rect(&self) -> Rect;

	/// A representative point of the geometry.
	fn center(&self) -> Point;

	/// Appends the GeoJSON encoding of the geometry to `dst`.
	fn append_json(&self, dst: &mut String);

	fn to_json(&self) -> String {
		let mut json = String::new();
		self.append_json(&mut json);
		json
	}

	/// `true` if `self` lies within `other`, which is the same as `other.contains(self)`.
	fn within(&self, other: &dyn GeoObject) -> bool;

	fn contains(&self, other: &dyn GeoObject) -> bool;

	fn intersects(&self, other: &dyn GeoObject) -> bool;

	fn num_points(&self) -> usize;

	/// Calls `visit` for every leaf geometry and stops as soon as it returns `false`.
	///
	/// Returns `false` if the traversal was stopped early.
	fn for_each(&self, visit: &mut dyn FnMut(&dyn GeoObject) -> bool) -> bool;
}
