use crate::{
	geojson::emit::{append_members, append_position},
	ledger::{Dimensions, SideLedger},
	object::{GeoObject, Relation},
	primitives::{LineString, Point, Poly, Rect},
};
use geo::{Contains, Intersects};
use std::fmt;

/// A single position, optionally with elevation and measure.
#[derive(Clone, Debug, PartialEq)]
pub struct PointObject {
	base: Point,
	extra: Option<SideLedger>,
}

impl PointObject {
	pub fn new(x: f64, y: f64) -> Self {
		Self::from_parts(Point::new(x, y), None)
	}

	pub fn new_z(x: f64, y: f64, z: f64) -> Self {
		Self::from_parts(Point::new(x, y), Some(SideLedger::new(Dimensions::XYZ, vec![z])))
	}

	pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
		Self::from_parts(Point::new(x, y), Some(SideLedger::new(Dimensions::XYZM, vec![z, m])))
	}

	pub(crate) fn from_parts(base: Point, extra: Option<SideLedger>) -> Self {
		Self { base, extra }
	}

	pub fn base(&self) -> &Point {
		&self.base
	}

	pub fn x(&self) -> f64 {
		self.base.x()
	}

	pub fn y(&self) -> f64 {
		self.base.y()
	}

	/// Elevation, or 0 if the point has none.
	pub fn z(&self) -> f64 {
		self.extra_value(0)
	}

	/// Measure, or 0 if the point has none.
	pub fn m(&self) -> f64 {
		self.extra_value(1)
	}

	pub fn ledger(&self) -> Option<&SideLedger> {
		self.extra.as_ref()
	}

	fn extra_value(&self, i: usize) -> f64 {
		self.extra
			.as_ref()
			.and_then(|ledger| ledger.extra_at(0).get(i).copied())
			.unwrap_or(0.0)
	}
}

impl Relation for PointObject {
	fn within_point(&self, point: &Point) -> bool {
		point.contains(&self.base)
	}
	fn within_rect(&self, rect: &Rect) -> bool {
		rect.contains(&self.base)
	}
	fn within_line(&self, line: &LineString) -> bool {
		line.contains(&self.base)
	}
	fn within_poly(&self, poly: &Poly) -> bool {
		poly.contains_point(&self.base)
	}
	fn intersects_point(&self, point: &Point) -> bool {
		self.base.intersects(point)
	}
	fn intersects_rect(&self, rect: &Rect) -> bool {
		self.base.intersects(rect)
	}
	fn intersects_line(&self, line: &LineString) -> bool {
		self.base.intersects(line)
	}
	fn intersects_poly(&self, poly: &Poly) -> bool {
		poly.intersects_point(&self.base)
	}
}

impl GeoObject for PointObject {
	fn is_empty(&self) -> bool {
		false
	}

	fn rect(&self) -> Rect {
		Rect::new(self.base.0, self.base.0)
	}

	fn center(&self) -> Point {
		self.base
	}

	fn append_json(&self, dst: &mut String) {
		dst.push_str("{\"type\":\"Point\",\"coordinates\":");
		append_position(dst, self.base.0, self.extra.as_ref(), 0);
		append_members(dst, self.extra.as_ref());
		dst.push('}');
	}

	fn within(&self, other: &dyn GeoObject) -> bool {
		other.contains(self)
	}

	fn contains(&self, other: &dyn GeoObject) -> bool {
		other.within_point(&self.base)
	}

	fn intersects(&self, other: &dyn GeoObject) -> bool {
		other.intersects_point(&self.base)
	}

	fn num_points(&self) -> usize {
		1
	}

	fn for_each(&self, visit: &mut dyn FnMut(&dyn GeoObject) -> bool) -> bool {
		visit(self)
	}
}

impl fmt::Display for PointObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_json())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accessors() {
		let point = PointObject::new_zm(1.0, 2.0, 3.0, 4.0);
		assert_eq!((point.x(), point.y(), point.z(), point.m()), (1.0, 2.0, 3.0, 4.0));

		let point = PointObject::new_z(1.0, 2.0, 3.0);
		assert_eq!((point.z(), point.m()), (3.0, 0.0));

		let point = PointObject::new(1.0, 2.0);
		assert_eq!((point.z(), point.m()), (0.0, 0.0));
		assert!(point.ledger().is_none());
	}

	#[test]
	fn test_shape() {
		let point = PointObject::new(1.5, -2.0);
		assert!(!point.is_empty());
		assert_eq!(point.num_points(), 1);
		assert_eq!(point.center(), Point::new(1.5, -2.0));
		assert_eq!(point.rect().min(), point.rect().max());
	}

	#[test]
	fn test_json() {
		assert_eq!(PointObject::new(1.0, 2.5).to_json(), r#"{"type":"Point","coordinates":[1,2.5]}"#);
		assert_eq!(
			PointObject::new_zm(1.0, 2.0, 3.0, 4.0).to_string(),
			r#"{"type":"Point","coordinates":[1,2,3,4]}"#
		);
	}

	#[test]
	fn test_relations() {
		let a = PointObject::new(1.0, 1.0);
		let b = PointObject::new(1.0, 1.0);
		let c = PointObject::new(2.0, 1.0);
		assert!(a.contains(&b));
		assert!(a.within(&b));
		assert!(a.intersects(&b));
		assert!(!a.contains(&c));
		assert!(!a.intersects(&c));
	}

	#[test]
	fn test_for_each() {
		let point = PointObject::new(1.0, 1.0);
		let mut count = 0;
		assert!(point.for_each(&mut |_| {
			count += 1;
			true
		}));
		assert_eq!(count, 1);
		assert!(!point.for_each(&mut |_| false));
	}
}
