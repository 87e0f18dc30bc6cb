use crate::{
	ParseOptions,
	geojson::emit::{append_members, append_series},
	ledger::SideLedger,
	object::{GeoObject, Relation},
	primitives::{Coord, LineString, Point, Poly, Rect},
};
use geo::{Contains, Intersects};
use std::fmt;

/// A polygon with an exterior ring and optional holes.
///
/// If the geometry carries a bounding box override, every spatial query is answered from that
/// rectangle instead of the rings.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonObject {
	base: Poly,
	extra: Option<SideLedger>,
}

impl PolygonObject {
	pub fn new(exterior: Vec<Coord>, holes: Vec<Vec<Coord>>, options: &ParseOptions) -> Self {
		Self::from_parts(Poly::new(exterior, holes, options.index_geometry), None)
	}

	pub(crate) fn from_parts(base: Poly, extra: Option<SideLedger>) -> Self {
		Self { base, extra }
	}

	/// Replaces the bounds used by spatial queries with `bbox`.
	pub fn with_bbox(mut self, bbox: Rect) -> Self {
		self.extra.get_or_insert_with(SideLedger::default).set_bbox(bbox);
		self
	}

	pub fn base(&self) -> &Poly {
		&self.base
	}

	pub fn ledger(&self) -> Option<&SideLedger> {
		self.extra.as_ref()
	}

	pub fn bbox_override(&self) -> Option<Rect> {
		self.extra.as_ref().and_then(SideLedger::bbox)
	}
}

impl Relation for PolygonObject {
	fn within_point(&self, point: &Point) -> bool {
		match self.bbox_override() {
			Some(rect) => point.contains(&rect),
			None => point.contains(self.base.as_geo()),
		}
	}
	fn within_rect(&self, rect: &Rect) -> bool {
		match self.bbox_override() {
			Some(own) => rect.contains(&own),
			None => rect.contains(self.base.as_geo()),
		}
	}
	fn within_line(&self, line: &LineString) -> bool {
		match self.bbox_override() {
			Some(rect) => line.contains(&rect),
			None => line.contains(self.base.as_geo()),
		}
	}
	fn within_poly(&self, poly: &Poly) -> bool {
		match self.bbox_override() {
			Some(rect) => poly.as_geo().contains(&rect),
			None => poly.as_geo().contains(self.base.as_geo()),
		}
	}
	fn intersects_point(&self, point: &Point) -> bool {
		match self.bbox_override() {
			Some(rect) => rect.intersects(point),
			None => self.base.intersects_point(point),
		}
	}
	fn intersects_rect(&self, rect: &Rect) -> bool {
		match self.bbox_override() {
			Some(own) => own.intersects(rect),
			None => self.base.as_geo().intersects(rect),
		}
	}
	fn intersects_line(&self, line: &LineString) -> bool {
		match self.bbox_override() {
			Some(rect) => rect.intersects(line),
			None => self.base.as_geo().intersects(line),
		}
	}
	fn intersects_poly(&self, poly: &Poly) -> bool {
		match self.bbox_override() {
			Some(rect) => rect.intersects(poly.as_geo()),
			None => self.base.as_geo().intersects(poly.as_geo()),
		}
	}
}

impl GeoObject for PolygonObject {
	fn is_empty(&self) -> bool {
		self.bbox_override().is_none() && self.base.is_empty()
	}

	fn rect(&self) -> Rect {
		self.bbox_override().unwrap_or_else(|| self.base.rect())
	}

	fn center(&self) -> Point {
		self.rect().center().into()
	}

	fn append_json(&self, dst: &mut String) {
		let ledger = self.extra.as_ref();
		dst.push_str("{\"type\":\"Polygon\",\"coordinates\":[");
		let mut index = append_series(dst, self.base.exterior(), ledger, 0);
		for hole in self.base.holes() {
			dst.push(',');
			index = append_series(dst, hole, ledger, index);
		}
		dst.push(']');
		append_members(dst, ledger);
		dst.push('}');
	}

	fn within(&self, other: &dyn GeoObject) -> bool {
		other.contains(self)
	}

	fn contains(&self, other: &dyn GeoObject) -> bool {
		match self.bbox_override() {
			Some(rect) => other.within_rect(&rect),
			None => other.within_poly(&self.base),
		}
	}

	fn intersects(&self, other: &dyn GeoObject) -> bool {
		match self.bbox_override() {
			Some(rect) => other.intersects_rect(&rect),
			None => other.intersects_poly(&self.base),
		}
	}

	fn num_points(&self) -> usize {
		self.base.num_points()
	}

	fn for_each(&self, visit: &mut dyn FnMut(&dyn GeoObject) -> bool) -> bool {
		visit(self)
	}
}

impl fmt::Display for PolygonObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_json())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::PointObject;
	use geo::coord;

	fn ring(points: &[[f64; 2]]) -> Vec<Coord> {
		points.iter().map(|&[x, y]| coord! { x: x, y: y }).collect()
	}

	fn square(min: f64, max: f64) -> Vec<Coord> {
		ring(&[[min, min], [max, min], [max, max], [min, max], [min, min]])
	}

	#[test]
	fn test_shape() {
		let polygon = PolygonObject::new(square(0.0, 4.0), vec![square(1.0, 2.0)], &ParseOptions::default());
		assert!(!polygon.is_empty());
		assert_eq!(polygon.num_points(), 10);
		assert_eq!(polygon.rect(), Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 4.0, y: 4.0 }));
		assert_eq!(polygon.center(), Point::new(2.0, 2.0));
		assert!(polygon.ledger().is_none());
	}

	#[test]
	fn test_json_with_hole() {
		let polygon = PolygonObject::new(square(0.0, 4.0), vec![square(1.0, 2.0)], &ParseOptions::default());
		assert_eq!(
			polygon.to_json(),
			r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]],[[1,1],[2,1],[2,2],[1,2],[1,1]]]}"#
		);
	}

	#[test]
	fn test_hole_excludes_points() {
		let polygon = PolygonObject::new(square(0.0, 4.0), vec![square(1.0, 2.0)], &ParseOptions::default());
		assert!(polygon.contains(&PointObject::new(3.0, 3.0)));
		assert!(!polygon.contains(&PointObject::new(1.5, 1.5)));
		assert!(!polygon.intersects(&PointObject::new(1.5, 1.5)));
		assert!(polygon.intersects(&PointObject::new(1.0, 1.5)));
	}

	#[test]
	fn test_bbox_override() {
		let bbox = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 100.0, y: 100.0 });
		let polygon = PolygonObject::new(square(0.0, 1.0), Vec::new(), &ParseOptions::default()).with_bbox(bbox);

		assert_eq!(polygon.rect(), bbox);
		assert_eq!(polygon.center(), Point::new(50.0, 50.0));
		assert_eq!(polygon.bbox_override(), Some(bbox));
		assert_eq!(polygon.num_points(), 5);

		// a point far outside the rings but inside the override
		let point = PointObject::new(50.0, 50.0);
		assert!(polygon.contains(&point));
		assert!(polygon.intersects(&point));
		assert!(point.within(&polygon));
		assert!(point.intersects(&polygon));
		assert!(polygon.to_json().ends_with(r#","bbox":[0,0,100,100]}"#));
	}

	#[test]
	fn test_empty_unless_overridden() {
		let polygon = PolygonObject::new(Vec::new(), Vec::new(), &ParseOptions::default());
		assert!(polygon.is_empty());

		let bbox = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 });
		assert!(!polygon.with_bbox(bbox).is_empty());
	}

	#[test]
	fn test_indexed_option() {
		let options = ParseOptions::new().with_index(true);
		let polygon = PolygonObject::new(square(0.0, 4.0), Vec::new(), &options);
		assert!(polygon.base().is_indexed());
		assert!(polygon.contains(&PointObject::new(2.0, 2.0)));
		assert!(!polygon.contains(&PointObject::new(4.0, 2.0)));
		assert!(polygon.intersects(&PointObject::new(4.0, 2.0)));
	}
}
