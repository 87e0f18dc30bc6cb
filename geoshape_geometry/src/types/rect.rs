use crate::{
	geojson::emit::append_rect_ring,
	object::{GeoObject, Relation},
	primitives::{Coord, LineString, Point, Poly, Rect},
};
use geo::{Contains, Intersects};
use std::fmt;

/// An axis-aligned rectangle. It is never produced by the parser and encodes as a Polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectObject {
	base: Rect,
}

impl RectObject {
	pub fn new(min: Coord, max: Coord) -> Self {
		Self { base: Rect::new(min, max) }
	}

	pub fn base(&self) -> &Rect {
		&self.base
	}
}

impl From<Rect> for RectObject {
	fn from(base: Rect) -> Self {
		Self { base }
	}
}

impl Relation for RectObject {
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
		poly.as_geo().contains(&self.base)
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
		self.base.intersects(poly.as_geo())
	}
}

impl GeoObject for RectObject {
	fn is_empty(&self) -> bool {
		false
	}

	fn rect(&self) -> Rect {
		self.base
	}

	fn center(&self) -> Point {
		self.base.center().into()
	}

	fn append_json(&self, dst: &mut String) {
		dst.push_str("{\"type\":\"Polygon\",\"coordinates\":[");
		append_rect_ring(dst, &self.base);
		dst.push_str("]}");
	}

	fn within(&self, other: &dyn GeoObject) -> bool {
		other.contains(self)
	}

	fn contains(&self, other: &dyn GeoObject) -> bool {
		other.within_rect(&self.base)
	}

	fn intersects(&self, other: &dyn GeoObject) -> bool {
		other.intersects_rect(&self.base)
	}

	fn num_points(&self) -> usize {
		5
	}

	fn for_each(&self, visit: &mut dyn FnMut(&dyn GeoObject) -> bool) -> bool {
		visit(self)
	}
}

impl fmt::Display for RectObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_json())
	}
}
