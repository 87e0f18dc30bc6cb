use crate::{
	geojson::emit::{append_members, append_series},
	ledger::SideLedger,
	object::{GeoObject, Relation},
	primitives::{Coord, LineString, Point, Poly, Rect},
};
use geo::{BoundingRect, Contains, Intersects};
use std::fmt;

/// An open series of positions. Honors a bounding box override the same way polygons do.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStringObject {
	base: LineString,
	extra: Option<SideLedger>,
}

impl LineStringObject {
	pub fn new(coords: Vec<Coord>) -> Self {
		Self::from_parts(LineString::new(coords), None)
	}

	pub(crate) fn from_parts(base: LineString, extra: Option<SideLedger>) -> Self {
		Self { base, extra }
	}

	pub fn with_bbox(mut self, bbox: Rect) -> Self {
		self.extra.get_or_insert_with(SideLedger::default).set_bbox(bbox);
		self
	}

	pub fn base(&self) -> &LineString {
		&self.base
	}

	pub fn ledger(&self) -> Option<&SideLedger> {
		self.extra.as_ref()
	}

	pub fn bbox_override(&self) -> Option<Rect> {
		self.extra.as_ref().and_then(SideLedger::bbox)
	}
}

impl Relation for LineStringObject {
	fn within_point(&self, point: &Point) -> bool {
		match self.bbox_override() {
			Some(rect) => point.contains(&rect),
			None => point.contains(&self.base),
		}
	}
	fn within_rect(&self, rect: &Rect) -> bool {
		match self.bbox_override() {
			Some(own) => rect.contains(&own),
			None => rect.contains(&self.base),
		}
	}
	fn within_line(&self, line: &LineString) -> bool {
		match self.bbox_override() {
			Some(rect) => line.contains(&rect),
			None => line.contains(&self.base),
		}
	}
	fn within_poly(&self, poly: &Poly) -> bool {
		match self.bbox_override() {
			Some(rect) => poly.as_geo().contains(&rect),
			None => poly.as_geo().contains(&self.base),
		}
	}
	fn intersects_point(&self, point: &Point) -> bool {
		match self.bbox_override() {
			Some(rect) => rect.intersects(point),
			None => self.base.intersects(point),
		}
	}
	fn intersects_rect(&self, rect: &Rect) -> bool {
		match self.bbox_override() {
			Some(own) => own.intersects(rect),
			None => self.base.intersects(rect),
		}
	}
	fn intersects_line(&self, line: &LineString) -> bool {
		match self.bbox_override() {
			Some(rect) => rect.intersects(line),
			None => self.base.intersects(line),
		}
	}
	fn intersects_poly(&self, poly: &Poly) -> bool {
		match self.bbox_override() {
			Some(rect) => rect.intersects(poly.as_geo()),
			None => self.base.intersects(poly.as_geo()),
		}
	}
}

impl GeoObject for LineStringObject {
	fn is_empty(&self) -> bool {
		self.bbox_override().is_none() && self.base.0.is_empty()
	}

	fn rect(&self) -> Rect {
		self.bbox_override()
			.or_else(|| self.base.bounding_rect())
			.unwrap_or_else(|| Rect::new(Coord::zero(), Coord::zero()))
	}

	fn center(&self) -> Point {
		self.rect().center().into()
	}

	fn append_json(&self, dst: &mut String) {
		let ledger = self.extra.as_ref();
		dst.push_str("{\"type\":\"LineString\",\"coordinates\":");
		append_series(dst, &self.base, ledger, 0);
		append_members(dst, ledger);
		dst.push('}');
	}

	fn within(&self, other: &dyn GeoObject) -> bool {
		other.contains(self)
	}

	fn contains(&self, other: &dyn GeoObject) -> bool {
		match self.bbox_override() {
			Some(rect) => other.within_rect(&rect),
			None => other.within_line(&self.base),
		}
	}

	fn intersects(&self, other: &dyn GeoObject) -> bool {
		match self.bbox_override() {
			Some(rect) => other.intersects_rect(&rect),
			None => other.intersects_line(&self.base),
		}
	}

	fn num_points(&self) -> usize {
		self.base.0.len()
	}

	fn for_each(&self, visit: &mut dyn FnMut(&dyn GeoObject) -> bool) -> bool {
		visit(self)
	}
}

impl fmt::Display for LineStringObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_json())
	}
}
