use crate::{
	GeoObject, ParseOptions, Relation,
	geojson::parse_geometry,
	primitives::{LineString, Point, Poly, Rect},
	types::{LineStringObject, PointObject, PolygonObject},
};
use anyhow::Result;
use std::{fmt, str::FromStr};

/// A geometry produced by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
	Point(PointObject),
	LineString(LineStringObject),
	Polygon(PolygonObject),
}

impl Geometry {
	/// Parses a GeoJSON geometry object.
	pub fn parse(json: &str, options: &ParseOptions) -> Result<Self> {
		parse_geometry(json, options)
	}

	/// The GeoJSON `type` of the geometry.
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
		}
	}

	pub fn as_object(&self) -> &dyn GeoObject {
		match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
		}
	}
}

impl FromStr for Geometry {
	type Err = anyhow::Error;

	fn from_str(json: &str) -> Result<Self> {
		parse_geometry(json, &ParseOptions::default())
	}
}

impl From<PointObject> for Geometry {
	fn from(point: PointObject) -> Self {
		Geometry::Point(point)
	}
}

impl From<LineStringObject> for Geometry {
	fn from(line: LineStringObject) -> Self {
		Geometry::LineString(line)
	}
}

impl From<PolygonObject> for Geometry {
	fn from(polygon: PolygonObject) -> Self {
		Geometry::Polygon(polygon)
	}
}

impl Relation for Geometry {
	fn within_point(&self, point: &Point) -> bool {
		self.as_object().within_point(point)
	}
	fn within_rect(&self, rect: &Rect) -> bool {
		self.as_object().within_rect(rect)
	}
	fn within_line(&self, line: &LineString) -> bool {
		self.as_object().within_line(line)
	}
	fn within_poly(&self, poly: &Poly) -> bool {
		self.as_object().within_poly(poly)
	}
	fn intersects_point(&self, point: &Point) -> bool {
		self.as_object().intersects_point(point)
	}
	fn intersects_rect(&self, rect: &Rect) -> bool {
		self.as_object().intersects_rect(rect)
	}
	fn intersects_line(&self, line: &LineString) -> bool {
		self.as_object().intersects_line(line)
	}
	fn intersects_poly(&self, poly: &Poly) -> bool {
		self.as_object().intersects_poly(poly)
	}
}

impl GeoObject for Geometry {
	fn is_empty(&self) -> bool {
		self.as_object().is_empty()
	}
	fn rect(&self) -> Rect {
		self.as_object().rect()
	}
	fn center(&self) -> Point {
		self.as_object().center()
	}
	fn append_json(&self, dst: &mut String) {
		self.as_object().append_json(dst);
	}
	fn within(&self, other: &dyn GeoObject) -> bool {
		self.as_object().within(other)
	}
	fn contains(&self, other: &dyn GeoObject) -> bool {
		self.as_object().contains(other)
	}
	fn intersects(&self, other: &dyn GeoObject) -> bool {
		self.as_object().intersects(other)
	}
	fn num_points(&self) -> usize {
		self.as_object().num_points()
	}
	fn for_each(&self, visit: &mut dyn FnMut(&dyn GeoObject) -> bool) -> bool {
		self.as_object().for_each(visit)
	}
}

impl fmt::Display for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self.as_object(), f)
	}
}
