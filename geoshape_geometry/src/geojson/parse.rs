use super::{
	coordinates::{RawCoordinates, linestring_coordinates, point_coordinates, polygon_coordinates},
	extras::parse_extras,
};
use crate::{
	Geometry, GeometryError, ParseOptions,
	primitives::Poly,
	types::{LineStringObject, PointObject, PolygonObject},
};
use anyhow::{Result, bail};
use geoshape_core::byte_iterator::{ByteIterator, parse_object_entries, parse_quoted_json_string, skip_json_value};

/// Parses one GeoJSON geometry object. Trailing content after the object is an error.
///
/// # Example
/// ```
/// # use geoshape_geometry::{GeoObject, ParseOptions, parse_geometry};
/// let geometry = parse_geometry(r#"{"type":"Point","coordinates":[1,2,3]}"#, &ParseOptions::default()).unwrap();
/// assert_eq!(geometry.num_points(), 1);
/// ```
pub fn parse_geometry(json: &str, options: &ParseOptions) -> Result<Geometry> {
	let mut iter = ByteIterator::from_text(json);
	let geometry = parse_geometry_object(&mut iter, options)?;
	iter.expect_end()?;
	Ok(geometry)
}

/// Parses a GeoJSON geometry object at the iterator's position.
///
/// Members may appear in any order. Members other than `type`, `coordinates` and `bbox` are
/// skipped.
pub fn parse_geometry_object(iter: &mut ByteIterator, options: &ParseOptions) -> Result<Geometry> {
	let mut geometry_type: Option<String> = None;
	let mut coordinates: Option<RawCoordinates> = None;
	let mut bbox: Option<RawCoordinates> = None;

	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => geometry_type = Some(parse_quoted_json_string(iter2)?),
			"coordinates" => coordinates = Some(RawCoordinates::parse(iter2)?),
			"bbox" => bbox = Some(RawCoordinates::parse(iter2)?),
			_ => skip_json_value(iter2)?,
		}
		Ok(())
	})?;

	let Some(geometry_type) = geometry_type else {
		bail!(GeometryError::TypeMissing);
	};
	if !matches!(geometry_type.as_str(), "Point" | "LineString" | "Polygon") {
		bail!(GeometryError::UnsupportedType(geometry_type));
	}
	let Some(coordinates) = coordinates else {
		bail!(GeometryError::CoordinatesMissing);
	};
	log::trace!("parsing {geometry_type} geometry");

	let geometry = match geometry_type.as_str() {
		"Point" => {
			let (point, ledger) = point_coordinates(&coordinates)?;
			let ledger = parse_extras(ledger, bbox.as_ref())?;
			Geometry::Point(PointObject::from_parts(point, ledger))
		}
		"LineString" => {
			let (line, ledger) = linestring_coordinates(&coordinates)?;
			let ledger = parse_extras(ledger, bbox.as_ref())?;
			Geometry::LineString(LineStringObject::from_parts(line, ledger))
		}
		_ => {
			let (exterior, holes, ledger) = polygon_coordinates(&coordinates)?;
			let ledger = parse_extras(ledger, bbox.as_ref())?;
			let poly = Poly::new(exterior, holes, options.index_geometry);
			Geometry::Polygon(PolygonObject::from_parts(poly, ledger))
		}
	};
	Ok(geometry)
}
