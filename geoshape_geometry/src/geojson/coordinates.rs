//! The `coordinates` member: a raw number tree and the per-kind validators that turn it into
//! base shapes plus a side ledger.

use crate::{
	GeometryError,
	ledger::{Dimensions, SideLedger},
	primitives::{Coord, LineString, Point},
};
use anyhow::{Result, bail, ensure};
use geoshape_core::byte_iterator::{
	ByteIterator, JsonToken, parse_array_entries, parse_number_as, peek_token, skip_json_value,
};

/// Deepest array nesting a supported geometry can use, with one level of slack.
/// Arrays below it are skipped and kept as [`RawCoordinates::Other`].
const MAX_DEPTH: usize = 4;

/// Numbers read per position. Anything after them is ignored.
const MAX_POSITION_NUMBERS: usize = 4;

/// The `coordinates` member as read from the text, before it is checked against a geometry type.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum RawCoordinates {
	Number(f64),
	Array(Vec<RawCoordinates>),
	/// Any other JSON value. It is kept so the type checks can run before it is rejected.
	Other,
}

impl RawCoordinates {
	pub(crate) fn parse(iter: &mut ByteIterator) -> Result<Self> {
		Self::parse_nested(iter, 0)
	}

	fn parse_nested(iter: &mut ByteIterator, depth: usize) -> Result<Self> {
		match peek_token(iter)? {
			JsonToken::Number => Ok(RawCoordinates::Number(parse_number_as::<f64>(iter)?)),
			JsonToken::Array if depth >= MAX_DEPTH => {
				skip_json_value(iter)?;
				Ok(RawCoordinates::Other)
			}
			JsonToken::Array => {
				let items = parse_array_entries(iter, |iter2| Self::parse_nested(iter2, depth + 1))?;
				Ok(RawCoordinates::Array(items))
			}
			_ => {
				skip_json_value(iter)?;
				Ok(RawCoordinates::Other)
			}
		}
	}

	fn as_array(&self) -> Result<&[RawCoordinates]> {
		match self {
			RawCoordinates::Array(items) => Ok(items),
			_ => bail!(GeometryError::CoordinatesInvalid),
		}
	}

	fn as_number(&self) -> Result<f64> {
		match self {
			RawCoordinates::Number(value) if value.is_finite() => Ok(*value),
			_ => bail!(GeometryError::CoordinatesInvalid),
		}
	}
}

/// Reads the numbers of one position: at least 2, at most 4 are used.
fn read_position(raw: &RawCoordinates) -> Result<(Coord, Vec<f64>)> {
	let numbers = raw
		.as_array()?
		.iter()
		.take(MAX_POSITION_NUMBERS)
		.map(RawCoordinates::as_number)
		.collect::<Result<Vec<f64>>>()?;
	ensure!(numbers.len() >= 2, GeometryError::CoordinatesInvalid);
	Ok((Coord { x: numbers[0], y: numbers[1] }, numbers[2..].to_vec()))
}

pub(crate) fn point_coordinates(raw: &RawCoordinates) -> Result<(Point, Option<SideLedger>)> {
	let (coord, extra) = read_position(raw)?;
	let ledger = match Dimensions::from_number_count(2 + extra.len()) {
		Some(dims) if dims != Dimensions::XY => Some(SideLedger::new(dims, extra)),
		_ => None,
	};
	Ok((Point::from(coord), ledger))
}

/// Collects positions over one or more series, tracking the extra values of every vertex.
///
/// All vertices must supply the same number of values. The first vertex with more than two
/// numbers decides the dimensions, so any vertex that disagrees, earlier or later, is rejected.
#[derive(Default)]
struct SeriesReader {
	dims: Option<Dimensions>,
	values: Vec<f64>,
	vertices: usize,
}

impl SeriesReader {
	fn read_series(&mut self, raw: &RawCoordinates) -> Result<Vec<Coord>> {
		raw.as_array()?.iter().map(|item| self.read_vertex(item)).collect()
	}

	fn read_vertex(&mut self, raw: &RawCoordinates) -> Result<Coord> {
		let (coord, extra) = read_position(raw)?;
		let dims = Dimensions::from_number_count(2 + extra.len()).unwrap_or_default();
		match self.dims {
			Some(known) => ensure!(known == dims, GeometryError::CoordinatesInvalid),
			None => self.dims = Some(dims),
		}
		self.values.extend(extra);
		self.vertices += 1;
		Ok(coord)
	}

	fn into_ledger(self) -> Option<SideLedger> {
		match self.dims {
			Some(dims) if dims != Dimensions::XY => {
				log::trace!("read {} extra values for {} vertices", self.values.len(), self.vertices);
				Some(SideLedger::new(dims, self.values))
			}
			_ => None,
		}
	}
}

pub(crate) fn linestring_coordinates(raw: &RawCoordinates) -> Result<(LineString, Option<SideLedger>)> {
	let mut reader = SeriesReader::default();
	let coords = reader.read_series(raw)?;
	ensure!(coords.len() >= 2, GeometryError::CoordinatesInvalid);
	Ok((LineString::new(coords), reader.into_ledger()))
}

/// Validated polygon rings: the exterior, the holes and the ledger of extra values.
pub(crate) type PolygonRings = (Vec<Coord>, Vec<Vec<Coord>>, Option<SideLedger>);

pub(crate) fn polygon_coordinates(raw: &RawCoordinates) -> Result<PolygonRings> {
	let mut reader = SeriesReader::default();
	let mut rings = Vec::new();
	for item in raw.as_array()? {
		let ring = reader.read_series(item)?;
		ensure!(
			ring.len() >= 4 && ring.first() == ring.last(),
			GeometryError::CoordinatesInvalid
		);
		rings.push(ring);
	}
	ensure!(!rings.is_empty(), GeometryError::CoordinatesInvalid);

	let exterior = rings.remove(0);
	Ok((exterior, rings, reader.into_ledger()))
}
