use super::coordinates::RawCoordinates;
use crate::{GeometryError, ledger::SideLedger, primitives::Rect};
use anyhow::{Result, bail};
use geo::coord;

/// Applies the members read beside `coordinates` to the geometry's ledger.
///
/// A `bbox` of 4 numbers is `[minx, miny, maxx, maxy]`, one of 6 numbers also carries a z
/// range, which is dropped. A ledger is created when the geometry has none yet.
pub(crate) fn parse_extras(ledger: Option<SideLedger>, bbox: Option<&RawCoordinates>) -> Result<Option<SideLedger>> {
	let Some(bbox) = bbox else {
		return Ok(ledger);
	};

	let rect = read_bbox(bbox)?;
	let mut ledger = ledger.unwrap_or_default();
	ledger.set_bbox(rect);
	Ok(Some(ledger))
}

fn read_bbox(raw: &RawCoordinates) -> Result<Rect> {
	let RawCoordinates::Array(items) = raw else {
		bail!(GeometryError::BBoxInvalid);
	};
	let mut numbers = Vec::with_capacity(items.len());
	for item in items {
		match item {
			RawCoordinates::Number(value) if value.is_finite() => numbers.push(*value),
			_ => bail!(GeometryError::BBoxInvalid),
		}
	}
	let (min, max) = match numbers.as_slice() {
		[x0, y0, x1, y1] => (coord! { x: *x0, y: *y0 }, coord! { x: *x1, y: *y1 }),
		[x0, y0, _, x1, y1, _] => (coord! { x: *x0, y: *y0 }, coord! { x: *x1, y: *y1 }),
		_ => bail!(GeometryError::BBoxInvalid),
	};
	Ok(Rect::new(min, max))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ledger::Dimensions;
	use geoshape_core::byte_iterator::ByteIterator;
	use rstest::rstest;

	fn raw(text: &str) -> RawCoordinates {
		RawCoordinates::parse(&mut ByteIterator::from_text(text)).unwrap()
	}

	#[test]
	fn test_without_bbox() {
		assert_eq!(parse_extras(None, None).unwrap(), None);
		let ledger = SideLedger::new(Dimensions::XYZ, vec![1.0]);
		assert_eq!(parse_extras(Some(ledger.clone()), None).unwrap(), Some(ledger));
	}

	#[rstest]
	#[case("[0,1,2,3]")]
	#[case("[0,1,-5,2,3,5]")]
	fn test_bbox(#[case] text: &str) {
		let ledger = parse_extras(None, Some(&raw(text))).unwrap().unwrap();
		assert_eq!(ledger.dims(), Dimensions::XY);
		assert_eq!(ledger.bbox(), Some(Rect::new(coord! { x: 0.0, y: 1.0 }, coord! { x: 2.0, y: 3.0 })));
	}

	#[test]
	fn test_bbox_keeps_extra_values() {
		let ledger = SideLedger::new(Dimensions::XYZ, vec![9.0]);
		let ledger = parse_extras(Some(ledger), Some(&raw("[0,0,1,1]"))).unwrap().unwrap();
		assert_eq!(ledger.values(), &[9.0]);
		assert!(ledger.bbox().is_some());
	}

	#[rstest]
	#[case("[0,1,2]")]
	#[case("[0,1,2,3,4]")]
	#[case("[0,1,2,\"3\"]")]
	#[case("\"0,1,2,3\"")]
	#[case("[[0,1],[2,3]]")]
	fn test_bbox_invalid(#[case] text: &str) {
		let error = parse_extras(None, Some(&raw(text))).unwrap_err();
		assert_eq!(error.downcast_ref::<GeometryError>(), Some(&GeometryError::BBoxInvalid));
	}
}
