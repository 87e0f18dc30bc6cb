//! Writers for the GeoJSON text encoding.
//!
//! Positions take their extra values from the geometry's ledger. The caller tracks where the
//! next vertex's values start and passes the returned index on to the next call.

use crate::{
	ledger::SideLedger,
	primitives::{Coord, LineString, Rect},
};
use std::fmt::Write;

pub(crate) fn append_number(dst: &mut String, value: f64) {
	_ = write!(dst, "{value}");
}

/// Writes `[x,y]` plus the vertex's extra values and returns the index of the next vertex's values.
pub(crate) fn append_position(dst: &mut String, coord: Coord, ledger: Option<&SideLedger>, index: usize) -> usize {
	dst.push('[');
	append_number(dst, coord.x);
	dst.push(',');
	append_number(dst, coord.y);
	let mut next = index;
	if let Some(ledger) = ledger {
		for value in ledger.extra_at(index) {
			dst.push(',');
			append_number(dst, *value);
		}
		next += ledger.dims().count();
	}
	dst.push(']');
	next
}

/// Writes a list of positions and returns the index after its last vertex.
pub(crate) fn append_series(dst: &mut String, line: &LineString, ledger: Option<&SideLedger>, index: usize) -> usize {
	dst.push('[');
	let mut index = index;
	for (i, coord) in line.coords().enumerate() {
		if i > 0 {
			dst.push(',');
		}
		index = append_position(dst, *coord, ledger, index);
	}
	dst.push(']');
	index
}

/// Writes the closed five-vertex ring around `rect`.
pub(crate) fn append_rect_ring(dst: &mut String, rect: &Rect) {
	let (min, max) = (rect.min(), rect.max());
	let ring = LineString::from(vec![
		min,
		Coord { x: max.x, y: min.y },
		max,
		Coord { x: min.x, y: max.y },
		min,
	]);
	append_series(dst, &ring, None, 0);
}

/// Writes the members that follow `coordinates`.
pub(crate) fn append_members(dst: &mut String, ledger: Option<&SideLedger>) {
	if let Some(rect) = ledger.and_then(SideLedger::bbox) {
		dst.push_str(",\"bbox\":[");
		for (i, value) in [rect.min().x, rect.min().y, rect.max().x, rect.max().y].into_iter().enumerate() {
			if i > 0 {
				dst.push(',');
			}
			append_number(dst, value);
		}
		dst.push(']');
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ledger::Dimensions;
	use geo::coord;

	#[test]
	fn test_append_number() {
		let mut json = String::new();
		append_number(&mut json, 1.0);
		json.push(' ');
		append_number(&mut json, -0.25);
		json.push(' ');
		append_number(&mut json, 1e-7);
		assert_eq!(json, "1 -0.25 0.0000001");
	}

	#[test]
	fn test_append_series_with_ledger() {
		let ledger = SideLedger::new(Dimensions::XYZ, vec![7.0, 8.0]);
		let line = LineString::from(vec![(1.0, 2.0), (3.0, 4.0)]);
		let mut json = String::new();
		let next = append_series(&mut json, &line, Some(&ledger), 0);
		assert_eq!(json, "[[1,2,7],[3,4,8]]");
		assert_eq!(next, 2);
	}

	#[test]
	fn test_append_rect_ring() {
		let rect = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 1.0 });
		let mut json = String::new();
		append_rect_ring(&mut json, &rect);
		assert_eq!(json, "[[0,0],[2,0],[2,1],[0,1],[0,0]]");
	}

	#[test]
	fn test_append_members() {
		let mut ledger = SideLedger::default();
		let mut json = String::new();
		append_members(&mut json, Some(&ledger));
		assert_eq!(json, "");

		ledger.set_bbox(Rect::new(coord! { x: -1.0, y: -2.0 }, coord! { x: 3.5, y: 4.0 }));
		append_members(&mut json, Some(&ledger));
		assert_eq!(json, ",\"bbox\":[-1,-2,3.5,4]");
	}
}
