use geo::{BoundingRect, Contains, Coord, Intersects, Line, LineString, Point, Polygon, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::fmt::Debug;

/// A polygon edge stored in the R-tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment(pub Line<f64>);

impl EdgeSegment {
	/// Check if a horizontal ray from `coord` going to +∞ crosses this edge.
	#[must_use]
	pub fn ray_crosses(&self, coord: Coord) -> bool {
		let Coord { x: x1, y: y1 } = self.0.start;
		let Coord { x: x2, y: y2 } = self.0.end;

		// the edge must span the ray's height, with exactly one endpoint above it
		if (y1 > coord.y) == (y2 > coord.y) {
			return false;
		}

		let x_intersect = x1 + (x2 - x1) * (coord.y - y1) / (y2 - y1);
		coord.x < x_intersect
	}
}

impl RTreeObject for EdgeSegment {
	type Envelope = AABB<[f64; 2]>;

	fn envelope(&self) -> Self::Envelope {
		let Line { start, end } = self.0;
		AABB::from_corners([start.x.min(end.x), start.y.min(end.y)], [start.x.max(end.x), start.y.max(end.y)])
	}
}

/// A polygon with cached bounds and an optional R-tree over its edges.
///
/// With the index, point queries only look at the edges near the query height instead of
/// walking every ring. Answers are the same either way.
#[derive(Clone)]
pub struct Poly {
	polygon: Polygon<f64>,
	rect: Rect,
	index: Option<RTree<EdgeSegment>>,
}

impl Poly {
	/// Builds a polygon from its exterior ring and holes, indexing the edges if `index` is set.
	pub fn new(exterior: Vec<Coord>, holes: Vec<Vec<Coord>>, index: bool) -> Self {
		let polygon = Polygon::new(LineString::new(exterior), holes.into_iter().map(LineString::new).collect());
		let rect = polygon
			.bounding_rect()
			.unwrap_or_else(|| Rect::new(Coord::zero(), Coord::zero()));

		let index = index.then(|| {
			let edges: Vec<EdgeSegment> = std::iter::once(polygon.exterior())
				.chain(polygon.interiors())
				.flat_map(LineString::lines)
				.map(EdgeSegment)
				.collect();
			log::debug!("indexing {} polygon edges", edges.len());
			RTree::bulk_load(edges)
		});

		Self { polygon, rect, index }
	}

	pub fn as_geo(&self) -> &Polygon<f64> {
		&self.polygon
	}

	pub fn exterior(&self) -> &LineString<f64> {
		self.polygon.exterior()
	}

	pub fn holes(&self) -> &[LineString<f64>] {
		self.polygon.interiors()
	}

	pub fn rect(&self) -> Rect {
		self.rect
	}

	/// `true` if the polygon covers no location: no exterior, or every vertex at one position.
	pub fn is_empty(&self) -> bool {
		self.polygon.exterior().0.is_empty() || self.rect.min() == self.rect.max()
	}

	/// Vertex count over all rings.
	pub fn num_points(&self) -> usize {
		self.exterior().0.len() + self.holes().iter().map(|ring| ring.0.len()).sum::<usize>()
	}

	pub fn is_indexed(&self) -> bool {
		self.index.is_some()
	}

	/// `true` if `point` lies in the interior. Boundary points are not contained.
	pub fn contains_point(&self, point: &Point) -> bool {
		match &self.index {
			Some(index) => {
				let coord = point.0;
				self.rect.intersects(&coord) && !on_boundary(index, coord) && self.ray_cast(index, coord)
			}
			None => self.polygon.contains(point),
		}
	}

	/// `true` if `point` lies in the interior or on the boundary.
	pub fn intersects_point(&self, point: &Point) -> bool {
		match &self.index {
			Some(index) => {
				let coord = point.0;
				self.rect.intersects(&coord) && (on_boundary(index, coord) || self.ray_cast(index, coord))
			}
			None => self.polygon.intersects(point),
		}
	}

	/// Even-odd ray casting over the edges that can be hit by a ray from `coord` to the right.
	fn ray_cast(&self, index: &RTree<EdgeSegment>, coord: Coord) -> bool {
		let envelope = AABB::from_corners([coord.x, coord.y], [self.rect.max().x, coord.y]);
		let crossings = index
			.locate_in_envelope_intersecting(&envelope)
			.filter(|edge| edge.ray_crosses(coord))
			.count();
		crossings % 2 == 1
	}
}

fn on_boundary(index: &RTree<EdgeSegment>, coord: Coord) -> bool {
	index
		.locate_in_envelope_intersecting(&AABB::from_point([coord.x, coord.y]))
		.any(|edge| edge.0.intersects(&coord))
}

impl PartialEq for Poly {
	fn eq(&self, other: &Self) -> bool {
		self.polygon == other.polygon
	}
}

impl Debug for Poly {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Poly")
			.field("exterior", &self.polygon.exterior().0)
			.field("holes", &self.polygon.interiors().len())
			.field("indexed", &self.is_indexed())
			.finish_non_exhaustive()
	}
}
