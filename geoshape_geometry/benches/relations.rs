use criterion::{Criterion, criterion_group, criterion_main};
use geoshape_geometry::{GeoObject, Geometry, ParseOptions, PointObject};
use std::{f64::consts::TAU, fmt::Write, hint::black_box};

const VERTICES: usize = 10_000;

/// A star-shaped ring with many vertices, closed.
fn star_polygon_json() -> String {
	let mut json = String::from(r#"{"type":"Polygon","coordinates":[["#);
	for i in 0..=VERTICES {
		let angle = TAU * (i % VERTICES) as f64 / VERTICES as f64;
		let radius = if i % 2 == 0 { 100.0 } else { 60.0 };
		if i > 0 {
			json.push(',');
		}
		write!(json, "[{},{}]", radius * angle.cos(), radius * angle.sin()).unwrap();
	}
	json.push_str("]]}");
	json
}

fn probe_points() -> Vec<PointObject> {
	(0..256)
		.map(|i| {
			let i = f64::from(i);
			PointObject::new((i * 7.3) % 200.0 - 100.0, (i * 3.1) % 200.0 - 100.0)
		})
		.collect()
}

fn bench_contains_point(c: &mut Criterion) {
	let json = star_polygon_json();
	let points = probe_points();

	for index in [false, true] {
		let polygon = Geometry::parse(&json, &ParseOptions::new().with_index(index)).unwrap();
		let name = if index { "indexed" } else { "plain" };
		c.bench_function(&format!("Polygon contains point ({name})"), |b| {
			b.iter(|| points.iter().filter(|point| polygon.contains(black_box(*point))).count());
		});
	}
}

fn bench_parse(c: &mut Criterion) {
	let json = star_polygon_json();
	c.bench_function("parse polygon", |b| {
		b.iter(|| Geometry::parse(black_box(&json), &ParseOptions::default()).unwrap());
	});
}

criterion_group!(benches, bench_contains_point, bench_parse);
criterion_main!(benches);
