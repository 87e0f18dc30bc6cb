pub mod check;
pub mod relate;

use anyhow::{Context, Result};
use geoshape_geometry::{Geometry, ParseOptions};
use std::io::Read;

/// Reads a geometry given as a file path, as `-` for stdin, or inline as a JSON object.
pub fn read_geometry(input: &str, options: &ParseOptions) -> Result<Geometry> {
	let json = if input.trim_start().starts_with('{') {
		input.to_string()
	} else if input == "-" {
		let mut json = String::new();
		std::io::stdin().read_to_string(&mut json).context("reading stdin")?;
		json
	} else {
		std::fs::read_to_string(input).with_context(|| format!("reading {input:?}"))?
	};
	log::debug!("parsing {} bytes from {input:?}", json.len());

	Geometry::parse(&json, options).with_context(|| format!("parsing geometry from {input:?}"))
}
