use crate::tools::read_geometry;
use anyhow::Result;
use clap::Args;
use geoshape_geometry::{GeoObject, ParseOptions};
use std::io::Write;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON geometry: a file, `-` for stdin, or the JSON text itself
	#[arg(required = true)]
	input: String,
}

pub fn run(arguments: &Subcommand, options: &ParseOptions, out: &mut impl Write) -> Result<()> {
	let geometry = read_geometry(&arguments.input, options)?;
	let rect = geometry.rect();
	let center = geometry.center();

	writeln!(out, "type: {}", geometry.type_name())?;
	writeln!(out, "points: {}", geometry.num_points())?;
	writeln!(
		out,
		"bbox: [{},{},{},{}]",
		rect.min().x,
		rect.min().y,
		rect.max().x,
		rect.max().y
	)?;
	writeln!(out, "center: [{},{}]", center.x(), center.y())?;
	writeln!(out, "json: {geometry}")?;
	Ok(())
}
