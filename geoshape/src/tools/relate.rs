use crate::tools::read_geometry;
use anyhow::Result;
use clap::Args;
use geoshape_geometry::{GeoObject, ParseOptions};
use std::io::Write;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// first geometry: a file, `-` for stdin, or the JSON text itself
	#[arg(required = true)]
	a: String,

	/// second geometry, given the same way
	#[arg(required = true)]
	b: String,
}

pub fn run(arguments: &Subcommand, options: &ParseOptions, out: &mut impl Write) -> Result<()> {
	let a = read_geometry(&arguments.a, options)?;
	let b = read_geometry(&arguments.b, options)?;
	log::debug!("relating {} to {}", a.type_name(), b.type_name());

	writeln!(out, "contains: {}", a.contains(&b))?;
	writeln!(out, "within: {}", a.within(&b))?;
	writeln!(out, "intersects: {}", a.intersects(&b))?;
	Ok(())
}
