mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use geoshape_geometry::ParseOptions;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Build an edge index for polygons before querying them
	#[arg(long, global = true)]
	index: bool,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Parse a geometry and describe it
	Check(tools::check::Subcommand),

	/// Test the spatial relations between two geometries
	Relate(tools::relate::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli, &mut std::io::stdout())
}

fn run(cli: &Cli, out: &mut impl std::io::Write) -> Result<()> {
	let options = ParseOptions::new().with_index(cli.index);
	match &cli.command {
		Commands::Check(arguments) => tools::check::run(arguments, &options, out),
		Commands::Relate(arguments) => tools::relate::run(arguments, &options, out),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let mut out = Vec::new();
		run(&cli, &mut out)?;
		Ok(String::from_utf8(out)?)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geoshape"]).unwrap_err().to_string();
		assert!(err.starts_with("A GeoJSON geometry model with spatial relation queries."));
		assert!(err.contains("\nUsage: geoshape [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geoshape", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geoshape "));
	}

	#[test]
	fn check_subcommand() {
		let err = run_command(vec!["geoshape", "check"]).unwrap_err().to_string();
		assert!(err.starts_with("Parse a geometry and describe it"));
	}

	#[test]
	fn relate_subcommand() {
		let err = run_command(vec!["geoshape", "relate"]).unwrap_err().to_string();
		assert!(err.starts_with("Test the spatial relations between two geometries"));
	}
}
