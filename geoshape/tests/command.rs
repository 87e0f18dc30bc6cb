use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

#[cfg(windows)]
const BINARY_NAME: &str = "geoshape.exe";
#[cfg(not(windows))]
const BINARY_NAME: &str = "geoshape";

const SQUARE: &str = r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]]]}"#;

fn geoshape_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

#[test]
fn command() {
	geoshape_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("check", "[OPTIONS] <INPUT>")]
#[case("relate", "[OPTIONS] <A> <B>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	geoshape_cmd()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn check_file() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("square.geojson");
	fs::write(&path, format!("  {SQUARE}\n")).unwrap();

	geoshape_cmd()
		.args(["check", path.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("type: Polygon\npoints: 5\nbbox: [0,0,4,4]\n"))
		.stdout(str::contains(format!("json: {SQUARE}\n")));
}

#[test]
fn check_stdin() {
	geoshape_cmd()
		.args(["check", "-"])
		.write_stdin(r#"{"type":"Point","coordinates":[1,2,3]}"#)
		.assert()
		.success()
		.stdout(str::contains("type: Point\npoints: 1\n"))
		.stdout(str::contains(r#"json: {"type":"Point","coordinates":[1,2,3]}"#));
}

#[test]
fn check_reports_invalid_ring() {
	geoshape_cmd()
		.args(["check", r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[0,0]]]}"#])
		.assert()
		.failure()
		.stdout(str::is_empty())
		.stderr(str::contains("invalid coordinates"));
}

#[test]
fn check_reports_unsupported_type() {
	geoshape_cmd()
		.args(["check", r#"{"type":"MultiPoint","coordinates":[[1,2]]}"#])
		.assert()
		.failure()
		.stderr(str::contains("unsupported geometry type 'MultiPoint'"));
}

#[rstest]
#[case(&["relate"])]
#[case(&["--index", "relate"])]
fn relate_point_in_square(#[case] args: &[&str]) {
	geoshape_cmd()
		.args(args)
		.args([SQUARE, r#"{"type":"Point","coordinates":[2,2]}"#])
		.assert()
		.success()
		.stdout("contains: true\nwithin: false\nintersects: true\n");
}

#[test]
fn relate_with_bbox_override() {
	let overridden = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]],"bbox":[0,0,10,10]}"#;
	geoshape_cmd()
		.args(["relate", overridden, r#"{"type":"Point","coordinates":[5,5]}"#])
		.assert()
		.success()
		.stdout("contains: true\nwithin: false\nintersects: true\n");
}
