use std::fmt;

/// Reasons a GeoJSON geometry can be rejected by the parser.
///
/// The parser raises these through `anyhow`, so callers recover the kind with
/// `error.downcast_ref::<GeometryError>()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
	/// The object has no `coordinates` member.
	CoordinatesMissing,
	/// The `coordinates` member has the wrong shape or too few numbers.
	CoordinatesInvalid,
	/// The `bbox` member is not an array of 4 or 6 numbers.
	BBoxInvalid,
	/// The object has no `type` member.
	TypeMissing,
	/// The `type` member names a geometry this model does not build.
	UnsupportedType(String),
}

impl fmt::Display for GeometryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeometryError::CoordinatesMissing => f.write_str("missing coordinates"),
			GeometryError::CoordinatesInvalid => f.write_str("invalid coordinates"),
			GeometryError::BBoxInvalid => f.write_str("invalid bbox"),
			GeometryError::TypeMissing => f.write_str("missing type"),
			GeometryError::UnsupportedType(name) => write!(f, "unsupported geometry type '{name}'"),
		}
	}
}

impl std::error::Error for GeometryError {}
