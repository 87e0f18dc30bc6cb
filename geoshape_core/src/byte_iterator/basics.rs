//! JSON token helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! These functions implement the subset of JSON reading the geometry parser needs:
//! - `peek_token` to classify the next value without consuming it
//! - `parse_tag` for matching fixed ASCII tags (`true`, `false`, `null`)
//! - `parse_quoted_json_string` for string literals with escapes
//! - `parse_number_as_str` and `parse_number_as<T>` for JSON number syntax
//! - `parse_object_entries` and `parse_array_entries` to walk objects and arrays
//! - `skip_json_value` to step over a value of any kind
//!
//! Every function consumes only as much as needed and leaves the iterator positioned right
//! after the value it read.

use super::iterator::ByteIterator;
use anyhow::{Context, Result};
use std::str::FromStr;

/// The kind of the next JSON value, decided by its first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonToken {
	Array,
	Object,
	String,
	Number,
	/// `true`, `false` or `null`
	Literal,
}

/// Skips whitespace and classifies the next value without consuming it.
///
/// # Errors
/// Returns an error at the end of input or if the next byte cannot start a JSON value.
pub fn peek_token(iter: &mut ByteIterator) -> Result<JsonToken> {
	iter.skip_whitespace();
	Ok(match iter.expect_peeked_byte()? {
		b'[' => JsonToken::Array,
		b'{' => JsonToken::Object,
		b'"' => JsonToken::String,
		b'-' | b'0'..=b'9' => JsonToken::Number,
		b't' | b'f' | b'n' => JsonToken::Literal,
		c => return Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	})
}

/// Match a fixed ASCII tag at the current iterator position.
///
/// # Example
/// ```
/// # use geoshape_core::byte_iterator::{ByteIterator, parse_tag};
/// let mut it = ByteIterator::from_text("null");
/// parse_tag(&mut it, "null").unwrap();
/// ```
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if iter.expect_next_byte()? != c {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut code_unit = 0u16;
	for _ in 0..4 {
		let digit = match iter.expect_next_byte()? {
			b @ b'0'..=b'9' => b - b'0',
			b @ b'a'..=b'f' => b - b'a' + 10,
			b @ b'A'..=b'F' => b - b'A' + 10,
			_ => return Err(iter.format_error("invalid unicode escape")),
		};
		code_unit = (code_unit << 4) | u16::from(digit);
	}
	Ok(code_unit)
}

/// Parse a JSON quoted string literal and return it as `String`.
///
/// Supports the escapes `\" \\ \/ \b \f \n \r \t` and `\uXXXX`, including surrogate pairs.
/// Leaves the iterator positioned after the closing quote.
///
/// # Example
/// ```
/// # use geoshape_core::byte_iterator::{ByteIterator, parse_quoted_json_string};
/// let mut it = ByteIterator::from_text("\"he\\nllo\"");
/// assert_eq!(parse_quoted_json_string(&mut it).unwrap(), "he\nllo");
/// ```
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(16);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_hex4(iter)?];
					if (0xD800..0xDC00).contains(&units[0]) {
						parse_tag(iter, "\\u")?;
						units.push(parse_hex4(iter)?);
					}
					let decoded = String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(decoded.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).context("string is not valid UTF-8")
}

/// Parse a JSON number and return its text, borrowed from the input.
///
/// Follows the JSON grammar: an optional `-`, integer digits without leading zeros, an
/// optional fraction and an optional exponent. Leaves the iterator at the first byte after
/// the number.
///
/// # Example
/// ```
/// # use geoshape_core::byte_iterator::{ByteIterator, parse_number_as_str};
/// let mut it = ByteIterator::from_text("-12.3e+4,");
/// assert_eq!(parse_number_as_str(&mut it).unwrap(), "-12.3e+4");
/// ```
pub fn parse_number_as_str<'a>(iter: &mut ByteIterator<'a>) -> Result<&'a str> {
	fn digits(iter: &mut ByteIterator) -> bool {
		let mut has_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			has_digits = true;
			iter.advance();
		}
		has_digits
	}

	iter.skip_whitespace();
	let start = iter.position();

	if let Some(b'-') = iter.peek() {
		iter.advance();
	}
	let int_start = iter.position();
	if !digits(iter) {
		return Err(iter.format_error("expected digits in number"));
	}
	if let [b'0', _, ..] = iter.slice(int_start) {
		return Err(iter.format_error("leading zeros are not allowed in numbers"));
	}

	if let Some(b'.') = iter.peek() {
		iter.advance();
		if !digits(iter) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		iter.advance();
		if let Some(b'+' | b'-') = iter.peek() {
			iter.advance();
		}
		if !digits(iter) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	std::str::from_utf8(iter.slice(start)).context("number is not valid UTF-8")
}

/// Parse a JSON number and convert it to a concrete type `R`.
///
/// # Example
/// ```
/// # use geoshape_core::byte_iterator::{ByteIterator, parse_number_as};
/// let mut it = ByteIterator::from_text("42");
/// let n: f64 = parse_number_as(&mut it).unwrap();
/// assert_eq!(n, 42.0);
/// ```
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_str(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Iterate over JSON object entries, invoking `parse_value` for each key.
///
/// The closure receives the key and the iterator positioned at the start of the value and
/// must consume the value completely.
///
/// # Example
/// ```
/// # use geoshape_core::byte_iterator::{ByteIterator, parse_object_entries, parse_quoted_json_string};
/// let mut it = ByteIterator::from_text("{\"k\":\"v\"}");
/// let mut got = None;
/// parse_object_entries(&mut it, |k, it| { got = Some((k, parse_quoted_json_string(it)?)); Ok(()) }).unwrap();
/// assert_eq!(got, Some(("k".into(), "v".into())));
/// ```
pub fn parse_object_entries<'a>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(String, &mut ByteIterator<'a>) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if let Some(b'}') = iter.peek() {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => break,
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}

/// Iterate over JSON array entries, collecting the results from `parse_value`.
///
/// # Example
/// ```
/// # use geoshape_core::byte_iterator::{ByteIterator, parse_array_entries, parse_number_as};
/// let mut it = ByteIterator::from_text("[1,2,3]");
/// let nums: Vec<i32> = parse_array_entries(&mut it, parse_number_as).unwrap();
/// assert_eq!(nums, vec![1,2,3]);
/// ```
pub fn parse_array_entries<'a, R>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(&mut ByteIterator<'a>) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	result.push(parse_value(iter)?);

	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => {
				iter.skip_whitespace();
				result.push(parse_value(iter)?);
			}
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}

/// Consume one JSON value of any kind without keeping it.
///
/// Nested arrays and objects are tracked on a heap stack instead of recursing, so arbitrarily
/// deep input is skipped without exhausting the call stack.
pub fn skip_json_value(iter: &mut ByteIterator) -> Result<()> {
	// closing bytes of the containers that are still open
	let mut open: Vec<u8> = Vec::new();

	loop {
		match peek_token(iter)? {
			JsonToken::Array | JsonToken::Object => {
				let closer = if iter.consume() == Some(b'[') { b']' } else { b'}' };
				iter.skip_whitespace();
				if iter.peek() == Some(closer) {
					iter.advance();
				} else {
					if closer == b'}' {
						skip_object_key(iter)?;
					}
					open.push(closer);
					continue;
				}
			}
			JsonToken::String => {
				parse_quoted_json_string(iter)?;
			}
			JsonToken::Number => {
				parse_number_as_str(iter)?;
			}
			JsonToken::Literal => match iter.expect_peeked_byte()? {
				b't' => parse_tag(iter, "true")?,
				b'f' => parse_tag(iter, "false")?,
				_ => parse_tag(iter, "null")?,
			},
		}

		// a value is complete: close finished containers until the next entry starts
		loop {
			let Some(&closer) = open.last() else {
				return Ok(());
			};
			iter.skip_whitespace();
			match iter.expect_next_byte()? {
				b',' => {
					if closer == b'}' {
						skip_object_key(iter)?;
					}
					break;
				}
				c if c == closer => {
					open.pop();
				}
				_ if closer == b']' => return Err(iter.format_error("parsing array, expected ',' or ']'")),
				_ => return Err(iter.format_error("expected ',' or '}'")),
			}
		}
	}
}

fn skip_object_key(iter: &mut ByteIterator) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_peeked_byte()? != b'"' {
		return Err(iter.format_error("parsing object, expected '\"'"));
	}
	parse_quoted_json_string(iter)?;
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b':' {
		return Err(iter.format_error("expected ':'"));
	}
	Ok(())
}
