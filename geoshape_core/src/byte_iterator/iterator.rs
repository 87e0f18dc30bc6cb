//! A byte-level cursor over in-memory text.
//!
//! `ByteIterator` walks a borrowed byte slice one byte at a time. It supports peeking at the
//! next byte without consuming it, advancing, consuming, and formatting errors that quote the
//! text right before the failing position.

use anyhow::{Error, Result, anyhow};

const ERROR_SNIPPET_SIZE: usize = 16;

/// A cursor over a borrowed byte slice with support for peeking, consuming and error reporting.
///
/// The iterator never copies its input. Positions are byte offsets into the original slice,
/// so callers can cut out the text of a token with [`ByteIterator::slice`].
#[derive(Clone)]
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` over a byte slice.
	pub fn from_bytes(bytes: &'a [u8]) -> Self {
		ByteIterator { bytes, position: 0 }
	}

	/// Creates a new `ByteIterator` over the UTF-8 bytes of `text`.
	pub fn from_text(text: &'a str) -> Self {
		Self::from_bytes(text.as_bytes())
	}

	/// Formats an error message including the current byte position and the text leading up to it.
	///
	/// The snippet shows at most the last 16 bytes before the position plus the byte at the position.
	/// At the end of input `<EOF>` is appended.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let start = self.position.saturating_sub(ERROR_SNIPPET_SIZE);
		let end = (self.position + 1).min(self.bytes.len());
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.is_at_end() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snippet}", self.position)
	}

	/// Returns the current byte offset.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns `true` if every byte has been consumed.
	#[inline]
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Moves past the current byte. Does nothing at the end of input.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the current byte, or `None` at the end of input.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Consumes and returns the current byte.
	///
	/// # Errors
	///
	/// Returns an error if the end of input is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		match self.consume() {
			Some(byte) => Ok(byte),
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Returns the current byte without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the end of input is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips over ASCII whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Skips trailing whitespace and fails if anything else is left.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		if self.is_at_end() {
			Ok(())
		} else {
			Err(self.format_error("unexpected trailing content"))
		}
	}

	/// Returns the bytes between `start` and the current position.
	///
	/// `start` is clamped to the current position.
	#[must_use]
	pub fn slice(&self, start: usize) -> &'a [u8] {
		&self.bytes[start.min(self.position)..self.position]
	}
}
