//! Cursor codec implementation

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Tag prefixed to the decimal offset before encoding
const CURSOR_TAG: &str = "next cursor:";

/// Encode a page offset into an opaque cursor token
pub fn encode_cursor(offset: usize) -> String {
    STANDARD.encode(format!("{CURSOR_TAG}{offset}"))
}

/// Decode a cursor token back into a page offset
///
/// The empty string is the start-of-sequence cursor and decodes to 0.
/// Anything else that was not produced by [`encode_cursor`] is
/// [`Error::InvalidCursor`], whatever the underlying failure was. The offset
/// is not range-checked here.
pub fn decode_cursor(cursor: &str) -> Result<usize> {
    if cursor.is_empty() {
        return Ok(0);
    }

    let bytes = STANDARD.decode(cursor).map_err(|_| Error::InvalidCursor)?;
    let text = String::from_utf8(bytes).map_err(|_| Error::InvalidCursor)?;
    let digits = text.strip_prefix(CURSOR_TAG).ok_or(Error::InvalidCursor)?;

    // usize parsing would also accept a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidCursor);
    }

    digits.parse::<usize>().map_err(|_| Error::InvalidCursor)
}
