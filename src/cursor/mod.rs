//! Cursor module
//!
//! Converts a page offset into an opaque continuation token and back.
//!
//! # Overview
//!
//! Tokens are self-describing: the offset travels inside the token, so no
//! server-side session is needed to resume a scan. Callers must treat tokens
//! as black boxes and only hand back values issued by [`encode_cursor`].

mod codec;

pub use codec::{decode_cursor, encode_cursor};
