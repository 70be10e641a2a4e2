//! Text encodings tried by the delimited-text fallback.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{mem, UTF_8};

use crate::error::{DataError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A candidate text encoding for delimited input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Strict UTF-8; a leading byte-order mark is dropped
    Utf8,
    /// ISO-8859-1 under its short name: byte value == code point
    Latin1,
    /// Byte value == code point
    Iso8859_1,
}

impl TextEncoding {
    /// Conventional label, as shown in console output
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Iso8859_1 => "ISO-8859-1",
        }
    }

    /// Decode `bytes`, failing if they are not valid in this encoding
    pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>> {
        match self {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .ok_or(DataError::Decode(self.label()))
            }
            TextEncoding::Latin1 | TextEncoding::Iso8859_1 => Ok(mem::decode_latin1(bytes)),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
