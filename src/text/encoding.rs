use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::error::HelperError;

const ASCII_REPLACEMENT: u8 = b'?';

/// Standard, padded base64 of the UTF-8 bytes of `text`.
pub fn to_base64(text: &str) -> String {
    BASE64_STANDARD.encode(text.as_bytes())
}

/// Decode base64 and interpret the bytes as UTF-8.
///
/// ASCII whitespace (including the CR/LF of line-wrapped MIME output) is
/// skipped. Invalid UTF-8 sequences are replaced with U+FFFD rather than
/// rejected.
pub fn from_base64(encoded: &str) -> Result<String, HelperError> {
    let compact: String = encoded
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();
    let bytes = BASE64_STANDARD.decode(compact)?;
    Ok(utf8_string(&bytes))
}

/// One byte per char; chars outside ASCII become `?`.
pub fn ascii_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            if ch.is_ascii() {
                ch as u8
            } else {
                ASCII_REPLACEMENT
            }
        })
        .collect()
}

/// One char per byte; bytes outside ASCII become `?`.
pub fn ascii_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| {
            if byte.is_ascii() {
                byte as char
            } else {
                ASCII_REPLACEMENT as char
            }
        })
        .collect()
}

/// Lossy UTF-8 decoding.
pub fn utf8_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
