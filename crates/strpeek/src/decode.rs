use alloc::string::String;

use crate::options::InvalidUtf8;

/// Decodes `bytes` as UTF-8 without ever failing.
///
/// Invalid sequences are dropped or replaced with U+FFFD depending on
/// `mode`. A preview window cut in the middle of a multi-byte character ends
/// in such an invalid sequence, so truncation is absorbed here as well.
#[must_use]
pub fn decode_lossy(bytes: &[u8], mode: InvalidUtf8) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    while !rest.is_empty() {
        // `len` covers a maximal invalid prefix at once, never zero
        let (ch, len) = bstr::decode_utf8(rest);
        match ch {
            Some(ch) => out.push(ch),
            None if mode == InvalidUtf8::Replace => out.push('\u{FFFD}'),
            None => {}
        }
        rest = &rest[len..];
    }
    out
}
