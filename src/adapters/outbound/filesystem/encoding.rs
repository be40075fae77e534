//! Text decoding for dependency reports.
//!
//! Reports captured on Windows shells are frequently UTF-16 or a legacy
//! code page. Candidates are tried in a fixed order and the first one that
//! decodes cleanly wins; Windows-1252 maps every byte and therefore never
//! fails.

use encoding_rs::{Encoding, UTF_16LE, UTF_8, WINDOWS_1252};

/// Decodes `bytes` with the first encoding that accepts them:
/// BOM-directed UTF-8/UTF-16, plain UTF-8, BOM-less UTF-16LE, then
/// Windows-1252.
pub fn decode(bytes: &[u8]) -> (String, &'static Encoding) {
    if let Some(decoded) = decode_with_bom(bytes) {
        return decoded;
    }
    // NUL bytes are valid UTF-8 but never appear in a text report; they
    // signal BOM-less UTF-16 instead.
    if !bytes.contains(&0) {
        if let Some(text) = strict(UTF_8, bytes) {
            return (text, UTF_8);
        }
    } else if let Some(text) = strict(UTF_16LE, bytes) {
        return (text, UTF_16LE);
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    (text.into_owned(), WINDOWS_1252)
}

fn decode_with_bom(bytes: &[u8]) -> Option<(String, &'static Encoding)> {
    let (encoding, bom_length) = Encoding::for_bom(bytes)?;
    let text = strict(encoding, &bytes[bom_length..])?;
    Some((text, encoding))
}

/// `None` on any malformed sequence, including an odd trailing UTF-16 byte.
fn strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
