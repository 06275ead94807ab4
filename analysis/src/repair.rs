//! Text repair for exports whose strings were written byte-by-byte.
//!
//! The export stores UTF-8 bytes as individual characters and sometimes leaves `\uXXXX`
//! escapes as literal text. [`repair`] undoes both: escapes become code units, then the
//! code units are read back as bytes and decoded as UTF-8. [`mangle`] produces the defect
//! from a clean string.

use std::fmt::Write;
use std::sync::LazyLock;

use chatstat_core::TextRepairError;
use regex::Regex;

static ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("valid escape regex"));

/// Repairs one field. Pure ASCII without escapes comes back unchanged.
pub fn repair(text: &str) -> Result<String, TextRepairError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let units = unescape(text);
    let bytes = to_bytes(&units)?;
    String::from_utf8(bytes).map_err(|e| TextRepairError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Writes every non-ASCII byte of `text`'s UTF-8 encoding as a literal `\u00XX` escape.
pub fn mangle(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        if byte.is_ascii() {
            out.push(byte as char);
        } else {
            let _ = write!(out, "\\u{:04x}", byte);
        }
    }
    out
}

/// First pass: literal escapes become the code unit they name, everything else keeps its
/// code point.
fn unescape(text: &str) -> Vec<u32> {
    let mut units = Vec::with_capacity(text.len());
    let mut last = 0;
    for caps in ESCAPE_REGEX.captures_iter(text) {
        let (Some(whole), Some(hex)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        units.extend(text[last..whole.start()].chars().map(u32::from));
        // Four hex digits always fit.
        if let Ok(unit) = u32::from_str_radix(hex.as_str(), 16) {
            units.push(unit);
        }
        last = whole.end();
    }
    units.extend(text[last..].chars().map(u32::from));
    units
}

/// Second pass: each code unit must be a single byte.
fn to_bytes(units: &[u32]) -> Result<Vec<u8>, TextRepairError> {
    units
        .iter()
        .enumerate()
        .map(|(position, &unit)| {
            u8::try_from(unit).map_err(|_| TextRepairError::WideCodeUnit { unit, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Literal `\u00XX`-style escapes for the given code units.
    fn esc(units: &[u32]) -> String {
        units.iter().map(|u| format!("\\u{:04x}", u)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(repair("").unwrap(), "");
    }

    #[test]
    fn test_ascii_passes_through() {
        let s = "Hello, world! 100% sure (really) ~_~";
        assert_eq!(repair(s).unwrap(), s);
    }

    #[test]
    fn test_escaped_multibyte_sequence() {
        let input = format!("caf{}", esc(&[0xc3, 0xa9]));
        assert_eq!(repair(&input).unwrap(), "caf\u{e9}");
    }

    #[test]
    fn test_byte_characters_without_escapes() {
        // Already unescaped by the JSON layer: one char per byte.
        assert_eq!(repair("caf\u{c3}\u{a9}").unwrap(), "caf\u{e9}");
    }

    #[test]
    fn test_escaped_emoji() {
        let input = esc(&[0xf0, 0x9f, 0x98, 0x82]);
        assert_eq!(repair(&input).unwrap(), "\u{1F602}");
    }

    #[test]
    fn test_uppercase_hex_digits() {
        let input = esc(&[0xc3, 0xa9]).to_uppercase().replace("\\U", "\\u");
        assert_eq!(repair(&input).unwrap(), "\u{e9}");
    }

    #[test]
    fn test_escaped_ascii() {
        assert_eq!(repair(&esc(&[0x41, 0x42])).unwrap(), "AB");
    }

    #[test]
    fn test_short_escape_is_literal() {
        let input = format!("{}u12", '\\');
        assert_eq!(repair(&input).unwrap(), input);
    }

    #[test]
    fn test_wide_escape_is_error() {
        let input = format!("price {}", esc(&[0x20ac]));
        assert_eq!(
            repair(&input),
            Err(TextRepairError::WideCodeUnit {
                unit: 0x20ac,
                position: 6
            })
        );
    }

    #[test]
    fn test_correct_unicode_is_error() {
        // A properly encoded emoji is one wide code point, not bytes.
        assert!(matches!(
            repair("ok \u{1F44D}"),
            Err(TextRepairError::WideCodeUnit { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let input = format!("ab{}", esc(&[0xc3]));
        assert_eq!(
            repair(&input),
            Err(TextRepairError::InvalidUtf8 { valid_up_to: 2 })
        );
    }

    #[test]
    fn test_mangle_leaves_ascii() {
        assert_eq!(mangle("plain text"), "plain text");
        assert_eq!(mangle("\u{e9}"), esc(&[0xc3, 0xa9]));
    }

    #[test]
    fn test_round_trip() {
        for s in [
            "",
            "hello",
            "caf\u{e9} cr\u{e8}me",
            "Z\u{fc}rich \u{2013} M\u{fc}nchen",
            "\u{65e5}\u{672c}\u{8a9e}",
            "mixed \u{1F602} emoji \u{1F44D}\u{1F3FD} and text",
            "a literal \\n stays",
        ] {
            assert_eq!(repair(&mangle(s)).unwrap(), s, "round trip of {s:?}");
        }
    }
}
