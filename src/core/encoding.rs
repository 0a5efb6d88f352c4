//! Encoding Detection and Conversion
//!
//! Detects UTF-16 from the byte order mark or byte patterns and converts
//! whole documents to UTF-8 text before scanning.

use std::borrow::Cow;
use std::fmt;

use crate::error::DecodeError;

/// Encoding of a byte document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// Detect encoding from byte order mark or initial bytes
    pub fn detect(input: &[u8]) -> Self {
        match input {
            // UTF-16 LE BOM: 0xFF 0xFE
            [0xFF, 0xFE, ..] => Encoding::Utf16Le,
            // UTF-16 BE BOM: 0xFE 0xFF
            [0xFE, 0xFF, ..] => Encoding::Utf16Be,
            // No BOM - check for UTF-16 pattern (< followed by null or null followed by <)
            [0x00, b'<', ..] => Encoding::Utf16Be,
            [b'<', 0x00, ..] => Encoding::Utf16Le,
            // Includes the UTF-8 BOM, which the tokenizer skips
            _ => Encoding::Utf8,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16 LE",
            Encoding::Utf16Be => "UTF-16 BE",
        })
    }
}

/// Decode a whole byte document to text
///
/// UTF-8 input is borrowed after validation, BOM included. UTF-16 input is
/// converted to an owned string with its BOM removed.
pub fn decode(input: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    match Encoding::detect(input) {
        Encoding::Utf8 => std::str::from_utf8(input)
            .map(Cow::Borrowed)
            .map_err(|e| DecodeError::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            }),
        Encoding::Utf16Le => decode_utf16(input, Encoding::Utf16Le, &[0xFF, 0xFE], u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(input, Encoding::Utf16Be, &[0xFE, 0xFF], u16::from_be_bytes),
    }
}

fn decode_utf16(
    input: &[u8],
    encoding: Encoding,
    bom: &[u8],
    unit: fn([u8; 2]) -> u16,
) -> Result<Cow<'static, str>, DecodeError> {
    let bytes = input.strip_prefix(bom).unwrap_or(input);

    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength {
            encoding,
            len: bytes.len(),
        });
    }

    let code_units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));

    char::decode_utf16(code_units)
        .collect::<Result<String, _>>()
        .map(Cow::Owned)
        .map_err(|_| DecodeError::UnpairedSurrogate { encoding })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_utf8() {
        assert_eq!(Encoding::detect(b"<root/>"), Encoding::Utf8);
        assert_eq!(Encoding::detect(b""), Encoding::Utf8);
        assert_eq!(Encoding::detect(&[0xEF, 0xBB, 0xBF, b'<']), Encoding::Utf8);
    }

    #[test]
    fn test_detect_utf16() {
        assert_eq!(Encoding::detect(&[0xFF, 0xFE, b'<', 0x00]), Encoding::Utf16Le);
        assert_eq!(Encoding::detect(&[0xFE, 0xFF, 0x00, b'<']), Encoding::Utf16Be);
        assert_eq!(Encoding::detect(&[b'<', 0x00]), Encoding::Utf16Le);
        assert_eq!(Encoding::detect(&[0x00, b'<']), Encoding::Utf16Be);
    }

    #[test]
    fn test_utf8_borrowed() {
        let decoded = decode(b"<root>hello</root>").unwrap();
        assert!(matches!(decoded, Cow::Borrowed("<root>hello</root>")));
    }

    #[test]
    fn test_utf8_bom_kept() {
        let decoded = decode(&[0xEF, 0xBB, 0xBF, b'<', b'r', b'/', b'>']).unwrap();
        assert_eq!(decoded, "\u{FEFF}<r/>");
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(
            decode(&[b'<', b'a', 0xC3, 0x28]),
            Err(DecodeError::InvalidUtf8 { valid_up_to: 2 })
        );
    }

    #[test]
    fn test_convert_utf16_le() {
        let utf16_le = [0xFF, 0xFE, b'<', 0x00, b'r', 0x00, b'/', 0x00, b'>', 0x00];
        assert_eq!(decode(&utf16_le).unwrap(), "<r/>");
    }

    #[test]
    fn test_convert_utf16_be() {
        let utf16_be = [0xFE, 0xFF, 0x00, b'<', 0x00, b'r', 0x00, b'/', 0x00, b'>'];
        assert_eq!(decode(&utf16_be).unwrap(), "<r/>");
    }

    #[test]
    fn test_utf16_odd_length() {
        let err = decode(&[0xFF, 0xFE, b'<', 0x00, b'r']).unwrap_err();
        assert_eq!(
            err,
            DecodeError::OddLength {
                encoding: Encoding::Utf16Le,
                len: 3
            }
        );
        assert_eq!(err.to_string(), "invalid UTF-16 LE: odd number of bytes (3)");
    }

    #[test]
    fn test_utf16_unpaired_surrogate() {
        let err = decode(&[0xFF, 0xFE, 0x00, 0xD8, b'<', 0x00]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnpairedSurrogate {
                encoding: Encoding::Utf16Le
            }
        );
    }
}
