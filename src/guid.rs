//! The `Guid` value type and its text codec.
//!
//! The canonical text form is five hyphen-separated sections of hex digits
//! covering byte-widths `[4, 2, 2, 2, 6]`. Parsing and validation share one
//! decode walk so they can never diverge.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::{ParseGuidError, WrongByteLengthError};

/// Raw byte width of a guid.
pub const BYTE_LENGTH: usize = 16;

/// Bit width of a guid.
pub const BIT_LENGTH: usize = 8 * BYTE_LENGTH;

/// Number of hyphen-separated sections in the canonical text form.
pub const NUMBER_OF_SECTIONS: usize = 5;

/// Byte width of each section of the canonical text form.
pub const BYTES_PER_SECTION: [usize; NUMBER_OF_SECTIONS] = [4, 2, 2, 2, 6];

/// Canonical text width: two hex digits per byte plus the separators.
pub const TEXT_LENGTH: usize = 2 * BYTE_LENGTH + (NUMBER_OF_SECTIONS - 1);

// The section widths must cover the full byte layout exactly.
const _: () = {
    let mut sum = 0;
    let mut i = 0;
    while i < NUMBER_OF_SECTIONS {
        sum += BYTES_PER_SECTION[i];
        i += 1;
    }
    assert!(sum == BYTE_LENGTH);
};

/// Maps a byte to its hex nibble value, or -1 for anything that is not one
/// of `0-9 A-F a-f`. Full 256-entry table so lookup cost is uniform.
const HEX_TO_NIBBLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = i as i8;
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        table[(b'A' + i) as usize] = (10 + i) as i8;
        table[(b'a' + i) as usize] = (10 + i) as i8;
        i += 1;
    }
    table
};

/// Uppercase hex alphabet for formatting.
const NIBBLE_TO_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// A 128-bit identifier with a fixed five-section text form and a 16-byte
/// persisted form.
///
/// A `Guid` is opaque and immutable: it is constructed from raw bytes
/// ([`Guid::from_bytes`]), from text ([`Guid::parse`]), or from a channel
/// ([`Guid::read_from`](crate::Guid::read_from)). This crate never generates
/// guid values; uniqueness is the caller's concern.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid {
    bytes: [u8; BYTE_LENGTH],
}

impl Guid {
    /// Creates a guid from its raw binary form.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BYTE_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Returns the raw binary form.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BYTE_LENGTH] {
        &self.bytes
    }

    /// Consumes the guid and returns its raw binary form.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BYTE_LENGTH] {
        self.bytes
    }

    /// Parses the canonical text form.
    ///
    /// The input must be exactly [`TEXT_LENGTH`] characters: five sections
    /// of hex digits (case-insensitive) separated by hyphens. On failure no
    /// partial value is produced.
    pub fn parse(text: &str) -> Result<Self, ParseGuidError> {
        decode_text(text.as_bytes()).map(Self::from_bytes)
    }

    /// Returns true if `text` is a well-formed canonical guid.
    ///
    /// Accepts exactly the inputs that [`Guid::parse`] accepts; both run the
    /// same decode walk.
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        decode_text(text.as_bytes()).is_ok()
    }
}

/// The single decode walk shared by `parse` and `is_valid`.
///
/// Walks the five sections in order, requiring a literal `-` before each
/// section after the first and two hex digits per output byte (high nibble
/// first). The up-front length check makes every later index in bounds.
fn decode_text(text: &[u8]) -> Result<[u8; BYTE_LENGTH], ParseGuidError> {
    if text.len() != TEXT_LENGTH {
        return Err(ParseGuidError::WrongLength { actual: text.len() });
    }

    let mut bytes = [0u8; BYTE_LENGTH];
    let mut pos = 0;
    let mut out = 0;
    for (i, &width) in BYTES_PER_SECTION.iter().enumerate() {
        if i > 0 {
            if text[pos] != b'-' {
                return Err(ParseGuidError::MalformedText { offset: pos });
            }
            pos += 1;
        }
        for _ in 0..width {
            let hi = HEX_TO_NIBBLE[text[pos] as usize];
            if hi < 0 {
                return Err(ParseGuidError::MalformedText { offset: pos });
            }
            let lo = HEX_TO_NIBBLE[text[pos + 1] as usize];
            if lo < 0 {
                return Err(ParseGuidError::MalformedText { offset: pos + 1 });
            }
            bytes[out] = ((hi as u8) << 4) | lo as u8;
            pos += 2;
            out += 1;
        }
    }
    Ok(bytes)
}

impl fmt::Display for Guid {
    /// Writes the canonical text form: exactly [`TEXT_LENGTH`] characters,
    /// uppercase hex digits, hyphens at the section boundaries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut idx = 0;
        for (i, &width) in BYTES_PER_SECTION.iter().enumerate() {
            if i > 0 {
                f.write_char('-')?;
            }
            for _ in 0..width {
                let byte = self.bytes[idx];
                f.write_char(NIBBLE_TO_HEX[(byte >> 4) as usize] as char)?;
                f.write_char(NIBBLE_TO_HEX[(byte & 0xf) as usize] as char)?;
                idx += 1;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self)
    }
}

impl FromStr for Guid {
    type Err = ParseGuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; BYTE_LENGTH]> for Guid {
    fn from(bytes: [u8; BYTE_LENGTH]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Guid> for [u8; BYTE_LENGTH] {
    fn from(guid: Guid) -> Self {
        guid.bytes
    }
}

impl TryFrom<&[u8]> for Guid {
    type Error = WrongByteLengthError;

    /// Fallible conversion from a byte slice; the slice must be exactly
    /// [`BYTE_LENGTH`] bytes.
    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; BYTE_LENGTH] = slice
            .try_into()
            .map_err(|_| WrongByteLengthError { actual: slice.len() })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl serde::Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Guid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SAMPLE_TEXT: &str = "3E11FA47-71CA-11E1-9E33-C80AA9429562";
    const SAMPLE_BYTES: [u8; BYTE_LENGTH] = [
        0x3E, 0x11, 0xFA, 0x47, 0x71, 0xCA, 0x11, 0xE1, 0x9E, 0x33, 0xC8, 0x0A, 0xA9, 0x42,
        0x95, 0x62,
    ];

    #[test]
    fn test_parse_sample_vector() {
        let guid = Guid::parse(SAMPLE_TEXT).unwrap();
        assert_eq!(guid.as_bytes(), &SAMPLE_BYTES);
    }

    #[test]
    fn test_format_sample_vector() {
        let guid = Guid::from_bytes(SAMPLE_BYTES);
        assert_eq!(guid.to_string(), SAMPLE_TEXT);
    }

    #[test]
    fn test_format_zero() {
        let guid = Guid::from_bytes([0u8; BYTE_LENGTH]);
        assert_eq!(guid.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_format_length() {
        let guid = Guid::from_bytes([0xFF; BYTE_LENGTH]);
        assert_eq!(guid.to_string().len(), TEXT_LENGTH);
    }

    #[test]
    fn test_parse_lowercase() {
        let lower = SAMPLE_TEXT.to_lowercase();
        assert_eq!(Guid::parse(&lower).unwrap(), Guid::parse(SAMPLE_TEXT).unwrap());
    }

    #[test]
    fn test_format_is_uppercase() {
        let lower = "3e11fa47-71ca-11e1-9e33-c80aa9429562";
        let formatted = Guid::parse(lower).unwrap().to_string();
        assert_eq!(formatted, SAMPLE_TEXT);
        assert!(!formatted.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            Guid::parse("").unwrap_err(),
            ParseGuidError::WrongLength { actual: 0 }
        );
    }

    #[test]
    fn test_parse_truncated_text() {
        let truncated = &SAMPLE_TEXT[..35];
        assert!(Guid::parse(truncated).unwrap_err().is_wrong_length());
    }

    #[test]
    fn test_parse_overlong_text() {
        let overlong = format!("{SAMPLE_TEXT}0");
        assert_eq!(
            Guid::parse(&overlong).unwrap_err(),
            ParseGuidError::WrongLength { actual: 37 }
        );
    }

    #[test]
    fn test_parse_hyphen_removed() {
        let s = SAMPLE_TEXT.replacen('-', "", 1);
        assert!(Guid::parse(&s).is_err());
    }

    #[test]
    fn test_parse_hyphen_moved() {
        // Same length and character set, separator one position off.
        let s = "3E11FA4-771CA-11E1-9E33-C80AA9429562";
        assert_eq!(s.len(), TEXT_LENGTH);
        assert_eq!(
            Guid::parse(s).unwrap_err(),
            ParseGuidError::MalformedText { offset: 7 }
        );
    }

    #[test]
    fn test_parse_non_hex_letter() {
        let s = "3G11FA47-71CA-11E1-9E33-C80AA9429562";
        assert_eq!(
            Guid::parse(s).unwrap_err(),
            ParseGuidError::MalformedText { offset: 1 }
        );
    }

    #[test]
    fn test_parse_embedded_nul() {
        let s = "3E11FA47-71CA-11E1-9E33-C80AA9429\u{0}62";
        assert_eq!(s.len(), TEXT_LENGTH);
        assert!(Guid::parse(s).is_err());
    }

    #[test]
    fn test_is_valid_matches_parse() {
        let cases = [
            SAMPLE_TEXT,
            "3e11fa47-71ca-11e1-9e33-c80aa9429562",
            "00000000-0000-0000-0000-000000000000",
            "",
            "not-a-guid",
            "3E11FA47-71CA-11E1-9E33-C80AA942956",
            "3E11FA47571CA-11E1-9E33-C80AA9429562",
            "3E11FA47-71CA-11E1-9E33-C80AA942956-",
        ];
        for case in cases {
            assert_eq!(Guid::is_valid(case), Guid::parse(case).is_ok(), "{case:?}");
        }
    }

    #[test]
    fn test_try_from_slice() {
        let guid = Guid::try_from(&SAMPLE_BYTES[..]).unwrap();
        assert_eq!(guid.as_bytes(), &SAMPLE_BYTES);
    }

    #[test]
    fn test_try_from_slice_wrong_length() {
        let err = Guid::try_from(&SAMPLE_BYTES[..10]).unwrap_err();
        assert_eq!(err, WrongByteLengthError { actual: 10 });
    }

    #[test]
    fn test_ordering_follows_bytes() {
        let a = Guid::from_bytes([0u8; BYTE_LENGTH]);
        let b = Guid::from_bytes([0xFF; BYTE_LENGTH]);
        assert!(a < b);
    }

    #[test]
    fn test_debug_shows_canonical_text() {
        let guid = Guid::parse(SAMPLE_TEXT).unwrap();
        assert_eq!(format!("{guid:?}"), format!("Guid({SAMPLE_TEXT})"));
    }

    #[test]
    fn test_json_roundtrip() {
        let guid = Guid::parse(SAMPLE_TEXT).unwrap();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{SAMPLE_TEXT}\""));
        let parsed: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(guid, parsed);
    }

    #[test]
    fn test_json_rejects_malformed() {
        let result: Result<Guid, _> = serde_json::from_str("\"not-a-guid\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_text_roundtrip(bytes in any::<[u8; BYTE_LENGTH]>()) {
            let guid = Guid::from_bytes(bytes);
            let text = guid.to_string();
            prop_assert_eq!(text.len(), TEXT_LENGTH);
            prop_assert_eq!(Guid::parse(&text).unwrap(), guid);
        }

        #[test]
        fn prop_is_valid_agrees_with_parse(s in "\\PC{0,40}") {
            prop_assert_eq!(Guid::is_valid(&s), Guid::parse(&s).is_ok());
        }

        #[test]
        fn prop_case_insensitive(bytes in any::<[u8; BYTE_LENGTH]>()) {
            let text = Guid::from_bytes(bytes).to_string();
            prop_assert_eq!(
                Guid::parse(&text.to_lowercase()).unwrap(),
                Guid::parse(&text).unwrap()
            );
        }
    }
}
