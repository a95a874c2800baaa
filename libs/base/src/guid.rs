//! 128-bit random identifiers and their dashed-hex text form.
//!
//! The text layout is described once, by [`GROUPS`], and both the encoder and
//! the decoder walk that table. Each group names the word it lives in, how far
//! it is shifted within that word, and how many hex digits it occupies.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use crate::GuidError;

/// Length of the canonical text form.
const ENCODED_LEN: usize = 36;

const SEPARATOR: u8 = b'-';

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, Copy)]
enum Word {
    High,
    Low,
}

/// One dash-separated group of the text form.
#[derive(Debug, Clone, Copy)]
struct Group {
    word: Word,
    shift: u32,
    digits: usize,
}

impl Group {
    const fn mask(&self) -> u64 {
        (1u64 << (self.digits * 4)) - 1
    }

    fn extract(&self, guid: &Guid) -> u64 {
        let word = match self.word {
            Word::High => guid.high,
            Word::Low => guid.low,
        };
        (word >> self.shift) & self.mask()
    }
}

/// 8-4-4-4-12: top 32, middle 16 and bottom 16 bits of `high`, then top 16
/// and bottom 48 bits of `low`.
const GROUPS: [Group; 5] = [
    Group { word: Word::High, shift: 32, digits: 8 },
    Group { word: Word::High, shift: 16, digits: 4 },
    Group { word: Word::High, shift: 0, digits: 4 },
    Group { word: Word::Low, shift: 48, digits: 4 },
    Group { word: Word::Low, shift: 0, digits: 12 },
];

/// A 128-bit identifier held as two 64-bit words.
///
/// The all-zero value, [`Guid::NIL`], marks an unset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guid {
    high: u64,
    low: u64,
}

impl Guid {
    /// The zero GUID, produced when lenient decoding fails.
    pub const NIL: Self = Self { high: 0, low: 0 };

    /// Creates a GUID from 128 freshly drawn random bits.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Creates a GUID from two draws of the given entropy source.
    #[must_use]
    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let high = rng.next_u64();
        let low = rng.next_u64();
        Self { high, low }
    }

    /// Creates a GUID from its raw words.
    #[must_use]
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Generates a random GUID and returns its canonical text.
    pub fn generate() -> Result<String, GuidError> {
        Self::new().encode()
    }

    /// The most significant 64 bits.
    #[must_use]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// The least significant 64 bits.
    #[must_use]
    pub const fn low(&self) -> u64 {
        self.low
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Returns true if `s` is in canonical form.
    ///
    /// Only uppercase hex digits are accepted, and surrounding whitespace is
    /// not trimmed.
    pub fn is_valid(s: &str) -> bool {
        validate(s.as_bytes()).is_ok()
    }

    /// Parses a GUID from its canonical text form.
    pub fn parse(s: &str) -> Result<Self, GuidError> {
        validate(s.as_bytes()).map_err(|offset| describe(s, offset))?;

        let bytes = s.as_bytes();
        let mut guid = Self::NIL;
        let mut pos = 0;
        for (index, group) in GROUPS.iter().enumerate() {
            if index > 0 {
                pos += 1;
            }
            let value = bytes[pos..pos + group.digits]
                .iter()
                .fold(0u64, |acc, &b| (acc << 4) | u64::from(hex_value(b).unwrap_or(0)));
            match group.word {
                Word::High => guid.high |= value << group.shift,
                Word::Low => guid.low |= value << group.shift,
            }
            pos += group.digits;
        }

        Ok(guid)
    }

    /// Parses a GUID, yielding [`Guid::NIL`] for malformed text.
    ///
    /// Use [`Guid::is_valid`] beforehand to tell malformed input apart from a
    /// genuinely zero GUID.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match Self::parse(s) {
            Ok(guid) => guid,
            Err(err) => {
                tracing::trace!(error = %err, "malformed GUID text, using nil GUID");
                Self::NIL
            }
        }
    }

    /// Renders the canonical text form, checking the rendered length.
    pub fn encode(&self) -> Result<String, GuidError> {
        let encoded = self.to_string();
        if encoded.len() != ENCODED_LEN {
            return Err(GuidError::EncodeLength {
                actual: encoded.len(),
            });
        }
        Ok(encoded)
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, group) in GROUPS.iter().enumerate() {
            if index > 0 {
                f.write_str("-")?;
            }
            write!(f, "{:0width$X}", group.extract(self), width = group.digits)?;
        }
        Ok(())
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Guid> for (u64, u64) {
    fn from(guid: Guid) -> Self {
        (guid.high, guid.low)
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

fn hex_value(b: u8) -> Option<u8> {
    HEX_DIGITS.iter().position(|&d| d == b).map(|i| i as u8)
}

/// Checks the layout, returning the offset of the first bad byte.
///
/// An offset equal to the input length means the length itself is wrong.
fn validate(bytes: &[u8]) -> Result<(), usize> {
    if bytes.len() != ENCODED_LEN {
        return Err(bytes.len());
    }

    let mut pos = 0;
    for (index, group) in GROUPS.iter().enumerate() {
        if index > 0 {
            if bytes[pos] != SEPARATOR {
                return Err(pos);
            }
            pos += 1;
        }
        for offset in pos..pos + group.digits {
            if hex_value(bytes[offset]).is_none() {
                return Err(offset);
            }
        }
        pos += group.digits;
    }

    Ok(())
}

fn describe(s: &str, offset: usize) -> GuidError {
    if s.len() != ENCODED_LEN {
        return GuidError::InvalidLength { actual: s.len() };
    }

    // Everything before `offset` passed validation and is ASCII, so `offset`
    // is a char boundary.
    let found = s[offset..].chars().next().unwrap_or_default();
    if is_separator_offset(offset) {
        GuidError::MissingSeparator { offset, found }
    } else {
        GuidError::InvalidDigit { offset, found }
    }
}

fn is_separator_offset(offset: usize) -> bool {
    let mut pos = 0;
    for (index, group) in GROUPS.iter().enumerate() {
        if index > 0 {
            if pos == offset {
                return true;
            }
            pos += 1;
        }
        pos += group.digits;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "01234567-89AB-CDEF-FEDC-BA9876543210";

    #[test]
    fn test_groups_cover_128_bits() {
        let high_bits: usize = GROUPS
            .iter()
            .filter(|g| matches!(g.word, Word::High))
            .map(|g| g.digits * 4)
            .sum();
        let low_bits: usize = GROUPS
            .iter()
            .filter(|g| matches!(g.word, Word::Low))
            .map(|g| g.digits * 4)
            .sum();
        assert_eq!(high_bits, 64);
        assert_eq!(low_bits, 64);

        let total: usize = GROUPS.iter().map(|g| g.digits).sum::<usize>() + GROUPS.len() - 1;
        assert_eq!(total, ENCODED_LEN);
    }

    #[test]
    fn test_separator_offsets() {
        let offsets: Vec<usize> = (0..ENCODED_LEN).filter(|&i| is_separator_offset(i)).collect();
        assert_eq!(offsets, vec![8, 13, 18, 23]);
    }

    #[test]
    fn test_encode_known_value() {
        let guid = Guid::from_parts(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
        assert_eq!(guid.encode().unwrap(), SAMPLE);
        assert_eq!(guid.to_string(), SAMPLE);
    }

    #[test]
    fn test_decode_known_value() {
        let guid: Guid = SAMPLE.parse().unwrap();
        assert_eq!(guid.high(), 0x0123_4567_89AB_CDEF);
        assert_eq!(guid.low(), 0xFEDC_BA98_7654_3210);
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(
            Guid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        let max = Guid::from_parts(u64::MAX, u64::MAX);
        assert_eq!(max.to_string(), "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF");
        assert_eq!(Guid::parse(&max.to_string()).unwrap(), max);
    }

    #[test]
    fn test_is_valid() {
        assert!(Guid::is_valid(SAMPLE));
        assert!(Guid::is_valid("00000000-0000-0000-0000-000000000000"));
        assert!(!Guid::is_valid(""));
        assert!(!Guid::is_valid("01234567-89ab-CDEF-FEDC-BA9876543210"));
        assert!(!Guid::is_valid(" 01234567-89AB-CDEF-FEDC-BA987654321"));
        assert!(!Guid::is_valid("01234567-89AB-CDEF-FEDC-BA9876543210 "));
        assert!(!Guid::is_valid("0123456789AB-CDEF-FEDC-BA9876543210-"));
        assert!(!Guid::is_valid("0123456G-89AB-CDEF-FEDC-BA9876543210"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Guid::parse("").unwrap_err(),
            GuidError::InvalidLength { actual: 0 }
        );
        assert_eq!(
            Guid::parse("01234567_89AB-CDEF-FEDC-BA9876543210").unwrap_err(),
            GuidError::MissingSeparator {
                offset: 8,
                found: '_'
            }
        );
        assert_eq!(
            Guid::parse("01234567-89AB-CDEF-FEDC-BA987654321a").unwrap_err(),
            GuidError::InvalidDigit {
                offset: 35,
                found: 'a'
            }
        );
        assert_eq!(
            Guid::parse("01234567-89AB-CDEF-FEDC-BA98765432-0").unwrap_err(),
            GuidError::InvalidDigit {
                offset: 34,
                found: '-'
            }
        );
    }

    #[test]
    fn test_parse_non_ascii() {
        // 34 ASCII bytes plus a two-byte character.
        let s = "01234567-89AB-CDEF-FEDC-BA98765432é";
        assert_eq!(s.len(), ENCODED_LEN);
        let err = Guid::parse(s).unwrap_err();
        assert_eq!(
            err,
            GuidError::InvalidDigit {
                offset: 34,
                found: 'é'
            }
        );
        assert!(err.is_character_error());
        assert_eq!(err.offset(), Some(34));
    }

    #[test]
    fn test_lossy_decode_yields_nil() {
        assert!(Guid::from_str_lossy("not a guid").is_nil());
        assert!(Guid::from_str_lossy("01234567-89ab-cdef-fedc-ba9876543210").is_nil());
        assert_eq!(
            Guid::from_str_lossy(SAMPLE),
            Guid::from_parts(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210)
        );
    }

    #[test]
    fn test_nil_text_is_valid_and_nil() {
        let zero = "00000000-0000-0000-0000-000000000000";
        assert!(Guid::is_valid(zero));
        assert!(Guid::from_str_lossy(zero).is_nil());
    }

    #[test]
    fn test_from_rng_is_deterministic() {
        let a = Guid::from_rng(&mut StdRng::seed_from_u64(7));
        let b = Guid::from_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        let mut rng = StdRng::seed_from_u64(7);
        let high = rng.next_u64();
        let low = rng.next_u64();
        assert_eq!((a.high(), a.low()), (high, low));
    }

    #[test]
    fn test_generate_is_canonical() {
        let s = Guid::generate().unwrap();
        assert_eq!(s.len(), ENCODED_LEN);
        assert!(Guid::is_valid(&s));
        assert!(!s.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_new_ids_differ() {
        assert_ne!(Guid::new(), Guid::new());
    }

    #[test]
    fn test_guid_json_roundtrip() {
        let guid = Guid::new();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{}\"", guid));
        let parsed: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(guid, parsed);
    }

    #[test]
    fn test_guid_json_rejects_lowercase() {
        let result: Result<Guid, _> =
            serde_json::from_str("\"01234567-89ab-cdef-fedc-ba9876543210\"");
        assert!(result.is_err());
    }
}
