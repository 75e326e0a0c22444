//! Table-driven UTF-8 validation.
//!
//! Validation runs Björn Höhrmann's UTF-8 automaton
//! (<https://bjoern.hoehrmann.de/utf-8/decoder/dfa/>). Every byte value is
//! mapped to one of twelve character classes, and a transition table maps
//! `(state, class)` to the next state. States are pre-multiplied by the
//! number of classes so a transition is a single add and lookup.
//!
//! | State | Meaning                                         |
//! |-------|-------------------------------------------------|
//! | 0     | accept: between sequences                       |
//! | 12    | reject: terminal                                |
//! | 24    | one continuation byte left                      |
//! | 36    | two continuation bytes left                     |
//! | 48    | after `E0`: next byte must be `A0..=BF`         |
//! | 60    | after `ED`: next byte must be `80..=9F`         |
//! | 72    | after `F0`: next byte must be `90..=BF`         |
//! | 84    | three continuation bytes left                   |
//! | 96    | after `F4`: next byte must be `80..=8F`         |
//!
//! The automaton is the only arbiter of well-formedness in this crate.
//! [`validate_detailed`] runs the same tables and only inspects the state at
//! the point of rejection to explain it.

use crate::view::StrView;

/// Byte value to character class.
#[rustfmt::skip]
const BYTE_CLASS: [u8; 256] = [
    // 0x00..=0x7F: ASCII
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x80..=0x8F, 0x90..=0x9F: continuation
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,  9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
    // 0xA0..=0xBF: continuation
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,  7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    // 0xC0, 0xC1: never valid; 0xC2..=0xDF: 2-byte lead
    8, 8, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,  2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    // 0xE0..=0xEF: 3-byte leads; 0xF0..=0xF4: 4-byte leads; 0xF5..=0xFF: never valid
    10, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 3, 3, 11, 6, 6, 6, 5, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
];

/// `(state + class)` to next state.
#[rustfmt::skip]
const TRANSITIONS: [u8; 108] = [
     0, 12, 24, 36, 60, 96, 84, 12, 12, 12, 48, 72, // 0
    12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, // 12
    12,  0, 12, 12, 12, 12, 12,  0, 12,  0, 12, 12, // 24
    12, 24, 12, 12, 12, 12, 12, 24, 12, 24, 12, 12, // 36
    12, 12, 12, 12, 12, 12, 12, 24, 12, 12, 12, 12, // 48
    12, 24, 12, 12, 12, 12, 12, 12, 12, 24, 12, 12, // 60
    12, 12, 12, 12, 12, 12, 12, 36, 12, 36, 12, 12, // 72
    12, 36, 12, 12, 12, 12, 12, 36, 12, 36, 12, 12, // 84
    12, 36, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, // 96
];

const ACCEPT: u8 = 0;
const REJECT: u8 = 12;

const AFTER_E0: u8 = 48;
const AFTER_ED: u8 = 60;
const AFTER_F0: u8 = 72;
const AFTER_F4: u8 = 96;

const CLASS_NEVER_VALID: u8 = 8;

#[inline(always)]
const fn step(state: u8, byte: u8) -> u8 {
    TRANSITIONS[(state + BYTE_CLASS[byte as usize]) as usize]
}

#[inline(always)]
const fn is_continuation_class(class: u8) -> bool {
    matches!(class, 1 | 7 | 9)
}

/// Error information for UTF-8 validation failures.
///
/// Positions are relative to the start of the validated range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utf8Error {
    /// The byte offset where the error occurred (0-indexed).
    pub offset: usize,
    /// The line number where the error occurred (1-indexed).
    pub line: usize,
    /// The column (byte position within the line, 1-indexed).
    pub column: usize,
    /// Length of the well-formed prefix preceding the offending sequence.
    pub valid_up_to: usize,
    /// The kind of UTF-8 error.
    pub kind: Utf8ErrorKind,
}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at byte {}, line {}, column {}",
            self.kind, self.offset, self.line, self.column
        )
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for Utf8Error {}

/// The specific type of UTF-8 validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Utf8ErrorKind {
    /// A byte that cannot start a sequence appeared where a lead byte was
    /// expected: a continuation byte (`0x80..=0xBF`) or `0xF8..=0xFF`.
    InvalidLeadByte,

    /// A byte outside the range 0x80-0xBF appeared where a continuation byte was expected.
    InvalidContinuationByte,

    /// A character was encoded using more bytes than necessary.
    /// For example, encoding ASCII 'A' (U+0041) as `C1 81` instead of `41`.
    OverlongEncoding,

    /// A surrogate code point (U+D800-U+DFFF) was encoded.
    SurrogateCodepoint,

    /// A code point above U+10FFFF was encoded.
    OutOfRangeCodepoint,

    /// A multi-byte sequence was truncated at the end of input.
    TruncatedSequence,
}

impl Utf8ErrorKind {
    /// A short hint on what the input should have contained.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidLeadByte => Some("bytes 0x80-0xBF are continuation bytes"),
            Self::InvalidContinuationByte => Some("expected byte 0x80-0xBF"),
            Self::OverlongEncoding => Some("use shortest possible encoding"),
            Self::SurrogateCodepoint => Some("U+D800-U+DFFF are reserved for UTF-16"),
            Self::OutOfRangeCodepoint => Some("maximum is U+10FFFF"),
            Self::TruncatedSequence => None,
        }
    }
}

impl core::fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLeadByte => write!(f, "invalid UTF-8 lead byte"),
            Self::InvalidContinuationByte => write!(f, "invalid UTF-8 continuation byte"),
            Self::OverlongEncoding => write!(f, "overlong UTF-8 encoding"),
            Self::SurrogateCodepoint => write!(f, "surrogate code point in UTF-8"),
            Self::OutOfRangeCodepoint => write!(f, "code point above U+10FFFF"),
            Self::TruncatedSequence => write!(f, "truncated UTF-8 sequence"),
        }
    }
}

/// Where and how the automaton stopped on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rejection {
    /// Start of the sequence being decoded when the automaton rejected.
    pub seq_start: usize,
    /// Offset of the byte that drove the automaton into the reject state,
    /// or the input length for a truncated tail.
    pub offset: usize,
    /// State before the offending byte.
    pub state: u8,
    /// The offending byte, `None` for a truncated tail.
    pub byte: Option<u8>,
}

impl Rejection {
    /// Number of bytes of the maximal invalid subpart, which is what a lossy
    /// decoder replaces with a single U+FFFD.
    pub fn invalid_len(&self) -> usize {
        (self.offset - self.seq_start).max(1)
    }

    fn kind(&self) -> Utf8ErrorKind {
        let byte = match self.byte {
            Some(b) => b,
            None => return Utf8ErrorKind::TruncatedSequence,
        };
        let class = BYTE_CLASS[byte as usize];

        if self.state == ACCEPT {
            return match (class, byte) {
                (CLASS_NEVER_VALID, 0xC0 | 0xC1) => Utf8ErrorKind::OverlongEncoding,
                (CLASS_NEVER_VALID, 0xF5..=0xF7) => Utf8ErrorKind::OutOfRangeCodepoint,
                _ => Utf8ErrorKind::InvalidLeadByte,
            };
        }

        if !is_continuation_class(class) {
            return Utf8ErrorKind::InvalidContinuationByte;
        }

        match self.state {
            AFTER_E0 | AFTER_F0 => Utf8ErrorKind::OverlongEncoding,
            AFTER_ED => Utf8ErrorKind::SurrogateCodepoint,
            AFTER_F4 => Utf8ErrorKind::OutOfRangeCodepoint,
            _ => Utf8ErrorKind::InvalidContinuationByte,
        }
    }

    /// Offset reported to users: the offending byte for structural errors,
    /// the sequence start for encodings that are structurally fine but
    /// semantically forbidden.
    fn report_offset(&self, kind: Utf8ErrorKind) -> usize {
        match kind {
            Utf8ErrorKind::InvalidLeadByte | Utf8ErrorKind::InvalidContinuationByte => self.offset,
            _ => self.seq_start,
        }
    }
}

/// Run the automaton over `input`, stopping at the first rejection.
pub(crate) fn run(input: &[u8]) -> Result<(), Rejection> {
    let mut state = ACCEPT;
    let mut seq_start = 0;

    for (pos, &byte) in input.iter().enumerate() {
        if state == ACCEPT {
            seq_start = pos;
        }

        let next = step(state, byte);
        if next == REJECT {
            return Err(Rejection {
                seq_start,
                offset: pos,
                state,
                byte: Some(byte),
            });
        }
        state = next;
    }

    if state == ACCEPT {
        Ok(())
    } else {
        Err(Rejection {
            seq_start,
            offset: input.len(),
            state,
            byte: None,
        })
    }
}

/// Validate that a byte slice is well-formed UTF-8.
///
/// Short-circuits on the first rejected byte.
#[inline]
pub fn validate_bytes(input: &[u8]) -> bool {
    let mut state = ACCEPT;

    for &byte in input {
        state = step(state, byte);
        if state == REJECT {
            return false;
        }
    }

    state == ACCEPT
}

/// Validate that every byte of the view forms well-formed UTF-8.
///
/// Rejects overlong encodings, surrogate halves, lone continuation bytes,
/// sequences truncated by the end of the view, code points above U+10FFFF
/// and the bytes `C0`, `C1`, `F5..=FF`.
///
/// # Examples
///
/// ```
/// use utf8view::{sv, text::dfa::validate, StrView};
///
/// assert!(validate(sv!("Γαζέες")));
/// assert!(!validate(StrView::new(b"abcd\x80")));
/// ```
#[inline]
pub fn validate(view: StrView<'_>) -> bool {
    validate_bytes(view.as_bytes())
}

/// Validate a byte slice, explaining the first failure.
pub fn validate_bytes_detailed(input: &[u8]) -> Result<(), Utf8Error> {
    run(input).map_err(|rejection| {
        let kind = rejection.kind();
        let offset = rejection.report_offset(kind);
        let (line, column) = line_and_column(input, offset);

        Utf8Error {
            offset,
            line,
            column,
            valid_up_to: rejection.seq_start,
            kind,
        }
    })
}

/// Validate a view, explaining the first failure.
///
/// Agrees with [`validate`] on every input.
///
/// # Examples
///
/// ```
/// use utf8view::{StrView, text::dfa::{validate_detailed, Utf8ErrorKind}};
///
/// let err = validate_detailed(StrView::new(b"ok\n\xED\xA0\x80")).unwrap_err();
/// assert_eq!(err.kind, Utf8ErrorKind::SurrogateCodepoint);
/// assert_eq!((err.offset, err.line, err.column), (3, 2, 1));
/// ```
pub fn validate_detailed(view: StrView<'_>) -> Result<(), Utf8Error> {
    validate_bytes_detailed(view.as_bytes())
}

/// 1-indexed line and byte column of `offset`.
fn line_and_column(input: &[u8], offset: usize) -> (usize, usize) {
    let prefix = &input[..offset.min(input.len())];
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &[u8]) -> Result<(), Utf8Error> {
        let detailed = validate_bytes_detailed(input);
        assert_eq!(
            validate_bytes(input),
            detailed.is_ok(),
            "validate and validate_detailed disagree on {:02X?}",
            input
        );
        detailed
    }

    // =========================================================================
    // Tables
    // =========================================================================

    mod tables {
        use super::*;

        #[test]
        fn class_table_partitions() {
            let count = |class: u8| BYTE_CLASS.iter().filter(|&&c| c == class).count();

            assert_eq!(count(0), 128);
            assert_eq!(count(1), 16);
            assert_eq!(count(9), 16);
            assert_eq!(count(7), 32);
            assert_eq!(count(2), 30);
            assert_eq!(count(8), 13);
            assert_eq!(count(10), 1);
            assert_eq!(count(3), 14);
            assert_eq!(count(4), 1);
            assert_eq!(count(11), 1);
            assert_eq!(count(6), 3);
            assert_eq!(count(5), 1);
        }

        #[test]
        fn special_leads() {
            assert_eq!(BYTE_CLASS[0xE0], 10);
            assert_eq!(BYTE_CLASS[0xED], 4);
            assert_eq!(BYTE_CLASS[0xF0], 11);
            assert_eq!(BYTE_CLASS[0xF4], 5);
            assert_eq!(BYTE_CLASS[0xC0], CLASS_NEVER_VALID);
            assert_eq!(BYTE_CLASS[0xC1], CLASS_NEVER_VALID);
            assert_eq!(BYTE_CLASS[0xF5], CLASS_NEVER_VALID);
            assert_eq!(BYTE_CLASS[0xFF], CLASS_NEVER_VALID);
        }

        #[test]
        fn reject_is_terminal() {
            for byte in 0..=255u8 {
                assert_eq!(step(REJECT, byte), REJECT);
            }
        }

        #[test]
        fn every_transition_lands_on_a_state() {
            for &next in TRANSITIONS.iter() {
                assert_eq!(next % 12, 0);
                assert!((next as usize) < TRANSITIONS.len());
            }
        }
    }

    // =========================================================================
    // Valid UTF-8 Tests
    // =========================================================================

    mod valid_utf8 {
        use super::*;

        #[test]
        fn empty_input() {
            assert!(check(b"").is_ok());
        }

        #[test]
        fn ascii_single_byte() {
            for byte in 0x00..=0x7F {
                assert!(
                    check(&[byte]).is_ok(),
                    "ASCII byte 0x{:02X} should be valid",
                    byte
                );
            }
        }

        #[test]
        fn greek_sample() {
            assert!(check("Γαζέες".as_bytes()).is_ok());
        }

        #[test]
        fn two_byte_sequences() {
            assert!(check(&[0xC2, 0x80]).is_ok()); // U+0080
            assert!(check(&[0xC3, 0xBF]).is_ok()); // U+00FF
            assert!(check(&[0xDF, 0xBF]).is_ok()); // U+07FF
            assert!(check("é ñ ü © ®".as_bytes()).is_ok());
        }

        #[test]
        fn three_byte_sequences() {
            assert!(check(&[0xE0, 0xA0, 0x80]).is_ok()); // U+0800
            assert!(check(&[0xEF, 0xBF, 0xBF]).is_ok()); // U+FFFF
            assert!(check(&[0xED, 0x9F, 0xBF]).is_ok()); // U+D7FF, just below surrogates
            assert!(check(&[0xEE, 0x80, 0x80]).is_ok()); // U+E000, just above surrogates
            assert!(check("日本語 中文 한국어 €".as_bytes()).is_ok());
        }

        #[test]
        fn four_byte_sequences() {
            assert!(check(&[0xF0, 0x90, 0x80, 0x80]).is_ok()); // U+10000
            assert!(check(&[0xF4, 0x8F, 0xBF, 0xBF]).is_ok()); // U+10FFFF
            assert!(check(&[0xF3, 0xBF, 0xBF, 0xBF]).is_ok()); // U+FFFFF
            assert!(check("🎉😀🚀 𝄞".as_bytes()).is_ok());
        }

        #[test]
        fn mixed_sequences() {
            assert!(check("Hello! 你好 مرحبا 🌍🚀 Ñoño café".as_bytes()).is_ok());
        }

        #[test]
        fn non_characters() {
            // Non-characters and the BOM are well-formed
            assert!(check(&[0xEF, 0xBF, 0xBE]).is_ok()); // U+FFFE
            assert!(check(&[0xEF, 0xBB, 0xBF]).is_ok()); // U+FEFF
        }

        #[test]
        fn long_valid_string() {
            let mut s = String::new();
            for i in 0..100 {
                s.push_str(&format!("Line {}: Hello 世界 🎉\n", i));
            }
            assert!(check(s.as_bytes()).is_ok());
        }
    }

    // =========================================================================
    // Invalid Lead Byte Tests
    // =========================================================================

    mod invalid_lead_byte {
        use super::*;

        #[test]
        fn continuation_byte_as_lead() {
            for byte in 0x80..=0xBF {
                let err = check(&[byte]).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
                assert_eq!(err.offset, 0);
            }
        }

        #[test]
        fn lone_continuation_after_ascii() {
            let err = check(b"abcd\x80").unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
            assert_eq!(err.offset, 4);
            assert_eq!(err.valid_up_to, 4);
        }

        #[test]
        fn extra_continuation_after_sequence() {
            let err = check(&[0xC3, 0xA9, 0xA9]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
            assert_eq!(err.offset, 2);
        }

        #[test]
        fn f8_ff_lead_bytes() {
            // Includes the legacy 5- and 6-byte lead forms
            for byte in 0xF8..=0xFF {
                let err = check(&[byte, 0x80, 0x80, 0x80, 0x80, 0x80]).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
                assert_eq!(err.offset, 0);
            }
        }
    }

    // =========================================================================
    // Invalid Continuation Byte Tests
    // =========================================================================

    mod invalid_continuation {
        use super::*;

        #[test]
        fn missing_continuation_2byte() {
            let err = check(&[0xC2, b'A']).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);
            assert_eq!(err.offset, 1);
            assert_eq!(err.valid_up_to, 0);
        }

        #[test]
        fn missing_continuation_3byte() {
            let err = check(&[0xE0, b'A', 0x80]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);
            assert_eq!(err.offset, 1);

            let err = check(&[0xE0, 0xA0, b'A']).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);
            assert_eq!(err.offset, 2);
        }

        #[test]
        fn missing_continuation_4byte() {
            assert_eq!(check(&[0xF0, b'A', 0x80, 0x80]).unwrap_err().offset, 1);
            assert_eq!(check(&[0xF0, 0x90, b'A', 0x80]).unwrap_err().offset, 2);
            assert_eq!(check(&[0xF0, 0x90, 0x80, b'A']).unwrap_err().offset, 3);
        }

        #[test]
        fn continuation_is_another_lead() {
            let err = check(&[0xC2, 0xC2]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);

            let err = check(&[0xC2, 0xF0]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::InvalidContinuationByte);
        }

        #[test]
        fn any_bad_continuation_inside_sequence() {
            // Replacing any continuation byte with a non-continuation byte breaks validity
            let text = "Γαζέες 日本 🎉".as_bytes();
            for pos in 0..text.len() {
                if text[pos] & 0xC0 != 0x80 {
                    continue;
                }
                for replacement in [b'A', 0xC3, 0xE6, 0xF0, 0xFF] {
                    let mut corrupted = text.to_vec();
                    corrupted[pos] = replacement;
                    assert!(
                        !validate_bytes(&corrupted),
                        "corrupting byte {} with 0x{:02X} should invalidate",
                        pos,
                        replacement
                    );
                }
            }
        }
    }

    // =========================================================================
    // Overlong Encoding Tests
    // =========================================================================

    mod overlong_encoding {
        use super::*;

        #[test]
        fn overlong_2byte() {
            for lead in [0xC0, 0xC1] {
                for cont in 0x80..=0xBF {
                    let err = check(&[lead, cont]).unwrap_err();
                    assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
                    assert_eq!(err.offset, 0);
                }
            }
        }

        #[test]
        fn overlong_3byte() {
            // NUL as E0 80 80
            let err = check(&[0xE0, 0x80, 0x80]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
            assert_eq!(err.offset, 0);

            // U+07FF as E0 9F BF
            let err = check(&[0xE0, 0x9F, 0xBF]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
        }

        #[test]
        fn overlong_4byte() {
            let err = check(&[0xF0, 0x80, 0x80, 0x80]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);

            // U+FFFF as F0 8F BF BF
            let err = check(&[0xF0, 0x8F, 0xBF, 0xBF]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
        }

        #[test]
        fn overlong_slash() {
            assert!(check(&[0xC0, 0xAF]).is_err());
            assert!(check(&[0xE0, 0x80, 0xAF]).is_err());
            assert!(check(&[0xF0, 0x80, 0x80, 0xAF]).is_err());
        }

        #[test]
        fn overlong_after_prefix_reports_sequence_start() {
            let err = check(b"path/\xE0\x80\xAF").unwrap_err();
            assert_eq!(err.offset, 5);
            assert_eq!(err.column, 6);
        }
    }

    // =========================================================================
    // Surrogate and Range Tests
    // =========================================================================

    mod surrogates_and_range {
        use super::*;

        #[test]
        fn all_surrogates() {
            for second in 0xA0..=0xBF {
                let err = check(&[0xED, second, 0x80]).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::SurrogateCodepoint);
                assert_eq!(err.offset, 0);
            }
        }

        #[test]
        fn surrogate_in_middle_of_valid() {
            let mut input = b"Hello ".to_vec();
            input.extend_from_slice(&[0xED, 0xB0, 0x80]); // U+DC00
            input.extend_from_slice(b" World");

            let err = check(&input).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::SurrogateCodepoint);
            assert_eq!(err.offset, 6);
        }

        #[test]
        fn just_above_max() {
            let err = check(&[0xF4, 0x90, 0x80, 0x80]).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::OutOfRangeCodepoint);
        }

        #[test]
        fn f5_to_f7_leads() {
            for lead in 0xF5..=0xF7 {
                let err = check(&[lead, 0x80, 0x80, 0x80]).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::OutOfRangeCodepoint);
            }
        }
    }

    // =========================================================================
    // Truncated Sequence Tests
    // =========================================================================

    mod truncated_sequences {
        use super::*;

        #[test]
        fn truncated_leads() {
            for input in [
                &[0xC2][..],
                &[0xE0],
                &[0xE0, 0xA0],
                &[0xF0],
                &[0xF0, 0x90],
                &[0xF0, 0x90, 0x80],
            ] {
                let err = check(input).unwrap_err();
                assert_eq!(err.kind, Utf8ErrorKind::TruncatedSequence);
                assert_eq!(err.offset, 0);
            }
        }

        #[test]
        fn truncated_after_valid() {
            let mut input = Vec::from(&b"Hello "[..]);
            input.push(0xC2);

            let err = check(&input).unwrap_err();
            assert_eq!(err.kind, Utf8ErrorKind::TruncatedSequence);
            assert_eq!(err.offset, 6);
            assert_eq!(err.valid_up_to, 6);
        }

        #[test]
        fn every_proper_prefix_of_a_multibyte_char() {
            for c in ['é', '日', '🎉'] {
                let mut buf = [0u8; 4];
                let bytes = c.encode_utf8(&mut buf).as_bytes();
                for cut in 1..bytes.len() {
                    assert!(!validate_bytes(&bytes[..cut]));
                }
                assert!(validate_bytes(bytes));
            }
        }
    }

    // =========================================================================
    // Error Position Tests
    // =========================================================================

    mod error_positions {
        use super::*;

        #[test]
        fn line_and_column_after_ascii() {
            let err = check(b"Hello\x80").unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (5, 1, 6));
        }

        #[test]
        fn line_and_column_second_line() {
            let err = check(b"Hello\nWorld\x80").unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (11, 2, 6));
        }

        #[test]
        fn line_and_column_after_multibyte() {
            let mut input = "日本".as_bytes().to_vec();
            input.push(0x80);
            let err = check(&input).unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (6, 1, 7));
        }

        #[test]
        fn line_after_crlf() {
            let err = check(b"Line 1\r\nLine 2\x80").unwrap_err();
            assert_eq!(err.line, 2);
        }

        #[test]
        fn multiple_newlines() {
            let err = check(b"\n\n\n\n\x80").unwrap_err();
            assert_eq!((err.offset, err.line, err.column), (4, 5, 1));
        }
    }

    // =========================================================================
    // Comparison with core::str
    // =========================================================================

    mod std_comparison {
        use super::*;

        #[test]
        fn agree_on_every_two_byte_input() {
            for a in 0..=255u8 {
                for b in 0..=255u8 {
                    let input = [a, b];
                    assert_eq!(
                        validate_bytes(&input),
                        core::str::from_utf8(&input).is_ok(),
                        "{:02X?}",
                        input
                    );
                }
            }
        }

        #[test]
        fn valid_up_to_matches_std() {
            let cases: &[&[u8]] = &[
                b"abcd\x80",
                b"caf\xC3",
                b"\xE6\x97\xA5\xFF",
                b"ok\xED\xA0\x80",
                b"\xF4\x90\x80\x80",
                b"\xF0\x9F\x8E",
            ];

            for input in cases {
                let ours = check(input).unwrap_err();
                let std = core::str::from_utf8(input).unwrap_err();
                assert_eq!(ours.valid_up_to, std.valid_up_to(), "{:02X?}", input);
            }
        }

        #[test]
        fn invalid_len_matches_std_error_len() {
            let cases: &[&[u8]] = &[
                b"\x80",
                b"\xC2A",
                b"\xE0\x80\x80",
                b"\xED\xA0\x80",
                b"\xF0\x90\x80A",
                b"\xF4\x90\x80\x80",
                b"\xFF",
            ];

            for input in cases {
                let rejection = run(input).unwrap_err();
                let std = core::str::from_utf8(input).unwrap_err();
                assert_eq!(
                    Some(rejection.invalid_len()),
                    std.error_len(),
                    "{:02X?}",
                    input
                );
            }
        }
    }
}
