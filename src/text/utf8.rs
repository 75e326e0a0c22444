//! Codepoint length classification and decoding.
//!
//! This is the fast path: nothing in this module validates its input. It is
//! meant for text that has already been accepted by [`crate::text::dfa`] or
//! that comes from a trusted source (a `&str`, a string literal). Feeding it
//! malformed bytes yields an unspecified codepoint, never a detected error.
//!
//! ## UTF-8 Encoding Rules
//!
//! UTF-8 is a variable-width encoding that uses 1-4 bytes per character:
//!
//! | Bytes | First byte    | Continuation bytes | Code point range     |
//! |-------|---------------|-------------------|----------------------|
//! | 1     | `0xxxxxxx`    | -                 | U+0000 - U+007F      |
//! | 2     | `110xxxxx`    | `10xxxxxx`        | U+0080 - U+07FF      |
//! | 3     | `1110xxxx`    | `10xxxxxx` × 2    | U+0800 - U+FFFF      |
//! | 4     | `11110xxx`    | `10xxxxxx` × 3    | U+10000 - U+10FFFF   |

/// A decoded Unicode scalar value.
pub type Codepoint = u32;

/// Check if a byte is a UTF-8 continuation byte (`10xxxxxx`).
#[inline(always)]
pub const fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Check if a byte can start a UTF-8 sequence.
///
/// `0xF8..=0xFF` and continuation bytes cannot. `0xC0`, `0xC1` and
/// `0xF5..=0xF7` pass this structural check even though the automaton
/// rejects every sequence they begin.
#[inline(always)]
pub const fn is_lead_byte(byte: u8) -> bool {
    !is_continuation_byte(byte) && byte < 0xF8
}

/// Get the sequence length announced by a lead byte.
///
/// - `0xxxxxxx` = 1
/// - `110xxxxx` = 2
/// - `1110xxxx` = 3
/// - `11110xxx` = 4
///
/// Only defined for lead bytes. Continuation bytes and `0xF8..=0xFF`
/// classify as 1 so that walking malformed text still makes progress.
///
/// # Examples
///
/// ```
/// use utf8view::text::utf8::lead_byte_length;
///
/// assert_eq!(lead_byte_length(b'A'), 1);
/// assert_eq!(lead_byte_length("é".as_bytes()[0]), 2);
/// assert_eq!(lead_byte_length("日".as_bytes()[0]), 3);
/// assert_eq!(lead_byte_length("🎉".as_bytes()[0]), 4);
/// ```
#[inline]
pub const fn lead_byte_length(byte: u8) -> usize {
    match byte {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Decode the codepoint whose `len` bytes start at `bytes[0]`.
///
/// The lead byte keeps its low `7 - len` bits (all 7 for ASCII) and each
/// continuation byte contributes its low 6 bits, most significant first.
/// Nothing is validated: continuation bytes are not checked for the `10`
/// tag and overlong or surrogate encodings decode to whatever their bits say.
///
/// # Panics
///
/// Panics if `len` is not in `1..=4` or `bytes` holds fewer than `len`
/// bytes.
///
/// # Examples
///
/// ```
/// use utf8view::text::utf8::decode;
///
/// assert_eq!(decode(b"A", 1), 0x41);
/// assert_eq!(decode("Γ".as_bytes(), 2), 915);
/// assert_eq!(decode("日".as_bytes(), 3), 0x65E5);
/// assert_eq!(decode("🎉".as_bytes(), 4), 0x1F389);
/// ```
#[inline]
pub fn decode(bytes: &[u8], len: usize) -> Codepoint {
    assert!(
        bytes.len() >= len,
        "codepoint needs {} bytes but only {} remain",
        len,
        bytes.len()
    );

    let lead = bytes[0] as u32;

    match len {
        1 => lead,
        2 => ((lead & 0x1F) << 6) | (bytes[1] as u32 & 0x3F),
        3 => ((lead & 0x0F) << 12) | ((bytes[1] as u32 & 0x3F) << 6) | (bytes[2] as u32 & 0x3F),
        4 => {
            ((lead & 0x07) << 18)
                | ((bytes[1] as u32 & 0x3F) << 12)
                | ((bytes[2] as u32 & 0x3F) << 6)
                | (bytes[3] as u32 & 0x3F)
        }
        _ => panic!("invalid UTF-8 sequence length {}", len),
    }
}

/// Decode the codepoint at the start of `bytes`, returning it together with
/// the number of bytes it occupies.
///
/// Same trust model as [`decode`].
#[inline]
pub fn decode_first(bytes: &[u8]) -> (Codepoint, usize) {
    let len = lead_byte_length(bytes[0]);
    (decode(bytes, len), len)
}
