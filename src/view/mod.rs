//! Non-owning views over UTF-8 text.
//!
//! A [`StrView`] is a half-open byte range `begin..end` into a buffer owned
//! by someone else: a string literal, a memory-mapped file, a caller's
//! `Vec<u8>`. The view borrows the whole backing buffer, not just its own
//! range, so it can move its boundaries backward and forward without ever
//! leaving memory it is allowed to read. Every operation returns a new view;
//! neither the view nor the bytes it points at are ever modified.
//!
//! ## Boundary contract
//!
//! `begin <= end <= buffer().len()` holds for every view. Any operation that
//! would break it (stepping `begin` past `end`, retreating `end` before
//! `begin`, leaving the backing buffer) panics. The checks are always on,
//! independent of build profile.
//!
//! ## Trust model
//!
//! Codepoint-level operations use the non-validating fast path in
//! [`crate::text::utf8`]. Run [`StrView::validate`] first when the bytes come
//! from an untrusted source.

mod access;
mod iter;
mod nav;

pub use iter::{Bytes, Chars, Views};

use crate::text::dfa;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Non-owning view of a byte range holding UTF-8 text.
///
/// `Copy`: copying a view copies two offsets and a borrow, never the text.
#[derive(Clone, Copy)]
pub struct StrView<'a> {
    buf: &'a [u8],
    begin: usize,
    end: usize,
}

impl<'a> StrView<'a> {
    /// View the whole of `buf`.
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            begin: 0,
            end: buf.len(),
        }
    }

    /// View the whole of a string slice.
    #[inline]
    pub const fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }

    /// View `buf[begin..end]`, keeping the rest of `buf` reachable for
    /// backward and growing navigation.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end` or `end > buf.len()`.
    #[inline]
    pub fn from_range(buf: &'a [u8], begin: usize, end: usize) -> Self {
        assert!(
            begin <= end,
            "view begin {} is past view end {}",
            begin,
            end
        );
        assert!(
            end <= buf.len(),
            "view end {} is past buffer length {}",
            end,
            buf.len()
        );
        Self { buf, begin, end }
    }

    /// View `len` bytes of `buf` starting at `begin`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit in `buf`.
    #[inline]
    pub fn from_len(buf: &'a [u8], begin: usize, len: usize) -> Self {
        let end = begin
            .checked_add(len)
            .unwrap_or_else(|| panic!("view length {} overflows from {}", len, begin));
        Self::from_range(buf, begin, end)
    }

    /// An empty view over an empty buffer.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(&[])
    }

    /// Offset of the first byte of the view within its backing buffer.
    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Offset one past the last byte of the view within its backing buffer.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The whole backing buffer.
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// The bytes covered by the view.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.begin..self.end]
    }

    /// The view as `&str`, if the automaton accepts it.
    pub fn as_str(&self) -> Option<&'a str> {
        let bytes = self.as_bytes();
        if dfa::validate_bytes(bytes) {
            // SAFETY: the automaton accepts exactly the well-formed UTF-8
            // byte sequences.
            Some(unsafe { core::str::from_utf8_unchecked(bytes) })
        } else {
            None
        }
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// True iff `begin == end`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Alias of [`is_empty`](Self::is_empty), reads better in scan loops.
    #[inline]
    pub fn eof(&self) -> bool {
        self.is_empty()
    }

    /// Number of codepoints in the view.
    ///
    /// Counts sequence starts using the lead-byte classification, so on
    /// malformed input every stray byte counts as one. O(n).
    pub fn utf_length(&self) -> usize {
        let bytes = self.as_bytes();
        let mut pos = 0;
        let mut count = 0;

        while pos < bytes.len() {
            pos += crate::text::utf8::lead_byte_length(bytes[pos]);
            count += 1;
        }

        count
    }

    /// Whether every byte of the view forms well-formed UTF-8.
    #[inline]
    pub fn validate(&self) -> bool {
        dfa::validate(*self)
    }

    /// Byte-wise equality, cheapest check first.
    ///
    /// 1. Same starting address and same length: equal without looking at
    ///    the bytes. This is the common case for interned or static text.
    /// 2. Different lengths: not equal.
    /// 3. Byte-by-byte comparison.
    #[inline]
    pub fn equals(&self, other: &StrView<'_>) -> bool {
        let (a, b) = (self.as_bytes(), other.as_bytes());

        if a.as_ptr() == b.as_ptr() && a.len() == b.len() {
            return true;
        }

        if a.len() != b.len() {
            return false;
        }

        a == b
    }
}

impl Default for StrView<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> From<&'a str> for StrView<'a> {
    fn from(text: &'a str) -> Self {
        Self::from_text(text)
    }
}

impl<'a> From<&'a [u8]> for StrView<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

impl PartialEq for StrView<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for StrView<'_> {}

impl PartialEq<str> for StrView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.equals(&StrView::from_text(other))
    }
}

impl PartialEq<&str> for StrView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.equals(&StrView::from_text(other))
    }
}

impl PartialEq<[u8]> for StrView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.equals(&StrView::new(other))
    }
}

impl Hash for StrView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for StrView<'_> {
    /// Streams the view's bytes; each maximal malformed subpart is written
    /// as U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        let mut rest = self.as_bytes();

        loop {
            match dfa::run(rest) {
                Ok(()) => {
                    // SAFETY: the automaton accepted all of `rest`.
                    return f.write_str(unsafe { core::str::from_utf8_unchecked(rest) });
                }
                Err(rejection) => {
                    let (valid, tail) = rest.split_at(rejection.seq_start);
                    // SAFETY: the automaton accepted everything before the
                    // start of the rejected sequence.
                    f.write_str(unsafe { core::str::from_utf8_unchecked(valid) })?;
                    f.write_char(char::REPLACEMENT_CHARACTER)?;
                    rest = &tail[rejection.invalid_len().min(tail.len())..];
                }
            }
        }
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrView({:?} @ {}..{})", self.to_string_lossy(), self.begin, self.end)
    }
}

impl<'a> StrView<'a> {
    /// Lossy rendering, for diagnostics.
    #[cfg(any(test, feature = "std"))]
    pub fn to_string_lossy(&self) -> std::borrow::Cow<'a, str> {
        match self.as_str() {
            Some(text) => std::borrow::Cow::Borrowed(text),
            None => std::borrow::Cow::Owned(self.to_string()),
        }
    }

    #[cfg(not(any(test, feature = "std")))]
    fn to_string_lossy(&self) -> LossyDisplay<'a> {
        LossyDisplay(*self)
    }
}

/// Debug-quoting adapter used when no allocator is available.
#[cfg(not(any(test, feature = "std")))]
struct LossyDisplay<'a>(StrView<'a>);

#[cfg(not(any(test, feature = "std")))]
impl fmt::Debug for LossyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

/// Wrap a string literal in a [`StrView`].
///
/// Usable in `const` context.
///
/// ```
/// use utf8view::{sv, StrView};
///
/// const GREETING: StrView<'static> = sv!("hello there");
/// assert_eq!(GREETING.len(), 11);
/// ```
#[macro_export]
macro_rules! sv {
    ($text:expr) => {
        $crate::StrView::from_text($text)
    };
}
