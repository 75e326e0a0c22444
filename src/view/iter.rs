//! Iterator adapters over the navigation protocol.

use super::StrView;
use crate::text::utf8::{decode, Codepoint};
use core::iter::FusedIterator;

impl<'a> StrView<'a> {
    /// Iterate over decoded codepoints, from either end.
    ///
    /// Uses the non-validating decoder and panics on a byte that cannot
    /// start a sequence. Validate untrusted input first.
    ///
    /// ```
    /// use utf8view::sv;
    ///
    /// let greek: Vec<u32> = sv!("Γαζέες").chars().collect();
    /// assert_eq!(greek, [915, 945, 950, 941, 949, 962]);
    /// assert_eq!(sv!("Γαζέες").chars().next_back(), Some(962));
    /// ```
    #[inline]
    pub fn chars(&self) -> Chars<'a> {
        Chars {
            views: self.views(),
        }
    }

    /// Iterate over raw bytes.
    #[inline]
    pub fn bytes(&self) -> Bytes<'a> {
        Bytes { rest: *self }
    }

    /// Iterate over one-codepoint sub-views, without decoding.
    #[inline]
    pub fn views(&self) -> Views<'a> {
        Views { rest: *self }
    }
}

/// Iterator over the sub-views of each codepoint.
///
/// Created by [`StrView::views`].
#[derive(Clone, Debug)]
pub struct Views<'a> {
    rest: StrView<'a>,
}

impl<'a> Views<'a> {
    /// The part of the view not yet visited.
    pub fn as_view(&self) -> StrView<'a> {
        self.rest
    }
}

impl<'a> Iterator for Views<'a> {
    type Item = StrView<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let mut element = StrView::empty();
        self.rest = self.rest.iter_next_view(&mut element, 1);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.rest.len();
        ((len + 3) / 4, Some(len))
    }
}

impl<'a> DoubleEndedIterator for Views<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let shrunk = self.rest.shrink_char(1);
        let element = StrView {
            begin: shrunk.end,
            ..self.rest
        };
        self.rest = shrunk;
        Some(element.as_view())
    }
}

impl FusedIterator for Views<'_> {}

/// Iterator over decoded codepoints.
///
/// Created by [`StrView::chars`].
#[derive(Clone, Debug)]
pub struct Chars<'a> {
    views: Views<'a>,
}

impl<'a> Chars<'a> {
    /// The part of the view not yet decoded.
    pub fn as_view(&self) -> StrView<'a> {
        self.views.as_view()
    }
}

#[inline]
fn decode_view(element: StrView<'_>) -> Codepoint {
    decode(element.as_bytes(), element.len())
}

impl Iterator for Chars<'_> {
    type Item = Codepoint;

    #[inline]
    fn next(&mut self) -> Option<Codepoint> {
        self.views.next().map(decode_view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.views.size_hint()
    }
}

impl DoubleEndedIterator for Chars<'_> {
    fn next_back(&mut self) -> Option<Codepoint> {
        self.views.next_back().map(decode_view)
    }
}

impl FusedIterator for Chars<'_> {}

/// Iterator over raw bytes.
///
/// Created by [`StrView::bytes`].
#[derive(Clone, Debug)]
pub struct Bytes<'a> {
    rest: StrView<'a>,
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.rest.is_empty() {
            return None;
        }

        let mut byte = 0;
        self.rest = self.rest.iter_next_byte(&mut byte, 1);
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl DoubleEndedIterator for Bytes<'_> {
    fn next_back(&mut self) -> Option<u8> {
        if self.rest.is_empty() {
            return None;
        }

        self.rest = self.rest.shrink_byte(1);
        Some(self.rest.buf[self.rest.end])
    }
}

impl ExactSizeIterator for Bytes<'_> {}

impl FusedIterator for Bytes<'_> {}
