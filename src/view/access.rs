//! Element access and consume-and-advance helpers.
//!
//! The `*_at` accessors step forward from `begin` and are therefore O(i):
//! UTF-8 offers no constant-time way to find the i-th codepoint.

use super::StrView;
use crate::text::utf8::{decode, is_lead_byte, lead_byte_length, Codepoint};

impl<'a> StrView<'a> {
    /// Decode the codepoint starting at `begin`.
    ///
    /// # Panics
    ///
    /// Panics if the view is empty, if `begin` is not on a lead byte, or if
    /// the sequence runs past `end`.
    #[inline]
    pub fn as_char(&self) -> Codepoint {
        let element = self.as_view();
        decode(element.as_bytes(), element.len())
    }

    /// The byte at `begin`.
    ///
    /// # Panics
    ///
    /// Panics if the view is empty.
    #[inline]
    pub fn as_byte(&self) -> u8 {
        assert!(!self.is_empty(), "as_byte: view is empty");
        self.buf[self.begin]
    }

    /// The sub-view covering the codepoint at `begin`, without decoding it.
    ///
    /// # Panics
    ///
    /// Same conditions as [`as_char`](Self::as_char).
    pub fn as_view(&self) -> StrView<'a> {
        let lead = self.as_byte();
        assert!(
            is_lead_byte(lead),
            "byte 0x{:02X} at offset {} is not a UTF-8 lead byte",
            lead,
            self.begin
        );

        let len = lead_byte_length(lead);
        assert!(
            len <= self.len(),
            "codepoint at offset {} needs {} bytes but the view has {}",
            self.begin,
            len,
            self.len()
        );

        Self {
            end: self.begin + len,
            ..*self
        }
    }

    /// Decode the codepoint `i` codepoints after `begin`. O(i).
    pub fn char_at(&self, i: usize) -> Codepoint {
        self.next_char(i).as_char()
    }

    /// The byte `i` bytes after `begin`.
    pub fn byte_at(&self, i: usize) -> u8 {
        self.next_byte(i).as_byte()
    }

    /// The sub-view of the codepoint `i` codepoints after `begin`. O(i).
    pub fn view_at(&self, i: usize) -> StrView<'a> {
        self.next_char(i).as_view()
    }

    // =========================================================================
    // Consume and advance
    // =========================================================================

    /// Skip `i - 1` codepoints, decode the next one into `out`, and return
    /// the view positioned just past it.
    ///
    /// `i == 0` behaves like `i == 1`.
    ///
    /// ```
    /// use utf8view::sv;
    ///
    /// let mut it = sv!("Γαζ");
    /// let mut c = 0;
    /// let mut seen = Vec::new();
    /// while !it.eof() {
    ///     it = it.iter_next_char(&mut c, 1);
    ///     seen.push(c);
    /// }
    /// assert_eq!(seen, [915, 945, 950]);
    /// ```
    #[must_use]
    pub fn iter_next_char(self, out: &mut Codepoint, i: usize) -> Self {
        let mut element = StrView::empty();
        let rest = self.iter_next_view(&mut element, i);
        *out = decode(element.as_bytes(), element.len());
        rest
    }

    /// Skip `i - 1` bytes, copy the next one into `out`, and return the view
    /// positioned just past it.
    ///
    /// `i == 0` behaves like `i == 1`.
    #[must_use]
    pub fn iter_next_byte(self, out: &mut u8, i: usize) -> Self {
        let at = self.next_byte(i.saturating_sub(1));
        *out = at.as_byte();
        at.next_byte(1)
    }

    /// Skip `i - 1` codepoints, store the next one's sub-view in `out`, and
    /// return the view positioned just past it.
    ///
    /// `i == 0` behaves like `i == 1`.
    #[must_use]
    pub fn iter_next_view(self, out: &mut StrView<'a>, i: usize) -> Self {
        let element = self.next_char(i.saturating_sub(1)).as_view();
        *out = element;
        Self {
            begin: element.end,
            ..self
        }
    }

    /// Step `begin` back `i` codepoints, decode the codepoint now at `begin`
    /// into `out`, and return the repositioned view.
    #[must_use]
    pub fn iter_prev_char(self, out: &mut Codepoint, i: usize) -> Self {
        let at = self.prev_char(i);
        *out = at.as_char();
        at
    }

    /// Step `begin` back `i` bytes, copy the byte now at `begin` into `out`,
    /// and return the repositioned view.
    #[must_use]
    pub fn iter_prev_byte(self, out: &mut u8, i: usize) -> Self {
        let at = self.prev_byte(i);
        *out = at.as_byte();
        at
    }

    /// Step `begin` back `i` codepoints, store the sub-view of the codepoint
    /// now at `begin` in `out`, and return the repositioned view.
    #[must_use]
    pub fn iter_prev_view(self, out: &mut StrView<'a>, i: usize) -> Self {
        let at = self.prev_char(i);
        *out = at.as_view();
        at
    }
}
