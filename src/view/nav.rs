//! Navigation: moving a view's boundaries by bytes or by codepoints.
//!
//! | Operation     | Moves   | Direction | Bound checked against |
//! |---------------|---------|-----------|-----------------------|
//! | `next_*`      | `begin` | forward   | `end`                 |
//! | `prev_*`      | `begin` | backward  | start of buffer       |
//! | `grow_*`      | `end`   | forward   | end of buffer         |
//! | `shrink_*`    | `end`   | backward  | `begin`               |
//!
//! Stepping by zero returns the view unchanged without reading any byte.

use super::StrView;
use crate::text::utf8::{is_continuation_byte, lead_byte_length};

impl<'a> StrView<'a> {
    // =========================================================================
    // Byte granularity
    // =========================================================================

    /// Move `begin` forward by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes remain in the view.
    #[inline]
    #[must_use]
    pub fn next_byte(self, n: usize) -> Self {
        assert!(
            n <= self.len(),
            "next_byte: cannot advance {} bytes in a view of {} bytes",
            n,
            self.len()
        );
        Self {
            begin: self.begin + n,
            ..self
        }
    }

    /// Move `begin` backward by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if that would leave the backing buffer.
    #[inline]
    #[must_use]
    pub fn prev_byte(self, n: usize) -> Self {
        assert!(
            n <= self.begin,
            "prev_byte: cannot retreat {} bytes from offset {}",
            n,
            self.begin
        );
        Self {
            begin: self.begin - n,
            ..self
        }
    }

    /// Move `end` forward by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if that would leave the backing buffer.
    #[inline]
    #[must_use]
    pub fn grow_byte(self, n: usize) -> Self {
        assert!(
            n <= self.buf.len() - self.end,
            "grow_byte: cannot grow {} bytes past offset {} in a buffer of {} bytes",
            n,
            self.end,
            self.buf.len()
        );
        Self {
            end: self.end + n,
            ..self
        }
    }

    /// Move `end` backward by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes remain in the view.
    #[inline]
    #[must_use]
    pub fn shrink_byte(self, n: usize) -> Self {
        assert!(
            n <= self.len(),
            "shrink_byte: cannot shrink {} bytes in a view of {} bytes",
            n,
            self.len()
        );
        Self {
            end: self.end - n,
            ..self
        }
    }

    // =========================================================================
    // Codepoint granularity
    // =========================================================================

    /// Move `begin` forward by `n` codepoints.
    ///
    /// Each step skips the whole sequence announced by the lead byte.
    ///
    /// # Panics
    ///
    /// Panics if the view holds fewer than `n` codepoints, or if the last
    /// codepoint stepped over runs past `end`.
    #[must_use]
    pub fn next_char(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }

        let mut pos = self.begin;
        for step in 0..n {
            assert!(
                pos < self.end,
                "next_char: view ends after {} of {} codepoints",
                step,
                n
            );
            pos += lead_byte_length(self.buf[pos]);
        }

        assert!(
            pos <= self.end,
            "next_char: codepoint ending at {} runs past view end {}",
            pos,
            self.end
        );

        Self { begin: pos, ..self }
    }

    /// Move `begin` backward by `n` codepoints.
    ///
    /// UTF-8 does not encode sequence length backward, so each step walks
    /// back one byte at a time until it leaves the continuation bytes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` codepoints precede `begin` in the buffer.
    #[must_use]
    pub fn prev_char(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }

        let mut pos = self.begin;
        for _ in 0..n {
            pos = self.char_start_before(pos);
        }

        Self { begin: pos, ..self }
    }

    /// Move `end` forward by `n` codepoints.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` codepoints follow `end` in the buffer.
    #[must_use]
    pub fn grow_char(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }

        let mut pos = self.end;
        for step in 0..n {
            assert!(
                pos < self.buf.len(),
                "grow_char: buffer ends after {} of {} codepoints",
                step,
                n
            );
            pos += lead_byte_length(self.buf[pos]);
        }

        assert!(
            pos <= self.buf.len(),
            "grow_char: codepoint ending at {} runs past buffer length {}",
            pos,
            self.buf.len()
        );

        Self { end: pos, ..self }
    }

    /// Move `end` backward by `n` codepoints.
    ///
    /// # Panics
    ///
    /// Panics if that would move `end` before `begin`.
    #[must_use]
    pub fn shrink_char(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }

        let mut pos = self.end;
        for step in 0..n {
            assert!(
                pos > self.begin,
                "shrink_char: view starts after {} of {} codepoints",
                step,
                n
            );
            pos = self.char_start_before(pos);
        }

        assert!(
            pos >= self.begin,
            "shrink_char: codepoint starting at {} begins before view begin {}",
            pos,
            self.begin
        );

        Self { end: pos, ..self }
    }

    /// Offset of the codepoint that ends at `pos`.
    ///
    /// Mirrors the forward step: a lead byte at most 3 continuation bytes
    /// back whose announced length reaches exactly `pos` starts the
    /// codepoint; otherwise the byte before `pos` counts as one on its own.
    #[inline]
    fn char_start_before(&self, pos: usize) -> usize {
        assert!(pos > 0, "cannot step back before the start of the buffer");

        let floor = pos.saturating_sub(4);
        let mut start = pos - 1;
        while start > floor && is_continuation_byte(self.buf[start]) {
            start -= 1;
        }

        let lead = self.buf[start];
        if !is_continuation_byte(lead) && start + lead_byte_length(lead) == pos {
            start
        } else {
            pos - 1
        }
    }
}
