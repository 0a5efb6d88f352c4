//! SIMD-accelerated delimiter scanning using memchr
//!
//! Uses memchr crate for fast byte searching with SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)

use memchr::{memchr, memchr2, memmem};

/// Byte cursor used by the tokenizer and attribute extraction
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Peek at current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Byte at an absolute position
    #[inline]
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.input.get(pos).copied()
    }

    /// Advance by n bytes
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Skip whitespace characters (space, tab, newline, carriage return)
    #[inline]
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !is_whitespace(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Check if `prefix` occurs `offset` bytes past the current position
    #[inline]
    pub fn starts_with_at(&self, offset: usize, prefix: &[u8]) -> bool {
        self.input
            .get(self.pos + offset..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Find next occurrence of a specific byte
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        let rest = self.input.get(self.pos..)?;
        memchr(byte, rest).map(|i| self.pos + i)
    }

    /// Find next single or double quote
    #[inline]
    pub fn find_quote(&self) -> Option<usize> {
        let rest = self.input.get(self.pos..)?;
        memchr2(b'\'', b'"', rest).map(|i| self.pos + i)
    }

    /// Find the start of the next occurrence of a multi-byte marker
    /// such as `-->` or `]]>`
    #[inline]
    pub fn find_marker(&self, marker: &[u8]) -> Option<usize> {
        let rest = self.input.get(self.pos..)?;
        memmem::find(rest, marker).map(|i| self.pos + i)
    }

    /// End of an element name that starts at `start`
    ///
    /// The name stops at the first whitespace or `/` before `limit`; if
    /// neither occurs, it runs up to `limit`.
    pub fn name_end(&self, start: usize, limit: usize) -> usize {
        self.input
            .get(start..limit)
            .and_then(|name| name.iter().position(|&b| is_whitespace(b) || b == b'/'))
            .map_or(limit, |i| start + i)
    }
}

/// Whitespace as the scanner understands it: space, tab, CR, LF
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
