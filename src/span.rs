//! Span - byte range into the original input
//!
//! Zero-copy reference to a portion of the input document, plus the
//! [`TextRef`] accessor handed to text, CDATA and comment callbacks.

use std::fmt;
use std::ops::Range;

/// A half-open byte range `[start, end)` into the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The span as a `Range`, for indexing
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Extract the text from input
    ///
    /// A span that does not fit `input` (or does not fall on char
    /// boundaries) yields `""`.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.range()).unwrap_or("")
    }
}

/// Lazy accessor for a run of text in the input.
///
/// Holds the source and the byte range captured when the event fired.
/// Nothing is copied until [`TextRef::as_str`] or [`ToString::to_string`]
/// is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRef<'a> {
    source: &'a str,
    span: Span,
}

impl<'a> TextRef<'a> {
    #[inline]
    pub(crate) fn new(source: &'a str, span: Span) -> Self {
        Self { source, span }
    }

    /// Materialize the text as a view into the input
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.span.slice(self.source)
    }

    /// Position of the text in the input
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the text is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for TextRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for TextRef<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextRef<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
        assert_eq!(span.range(), 5..15);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_span_slice() {
        let input = "hello world";
        assert_eq!(Span::new(6, 11).slice(input), "world");
    }

    #[test]
    fn test_span_slice_out_of_range() {
        assert_eq!(Span::new(6, 40).slice("hello"), "");
        // Inside the 3-byte encoding of U+FEFF
        assert_eq!(Span::new(1, 3).slice("\u{FEFF}<a/>"), "");
    }

    #[test]
    fn test_text_ref_materializes_lazily() {
        let input = "<a>body</a>";
        let text = TextRef::new(input, Span::new(3, 7));
        assert_eq!(text.as_str(), "body");
        assert_eq!(text.to_string(), "body");
        assert_eq!(text, "body");
        assert_eq!(text.len(), 4);
    }
}
