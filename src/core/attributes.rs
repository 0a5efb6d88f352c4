//! Attribute Extraction
//!
//! Turns the raw span between an element name and its `>` into a map of
//! attribute names to values. Runs only when a consumer asks for it.

use std::collections::HashMap;

use super::scanner::{is_whitespace, Scanner};
use crate::span::Span;

/// Attribute name to value. Later duplicates overwrite earlier ones;
/// iteration order is unspecified.
pub type AttributeMap<'a> = HashMap<&'a str, &'a str>;

/// Lazy accessor for the attributes of one element start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributesRef<'a> {
    source: &'a str,
    span: Span,
}

impl<'a> AttributesRef<'a> {
    #[inline]
    pub(crate) fn new(source: &'a str, span: Span) -> Self {
        Self { source, span }
    }

    /// The unparsed attribute block, e.g. ` height='1080' width='1920'/`
    #[inline]
    pub fn raw(&self) -> &'a str {
        self.span.slice(self.source)
    }

    /// Position of the attribute block in the input
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Build a fresh attribute map. Every call re-scans the block.
    pub fn parse(&self) -> AttributeMap<'a> {
        extract_attributes(self.raw())
    }
}

/// Extract `name='value'` / `name="value"` pairs from an attribute block.
///
/// - Whitespace may surround `=`.
/// - A value may be closed by either quote kind.
/// - Runs not followed by `=` (a trailing `/`, bare names) are ignored.
/// - An assignment whose value is not quoted is discarded.
/// - An unterminated value ends extraction without adding an entry.
pub fn extract_attributes(raw: &str) -> AttributeMap<'_> {
    let mut attributes = AttributeMap::new();
    let mut scanner = Scanner::new(raw.as_bytes());
    // Last run of non-whitespace bytes; the candidate name for the next `=`
    let mut name: Option<Span> = None;
    let mut in_run = false;

    while let Some(b) = scanner.peek() {
        let pos = scanner.position();
        match b {
            b'=' => {
                let candidate = name.take().map(|span| span.slice(raw));
                in_run = false;
                scanner.advance(1);
                scanner.skip_whitespace();

                if !matches!(scanner.peek(), Some(b'\'' | b'"')) {
                    continue;
                }
                scanner.advance(1);

                let value_start = scanner.position();
                let Some(value_end) = scanner.find_quote() else {
                    break;
                };

                if let Some(key) = candidate.filter(|key| !key.is_empty()) {
                    attributes.insert(key, &raw[value_start..value_end]);
                }
                scanner.set_position(value_end + 1);
            }
            b if is_whitespace(b) => {
                in_run = false;
                scanner.advance(1);
            }
            _ => {
                if !in_run {
                    name = Some(Span::new(pos, pos));
                    in_run = true;
                }
                if let Some(span) = name.as_mut() {
                    span.end = pos + 1;
                }
                scanner.advance(1);
            }
        }
    }

    attributes
}
