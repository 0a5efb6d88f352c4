//! Callback-slot parser
//!
//! [`FastSax`] holds one optional callback per event kind and dispatches the
//! tokenizer's events to them.

use std::fmt;

use crate::core::attributes::AttributesRef;
use crate::core::encoding::decode;
use crate::core::handler::SaxHandler;
use crate::core::tokenizer::scan;
use crate::error::DecodeError;
use crate::span::TextRef;

type TextCallback<'h> = Box<dyn FnMut(TextRef<'_>) + 'h>;
type ElementStartCallback<'h> = Box<dyn FnMut(&str, AttributesRef<'_>) + 'h>;
type ElementEndCallback<'h> = Box<dyn FnMut(&str) + 'h>;

/// SAX-style parser with five assignable callbacks.
///
/// Every slot starts empty, which behaves as a no-op. Registering a
/// callback replaces whatever the slot held.
///
/// ```
/// use fastsax::FastSax;
///
/// let mut names = Vec::new();
/// let mut parser = FastSax::new();
/// parser.on_element_start(|name, _| names.push(name.to_owned()));
/// parser.parse("<a><b/></a>");
/// drop(parser);
///
/// assert_eq!(names, ["a", "b"]);
/// ```
///
/// Accessors handed to callbacks ([`TextRef`], [`AttributesRef`]) are only
/// valid for the duration of the call; copy out what you need to keep.
/// `parse` takes `&mut self`, so a callback cannot re-enter `parse` on the
/// parser it is registered with.
#[derive(Default)]
pub struct FastSax<'h> {
    on_text: Option<TextCallback<'h>>,
    on_element_start: Option<ElementStartCallback<'h>>,
    on_element_end: Option<ElementEndCallback<'h>>,
    on_cdata: Option<TextCallback<'h>>,
    on_comment: Option<TextCallback<'h>>,
}

impl<'h> FastSax<'h> {
    /// Create a parser with no callbacks registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired for text between tokens. Text is never trimmed; indentation
    /// and other whitespace produce text events too.
    pub fn on_text<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(TextRef<'_>) + 'h,
    {
        self.on_text = Some(Box::new(callback));
        self
    }

    /// Fired for each element start with its name and an attribute
    /// accessor.
    pub fn on_element_start<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&str, AttributesRef<'_>) + 'h,
    {
        self.on_element_start = Some(Box::new(callback));
        self
    }

    /// Fired for each element end, including right after the start of a
    /// self-closing element.
    pub fn on_element_end<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&str) + 'h,
    {
        self.on_element_end = Some(Box::new(callback));
        self
    }

    /// Fired for each CDATA section with its verbatim content.
    pub fn on_cdata<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(TextRef<'_>) + 'h,
    {
        self.on_cdata = Some(Box::new(callback));
        self
    }

    /// Fired for each comment with the text between `<!--` and `-->`.
    pub fn on_comment<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(TextRef<'_>) + 'h,
    {
        self.on_comment = Some(Box::new(callback));
        self
    }

    /// Drop all registered callbacks
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse a whole document, firing callbacks in document order.
    ///
    /// Malformed input is not reported; the scan stops silently at the
    /// first token it cannot close.
    pub fn parse(&mut self, input: &str) {
        scan(input, &mut Dispatch(self));
    }

    /// Decode a byte document (UTF-8, or UTF-16 with BOM) and parse it.
    pub fn parse_bytes(&mut self, input: &[u8]) -> Result<(), DecodeError> {
        let text = decode(input)?;
        self.parse(&text);
        Ok(())
    }
}

impl fmt::Debug for FastSax<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastSax")
            .field("on_text", &self.on_text.is_some())
            .field("on_element_start", &self.on_element_start.is_some())
            .field("on_element_end", &self.on_element_end.is_some())
            .field("on_cdata", &self.on_cdata.is_some())
            .field("on_comment", &self.on_comment.is_some())
            .finish()
    }
}

/// Routes tokenizer events to the registered slots
struct Dispatch<'p, 'h>(&'p mut FastSax<'h>);

impl<'a> SaxHandler<'a> for Dispatch<'_, '_> {
    fn text(&mut self, text: TextRef<'a>) {
        if let Some(callback) = self.0.on_text.as_mut() {
            callback(text);
        }
    }

    fn element_start(&mut self, name: &'a str, attributes: AttributesRef<'a>) {
        if let Some(callback) = self.0.on_element_start.as_mut() {
            callback(name, attributes);
        }
    }

    fn element_end(&mut self, name: &'a str) {
        if let Some(callback) = self.0.on_element_end.as_mut() {
            callback(name);
        }
    }

    fn cdata(&mut self, content: TextRef<'a>) {
        if let Some(callback) = self.0.on_cdata.as_mut() {
            callback(content);
        }
    }

    fn comment(&mut self, content: TextRef<'a>) {
        if let Some(callback) = self.0.on_comment.as_mut() {
            callback(content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_no_callbacks() {
        let mut parser = FastSax::new();
        parser.parse("<super>simple</super>");
    }

    #[test]
    fn test_reregistration_replaces() {
        let first = RefCell::new(0);
        let second = RefCell::new(0);

        let mut parser = FastSax::new();
        parser.on_element_end(|_| *first.borrow_mut() += 1);
        parser.on_element_end(|_| *second.borrow_mut() += 1);
        parser.parse("<a/><b></b>");
        drop(parser);

        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 2);
    }

    #[test]
    fn test_clear_resets_slots() {
        let count = RefCell::new(0);
        let mut parser = FastSax::new();
        parser.on_text(|_| *count.borrow_mut() += 1);
        parser.parse("<a>x</a>");
        parser.clear();
        parser.parse("<a>x</a>");
        drop(parser);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_chained_registration() {
        let log = RefCell::new(Vec::new());
        let mut parser = FastSax::new();
        parser
            .on_comment(|c| log.borrow_mut().push(format!("comment:{c}")))
            .on_cdata(|c| log.borrow_mut().push(format!("cdata:{c}")));
        parser.parse("<!--x--><![CDATA[y]]>");
        drop(parser);

        assert_eq!(log.into_inner(), ["comment:x", "cdata:y"]);
    }

    #[test]
    fn test_debug_shows_registered_slots() {
        let mut parser = FastSax::new();
        parser.on_text(|_| {});
        let debug = format!("{parser:?}");
        assert!(debug.contains("on_text: true"));
        assert!(debug.contains("on_comment: false"));
    }

    #[test]
    fn test_parse_bytes_utf16() {
        let mut names = Vec::new();
        let mut parser = FastSax::new();
        parser.on_element_start(|name, _| names.push(name.to_owned()));

        let utf16_le: Vec<u8> = [0xFF, 0xFE]
            .into_iter()
            .chain("<a><b/></a>".encode_utf16().flat_map(u16::to_le_bytes))
            .collect();
        assert_eq!(parser.parse_bytes(&utf16_le), Ok(()));
        drop(parser);

        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let mut parser = FastSax::new();
        assert!(matches!(
            parser.parse_bytes(&[b'<', 0xFF, b'>']),
            Err(DecodeError::InvalidUtf8 { valid_up_to: 1 })
        ));
    }
}
