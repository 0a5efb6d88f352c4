//! Handler traits
//!
//! The tokenizer reports what it finds through these traits. Text-like
//! payloads and attributes arrive as lazy accessors ([`TextRef`],
//! [`AttributesRef`]); nothing is sliced or parsed unless the handler asks.

use std::convert::Infallible;

use super::attributes::AttributesRef;
use crate::span::TextRef;

/// Trait for handling scan events
///
/// Every method defaults to a no-op, so implementors override only the
/// events they care about. `'a` is the lifetime of the input, which lets a
/// handler keep borrowed names and accessors past the call.
pub trait SaxHandler<'a> {
    /// Called for a non-empty run of text, immediately before the `<` that
    /// ends it. Whitespace is passed through untouched.
    fn text(&mut self, _text: TextRef<'a>) {}

    /// Called when an element's name and closing `>` have been found
    ///
    /// # Arguments
    /// * `name` - The element name
    /// * `attributes` - Accessor for the attribute map
    fn element_start(&mut self, _name: &'a str, _attributes: AttributesRef<'a>) {}

    /// Called for `</name>`, and right after `element_start` for `<name/>`
    fn element_end(&mut self, _name: &'a str) {}

    /// Called with the content between `<![CDATA[` and `]]>`, verbatim
    fn cdata(&mut self, _content: TextRef<'a>) {}

    /// Called with the content between `<!--` and `-->`
    fn comment(&mut self, _content: TextRef<'a>) {}
}

/// Fallible counterpart of [`SaxHandler`]
///
/// The first `Err` returned stops the scan and is handed back to the caller
/// of [`try_scan`](super::tokenizer::try_scan) unchanged. Events already
/// delivered stand.
///
/// Every [`SaxHandler`] is a `TrySaxHandler` whose error is [`Infallible`].
pub trait TrySaxHandler<'a> {
    /// Error raised by the handler
    type Error;

    /// See [`SaxHandler::text`]
    fn text(&mut self, _text: TextRef<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// See [`SaxHandler::element_start`]
    fn element_start(
        &mut self,
        _name: &'a str,
        _attributes: AttributesRef<'a>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// See [`SaxHandler::element_end`]
    fn element_end(&mut self, _name: &'a str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// See [`SaxHandler::cdata`]
    fn cdata(&mut self, _content: TextRef<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// See [`SaxHandler::comment`]
    fn comment(&mut self, _content: TextRef<'a>) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, H: SaxHandler<'a> + ?Sized> TrySaxHandler<'a> for H {
    type Error = Infallible;

    #[inline]
    fn text(&mut self, text: TextRef<'a>) -> Result<(), Infallible> {
        SaxHandler::text(self, text);
        Ok(())
    }

    #[inline]
    fn element_start(
        &mut self,
        name: &'a str,
        attributes: AttributesRef<'a>,
    ) -> Result<(), Infallible> {
        SaxHandler::element_start(self, name, attributes);
        Ok(())
    }

    #[inline]
    fn element_end(&mut self, name: &'a str) -> Result<(), Infallible> {
        SaxHandler::element_end(self, name);
        Ok(())
    }

    #[inline]
    fn cdata(&mut self, content: TextRef<'a>) -> Result<(), Infallible> {
        SaxHandler::cdata(self, content);
        Ok(())
    }

    #[inline]
    fn comment(&mut self, content: TextRef<'a>) -> Result<(), Infallible> {
        SaxHandler::comment(self, content);
        Ok(())
    }
}
