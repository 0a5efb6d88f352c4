//! Markup Tokenizer
//!
//! Single forward pass over the input. Recognizes element starts, element
//! ends, comments, CDATA sections and the text between them, and reports
//! each to a handler as soon as its boundary is known.
//!
//! Malformed input never produces an error: the affected event is
//! suppressed, or the scan stops at the first token whose closing marker is
//! missing. Each such case is logged at `debug` level.

use std::ops::ControlFlow;

use log::debug;

use super::attributes::AttributesRef;
use super::handler::{SaxHandler, TrySaxHandler};
use super::scanner::Scanner;
use crate::span::{Span, TextRef};

const BOM: &str = "\u{FEFF}";

const OPEN_BRACKET: u8 = b'<';
const FORWARD_SLASH: u8 = b'/';
const EXCLAMATION_POINT: u8 = b'!';
const ELEMENT_SUFFIX: u8 = b'>';

const CDATA_PREFIX: &[u8] = b"[CDATA[";
const CDATA_SUFFIX: &[u8] = b"]]>";
const COMMENT_PREFIX: &[u8] = b"--";
const COMMENT_SUFFIX: &[u8] = b"-->";

/// What kind of token is being resolved after a `<`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Idle between tokens, or an unrecognized `<!` construct
    None,
    /// `<name ...>` or `<name .../>`
    OpeningElement,
    /// `</name>`
    ClosingElement,
    /// `<!-- ... -->`
    Comment,
    /// `<![CDATA[ ... ]]>`
    EscapedBlock,
}

/// Scan `input`, reporting every event to `handler` in document order.
///
/// Stateless: concurrent scans of different inputs need no coordination.
pub fn scan<'a, H>(input: &'a str, handler: &mut H)
where
    H: SaxHandler<'a> + ?Sized,
{
    match try_scan(input, handler) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Scan `input` with a fallible handler.
///
/// Returns the first error a handler method raised. Malformed input is not
/// an error.
pub fn try_scan<'a, H>(input: &'a str, handler: &mut H) -> Result<(), H::Error>
where
    H: TrySaxHandler<'a> + ?Sized,
{
    Tokenizer::new(input).run(handler)
}

/// Cursor state for one scan
struct Tokenizer<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
    /// Where the pending text span begins
    text_start: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        let start = if input.starts_with(BOM) { BOM.len() } else { 0 };
        let mut scanner = Scanner::new(input.as_bytes());
        scanner.set_position(start);
        Tokenizer {
            input,
            scanner,
            text_start: start,
        }
    }

    fn run<H>(mut self, handler: &mut H) -> Result<(), H::Error>
    where
        H: TrySaxHandler<'a> + ?Sized,
    {
        // Text after the last `<` is never flushed
        while let Some(open) = self.scanner.find_byte(OPEN_BRACKET) {
            if open > self.text_start {
                handler.text(TextRef::new(self.input, Span::new(self.text_start, open)))?;
            }
            self.scanner.set_position(open + 1);

            let flow = match self.classify() {
                Mode::None => {
                    debug!("unrecognized `<!` construct at byte {open}, scan stopped");
                    ControlFlow::Break(())
                }
                Mode::OpeningElement => self.opening_element(open, handler)?,
                Mode::ClosingElement => self.closing_element(open, handler)?,
                Mode::Comment => {
                    self.delimited(open, COMMENT_SUFFIX, handler, |h, content| h.comment(content))?
                }
                Mode::EscapedBlock => {
                    self.delimited(open, CDATA_SUFFIX, handler, |h, content| h.cdata(content))?
                }
            };

            if flow.is_break() {
                break;
            }
            self.text_start = self.scanner.position();
        }
        Ok(())
    }

    /// Decide the mode from the bytes after `<`, moving the cursor to the
    /// first byte of the token body.
    fn classify(&mut self) -> Mode {
        match self.scanner.peek() {
            Some(FORWARD_SLASH) => {
                self.scanner.advance(1);
                Mode::ClosingElement
            }
            Some(EXCLAMATION_POINT) => {
                if self.scanner.starts_with_at(1, CDATA_PREFIX) {
                    self.scanner.advance(1 + CDATA_PREFIX.len());
                    Mode::EscapedBlock
                } else if self.scanner.starts_with_at(1, COMMENT_PREFIX) {
                    self.scanner.advance(1 + COMMENT_PREFIX.len());
                    Mode::Comment
                } else {
                    Mode::None
                }
            }
            _ => Mode::OpeningElement,
        }
    }

    fn opening_element<H>(
        &mut self,
        open: usize,
        handler: &mut H,
    ) -> Result<ControlFlow<()>, H::Error>
    where
        H: TrySaxHandler<'a> + ?Sized,
    {
        let name_start = self.scanner.position();
        let Some(suffix) = self.scanner.find_byte(ELEMENT_SUFFIX) else {
            debug!("element at byte {open} has no closing `>`, scan stopped");
            return Ok(ControlFlow::Break(()));
        };

        let name_end = self.scanner.name_end(name_start, suffix);
        let name = &self.input[name_start..name_end];

        if name.is_empty() {
            debug!("element at byte {open} has an empty name, event suppressed");
        } else {
            let attributes = AttributesRef::new(self.input, Span::new(name_end, suffix));
            handler.element_start(name, attributes)?;

            if self.scanner.byte_at(suffix - 1) == Some(FORWARD_SLASH) {
                handler.element_end(name)?;
            }
        }

        self.scanner.set_position(suffix + 1);
        Ok(ControlFlow::Continue(()))
    }

    fn closing_element<H>(
        &mut self,
        open: usize,
        handler: &mut H,
    ) -> Result<ControlFlow<()>, H::Error>
    where
        H: TrySaxHandler<'a> + ?Sized,
    {
        let name_start = self.scanner.position();
        let Some(suffix) = self.scanner.find_byte(ELEMENT_SUFFIX) else {
            debug!("closing tag at byte {open} has no `>`, scan stopped");
            return Ok(ControlFlow::Break(()));
        };

        let name = &self.input[name_start..suffix];
        if name.is_empty() {
            debug!("closing tag at byte {open} has an empty name, event suppressed");
        } else {
            handler.element_end(name)?;
        }

        self.scanner.set_position(suffix + 1);
        Ok(ControlFlow::Continue(()))
    }

    /// Comment or CDATA: everything up to `marker` is the content
    fn delimited<H, F>(
        &mut self,
        open: usize,
        marker: &[u8],
        handler: &mut H,
        emit: F,
    ) -> Result<ControlFlow<()>, H::Error>
    where
        H: TrySaxHandler<'a> + ?Sized,
        F: FnOnce(&mut H, TextRef<'a>) -> Result<(), H::Error>,
    {
        let content_start = self.scanner.position();
        let Some(content_end) = self.scanner.find_marker(marker) else {
            debug!("block at byte {open} is never closed, scan stopped");
            return Ok(ControlFlow::Break(()));
        };

        emit(handler, TextRef::new(self.input, Span::new(content_start, content_end)))?;

        self.scanner.set_position(content_end + marker.len());
        Ok(ControlFlow::Continue(()))
    }
}
