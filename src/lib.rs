//! FastSax - single-pass, callback-driven scanner for well-formed markup
//!
//! Recognizes element starts and ends, text, comments and CDATA sections
//! in one forward pass and reports each to a handler. Values are handed out
//! as lazy accessors: text is sliced and attributes are parsed only if the
//! consumer asks.
//!
//! Entry points:
//! - [`FastSax`]: five assignable callbacks and a `parse` method
//! - [`scan`] / [`try_scan`]: stateless scan into a [`SaxHandler`] or
//!   [`TrySaxHandler`]
//! - [`parse_events`]: collect events into a `Vec`
//! - [`parse_many`] / [`scan_each`]: many documents in parallel (feature
//!   `parallel`)
//!
//! Not a validating processor. Entities are not decoded, namespaces are not
//! resolved, DOCTYPE and processing instructions are not understood.
//! Malformed input never errors; the scan stops at the first token it
//! cannot close, and events already fired stand.
//!
//! ```
//! use fastsax::{parse_owned_events, OwnedEvent};
//!
//! let events = parse_owned_events("<dimension height='1080'>tall</dimension>");
//! assert_eq!(
//!     events,
//!     [
//!         OwnedEvent::start_with("dimension", [("height", "1080")]),
//!         OwnedEvent::Text("tall".into()),
//!         OwnedEvent::end("dimension"),
//!     ]
//! );
//! ```

mod core;
mod error;
mod sax;
mod span;
mod strategy;

pub use crate::core::attributes::{extract_attributes, AttributeMap, AttributesRef};
pub use crate::core::encoding::{decode, Encoding};
pub use crate::core::handler::{SaxHandler, TrySaxHandler};
pub use crate::core::tokenizer::{scan, try_scan};
pub use error::DecodeError;
pub use sax::{parse_events, parse_owned_events, Event, EventCollector, EventKind, FastSax, OwnedEvent};
pub use span::{Span, TextRef};
#[cfg(feature = "parallel")]
pub use strategy::{parse_many, scan_each};
