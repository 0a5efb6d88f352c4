//! SAX (Simple API for XML) Module
//!
//! Consumer-facing side of the tokenizer.
//!
//! ## Architecture
//!
//! ```text
//! Tokenizer ---> Dispatch ------> FastSax callback slots
//!     |
//!     +--------> EventCollector -> Event[] -> OwnedEvent[]
//! ```
//!
//! ## Event Types
//!
//! - `Text` - Character data between tokens, untrimmed
//! - `StartElement` - Element name and lazy attribute accessor
//! - `EndElement` - Explicit `</name>` or synthesized for `<name/>`
//! - `CData` - CDATA section content, verbatim
//! - `Comment` - Comment content
//!
//! ## Memory Efficiency
//!
//! Events borrow from the input. Text is sliced and attributes are parsed
//! only when the consumer asks for them.

pub mod collector;
pub mod events;
pub mod parser;

pub use collector::{parse_events, parse_owned_events, EventCollector};
pub use events::{Event, EventKind, OwnedEvent};
pub use parser::FastSax;
