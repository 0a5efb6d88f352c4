//! Parallel Scanning
//!
//! Uses Rayon to scan many independent documents at once. The tokenizer
//! keeps no state between scans, so each document gets its own handler and
//! no coordination is needed.

use rayon::prelude::*;

use crate::core::handler::SaxHandler;
use crate::core::tokenizer::scan;
use crate::sax::collector::parse_owned_events;
use crate::sax::events::OwnedEvent;

/// Scan every document in parallel and return their owned events, in input
/// order.
pub fn parse_many<S>(documents: &[S]) -> Vec<Vec<OwnedEvent>>
where
    S: AsRef<str> + Sync,
{
    documents
        .par_iter()
        .map(|document| parse_owned_events(document.as_ref()))
        .collect()
}

/// Scan every document in parallel with a fresh handler from `make_handler`
/// (called with the document's index) and return the handlers, in input
/// order.
pub fn scan_each<S, H, F>(documents: &[S], make_handler: F) -> Vec<H>
where
    S: AsRef<str> + Sync,
    H: for<'a> SaxHandler<'a> + Send,
    F: Fn(usize) -> H + Sync + Send,
{
    documents
        .par_iter()
        .enumerate()
        .map(|(index, document)| {
            let mut handler = make_handler(index);
            scan(document.as_ref(), &mut handler);
            handler
        })
        .collect()
}
