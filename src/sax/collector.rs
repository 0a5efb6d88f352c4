//! SAX Collector
//!
//! Implements SaxHandler to record events in document order.

use super::events::{Event, OwnedEvent};
use crate::core::attributes::AttributesRef;
use crate::core::handler::SaxHandler;
use crate::core::tokenizer::scan;
use crate::span::TextRef;

/// Collector that gathers events during scanning
///
/// Events borrow from the input; attributes stay unparsed until asked for.
#[derive(Debug, Default)]
pub struct EventCollector<'a> {
    events: Vec<Event<'a>>,
}

impl<'a> EventCollector<'a> {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity
    pub fn with_capacity(events: usize) -> Self {
        Self {
            events: Vec::with_capacity(events),
        }
    }

    /// Get the collected events as a slice
    pub fn events(&self) -> &[Event<'a>] {
        &self.events
    }

    /// Take the collected events
    pub fn into_events(self) -> Vec<Event<'a>> {
        self.events
    }

    /// Get number of collected events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl<'a> SaxHandler<'a> for EventCollector<'a> {
    fn text(&mut self, text: TextRef<'a>) {
        self.events.push(Event::Text(text));
    }

    fn element_start(&mut self, name: &'a str, attributes: AttributesRef<'a>) {
        self.events.push(Event::StartElement { name, attributes });
    }

    fn element_end(&mut self, name: &'a str) {
        self.events.push(Event::EndElement { name });
    }

    fn cdata(&mut self, content: TextRef<'a>) {
        self.events.push(Event::CData(content));
    }

    fn comment(&mut self, content: TextRef<'a>) {
        self.events.push(Event::Comment(content));
    }
}

/// Parse input and return its events
pub fn parse_events(input: &str) -> Vec<Event<'_>> {
    let mut collector = EventCollector::new();
    scan(input, &mut collector);
    collector.into_events()
}

/// Parse input and return owned events, attributes parsed
pub fn parse_owned_events(input: &str) -> Vec<OwnedEvent> {
    parse_events(input)
        .into_iter()
        .map(Event::into_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_parse() {
        let events = parse_events("<root><child/></root>");

        assert_eq!(events.len(), 4); // start root, start+end child, end root
        assert!(events[0].is_start_element());
        assert_eq!(events[2].element_name(), Some("child"));
        assert!(events[3].is_end_element());
    }

    #[test]
    fn test_with_text() {
        let events = parse_events("<a>hello</a>");

        assert_eq!(events.len(), 3); // start a, text, end a
        assert!(events[1].is_text());
    }

    #[test]
    fn test_with_attributes() {
        let events = parse_events("<root id=\"1\" name=\"test\"/>");

        assert_eq!(events.len(), 2); // start+end (self-closing)

        if let Event::StartElement { attributes, .. } = &events[0] {
            let map = attributes.parse();
            assert_eq!(map.len(), 2);
            assert_eq!(map["name"], "test");
        } else {
            panic!("Expected StartElement");
        }
    }

    #[test]
    fn test_events_borrow_input() {
        let input = String::from("<a>text</a>");
        let events = parse_events(&input);
        let Event::Text(text) = events[1] else {
            panic!("Expected Text");
        };
        assert!(std::ptr::eq(text.as_str().as_ptr(), input[3..].as_ptr()));
    }

    #[test]
    fn test_owned_events() {
        assert_eq!(
            parse_owned_events("<r>x<!--c--><![CDATA[d]]></r>"),
            [
                OwnedEvent::start("r"),
                OwnedEvent::Text("x".into()),
                OwnedEvent::Comment("c".into()),
                OwnedEvent::CData("d".into()),
                OwnedEvent::end("r"),
            ]
        );
    }

    #[test]
    fn test_collector_counts() {
        let mut collector = EventCollector::with_capacity(4);
        scan("<a/><b/>", &mut collector);
        assert_eq!(collector.event_count(), 4);
        assert_eq!(collector.events()[2].element_name(), Some("b"));
    }
}
