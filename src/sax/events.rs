//! SAX Event Types
//!
//! Recorded form of the five scan events, borrowed from the input or owned.

use std::collections::HashMap;
use std::fmt;

use crate::core::attributes::AttributesRef;
use crate::span::TextRef;

/// The five kinds of event the scanner reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Text,
    ElementStart,
    ElementEnd,
    CData,
    Comment,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Text => "text",
            EventKind::ElementStart => "element start",
            EventKind::ElementEnd => "element end",
            EventKind::CData => "CDATA",
            EventKind::Comment => "comment",
        })
    }
}

/// A scan event
///
/// Text and attributes stay lazy; nothing is copied until asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Text between two tokens
    Text(TextRef<'a>),

    /// Start of an element
    StartElement {
        /// Element name
        name: &'a str,
        /// Attribute accessor
        attributes: AttributesRef<'a>,
    },

    /// End of an element, explicit or from a self-closing tag
    EndElement {
        /// Element name
        name: &'a str,
    },

    /// CDATA section content (excluding markers)
    CData(TextRef<'a>),

    /// Comment content (excluding markers)
    Comment(TextRef<'a>),
}

impl<'a> Event<'a> {
    /// Which of the five kinds this is
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Text(_) => EventKind::Text,
            Event::StartElement { .. } => EventKind::ElementStart,
            Event::EndElement { .. } => EventKind::ElementEnd,
            Event::CData(_) => EventKind::CData,
            Event::Comment(_) => EventKind::Comment,
        }
    }

    /// Check if this is a start element event
    #[inline]
    pub fn is_start_element(&self) -> bool {
        matches!(self, Event::StartElement { .. })
    }

    /// Check if this is an end element event
    #[inline]
    pub fn is_end_element(&self) -> bool {
        matches!(self, Event::EndElement { .. })
    }

    /// Check if this is a text event
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Event::Text(_))
    }

    /// Get the element name if this is a start or end element
    pub fn element_name(&self) -> Option<&'a str> {
        match self {
            Event::StartElement { name, .. } | Event::EndElement { name } => Some(*name),
            _ => None,
        }
    }

    /// Copy everything out of the input, parsing attributes
    pub fn into_owned(self) -> OwnedEvent {
        match self {
            Event::Text(text) => OwnedEvent::Text(text.to_string()),
            Event::StartElement { name, attributes } => OwnedEvent::StartElement {
                name: name.to_owned(),
                attributes: attributes
                    .parse()
                    .into_iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect(),
            },
            Event::EndElement { name } => OwnedEvent::EndElement {
                name: name.to_owned(),
            },
            Event::CData(content) => OwnedEvent::CData(content.to_string()),
            Event::Comment(content) => OwnedEvent::Comment(content.to_string()),
        }
    }
}

/// Owned version of [`Event`] for storage or sending across threads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedEvent {
    Text(String),
    StartElement {
        name: String,
        attributes: HashMap<String, String>,
    },
    EndElement {
        name: String,
    },
    CData(String),
    Comment(String),
}

impl OwnedEvent {
    /// Start element with no attributes
    pub fn start(name: impl Into<String>) -> Self {
        OwnedEvent::StartElement {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Start element with the given attributes
    pub fn start_with<I, K, V>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        OwnedEvent::StartElement {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// End element
    pub fn end(name: impl Into<String>) -> Self {
        OwnedEvent::EndElement { name: name.into() }
    }

    /// Which of the five kinds this is
    pub fn kind(&self) -> EventKind {
        match self {
            OwnedEvent::Text(_) => EventKind::Text,
            OwnedEvent::StartElement { .. } => EventKind::ElementStart,
            OwnedEvent::EndElement { .. } => EventKind::ElementEnd,
            OwnedEvent::CData(_) => EventKind::CData,
            OwnedEvent::Comment(_) => EventKind::Comment,
        }
    }
}
