//! Owned XML element tree built from `quick-xml` events.

use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::error::TeiError;
use super::query::{Child, NodeQuery};

/// A node in an [`XmlElement`]'s child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its attributes and children.
///
/// Element names are stored without their namespace prefix; attribute names
/// keep theirs (`xml:lang`, `xml:id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an empty element.
    pub fn new(name: &str) -> Self {
        Self {
            name: local_name(name).to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parses a document (or fragment with a single root) into its root element.
    ///
    /// # Errors
    ///
    /// Returns `TeiError` on malformed XML, an unclosed element, or a document
    /// without any element.
    pub fn parse(xml: &str) -> Result<XmlElement, TeiError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    stack.push(element_from_start(e)?);
                }
                Event::Empty(ref e) => {
                    let element = element_from_start(e)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(ref e) => {
                    let element = stack.pop().ok_or_else(|| {
                        TeiError::UnexpectedEnd(String::from_utf8_lossy(e.name().as_ref()).into_owned())
                    })?;
                    attach(&mut stack, &mut root, element);
                }
                Event::Text(ref e) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(TeiError::Unclosed(open.name));
        }
        root.ok_or(TeiError::NoRoot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Sets an attribute, replacing an existing value.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.retain(|(k, _)| k != name);
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    fn push_text(&mut self, text: &str) {
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }
}

impl FromStr for XmlElement {
    type Err = TeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        XmlElement::parse(s)
    }
}

impl NodeQuery for XmlElement {
    fn local_name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn children(&self) -> Vec<Child<'_, Self>> {
        self.children
            .iter()
            .map(|node| match node {
                XmlNode::Element(e) => Child::Element(e),
                XmlNode::Text(t) => Child::Text(t.as_str()),
            })
            .collect()
    }
}

fn local_name(qualified: &str) -> &str {
    qualified.rsplit(':').next().unwrap_or(qualified)
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, TeiError> {
    let qualified = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(&qualified);
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None => {
            if root.is_none() {
                *root = Some(element);
            } else {
                log::debug!("ignoring additional top-level element <{}>", element.name);
            }
        }
    }
}
