//! Error types for TEI parsing and path expressions.

use thiserror::Error;

/// Errors raised while building an [`XmlElement`](super::XmlElement) tree.
#[derive(Debug, Error)]
pub enum TeiError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Document has no root element")]
    NoRoot,

    #[error("Element `{0}` is not closed")]
    Unclosed(String),

    #[error("Unexpected closing tag `{0}`")]
    UnexpectedEnd(String),
}

/// Errors raised while parsing a [`PathExpr`](super::PathExpr).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Empty path expression")]
    Empty,

    #[error("Unexpected `{found}` at position {position} in `{path}`")]
    Unexpected {
        path: String,
        position: usize,
        found: char,
    },

    #[error("Invalid predicate `[{0}]`")]
    InvalidPredicate(String),

    #[error("`{0}` must be the last step of a path")]
    TerminalNotLast(String),
}
