//! TEI/XML input side.
//!
//! Parses TEI documents into an owned element tree and locates sub-elements
//! and attribute values with typed [`PathExpr`]s. The mapping functions in
//! [`crate::cidoc`] only depend on the [`NodeQuery`] trait, so any tree that
//! implements it can be fed to them.
//!
//! # Example
//!
//! ```ignore
//! use teicidoc::tei::{NodeQuery, PathExpr, XmlElement};
//!
//! let doc = XmlElement::parse(&std::fs::read_to_string("listperson.xml")?)?;
//! for person in doc.select(&PathExpr::descendant("person")) {
//!     println!("{:?}", person.xml_id());
//! }
//! ```

pub mod error;
pub mod node;
pub mod path;
pub mod query;

pub use error::{PathError, TeiError};
pub use node::{XmlElement, XmlNode};
pub use path::{Axis, NodeTest, PathExpr, Predicate, Step};
pub use query::{Child, NodeQuery};
