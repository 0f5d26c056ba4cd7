//! Mapping of TEI prosopographical records to CIDOC-CRM RDF.
//!
//! [`tei`] reads TEI/XML into an element tree and resolves path
//! expressions against it. [`cidoc`] turns persons, places and
//! organizations into CIDOC-CRM subgraphs and serializes them.

pub mod cidoc;
pub mod tei;
