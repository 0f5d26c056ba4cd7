//! RDF serialization support for Subgraph.
//!
//! Serializes mapped graphs to the common RDF formats using the oxrdfio
//! library. Triples are written in a stable order so repeated runs over the
//! same input produce identical files (modulo generated UUIDs).

use std::io::Write;

use oxrdf::Triple;
use oxrdfio::{RdfFormat as OxRdfFormat, RdfSerializer};

use super::error::RdfError;
use super::graph::Subgraph;
use super::vocab::PREFIXES;

/// Supported RDF serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle format (.ttl) - compact and human-readable
    Turtle,
    /// N-Triples format (.nt) - simple line-based format
    NTriples,
    /// RDF/XML format (.rdf, .xml) - XML serialization
    RdfXml,
}

impl RdfFormat {
    /// Converts this RdfFormat to the corresponding oxrdfio format.
    fn to_oxrdf_format(self) -> OxRdfFormat {
        match self {
            RdfFormat::Turtle => OxRdfFormat::Turtle,
            RdfFormat::NTriples => OxRdfFormat::NTriples,
            RdfFormat::RdfXml => OxRdfFormat::RdfXml,
        }
    }

    /// Conventional file extension, without the dot.
    pub fn file_extension(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
            RdfFormat::RdfXml => "rdf",
        }
    }
}

impl Subgraph {
    /// Writes the graph to the provided writer in the specified format.
    ///
    /// Turtle and RDF/XML output declare the `crm`, `rdf`, `rdfs`, `owl`,
    /// `xsd` and `geo` prefixes.
    ///
    /// # Errors
    ///
    /// Returns `RdfError::Serialization` if writing fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::fs::File;
    /// use teicidoc::cidoc::RdfFormat;
    ///
    /// let file = File::create("persons.ttl")?;
    /// graph.write(file, RdfFormat::Turtle)?;
    /// ```
    pub fn write<W: Write>(&self, writer: W, format: RdfFormat) -> Result<(), RdfError> {
        let mut serializer = RdfSerializer::from_format(format.to_oxrdf_format());
        if format != RdfFormat::NTriples {
            for (prefix, namespace) in PREFIXES {
                serializer = serializer.with_prefix(*prefix, *namespace).map_err(|e| {
                    RdfError::InvalidPrefix {
                        prefix: prefix.to_string(),
                        reason: e.to_string(),
                    }
                })?;
            }
        }
        let mut serializer = serializer.for_writer(writer);

        for triple in self.sorted_triples() {
            serializer
                .serialize_triple(triple)
                .map_err(|e: std::io::Error| RdfError::Serialization(e.to_string()))?;
        }

        serializer
            .finish()
            .map_err(|e: std::io::Error| RdfError::Serialization(e.to_string()))?;

        Ok(())
    }

    /// Serializes the graph to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns `RdfError::Serialization` if serialization fails or the output
    /// is not valid UTF-8.
    pub fn to_string(&self, format: RdfFormat) -> Result<String, RdfError> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, format)?;

        String::from_utf8(buffer)
            .map_err(|e| RdfError::Serialization(format!("Invalid UTF-8 in output: {}", e)))
    }

    fn sorted_triples(&self) -> Vec<&Triple> {
        let mut keyed: Vec<(String, &Triple)> =
            self.iter().map(|t| (t.to_string(), t)).collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, t)| t).collect()
    }
}
