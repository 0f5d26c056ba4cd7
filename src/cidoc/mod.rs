//! CIDOC-CRM output side.
//!
//! Every mapper takes a subject URI, a TEI element (anything implementing
//! [`NodeQuery`](crate::tei::NodeQuery)) and an options struct, and returns a
//! fresh [`Subgraph`]. Absent or malformed input yields an empty subgraph,
//! never an error. Callers merge the fragments into the graph they own and
//! serialize it with [`Subgraph::write`].
//!
//! # Example
//!
//! ```ignore
//! use teicidoc::cidoc::{entity_uri, map_person, MappingConfig, RdfFormat, Subgraph};
//! use teicidoc::tei::{NodeQuery, PathExpr, XmlElement};
//!
//! let config = MappingConfig::from_json(&std::fs::read_to_string("mapping.json")?)?;
//! let doc = XmlElement::parse(&std::fs::read_to_string("listperson.xml")?)?;
//!
//! let mut graph = Subgraph::new();
//! for person in doc.select(&PathExpr::descendant("person")) {
//!     let subject = entity_uri(person, &config);
//!     graph.merge(map_person(&subject, person, &config));
//! }
//! println!("{}", graph.to_string(RdfFormat::Turtle)?);
//! ```

pub mod affiliations;
pub mod appellations;
pub mod config;
pub mod coordinates;
pub mod dates;
pub mod entity;
pub mod error;
pub mod events;
pub mod graph;
pub mod identifiers;
pub mod labels;
pub mod occupations;
pub mod rdf_io;
pub mod spatial;
pub mod text;
pub mod time_span;
pub mod uri;
pub mod vocab;

pub use affiliations::{make_affiliations, AffiliationOptions};
pub use appellations::{make_appellations, AppellationOptions};
pub use config::MappingConfig;
pub use coordinates::{coordinates_to_p168, CoordinateOptions};
pub use dates::{
    date_to_literal, extract_interval, DateInterval, DateLiteral, DatePrecision, MISSING_DATE,
};
pub use entity::{entity_uri, map_org, map_person, map_place};
pub use error::{ConfigError, RdfError};
pub use events::{
    make_birth_death_entities, make_events, BirthDeathOptions, EventOptions, LifeEvent,
    LifeEventKind,
};
pub use graph::Subgraph;
pub use identifiers::{make_e42_identifiers, IdentifierOptions};
pub use labels::{entity_label, make_entity_label};
pub use occupations::{make_occupations, OccupationOptions};
pub use rdf_io::RdfFormat;
pub use spatial::{p89_falls_within, SpatialOptions};
pub use text::normalize_string;
pub use time_span::{create_e52, create_typed_e52, interval_to_e52};
pub use uri::{make_uri, UriFactory};
