//! Example: Mapping a TEI person register to CIDOC-CRM
//!
//! Reads a TEI file, maps every `person`, `place` and `org` with the
//! default configuration (or a JSON configuration given as second argument)
//! and prints the graph as Turtle.
//!
//! Run with:
//! ```bash
//! cargo run --example tei_to_rdf -- tests/fixtures/listperson.xml tests/fixtures/mapping.json
//! ```

use teicidoc::cidoc::{entity_uri, map_org, map_person, map_place, MappingConfig, RdfFormat, Subgraph};
use teicidoc::tei::{NodeQuery, PathExpr, XmlElement};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or("usage: tei_to_rdf <tei file> [mapping.json]")?;
    let config = match args.next() {
        Some(path) => MappingConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => MappingConfig::default(),
    };

    let doc = XmlElement::parse(&std::fs::read_to_string(&input)?)?;

    let mut graph = Subgraph::new();
    for person in doc.select(&PathExpr::descendant("person")) {
        graph.merge(map_person(&entity_uri(person, &config), person, &config));
    }
    for place in doc.select(&PathExpr::descendant("place")) {
        graph.merge(map_place(&entity_uri(place, &config), place, &config));
    }
    for org in doc.select(&PathExpr::descendant("org")) {
        graph.merge(map_org(&entity_uri(org, &config), org, &config));
    }

    eprintln!("Generated {} triples from {}", graph.len(), input);
    println!("{}", graph.to_string(RdfFormat::Turtle)?);
    Ok(())
}
