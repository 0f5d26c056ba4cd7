use std::path::{Path, PathBuf};

use oxrdf::{NamedNode, Term};
use teicidoc::cidoc::vocab::{
    iri, P100_WAS_DEATH_OF, P14_CARRIED_OUT_BY, P168_PLACE_IS_DEFINED_BY, P4_HAS_TIME_SPAN,
    P82A_BEGIN_OF_THE_BEGIN, P82B_END_OF_THE_END, P89_FALLS_WITHIN, RDFS_LABEL, XSD_DATE,
    XSD_G_YEAR,
};
use teicidoc::cidoc::{
    coordinates_to_p168, entity_uri, make_birth_death_entities, map_org, map_person, map_place,
    CoordinateOptions, LifeEventKind, MappingConfig, RdfFormat, Subgraph,
};
use teicidoc::tei::{NodeQuery, PathExpr, XmlElement};

fn fixture_path(relative_path: &str) -> PathBuf {
    Path::new("tests/fixtures").join(relative_path)
}

fn load(relative_path: &str) -> XmlElement {
    let xml = std::fs::read_to_string(fixture_path(relative_path)).unwrap();
    XmlElement::parse(&xml).unwrap()
}

fn config() -> MappingConfig {
    let json = std::fs::read_to_string(fixture_path("mapping.json")).unwrap();
    MappingConfig::from_json(&json).unwrap()
}

fn entity<'a>(doc: &'a XmlElement, tag: &str, xml_id: &str) -> &'a XmlElement {
    doc.select(&PathExpr::descendant(tag))
        .into_iter()
        .find(|e| e.xml_id() == Some(xml_id))
        .unwrap()
}

fn literal_values(graph: &Subgraph, subject: &NamedNode, predicate: &str) -> Vec<String> {
    let mut values: Vec<String> = graph
        .objects(subject, predicate)
        .into_iter()
        .filter_map(|t| match t {
            Term::Literal(l) => Some(l.value().to_string()),
            _ => None,
        })
        .collect();
    values.sort();
    values
}

#[test]
fn test_person_label() {
    let doc = load("listperson.xml");
    let config = config();
    let person = entity(&doc, "person", "DWpers0091");
    let subject = entity_uri(person, &config);
    assert_eq!(subject.as_str(), "https://sk.acdh.oeaw.ac.at/DWpers0091");

    let graph = map_person(&subject, person, &config);
    assert_eq!(
        literal_values(&graph, &subject, RDFS_LABEL),
        vec!["Gulbransson, Olaf".to_string()]
    );

    let pref = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/appellation/0");
    let full = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/appellation/1");
    assert_eq!(
        literal_values(&graph, &pref, RDFS_LABEL),
        vec!["Gulbransson, Olaf".to_string()]
    );
    assert_eq!(
        literal_values(&graph, &full, RDFS_LABEL),
        vec!["Gulbransson, Olaf".to_string()]
    );
}

#[test]
fn test_person_life_events() {
    let doc = load("listperson.xml");
    let config = config();
    let person = entity(&doc, "person", "DWpers0091");
    let subject = entity_uri(person, &config);
    let graph = map_person(&subject, person, &config);

    let birth = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/birth");
    assert_eq!(
        literal_values(&graph, &birth, RDFS_LABEL),
        vec!["Geburt von Gulbransson, Olaf".to_string()]
    );
    let birth_span = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/birth/time-span");
    assert_eq!(
        literal_values(&graph, &birth_span, RDFS_LABEL),
        vec!["1873-05-26".to_string()]
    );

    let death = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/death");
    assert_eq!(
        graph.objects(&death, P100_WAS_DEATH_OF),
        vec![&Term::NamedNode(subject.clone())]
    );
    assert!(graph.mentions(&iri("https://sk.acdh.oeaw.ac.at/DWplace00140")));
}

#[test]
fn test_missing_death() {
    let doc = load("listperson.xml");
    let config = config();
    let person = entity(&doc, "person", "DWpers0042");
    let subject = entity_uri(person, &config);

    let death = make_birth_death_entities(
        &subject,
        person,
        &config.life_event_options(LifeEventKind::Death),
    );
    assert_eq!(
        death.event_uri.as_str(),
        "https://sk.acdh.oeaw.ac.at/DWpers0042/death"
    );
    assert_eq!(
        death.time_span_uri.as_str(),
        "https://sk.acdh.oeaw.ac.at/DWpers0042/death/time-span"
    );
    assert!(death.graph.is_empty());

    let graph = map_person(&subject, person, &config);
    assert!(!graph.mentions(&death.time_span_uri));
    assert!(!graph.mentions(&death.event_uri));
}

#[test]
fn test_uncertain_birth_interval() {
    let doc = load("listperson.xml");
    let config = config();
    let person = entity(&doc, "person", "DWpers0042");
    let subject = entity_uri(person, &config);
    let birth = make_birth_death_entities(
        &subject,
        person,
        &config.life_event_options(LifeEventKind::Birth),
    );

    let graph = &birth.graph;
    assert_eq!(
        graph.objects(&birth.event_uri, P4_HAS_TIME_SPAN),
        vec![&Term::NamedNode(birth.time_span_uri.clone())]
    );
    let bound = |predicate: &str| match graph.objects(&birth.time_span_uri, predicate)[0] {
        Term::Literal(l) => (l.value().to_string(), l.datatype().as_str().to_string()),
        other => panic!("expected literal, got {}", other),
    };
    assert_eq!(
        bound(P82A_BEGIN_OF_THE_BEGIN),
        ("1866".to_string(), XSD_G_YEAR.to_string())
    );
    assert_eq!(
        bound(P82B_END_OF_THE_END),
        ("1866-02-09".to_string(), XSD_DATE.to_string())
    );
    assert!(graph.objects(&birth.time_span_uri, RDFS_LABEL).is_empty());
}

#[test]
fn test_occupations_and_affiliations() {
    let doc = load("listperson.xml");
    let config = config();
    let person = entity(&doc, "person", "DWpers0091");
    let subject = entity_uri(person, &config);
    let graph = map_person(&subject, person, &config);

    let cartoonist = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/occupation/occ_karikaturist");
    assert_eq!(
        graph.objects(&cartoonist, P14_CARRIED_OUT_BY),
        vec![&Term::NamedNode(subject.clone())]
    );
    let painter = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/occupation/1");
    assert_eq!(
        literal_values(&graph, &painter, RDFS_LABEL),
        vec!["Maler und Grafiker".to_string()]
    );

    let joining = iri("https://sk.acdh.oeaw.ac.at/DWpers0091/joining/DWorg0001/0");
    assert_eq!(
        literal_values(&graph, &joining, RDFS_LABEL),
        vec!["Gulbransson, Olaf joins Simplicissimus".to_string()]
    );
    assert_eq!(graph.objects(&joining, P4_HAS_TIME_SPAN).len(), 1);
}

#[test]
fn test_place_coordinates() {
    let doc = load("listplace.xml");
    let config = config();

    let christiania = entity(&doc, "place", "DWplace00139");
    let subject = entity_uri(christiania, &config);
    let graph = map_place(&subject, christiania, &config);
    assert_eq!(
        literal_values(&graph, &subject, P168_PLACE_IS_DEFINED_BY),
        vec!["Point(456 123)".to_string()]
    );

    let inverse = CoordinateOptions {
        inverse: true,
        ..Default::default()
    };
    let graph = coordinates_to_p168(&subject, christiania, &inverse);
    assert_eq!(
        literal_values(&graph, &subject, P168_PLACE_IS_DEFINED_BY),
        vec!["Point(123 456)".to_string()]
    );

    let unknown = entity(&doc, "place", "DWplace00999");
    let subject = entity_uri(unknown, &config);
    let graph = map_place(&subject, unknown, &config);
    assert!(graph.objects(&subject, P168_PLACE_IS_DEFINED_BY).is_empty());
    assert!(!graph.is_empty());
}

#[test]
fn test_place_containment() {
    let doc = load("listplace.xml");
    let config = config();
    let vienna = entity(&doc, "place", "DWplace00092");
    let subject = entity_uri(vienna, &config);
    let graph = map_place(&subject, vienna, &config);

    assert_eq!(
        graph.objects(&subject, P89_FALLS_WITHIN),
        vec![&Term::NamedNode(iri("https://sk.acdh.oeaw.ac.at/DWplace00010"))]
    );
    assert_eq!(
        literal_values(&graph, &subject, P168_PLACE_IS_DEFINED_BY),
        vec!["Point(16.3738 48.2082)".to_string()]
    );
}

#[test]
fn test_serialization_end_to_end() {
    let config = config();
    let mut graph = Subgraph::new();
    for (file, tag) in [
        ("listperson.xml", "person"),
        ("listplace.xml", "place"),
        ("listorg.xml", "org"),
    ] {
        let doc = load(file);
        for element in doc.select(&PathExpr::descendant(tag)) {
            let subject = entity_uri(element, &config);
            let fragment = match tag {
                "person" => map_person(&subject, element, &config),
                "place" => map_place(&subject, element, &config),
                _ => map_org(&subject, element, &config),
            };
            graph.merge(fragment);
        }
    }
    assert!(!graph.is_empty());

    let turtle = graph.to_string(RdfFormat::Turtle).unwrap();
    assert!(turtle.contains("@prefix crm: <http://www.cidoc-crm.org/cidoc-crm/>"));
    assert!(turtle.contains("crm:E67_Birth"));
    assert_eq!(turtle, graph.to_string(RdfFormat::Turtle).unwrap());

    let ntriples = graph.to_string(RdfFormat::NTriples).unwrap();
    assert!(ntriples.contains(
        "<https://sk.acdh.oeaw.ac.at/DWpers0091/birth/time-span> <http://www.cidoc-crm.org/cidoc-crm/P82a_begin_of_the_begin> \"1873-05-26\"^^<http://www.w3.org/2001/XMLSchema#date> ."
    ));
    assert_eq!(ntriples.lines().count(), graph.len());
}

#[test]
fn test_parallel_mapping_merges_to_same_graph() {
    let doc = load("listperson.xml");
    let config = config();
    let persons = doc.select(&PathExpr::descendant("person"));

    let sequential: Subgraph = persons
        .iter()
        .map(|p| map_person(&entity_uri(*p, &config), *p, &config))
        .collect();

    let parallel: Subgraph = std::thread::scope(|scope| {
        let handles: Vec<_> = persons
            .iter()
            .rev()
            .map(|p| {
                let config = &config;
                scope.spawn(move || map_person(&entity_uri(*p, config), *p, config))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
