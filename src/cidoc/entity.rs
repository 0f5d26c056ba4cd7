//! Whole-entity mapping for `person`, `place` and `org` elements.
//!
//! Each driver runs the mappers that apply to its entity with options taken
//! from one [`MappingConfig`] and merges their output.

use oxrdf::NamedNode;

use crate::tei::NodeQuery;

use super::affiliations::make_affiliations;
use super::appellations::make_appellations;
use super::config::MappingConfig;
use super::coordinates::coordinates_to_p168;
use super::events::{make_birth_death_entities, make_events, LifeEventKind};
use super::graph::{language_literal, Subgraph};
use super::identifiers::make_e42_identifiers;
use super::labels::entity_label;
use super::occupations::make_occupations;
use super::spatial::p89_falls_within;
use super::uri::reference_uri;
use super::vocab::RDFS_LABEL;

/// Subject URI of an entity: `{domain}{xml:id}`, or a freshly minted
/// `{domain}/{version}/{element}/{uuid}` for elements without a usable id.
pub fn entity_uri<N: NodeQuery>(node: &N, config: &MappingConfig) -> NamedNode {
    node.xml_id()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .and_then(|id| reference_uri(&config.domain, id))
        .unwrap_or_else(|| config.uri_factory().make(node.local_name()))
}

/// Maps a `person`: label, names, identifiers, birth, death, events,
/// occupations and affiliations.
pub fn map_person<N: NodeQuery>(subject: &NamedNode, node: &N, config: &MappingConfig) -> Subgraph {
    let mut graph = common(subject, node, config);

    for kind in [LifeEventKind::Birth, LifeEventKind::Death] {
        let event = make_birth_death_entities(subject, node, &config.life_event_options(kind));
        graph.merge(event.graph);
    }
    graph.merge(make_events(subject, node, &config.event_options()).0);
    graph.merge(make_occupations(subject, node, &config.occupation_options()).0);

    let person_label = entity_label(node, &config.default_lang)
        .map(|(label, _)| label)
        .unwrap_or_else(|| subject.as_str().to_string());
    graph.merge(make_affiliations(subject, node, &person_label, &config.affiliation_options()).0);

    graph
}

/// Maps a `place`: label, names, identifiers, coordinates and containment.
pub fn map_place<N: NodeQuery>(subject: &NamedNode, node: &N, config: &MappingConfig) -> Subgraph {
    let mut graph = common(subject, node, config);
    graph.merge(coordinates_to_p168(subject, node, &config.coordinate_options()));
    graph.merge(p89_falls_within(subject, node, &config.spatial_options()));
    graph
}

/// Maps an `org`: label, names and identifiers.
pub fn map_org<N: NodeQuery>(subject: &NamedNode, node: &N, config: &MappingConfig) -> Subgraph {
    common(subject, node, config)
}

fn common<N: NodeQuery>(subject: &NamedNode, node: &N, config: &MappingConfig) -> Subgraph {
    let mut graph = Subgraph::new();
    if let Some((label, lang)) = entity_label(node, &config.default_lang) {
        graph.add(subject, RDFS_LABEL, language_literal(&label, Some(lang.as_str())));
    }
    graph.merge(make_appellations(subject, node, &config.appellation_options()));
    graph.merge(make_e42_identifiers(subject, node, &config.identifier_options()));
    graph
}
