//! Spatial containment between places.

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};

use crate::tei::{NodeQuery, PathExpr};

use super::config::DEFAULT_DOMAIN;
use super::graph::Subgraph;
use super::uri::{reference_uri, strip_pointer};
use super::vocab::P89_FALLS_WITHIN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialOptions {
    /// Prefix for the containing place URI.
    pub domain: String,
    pub location_id_path: PathExpr,
}

impl Default for SpatialOptions {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            location_id_path: PathExpr::child("location")
                .where_attribute("type", "located_in_place")
                .then_child("placeName")
                .then_attribute("key"),
        }
    }
}

/// `subject P89_falls_within <{domain}{id}>` for the place referenced by
/// `location_id_path`; empty when nothing resolves.
pub fn p89_falls_within<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    options: &SpatialOptions,
) -> Subgraph {
    let mut graph = Subgraph::new();
    let place = node
        .select_value(&options.location_id_path)
        .filter(|reference| !strip_pointer(reference).is_empty())
        .and_then(|reference| reference_uri(&options.domain, &reference));
    match place {
        Some(place) => graph.add(subject, P89_FALLS_WITHIN, place),
        None => log::debug!("No containing place for {}", subject),
    }
    graph
}
