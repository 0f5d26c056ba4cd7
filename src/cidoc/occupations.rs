//! Occupations as `E7_Activity` carried out by the person.

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};

use crate::tei::{NodeQuery, PathExpr};

use super::config::DEFAULT_LANG;
use super::dates::extract_interval;
use super::events::attach_time_span;
use super::graph::{language_literal, Subgraph};
use super::text::normalize_string;
use super::uri::{checked_iri, strip_pointer, type_uri};
use super::vocab::{iri, E7_ACTIVITY, P14_CARRIED_OUT_BY, RDFS_LABEL, RDF_TYPE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupationOptions {
    /// URI segment between subject and id.
    pub prefix: String,
    /// Id of an occupation, relative to the element (e.g. `./@key`).
    /// The element position is used when unset or unresolved.
    pub id_path: Option<PathExpr>,
    pub default_lang: String,
    /// Label for occupations without text.
    pub not_known_value: String,
    /// When set, each occupation whose id resolves through `id_path` is typed
    /// `{type_domain}{id}`. Positional ids are never typed.
    pub type_domain: Option<String>,
    pub occupation_path: PathExpr,
    pub fill_missing: bool,
}

impl Default for OccupationOptions {
    fn default() -> Self {
        Self {
            prefix: "occupation".to_string(),
            id_path: None,
            default_lang: DEFAULT_LANG.to_string(),
            not_known_value: "undefined".to_string(),
            type_domain: None,
            occupation_path: PathExpr::descendant("occupation"),
            fill_missing: false,
        }
    }
}

/// Maps `occupation` elements to `E7_Activity` nodes at
/// `{subject}/{prefix}/{id}`, returning the graph and the activity URIs in
/// document order.
///
/// Keys that do not form a valid IRI fall back to the element position.
pub fn make_occupations<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    options: &OccupationOptions,
) -> (Subgraph, Vec<NamedNode>) {
    let mut graph = Subgraph::new();
    let mut uris = Vec::new();

    for (i, occupation) in node.select(&options.occupation_path).into_iter().enumerate() {
        let keyed = options
            .id_path
            .as_ref()
            .and_then(|path| occupation.select_value(path))
            .map(|value| strip_pointer(&value).to_string())
            .filter(|value| !value.is_empty())
            .and_then(|id| {
                checked_iri(&format!("{}/{}/{}", subject.as_str(), options.prefix, id))
                    .map(|activity| (id, activity))
            });
        let (key, activity) = match keyed {
            Some((id, activity)) => (Some(id), activity),
            None => (
                None,
                iri(&format!("{}/{}/{}", subject.as_str(), options.prefix, i)),
            ),
        };

        graph.add(&activity, RDF_TYPE, iri(E7_ACTIVITY));
        graph.add(&activity, P14_CARRIED_OUT_BY, subject.clone());

        let text = normalize_string(&occupation.text());
        let label = if text.is_empty() {
            options.not_known_value.as_str()
        } else {
            text.as_str()
        };
        let lang = occupation.lang().unwrap_or(&options.default_lang);
        graph.add(&activity, RDFS_LABEL, language_literal(label, Some(lang)));

        if let (Some(type_domain), Some(key)) = (&options.type_domain, &key) {
            let occupation_type = type_uri(type_domain, &[key.as_str()]);
            graph.add_type(&activity, &occupation_type, Some(label));
        }

        let time_span = iri(&format!("{}/time-span", activity.as_str()));
        let interval = extract_interval(occupation, options.fill_missing);
        graph.merge(attach_time_span(&activity, &time_span, &interval));

        uris.push(activity);
    }

    (graph, uris)
}
