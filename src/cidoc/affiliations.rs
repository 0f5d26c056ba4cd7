//! Affiliations as `E85_Joining` events between a person and an organization.

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};

use crate::tei::{NodeQuery, PathExpr};

use super::config::DEFAULT_DOMAIN;
use super::dates::extract_interval;
use super::events::attach_time_span;
use super::graph::{language_literal, Subgraph};
use super::text::normalize_string;
use super::uri::{reference_uri, strip_pointer};
use super::vocab::{
    iri, E85_JOINING, P11_HAD_PARTICIPANT, P143_JOINED, P144_JOINED_WITH, RDFS_LABEL, RDF_TYPE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffiliationOptions {
    /// Prefix for organization URIs.
    pub domain: String,
    pub affiliation_path: PathExpr,
    /// Organization id, relative to the affiliation.
    pub org_id_path: PathExpr,
    /// Organization name, relative to the affiliation.
    pub org_label_path: PathExpr,
    /// Language of the generated joining labels.
    pub default_lang: String,
    pub fill_missing: bool,
}

impl Default for AffiliationOptions {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            affiliation_path: PathExpr::descendant("affiliation"),
            org_id_path: PathExpr::child("orgName").then_attribute("key"),
            org_label_path: PathExpr::child("orgName"),
            default_lang: "en".to_string(),
            fill_missing: false,
        }
    }
}

/// Maps `affiliation` elements to `E85_Joining` events.
///
/// For the i-th affiliation whose organization id resolves, the joining
/// lives at `{subject}/joining/{org id}/{i}` and links the person
/// (`P143_joined`) with the organization `{domain}{org id}`
/// (`P144_joined_with`); both are participants. The label reads
/// `"{person_label} joins {organization}"`. Affiliations without an
/// organization id, or whose id does not form a valid IRI, are skipped.
pub fn make_affiliations<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    person_label: &str,
    options: &AffiliationOptions,
) -> (Subgraph, Vec<NamedNode>) {
    let mut graph = Subgraph::new();
    let mut uris = Vec::new();

    for (i, affiliation) in node.select(&options.affiliation_path).into_iter().enumerate() {
        let Some(org_ref) = affiliation.select_value(&options.org_id_path) else {
            log::debug!("Skipping affiliation {} of {}: no organization id", i, subject);
            continue;
        };
        let org_id = strip_pointer(&org_ref);
        if org_id.is_empty() {
            continue;
        }
        let Some(org) = reference_uri(&options.domain, org_id) else {
            continue;
        };
        let joining = iri(&format!("{}/joining/{}/{}", subject.as_str(), org_id, i));

        graph.add(&joining, RDF_TYPE, iri(E85_JOINING));
        graph.add(&joining, P143_JOINED, subject.clone());
        graph.add(&joining, P144_JOINED_WITH, org.clone());
        graph.add(&joining, P11_HAD_PARTICIPANT, subject.clone());
        graph.add(&joining, P11_HAD_PARTICIPANT, org);

        let org_label = affiliation
            .select_values(&options.org_label_path)
            .into_iter()
            .map(|label| normalize_string(&label))
            .find(|label| !label.is_empty())
            .unwrap_or_else(|| org_id.to_string());
        let label = normalize_string(&format!("{} joins {}", person_label, org_label));
        graph.add(
            &joining,
            RDFS_LABEL,
            language_literal(&label, Some(options.default_lang.as_str())),
        );

        let time_span = iri(&format!("{}/time-span", joining.as_str()));
        let interval = extract_interval(affiliation, options.fill_missing);
        graph.merge(attach_time_span(&joining, &time_span, &interval));

        uris.push(joining);
    }

    (graph, uris)
}
