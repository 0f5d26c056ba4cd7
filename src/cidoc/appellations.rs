//! E41 Appellations for person, place, organization and bibliographic names.

use oxrdf::{Literal, NamedNode};
use serde::{Deserialize, Serialize};

use crate::tei::{NodeQuery, PathExpr};

use super::config::{DEFAULT_LANG, DEFAULT_TYPE_DOMAIN};
use super::graph::{language_literal, Subgraph};
use super::labels::{make_entity_label, name_element_for};
use super::text::normalize_string;
use super::uri::type_uri;
use super::vocab::{
    iri, E41_APPELLATION, P106_IS_COMPOSED_OF, P1_IS_IDENTIFIED_BY, RDFS_LABEL, RDF_TYPE,
    RDF_VALUE,
};

/// Options for [`make_appellations`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppellationOptions {
    /// Base URI of the generated type vocabulary.
    pub type_domain: String,
    /// Attribute whose value refines the appellation type.
    pub type_attribute: String,
    /// Language used when a name has no `xml:lang`.
    pub default_lang: String,
    /// Name elements to map. Derived from the entity element when unset
    /// (`./persName` for a `person`, `./placeName` for a `place`, ...).
    pub name_path: Option<PathExpr>,
}

impl Default for AppellationOptions {
    fn default() -> Self {
        Self {
            type_domain: DEFAULT_TYPE_DOMAIN.to_string(),
            type_attribute: "type".to_string(),
            default_lang: DEFAULT_LANG.to_string(),
            name_path: None,
        }
    }
}

/// Maps the name elements of `node` to `E41_Appellation`s of `subject`.
///
/// The i-th name becomes `{subject}/appellation/{i}`, linked with
/// `P1_is_identified_by` and typed as
/// `{type_domain}{entity}/{name element}[/{type}]`. Element children of a
/// name (`forename`, `surname`, `addName`, ...) become part appellations
/// `{appellation}/{j}` attached with `P106_is_composed_of`.
///
/// Returns an empty graph when `node` is not a known entity element and no
/// `name_path` is configured, or when it has no non-empty names.
pub fn make_appellations<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    options: &AppellationOptions,
) -> Subgraph {
    let entity_tag = node.local_name();
    let path = match (&options.name_path, name_element_for(entity_tag)) {
        (Some(path), _) => path.clone(),
        (None, Some(name_tag)) => PathExpr::child(name_tag),
        (None, None) => {
            log::debug!("No name element known for <{}>", entity_tag);
            return Subgraph::new();
        }
    };

    let mut graph = Subgraph::new();
    for (i, name) in node.select(&path).into_iter().enumerate() {
        let (label, lang) = make_entity_label(name, &options.default_lang);
        if label.is_empty() {
            continue;
        }

        let appellation = iri(&format!("{}/appellation/{}", subject.as_str(), i));
        graph.add(subject, P1_IS_IDENTIFIED_BY, appellation.clone());
        add_appellation(&mut graph, &appellation, &label, &lang);

        let name_tag = name.local_name();
        let type_label = type_attribute_value(name, &options.type_attribute);
        let name_type = type_uri(
            &options.type_domain,
            &[entity_tag, name_tag, type_label.as_deref().unwrap_or("")],
        );
        graph.add_type(&appellation, &name_type, type_label.as_deref());

        for (j, part) in name.child_elements().into_iter().enumerate() {
            let text = normalize_string(&part.text());
            if text.is_empty() {
                continue;
            }
            let part_uri = iri(&format!("{}/{}", appellation.as_str(), j));
            let part_lang = part.lang().unwrap_or(&lang);
            graph.add(&appellation, P106_IS_COMPOSED_OF, part_uri.clone());
            add_appellation(&mut graph, &part_uri, &text, part_lang);

            let part_label = type_attribute_value(part, &options.type_attribute);
            let part_type = type_uri(
                &options.type_domain,
                &[
                    entity_tag,
                    name_tag,
                    part.local_name(),
                    part_label.as_deref().unwrap_or(""),
                ],
            );
            graph.add_type(&part_uri, &part_type, part_label.as_deref());
        }
    }
    graph
}

fn add_appellation(graph: &mut Subgraph, uri: &NamedNode, label: &str, lang: &str) {
    graph.add(uri, RDF_TYPE, iri(E41_APPELLATION));
    graph.add(uri, RDFS_LABEL, language_literal(label, Some(lang)));
    graph.add(uri, RDF_VALUE, Literal::new_simple_literal(label));
}

fn type_attribute_value<N: NodeQuery>(node: &N, attribute: &str) -> Option<String> {
    node.attribute(attribute)
        .map(normalize_string)
        .filter(|t| !t.is_empty())
}
