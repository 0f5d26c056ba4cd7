//! E42 Identifiers from `idno` elements and `xml:id`.

use oxrdf::{Literal, NamedNode};
use serde::{Deserialize, Serialize};

use crate::tei::{NodeQuery, PathExpr};

use super::config::{DEFAULT_LANG, DEFAULT_TYPE_DOMAIN};
use super::graph::{language_literal, Subgraph};
use super::text::normalize_string;
use super::uri::{checked_iri, type_uri};
use super::vocab::{
    iri, E42_IDENTIFIER, OWL_SAME_AS, P1_IS_IDENTIFIED_BY, RDFS_LABEL, RDF_TYPE, RDF_VALUE,
};

/// Options for [`make_e42_identifiers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierOptions {
    /// Base URI of the generated type vocabulary.
    pub type_domain: String,
    /// Language used when an `idno` has no `xml:lang`.
    pub default_lang: String,
    /// Tag identifier labels with a language.
    pub set_lang: bool,
    /// Emit `owl:sameAs` for identifiers that are themselves IRIs.
    pub same_as: bool,
    /// Prepended to identifier values that are not IRIs.
    pub default_prefix: Option<String>,
    /// Identifier elements, `./idno` by default.
    pub idno_path: PathExpr,
    /// Also map the entity's `xml:id`.
    pub include_xml_id: bool,
}

impl Default for IdentifierOptions {
    fn default() -> Self {
        Self {
            type_domain: DEFAULT_TYPE_DOMAIN.to_string(),
            default_lang: DEFAULT_LANG.to_string(),
            set_lang: false,
            same_as: true,
            default_prefix: None,
            idno_path: PathExpr::child("idno"),
            include_xml_id: true,
        }
    }
}

/// Maps the identifiers of `node` to `E42_Identifier`s of `subject`.
///
/// The i-th non-empty `idno` becomes `{subject}/identifier/idno/{i}`, typed
/// `{type_domain}idno[/{type}][/{subtype}]`. Identifiers that are absolute
/// IRIs are also asserted `owl:sameAs` the subject unless `same_as` is off.
/// The entity's `xml:id` becomes `{subject}/identifier/{xml:id}` typed
/// `{type_domain}idno/xml-id`.
pub fn make_e42_identifiers<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    options: &IdentifierOptions,
) -> Subgraph {
    let mut graph = Subgraph::new();

    if options.include_xml_id {
        let xml_id = node.xml_id().map(str::trim).filter(|id| !id.is_empty());
        if let Some((xml_id, identifier)) = xml_id.and_then(|id| {
            checked_iri(&format!("{}/identifier/{}", subject.as_str(), id)).map(|uri| (id, uri))
        }) {
            let lang = options.set_lang.then_some(options.default_lang.as_str());
            add_identifier(&mut graph, subject, &identifier, &prefixed(xml_id, options), lang);
            let id_type = type_uri(&options.type_domain, &["idno", "xml-id"]);
            graph.add_type(&identifier, &id_type, Some("xml-id"));
        }
    }

    for (i, idno) in node.select(&options.idno_path).into_iter().enumerate() {
        let value = normalize_string(&idno.text());
        if value.is_empty() {
            continue;
        }

        let identifier = iri(&format!("{}/identifier/idno/{}", subject.as_str(), i));
        let lang = options
            .set_lang
            .then(|| idno.lang().unwrap_or(&options.default_lang));
        add_identifier(&mut graph, subject, &identifier, &prefixed(&value, options), lang);

        let idno_type = type_uri(
            &options.type_domain,
            &[
                "idno",
                idno.attribute("type").unwrap_or(""),
                idno.attribute("subtype").unwrap_or(""),
            ],
        );
        graph.add_type(&identifier, &idno_type, None);

        if options.same_as && is_absolute_iri(&value) {
            if let Some(same) = checked_iri(&value) {
                graph.add(subject, OWL_SAME_AS, same);
            }
        }
    }

    graph
}

fn add_identifier(
    graph: &mut Subgraph,
    subject: &NamedNode,
    identifier: &NamedNode,
    value: &str,
    lang: Option<&str>,
) {
    graph.add(subject, P1_IS_IDENTIFIED_BY, identifier.clone());
    graph.add(identifier, RDF_TYPE, iri(E42_IDENTIFIER));
    graph.add(identifier, RDF_VALUE, Literal::new_simple_literal(value));
    graph.add(identifier, RDFS_LABEL, language_literal(value, lang));
}

fn prefixed(value: &str, options: &IdentifierOptions) -> String {
    match &options.default_prefix {
        Some(prefix) if !is_absolute_iri(value) => format!("{}{}", prefix, value),
        _ => value.to_string(),
    }
}

/// Checks if a value is an absolute IRI with a valid URI scheme and no
/// whitespace.
///
/// According to RFC 3986, a URI scheme:
/// - Starts with a letter (a-zA-Z)
/// - Followed by any combination of letters, digits, plus (+), hyphen (-), or period (.)
/// - Ends with a colon (:)
///
/// Schemes of a single letter are rejected so Windows paths and
/// `Q:`-style shorthands are not mistaken for IRIs.
pub fn is_absolute_iri(value: &str) -> bool {
    let Some(colon_pos) = value.find(':') else {
        return false;
    };
    if colon_pos < 2 || colon_pos + 1 == value.len() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let scheme = &value[..colon_pos];
    let mut chars = scheme.chars();

    // First character must be a letter
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}
