//! Entity URI generation.

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Builds a fresh entity URI `domain/version/prefix/<uuid>`.
///
/// One trailing slash is stripped from `domain` and empty segments are left
/// out. The id is a UUIDv7: time ordered and collision free across threads
/// within a process.
///
/// ```
/// use teicidoc::cidoc::make_uri;
///
/// let uri = make_uri("https://example.org/", "1", "person");
/// assert!(uri.as_str().starts_with("https://example.org/1/person/"));
/// ```
pub fn make_uri(domain: &str, version: &str, prefix: &str) -> NamedNode {
    let domain = domain.strip_suffix('/').unwrap_or(domain);
    let id = Uuid::now_v7().to_string();
    let uri = [domain, version, prefix, id.as_str()]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    NamedNode::new_unchecked(uri)
}

/// The local part of a TEI pointer: `#pla_1` becomes `pla_1`.
pub fn strip_pointer(reference: &str) -> &str {
    let reference = reference.trim();
    reference.strip_prefix('#').unwrap_or(reference)
}

/// URI of a referenced entity, `domain` immediately followed by the id.
///
/// Ids come from the data, so the result is validated; `None` (with a
/// warning) when it is not an IRI, e.g. for `key="Wien Stadt"`.
pub fn reference_uri(domain: &str, reference: &str) -> Option<NamedNode> {
    checked_iri(&format!("{}{}", domain, strip_pointer(reference)))
}

/// Parses `iri`, logging a warning and returning `None` when it is invalid.
pub fn checked_iri(iri: &str) -> Option<NamedNode> {
    NamedNode::new(iri)
        .map_err(|e| log::warn!("Skipping invalid IRI <{}>: {}", iri, e))
        .ok()
}

/// Type vocabulary URI `type_domain` + `/`-joined segments.
///
/// Segments are lower-cased with inner whitespace turned into `-`; blank
/// segments are skipped. A `/` is inserted after `type_domain` unless it
/// already ends in `/` or `#`.
pub fn type_uri(type_domain: &str, segments: &[&str]) -> NamedNode {
    let mut uri = type_domain.to_string();
    if !uri.is_empty() && !uri.ends_with('/') && !uri.ends_with('#') {
        uri.push('/');
    }
    let path = segments
        .iter()
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    uri.push_str(&path);
    NamedNode::new_unchecked(uri)
}

/// Reusable [`make_uri`] bound to one domain and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriFactory {
    pub domain: String,
    #[serde(default)]
    pub version: String,
}

impl UriFactory {
    pub fn new(domain: &str, version: &str) -> Self {
        Self {
            domain: domain.to_string(),
            version: version.to_string(),
        }
    }

    /// A fresh URI under `prefix`.
    pub fn make(&self, prefix: &str) -> NamedNode {
        make_uri(&self.domain, &self.version, prefix)
    }
}
