//! Subgraph type returned by every mapping function.

use std::collections::HashSet;

use oxrdf::{Literal, NamedNode, NamedOrBlankNode, Term, Triple};

use super::vocab::{E55_TYPE, P2_HAS_TYPE, RDFS_LABEL, RDF_TYPE};

/// A set of RDF triples produced by one mapping call.
///
/// Mappers never mutate a caller's graph; they return a fresh `Subgraph`
/// which the caller merges into the graph it owns. Merging is set union, so
/// the order in which fragments are combined does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subgraph {
    /// The RDF triples. Uses HashSet for automatic deduplication.
    pub triples: HashSet<Triple>,
}

impl Subgraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the graph.
    pub fn insert(&mut self, triple: Triple) {
        self.triples.insert(triple);
    }

    /// Adds `subject predicate object`, with the predicate given as an IRI string.
    pub fn add(
        &mut self,
        subject: &NamedNode,
        predicate: &str,
        object: impl Into<Term>,
    ) {
        self.insert(Triple::new(
            subject.clone(),
            NamedNode::new_unchecked(predicate),
            object,
        ));
    }

    /// Links `target` to an `E55_Type` node via `P2_has_type`, labelling the
    /// type when a label is given.
    pub fn add_type(&mut self, target: &NamedNode, type_node: &NamedNode, label: Option<&str>) {
        self.add(type_node, RDF_TYPE, NamedNode::new_unchecked(E55_TYPE));
        if let Some(label) = label {
            self.add(type_node, RDFS_LABEL, Literal::new_simple_literal(label));
        }
        self.add(target, P2_HAS_TYPE, type_node.clone());
    }

    /// Moves all triples of `other` into this graph.
    pub fn merge(&mut self, other: Subgraph) {
        self.triples.extend(other.triples);
    }

    /// Union of two graphs.
    pub fn union(mut self, other: Subgraph) -> Subgraph {
        self.merge(other);
        self
    }

    /// Returns the number of triples in the graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph contains no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns an iterator over the triples.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Objects of all triples with the given subject and predicate IRI.
    pub fn objects(&self, subject: &NamedNode, predicate: &str) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| {
                matches!(&t.subject, NamedOrBlankNode::NamedNode(s) if s == subject)
                    && t.predicate.as_str() == predicate
            })
            .map(|t| &t.object)
            .collect()
    }

    /// True if any triple mentions `node` as subject or object.
    pub fn mentions(&self, node: &NamedNode) -> bool {
        self.triples.iter().any(|t| {
            matches!(&t.subject, NamedOrBlankNode::NamedNode(s) if s == node)
                || matches!(&t.object, Term::NamedNode(o) if o == node)
        })
    }
}

impl IntoIterator for Subgraph {
    type Item = Triple;
    type IntoIter = std::collections::hash_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl FromIterator<Triple> for Subgraph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Subgraph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Subgraph> for Subgraph {
    fn from_iter<I: IntoIterator<Item = Subgraph>>(iter: I) -> Self {
        iter.into_iter().fold(Subgraph::new(), Subgraph::union)
    }
}

/// A literal tagged with `lang` when the tag is present and well-formed,
/// a plain literal otherwise.
pub fn language_literal(value: &str, lang: Option<&str>) -> Literal {
    match lang.map(str::trim).filter(|l| !l.is_empty()) {
        Some(tag) => Literal::new_language_tagged_literal(value, tag).unwrap_or_else(|e| {
            log::warn!("Ignoring language tag '{}' on '{}': {}", tag, value, e);
            Literal::new_simple_literal(value)
        }),
        None => Literal::new_simple_literal(value),
    }
}
