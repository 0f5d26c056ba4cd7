//! E52 Time-Span construction.

use oxrdf::{Literal, NamedNode};

use super::dates::{DateInterval, DateLiteral};
use super::graph::Subgraph;
use super::vocab::{
    iri, E52_TIME_SPAN, P2_HAS_TYPE, P82A_BEGIN_OF_THE_BEGIN, P82B_END_OF_THE_END, RDFS_LABEL,
    RDF_TYPE, XSD_STRING,
};

/// Builds an `E52_Time-Span` node at `uri`.
///
/// `P82a_begin_of_the_begin` and `P82b_end_of_the_end` are emitted only for
/// the bounds that are present, each typed by its precision. When both
/// bounds are present and equal the span also gets an `rdfs:label` with that
/// value, marking a single known day (or month, or year).
///
/// ```
/// use oxrdf::NamedNode;
/// use teicidoc::cidoc::create_e52;
///
/// let uri = NamedNode::new_unchecked("https://example.org/person/1/birth/time-span");
/// let graph = create_e52(&uri, Some("1873-05-26"), Some("1873-05-26"));
/// assert_eq!(graph.len(), 4);
/// ```
pub fn create_e52(uri: &NamedNode, begin: Option<&str>, end: Option<&str>) -> Subgraph {
    let begin = begin.and_then(DateLiteral::new).filter(|d| !d.text().trim().is_empty());
    let end = end.and_then(DateLiteral::new).filter(|d| !d.text().trim().is_empty());

    let mut graph = Subgraph::new();
    graph.add(uri, RDF_TYPE, iri(E52_TIME_SPAN));

    if let Some(begin) = &begin {
        graph.add(uri, P82A_BEGIN_OF_THE_BEGIN, begin.to_literal());
    }
    if let Some(end) = &end {
        graph.add(uri, P82B_END_OF_THE_END, end.to_literal());
    }
    if let (Some(begin), Some(end)) = (&begin, &end) {
        if begin.text() == end.text() {
            graph.add(
                uri,
                RDFS_LABEL,
                Literal::new_typed_literal(begin.text(), iri(XSD_STRING)),
            );
        }
    }

    graph
}

/// Like [`create_e52`], additionally typing the span with `P2_has_type`.
pub fn create_typed_e52(
    uri: &NamedNode,
    type_uri: &NamedNode,
    begin: Option<&str>,
    end: Option<&str>,
) -> Subgraph {
    let mut graph = create_e52(uri, begin, end);
    graph.add(uri, P2_HAS_TYPE, type_uri.clone());
    graph
}

/// Time-span for an extracted interval.
pub fn interval_to_e52(uri: &NamedNode, interval: &DateInterval) -> Subgraph {
    create_e52(uri, interval.begin(), interval.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cidoc::rdf_io::RdfFormat;
    use crate::cidoc::vocab::{XSD_DATE, XSD_G_YEAR};
    use oxrdf::Term;

    fn span_uri() -> NamedNode {
        iri("https://example.org/person/1/birth/time-span")
    }

    fn literal_of<'a>(graph: &'a Subgraph, predicate: &str) -> Option<&'a Literal> {
        graph
            .objects(&span_uri(), predicate)
            .into_iter()
            .find_map(|t| match t {
                Term::Literal(l) => Some(l),
                _ => None,
            })
    }

    #[test]
    fn test_point_span_has_label() {
        let graph = create_e52(&span_uri(), Some("1234-05-06"), Some("1234-05-06"));
        let label = literal_of(&graph, RDFS_LABEL).expect("label emitted");
        assert_eq!(label.value(), "1234-05-06");
        assert_eq!(label.datatype().as_str(), XSD_STRING);

        let nt = graph.to_string(RdfFormat::NTriples).unwrap();
        assert!(nt.contains("<http://www.w3.org/2000/01/rdf-schema#label> \"1234-05-06\""));
    }

    #[test]
    fn test_range_span_has_no_label() {
        let graph = create_e52(&span_uri(), Some("1222"), Some("1234-05-06"));
        assert!(literal_of(&graph, RDFS_LABEL).is_none());

        let begin = literal_of(&graph, P82A_BEGIN_OF_THE_BEGIN).unwrap();
        assert_eq!(begin.datatype().as_str(), XSD_G_YEAR);
        let end = literal_of(&graph, P82B_END_OF_THE_END).unwrap();
        assert_eq!(end.datatype().as_str(), XSD_DATE);

        let nt = graph.to_string(RdfFormat::NTriples).unwrap();
        assert!(!nt.contains("rdf-schema#label"));
    }

    #[test]
    fn test_single_bound() {
        let graph = create_e52(&span_uri(), Some("1900"), None);
        assert!(literal_of(&graph, P82A_BEGIN_OF_THE_BEGIN).is_some());
        assert!(literal_of(&graph, P82B_END_OF_THE_END).is_none());
        assert!(literal_of(&graph, RDFS_LABEL).is_none());

        let graph = create_e52(&span_uri(), None, Some("1900"));
        assert!(literal_of(&graph, P82A_BEGIN_OF_THE_BEGIN).is_none());
        assert!(literal_of(&graph, P82B_END_OF_THE_END).is_some());
    }

    #[test]
    fn test_no_bounds() {
        let graph = create_e52(&span_uri(), None, Some(""));
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.objects(&span_uri(), RDF_TYPE).len(), 1);
    }

    #[test]
    fn test_typed_span() {
        let type_uri = iri("https://example.org/types/time-span/birth");
        let graph = create_typed_e52(&span_uri(), &type_uri, Some("1900"), Some("1900"));
        assert_eq!(
            graph.objects(&span_uri(), P2_HAS_TYPE),
            vec![&Term::NamedNode(type_uri)]
        );
    }

    #[test]
    fn test_interval_to_e52() {
        let interval = DateInterval::new(Some("1900"), Some("1900"));
        let graph = interval_to_e52(&span_uri(), &interval);
        assert_eq!(graph.len(), 4);
    }
}
