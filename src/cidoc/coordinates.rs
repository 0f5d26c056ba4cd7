//! Place geometry as P168 WKT points.

use oxrdf::{Literal, NamedNode};
use serde::{Deserialize, Serialize};

use crate::tei::{NodeQuery, PathExpr};

use super::graph::Subgraph;
use super::vocab::{iri, GEO_WKT_LITERAL, P168_PLACE_IS_DEFINED_BY};

/// Options for [`coordinates_to_p168`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinateOptions {
    /// Element holding the coordinate pair, `.//geo[1]` by default.
    pub coords_path: PathExpr,
    /// Read the pair as (lon, lat) instead of (lat, lon).
    pub inverse: bool,
    /// Log skipped places at `warn` instead of `debug`.
    pub verbose: bool,
}

impl Default for CoordinateOptions {
    fn default() -> Self {
        Self {
            coords_path: PathExpr::descendant("geo").nth(1),
            inverse: false,
            verbose: false,
        }
    }
}

/// Maps a TEI `geo` pair to `subject P168_place_is_defined_by "Point(lon lat)"`.
///
/// The text must split on whitespace into exactly two numbers. By default the
/// first is the latitude; with `inverse` the first is the longitude. Returns an
/// empty graph when no usable pair is found.
pub fn coordinates_to_p168<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    options: &CoordinateOptions,
) -> Subgraph {
    let mut graph = Subgraph::new();

    let Some(text) = node.select_value(&options.coords_path) else {
        report(options.verbose, format_args!("No coordinates found for {}", subject));
        return graph;
    };
    let Some((first, second)) = parse_pair(&text) else {
        report(
            options.verbose,
            format_args!("Unparsable coordinates '{}' for {}", text, subject),
        );
        return graph;
    };

    let (lat, lon) = if options.inverse {
        (second, first)
    } else {
        (first, second)
    };
    let wkt = Literal::new_typed_literal(format!("Point({} {})", lon, lat), iri(GEO_WKT_LITERAL));
    graph.add(subject, P168_PLACE_IS_DEFINED_BY, wkt);
    graph
}

/// Splits `"a b"` into two finite numeric tokens, kept as written.
fn parse_pair(text: &str) -> Option<(&str, &str)> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    let second = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    let finite = |token: &str| token.parse::<f64>().is_ok_and(f64::is_finite);
    if !finite(first) || !finite(second) {
        return None;
    }
    Some((first, second))
}

fn report(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        log::warn!("{}", message);
    } else {
        log::debug!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tei::XmlElement;
    use oxrdf::Term;

    fn subject() -> NamedNode {
        iri("https://example.org/DWplace00139")
    }

    fn place(geo: &str) -> XmlElement {
        XmlElement::parse(&format!(
            "<place><placeName>Christiania</placeName><location><geo>{}</geo></location></place>",
            geo
        ))
        .unwrap()
    }

    fn wkt(graph: &Subgraph) -> Option<String> {
        graph
            .objects(&subject(), P168_PLACE_IS_DEFINED_BY)
            .into_iter()
            .find_map(|t| match t {
                Term::Literal(l) => Some(l.value().to_string()),
                _ => None,
            })
    }

    #[test]
    fn test_default_axis_order() {
        let graph = coordinates_to_p168(&subject(), &place("123 456"), &CoordinateOptions::default());
        assert_eq!(wkt(&graph).as_deref(), Some("Point(456 123)"));
    }

    #[test]
    fn test_inverse_axis_order() {
        let options = CoordinateOptions {
            inverse: true,
            ..Default::default()
        };
        let graph = coordinates_to_p168(&subject(), &place("123 456"), &options);
        assert_eq!(wkt(&graph).as_deref(), Some("Point(123 456)"));
    }

    #[test]
    fn test_wkt_datatype_and_decimals() {
        let graph = coordinates_to_p168(
            &subject(),
            &place("\n 59.91273   10.74609 \n"),
            &CoordinateOptions::default(),
        );
        let literal = match graph.objects(&subject(), P168_PLACE_IS_DEFINED_BY)[0] {
            Term::Literal(l) => l.clone(),
            other => panic!("expected literal, got {}", other),
        };
        assert_eq!(literal.value(), "Point(10.74609 59.91273)");
        assert_eq!(literal.datatype().as_str(), GEO_WKT_LITERAL);
    }

    #[test]
    fn test_unusable_coordinates() {
        for geo in [
            "", "123", "1 2 3", "north south", "48.2,16.3", "NaN 1", "inf 2", "1 -inf",
        ] {
            let graph = coordinates_to_p168(&subject(), &place(geo), &CoordinateOptions::default());
            assert!(graph.is_empty(), "expected nothing for '{}'", geo);
        }

        let no_geo = XmlElement::parse("<place><placeName>Wien</placeName></place>").unwrap();
        let options = CoordinateOptions {
            verbose: true,
            ..Default::default()
        };
        assert!(coordinates_to_p168(&subject(), &no_geo, &options).is_empty());
    }

    #[test]
    fn test_verbose_only_changes_logging() {
        let verbose = CoordinateOptions {
            verbose: true,
            ..Default::default()
        };
        let no_geo = XmlElement::parse("<place><placeName>Wien</placeName></place>").unwrap();
        for node in [place("48.2082 16.3738"), place("north south"), no_geo] {
            assert_eq!(
                coordinates_to_p168(&subject(), &node, &verbose),
                coordinates_to_p168(&subject(), &node, &CoordinateOptions::default())
            );
        }
    }

    #[test]
    fn test_custom_path() {
        let node = XmlElement::parse(
            r#"<place><location type="approx"><geo>1 2</geo></location><location type="exact"><geo>3 4</geo></location></place>"#,
        )
        .unwrap();
        let options = CoordinateOptions {
            coords_path: "./location[@type='exact']/geo".parse().unwrap(),
            ..Default::default()
        };
        let graph = coordinates_to_p168(&subject(), &node, &options);
        assert_eq!(wkt(&graph).as_deref(), Some("Point(4 3)"));
    }
}
