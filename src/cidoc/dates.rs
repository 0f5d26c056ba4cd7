//! Date normalization: precision classification and interval extraction.
//!
//! TEI encodes dates on arbitrary elements through a family of attributes
//! (`when`, `from`/`to`, `notBefore`/`notAfter`, each with an `-iso`
//! variant). This module collapses them into a single `(begin, end)`
//! [`DateInterval`] and turns each bound into an XSD-typed literal whose
//! datatype reflects how much of the date is known.
//!
//! Classification is purely lexical: the character count (and a leading `-`
//! for negative years) decides the datatype. No calendar validation happens,
//! so `"1900-13-45"` is still an `xsd:date` and free text such as
//! `"um 1900"` falls back to `xsd:string`.

use oxrdf::Literal;
use serde::{Deserialize, Serialize};

use crate::tei::NodeQuery;

use super::vocab::{iri, XSD_DATE, XSD_G_YEAR, XSD_G_YEAR_MONTH, XSD_STRING};

/// Text emitted for an absent date at the literal boundary.
///
/// Kept for compatibility with existing consumers; inside the crate absence is
/// always an `Option::None`.
pub const MISSING_DATE: &str = "None";

/// Attributes consulted for the begin bound, highest precedence first.
pub const BEGIN_ATTRIBUTES: [&str; 6] = [
    "when-iso",
    "when",
    "from-iso",
    "from",
    "notBefore-iso",
    "notBefore",
];

/// Attributes consulted for the end bound, highest precedence first.
pub const END_ATTRIBUTES: [&str; 6] = [
    "when-iso",
    "when",
    "to-iso",
    "to",
    "notAfter-iso",
    "notAfter",
];

/// How much of a date a string carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatePrecision {
    /// `YYYY` or `-YYYY`, typed `xsd:gYear`.
    Year,
    /// `YYYY-MM`, typed `xsd:gYearMonth`.
    YearMonth,
    /// `YYYY-MM-DD`, typed `xsd:date`.
    Date,
    /// Anything else, typed `xsd:string`.
    PlainString,
}

impl DatePrecision {
    /// Classifies a date string by length.
    ///
    /// Length 4, or 5 with a leading `-`, is a year; 7 is a year-month; 10 is
    /// a full date. Every other length, including 0, is a plain string.
    pub fn classify(date: &str) -> Self {
        match date.chars().count() {
            4 => DatePrecision::Year,
            5 if date.starts_with('-') => DatePrecision::Year,
            7 => DatePrecision::YearMonth,
            10 => DatePrecision::Date,
            _ => DatePrecision::PlainString,
        }
    }

    /// XSD datatype IRI for this precision.
    pub fn datatype(self) -> &'static str {
        match self {
            DatePrecision::Year => XSD_G_YEAR,
            DatePrecision::YearMonth => XSD_G_YEAR_MONTH,
            DatePrecision::Date => XSD_DATE,
            DatePrecision::PlainString => XSD_STRING,
        }
    }
}

/// A date string together with its classified precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateLiteral {
    text: String,
    precision: DatePrecision,
}

impl DateLiteral {
    /// Classifies `date`. Returns `None` for an empty string.
    pub fn new(date: &str) -> Option<Self> {
        if date.is_empty() {
            return None;
        }
        Some(Self {
            text: date.to_string(),
            precision: DatePrecision::classify(date),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// The typed RDF literal, e.g. `"1900"^^xsd:gYear`.
    pub fn to_literal(&self) -> Literal {
        Literal::new_typed_literal(self.text.as_str(), iri(self.precision.datatype()))
    }
}

/// Converts an optional date string into a typed literal.
///
/// An absent or empty date becomes the literal `"None"^^xsd:string`; callers
/// that need to tell "no date" apart should use [`DateLiteral::new`] instead.
pub fn date_to_literal(date: Option<&str>) -> Literal {
    match date.and_then(DateLiteral::new) {
        Some(literal) => literal.to_literal(),
        None => Literal::new_typed_literal(MISSING_DATE, iri(XSD_STRING)),
    }
}

/// Begin and end of a date range taken from one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    pub begin: Option<String>,
    pub end: Option<String>,
}

impl DateInterval {
    pub fn new(begin: Option<&str>, end: Option<&str>) -> Self {
        Self {
            begin: begin.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    /// Neither bound is known.
    pub fn is_empty(&self) -> bool {
        self.begin.is_none() && self.end.is_none()
    }

    /// Both bounds are known and identical.
    pub fn is_point(&self) -> bool {
        matches!((&self.begin, &self.end), (Some(b), Some(e)) if b == e)
    }

    /// At least one bound carries a non-blank value.
    pub fn has_bound(&self) -> bool {
        [&self.begin, &self.end]
            .into_iter()
            .flatten()
            .any(|bound| !bound.trim().is_empty())
    }

    pub fn begin(&self) -> Option<&str> {
        self.begin.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }
}

/// Extracts a date interval from the date attributes of `node`.
///
/// Each bound takes the first attribute present from
/// [`BEGIN_ATTRIBUTES`] / [`END_ATTRIBUTES`], exactly as written: values are
/// neither trimmed nor skipped when blank. Since `when`/`when-iso` head
/// both lists, a point date fills both bounds on its own. With
/// `fill_missing`, a single known bound is copied to the other side;
/// without it the other side stays `None`.
///
/// Never fails: a node without date attributes yields an empty interval.
///
/// ```
/// use teicidoc::cidoc::extract_interval;
/// use teicidoc::tei::XmlElement;
///
/// let node = XmlElement::new("birth").with_attribute("notBefore", "1800");
/// let interval = extract_interval(&node, true);
/// assert_eq!(interval.begin(), Some("1800"));
/// assert_eq!(interval.end(), Some("1800"));
/// ```
pub fn extract_interval<N: NodeQuery>(node: &N, fill_missing: bool) -> DateInterval {
    let mut begin = first_attribute(node, &BEGIN_ATTRIBUTES);
    let mut end = first_attribute(node, &END_ATTRIBUTES);

    if fill_missing {
        match (&begin, &end) {
            (Some(b), None) => end = Some(b.clone()),
            (None, Some(e)) => begin = Some(e.clone()),
            _ => {}
        }
    }

    DateInterval { begin, end }
}

fn first_attribute<N: NodeQuery>(node: &N, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| node.attribute(name))
        .map(str::to_string)
}
