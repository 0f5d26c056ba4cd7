//! Life events: births and deaths (E67/E69) and generic events (E5).
//!
//! Every event carries its dates on a TEI element (`<birth when="1873"/>`,
//! `<event from="1900" to="1905">`). The interval is read with
//! [`extract_interval`] and attached as an `E52_Time-Span` at
//! `{event}/time-span`. A referenced place becomes `P7_took_place_at`.

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};

use crate::tei::{NodeQuery, PathExpr};

use super::config::{DEFAULT_DOMAIN, DEFAULT_LANG, DEFAULT_TYPE_DOMAIN};
use super::dates::{extract_interval, DateInterval};
use super::graph::{language_literal, Subgraph};
use super::labels::entity_label;
use super::text::normalize_string;
use super::time_span::interval_to_e52;
use super::uri::{reference_uri, type_uri};
use super::vocab::{
    iri, E5_EVENT, E67_BIRTH, E69_DEATH, P100_WAS_DEATH_OF, P11_HAD_PARTICIPANT,
    P4_HAS_TIME_SPAN, P7_TOOK_PLACE_AT, P98_BROUGHT_INTO_LIFE, RDFS_LABEL, RDF_TYPE,
};

/// Which end of a life is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeEventKind {
    #[default]
    Birth,
    Death,
}

impl LifeEventKind {
    /// TEI element and URI segment: `birth` or `death`.
    pub fn element(self) -> &'static str {
        match self {
            LifeEventKind::Birth => "birth",
            LifeEventKind::Death => "death",
        }
    }

    /// CRM class of the event.
    pub fn class(self) -> &'static str {
        match self {
            LifeEventKind::Birth => E67_BIRTH,
            LifeEventKind::Death => E69_DEATH,
        }
    }

    /// Property linking the event to the person.
    pub fn person_property(self) -> &'static str {
        match self {
            LifeEventKind::Birth => P98_BROUGHT_INTO_LIFE,
            LifeEventKind::Death => P100_WAS_DEATH_OF,
        }
    }
}

/// Options for [`make_birth_death_entities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDeathOptions {
    pub kind: LifeEventKind,
    /// Prefix for place URIs resolved from `place_id_path`.
    pub domain: String,
    /// Optional `P2_has_type` target of the event.
    pub type_uri: Option<String>,
    /// Label of the event is `"{label_prefix} {person label}"`; no label when unset.
    pub label_prefix: Option<String>,
    /// Event element. Defaults to `./birth` or `./death` after `kind`.
    pub event_path: Option<PathExpr>,
    /// Element carrying the dates, relative to the event element.
    pub date_node_path: PathExpr,
    /// Place reference, relative to the event element.
    pub place_id_path: PathExpr,
    pub default_lang: String,
    /// Copy a single known date bound to the missing one.
    pub fill_missing: bool,
    /// Log absent events at `warn` instead of `debug`.
    pub verbose: bool,
}

impl BirthDeathOptions {
    pub fn new(kind: LifeEventKind) -> Self {
        Self {
            kind,
            domain: DEFAULT_DOMAIN.to_string(),
            type_uri: None,
            label_prefix: None,
            event_path: None,
            date_node_path: PathExpr::context(),
            place_id_path: PathExpr::descendant("settlement")
                .nth(1)
                .then_attribute("key"),
            default_lang: DEFAULT_LANG.to_string(),
            fill_missing: true,
            verbose: false,
        }
    }

    fn resolved_event_path(&self) -> PathExpr {
        self.event_path
            .clone()
            .unwrap_or_else(|| PathExpr::child(self.kind.element()))
    }
}

impl Default for BirthDeathOptions {
    fn default() -> Self {
        Self::new(LifeEventKind::Birth)
    }
}

/// Result of [`make_birth_death_entities`].
///
/// Both URIs are always set, even when the person has no such event, so
/// callers can attach further statements without checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeEvent {
    pub graph: Subgraph,
    pub event_uri: NamedNode,
    pub time_span_uri: NamedNode,
}

/// Maps the `birth` or `death` child of a person to an `E67_Birth` or
/// `E69_Death` at `{subject}/{birth|death}`.
///
/// When the event element is present the graph holds the event class, the
/// link to the person, an optional label and type, the time-span (only if a
/// date bound was found) and `P7_took_place_at <{domain}{key}>` when a place
/// key resolves. When it is absent the graph is empty.
pub fn make_birth_death_entities<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    options: &BirthDeathOptions,
) -> LifeEvent {
    let kind = options.kind;
    let event_uri = iri(&format!("{}/{}", subject.as_str(), kind.element()));
    let time_span_uri = iri(&format!("{}/time-span", event_uri.as_str()));
    let mut graph = Subgraph::new();

    let Some(event) = node.select_first(&options.resolved_event_path()) else {
        let message = format!("No <{}> found for {}", kind.element(), subject);
        if options.verbose {
            log::warn!("{}", message);
        } else {
            log::debug!("{}", message);
        }
        return LifeEvent {
            graph,
            event_uri,
            time_span_uri,
        };
    };

    graph.add(&event_uri, RDF_TYPE, iri(kind.class()));
    graph.add(&event_uri, kind.person_property(), subject.clone());

    if let Some(prefix) = &options.label_prefix {
        if let Some((person, _)) = entity_label(node, &options.default_lang) {
            let label = normalize_string(&format!("{} {}", prefix, person));
            graph.add(
                &event_uri,
                RDFS_LABEL,
                language_literal(&label, Some(options.default_lang.as_str())),
            );
        }
    }
    if let Some(event_type) = &options.type_uri {
        graph.add_type(&event_uri, &iri(event_type), None);
    }

    let interval = event
        .select_first(&options.date_node_path)
        .map(|date_node| extract_interval(date_node, options.fill_missing))
        .unwrap_or_default();
    graph.merge(attach_time_span(&event_uri, &time_span_uri, &interval));

    if let Some(place) = event
        .select_value(&options.place_id_path)
        .and_then(|key| reference_uri(&options.domain, &key))
    {
        graph.add(&event_uri, P7_TOOK_PLACE_AT, place);
    }

    LifeEvent {
        graph,
        event_uri,
        time_span_uri,
    }
}

/// Options for [`make_events`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventOptions {
    /// Event elements, `.//event` by default.
    pub event_path: PathExpr,
    pub type_domain: String,
    /// Prefix for place URIs.
    pub domain: String,
    /// Place reference, relative to the event element.
    pub place_id_path: PathExpr,
    pub default_lang: String,
    pub fill_missing: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            event_path: PathExpr::descendant("event"),
            type_domain: DEFAULT_TYPE_DOMAIN.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            place_id_path: PathExpr::descendant("placeName").nth(1).then_attribute("key"),
            default_lang: DEFAULT_LANG.to_string(),
            fill_missing: true,
        }
    }
}

/// Maps generic `event` elements to `E5_Event`s the subject took part in.
///
/// Each event lives at `{subject}/event/{xml:id}`, or `{subject}/event/{i}`
/// without an id, and is returned alongside the graph. The label comes from
/// the event's `label` or else its `desc`; the `type` attribute becomes a
/// `{type_domain}event/{type}` type.
pub fn make_events<N: NodeQuery>(
    subject: &NamedNode,
    node: &N,
    options: &EventOptions,
) -> (Subgraph, Vec<NamedNode>) {
    let mut graph = Subgraph::new();
    let mut uris = Vec::new();

    for (i, event) in node.select(&options.event_path).into_iter().enumerate() {
        let id = event
            .xml_id()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| i.to_string());
        let event_uri = iri(&format!("{}/event/{}", subject.as_str(), id));
        let time_span_uri = iri(&format!("{}/time-span", event_uri.as_str()));

        graph.add(&event_uri, RDF_TYPE, iri(E5_EVENT));
        graph.add(&event_uri, P11_HAD_PARTICIPANT, subject.clone());

        if let Some((label, lang)) = event_label(event, &options.default_lang) {
            graph.add(&event_uri, RDFS_LABEL, language_literal(&label, Some(lang.as_str())));
        }
        if let Some(event_type) = event.attribute("type").map(normalize_string) {
            if !event_type.is_empty() {
                let type_node = type_uri(&options.type_domain, &["event", event_type.as_str()]);
                graph.add_type(&event_uri, &type_node, Some(&event_type));
            }
        }

        let interval = extract_interval(event, options.fill_missing);
        graph.merge(attach_time_span(&event_uri, &time_span_uri, &interval));

        if let Some(place) = event
            .select_value(&options.place_id_path)
            .and_then(|key| reference_uri(&options.domain, &key))
        {
            graph.add(&event_uri, P7_TOOK_PLACE_AT, place);
        }
        uris.push(event_uri);
    }

    (graph, uris)
}

/// `P4_has_time-span` plus the span itself, or nothing without a non-blank
/// date bound.
pub(crate) fn attach_time_span(
    event_uri: &NamedNode,
    time_span_uri: &NamedNode,
    interval: &DateInterval,
) -> Subgraph {
    if !interval.has_bound() {
        return Subgraph::new();
    }
    let mut graph = interval_to_e52(time_span_uri, interval);
    graph.add(event_uri, P4_HAS_TIME_SPAN, time_span_uri.clone());
    graph
}

fn event_label<N: NodeQuery>(event: &N, default_lang: &str) -> Option<(String, String)> {
    ["label", "desc"].into_iter().find_map(|tag| {
        let element = event.select_first(&PathExpr::child(tag))?;
        let label = normalize_string(&element.text());
        if label.is_empty() {
            return None;
        }
        let lang = element.lang().unwrap_or(default_lang).to_string();
        Some((label, lang))
    })
}
