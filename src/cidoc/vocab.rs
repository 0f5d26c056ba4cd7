//! Vocabulary IRIs used in generated graphs.

use oxrdf::NamedNode;

/// CIDOC-CRM namespace.
pub const CIDOC: &str = "http://www.cidoc-crm.org/cidoc-crm/";

macro_rules! crm {
    ($local:literal) => {
        concat!("http://www.cidoc-crm.org/cidoc-crm/", $local)
    };
}

// Classes
pub const E5_EVENT: &str = crm!("E5_Event");
pub const E7_ACTIVITY: &str = crm!("E7_Activity");
pub const E41_APPELLATION: &str = crm!("E41_Appellation");
pub const E42_IDENTIFIER: &str = crm!("E42_Identifier");
pub const E52_TIME_SPAN: &str = crm!("E52_Time-Span");
pub const E55_TYPE: &str = crm!("E55_Type");
pub const E67_BIRTH: &str = crm!("E67_Birth");
pub const E69_DEATH: &str = crm!("E69_Death");
pub const E85_JOINING: &str = crm!("E85_Joining");

// Properties
pub const P1_IS_IDENTIFIED_BY: &str = crm!("P1_is_identified_by");
pub const P2_HAS_TYPE: &str = crm!("P2_has_type");
pub const P4_HAS_TIME_SPAN: &str = crm!("P4_has_time-span");
pub const P7_TOOK_PLACE_AT: &str = crm!("P7_took_place_at");
pub const P11_HAD_PARTICIPANT: &str = crm!("P11_had_participant");
pub const P14_CARRIED_OUT_BY: &str = crm!("P14_carried_out_by");
pub const P82A_BEGIN_OF_THE_BEGIN: &str = crm!("P82a_begin_of_the_begin");
pub const P82B_END_OF_THE_END: &str = crm!("P82b_end_of_the_end");
pub const P89_FALLS_WITHIN: &str = crm!("P89_falls_within");
pub const P98_BROUGHT_INTO_LIFE: &str = crm!("P98_brought_into_life");
pub const P100_WAS_DEATH_OF: &str = crm!("P100_was_death_of");
pub const P106_IS_COMPOSED_OF: &str = crm!("P106_is_composed_of");
pub const P143_JOINED: &str = crm!("P143_joined");
pub const P144_JOINED_WITH: &str = crm!("P144_joined_with");
pub const P168_PLACE_IS_DEFINED_BY: &str = crm!("P168_place_is_defined_by");

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const XSD_G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
pub const XSD_G_YEAR_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gYearMonth";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

pub const GEO_WKT_LITERAL: &str = "http://www.opengis.net/ont/geosparql#wktLiteral";

/// Prefixes registered on Turtle output.
pub const PREFIXES: &[(&str, &str)] = &[
    ("crm", CIDOC),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("xsd", XSD),
    ("geo", "http://www.opengis.net/ont/geosparql#"),
];

/// Wraps a vocabulary constant or generated IRI.
pub fn iri(value: &str) -> NamedNode {
    NamedNode::new_unchecked(value)
}
