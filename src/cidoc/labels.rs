//! Display labels for entities.

use crate::tei::{NodeQuery, PathExpr};

use super::text::normalize_string;

/// Name element used for an entity element: `persName` for `person`,
/// `placeName` for `place`, `orgName` for `org`, `title` for `bibl`.
pub fn name_element_for(entity_tag: &str) -> Option<&'static str> {
    match entity_tag {
        "person" => Some("persName"),
        "place" => Some("placeName"),
        "org" => Some("orgName"),
        "bibl" | "biblStruct" => Some("title"),
        _ => None,
    }
}

/// Label and language of a name element.
///
/// A name with `surname` and/or `forename` parts is rendered as
/// `"Surname, Forename"`, anything else as its normalized text. The language
/// is the element's `xml:lang`, falling back to `default_lang`.
pub fn make_entity_label<N: NodeQuery>(name_node: &N, default_lang: &str) -> (String, String) {
    let lang = name_node
        .lang()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(default_lang)
        .to_string();

    let surname = part(name_node, "surname");
    let forename = part(name_node, "forename");
    let label = match (surname, forename) {
        (Some(surname), Some(forename)) => format!("{}, {}", surname, forename),
        (Some(single), None) | (None, Some(single)) => single,
        (None, None) => normalize_string(&name_node.text()),
    };
    (label, lang)
}

/// Label of an entity element via its first name element, if any.
pub fn entity_label<N: NodeQuery>(entity: &N, default_lang: &str) -> Option<(String, String)> {
    let name_tag = name_element_for(entity.local_name())?;
    let name_node = entity.select_first(&PathExpr::child(name_tag))?;
    let (label, lang) = make_entity_label(name_node, default_lang);
    if label.is_empty() {
        return None;
    }
    Some((label, lang))
}

fn part<N: NodeQuery>(name_node: &N, tag: &str) -> Option<String> {
    name_node
        .select(&PathExpr::descendant(tag))
        .into_iter()
        .map(|e| normalize_string(&e.text()))
        .find(|t| !t.is_empty())
}
