//! The query capability mappers are written against.
//!
//! Implementors only supply element name, attribute lookup and ordered
//! children; path evaluation, text extraction and the convenience lookups are
//! provided on top of those.

use std::collections::HashSet;

use super::path::{Axis, NodeTest, PathExpr, Predicate, Step};

/// A child of an element, in document order.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a, N> {
    Element(&'a N),
    Text(&'a str),
}

/// Read access to an XML element tree.
pub trait NodeQuery: Sized {
    /// Element name without namespace prefix.
    fn local_name(&self) -> &str;

    /// Attribute value by qualified name as written (`when-iso`, `xml:lang`).
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Element and text children in document order.
    fn children(&self) -> Vec<Child<'_, Self>>;

    fn child_elements(&self) -> Vec<&Self> {
        self.children()
            .into_iter()
            .filter_map(|c| match c {
                Child::Element(e) => Some(e),
                Child::Text(_) => None,
            })
            .collect()
    }

    /// Concatenation of all descendant text, in document order.
    fn text(&self) -> String {
        let mut out = String::new();
        for text in descendant_texts(self) {
            out.push_str(text);
        }
        out
    }

    /// The `xml:lang` attribute.
    fn lang(&self) -> Option<&str> {
        self.attribute("xml:lang")
    }

    /// The `xml:id` attribute.
    fn xml_id(&self) -> Option<&str> {
        self.attribute("xml:id")
    }

    /// Elements matched by `path`. Empty when the path ends in `@attr` or `text()`.
    fn select(&self, path: &PathExpr) -> Vec<&Self> {
        match path.split_terminal() {
            (steps, None) => walk(self, steps),
            (_, Some(_)) => Vec::new(),
        }
    }

    fn select_first(&self, path: &PathExpr) -> Option<&Self> {
        self.select(path).into_iter().next()
    }

    /// String values matched by `path`: attribute values, text nodes, or the
    /// text content of matched elements.
    fn select_values(&self, path: &PathExpr) -> Vec<String> {
        let (steps, terminal) = path.split_terminal();
        let owners = walk(self, steps);
        match terminal {
            None => owners.into_iter().map(|e| e.text()).collect(),
            Some(Step {
                axis,
                test: NodeTest::Attribute(name),
                ..
            }) => owners
                .into_iter()
                .flat_map(|owner| scope(owner, *axis))
                .filter_map(|e| e.attribute(name).map(str::to_string))
                .collect(),
            Some(Step { axis, .. }) => owners
                .into_iter()
                .flat_map(|owner| match axis {
                    Axis::Child => direct_texts(owner),
                    Axis::Descendant => descendant_texts(owner),
                })
                .map(str::to_string)
                .collect(),
        }
    }

    /// First matched value that is not blank, trimmed.
    fn select_value(&self, path: &PathExpr) -> Option<String> {
        self.select_values(path)
            .into_iter()
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
    }
}

/// The node itself for the child axis, node plus descendants for `//`.
fn scope<N: NodeQuery>(node: &N, axis: Axis) -> Vec<&N> {
    match axis {
        Axis::Child => vec![node],
        Axis::Descendant => {
            let mut nodes = vec![node];
            nodes.extend(descendants(node));
            nodes
        }
    }
}

fn descendants<N: NodeQuery>(node: &N) -> Vec<&N> {
    let mut out = Vec::new();
    let mut stack: Vec<&N> = node.child_elements().into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        out.push(current);
        stack.extend(current.child_elements().into_iter().rev());
    }
    out
}

fn direct_texts<N: NodeQuery>(node: &N) -> Vec<&str> {
    node.children()
        .into_iter()
        .filter_map(|c| match c {
            Child::Text(t) => Some(t),
            Child::Element(_) => None,
        })
        .collect()
}

fn descendant_texts<N: NodeQuery>(node: &N) -> Vec<&str> {
    let mut out = Vec::new();
    for child in node.children() {
        match child {
            Child::Text(t) => out.push(t),
            Child::Element(e) => out.extend(descendant_texts(e)),
        }
    }
    out
}

fn matches_test<N: NodeQuery>(node: &N, test: &NodeTest) -> bool {
    match test {
        NodeTest::Element(name) => node.local_name() == name,
        NodeTest::AnyElement => true,
        NodeTest::Attribute(_) | NodeTest::Text => false,
    }
}

fn apply_predicates<'a, N: NodeQuery>(mut nodes: Vec<&'a N>, predicates: &[Predicate]) -> Vec<&'a N> {
    for predicate in predicates {
        nodes = match predicate {
            Predicate::Position(n) => n
                .checked_sub(1)
                .and_then(|i| nodes.into_iter().nth(i))
                .into_iter()
                .collect(),
            Predicate::HasAttribute(name) => nodes
                .into_iter()
                .filter(|e| e.attribute(name).is_some())
                .collect(),
            Predicate::AttributeEquals(name, value) => nodes
                .into_iter()
                .filter(|e| e.attribute(name) == Some(value.as_str()))
                .collect(),
        };
    }
    nodes
}

fn walk<'a, N: NodeQuery>(context: &'a N, steps: &[Step]) -> Vec<&'a N> {
    let mut current = vec![context];
    for step in steps {
        let mut seen = HashSet::new();
        let mut next = Vec::new();
        for node in current {
            let candidates = match step.axis {
                Axis::Child => node.child_elements(),
                Axis::Descendant => descendants(node),
            };
            let matched: Vec<&N> = candidates
                .into_iter()
                .filter(|c| matches_test(*c, &step.test))
                .collect();
            for m in apply_predicates(matched, &step.predicates) {
                if seen.insert(m as *const N) {
                    next.push(m);
                }
            }
        }
        current = next;
    }
    current
}
