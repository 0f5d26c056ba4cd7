//! Typed path expressions for locating TEI sub-elements and attribute values.
//!
//! A [`PathExpr`] covers the abbreviated XPath subset that prosopographical
//! mappings actually need:
//!
//! - a leading `.` for the context node,
//! - `/` (child) and `//` (descendant) steps,
//! - element name tests (`persName`, `tei:persName`, `*`),
//! - a final `@attr` or `text()` step,
//! - predicates `[1]`, `[@type]` and `[@type='pref']`.
//!
//! Namespace prefixes on element names are ignored. A leading `//` is evaluated
//! relative to the context node, not the document root.
//!
//! # Example
//!
//! ```ignore
//! use teicidoc::tei::PathExpr;
//!
//! let path: PathExpr = "./tei:location[@type='located_in_place']/tei:placeName/@key".parse()?;
//! let ids = node.select_values(&path);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PathError;

/// Direction of a location step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `/name`
    Child,
    /// `//name`
    Descendant,
}

/// What a location step matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTest {
    /// Element with the given local name.
    Element(String),
    /// `*`
    AnyElement,
    /// `@name`, only valid as the final step.
    Attribute(String),
    /// `text()`, only valid as the final step.
    Text,
}

impl NodeTest {
    /// True for tests that select values rather than elements.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeTest::Attribute(_) | NodeTest::Text)
    }
}

/// Filter applied to the nodes matched by a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `[n]`, 1-based.
    Position(usize),
    /// `[@name]`
    HasAttribute(String),
    /// `[@name='value']`
    AttributeEquals(String, String),
}

/// A single location step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub test: NodeTest,
    pub predicates: Vec<Predicate>,
}

/// A parsed path expression, relative to a context node.
///
/// An expression with no steps (`.`) selects the context node itself.
/// Serializes as its string form so it can sit in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathExpr {
    steps: Vec<Step>,
}

impl PathExpr {
    /// The context node itself (`.`).
    pub fn context() -> Self {
        Self::default()
    }

    /// `./name`
    pub fn child(name: &str) -> Self {
        Self::context().then_child(name)
    }

    /// `.//name`
    pub fn descendant(name: &str) -> Self {
        Self::context().then_descendant(name)
    }

    /// Appends a `/name` step.
    pub fn then_child(self, name: &str) -> Self {
        self.push(Axis::Child, NodeTest::Element(local_part(name).to_string()))
    }

    /// Appends a `//name` step.
    pub fn then_descendant(self, name: &str) -> Self {
        self.push(Axis::Descendant, NodeTest::Element(local_part(name).to_string()))
    }

    /// Appends a final `/@name` step.
    pub fn then_attribute(self, name: &str) -> Self {
        self.push(Axis::Child, NodeTest::Attribute(name.to_string()))
    }

    /// Appends a final `//text()` step.
    pub fn then_all_text(self) -> Self {
        self.push(Axis::Descendant, NodeTest::Text)
    }

    /// Adds `[n]` to the last step.
    pub fn nth(self, position: usize) -> Self {
        self.with_predicate(Predicate::Position(position.max(1)))
    }

    /// Adds `[@name='value']` to the last step.
    pub fn where_attribute(self, name: &str, value: &str) -> Self {
        self.with_predicate(Predicate::AttributeEquals(name.to_string(), value.to_string()))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Steps up to (excluding) a trailing attribute or `text()` step, and that step.
    pub fn split_terminal(&self) -> (&[Step], Option<&Step>) {
        match self.steps.split_last() {
            Some((last, rest)) if last.test.is_terminal() => (rest, Some(last)),
            _ => (&self.steps, None),
        }
    }

    fn push(mut self, axis: Axis, test: NodeTest) -> Self {
        self.steps.push(Step {
            axis,
            test,
            predicates: Vec::new(),
        });
        self
    }

    fn with_predicate(mut self, predicate: Predicate) -> Self {
        if let Some(step) = self.steps.last_mut() {
            if !step.test.is_terminal() {
                step.predicates.push(predicate);
            }
        }
        self
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn unexpected(&self) -> PathError {
        PathError::Unexpected {
            path: self.source.to_string(),
            position: self.pos,
            found: self.peek().unwrap_or(' '),
        }
    }

    fn read_name(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn parse(mut self) -> Result<PathExpr, PathError> {
        if self.chars.is_empty() {
            return Err(PathError::Empty);
        }
        if self.peek() == Some('.') && matches!(self.peek_at(1), None | Some('/')) {
            self.pos += 1;
        }

        let mut steps = Vec::new();
        let mut first = true;
        while self.pos < self.chars.len() {
            let axis = match (self.peek(), self.peek_at(1)) {
                (Some('/'), Some('/')) => {
                    self.pos += 2;
                    Axis::Descendant
                }
                (Some('/'), _) => {
                    self.pos += 1;
                    Axis::Child
                }
                _ if first => Axis::Child,
                _ => return Err(self.unexpected()),
            };
            first = false;

            let test = self.parse_test()?;
            let mut predicates = Vec::new();
            while self.peek() == Some('[') {
                predicates.push(self.parse_predicate()?);
            }
            if test.is_terminal() && !predicates.is_empty() {
                return Err(PathError::InvalidPredicate(format!(
                    "{} on a value step",
                    self.source
                )));
            }
            steps.push(Step {
                axis,
                test,
                predicates,
            });
        }

        if let Some((_, rest)) = steps.split_last() {
            if let Some(step) = rest.iter().find(|s| s.test.is_terminal()) {
                return Err(PathError::TerminalNotLast(render_test(&step.test)));
            }
        }
        Ok(PathExpr { steps })
    }

    fn parse_test(&mut self) -> Result<NodeTest, PathError> {
        match self.peek() {
            Some('@') => {
                self.pos += 1;
                let name = self.read_name();
                if name.is_empty() {
                    return Err(self.unexpected());
                }
                Ok(NodeTest::Attribute(name))
            }
            Some('*') => {
                self.pos += 1;
                Ok(NodeTest::AnyElement)
            }
            _ => {
                let name = self.read_name();
                if name.is_empty() {
                    return Err(self.unexpected());
                }
                if name == "text" && self.peek() == Some('(') && self.peek_at(1) == Some(')') {
                    self.pos += 2;
                    return Ok(NodeTest::Text);
                }
                Ok(NodeTest::Element(local_part(&name).to_string()))
            }
        }
    }

    fn parse_predicate(&mut self) -> Result<Predicate, PathError> {
        // skip '['
        self.pos += 1;
        let start = self.pos;
        let mut quote: Option<char> = None;
        loop {
            match (self.peek(), quote) {
                (None, _) => return Err(self.unexpected()),
                (Some(c), Some(q)) if c == q => quote = None,
                (Some('\'' | '"'), None) => quote = self.peek(),
                (Some(']'), None) => break,
                _ => {}
            }
            self.pos += 1;
        }
        let body: String = self.chars[start..self.pos].iter().collect();
        self.pos += 1;
        parse_predicate_body(body.trim())
    }
}

fn parse_predicate_body(body: &str) -> Result<Predicate, PathError> {
    let invalid = || PathError::InvalidPredicate(body.to_string());

    if body.chars().all(|c| c.is_ascii_digit()) {
        return match body.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Predicate::Position(n)),
            _ => Err(invalid()),
        };
    }

    let attr = body.strip_prefix('@').ok_or_else(invalid)?;
    match attr.split_once('=') {
        Some((name, value)) => {
            let name = name.trim();
            let value = value.trim();
            let unquoted = value
                .strip_prefix('\'')
                .and_then(|v| v.strip_suffix('\''))
                .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
                .ok_or_else(invalid)?;
            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(invalid());
            }
            Ok(Predicate::AttributeEquals(name.to_string(), unquoted.to_string()))
        }
        None => {
            if attr.is_empty() || !attr.chars().all(is_name_char) {
                return Err(invalid());
            }
            Ok(Predicate::HasAttribute(attr.to_string()))
        }
    }
}

fn render_test(test: &NodeTest) -> String {
    match test {
        NodeTest::Element(name) => name.clone(),
        NodeTest::AnyElement => "*".to_string(),
        NodeTest::Attribute(name) => format!("@{}", name),
        NodeTest::Text => "text()".to_string(),
    }
}

impl FromStr for PathExpr {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s.trim()).parse()
    }
}

impl TryFrom<String> for PathExpr {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PathExpr> for String {
    fn from(path: PathExpr) -> Self {
        path.to_string()
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".")?;
        for step in &self.steps {
            match step.axis {
                Axis::Child => write!(f, "/")?,
                Axis::Descendant => write!(f, "//")?,
            }
            write!(f, "{}", render_test(&step.test))?;
            for predicate in &step.predicates {
                match predicate {
                    Predicate::Position(n) => write!(f, "[{}]", n)?,
                    Predicate::HasAttribute(name) => write!(f, "[@{}]", name)?,
                    Predicate::AttributeEquals(name, value) => {
                        let quote = if value.contains('\'') { '"' } else { '\'' };
                        write!(f, "[@{}={}{}{}]", name, quote, value, quote)?
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_child_attribute() {
        let path: PathExpr = "./tei:orgName/@key".parse().unwrap();
        assert_eq!(path, PathExpr::child("orgName").then_attribute("key"));
    }

    #[test]
    fn test_parse_descendant_with_position() {
        let path: PathExpr = ".//tei:geo[1]".parse().unwrap();
        assert_eq!(path, PathExpr::descendant("geo").nth(1));
    }

    #[test]
    fn test_parse_attribute_predicate() {
        let path: PathExpr = "./tei:location[@type='located_in_place']/tei:placeName/@key"
            .parse()
            .unwrap();
        let expected = PathExpr::child("location")
            .where_attribute("type", "located_in_place")
            .then_child("placeName")
            .then_attribute("key");
        assert_eq!(path, expected);
    }

    #[test]
    fn test_parse_bare_and_rooted_forms() {
        let bare: PathExpr = "orgName/@key".parse().unwrap();
        assert_eq!(bare, PathExpr::child("orgName").then_attribute("key"));

        let rooted: PathExpr = "//tei:settlement[1]/@key".parse().unwrap();
        assert_eq!(
            rooted,
            PathExpr::descendant("settlement").nth(1).then_attribute("key")
        );
    }

    #[test]
    fn test_parse_context_only() {
        let path: PathExpr = ".".parse().unwrap();
        assert!(path.steps().is_empty());
    }

    #[test]
    fn test_parse_text_step() {
        let path: PathExpr = "./orgName//text()".parse().unwrap();
        let (rest, terminal) = path.split_terminal();
        assert_eq!(rest.len(), 1);
        assert_eq!(terminal.map(|s| &s.test), Some(&NodeTest::Text));
        assert_eq!(terminal.map(|s| s.axis), Some(Axis::Descendant));
    }

    #[test]
    fn test_parse_double_quoted_predicate() {
        let path: PathExpr = r#"./idno[@type="gnd"]"#.parse().unwrap();
        assert_eq!(path, PathExpr::child("idno").where_attribute("type", "gnd"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<PathExpr>(), Err(PathError::Empty));
        assert!(matches!(
            "./@key/name".parse::<PathExpr>(),
            Err(PathError::TerminalNotLast(_))
        ));
        assert!(matches!(
            "./geo[0]".parse::<PathExpr>(),
            Err(PathError::InvalidPredicate(_))
        ));
        assert!(matches!(
            "./geo[@type=unquoted]".parse::<PathExpr>(),
            Err(PathError::InvalidPredicate(_))
        ));
        assert!(matches!(
            "./geo[1".parse::<PathExpr>(),
            Err(PathError::Unexpected { .. })
        ));
        assert!(matches!(
            "./a b".parse::<PathExpr>(),
            Err(PathError::Unexpected { .. })
        ));
    }

    #[test]
    fn test_display_reparses() {
        let sources = [
            ".//geo[1]",
            "./orgName/@key",
            "./location[@type='located_in_place']/placeName/@key",
            "./orgName//text()",
            ".",
        ];
        for source in sources {
            let path: PathExpr = source.parse().unwrap();
            assert_eq!(path.to_string(), source);
            assert_eq!(path.to_string().parse::<PathExpr>().unwrap(), path);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let path = PathExpr::descendant("settlement").nth(1).then_attribute("key");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\".//settlement[1]/@key\"");

        let back: PathExpr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        let bad = serde_json::from_str::<PathExpr>("\"./a[0]\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_apostrophe_value_round_trip() {
        let path: PathExpr = r#"./idno[@type="O'Brien"]"#.parse().unwrap();
        assert_eq!(path, PathExpr::child("idno").where_attribute("type", "O'Brien"));

        let rendered = path.to_string();
        assert_eq!(rendered, r#"./idno[@type="O'Brien"]"#);
        assert_eq!(rendered.parse::<PathExpr>().unwrap(), path);

        let json = serde_json::to_string(&path).unwrap();
        let back: PathExpr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        let plain = PathExpr::child("idno").where_attribute("type", "GND");
        assert_eq!(plain.to_string(), "./idno[@type='GND']");
    }
}
