//! JSON interchange format for trees produced outside this crate.
//!
//! ```json
//! {
//!   "source": "def m(a, *r); end",
//!   "ast": {
//!     "type": "args",
//!     "children": [
//!       { "type": "arg", "children": ["a"], "range": [6, 7] },
//!       { "type": "restarg", "children": ["r"] }
//!     ]
//!   }
//! }
//! ```
//!
//! Atom children: a JSON string is a symbol, a number is an integer or float,
//! `null` is nil and `{ "str": "..." }` is a string literal payload. Integers
//! that do not fit `i64` are kept as decimal text; past `u64` they must be
//! written as `{ "int": "..." }`.

use std::sync::Arc;

use serde::Deserialize;

use super::{Atom, Child, InvalidTag, Node, SourceBuffer, SourceRange, Tag};

const DEFAULT_BUFFER_NAME: &str = "(string)";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed AST document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidTag(#[from] InvalidTag),

    #[error("node `{tag}` has a source range but the document carries no source text")]
    MissingSource { tag: String },

    #[error("source range {begin}..{end} does not fit the document source")]
    InvalidRange { begin: usize, end: usize },

    #[error("`{0}` is not a decimal integer")]
    InvalidInteger(String),
}

/// A loaded tree together with the source text its ranges point into.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub buffer: Option<Arc<SourceBuffer>>,
    pub root: Node,
}

impl Document {
    pub fn from_json(input: &str) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_str(input)?;
        let buffer = raw.source.map(|text| {
            SourceBuffer::new(raw.name.as_deref().unwrap_or(DEFAULT_BUFFER_NAME), text)
        });
        let root = raw.ast.into_node(buffer.as_ref())?;
        tracing::debug!(root = %root.tag, has_source = buffer.is_some(), "loaded AST document");
        Ok(Self { buffer, root })
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    name: Option<String>,
    ast: RawNode,
}

#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    children: Vec<RawChild>,
    #[serde(default)]
    range: Option<(usize, usize)>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChild {
    Node(RawNode),
    Str { str: String },
    BigInteger { int: String },
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Symbol(String),
    Nil(()),
}

impl RawNode {
    fn into_node(self, buffer: Option<&Arc<SourceBuffer>>) -> Result<Node, LoadError> {
        let tag: Tag = self.tag.parse()?;

        let location = match self.range {
            None => None,
            Some((begin, end)) => {
                let buffer = buffer.ok_or_else(|| LoadError::MissingSource {
                    tag: tag.to_string(),
                })?;
                let range = SourceRange::new(buffer.clone(), begin, end);
                if range.to_source().is_none() {
                    return Err(LoadError::InvalidRange { begin, end });
                }
                Some(range)
            }
        };

        let children = self
            .children
            .into_iter()
            .map(|child| child.into_child(buffer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Node {
            tag,
            children,
            location,
        })
    }
}

impl RawChild {
    fn into_child(self, buffer: Option<&Arc<SourceBuffer>>) -> Result<Child, LoadError> {
        Ok(match self {
            RawChild::Node(node) => Child::Node(node.into_node(buffer)?),
            RawChild::Str { str } => Child::Atom(Atom::Str(str)),
            RawChild::BigInteger { int } => Child::Atom(parse_integer(int)?),
            RawChild::Integer(value) => Child::Atom(Atom::Integer(value)),
            RawChild::Unsigned(value) => Child::Atom(Atom::BigInteger(value.to_string())),
            RawChild::Float(value) => Child::Atom(Atom::Float(value)),
            RawChild::Symbol(name) => Child::Atom(Atom::Symbol(name)),
            RawChild::Nil(()) => Child::Atom(Atom::Nil),
        })
    }
}

fn parse_integer(text: String) -> Result<Atom, LoadError> {
    let digits = text.strip_prefix('-').unwrap_or(&text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LoadError::InvalidInteger(text));
    }
    Ok(match text.parse::<i64>() {
        Ok(value) => Atom::Integer(value),
        Err(_) => Atom::BigInteger(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_loads_nested_nodes_and_atoms() {
        let doc = Document::from_json(indoc! {r#"
            {
              "ast": {
                "type": "args",
                "children": [
                  { "type": "arg", "children": ["a"] },
                  { "type": "optarg", "children": ["b", { "type": "int", "children": [1] }] },
                  { "type": "str", "children": [{ "str": "hi" }] },
                  { "type": "float", "children": [2.5] },
                  { "type": "restarg", "children": [null] }
                ]
              }
            }
        "#})
        .unwrap();

        let root = doc.root;
        assert_eq!(root.tag, Tag::Args);
        assert_eq!(root.children.len(), 5);

        let arg = root.children[0].as_node().unwrap();
        assert_eq!(arg.children, vec![Child::symbol("a")]);

        let optarg = root.children[1].as_node().unwrap();
        let default = optarg.children[1].as_node().unwrap();
        assert_eq!(default.tag, Tag::Int);
        assert_eq!(default.children, vec![Child::Atom(Atom::Integer(1))]);

        let string = root.children[2].as_node().unwrap();
        assert_eq!(string.children, vec![Child::Atom(Atom::Str("hi".into()))]);

        let float = root.children[3].as_node().unwrap();
        assert_eq!(float.children, vec![Child::Atom(Atom::Float(2.5))]);

        let restarg = root.children[4].as_node().unwrap();
        assert_eq!(restarg.children, vec![Child::Atom(Atom::Nil)]);
    }

    #[test]
    fn test_ranges_point_into_document_source() {
        let doc = Document::from_json(
            r#"{ "source": "foo(bar)", "name": "t.rb", "ast": { "type": "send", "range": [0, 8] } }"#,
        )
        .unwrap();

        assert_eq!(doc.root.tag, Tag::Other("send".into()));
        let location = doc.root.location.unwrap();
        assert_eq!(location.to_source(), Some("foo(bar)"));
        assert_eq!(location.buffer.name, "t.rb");
    }

    #[test]
    fn test_range_without_source_is_rejected() {
        let err = Document::from_json(r#"{ "ast": { "type": "send", "range": [0, 3] } }"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingSource { ref tag } if tag == "send"));
    }

    #[test]
    fn test_out_of_bounds_range_is_rejected() {
        let err = Document::from_json(
            r#"{ "source": "abc", "ast": { "type": "send", "range": [1, 10] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidRange { begin: 1, end: 10 }));
    }

    #[test]
    fn test_invalid_tag_is_rejected() {
        let err = Document::from_json(r#"{ "ast": { "type": "Not A Tag" } }"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid node type `Not A Tag`");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = Document::from_json("{ \"ast\": ").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_integers_beyond_i64() {
        let doc = Document::from_json(
            r#"{ "ast": { "type": "args", "children": [
                { "type": "int", "children": [9223372036854775808] },
                { "type": "int", "children": [{ "int": "-100000000000000000000000" }] },
                { "type": "int", "children": [{ "int": "42" }] }
            ] } }"#,
        )
        .unwrap();

        let values: Vec<_> = doc
            .root
            .children
            .iter()
            .map(|child| child.as_node().unwrap().children[0].clone())
            .collect();
        assert_eq!(
            values,
            vec![
                Child::Atom(Atom::BigInteger("9223372036854775808".into())),
                Child::Atom(Atom::BigInteger("-100000000000000000000000".into())),
                Child::Atom(Atom::Integer(42)),
            ]
        );
    }

    #[test]
    fn test_non_decimal_integer_text_is_rejected() {
        let err = Document::from_json(
            r#"{ "ast": { "type": "int", "children": [{ "int": "12abc" }] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidInteger(ref text) if text == "12abc"));
    }

    #[test]
    fn test_upper_case_node_type_is_accepted() {
        let doc = Document::from_json(
            r#"{ "source": "__ENCODING__", "ast": { "type": "__ENCODING__", "range": [0, 12] } }"#,
        )
        .unwrap();
        assert_eq!(doc.root.tag, Tag::Other("__ENCODING__".into()));
    }
}
