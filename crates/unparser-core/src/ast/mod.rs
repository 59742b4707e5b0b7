//! Parser-gem style AST consumed by the unparser.
//!
//! Nodes are produced elsewhere (a parser binding, the JSON loader in
//! [`json`], or hand-built in tests) and are read-only here.

pub mod json;
mod source;
mod tag;

pub use source::{SourceBuffer, SourceRange};
pub use tag::{InvalidTag, Tag};

use std::fmt;

/// An atomic child value: names, literal payloads, or `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Symbol(String),
    Str(String),
    Integer(i64),
    /// Integer outside the `i64` range, as its decimal text.
    BigInteger(String),
    Float(f64),
    Nil,
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Symbol(name) | Atom::Str(name) | Atom::BigInteger(name) => f.write_str(name),
            Atom::Integer(value) => write!(f, "{value}"),
            Atom::Float(value) => write!(f, "{value:?}"),
            Atom::Nil => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Atom(Atom),
}

impl Child {
    pub fn symbol(name: impl Into<String>) -> Self {
        Child::Atom(Atom::Symbol(name.into()))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Atom(_) => None,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Child::Atom(atom) => Some(atom),
            Child::Node(_) => None,
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Atom> for Child {
    fn from(atom: Atom) -> Self {
        Child::Atom(atom)
    }
}

/// A tagged tree element with ordered children and an optional source range.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub children: Vec<Child>,
    pub location: Option<SourceRange>,
}

impl Node {
    pub fn new(tag: Tag, children: Vec<Child>) -> Self {
        Self {
            tag,
            children,
            location: None,
        }
    }

    pub fn with_location(mut self, location: SourceRange) -> Self {
        self.location = Some(location);
        self
    }
}
