//! Terse tree builders mirroring the parser gem's `s(:type, ...)` notation.

use unparser_core::{Atom, Child, Node, SourceBuffer, SourceRange, Tag};

/// Build a node from a tag name and children.
pub fn s(tag: &str, children: Vec<Child>) -> Node {
    Node::new(Tag::from(tag), children)
}

/// Build a node whose children are all nodes.
pub fn s_nodes(tag: &str, children: Vec<Node>) -> Node {
    s(tag, children.into_iter().map(Child::Node).collect())
}

pub fn name(name: &str) -> Child {
    Child::symbol(name)
}

pub fn arg(name: &str) -> Node {
    s("arg", vec![Child::symbol(name)])
}

pub fn optarg(name: &str, default: Node) -> Node {
    s("optarg", vec![Child::symbol(name), Child::Node(default)])
}

pub fn restarg(name: &str) -> Node {
    s("restarg", vec![Child::symbol(name)])
}

/// Anonymous splat, `*`.
pub fn bare_restarg() -> Node {
    s("restarg", vec![])
}

pub fn blockarg(name: &str) -> Node {
    s("blockarg", vec![Child::symbol(name)])
}

pub fn block_pass(value: Node) -> Node {
    s_nodes("block_pass", vec![value])
}

pub fn arg_expr(group: Node) -> Node {
    s_nodes("arg_expr", vec![group])
}

pub fn args(items: Vec<Node>) -> Node {
    s_nodes("args", items)
}

pub fn mlhs(items: Vec<Node>) -> Node {
    s_nodes("mlhs", items)
}

pub fn kwarg(name: &str) -> Node {
    s("kwarg", vec![Child::symbol(name)])
}

pub fn kwoptarg(name: &str, default: Node) -> Node {
    s("kwoptarg", vec![Child::symbol(name), Child::Node(default)])
}

pub fn kwrestarg(name: &str) -> Node {
    s("kwrestarg", vec![Child::symbol(name)])
}

pub fn begin(body: Vec<Node>) -> Node {
    s_nodes("begin", body)
}

pub fn int(value: i64) -> Node {
    s("int", vec![Child::Atom(Atom::Integer(value))])
}

pub fn float(value: f64) -> Node {
    s("float", vec![Child::Atom(Atom::Float(value))])
}

pub fn string(text: &str) -> Node {
    s("str", vec![Child::Atom(Atom::Str(text.to_string()))])
}

pub fn sym(name: &str) -> Node {
    s("sym", vec![Child::symbol(name)])
}

pub fn lvar(name: &str) -> Node {
    s("lvar", vec![Child::symbol(name)])
}

pub fn nil() -> Node {
    s("nil", vec![])
}

/// A childless node of `tag` whose range covers `source[begin..end]`.
///
/// # Arguments
/// * `tag` - Node type, usually one without a dedicated emitter
/// * `source` - Full source text the range points into
/// * `begin` - Start byte offset (inclusive)
/// * `end` - End byte offset (exclusive)
pub fn sourced(tag: &str, source: &str, begin: usize, end: usize) -> Node {
    let buffer = SourceBuffer::new("(test)", source);
    s(tag, vec![]).with_location(SourceRange::new(buffer, begin, end))
}
