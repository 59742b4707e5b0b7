//! Node dispatch and emission.
//!
//! [`Unparser`] owns the output sink for one render and borrows the registry
//! and config. Every emitter lives in an `impl Unparser` block in a sibling
//! module and renders nested nodes only through [`Unparser::visit`].

mod arguments;
pub mod emitter;
mod literals;
pub mod registry;
mod structural;
mod tokens;
pub mod traits;

pub use emitter::Emitter;
pub use registry::{Registry, Strategy};

use tracing::{debug, trace};

use crate::ast::{Atom, Child, Node};
use crate::config::UnparserConfig;
use crate::error::{Result, UnparseError};
use traits::{emit_list, emit_wrapped, Emit};

/// Separator used between list elements unless an emitter says otherwise.
pub const DEFAULT_DELIMITER: &str = ", ";

pub struct Unparser<'r> {
    registry: &'r Registry,
    config: &'r UnparserConfig,
    emitter: Emitter,
}

impl<'r> Unparser<'r> {
    pub fn new(registry: &'r Registry, config: &'r UnparserConfig) -> Self {
        Self {
            registry,
            config,
            emitter: Emitter::new(),
        }
    }

    /// Render `node` and return the accumulated text.
    pub fn generate(mut self, node: &Node) -> Result<String> {
        self.visit(node)?;
        Ok(self.emitter.into_output())
    }

    /// Resolve the strategy for `node` and run it.
    pub fn visit(&mut self, node: &Node) -> Result<()> {
        let strategy = self.resolve(node)?;
        trace!(tag = %node.tag, ?strategy, "visit");
        self.dispatch(strategy, node)
    }

    fn resolve(&self, node: &Node) -> Result<Strategy> {
        if let Some(strategy) = self.registry.lookup(&node.tag) {
            return Ok(strategy);
        }
        if self.config.source_fallback && node.location.is_some() {
            debug!(tag = %node.tag, "no emitter registered, copying source range");
            return Ok(Strategy::SourceMap);
        }
        Err(UnparseError::UnhandledNodeType {
            tag: node.tag.clone(),
        })
    }

    fn dispatch(&mut self, strategy: Strategy, node: &Node) -> Result<()> {
        match strategy {
            Strategy::Argument => self.emit_argument(node),
            Strategy::Arguments => self.emit_arguments(node),
            Strategy::ArgExpr => self.emit_arg_expr(node),
            Strategy::Optarg => self.emit_optarg(node),
            Strategy::Restarg => self.emit_restarg(node),
            Strategy::Blockarg => self.emit_blockarg(node),
            Strategy::BlockPass => self.emit_block_pass(node),
            Strategy::Mlhs => self.emit_mlhs(node),
            Strategy::Kwarg => self.emit_kwarg(node),
            Strategy::Kwoptarg => self.emit_kwoptarg(node),
            Strategy::Kwrestarg => self.emit_kwrestarg(node),
            Strategy::Begin => self.emit_begin(node),
            Strategy::Integer => self.emit_integer(node),
            Strategy::Float => self.emit_float(node),
            Strategy::Str => self.emit_str(node),
            Strategy::Symbol => self.emit_symbol(node),
            Strategy::Keyword => self.emit_keyword(node),
            Strategy::Variable => self.emit_variable(node),
            Strategy::SourceMap => self.emit_source_map(node),
        }
    }

    pub fn write(&mut self, s: &str) {
        self.emitter.write(s);
    }

    pub fn write_all(&mut self, parts: &[&str]) {
        self.emitter.write_all(parts);
    }

    pub fn config(&self) -> &UnparserConfig {
        self.config
    }

    /// Visit each item, writing `delimiter` between them.
    pub fn delimited<T: Emit>(&mut self, items: &[T], delimiter: &str) -> Result<()> {
        emit_list(items, self, delimiter)
    }

    pub fn parentheses<F>(&mut self, content: F) -> Result<()>
    where
        F: FnOnce(&mut Unparser<'r>) -> Result<()>,
    {
        emit_wrapped(tokens::LPAREN, tokens::RPAREN, content, self)
    }
}

// Child accessors. A node whose children do not match what its emitter reads
// is malformed; the whole render aborts.
impl Unparser<'_> {
    fn expect_children(node: &Node, min: usize, max: usize) -> Result<()> {
        let count = node.children.len();
        if count < min || count > max {
            let expected = if min == max {
                format!("{min}")
            } else {
                format!("{min} to {max}")
            };
            return Err(UnparseError::malformed(
                &node.tag,
                format!("expected {expected} children, found {count}"),
            ));
        }
        Ok(())
    }

    fn child(node: &Node, index: usize) -> Result<&Child> {
        node.children.get(index).ok_or_else(|| {
            UnparseError::malformed(&node.tag, format!("missing child at index {index}"))
        })
    }

    fn node_child(node: &Node, index: usize) -> Result<&Node> {
        Self::child(node, index)?.as_node().ok_or_else(|| {
            UnparseError::malformed(&node.tag, format!("expected a node at index {index}"))
        })
    }

    fn atom_child(node: &Node, index: usize) -> Result<&Atom> {
        Self::child(node, index)?.as_atom().ok_or_else(|| {
            UnparseError::malformed(&node.tag, format!("expected an atom at index {index}"))
        })
    }

    /// A symbol or string atom, as text.
    fn name_child(node: &Node, index: usize) -> Result<&str> {
        match Self::atom_child(node, index)? {
            Atom::Symbol(name) | Atom::Str(name) => Ok(name),
            other => Err(UnparseError::malformed(
                &node.tag,
                format!("expected a name at index {index}, found {other:?}"),
            )),
        }
    }

    /// Like [`Self::name_child`], but a missing child or a nil atom is `None`.
    fn optional_name_child(node: &Node, index: usize) -> Result<Option<&str>> {
        match node.children.get(index) {
            None | Some(Child::Atom(Atom::Nil)) => Ok(None),
            Some(_) => Self::name_child(node, index).map(Some),
        }
    }
}
