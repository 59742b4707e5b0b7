//! Renders parser-gem style Ruby ASTs back into equivalent Ruby source.
//!
//! ```
//! use unparser_core::ast::{Child, Node, Tag};
//!
//! let args = Node::new(
//!     Tag::Args,
//!     vec![
//!         Node::new(Tag::Arg, vec![Child::symbol("a")]).into(),
//!         Node::new(Tag::Restarg, vec![Child::symbol("rest")]).into(),
//!     ],
//! );
//! assert_eq!(unparser_core::render(&args).unwrap(), "a, *rest");
//! ```

pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;

pub use ast::json::{Document, LoadError};
pub use ast::{Atom, Child, Node, SourceBuffer, SourceRange, Tag};
pub use codegen::{Registry, Strategy, Unparser};
pub use config::{BeginPolicy, ConfigError, UnparserConfig};
pub use error::{Result, UnparseError};

/// Render `node` with the built-in registry and default config.
pub fn render(node: &Node) -> Result<String> {
    render_with(node, Registry::builtin(), &UnparserConfig::default())
}

/// Render `node` with an explicit registry and config.
pub fn render_with(node: &Node, registry: &Registry, config: &UnparserConfig) -> Result<String> {
    Unparser::new(registry, config).generate(node)
}
