//! Render helpers for tests
//!
//! Wrap the library entry points so tests can compare strings and error
//! messages directly.

use unparser_core::{render_with, Document, Node, Registry, UnparserConfig};

/// Render a node with the built-in registry and default config
///
/// # Returns
/// The generated Ruby source or the error message
pub fn unparse(node: &Node) -> Result<String, String> {
    unparser_core::render(node).map_err(|e| e.to_string())
}

/// Render a node with a config, using the registry the config describes
///
/// # Arguments
/// * `node` - Root node to render
/// * `config` - Config controlling begin handling, fallback and verbatim tags
///
/// # Returns
/// The generated Ruby source or the error message
pub fn unparse_with_config(node: &Node, config: &UnparserConfig) -> Result<String, String> {
    let registry = Registry::for_config(config);
    render_with(node, &registry, config).map_err(|e| e.to_string())
}

/// Load a JSON AST document and render its root
///
/// # Arguments
/// * `json` - Document in the `{ "source": ..., "ast": ... }` format
///
/// # Returns
/// The generated Ruby source or the load/render error message
pub fn unparse_json(json: &str) -> Result<String, String> {
    let document = Document::from_json(json).map_err(|e| e.to_string())?;
    unparse(&document.root)
}
