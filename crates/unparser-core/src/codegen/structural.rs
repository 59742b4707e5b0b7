use super::Unparser;
use crate::ast::Node;
use crate::config::BeginPolicy;
use crate::error::{Result, UnparseError};

impl Unparser<'_> {
    /// A `begin` wrapper renders as its single child.
    pub(super) fn emit_begin(&mut self, node: &Node) -> Result<()> {
        match (node.children.len(), self.config().begin_policy) {
            (0, _) => Err(UnparseError::malformed(&node.tag, "expected a child, found none")),
            (1, _) | (_, BeginPolicy::FirstChild) => {
                let body = Self::node_child(node, 0)?;
                self.visit(body)
            }
            (count, BeginPolicy::Strict) => Err(UnparseError::malformed(
                &node.tag,
                format!("expected exactly one child, found {count}"),
            )),
        }
    }

    /// Copy the source text covered by the node's range.
    pub(super) fn emit_source_map(&mut self, node: &Node) -> Result<()> {
        let location = node
            .location
            .as_ref()
            .ok_or_else(|| UnparseError::malformed(&node.tag, "missing source range"))?;
        let source = location.to_source().ok_or_else(|| {
            UnparseError::malformed(
                &node.tag,
                format!("source range {location:?} is outside the source buffer"),
            )
        })?;
        self.write(source);
        Ok(())
    }
}
