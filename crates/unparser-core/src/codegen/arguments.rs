use super::tokens::{O_AMP, O_ASN, O_DSPLAT, O_SPLAT, T_COLON, WS};
use super::traits::{Emit, MaybeEmit};
use super::{Unparser, DEFAULT_DELIMITER};
use crate::ast::{Child, Node, Tag};
use crate::error::{Result, UnparseError};

impl Unparser<'_> {
    pub(super) fn emit_argument(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let name = Self::name_child(node, 0)?;
        self.write(name);
        Ok(())
    }

    /// `name = default`
    pub(super) fn emit_optarg(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 2, 2)?;
        let name = Self::name_child(node, 0)?;
        let default = Self::node_child(node, 1)?;
        self.write_all(&[name, WS, O_ASN, WS]);
        self.visit(default)
    }

    /// `*name`, or a bare `*` for an anonymous splat.
    pub(super) fn emit_restarg(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 0, 1)?;
        let name = Self::optional_name_child(node, 0)?;
        self.write(O_SPLAT);
        name.maybe_emit(self)
    }

    pub(super) fn emit_blockarg(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let name = Self::name_child(node, 0)?;
        self.write_all(&[O_AMP, name]);
        Ok(())
    }

    pub(super) fn emit_block_pass(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let value = Self::node_child(node, 0)?;
        self.write(O_AMP);
        self.visit(value)
    }

    pub(super) fn emit_arg_expr(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let group = Self::node_child(node, 0)?;
        self.parenthesized_group(group)
    }

    fn parenthesized_group(&mut self, group: &Node) -> Result<()> {
        self.parentheses(|unparser| unparser.visit(group))
    }

    pub(super) fn emit_arguments(&mut self, node: &Node) -> Result<()> {
        let items = Self::parenthesize_groups(node)?;
        self.delimited(&items, DEFAULT_DELIMITER)
    }

    pub(super) fn emit_mlhs(&mut self, node: &Node) -> Result<()> {
        let items = Self::parenthesize_groups(node)?;
        self.delimited(&items, DEFAULT_DELIMITER)
    }

    /// `name:`
    pub(super) fn emit_kwarg(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let name = Self::name_child(node, 0)?;
        self.write_all(&[name, T_COLON]);
        Ok(())
    }

    /// `name: default`
    pub(super) fn emit_kwoptarg(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 2, 2)?;
        let name = Self::name_child(node, 0)?;
        let default = Self::node_child(node, 1)?;
        self.write_all(&[name, T_COLON, WS]);
        self.visit(default)
    }

    /// `**name`, or a bare `**`.
    pub(super) fn emit_kwrestarg(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 0, 1)?;
        let name = Self::optional_name_child(node, 0)?;
        self.write(O_DSPLAT);
        name.maybe_emit(self)
    }

    /// Children of an argument list. Each bare `mlhs` group renders as if
    /// wrapped in `arg_expr`, so it comes out parenthesized.
    fn parenthesize_groups(node: &Node) -> Result<Vec<ListItem<'_>>> {
        node.children
            .iter()
            .enumerate()
            .map(|(index, child)| match child {
                Child::Node(item) if item.tag == Tag::Mlhs => Ok(ListItem::Group(item)),
                Child::Node(item) => Ok(ListItem::Plain(item)),
                Child::Atom(_) => Err(UnparseError::malformed(
                    &node.tag,
                    format!("expected a node at index {index}"),
                )),
            })
            .collect()
    }
}

enum ListItem<'a> {
    Plain(&'a Node),
    Group(&'a Node),
}

impl Emit for ListItem<'_> {
    fn emit(&self, unparser: &mut Unparser<'_>) -> Result<()> {
        match self {
            ListItem::Plain(node) => unparser.visit(node),
            ListItem::Group(group) => unparser.parenthesized_group(group),
        }
    }
}
