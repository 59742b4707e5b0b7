use std::fmt::Write as _;

use super::tokens::{T_COLON, T_DQUOTE};
use super::traits::Emit;
use super::Unparser;
use crate::ast::{Atom, Node};
use crate::error::{Result, UnparseError};

const OPERATOR_METHODS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "==", "!=", "<", ">", "<=", ">=", "<=>", "===", "=~", "!~",
    "!", "[]", "[]=", "<<", ">>", "&", "|", "^", "~", "+@", "-@",
];

impl Unparser<'_> {
    pub(super) fn emit_integer(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        match Self::atom_child(node, 0)? {
            atom @ (Atom::Integer(_) | Atom::BigInteger(_)) => atom.emit(self),
            other => Err(UnparseError::malformed(
                &node.tag,
                format!("expected an integer, found {other:?}"),
            )),
        }
    }

    pub(super) fn emit_float(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let value = match Self::atom_child(node, 0)? {
            Atom::Float(value) => *value,
            Atom::Integer(value) => *value as f64,
            other => {
                return Err(UnparseError::malformed(
                    &node.tag,
                    format!("expected a float, found {other:?}"),
                ))
            }
        };
        if !value.is_finite() {
            return Err(UnparseError::malformed(&node.tag, "non-finite float"));
        }
        // Debug formatting keeps the fractional part (`1.0`), which Ruby needs.
        self.write(&format!("{value:?}"));
        Ok(())
    }

    pub(super) fn emit_str(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let text = Self::name_child(node, 0)?;
        self.write(&quote(text));
        Ok(())
    }

    pub(super) fn emit_symbol(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let name = Self::name_child(node, 0)?;
        if is_plain_symbol(name) {
            self.write_all(&[T_COLON, name]);
        } else {
            self.write_all(&[T_COLON, &quote(name)]);
        }
        Ok(())
    }

    /// `nil`, `true`, `false` and `self` are written as their tag name.
    pub(super) fn emit_keyword(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 0, 0)?;
        self.write(node.tag.as_str());
        Ok(())
    }

    pub(super) fn emit_variable(&mut self, node: &Node) -> Result<()> {
        Self::expect_children(node, 1, 1)?;
        let name = Self::name_child(node, 0)?;
        self.write(name);
        Ok(())
    }
}

/// Double-quoted Ruby string literal for `text`.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(T_DQUOTE);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{1b}' => out.push_str("\\e"),
            // Keep `#{`, `#@` and `#$` from starting an interpolation.
            '#' if matches!(chars.peek(), Some('{' | '@' | '$')) => out.push_str("\\#"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push_str(T_DQUOTE);
    out
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if is_ident_start(c)) && chars.all(is_ident_char)
}

/// Whether `:name` parses back as the same symbol without quoting.
fn is_plain_symbol(name: &str) -> bool {
    if OPERATOR_METHODS.contains(&name) {
        return true;
    }
    if let Some(rest) = name.strip_prefix("@@").or_else(|| name.strip_prefix('@')) {
        return is_identifier(rest);
    }
    if let Some(rest) = name.strip_prefix('$') {
        return is_identifier(rest);
    }
    let base = name.strip_suffix(['?', '!', '=']).unwrap_or(name);
    is_identifier(base)
}
