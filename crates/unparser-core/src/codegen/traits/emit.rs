use crate::ast::{Atom, Node};
use crate::codegen::Unparser;
use crate::error::Result;

/// Trait for values that can be written through an [`Unparser`].
/// Nodes always go back through the dispatcher; atoms and text are written
/// directly.
pub trait Emit {
    fn emit(&self, unparser: &mut Unparser<'_>) -> Result<()>;
}

impl Emit for Node {
    fn emit(&self, unparser: &mut Unparser<'_>) -> Result<()> {
        unparser.visit(self)
    }
}

impl Emit for Atom {
    fn emit(&self, unparser: &mut Unparser<'_>) -> Result<()> {
        unparser.write(&self.to_string());
        Ok(())
    }
}

impl Emit for str {
    fn emit(&self, unparser: &mut Unparser<'_>) -> Result<()> {
        unparser.write(self);
        Ok(())
    }
}

impl<T: Emit + ?Sized> Emit for &T {
    fn emit(&self, unparser: &mut Unparser<'_>) -> Result<()> {
        (**self).emit(unparser)
    }
}

/// Helper trait for values that may be absent (emit or skip)
pub trait MaybeEmit {
    fn maybe_emit(&self, unparser: &mut Unparser<'_>) -> Result<()>;
}

impl<T: Emit> MaybeEmit for Option<T> {
    fn maybe_emit(&self, unparser: &mut Unparser<'_>) -> Result<()> {
        match self {
            Some(t) => t.emit(unparser),
            None => Ok(()),
        }
    }
}

/// Emit a slice of items with `separator` between consecutive items.
pub fn emit_list<T: Emit>(
    items: &[T],
    unparser: &mut Unparser<'_>,
    separator: &str,
) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            unparser.write(separator);
        }
        item.emit(unparser)?;
    }
    Ok(())
}

/// Emit `content` between `open` and `close`.
pub fn emit_wrapped<'r, F>(
    open: &str,
    close: &str,
    content: F,
    unparser: &mut Unparser<'r>,
) -> Result<()>
where
    F: FnOnce(&mut Unparser<'r>) -> Result<()>,
{
    unparser.write(open);
    content(unparser)?;
    unparser.write(close);
    Ok(())
}
