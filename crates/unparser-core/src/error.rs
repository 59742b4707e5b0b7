use thiserror::Error;

use crate::ast::Tag;

/// Errors that abort a render. Partial output is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnparseError {
    #[error("no emitter for node: {tag}")]
    UnhandledNodeType { tag: Tag },

    #[error("malformed `{tag}` node: {reason}")]
    MalformedNode { tag: Tag, reason: String },
}

impl UnparseError {
    pub fn malformed(tag: &Tag, reason: impl Into<String>) -> Self {
        UnparseError::MalformedNode {
            tag: tag.clone(),
            reason: reason.into(),
        }
    }

    pub fn tag(&self) -> &Tag {
        match self {
            UnparseError::UnhandledNodeType { tag } | UnparseError::MalformedNode { tag, .. } => tag,
        }
    }
}

pub type Result<T> = std::result::Result<T, UnparseError>;
