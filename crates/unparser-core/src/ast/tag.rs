use std::fmt;
use std::str::FromStr;

/// Node type tag, using the parser gem's names.
///
/// Every tag the unparser knows how to emit gets its own variant so the
/// built-in registry can be derived from an exhaustive match. Anything else
/// the parser produces is carried through as [`Tag::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    // Arguments
    Arg,
    Args,
    Optarg,
    Restarg,
    Blockarg,
    BlockPass,
    ArgExpr,
    Mlhs,
    Kwarg,
    Kwoptarg,
    Kwrestarg,
    // Structure
    Begin,
    // Literals and variables
    Int,
    Float,
    Str,
    Sym,
    Nil,
    True,
    False,
    Self_,
    Lvar,
    Ivar,
    /// A tag with no dedicated emitter.
    Other(String),
}

impl Tag {
    /// Every tag with a dedicated variant, in declaration order.
    pub const KNOWN: &'static [Tag] = &[
        Tag::Arg,
        Tag::Args,
        Tag::Optarg,
        Tag::Restarg,
        Tag::Blockarg,
        Tag::BlockPass,
        Tag::ArgExpr,
        Tag::Mlhs,
        Tag::Kwarg,
        Tag::Kwoptarg,
        Tag::Kwrestarg,
        Tag::Begin,
        Tag::Int,
        Tag::Float,
        Tag::Str,
        Tag::Sym,
        Tag::Nil,
        Tag::True,
        Tag::False,
        Tag::Self_,
        Tag::Lvar,
        Tag::Ivar,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Tag::Arg => "arg",
            Tag::Args => "args",
            Tag::Optarg => "optarg",
            Tag::Restarg => "restarg",
            Tag::Blockarg => "blockarg",
            Tag::BlockPass => "block_pass",
            Tag::ArgExpr => "arg_expr",
            Tag::Mlhs => "mlhs",
            Tag::Kwarg => "kwarg",
            Tag::Kwoptarg => "kwoptarg",
            Tag::Kwrestarg => "kwrestarg",
            Tag::Begin => "begin",
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::Str => "str",
            Tag::Sym => "sym",
            Tag::Nil => "nil",
            Tag::True => "true",
            Tag::False => "false",
            Tag::Self_ => "self",
            Tag::Lvar => "lvar",
            Tag::Ivar => "ivar",
            Tag::Other(name) => name,
        }
    }

}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::KNOWN
            .iter()
            .find(|tag| tag.as_str() == name)
            .cloned()
            .unwrap_or_else(|| Tag::Other(name.to_string()))
    }
}

impl FromStr for Tag {
    type Err = InvalidTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parser node types are identifiers; `__ENCODING__` and friends are
        // upper case.
        let mut chars = s.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(Tag::from(s))
        } else {
            Err(InvalidTag(s.to_string()))
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag name that is not a parser node type identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid node type `{0}`")]
pub struct InvalidTag(pub String);
