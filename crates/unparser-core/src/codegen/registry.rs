use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::ast::Tag;
use crate::config::UnparserConfig;

/// Emission strategy for a family of node tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Argument,
    Arguments,
    ArgExpr,
    Optarg,
    Restarg,
    Blockarg,
    BlockPass,
    Mlhs,
    Kwarg,
    Kwoptarg,
    Kwrestarg,
    Begin,
    Integer,
    Float,
    Str,
    Symbol,
    Keyword,
    Variable,
    /// Copy the node's source range verbatim.
    SourceMap,
}

impl Strategy {
    /// Built-in strategy for a tag. Exhaustive over the known tags, so a new
    /// `Tag` variant does not compile until it is given an emitter here.
    pub fn for_tag(tag: &Tag) -> Option<Strategy> {
        let strategy = match tag {
            Tag::Arg => Strategy::Argument,
            Tag::Args => Strategy::Arguments,
            Tag::ArgExpr => Strategy::ArgExpr,
            Tag::Optarg => Strategy::Optarg,
            Tag::Restarg => Strategy::Restarg,
            Tag::Blockarg => Strategy::Blockarg,
            Tag::BlockPass => Strategy::BlockPass,
            Tag::Mlhs => Strategy::Mlhs,
            Tag::Kwarg => Strategy::Kwarg,
            Tag::Kwoptarg => Strategy::Kwoptarg,
            Tag::Kwrestarg => Strategy::Kwrestarg,
            Tag::Begin => Strategy::Begin,
            Tag::Int => Strategy::Integer,
            Tag::Float => Strategy::Float,
            Tag::Str => Strategy::Str,
            Tag::Sym => Strategy::Symbol,
            Tag::Nil | Tag::True | Tag::False | Tag::Self_ => Strategy::Keyword,
            Tag::Lvar | Tag::Ivar => Strategy::Variable,
            Tag::Other(_) => return None,
        };
        Some(strategy)
    }
}

/// Read-only `Tag -> Strategy` lookup table.
///
/// Built once, then shared by any number of renders (it is `Send + Sync`).
#[derive(Debug, Clone)]
pub struct Registry {
    entries: FxHashMap<Tag, Strategy>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(Registry::new);

impl Registry {
    /// Registry with a strategy for every known tag.
    pub fn new() -> Self {
        let mut entries = FxHashMap::default();
        for tag in Tag::KNOWN {
            if let Some(strategy) = Strategy::for_tag(tag) {
                entries.insert(tag.clone(), strategy);
            }
        }
        debug!(entries = entries.len(), "built emitter registry");
        Self { entries }
    }

    /// Built-in registry plus the config's verbatim tags.
    pub fn for_config(config: &UnparserConfig) -> Self {
        Registry::new().register(
            config.verbatim_tags.iter().map(String::as_str),
            Strategy::SourceMap,
        )
    }

    /// Registry with no entries at all.
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Shared instance of [`Registry::new`].
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Map every tag in `tags` to `strategy`, replacing earlier entries.
    pub fn register<I, T>(mut self, tags: I, strategy: Strategy) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        for tag in tags {
            let tag = tag.into();
            debug!(%tag, ?strategy, "registering emitter");
            self.entries.insert(tag, strategy);
        }
        self
    }

    pub fn lookup(&self, tag: &Tag) -> Option<Strategy> {
        self.entries.get(tag).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
