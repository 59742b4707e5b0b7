use std::fmt;
use std::sync::Arc;

/// Original source text a tree was parsed from.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    pub name: String,
    pub text: String,
}

impl SourceBuffer {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            text: text.into(),
        })
    }
}

/// Half-open byte range `[begin, end)` into a [`SourceBuffer`].
#[derive(Clone, PartialEq, Eq)]
pub struct SourceRange {
    pub buffer: Arc<SourceBuffer>,
    pub begin: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(buffer: Arc<SourceBuffer>, begin: usize, end: usize) -> Self {
        Self { buffer, begin, end }
    }

    /// The exact text covered by this range, or `None` when the range does not
    /// lie inside the buffer on character boundaries.
    pub fn to_source(&self) -> Option<&str> {
        if self.begin > self.end {
            return None;
        }
        self.buffer.text.get(self.begin..self.end)
    }
}

// The buffer text can be large, keep debug output to the coordinates.
impl fmt::Debug for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.buffer.name, self.begin, self.end)
    }
}
