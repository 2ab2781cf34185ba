use super::Node;
use std::fmt;

/// Pre-rendered markup, emitted verbatim.
///
/// Nothing is escaped or checked. Never wrap untrusted input in a `Raw`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Raw(String);

impl Raw {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Node for Raw {
    fn render(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn raw(s: impl Into<String>) -> Raw {
    Raw::new(s)
}
