use super::Node;
use crate::escape::escape_html;
use std::fmt;

/// Text content, HTML-escaped when rendered
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The unescaped payload
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Node for Text {
    fn render(&self) -> String {
        escape_html(&self.0).into_owned()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_html(&self.0))
    }
}

pub fn text(s: impl Into<String>) -> Text {
    Text::new(s)
}
