use super::{Node, NodeKind};
use crate::error::{Error, Result};
use std::fmt;
use tracing::error;

/// An HTML attribute.
///
/// Placed among an element's children, it is rendered into the opening tag.
/// The value is written as-is between double quotes, so callers must make
/// sure it contains no `"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Builds an attribute from a name and zero or one values.
    pub fn try_from_parts<S: AsRef<str>>(name: impl Into<String>, values: &[S]) -> Result<Self> {
        let name = name.into();
        match values {
            [] => Ok(Self::new(name, None)),
            [value] => Ok(Self::new(name, Some(value.as_ref().to_string()))),
            _ => {
                error!(attribute = %name, count = values.len(), "too many attribute values");
                Err(Error::InvalidArity {
                    name,
                    count: values.len(),
                })
            }
        }
    }

    /// Builds an attribute from a name and zero or one values.
    ///
    /// # Panics
    ///
    /// Panics when more than one value is given. That is a malformed call,
    /// not bad input, so no partial attribute is ever returned.
    #[allow(clippy::panic)]
    pub fn from_parts<S: AsRef<str>>(name: impl Into<String>, values: &[S]) -> Self {
        match Self::try_from_parts(name, values) {
            Ok(attribute) => attribute,
            Err(err) => panic!("{err}"),
        }
    }

    /// Slice form used by the [`attr!`](crate::attr) macro.
    ///
    /// # Panics
    ///
    /// Panics when more than one value is given.
    #[doc(hidden)]
    pub fn from_strs(name: impl Into<String>, values: &[&str]) -> Self {
        Self::from_parts(name, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Node for Attribute {
    fn render(&self) -> String {
        match &self.value {
            None => format!(" {}", self.name),
            Some(value) => format!(" {}=\"{}\"", self.name, value),
        }
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Attribute
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Boolean attribute such as `required`
pub fn attr(name: impl Into<String>) -> Attribute {
    Attribute::new(name, None)
}

/// Name/value attribute such as `class="header"`
pub fn attr_value(name: impl Into<String>, value: impl Into<String>) -> Attribute {
    Attribute::new(name, Some(value.into()))
}
