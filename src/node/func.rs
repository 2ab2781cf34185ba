use super::Node;
use std::fmt;

/// A render function used as a node.
///
/// Lets callers define one-off nodes without naming a type:
///
/// ```
/// use htmlnode::{from_fn, Node};
///
/// let year = 2024;
/// let footer = from_fn(move || format!("&copy; {year}"));
/// assert_eq!(footer.render(), "&copy; 2024");
/// ```
#[derive(Clone, Copy)]
pub struct NodeFunc<F>(F);

impl<F> NodeFunc<F>
where
    F: Fn() -> String + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Node for NodeFunc<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn render(&self) -> String {
        (self.0)()
    }
}

impl<F> From<F> for NodeFunc<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<F> fmt::Debug for NodeFunc<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NodeFunc")
    }
}

pub fn from_fn<F>(f: F) -> NodeFunc<F>
where
    F: Fn() -> String + Send + Sync,
{
    NodeFunc::new(f)
}
