//! htmlnode: declarative HTML construction
//!
//! This crate provides:
//! - A [`Node`] trait for anything that renders to HTML
//! - Elements that sort their children into attributes and content
//! - Attribute, escaped text and raw text leaves
//! - An adapter turning plain render functions into nodes
//!
//! # Examples
//! ```
//! use htmlnode::{attr, el, render, text};
//!
//! let list = el!(
//!     "ul",
//!     attr!("class", "menu"),
//!     el!("li", text("one")),
//!     el!("li", text("two & three")),
//! );
//!
//! assert_eq!(
//!     render(&list),
//!     r#"<ul class="menu"><li>one</li><li>two &amp; three</li></ul>"#
//! );
//! ```

use tracing::instrument;

#[macro_use]
mod macros;

pub mod error;
pub mod escape;
pub mod node;

// Re-exports
pub use error::{Error, Result};
pub use node::{
    attr, attr_value, boxed, element, from_fn, raw, text, Attribute, Element, Node, NodeFunc,
    NodeKind, Raw, Text,
};

/// Renders a node tree to an HTML string.
///
/// Equivalent to calling [`Node::render`] on the root, inside a `trace`-level
/// span.
#[instrument(level = "trace", skip_all)]
pub fn render<N: Node + ?Sized>(node: &N) -> String {
    node.render()
}
