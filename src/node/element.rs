use super::{Node, NodeKind};
use std::fmt;
use tracing::trace;

/// A tagged element with an ordered list of children.
///
/// Children whose [`Node::kind`] is [`NodeKind::Attribute`] are rendered into
/// the opening tag, in the order they appear; everything else is rendered as
/// content, also in order. An element without content children self-closes,
/// even when it carries attributes.
pub struct Element {
    name: String,
    children: Vec<Box<dyn Node>>,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        children: impl IntoIterator<Item = Box<dyn Node>>,
    ) -> Self {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Node for Element {
    fn render(&self) -> String {
        if self.children.is_empty() {
            return format!("<{}/>", self.name);
        }

        // Attributes go straight into the opening tag; content waits in its own
        // buffer until the tag is closed.
        let mut out = format!("<{}", self.name);
        let mut content = String::new();
        let mut attribute_count = 0usize;

        for child in &self.children {
            let fragment = child.render();
            match child.kind() {
                NodeKind::Attribute => {
                    out.push_str(&fragment);
                    attribute_count += 1;
                }
                NodeKind::Content if content.is_empty() => content = fragment,
                NodeKind::Content => content.push_str(&fragment),
            }
        }

        trace!(
            element = %self.name,
            attributes = attribute_count,
            content = self.children.len() - attribute_count,
            "rendered element children"
        );

        if content.is_empty() {
            out.push_str("/>");
            return out;
        }

        out.reserve(content.len() + self.name.len() + 4);
        out.push('>');
        out.push_str(&content);
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Builds an element from a tag name and its children.
///
/// The tag name is not validated. See the [`el!`](crate::el) macro for a
/// variadic form that boxes the children.
pub fn element(
    name: impl Into<String>,
    children: impl IntoIterator<Item = Box<dyn Node>>,
) -> Element {
    Element::new(name, children)
}
