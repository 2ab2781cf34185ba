mod attribute;
mod element;
mod func;
mod raw;
mod text;

pub use self::{
    attribute::{attr, attr_value, Attribute},
    element::{element, Element},
    func::{from_fn, NodeFunc},
    raw::{raw, Raw},
    text::{text, Text},
};

use std::sync::Arc;

/// How a parent element treats a child node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Rendered between the opening and closing tags
    #[default]
    Content,
    /// Rendered inside the opening tag
    Attribute,
}

/// A value that renders itself to HTML.
///
/// Implementations must be pure: rendering the same node twice yields the
/// same string. Nodes are immutable once built, which is what makes them
/// safe to render from several threads at once.
pub trait Node: Send + Sync {
    fn render(&self) -> String;

    /// Placement inside a parent element. Only attribute nodes override this.
    fn kind(&self) -> NodeKind {
        NodeKind::Content
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }

    fn kind(&self) -> NodeKind {
        (**self).kind()
    }
}

impl<T: Node + ?Sized> Node for Arc<T> {
    fn render(&self) -> String {
        (**self).render()
    }

    fn kind(&self) -> NodeKind {
        (**self).kind()
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn render(&self) -> String {
        (**self).render()
    }

    fn kind(&self) -> NodeKind {
        (**self).kind()
    }
}

/// Boxes a node as a child for [`element`].
pub fn boxed<N: Node + 'static>(node: N) -> Box<dyn Node> {
    Box::new(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Comment(&'static str);

    impl Node for Comment {
        fn render(&self) -> String {
            format!("<!-- {} -->", self.0)
        }
    }

    #[test]
    fn test_custom_node_defaults_to_content() {
        let node = Comment("hi");
        assert_eq!(node.kind(), NodeKind::Content);
        assert_eq!(node.render(), "<!-- hi -->");
    }

    #[test]
    fn test_smart_pointers_forward_kind() {
        let owned: Box<dyn Node> = Box::new(attr("hidden"));
        assert_eq!(owned.kind(), NodeKind::Attribute);
        assert_eq!(Node::render(&owned), " hidden");

        let shared: Arc<dyn Node> = Arc::new(attr_value("id", "x"));
        assert_eq!(shared.kind(), NodeKind::Attribute);

        let borrowed = &attr("open");
        assert_eq!(Node::kind(&borrowed), NodeKind::Attribute);
    }

    #[test]
    fn test_boxed_attribute_still_partitions() {
        let inner: Box<dyn Node> = Box::new(attr("checked"));
        let el = element("input", vec![boxed(inner)]);
        assert_eq!(el.render(), "<input checked/>");
    }
}
