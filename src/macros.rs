//! Variadic construction macros.

/// Builds an [`Element`](crate::Element) from a tag name and any number of
/// child nodes, boxing each child.
///
/// Children are stored as `Box<dyn Node>`, so each one must be `'static`.
/// To use one subtree in several places, wrap it in an `Arc` and pass clones.
///
/// ```
/// use htmlnode::{attr, el, render, text};
///
/// let link = el!("a", attr!("href", "/x"), text("go"));
/// assert_eq!(render(&link), r#"<a href="/x">go</a>"#);
/// ```
#[macro_export]
macro_rules! el {
    ($name:expr $(, $child:expr)* $(,)?) => {
        $crate::element(
            $name,
            ::std::vec![
                $($crate::node::boxed($child)),*
            ],
        )
    };
}

/// Builds an [`Attribute`](crate::Attribute) from a name and zero or one
/// values.
///
/// `attr!("required")` is a boolean attribute, `attr!("class", "header")`
/// a name/value one.
///
/// # Panics
///
/// Panics when given more than one value.
///
/// ```should_panic
/// use htmlnode::attr;
///
/// let _ = attr!("class", "a", "b");
/// ```
#[macro_export]
macro_rules! attr {
    ($name:expr $(, $value:expr)* $(,)?) => {
        $crate::Attribute::from_strs(
            $name,
            &[$(::std::convert::AsRef::<str>::as_ref(&$value)),*],
        )
    };
}
