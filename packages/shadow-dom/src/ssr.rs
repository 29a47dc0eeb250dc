//! Render projected content to an HTML string.

use crate::container::Container;
use crate::nodes::{is_class_attribute, Attribute, AttributeValue, VNode};
use crate::render::RenderDescriptor;
use crate::stylesheets::StyleNode;
use std::fmt::Write;

/// Render a single node to a string
pub fn render_node(node: &VNode) -> String {
    let mut buf = String::new();
    // writing into a String cannot fail
    let _ = write_node(&mut buf, node);
    buf
}

/// Render a container to a string. An empty container renders nothing.
pub fn render_container(container: &Container) -> String {
    let mut buf = String::new();
    let _ = write_container(&mut buf, container);
    buf
}

/// Render the outer element of a [`RenderDescriptor`], without children
pub fn render_descriptor(descriptor: &RenderDescriptor) -> String {
    let mut buf = String::new();
    let _ = write_descriptor(&mut buf, descriptor);
    buf
}

/// Render a style node to a string.
///
/// `</` in the stylesheet text is written as `<\/` so the text cannot close the style element.
pub fn render_style(style: &StyleNode) -> String {
    format!(
        "<style type=\"{}\">{}</style>",
        style.content_type,
        style.text.replace("</", "<\\/")
    )
}

pub(crate) fn write_container(buf: &mut impl Write, container: &Container) -> std::fmt::Result {
    match container {
        Container::Empty => Ok(()),
        Container::Node(node) => write_node(buf, node),
        Container::Wrapped(wrapper) => write_node(buf, &VNode::Element(wrapper.clone())),
    }
}

pub(crate) fn write_node(buf: &mut impl Write, node: &VNode) -> std::fmt::Result {
    match node {
        VNode::Text(text) => write!(buf, "{}", askama_escape::escape(text, askama_escape::Html)),
        VNode::Element(el) => {
            write!(buf, "<{}", el.tag)?;
            for attr in &el.attributes {
                write_attribute(buf, attr)?;
            }
            write!(buf, ">")?;
            for child in &el.children {
                write_node(buf, child)?;
            }
            write!(buf, "</{}>", el.tag)
        }
    }
}

fn write_descriptor(buf: &mut impl Write, descriptor: &RenderDescriptor) -> std::fmt::Result {
    write!(buf, "<{}", descriptor.tag)?;
    for attr in &descriptor.attributes {
        write_attribute(buf, attr)?;
    }
    write!(
        buf,
        " class=\"{}\"",
        askama_escape::escape(&descriptor.class, askama_escape::Html)
    )?;
    write!(buf, "></{}>", descriptor.tag)
}

pub(crate) fn write_attribute(buf: &mut impl Write, attr: &Attribute) -> std::fmt::Result {
    let name = if is_class_attribute(&attr.name) {
        "class"
    } else {
        attr.name.as_str()
    };
    match &attr.value {
        AttributeValue::Text(value) => write!(
            buf,
            " {name}=\"{}\"",
            askama_escape::escape(value, askama_escape::Html)
        ),
        AttributeValue::Bool(value) => write!(buf, " {name}={value}"),
        AttributeValue::Int(value) => write!(buf, " {name}={value}"),
        AttributeValue::Float(value) => write!(buf, " {name}={value}"),
        AttributeValue::None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::VElement;

    #[test]
    fn escapes_text() {
        let node = VElement::new("p").attr("title", "a&b").text("<b>&</b>");
        assert_eq!(
            render_node(&node.into()),
            "<p title=\"a&amp;b\">&lt;b&gt;&amp;&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn class_names_are_written_as_class() {
        let node = VElement::new("h1").class("title").text("Hi");
        assert_eq!(render_node(&node.into()), "<h1 class=\"title\">Hi</h1>");
    }

    #[test]
    fn style_text_cannot_close_the_element() {
        let style = StyleNode::css("a { color: red; }</style><script>alert(1)</script>");
        let html = render_style(&style);
        assert_eq!(html.matches("</").count(), 1);
        assert!(html.ends_with("<\\/script></style>"));
    }
}
