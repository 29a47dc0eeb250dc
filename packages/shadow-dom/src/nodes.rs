//! The element descriptors handed to a [`ShadowDom`](crate::ShadowDom).
//!
//! These are deliberately plain data: a tag, an ordered list of attributes and an ordered list of children. The host
//! framework is free to build them from whatever tree it renders.

use std::fmt::{Display, Formatter};

/// The value of an attribute on a [`VElement`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(untagged))]
pub enum AttributeValue {
    /// Text attribute
    Text(String),

    /// A float
    Float(f64),

    /// Signed integer
    Int(i64),

    /// Boolean
    Bool(bool),

    /// A "none" value, resulting in the removal of an attribute from the dom
    None,
}

impl AttributeValue {
    /// Borrow the text of this value, if it is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Text(value) => write!(f, "{value}"),
            AttributeValue::Float(value) => write!(f, "{value}"),
            AttributeValue::Int(value) => write!(f, "{value}"),
            AttributeValue::Bool(value) => write!(f, "{value}"),
            AttributeValue::None => Ok(()),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value as i64)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => AttributeValue::None,
        }
    }
}

/// A single named attribute
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// The name of the attribute.
    pub name: String,

    /// The value of the attribute
    pub value: AttributeValue,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A node in the projected tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum VNode {
    /// An element with a tag, attributes and children
    Element(VElement),

    /// A text node
    Text(String),
}

impl From<VElement> for VNode {
    fn from(element: VElement) -> Self {
        VNode::Element(element)
    }
}

impl From<&str> for VNode {
    fn from(text: &str) -> Self {
        VNode::Text(text.to_string())
    }
}

impl From<String> for VNode {
    fn from(text: String) -> Self {
        VNode::Text(text)
    }
}

/// An element descriptor: a tag, its attributes in order, and its children in order.
///
/// ```rust
/// use dioxus_shadow_dom::VElement;
///
/// let button = VElement::new("button")
///     .attr("type", "submit")
///     .class("primary")
///     .text("Save");
///
/// assert_eq!(button.class_name(), Some("primary"));
/// assert_eq!(button.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct VElement {
    /// The tag name of the element
    pub tag: String,

    /// The attributes of the element, in declaration order
    pub attributes: Vec<Attribute>,

    /// The children of the element
    pub children: Vec<VNode>,
}

impl VElement {
    /// Create an element with no attributes and no children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Set the `className` attribute
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("className", class.into())
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(VNode::Text(text.into()))
    }

    /// Look up an attribute by name
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// The class name declared on this element, from either `className` or `class`
    pub fn class_name(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| is_class_attribute(&attr.name))
            .and_then(|attr| attr.value.as_text())
    }
}

pub(crate) fn is_class_attribute(name: &str) -> bool {
    name == "className" || name == "class"
}
