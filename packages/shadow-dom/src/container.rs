use crate::nodes::{VElement, VNode};

/// The single element committed into the shadow root.
///
/// Built once before the shadow root exists and reused for every projection afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Container {
    /// The wrapped element had no children
    Empty,

    /// The wrapped element had exactly one child, which is projected as-is
    Node(VNode),

    /// The wrapped element had several children, which are held by a synthetic wrapper
    Wrapped(VElement),
}

impl Container {
    /// Check if there is anything to project
    pub fn is_empty(&self) -> bool {
        matches!(self, Container::Empty)
    }
}

/// Wrap the children of an element in a single container.
///
/// Several children are moved under a synthetic `wrapper_tag` element, a lone child is passed through untouched.
pub fn prepare_container(children: &[VNode], wrapper_tag: &str) -> Container {
    match children {
        [] => Container::Empty,
        [child] => Container::Node(child.clone()),
        children => Container::Wrapped(VElement {
            tag: wrapper_tag.to_string(),
            attributes: Vec::new(),
            children: children.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_children_is_empty() {
        assert_eq!(prepare_container(&[], "main"), Container::Empty);
        assert!(prepare_container(&[], "main").is_empty());
    }

    #[test]
    fn text_child_passes_through() {
        let children = [VNode::from("hello")];
        assert_eq!(
            prepare_container(&children, "main"),
            Container::Node(VNode::Text("hello".into()))
        );
    }
}
