use crate::nodes::{is_class_attribute, Attribute, VElement};
use crate::state::ResolutionState;

/// The element rendered in place of the wrapped element.
///
/// It keeps the wrapped element's tag and attributes, minus its children (which live in the shadow root) and its class
/// name, which is recomputed to carry the resolution state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderDescriptor {
    /// The tag of the wrapped element
    pub tag: String,

    /// The remaining attributes, in their original order
    pub attributes: Vec<Attribute>,

    /// The original class name followed by the resolution token
    pub class: String,
}

/// Derive the outer element from the wrapped element and the current resolution state.
///
/// The wrapped element is never modified; the output holds copies of its attributes.
pub fn compute_output(component: &VElement, state: ResolutionState) -> RenderDescriptor {
    let mut class_names = Vec::new();
    let mut attributes = Vec::with_capacity(component.attributes.len());

    for attr in &component.attributes {
        if attr.name == "children" {
            continue;
        }
        if is_class_attribute(&attr.name) {
            if let Some(text) = attr.value.as_text() {
                class_names.push(text);
            }
            continue;
        }
        attributes.push(attr.clone());
    }

    let class = format!("{} {}", class_names.join(" "), state.class_token())
        .trim()
        .to_string();

    RenderDescriptor {
        tag: component.tag.clone(),
        attributes,
        class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_token() {
        let out = compute_output(&VElement::new("div").class("card"), ResolutionState::Failed);
        assert_eq!(out.class, "card failed");
    }

    #[test]
    fn whitespace_class_is_trimmed() {
        let out = compute_output(&VElement::new("div").class("  "), ResolutionState::Resolved);
        assert_eq!(out.class, "resolved");
    }
}
