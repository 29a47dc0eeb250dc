//! An in-memory [`ShadowHost`].
//!
//! Shadow roots are plain records of what was committed into them. This is handy for tests and for rendering the
//! final markup of a shadow root on the server.

use crate::container::Container;
use crate::error::ShadowDomError;
use crate::host::{ShadowHost, ShadowRootMode};
use crate::ssr;
use crate::stylesheets::StyleNode;
use crate::Result;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// Elements allowed to host a shadow root, besides custom elements
const SHADOW_HOST_TAGS: &[&str] = &[
    "article",
    "aside",
    "blockquote",
    "body",
    "div",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "main",
    "nav",
    "p",
    "section",
    "span",
];

/// A mounted element in the headless tree
#[derive(Debug)]
pub struct HeadlessNode {
    tag: String,
    has_shadow: Cell<bool>,
}

impl HeadlessNode {
    /// Create a node with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            has_shadow: Cell::new(false),
        }
    }

    /// The tag of this node
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Check if this node can host a shadow root: a custom element or one of the standard container elements.
    pub fn supports_shadow(&self) -> bool {
        self.tag.contains('-') || SHADOW_HOST_TAGS.contains(&self.tag.as_str())
    }
}

/// A child of a headless shadow root
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessChild {
    /// The projected container
    Content(Container),

    /// An appended style node
    Style(StyleNode),
}

#[derive(Debug)]
struct RootData {
    host_tag: String,
    mode: ShadowRootMode,
    children: Vec<HeadlessChild>,
    renders: usize,
}

/// A shadow root attached by a [`HeadlessHost`]. Clones point at the same root.
#[derive(Debug, Clone)]
pub struct HeadlessRoot(Rc<RefCell<RootData>>);

impl HeadlessRoot {
    /// The tag of the node this root is attached to
    pub fn host_tag(&self) -> String {
        self.0.borrow().host_tag.clone()
    }

    /// The mode the root was attached with
    pub fn mode(&self) -> ShadowRootMode {
        self.0.borrow().mode
    }

    /// How many times content was committed into this root
    pub fn render_count(&self) -> usize {
        self.0.borrow().renders
    }

    /// The children of this root, in order
    pub fn children(&self) -> Vec<HeadlessChild> {
        self.0.borrow().children.clone()
    }

    /// The last container committed into this root
    pub fn content(&self) -> Option<Container> {
        self.0.borrow().children.iter().find_map(|child| match child {
            HeadlessChild::Content(container) => Some(container.clone()),
            _ => None,
        })
    }

    /// Every style node appended to this root
    pub fn styles(&self) -> Vec<StyleNode> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|child| match child {
                HeadlessChild::Style(style) => Some(style.clone()),
                _ => None,
            })
            .collect()
    }

    /// Render the children of this root to HTML
    pub fn inner_html(&self) -> String {
        self.0
            .borrow()
            .children
            .iter()
            .map(|child| match child {
                HeadlessChild::Content(container) => ssr::render_container(container),
                HeadlessChild::Style(style) => ssr::render_style(style),
            })
            .collect()
    }
}

/// A [`ShadowHost`] that keeps every shadow root in memory
#[derive(Debug, Default)]
pub struct HeadlessHost {
    roots: Vec<HeadlessRoot>,
}

impl HeadlessHost {
    /// Create a host with no shadow roots
    pub fn new() -> Self {
        Self::default()
    }

    /// Every shadow root attached through this host, in order
    pub fn roots(&self) -> &[HeadlessRoot] {
        &self.roots
    }
}

impl ShadowHost for HeadlessHost {
    type Node = HeadlessNode;
    type Boundary = HeadlessRoot;

    fn attach_shadow(&mut self, node: &HeadlessNode, mode: ShadowRootMode) -> Result<HeadlessRoot> {
        if !node.supports_shadow() {
            return Err(ShadowDomError::UnsupportedHost(format!(
                "<{}> cannot host a shadow root",
                node.tag
            )));
        }
        if node.has_shadow.replace(true) {
            return Err(ShadowDomError::UnsupportedHost(format!(
                "<{}> already hosts a shadow root",
                node.tag
            )));
        }

        let root = HeadlessRoot(Rc::new(RefCell::new(RootData {
            host_tag: node.tag.clone(),
            mode,
            children: Vec::new(),
            renders: 0,
        })));
        self.roots.push(root.clone());
        Ok(root)
    }

    fn render(&mut self, container: &Container, boundary: &HeadlessRoot) -> Result<()> {
        let mut root = boundary.0.borrow_mut();
        root.renders += 1;

        let content = HeadlessChild::Content(container.clone());
        let existing = root
            .children
            .iter()
            .position(|child| matches!(child, HeadlessChild::Content(_)));
        match existing {
            Some(index) => root.children[index] = content,
            None => root.children.insert(0, content),
        }
        Ok(())
    }

    fn append_style(&mut self, boundary: &HeadlessRoot, style: &StyleNode) -> Result<()> {
        boundary
            .0
            .borrow_mut()
            .children
            .push(HeadlessChild::Style(style.clone()));
        Ok(())
    }
}
