use crate::container::Container;
use crate::stylesheets::StyleNode;
use crate::Result;

/// Whether the shadow root can be reached from outside its host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowRootMode {
    /// The shadow root is exposed through the host's `shadowRoot` property
    #[default]
    Open,

    /// The shadow root is hidden from outside scripts
    Closed,
}

/// The platform a [`ShadowDom`](crate::ShadowDom) renders into.
///
/// A host owns the real nodes. The shadow dom only ever asks it to create one boundary, to commit the container into
/// that boundary (any number of times) and to append the merged style node once.
pub trait ShadowHost {
    /// The mounted node the shadow root is attached to
    type Node;

    /// A handle to an attached shadow root
    type Boundary: Clone;

    /// Attach a shadow root to the mounted node.
    ///
    /// Returns [`ShadowDomError::UnsupportedHost`](crate::ShadowDomError::UnsupportedHost) when the node cannot
    /// host one.
    fn attach_shadow(&mut self, node: &Self::Node, mode: ShadowRootMode) -> Result<Self::Boundary>;

    /// Commit the container into the shadow root, replacing whatever was committed before.
    ///
    /// Nodes appended with [`ShadowHost::append_style`] must survive a re-render.
    fn render(&mut self, container: &Container, boundary: &Self::Boundary) -> Result<()>;

    /// Append a style node to the shadow root
    fn append_style(&mut self, boundary: &Self::Boundary, style: &StyleNode) -> Result<()>;
}
