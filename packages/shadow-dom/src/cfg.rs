use crate::host::ShadowRootMode;

/// Configuration for a [`ShadowDom`](crate::ShadowDom).
///
/// # Example
///
/// ```rust
/// use dioxus_shadow_dom::{Config, ShadowRootMode};
///
/// let cfg = Config::new().with_wrapper_tag("div").with_mode(ShadowRootMode::Closed);
/// assert_eq!(cfg.wrapper_tag(), "div");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) wrapper_tag: String,
    pub(crate) mode: ShadowRootMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrapper_tag: "main".to_string(),
            mode: ShadowRootMode::Open,
        }
    }
}

impl Config {
    /// Create a new config with the default wrapper tag (`main`) and an open shadow root
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag of the element that wraps several children inside the shadow root.
    pub fn with_wrapper_tag(mut self, tag: impl Into<String>) -> Self {
        self.wrapper_tag = tag.into();
        self
    }

    /// Set the mode the shadow root is attached with.
    pub fn with_mode(mut self, mode: ShadowRootMode) -> Self {
        self.mode = mode;
        self
    }

    /// The tag used to wrap several children
    pub fn wrapper_tag(&self) -> &str {
        &self.wrapper_tag
    }

    /// The mode the shadow root is attached with
    pub fn mode(&self) -> ShadowRootMode {
        self.mode
    }
}
