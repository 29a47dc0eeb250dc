/// An error raised while mounting, projecting or styling a [`ShadowDom`](crate::ShadowDom).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShadowDomError {
    /// The mounted node cannot host a shadow root.
    #[error("The host node does not support shadow roots: {0}")]
    UnsupportedHost(String),

    /// The host failed to commit content or a style node into the shadow root.
    #[error("Failed to render into the shadow root: {0}")]
    Render(String),

    /// One of the declared stylesheets could not be fetched.
    #[error(transparent)]
    Stylesheet(#[from] FetchError),

    /// `mount` was called on an instance that already owns a shadow root.
    #[error("The shadow root has already been mounted")]
    AlreadyMounted,

    /// The instance was unmounted and can no longer be updated.
    #[error("The shadow root has been destroyed")]
    Destroyed,
}

/// A stylesheet ref that could not be turned into CSS text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to fetch stylesheet `{href}`: {message}")]
pub struct FetchError {
    /// The ref that failed.
    pub href: String,
    /// What went wrong, as reported by the fetcher.
    pub message: String,
}

impl FetchError {
    /// Create a new fetch error for the given ref
    pub fn new(href: impl Into<String>, message: impl ToString) -> Self {
        Self {
            href: href.into(),
            message: message.to_string(),
        }
    }
}
