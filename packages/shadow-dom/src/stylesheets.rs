//! Fetching stylesheet text and merging it into a single style node.

use crate::error::FetchError;
use futures_util::future::{try_join_all, LocalBoxFuture};
use futures_util::FutureExt;
use std::future::Future;

/// The stylesheets declared for a [`ShadowDom`](crate::ShadowDom): none, a single ref, or an ordered list of refs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum StylesheetRefs {
    /// No stylesheets
    #[default]
    None,

    /// A single stylesheet
    One(String),

    /// Several stylesheets, merged in this order
    Many(Vec<String>),
}

impl StylesheetRefs {
    /// Normalize into an ordered list of refs. An empty single ref counts as no stylesheet.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            StylesheetRefs::None => Vec::new(),
            StylesheetRefs::One(href) if href.is_empty() => Vec::new(),
            StylesheetRefs::One(href) => vec![href.clone()],
            StylesheetRefs::Many(hrefs) => hrefs.clone(),
        }
    }

    /// Check if there is nothing to fetch once normalized
    pub fn is_empty(&self) -> bool {
        match self {
            StylesheetRefs::None => true,
            StylesheetRefs::One(href) => href.is_empty(),
            StylesheetRefs::Many(hrefs) => hrefs.is_empty(),
        }
    }
}

impl From<&str> for StylesheetRefs {
    fn from(href: &str) -> Self {
        StylesheetRefs::One(href.to_string())
    }
}

impl From<String> for StylesheetRefs {
    fn from(href: String) -> Self {
        StylesheetRefs::One(href)
    }
}

impl From<Vec<String>> for StylesheetRefs {
    fn from(hrefs: Vec<String>) -> Self {
        StylesheetRefs::Many(hrefs)
    }
}

impl From<Vec<&str>> for StylesheetRefs {
    fn from(hrefs: Vec<&str>) -> Self {
        StylesheetRefs::Many(hrefs.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for StylesheetRefs {
    fn from(hrefs: &[&str]) -> Self {
        StylesheetRefs::Many(hrefs.iter().map(|href| href.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StylesheetRefs {
    fn from(hrefs: [&str; N]) -> Self {
        StylesheetRefs::Many(hrefs.iter().map(|href| href.to_string()).collect())
    }
}

impl<T: Into<StylesheetRefs>> From<Option<T>> for StylesheetRefs {
    fn from(refs: Option<T>) -> Self {
        refs.map(Into::into).unwrap_or_default()
    }
}

/// Turns a stylesheet ref into CSS text.
///
/// Any closure taking the ref and returning a future of the text is a fetcher:
///
/// ```rust
/// use dioxus_shadow_dom::{FetchError, StylesheetFetcher};
///
/// let fetcher = |href: &str| {
///     let known = href == "/theme.css";
///     let href = href.to_string();
///     async move {
///         match known {
///             true => Ok("body { color: red; }".to_string()),
///             false => Err(FetchError::new(href, "not found")),
///         }
///     }
/// };
///
/// let css = futures::executor::block_on(fetcher.fetch("/theme.css")).unwrap();
/// assert_eq!(css, "body { color: red; }");
/// ```
pub trait StylesheetFetcher {
    /// Start fetching the given ref
    fn fetch(&self, href: &str) -> LocalBoxFuture<'static, Result<String, FetchError>>;
}

impl<Func, Fut> StylesheetFetcher for Func
where
    Func: Fn(&str) -> Fut,
    Fut: Future<Output = Result<String, FetchError>> + 'static,
{
    fn fetch(&self, href: &str) -> LocalBoxFuture<'static, Result<String, FetchError>> {
        self(href).boxed_local()
    }
}

/// The style node appended to the shadow root once every stylesheet has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleNode {
    /// The value of the `type` attribute
    pub content_type: &'static str,

    /// The merged CSS text
    pub text: String,
}

impl StyleNode {
    /// Create a `text/css` style node
    pub fn css(text: impl Into<String>) -> Self {
        Self {
            content_type: "text/css",
            text: text.into(),
        }
    }
}

/// Fetch every ref concurrently and merge the texts, in the order of `hrefs`, separated by a single space.
///
/// Fails as soon as any ref fails; there is no partial result.
pub async fn resolve_stylesheets(
    fetcher: &impl StylesheetFetcher,
    hrefs: &[String],
) -> Result<StyleNode, FetchError> {
    let texts = try_join_all(hrefs.iter().map(|href| {
        tracing::trace!("Fetching stylesheet {href}");
        fetcher.fetch(href)
    }))
    .await?;

    Ok(StyleNode::css(texts.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_refs() {
        assert!(StylesheetRefs::from("").is_empty());
        assert!(StylesheetRefs::from(Vec::<String>::new()).is_empty());
        assert!(StylesheetRefs::from(None::<&str>).is_empty());
        assert_eq!(StylesheetRefs::from("/a.css").to_vec(), vec!["/a.css"]);
        assert_eq!(
            StylesheetRefs::from(["/a.css", "/b.css"]).to_vec(),
            vec!["/a.css", "/b.css"]
        );
        assert_eq!(
            StylesheetRefs::from(Some(vec!["/a.css"])),
            StylesheetRefs::Many(vec!["/a.css".to_string()])
        );
    }
}
