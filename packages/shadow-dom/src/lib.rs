#![warn(missing_docs)]
//! Dioxus Shadow DOM
//!
//! ## Overview
//! ------------
//! This crate wraps a single element and projects its children into an isolated shadow root attached to the element
//! once it has been mounted. Any stylesheets passed alongside the element are fetched, merged into one `<style>` tag
//! and appended to the shadow root. Until that merge has finished, the element carries the `resolving` class, and
//! afterwards the `resolved` class, so the outside page can hide unstyled content.
//!
//! The crate does not own a renderer. Creating the shadow root, committing content into it and fetching stylesheet
//! text all go through two seams:
//! - [`ShadowHost`] creates the boundary, commits the container into it and appends the style node.
//! - [`StylesheetFetcher`] turns a stylesheet ref into CSS text.
//!
//! Two hosts ship with the crate. [`headless::HeadlessHost`] keeps everything in memory and renders to HTML, which
//! is what the tests and server side callers use. With the `web` feature enabled, [`web::WebHost`] and
//! [`web::WebFetcher`] drive the browser through `web-sys`.
//!
//! ## Lifecycle
//! ------------
//! A [`ShadowDom`] moves through an explicit state machine:
//!
//! ```text
//! new() ─► Mounting ─► mount() ─┬─► MountedNoStyle
//!                               └─► MountedResolving ─► StyleTask ─┬─► Resolved
//!                                                                  └─► Failed
//! unmount() from any state ─► Destroyed
//! ```
//!
//! Stylesheets are resolved exactly once, when the instance is mounted. Updates re-project the container that was
//! prepared at construction time and never fetch again.
//!
//! ## Example
//! ```rust
//! use dioxus_shadow_dom::prelude::*;
//! use dioxus_shadow_dom::headless::{HeadlessHost, HeadlessNode};
//!
//! let fetcher = |href: &str| {
//!     let css = format!("/* {href} */");
//!     async move { Ok::<_, FetchError>(css) }
//! };
//!
//! let card = VElement::new("section")
//!     .class("card")
//!     .child(VElement::new("h1").text("Hello"))
//!     .child(VElement::new("p").text("World"));
//!
//! let dom = ShadowDom::new(HeadlessHost::new(), fetcher, card, ["/card.css"]);
//! assert_eq!(dom.render().class, "card resolving");
//!
//! let task = dom.mount(&HeadlessNode::new("section")).unwrap();
//! futures::executor::block_on(task.unwrap());
//!
//! assert_eq!(dom.resolution_state(), ResolutionState::Resolved);
//! assert_eq!(dom.render().class, "card resolved");
//! ```

mod cfg;
mod container;
mod error;
mod host;
mod nodes;
mod render;
mod shadow_dom;
mod state;
mod stylesheets;

pub mod headless;
pub mod ssr;

#[cfg(feature = "web")]
pub mod web;

pub use crate::cfg::Config;
pub use crate::container::{prepare_container, Container};
pub use crate::error::{FetchError, ShadowDomError};
pub use crate::host::{ShadowHost, ShadowRootMode};
pub use crate::nodes::{Attribute, AttributeValue, VElement, VNode};
pub use crate::render::{compute_output, RenderDescriptor};
pub use crate::shadow_dom::{ShadowDom, StyleTask, WeakShadowDom};
pub use crate::state::{Lifecycle, ResolutionState};
pub use crate::stylesheets::{resolve_stylesheets, StyleNode, StylesheetFetcher, StylesheetRefs};

/// A [`Result`](std::result::Result) defaulting to [`ShadowDomError`].
pub type Result<T, E = ShadowDomError> = std::result::Result<T, E>;

/// Everything needed to wrap an element in a shadow root.
pub mod prelude {
    pub use crate::{
        AttributeValue, Config, Container, FetchError, Lifecycle, RenderDescriptor,
        ResolutionState, ShadowDom, ShadowDomError, ShadowHost, ShadowRootMode, StyleNode,
        StyleTask, StylesheetFetcher, StylesheetRefs, VElement, VNode,
    };
}
