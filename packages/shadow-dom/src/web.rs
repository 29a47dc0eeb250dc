//! The browser backend, built on `web-sys`.

use crate::container::Container;
use crate::error::{FetchError, ShadowDomError};
use crate::host::{ShadowHost, ShadowRootMode};
use crate::nodes::{is_class_attribute, AttributeValue, VNode};
use crate::render::RenderDescriptor;
use crate::shadow_dom::ShadowDom;
use crate::stylesheets::{StyleNode, StylesheetFetcher};
use crate::Result;
use futures_util::future::LocalBoxFuture;
use futures_util::{FutureExt, StreamExt};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Node, Response, ShadowRoot, ShadowRootInit};

fn js_error(value: JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{value:?}"),
    }
}

/// A shadow root attached by a [`WebHost`]
#[derive(Debug, Clone)]
pub struct WebShadowRoot {
    root: ShadowRoot,
    content: Rc<RefCell<Option<Node>>>,
}

impl WebShadowRoot {
    /// The underlying shadow root
    pub fn shadow_root(&self) -> &ShadowRoot {
        &self.root
    }
}

/// A [`ShadowHost`] rendering into the browser's DOM
pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// Create a host for the current window's document
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ShadowDomError::UnsupportedHost("no document is available".into()))?;
        Ok(Self { document })
    }

    /// Create a host for the given document
    pub fn with_document(document: Document) -> Self {
        Self { document }
    }

    fn create_node(&self, node: &VNode) -> Result<Node> {
        match node {
            VNode::Text(text) => Ok(self.document.create_text_node(text).into()),
            VNode::Element(el) => {
                let element = self
                    .document
                    .create_element(&el.tag)
                    .map_err(|err| ShadowDomError::Render(js_error(err)))?;

                for attr in &el.attributes {
                    let name = match is_class_attribute(&attr.name) {
                        true => "class",
                        false => attr.name.as_str(),
                    };
                    let value = match &attr.value {
                        AttributeValue::None | AttributeValue::Bool(false) => continue,
                        value => value.to_string(),
                    };
                    element
                        .set_attribute(name, &value)
                        .map_err(|err| ShadowDomError::Render(js_error(err)))?;
                }

                for child in &el.children {
                    element
                        .append_child(&self.create_node(child)?)
                        .map_err(|err| ShadowDomError::Render(js_error(err)))?;
                }

                Ok(element.into())
            }
        }
    }

    fn create_container(&self, container: &Container) -> Result<Option<Node>> {
        match container {
            Container::Empty => Ok(None),
            Container::Node(node) => self.create_node(node).map(Some),
            Container::Wrapped(wrapper) => self
                .create_node(&VNode::Element(wrapper.clone()))
                .map(Some),
        }
    }
}

impl ShadowHost for WebHost {
    type Node = Element;
    type Boundary = WebShadowRoot;

    fn attach_shadow(&mut self, node: &Element, mode: ShadowRootMode) -> Result<WebShadowRoot> {
        let mode = match mode {
            ShadowRootMode::Open => web_sys::ShadowRootMode::Open,
            ShadowRootMode::Closed => web_sys::ShadowRootMode::Closed,
        };
        let root = node
            .attach_shadow(&ShadowRootInit::new(mode))
            .map_err(|err| ShadowDomError::UnsupportedHost(js_error(err)))?;

        Ok(WebShadowRoot {
            root,
            content: Rc::new(RefCell::new(None)),
        })
    }

    fn render(&mut self, container: &Container, boundary: &WebShadowRoot) -> Result<()> {
        let next = self.create_container(container)?;
        let mut content = boundary.content.borrow_mut();

        let result = match (content.as_ref(), next.as_ref()) {
            (Some(previous), Some(next)) => boundary.root.replace_child(next, previous).map(drop),
            (Some(previous), None) => boundary.root.remove_child(previous).map(drop),
            (None, Some(next)) => boundary
                .root
                .insert_before(next, boundary.root.first_child().as_ref())
                .map(drop),
            (None, None) => Ok(()),
        };
        result.map_err(|err| ShadowDomError::Render(js_error(err)))?;

        *content = next;
        Ok(())
    }

    fn append_style(&mut self, boundary: &WebShadowRoot, style: &StyleNode) -> Result<()> {
        let element = self
            .document
            .create_element("style")
            .map_err(|err| ShadowDomError::Render(js_error(err)))?;
        element
            .set_attribute("type", style.content_type)
            .map_err(|err| ShadowDomError::Render(js_error(err)))?;
        element.set_text_content(Some(style.text.as_str()));

        boundary
            .root
            .append_child(&element)
            .map_err(|err| ShadowDomError::Render(js_error(err)))?;
        Ok(())
    }
}

/// Fetches stylesheets with `window.fetch`.
///
/// Responses outside of the 2xx range are treated as failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebFetcher;

impl StylesheetFetcher for WebFetcher {
    fn fetch(&self, href: &str) -> LocalBoxFuture<'static, std::result::Result<String, FetchError>> {
        fetch_text(href.to_string()).boxed_local()
    }
}

async fn fetch_text(href: String) -> std::result::Result<String, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::new(&href, "no window is available"))?;

    let response = JsFuture::from(window.fetch_with_str(&href))
        .await
        .map_err(|err| FetchError::new(&href, js_error(err)))?
        .unchecked_into::<Response>();

    if !response.ok() {
        return Err(FetchError::new(
            &href,
            format!("server responded with {}", response.status()),
        ));
    }

    let text_promise = response
        .text()
        .map_err(|err| FetchError::new(&href, js_error(err)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| FetchError::new(&href, js_error(err)))?;

    text.as_string()
        .ok_or_else(|| FetchError::new(&href, "response body is not text"))
}

/// Set the class of the mounted element from a render descriptor
pub fn sync_class(element: &Element, descriptor: &RenderDescriptor) {
    if let Err(err) = element.set_attribute("class", &descriptor.class) {
        tracing::error!("Failed to set the class of <{}>: {}", descriptor.tag, js_error(err));
    }
}

/// Mount a shadow dom on an element that is already in the page.
///
/// The stylesheet work is spawned on the browser's microtask queue, and the element's class is kept in sync with the
/// resolution state until the instance is unmounted or dropped.
pub fn mount<F>(dom: &ShadowDom<WebHost, F>, element: &Element) -> Result<()>
where
    F: StylesheetFetcher + 'static,
{
    let task = dom.mount(element)?;
    let mut states = dom.subscribe();
    sync_class(element, &dom.render());

    if let Some(task) = task {
        wasm_bindgen_futures::spawn_local(task);
    }

    let dom = dom.downgrade();
    let element = element.clone();
    wasm_bindgen_futures::spawn_local(async move {
        while states.next().await.is_some() {
            let Some(live) = dom.upgrade() else { break };
            sync_class(&element, &live.render());
        }
    });

    Ok(())
}
