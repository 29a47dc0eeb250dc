use crate::cfg::Config;
use crate::container::{prepare_container, Container};
use crate::error::ShadowDomError;
use crate::host::ShadowHost;
use crate::nodes::VElement;
use crate::render::{compute_output, RenderDescriptor};
use crate::state::{Lifecycle, ResolutionState};
use crate::stylesheets::{resolve_stylesheets, StyleNode, StylesheetFetcher, StylesheetRefs};
use crate::Result;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::future::{AbortHandle, Abortable, LocalBoxFuture};
use futures_util::FutureExt;
use std::cell::{Ref, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll};

/// A single element whose children are projected into a shadow root.
///
/// The instance is driven by the host framework's lifecycle events:
/// - construction ([`ShadowDom::new`]) prepares the container,
/// - first paint ([`ShadowDom::mount`]) attaches the shadow root, projects the container and starts resolving
///   stylesheets,
/// - every property or content change ([`ShadowDom::update`]) re-projects the container,
/// - teardown ([`ShadowDom::unmount`]) cancels any pending stylesheet work.
///
/// [`ShadowDom::render`] produces the element to render in place of the wrapped one on every pass.
///
/// Cloning a `ShadowDom` is cheap and yields another handle to the same instance.
pub struct ShadowDom<H: ShadowHost, F> {
    inner: Rc<RefCell<Inner<H>>>,
    fetcher: Rc<F>,
}

impl<H: ShadowHost, F> Clone for ShadowDom<H, F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            fetcher: self.fetcher.clone(),
        }
    }
}

struct Inner<H: ShadowHost> {
    host: H,
    config: Config,
    component: VElement,
    stylesheets: StylesheetRefs,
    container: Container,
    boundary: Option<H::Boundary>,
    lifecycle: Lifecycle,
    resolution: ResolutionState,
    error: Option<ShadowDomError>,
    pending: Option<AbortHandle>,
    subscribers: Vec<UnboundedSender<ResolutionState>>,
}

impl<H: ShadowHost> Inner<H> {
    fn set_resolution(&mut self, next: ResolutionState) {
        if !self.resolution.can_transition_to(next) {
            tracing::warn!(
                "Ignoring resolution transition from {:?} to {:?}",
                self.resolution,
                next
            );
            return;
        }

        tracing::debug!("Shadow root resolution {:?} -> {:?}", self.resolution, next);
        self.resolution = next;
        self.subscribers
            .retain(|subscriber| subscriber.unbounded_send(next).is_ok());
    }

    fn finish(&mut self, style: std::result::Result<StyleNode, ShadowDomError>) {
        self.pending = None;

        if self.lifecycle != Lifecycle::MountedResolving {
            tracing::trace!("Dropping stylesheets resolved after teardown");
            return;
        }

        let appended = style.and_then(|style| match &self.boundary {
            Some(boundary) => self.host.append_style(boundary, &style),
            None => Err(ShadowDomError::Destroyed),
        });

        match appended {
            Ok(()) => {
                self.lifecycle = Lifecycle::Resolved;
                self.set_resolution(ResolutionState::Resolved);
            }
            Err(err) => {
                tracing::error!("Failed to resolve the stylesheets of <{}>: {err}", self.component.tag);
                self.error = Some(err);
                self.lifecycle = Lifecycle::Failed;
                self.set_resolution(ResolutionState::Failed);
            }
        }
    }
}

impl<H, F> ShadowDom<H, F>
where
    H: ShadowHost + 'static,
    F: StylesheetFetcher + 'static,
{
    /// Create a new instance wrapping `component` with the default [`Config`].
    pub fn new(
        host: H,
        fetcher: F,
        component: VElement,
        stylesheets: impl Into<StylesheetRefs>,
    ) -> Self {
        Self::new_with_config(host, fetcher, component, stylesheets, Config::default())
    }

    /// Create a new instance wrapping `component`.
    ///
    /// The container holding the component's children is prepared here, once, before any shadow root exists.
    pub fn new_with_config(
        host: H,
        fetcher: F,
        component: VElement,
        stylesheets: impl Into<StylesheetRefs>,
        config: Config,
    ) -> Self {
        let container = prepare_container(&component.children, &config.wrapper_tag);

        Self {
            inner: Rc::new(RefCell::new(Inner {
                host,
                config,
                component,
                stylesheets: stylesheets.into(),
                container,
                boundary: None,
                lifecycle: Lifecycle::Mounting,
                resolution: ResolutionState::Idle,
                error: None,
                pending: None,
                subscribers: Vec::new(),
            })),
            fetcher: Rc::new(fetcher),
        }
    }

    /// Attach the shadow root to the mounted node and project the container into it.
    ///
    /// Without stylesheets the instance is resolved before this returns and `None` is returned. Otherwise the
    /// instance is resolving and the returned [`StyleTask`] fetches the stylesheets and appends them once polled.
    /// Spawn it on the host's executor.
    ///
    /// If the node cannot host a shadow root the error is returned and the instance stays unmounted.
    ///
    /// If projecting the container fails the instance keeps the shadow root it attached and stays unmounted. Calling
    /// `mount` again projects into that same root instead of attaching a second one, so `node` is ignored.
    pub fn mount(&self, node: &H::Node) -> Result<Option<StyleTask>> {
        let mut inner = self.inner.borrow_mut();
        match inner.lifecycle {
            Lifecycle::Mounting => {}
            Lifecycle::Destroyed => return Err(ShadowDomError::Destroyed),
            _ => return Err(ShadowDomError::AlreadyMounted),
        }

        let inner = &mut *inner;
        let boundary = match inner.boundary.clone() {
            Some(boundary) => {
                tracing::debug!("Retrying the projection of <{}>", inner.component.tag);
                boundary
            }
            None => {
                let boundary = inner.host.attach_shadow(node, inner.config.mode)?;
                tracing::debug!("Attached a {:?} shadow root to <{}>", inner.config.mode, inner.component.tag);
                inner.boundary = Some(boundary.clone());
                boundary
            }
        };

        if let Err(err) = inner.host.render(&inner.container, &boundary) {
            tracing::error!("Failed to project the container of <{}>: {err}", inner.component.tag);
            return Err(err);
        }

        let hrefs = inner.stylesheets.to_vec();
        if hrefs.is_empty() {
            inner.lifecycle = Lifecycle::MountedNoStyle;
            inner.set_resolution(ResolutionState::Resolved);
            return Ok(None);
        }

        inner.lifecycle = Lifecycle::MountedResolving;
        inner.set_resolution(ResolutionState::Resolving);

        let weak = Rc::downgrade(&self.inner);
        let fetcher = self.fetcher.clone();
        let (handle, registration) = AbortHandle::new_pair();
        inner.pending = Some(handle);

        let work = async move {
            let style = resolve_stylesheets(&*fetcher, &hrefs)
                .await
                .map_err(ShadowDomError::from);
            finish(weak, style);
        };

        Ok(Some(StyleTask {
            work: Abortable::new(work.boxed_local(), registration),
        }))
    }

    /// Replace the wrapped element after a property or content change and re-project the container.
    ///
    /// The container prepared at construction is projected again as-is. Stylesheets are only resolved when the
    /// instance is mounted, so a changed list of stylesheets is ignored with a warning.
    pub fn update(&self, component: VElement, stylesheets: impl Into<StylesheetRefs>) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.lifecycle == Lifecycle::Destroyed {
            return Err(ShadowDomError::Destroyed);
        }

        let stylesheets: StylesheetRefs = stylesheets.into();
        if stylesheets.to_vec() != inner.stylesheets.to_vec() {
            tracing::warn!(
                "Changing the stylesheets of a shadow root after it was created is not supported"
            );
        }
        if component.children != inner.component.children {
            tracing::debug!("Children changed on <{}>, projecting the original container", component.tag);
        }
        inner.component = component;

        let inner = &mut *inner;
        match &inner.boundary {
            Some(boundary) => {
                tracing::trace!("Re-projecting the container of <{}>", inner.component.tag);
                inner.host.render(&inner.container, boundary)
            }
            None => Ok(()),
        }
    }

    /// Tear the instance down.
    ///
    /// Pending stylesheet work is aborted and anything it would have written is dropped. Subscribers are closed.
    pub fn unmount(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(pending) = inner.pending.take() {
            pending.abort();
        }
        inner.boundary = None;
        inner.lifecycle = Lifecycle::Destroyed;
        inner.subscribers.clear();
        tracing::debug!("Destroyed the shadow root of <{}>", inner.component.tag);
    }

    /// Compute the element rendered in place of the wrapped element
    pub fn render(&self) -> RenderDescriptor {
        let inner = self.inner.borrow();
        compute_output(&inner.component, inner.resolution)
    }

    /// Get notified every time the resolution state changes.
    ///
    /// The host framework should re-render the instance when a new state arrives.
    pub fn subscribe(&self) -> UnboundedReceiver<ResolutionState> {
        let (tx, rx) = unbounded();
        self.inner.borrow_mut().subscribers.push(tx);
        rx
    }
}

impl<H: ShadowHost, F> ShadowDom<H, F> {
    /// Create a handle that does not keep the instance alive.
    pub fn downgrade(&self) -> WeakShadowDom<H, F> {
        WeakShadowDom {
            inner: Rc::downgrade(&self.inner),
            fetcher: Rc::downgrade(&self.fetcher),
        }
    }
}

/// A [`ShadowDom`] handle that does not keep the instance alive, created with [`ShadowDom::downgrade`].
pub struct WeakShadowDom<H: ShadowHost, F> {
    inner: Weak<RefCell<Inner<H>>>,
    fetcher: Weak<F>,
}

impl<H: ShadowHost, F> WeakShadowDom<H, F> {
    /// Get the instance back if any other handle still holds it
    pub fn upgrade(&self) -> Option<ShadowDom<H, F>> {
        Some(ShadowDom {
            inner: self.inner.upgrade()?,
            fetcher: self.fetcher.upgrade()?,
        })
    }
}

impl<H: ShadowHost, F> Clone for WeakShadowDom<H, F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<H: ShadowHost, F> ShadowDom<H, F> {
    /// The current resolution state
    pub fn resolution_state(&self) -> ResolutionState {
        self.inner.borrow().resolution
    }

    /// The current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.borrow().lifecycle
    }

    /// The container prepared at construction
    pub fn container(&self) -> Ref<'_, Container> {
        Ref::map(self.inner.borrow(), |inner| &inner.container)
    }

    /// The wrapped element as of the last construction or update
    pub fn component(&self) -> Ref<'_, VElement> {
        Ref::map(self.inner.borrow(), |inner| &inner.component)
    }

    /// The shadow root, once attached and until the instance is unmounted
    pub fn boundary(&self) -> Option<H::Boundary> {
        self.inner.borrow().boundary.clone()
    }

    /// The error that moved the instance into [`ResolutionState::Failed`]
    pub fn error(&self) -> Option<ShadowDomError> {
        self.inner.borrow().error.clone()
    }

    /// The config this instance was created with
    pub fn config(&self) -> Ref<'_, Config> {
        Ref::map(self.inner.borrow(), |inner| &inner.config)
    }

    /// Borrow the host
    pub fn host(&self) -> Ref<'_, H> {
        Ref::map(self.inner.borrow(), |inner| &inner.host)
    }
}

fn finish<H: ShadowHost>(
    weak: Weak<RefCell<Inner<H>>>,
    style: std::result::Result<StyleNode, ShadowDomError>,
) {
    match weak.upgrade() {
        Some(inner) => inner.borrow_mut().finish(style),
        None => tracing::trace!("Shadow root dropped before its stylesheets resolved"),
    }
}

/// The stylesheet work of a mounted [`ShadowDom`].
///
/// Resolves once every stylesheet has been fetched and appended, once one of them failed, or once the instance was
/// unmounted. The outcome is recorded on the instance.
#[must_use = "stylesheets are only fetched once the task is polled"]
pub struct StyleTask {
    work: Abortable<LocalBoxFuture<'static, ()>>,
}

impl StyleTask {
    /// Check if the instance was unmounted while this task was pending
    pub fn is_aborted(&self) -> bool {
        self.work.is_aborted()
    }
}

impl Future for StyleTask {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.work.poll_unpin(cx).map(|_| ())
    }
}
