#![allow(dead_code)]

use dioxus_shadow_dom::headless::{HeadlessHost, HeadlessNode, HeadlessRoot};
use dioxus_shadow_dom::{
    Container, FetchError, ShadowDom, ShadowDomError, ShadowHost, ShadowRootMode, StyleNode, StyleTask,
    StylesheetFetcher,
};
use futures::executor::LocalPool;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use futures::FutureExt;
use futures_channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;

type Pending = Rc<RefCell<Vec<(String, oneshot::Sender<Result<String, FetchError>>)>>>;

/// A fetcher whose requests stay pending until the test completes them, in any order.
#[derive(Clone, Default)]
pub struct ChannelFetcher {
    pending: Pending,
    requested: Rc<RefCell<Vec<String>>>,
}

impl ChannelFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ref that was requested so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    pub fn complete(&self, href: &str, css: &str) {
        self.send(href, Ok(css.to_string()));
    }

    pub fn fail(&self, href: &str, message: &str) {
        self.send(href, Err(FetchError::new(href, message)));
    }

    fn send(&self, href: &str, result: Result<String, FetchError>) {
        let mut pending = self.pending.borrow_mut();
        let idx = pending
            .iter()
            .position(|(requested, _)| requested == href)
            .unwrap_or_else(|| panic!("{href} was never requested"));
        let (_, tx) = pending.remove(idx);
        let _ = tx.send(result);
    }
}

impl StylesheetFetcher for ChannelFetcher {
    fn fetch(&self, href: &str) -> LocalBoxFuture<'static, Result<String, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((href.to_string(), tx));
        self.requested.borrow_mut().push(href.to_string());

        let href = href.to_string();
        async move {
            rx.await
                .unwrap_or_else(|_| Err(FetchError::new(href, "request dropped")))
        }
        .boxed_local()
    }
}

pub type TestDom = ShadowDom<HeadlessHost, ChannelFetcher>;

/// Spawn the task on the pool and run it until it waits on a fetch
pub fn spawn(pool: &mut LocalPool, task: Option<StyleTask>) {
    let task = task.expect("expected stylesheets to resolve asynchronously");
    pool.spawner().spawn_local(task).unwrap();
    pool.run_until_stalled();
}

pub fn host_node() -> HeadlessNode {
    HeadlessNode::new("section")
}

/// A headless host that fails its first `render_failures` projections, and every style append when `fail_style` is set.
#[derive(Default)]
pub struct FlakyHost {
    pub inner: HeadlessHost,
    pub render_failures: usize,
    pub fail_style: bool,
}

impl ShadowHost for FlakyHost {
    type Node = HeadlessNode;
    type Boundary = HeadlessRoot;

    fn attach_shadow(&mut self, node: &HeadlessNode, mode: ShadowRootMode) -> Result<HeadlessRoot, ShadowDomError> {
        self.inner.attach_shadow(node, mode)
    }

    fn render(&mut self, container: &Container, boundary: &HeadlessRoot) -> Result<(), ShadowDomError> {
        if self.render_failures > 0 {
            self.render_failures -= 1;
            return Err(ShadowDomError::Render("projection failed".into()));
        }
        self.inner.render(container, boundary)
    }

    fn append_style(&mut self, boundary: &HeadlessRoot, style: &StyleNode) -> Result<(), ShadowDomError> {
        if self.fail_style {
            return Err(ShadowDomError::Render("style rejected".into()));
        }
        self.inner.append_style(boundary, style)
    }
}
