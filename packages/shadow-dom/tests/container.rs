//! Tests for how children are gathered into the projected container.

use dioxus_shadow_dom::headless::{HeadlessHost, HeadlessNode};
use dioxus_shadow_dom::prelude::*;
use dioxus_shadow_dom::{prepare_container, FetchError};
use pretty_assertions::assert_eq;

fn no_fetch(href: &str) -> futures::future::Ready<Result<String, FetchError>> {
    futures::future::ready(Err(FetchError::new(href, "unexpected fetch")))
}

#[test]
fn several_children_are_wrapped() {
    let a = VNode::from(VElement::new("a"));
    let b = VNode::from(VElement::new("b"));

    let container = prepare_container(&[a.clone(), b.clone()], "main");

    assert_eq!(
        container,
        Container::Wrapped(VElement {
            tag: "main".into(),
            attributes: vec![],
            children: vec![a, b],
        })
    );
}

#[test]
fn a_lone_child_is_not_wrapped() {
    let a = VNode::from(VElement::new("a").attr("href", "/"));
    assert_eq!(prepare_container(&[a.clone()], "main"), Container::Node(a));
}

#[test]
fn projected_markup() {
    let el = VElement::new("div")
        .child(VElement::new("a").text("one"))
        .child(VElement::new("b").text("two"));
    let dom = ShadowDom::new(HeadlessHost::new(), no_fetch, el, StylesheetRefs::None);
    dom.mount(&HeadlessNode::new("div")).unwrap();

    assert_eq!(
        dom.boundary().unwrap().inner_html(),
        "<main><a>one</a><b>two</b></main>"
    );

    let single = VElement::new("div").child(VElement::new("a").text("one"));
    let dom = ShadowDom::new(HeadlessHost::new(), no_fetch, single, StylesheetRefs::None);
    dom.mount(&HeadlessNode::new("div")).unwrap();

    assert_eq!(dom.boundary().unwrap().inner_html(), "<a>one</a>");
}

#[test]
fn childless_elements_still_get_a_shadow_root() {
    let dom = ShadowDom::new(
        HeadlessHost::new(),
        no_fetch,
        VElement::new("div"),
        StylesheetRefs::None,
    );
    dom.mount(&HeadlessNode::new("div")).unwrap();

    let root = dom.boundary().unwrap();
    assert!(dom.container().is_empty());
    assert_eq!(root.inner_html(), "");
    assert_eq!(root.render_count(), 1);
}

#[test]
fn projected_class_names_are_html_class_attributes() {
    let el = VElement::new("div").child(VElement::new("h1").class("title").text("Hi"));
    let dom = ShadowDom::new(HeadlessHost::new(), no_fetch, el, StylesheetRefs::None);
    dom.mount(&HeadlessNode::new("div")).unwrap();

    assert_eq!(dom.boundary().unwrap().inner_html(), "<h1 class=\"title\">Hi</h1>");
}
