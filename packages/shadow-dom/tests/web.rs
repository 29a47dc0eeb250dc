#![cfg(all(target_arch = "wasm32", feature = "web"))]

use dioxus_shadow_dom::prelude::*;
use dioxus_shadow_dom::web::{self, WebHost};
use wasm_bindgen_test::wasm_bindgen_test;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mounted(tag: &str) -> web_sys::Element {
    let el = document().create_element(tag).unwrap();
    document().body().unwrap().append_child(&el).unwrap();
    el
}

fn inline(href: &str) -> futures::future::Ready<Result<String, FetchError>> {
    futures::future::ready(Ok(format!("/* {href} */")))
}

#[wasm_bindgen_test]
async fn projects_and_styles_the_shadow_root() {
    tracing_wasm::set_as_global_default();

    let card = VElement::new("section")
        .class("card")
        .child(VElement::new("h1").class("title").text("Hello"))
        .child(VElement::new("p").text("World"));
    let dom = ShadowDom::new(WebHost::new().unwrap(), inline, card, ["/a.css", "/b.css"]);
    let el = mounted("section");

    let task = dom.mount(&el).unwrap().unwrap();
    assert_eq!(el.class_name(), "");
    task.await;

    let root = el.shadow_root().expect("open shadow roots are reachable");
    assert_eq!(
        root.inner_html(),
        "<main><h1 class=\"title\">Hello</h1><p>World</p></main><style type=\"text/css\">/* /a.css */ /* /b.css */</style>"
    );
    assert_eq!(dom.render().class, "card resolved");

    dom.update(VElement::new("section"), ["/a.css", "/b.css"]).unwrap();
    assert_eq!(root.child_nodes().length(), 2);
}

#[wasm_bindgen_test]
fn images_cannot_host_a_shadow_root() {
    let dom = ShadowDom::new(WebHost::new().unwrap(), inline, VElement::new("img"), StylesheetRefs::None);
    let err = dom.mount(&mounted("img")).err().unwrap();
    assert!(matches!(err, ShadowDomError::UnsupportedHost(_)));
}

#[wasm_bindgen_test]
fn mount_keeps_the_class_in_sync() {
    let dom = ShadowDom::new(WebHost::new().unwrap(), inline, VElement::new("div").class("x"), StylesheetRefs::None);
    let el = mounted("div");

    web::mount(&dom, &el).unwrap();

    assert_eq!(el.class_name(), "x resolved");
}

#[wasm_bindgen_test]
fn class_sync_does_not_keep_the_instance_alive() {
    let dom = ShadowDom::new(WebHost::new().unwrap(), inline, VElement::new("div"), StylesheetRefs::None);
    let weak = dom.downgrade();

    web::mount(&dom, &mounted("div")).unwrap();
    drop(dom);

    assert!(weak.upgrade().is_none());
}
