use dioxus_shadow_dom::prelude::*;
use dioxus_shadow_dom::compute_output;
use serde_json::json;

#[test]
fn descriptors_serialize() {
    let el = VElement::new("div").attr("id", "card").attr("tabindex", 1).class("c");
    let out = compute_output(&el, ResolutionState::Resolved);

    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({
            "tag": "div",
            "attributes": [
                { "name": "id", "value": "card" },
                { "name": "tabindex", "value": 1 },
            ],
            "class": "c resolved",
        })
    );

    assert_eq!(
        serde_json::to_value(ResolutionState::Resolving).unwrap(),
        json!("Resolving")
    );
}

#[test]
fn elements_round_trip() {
    let el = VElement::new("ul")
        .child(VElement::new("li").text("one"))
        .child(VElement::new("li").attr("hidden", true).text("two"));

    let json = serde_json::to_string(&el).unwrap();
    let back: VElement = serde_json::from_str(&json).unwrap();

    assert_eq!(back, el);
}
