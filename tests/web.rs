// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, window};

wasm_bindgen_test_configure!(run_in_browser);

// One test so the page state is built up in a fixed order.
#[wasm_bindgen_test]
fn start_game_needs_controls_then_sets_up_page() {
    let doc = window().unwrap().document().unwrap();
    let body = doc.body().unwrap();

    let err = taiko_lanes::start_game().unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("missing element #start"));

    for id in ["start", "zero", "one", "two", "three"] {
        let button = doc.create_element("button").unwrap();
        button.set_id(id);
        body.append_child(&button).unwrap();
    }
    taiko_lanes::start_game().unwrap();

    let canvas: HtmlCanvasElement = doc.get_element_by_id("canvas").unwrap().dyn_into().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (360, 540));

    let two: web_sys::HtmlElement = doc.get_element_by_id("two").unwrap().dyn_into().unwrap();
    assert_eq!(two.style().get_property_value("left").unwrap(), "190px");
    assert_eq!(two.style().get_property_value("top").unwrap(), "400px");
}
