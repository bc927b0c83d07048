//! Browser smoke tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use circuit_fx::PageController;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn mounts_on_an_empty_page_and_disposes() {
    let mut page = PageController::mount(None).unwrap();
    assert!(page.mounted());
    page.dispose();
    assert!(!page.mounted());
}

#[wasm_bindgen_test]
fn terminal_is_removed_on_dispose() {
    let doc = document();
    let mut page = PageController::mount(Some(r#"{"chrome": {"scan_line": false}}"#.into())).unwrap();
    assert!(doc.query_selector(".embedded-terminal").unwrap().is_some());
    page.dispose();
    assert!(doc.query_selector(".embedded-terminal").unwrap().is_none());
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(PageController::mount(Some("{not json".into())).is_err());
}
