// dom/ - Browser bindings
//
// Each component mounts onto one anchor element. A missing anchor is not an
// error: the component logs and stays out of the page. Everything a
// component registers is pushed into `Handles` so the page can tear down.

mod backdrop;
mod canvas;
mod chrome;
mod console;
mod decor;
mod frame;
mod listener;
mod page;
mod skills;
mod timer;
mod typing;

pub use canvas::CanvasSurface;
pub use frame::FrameLoop;
pub use listener::{Listener, Observer};
pub use page::PageController;
pub use timer::Ticker;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::fx::styles::Sheet;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Everything a mounted page owns. Dropping it detaches the page.
#[derive(Default)]
pub struct Handles {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    loops: Vec<FrameLoop>,
    tickers: Vec<Ticker>,
    nodes: Vec<Element>,
}

impl Handles {
    pub fn listen(&mut self, l: Listener) { self.listeners.push(l); }
    pub fn observe(&mut self, o: Observer) { self.observers.push(o); }
    pub fn frame(&mut self, f: FrameLoop) { self.loops.push(f); }
    pub fn tick(&mut self, t: Ticker) { self.tickers.push(t); }

    /// Element created by us, removed again on teardown
    pub fn adopt(&mut self, el: Element) { self.nodes.push(el); }

    pub fn counts(&self) -> [usize; 5] {
        [self.listeners.len(), self.observers.len(), self.loops.len(), self.tickers.len(), self.nodes.len()]
    }
}

impl Drop for Handles {
    fn drop(&mut self) {
        for l in &self.loops { l.stop(); }
        for t in &self.tickers { t.stop(); }
        for n in self.nodes.drain(..) { n.remove(); }
    }
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| JsValue::from_str("no document"))
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector).map(|l| collect(&l)).unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(|l| collect(&l)).unwrap_or_default()
}

fn collect(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<HtmlElement>() {
        let _ = h.style().set_property(prop, value);
    }
}

/// Style an element that fills its positioned parent
pub fn overlay(el: &Element, z_index: i32) {
    for (k, v) in [
        ("position", "absolute"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
    ] {
        set_style(el, k, v);
    }
    set_style(el, "z-index", &z_index.to_string());
}

pub fn svg(doc: &Document, tag: &str) -> Result<Element, JsValue> {
    doc.create_element_ns(Some(SVG_NS), tag)
}

pub fn set_attrs(el: &Element, attrs: &[(&str, &str)]) -> Result<(), JsValue> {
    for (k, v) in attrs {
        el.set_attribute(k, v)?;
    }
    Ok(())
}

/// Add a stylesheet once; later calls with the same id do nothing
pub fn inject_sheet(doc: &Document, sheet: &Sheet) -> Result<(), JsValue> {
    if doc.get_element_by_id(sheet.id).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id(sheet.id);
    style.set_text_content(Some(sheet.css));
    let head = doc.head().ok_or_else(|| JsValue::from_str("no <head>"))?;
    head.append_child(&style)?;
    Ok(())
}

/// Layout size of an element in CSS pixels
pub fn offset_size(el: &Element) -> (f32, f32) {
    match el.dyn_ref::<HtmlElement>() {
        Some(h) => (h.offset_width() as f32, h.offset_height() as f32),
        None => {
            let r = el.get_bounding_client_rect();
            (r.width() as f32, r.height() as f32)
        }
    }
}
