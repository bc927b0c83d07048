// skills.rs - Hover links between related skill nodes

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};

use super::{CanvasSurface, Handles, Listener, inject_sheet, query_all, window};
use crate::fx::skills::{SkillGraph, SkillLayout, node_selector};
use crate::fx::styles;
use crate::render::{self, Point};

const CANVAS_ID: &str = "skills-connections";
const NODE_SELECTOR: &str = ".skill-node";

struct Overlay {
    doc: Document,
    graph: SkillGraph,
    layout: SkillLayout,
    nodes: Vec<(String, Element)>,
    surface: CanvasSurface,
    active: Option<String>,
}

impl Overlay {
    /// Match the canvas to its parent and recollect node centers
    fn relayout(&mut self) {
        let canvas = self.surface.canvas().clone();
        if let Some(parent) = canvas.parent_element() {
            let r = parent.get_bounding_client_rect();
            self.surface.resize(r.width() as f32, r.height() as f32);
            super::set_style(&canvas, "width", &format!("{}px", r.width()));
            super::set_style(&canvas, "height", &format!("{}px", r.height()));
        }

        let origin = canvas.get_bounding_client_rect();
        self.layout.clear();
        for (id, el) in &self.nodes {
            let r = el.get_bounding_client_rect();
            let c = Point::new(
                (r.left() - origin.left() + r.width() / 2.0) as f32,
                (r.top() - origin.top() + r.height() / 2.0) as f32,
            );
            self.layout.set(id, c);
        }
    }

    fn draw(&mut self) {
        let (center, links) = match &self.active {
            Some(id) => (self.layout.center(id), self.layout.links(&self.graph, id)),
            None => (None, Vec::new()),
        };
        render::draw_skill_links(&mut self.surface, center, &links);
    }

    /// Every element tagged with the id, hover target or not
    fn tagged(&self, id: &str) -> Vec<Element> {
        query_all(&self.doc, &node_selector(id))
    }

    fn enter(&mut self, id: &str) {
        self.active = Some(id.to_string());
        for el in self.tagged(id) {
            let _ = el.class_list().add_1("active-node");
        }
        for rel in self.graph.related(id) {
            for el in self.tagged(rel) {
                let _ = el.class_list().add_1("related-node");
            }
        }
        self.draw();
    }

    fn leave(&mut self) {
        self.active = None;
        for el in query_all(&self.doc, ".active-node, .related-node") {
            let _ = el.class_list().remove_2("active-node", "related-node");
        }
        self.draw();
    }
}

pub fn mount(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    let Some(canvas) = doc.get_element_by_id(CANVAS_ID) else {
        log::debug!("skills: no #{CANVAS_ID}, skipping");
        return Ok(());
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into()?;

    let nodes: Vec<(String, Element)> = query_all(doc, NODE_SELECTOR)
        .into_iter()
        .filter_map(|el| Some((el.get_attribute("data-node")?, el)))
        .collect();

    let mut graph = SkillGraph::default();
    for (id, el) in &nodes {
        graph.insert(id, &el.get_attribute("data-related").unwrap_or_default());
    }

    let overlay = Rc::new(RefCell::new(Overlay {
        doc: doc.clone(),
        graph,
        layout: SkillLayout::default(),
        nodes: nodes.clone(),
        surface: CanvasSurface::new(canvas)?,
        active: None,
    }));
    {
        let mut o = overlay.borrow_mut();
        o.relayout();
        o.draw();
    }

    for (id, el) in &nodes {
        let o = overlay.clone();
        let id = id.clone();
        h.listen(Listener::new(el, "mouseenter", move |_: MouseEvent| o.borrow_mut().enter(&id))?);

        let o = overlay.clone();
        h.listen(Listener::new(el, "mouseleave", move |_: MouseEvent| o.borrow_mut().leave())?);
    }

    h.listen(Listener::new(&window()?, "resize", move |_: web_sys::Event| {
        let mut o = overlay.borrow_mut();
        o.relayout();
        o.draw();
    })?);

    inject_sheet(doc, &styles::SKILL_NODES)?;
    log::debug!("skills: {} nodes", nodes.len());
    Ok(())
}
