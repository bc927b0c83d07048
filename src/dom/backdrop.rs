// backdrop.rs - Hero background: character rain, particle network, PCB traces

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement};

use super::{FrameLoop, Handles, Listener, inject_sheet, offset_size, overlay, set_attrs, svg, window, CanvasSurface};
use crate::config::SiteConfig;
use crate::fx::particles::ParticleField;
use crate::fx::rain::CharRain;
use crate::fx::styles;
use crate::fx::traces;
use crate::render::{self, Surface};
use crate::rng::XorShift32;

fn overlay_canvas(doc: &Document, container: &Element, z: i32) -> Result<CanvasSurface, JsValue> {
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    overlay(&canvas, z);
    container.append_child(&canvas)?;
    let mut surface = CanvasSurface::new(canvas)?;
    let (w, h) = offset_size(container);
    surface.resize(w, h);
    Ok(surface)
}

pub fn mount_rain(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let Some(container) = doc.get_element_by_id(&cfg.rain.container) else {
        log::debug!("rain: no #{}, skipping", cfg.rain.container);
        return Ok(());
    };

    let surface = overlay_canvas(doc, &container, 1)?;
    h.adopt(surface.canvas().clone().into());
    let (w, ht) = surface.size();
    let rain = CharRain::new(w, ht, &cfg.rain)?;

    struct State {
        rain: CharRain,
        surface: CanvasSurface,
        rng: XorShift32,
    }
    let state = Rc::new(RefCell::new(State { rain, surface, rng: XorShift32::from_js() }));

    {
        let state = state.clone();
        let container = container.clone();
        h.listen(Listener::new(&window()?, "resize", move |_: web_sys::Event| {
            let (w, ht) = offset_size(&container);
            let mut s = state.borrow_mut();
            s.surface.resize(w, ht);
            s.rain.resize(w, ht);
        })?);
    }

    let fade = cfg.rain.fade_alpha;
    h.frame(FrameLoop::start(move |_| {
        let mut s = state.borrow_mut();
        let State { rain, surface, rng } = &mut *s;
        let glyphs = rain.tick(rng);
        render::draw_rain(surface, &glyphs, rain.font_size(), fade);
        true
    }));

    log::debug!("rain: mounted on #{}", cfg.rain.container);
    Ok(())
}

pub fn mount_particles(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let Some(container) = doc.get_element_by_id(&cfg.particles.container) else {
        log::debug!("particles: no #{}, skipping", cfg.particles.container);
        return Ok(());
    };

    let surface = overlay_canvas(doc, &container, 2)?;
    h.adopt(surface.canvas().clone().into());
    let (w, ht) = surface.size();
    let field = ParticleField::new(w, ht, &cfg.particles, &mut XorShift32::from_js());

    let state = Rc::new(RefCell::new((field, surface)));

    {
        let state = state.clone();
        let container = container.clone();
        h.listen(Listener::new(&window()?, "resize", move |_: web_sys::Event| {
            let (w, ht) = offset_size(&container);
            let mut s = state.borrow_mut();
            s.1.resize(w, ht);
            s.0.resize(w, ht);
        })?);
    }

    h.frame(FrameLoop::start(move |_| {
        let mut s = state.borrow_mut();
        let (field, surface) = &mut *s;
        render::draw_particles(surface, field);
        field.update();
        true
    }));

    log::debug!("particles: {} on #{}", cfg.particles.count, cfg.particles.container);
    Ok(())
}

pub fn mount_traces(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let Some(container) = doc.get_element_by_id(&cfg.traces.container) else {
        log::debug!("traces: no #{}, skipping", cfg.traces.container);
        return Ok(());
    };

    let root = svg(doc, "svg")?;
    root.set_attribute(
        "style",
        "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:0;opacity:0.3",
    )?;

    let (w, ht) = offset_size(&container);
    root.set_attribute("viewBox", &format!("0 0 {w} {ht}"))?;

    let mut rng = XorShift32::from_js();
    for t in traces::generate(w, ht, &cfg.traces, &mut rng) {
        let len = t.length();
        let path = svg(doc, "path")?;
        set_attrs(&path, &[
            ("d", t.path_data().as_str()),
            ("stroke", "#ef4444"),
            ("stroke-width", "1"),
            ("fill", "none"),
            ("opacity", "0.15"),
            ("style", format!(
                "stroke-dasharray:{len};stroke-dashoffset:{len};animation:traceDraw {}s linear infinite",
                t.draw_s
            ).as_str()),
        ])?;
        root.append_child(&path)?;

        for v in &t.vias {
            let via = svg(doc, "circle")?;
            set_attrs(&via, &[
                ("cx", v.at.x.to_string().as_str()),
                ("cy", v.at.y.to_string().as_str()),
                ("r", "3"),
                ("fill", "#ef4444"),
                ("opacity", "0.4"),
                ("style", format!(
                    "animation:viaPulse {}s ease-in-out infinite;animation-delay:{}s",
                    v.pulse_s, v.delay_s
                ).as_str()),
            ])?;
            root.append_child(&via)?;
        }
    }

    container.append_child(&root)?;
    h.adopt(root);
    inject_sheet(doc, &styles::PCB)?;
    log::debug!("traces: {} on #{}", cfg.traces.count, cfg.traces.container);
    Ok(())
}
