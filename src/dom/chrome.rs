// chrome.rs - Navigation, reveal, counters, card tilt and other page chrome

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions,
};

use super::{FrameLoop, Handles, Listener, Observer, Ticker, inject_sheet, query_all, query_all_in, set_style, window};
use crate::config::{ChromeConfig, CounterConfig, SiteConfig};
use crate::fx::chrome::{self, MenuState, Section, Tilt};
use crate::fx::counter::StatCounter;
use crate::fx::styles;
use crate::rng::XorShift32;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

fn navbar_height(navbar: &Element) -> f64 {
    navbar.dyn_ref::<HtmlElement>().map_or(0.0, |h| h.offset_height() as f64)
}

/// Scrolled class and active link tracking
pub fn mount_nav(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let Some(navbar) = doc.get_element_by_id("navbar") else {
        log::debug!("nav: no #navbar, skipping");
        return Ok(());
    };

    let win = window()?;
    let doc = doc.clone();
    let links = query_all(&doc, ".nav-link");
    let chrome_cfg = cfg.chrome.clone();
    let w = win.clone();

    h.listen(Listener::new(&win, "scroll", move |_: Event| {
        let y = w.scroll_y().unwrap_or(0.0);
        let _ = navbar.class_list().toggle_with_force("scrolled", chrome::navbar_scrolled(y, &chrome_cfg));
        update_active_link(&doc, &navbar, &links, y, &chrome_cfg);
    })?);
    Ok(())
}

fn update_active_link(doc: &Document, navbar: &Element, links: &[Element], scroll_y: f64, cfg: &ChromeConfig) {
    let measured: Vec<(String, f64, f64)> = query_all(doc, "section[id]")
        .into_iter()
        .filter_map(|el| {
            let h = el.dyn_ref::<HtmlElement>()?;
            Some((el.id(), h.offset_top() as f64, h.offset_height() as f64))
        })
        .collect();
    let sections: Vec<Section> = measured
        .iter()
        .map(|(id, top, height)| Section { id, top: *top, height: *height })
        .collect();

    let Some(active) = chrome::active_section(scroll_y, navbar_height(navbar), &sections, cfg) else {
        return;
    };
    let href = format!("#{active}");
    for link in links {
        let on = link.get_attribute("href").as_deref() == Some(href.as_str());
        let _ = link.class_list().toggle_with_force("active", on);
    }
}

/// Hamburger toggle; any nav link closes the menu again
pub fn mount_menu(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (doc.get_element_by_id("navToggle"), doc.get_element_by_id("navMenu")) else {
        log::debug!("menu: no #navToggle/#navMenu, skipping");
        return Ok(());
    };

    let state = Rc::new(Cell::new(MenuState::default()));
    let bars = query_all_in(&toggle, "span");
    let apply = Rc::new(move |m: MenuState| {
        let _ = menu.class_list().toggle_with_force("active", m.is_open());
        for (bar, (transform, opacity)) in bars.iter().zip(m.bars()) {
            set_style(bar, "transform", transform);
            set_style(bar, "opacity", opacity);
        }
    });

    {
        let state = state.clone();
        let apply = apply.clone();
        h.listen(Listener::new(&toggle, "click", move |_: MouseEvent| {
            let mut m = state.get();
            m.toggle();
            state.set(m);
            apply(m);
        })?);
    }

    for link in query_all(doc, ".nav-link") {
        let state = state.clone();
        let apply = apply.clone();
        h.listen(Listener::new(&link, "click", move |_: MouseEvent| {
            let mut m = state.get();
            m.close();
            state.set(m);
            apply(m);
        })?);
    }
    Ok(())
}

/// In-page anchors scroll to their target just below the navbar
pub fn mount_smooth_scroll(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    let win = window()?;
    for anchor in query_all(doc, "a[href^=\"#\"]") {
        let doc = doc.clone();
        let win = win.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        h.listen(Listener::new(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            let Some(id) = chrome::anchor_id(&href) else { return };
            let Some(target) = doc.get_element_by_id(id) else { return };
            let Some(target) = target.dyn_ref::<HtmlElement>() else { return };

            let nav_h = doc.get_element_by_id("navbar").map_or(0.0, |n| navbar_height(&n));
            let opts = ScrollToOptions::new();
            opts.set_top(chrome::scroll_target(target.offset_top() as f64, nav_h));
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        })?);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Visibility driven
// ---------------------------------------------------------------------------

pub fn mount_reveal(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    let targets = query_all(doc, chrome::REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let obs = Observer::new(0.1, Some("0px 0px -50px 0px"), |el, _| {
        set_style(&el, "opacity", "1");
        set_style(&el, "transform", "translateY(0)");
    })?;
    for el in &targets {
        set_style(el, "opacity", "0");
        set_style(el, "transform", "translateY(30px)");
        set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        obs.observe(el);
    }
    h.observe(obs);
    log::debug!("reveal: {} elements", targets.len());
    Ok(())
}

pub fn mount_lazy_images(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    let images = query_all(doc, "img[data-src]");
    if images.is_empty() {
        return Ok(());
    }

    let obs = Observer::new(0.0, None, |img, obs| {
        if let Some(src) = img.get_attribute("data-src") {
            let _ = img.set_attribute("src", &src);
            let _ = img.remove_attribute("data-src");
        }
        obs.unobserve(&img);
    })?;
    for img in &images {
        obs.observe(img);
    }
    h.observe(obs);
    Ok(())
}

struct CounterSlot {
    counter: StatCounter,
    el: Element,
    anim: Option<FrameLoop>,
    flicker: Option<Ticker>,
}

impl CounterSlot {
    fn show(&self, value: u32) {
        self.el.set_text_content(Some(&value.to_string()));
    }
}

pub fn mount_counters(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let elements = query_all(doc, ".stat-number[data-target]");
    for el in elements {
        let target = StatCounter::parse_target(el.get_attribute("data-target").as_deref());
        let slot = Rc::new(RefCell::new(CounterSlot {
            counter: StatCounter::new(target, &cfg.counter),
            el: el.clone(),
            anim: None,
            flicker: None,
        }));

        let counter_cfg = cfg.counter.clone();
        let obs = Observer::new(0.5, None, move |_, _| start_counter(&slot, &counter_cfg))?;
        obs.observe(&el);
        h.observe(obs);
    }
    Ok(())
}

fn start_counter(slot: &Rc<RefCell<CounterSlot>>, cfg: &CounterConfig) {
    let mut s = slot.borrow_mut();
    if !s.counter.trigger() {
        return;
    }

    let weak = Rc::downgrade(slot);
    let cfg = cfg.clone();
    let mut started: Option<f64> = None;
    s.anim = Some(FrameLoop::start(move |ts| {
        let Some(slot) = weak.upgrade() else { return false };
        let mut s = slot.borrow_mut();
        let elapsed = ts - *started.get_or_insert(ts);
        let value = s.counter.value_at(elapsed);
        s.show(value);
        if s.counter.progress(elapsed) < 1.0 {
            return true;
        }
        s.flicker = Some(flicker(Rc::downgrade(&slot), &cfg));
        false
    }));
}

/// Every `flicker_every_ms`, maybe flash a random value for `flicker_hold_ms`
fn flicker(slot: Weak<RefCell<CounterSlot>>, cfg: &CounterConfig) -> Ticker {
    let every = cfg.flicker_every_ms;
    let hold = cfg.flicker_hold_ms.min(every);
    let mut rng = XorShift32::from_js();
    let mut flashing = false;

    Ticker::start(every, move || {
        let slot = slot.upgrade()?;
        let s = slot.borrow();
        if flashing {
            flashing = false;
            s.show(s.counter.target());
            return Some(every - hold);
        }
        match s.counter.flicker(&mut rng) {
            Some(v) => {
                flashing = true;
                s.show(v);
                Some(hold)
            }
            None => Some(every),
        }
    })
}

// ---------------------------------------------------------------------------
// Pointer effects
// ---------------------------------------------------------------------------

pub fn mount_tilt(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    for card in query_all(doc, ".project-card") {
        let el = card.clone();
        let chrome_cfg = cfg.chrome.clone();
        h.listen(Listener::new(&card, "mousemove", move |e: MouseEvent| {
            let r = el.get_bounding_client_rect();
            let x = e.client_x() as f64 - r.left();
            let y = e.client_y() as f64 - r.top();
            let tilt = Tilt::at(x, y, r.width(), r.height(), &chrome_cfg);
            set_style(&el, "transform", &tilt.transform());
        })?);

        let el = card.clone();
        h.listen(Listener::new(&card, "mouseleave", move |_: MouseEvent| {
            set_style(&el, "transform", Tilt::RESET);
        })?);
    }
    Ok(())
}

/// Skill tag zoom, nav link hologram flash and glitch labels
pub fn mount_flourishes(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    for tag in query_all(doc, ".skill-tag") {
        let el = tag.clone();
        h.listen(Listener::new(&tag, "mouseenter", move |_: MouseEvent| set_style(&el, "transform", "scale(1.1)"))?);
        let el = tag.clone();
        h.listen(Listener::new(&tag, "mouseleave", move |_: MouseEvent| set_style(&el, "transform", "scale(1)"))?);
    }

    for link in query_all(doc, ".nav-links a") {
        let el = link.clone();
        h.listen(Listener::new(&link, "mouseenter", move |_: MouseEvent| {
            set_style(&el, "animation", "hologram 0.3s ease-in-out");
        })?);
        let el = link.clone();
        h.listen(Listener::new(&link, "animationend", move |_: Event| set_style(&el, "animation", ""))?);
    }

    for el in query_all(doc, ".project-card-front h3") {
        glitch(&el)?;
    }
    for el in query_all(doc, ".section-title") {
        if !el.class_list().contains("glitch-text") {
            glitch(&el)?;
        }
    }
    Ok(())
}

fn glitch(el: &Element) -> Result<(), JsValue> {
    el.class_list().add_1("glitch-text")?;
    el.set_attribute("data-text", &el.text_content().unwrap_or_default())
}

pub fn mount_scan_line(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    if !cfg.chrome.scan_line {
        return Ok(());
    }
    let Some(body) = doc.body() else { return Ok(()) };
    let line = doc.create_element("div")?;
    line.set_class_name("scan-line");
    body.append_child(&line)?;
    h.adopt(line);
    inject_sheet(doc, &styles::SCAN_LINE)
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

pub fn mount_contact_form(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    if let Some(form) = doc.get_element_by_id("contactForm") {
        let button = form
            .query_selector("button[type=\"submit\"]")?
            .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
        if let Some(button) = button {
            // The form still posts natively
            h.listen(Listener::new(&form, "submit", move |_: Event| {
                button.set_text_content(Some("Sending..."));
                button.set_disabled(true);
            })?);
        }
    }

    let location = window()?.location();
    let hash = location.hash().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    if chrome::form_submitted(&hash, &search) {
        if let Some(status) = doc.get_element_by_id("form-status") {
            status.set_inner_html(chrome::FORM_THANKS);
            set_style(&status, "display", "block");
        }
    }
    Ok(())
}
