// decor.rs - One-shot SVG decorations: hexagon border, waveform dividers, LEDs

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::{FrameLoop, Handles, inject_sheet, query_all, set_attrs, svg};
use crate::config::SiteConfig;
use crate::fx::led::LedPattern;
use crate::fx::waveform::{WaveKind, Waveform};
use crate::fx::{hexagon, styles};
use crate::rng::{Entropy, XorShift32};

pub fn mount_hexagon(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let selector = format!(".{}", cfg.hexagon.container_class);
    let Some(container) = doc.query_selector(&selector)? else {
        log::debug!("hexagon: no {selector}, skipping");
        return Ok(());
    };

    let root = svg(doc, "svg")?;
    set_attrs(&root, &[("class", "hexagon-border"), ("viewBox", hexagon::VIEW_BOX)])?;

    for i in 0..hexagon::LAYERS {
        let path = svg(doc, "path")?;
        set_attrs(&path, &[("d", hexagon::PATH), ("class", hexagon::layer_class(i).as_str())])?;
        root.append_child(&path)?;
    }

    for led in hexagon::leds() {
        let dot = svg(doc, "circle")?;
        set_attrs(&dot, &[
            ("cx", led.at.x.to_string().as_str()),
            ("cy", led.at.y.to_string().as_str()),
            ("r", "4"),
            ("class", "led-dot"),
            ("style", format!("animation-delay:{}s", led.delay_s).as_str()),
        ])?;
        root.append_child(&dot)?;
    }

    container.append_child(&root)?;
    h.adopt(root);
    inject_sheet(doc, &styles::HEXAGON)
}

pub fn mount_waveforms(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let dividers = query_all(doc, ".waveform-divider");
    if dividers.is_empty() {
        return Ok(());
    }
    inject_sheet(doc, &styles::WAVEFORM)?;

    let mut rng = XorShift32::from_js();
    for divider in dividers {
        let kind = WaveKind::from_attr(divider.get_attribute("data-wave-type").as_deref());
        let mut wave = Waveform::new(kind, &cfg.waveform);

        let root = svg(doc, "svg")?;
        set_attrs(&root, &[
            ("class", "waveform-svg"),
            ("viewBox", format!("0 0 {} {}", cfg.waveform.width, cfg.waveform.height).as_str()),
            ("preserveAspectRatio", "none"),
        ])?;

        root.append_child(&glow_filter(doc, &mut rng)?)?;

        let path = svg(doc, "path")?;
        set_attrs(&path, &[("class", "waveform-path"), ("d", wave.path().as_str())])?;
        root.append_child(&path)?;
        divider.append_child(&root)?;
        h.adopt(root);

        if kind.is_live() {
            h.frame(FrameLoop::start(move |_| {
                let _ = path.set_attribute("d", &wave.advance());
                true
            }));
        }
    }
    Ok(())
}

/// Blur-and-merge glow filter with a random id
fn glow_filter(doc: &Document, rng: &mut impl Entropy) -> Result<web_sys::Element, JsValue> {
    let defs = svg(doc, "defs")?;
    let filter = svg(doc, "filter")?;
    filter.set_attribute("id", &format!("glow-{:08x}", (rng.next_f32() * u32::MAX as f32) as u32))?;

    let blur = svg(doc, "feGaussianBlur")?;
    set_attrs(&blur, &[("stdDeviation", "2"), ("result", "coloredBlur")])?;

    let merge = svg(doc, "feMerge")?;
    for input in ["coloredBlur", "SourceGraphic"] {
        let node = svg(doc, "feMergeNode")?;
        node.set_attribute("in", input)?;
        merge.append_child(&node)?;
    }

    filter.append_child(&blur)?;
    filter.append_child(&merge)?;
    defs.append_child(&filter)?;
    Ok(defs)
}

pub fn mount_leds(doc: &Document, h: &mut Handles) -> Result<(), JsValue> {
    let leds = query_all(doc, ".led-indicator");
    if leds.is_empty() {
        return Ok(());
    }
    for host in leds {
        let pattern = LedPattern::from_attr(host.get_attribute("data-pattern").as_deref());
        let led = doc.create_element("div")?;
        led.set_class_name(&pattern.class());
        host.append_child(&led)?;
        h.adopt(led);
    }
    inject_sheet(doc, &styles::LED)
}
