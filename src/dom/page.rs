// page.rs - JS entry point: mounts every component and owns their handles

use wasm_bindgen::prelude::*;
use web_sys::Document;

use super::{Handles, backdrop, chrome, console, decor, document, skills, typing};
use crate::config::SiteConfig;
use crate::logger;

type Mount = fn(&Document, &SiteConfig, &mut Handles) -> Result<(), JsValue>;

const COMPONENTS: &[(&str, Mount)] = &[
    ("rain", backdrop::mount_rain),
    ("particles", backdrop::mount_particles),
    ("traces", backdrop::mount_traces),
    ("hexagon", decor::mount_hexagon),
    ("waveforms", decor::mount_waveforms),
    ("leds", |d, _, h| decor::mount_leds(d, h)),
    ("terminal", console::mount),
    ("typing", typing::mount),
    ("skills", |d, _, h| skills::mount(d, h)),
    ("nav", chrome::mount_nav),
    ("menu", |d, _, h| chrome::mount_menu(d, h)),
    ("smooth-scroll", |d, _, h| chrome::mount_smooth_scroll(d, h)),
    ("reveal", |d, _, h| chrome::mount_reveal(d, h)),
    ("counters", chrome::mount_counters),
    ("tilt", chrome::mount_tilt),
    ("lazy-images", |d, _, h| chrome::mount_lazy_images(d, h)),
    ("flourishes", |d, _, h| chrome::mount_flourishes(d, h)),
    ("scan-line", chrome::mount_scan_line),
    ("contact-form", |d, _, h| chrome::mount_contact_form(d, h)),
];

/// A mounted page. Call `dispose()` (or let it be garbage collected) to
/// stop every loop, timer and listener and remove injected nodes.
#[wasm_bindgen(js_name = Page)]
pub struct PageController {
    handles: Option<Handles>,
}

#[wasm_bindgen(js_class = Page)]
impl PageController {
    /// Mount all effects. `config_json` overrides any subset of defaults.
    pub fn mount(config_json: Option<String>) -> Result<PageController, JsValue> {
        let cfg = SiteConfig::from_json(config_json.as_deref().unwrap_or(""))?;
        logger::init(cfg.log_level.into());

        let doc = document()?;
        let mut handles = Handles::default();
        for (name, mount) in COMPONENTS {
            // One broken component must not take the page down
            if let Err(e) = mount(&doc, &cfg, &mut handles) {
                log::warn!("{name}: {e:?}");
            }
        }

        let [listeners, observers, loops, tickers, nodes] = handles.counts();
        log::info!(
            "page mounted: {listeners} listeners, {observers} observers, {loops} loops, {tickers} timers, {nodes} nodes"
        );
        Ok(Self { handles: Some(handles) })
    }

    pub fn dispose(&mut self) {
        if self.handles.take().is_some() {
            log::info!("page disposed");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.handles.is_some()
    }
}
