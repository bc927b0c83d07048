// typing.rs - Hero subtitle type/delete cycler

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::{Handles, Ticker};
use crate::config::SiteConfig;
use crate::fx::typing::TypingCycler;

pub fn mount(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    let Some(host) = doc.get_element_by_id(&cfg.typing.element) else {
        log::debug!("typing: no #{}, skipping", cfg.typing.element);
        return Ok(());
    };

    let mut cycler = TypingCycler::from_config(&cfg.typing)?;

    // Text lives in its own node in front of the cursor
    host.set_text_content(None);
    let text = doc.create_text_node("");
    let cursor = doc.create_element("span")?;
    cursor.set_class_name("typing-cursor");
    cursor.set_text_content(Some("|"));
    host.append_child(&text)?;
    host.append_child(&cursor)?;

    h.tick(Ticker::start(0, move || {
        let delay = cycler.step();
        text.set_data(cycler.text());
        Some(delay)
    }));

    log::debug!("typing: {} phrases", cfg.typing.phrases.len());
    Ok(())
}
