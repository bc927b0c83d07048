// circuit-fx - Circuit-board visual effects for a portfolio page
//
// `fx` and `render` are plain Rust and run anywhere. `dom` binds them to
// the browser and only builds for wasm32.

pub mod config;
pub mod error;
pub mod fx;
pub mod render;
pub mod rng;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use config::SiteConfig;
pub use error::{FxError, Result};

#[cfg(target_arch = "wasm32")]
pub use dom::PageController;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
