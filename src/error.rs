// error.rs - Error type shared by the pure effect modules
//
// The DOM layer converts these into JsValue at the wasm boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("typing cycler needs at least one phrase")]
    NoPhrases,

    #[error("unknown wave type `{0}`")]
    UnknownWave(String),

    #[error("unknown LED pattern `{0}`")]
    UnknownLedPattern(String),

    #[error("rain charset is empty")]
    EmptyCharset,
}

pub type Result<T> = std::result::Result<T, FxError>;

#[cfg(target_arch = "wasm32")]
impl From<FxError> for wasm_bindgen::JsValue {
    fn from(err: FxError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
