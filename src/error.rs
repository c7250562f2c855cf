use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures that can surface while wiring the site. Only [`Error::NoWindow`] and
/// [`Error::NoDocument`] stop the site from starting, everything else is logged and the affected
/// feature is skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A DOM call threw. The message is captured from the thrown value where possible.
    #[error("javascript exception: {0}")]
    Js(String),

    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));

        Self::Js(message)
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
