//! Error type for browser setup and configuration.
//!
//! Game logic itself never fails; everything here comes from wiring the game
//! into a page or from a bad configuration.

use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// No global `window` (not running in a browser main thread)
    #[error("no window")]
    NoWindow,

    /// Window has no document
    #[error("no document")]
    NoDocument,

    /// Required DOM element is missing or has the wrong type
    #[error("missing element #{0}")]
    MissingElement(String),

    /// Canvas refused to hand out a 2d context
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,

    /// A web API call threw
    #[error("js error: {0}")]
    Js(String),

    /// Configuration failed validation or parsing
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result alias used by setup code.
pub type Result<T> = std::result::Result<T, GameError>;
