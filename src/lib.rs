//! "Will you date me?" page core crate.
//!
//! A question card with a "Yes" that ends the game and a "No" that refuses to be
//! clicked. The evasion logic (`evasion`), its geometry and injectable randomness are
//! plain Rust and testable on the host; `page` wires them into the DOM via web-sys.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod decor;
pub mod evasion;
pub mod geometry;
pub mod logging;
pub mod page;
pub mod random;

pub use config::{EvasionConfig, PageConfig, PolicyKind};
pub use evasion::{
    AnchorMode, ElementPosition, EvasionController, InteractionEvent, Layer, MarkerPosition,
    Session,
};
pub use geometry::{ContainerGeometry, Point, Rect, Size, ViewportBounds};
pub use random::{PageRng, RandomSource, ScriptedRandom};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    page::start(PageConfig::default())
}

/// Same as `start_page`, with a JSON object overriding any subset of `PageConfig`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_page_with_config(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("invalid page config: {e}")))?;
    page::start(config)
}
