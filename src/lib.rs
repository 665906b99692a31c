//! Tide Glance WASM Module
//!
//! Interactive tide graphs: as the pointer moves across a graph, report the
//! tide height and clock time under it and keep a marker on the rendered
//! curve.
//!
//! The numeric core (`models`, `math`, `graph`) has no DOM dependency; the
//! browser adapter lives in `dom` and the JavaScript entry points in `api`.

pub mod config;
pub mod error;
pub mod models;
pub mod math;
pub mod parse;
pub mod graph;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use config::{GraphConfig, HeightScale, MarkerStrategy};
pub use error::GraphError;
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("logger already initialized");
        }
    }

    log::info!("Tide Glance WASM module initialized");

    #[cfg(feature = "auto-init")]
    {
        if let Err(e) = dom::init(GraphConfig::default()) {
            log::error!("graph initialization failed: {}", e);
        }
    }
}
