//! Key-Center Resolver WASM Module
//!
//! Resolves chords from the chord detector to a position on the Circle of
//! Fifths, so the piano practice UI can highlight the current key center.

pub mod models;
pub mod key_center;
pub mod api;

// Re-export commonly used types
pub use key_center::{locate, normalize, KeyLocation, KeyLocator, LocatorConfig};
pub use models::{CircleEntry, DetectedChord, ParsedChord, PitchClass, Side, CIRCLE_OF_FIFTHS};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if the host already installed a logger
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Key-center resolver WASM module initialized");
}
