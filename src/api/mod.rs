//! Key-center WASM API
//!
//! JavaScript-facing entry points used by the piano practice UI.
//!
//! # Module Structure
//!
//! - `helpers`: serde-wasm-bindgen conversion with logged errors
//! - `types`: result objects returned to JavaScript
//! - `key_center`: the exported functions

pub mod helpers;
pub mod types;
pub mod key_center;

pub use key_center::{
    get_circle_of_fifths, get_key_center_info, locate_key_center, locate_key_center_with_config,
    normalize_pitch,
};
pub use types::{key_center_info, KeyCenterInfo};
