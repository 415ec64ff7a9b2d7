//! Key-center functions exported to JavaScript
//!
//! `locateKeyCenter` never throws: anything that is not a `{ name: string }`
//! object resolves to -1, same as an unknown chord.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize, validation_error};
use super::types::key_center_info;
use crate::key_center::{normalize, KeyLocator, LocatorConfig};
use crate::models::{DetectedChord, Side, CIRCLE_OF_FIFTHS};

/// Locate the circle position of a detected chord
///
/// # Parameters
/// - `chord_js`: chord object from the detector, `{ name: "F# Minor" }`
///
/// # Returns
/// Position 0-11 (C=0, G=1, ..., F=11), or -1 when nothing matches
#[wasm_bindgen(js_name = locateKeyCenter)]
pub fn locate_key_center(chord_js: JsValue) -> i32 {
    locate_with(chord_js, LocatorConfig::default())
}

/// Same as `locateKeyCenter`, with locator options
///
/// # Parameters
/// - `chord_js`: chord object from the detector
/// - `config_js`: partial `{ rootNormalization, trace }` object, or undefined
///
/// # Returns
/// Position 0-11 or -1; throws only if `config_js` is malformed
#[wasm_bindgen(js_name = locateKeyCenterWithConfig)]
pub fn locate_key_center_with_config(chord_js: JsValue, config_js: JsValue) -> Result<i32, JsValue> {
    let config: LocatorConfig = deserialize_or_default(config_js, "Invalid locator config")?;
    Ok(locate_with(chord_js, config))
}

fn locate_with(chord_js: JsValue, config: LocatorConfig) -> i32 {
    let chord: DetectedChord = match serde_wasm_bindgen::from_value(chord_js) {
        Ok(chord) => chord,
        Err(e) => {
            log::warn!("[WASM] locateKeyCenter: unreadable chord ({})", e);
            return -1;
        }
    };

    let location = KeyLocator::new(config).locate(&chord);
    log::debug!("[WASM] locateKeyCenter '{}' -> {:?}", chord.name, location);
    location.to_index()
}

/// Canonical sharps-only spelling of a pitch label (`"Bb"` -> `"A#"`)
#[wasm_bindgen(js_name = normalizePitch)]
pub fn normalize_pitch(label: &str) -> String {
    normalize(label).to_string()
}

/// The twelve circle entries, clockwise from C
#[wasm_bindgen(js_name = getCircleOfFifths)]
pub fn get_circle_of_fifths() -> Result<js_sys::Array, JsValue> {
    let entries = js_sys::Array::new();
    for entry in CIRCLE_OF_FIFTHS.iter() {
        entries.push(&serialize(entry, "Failed to serialize circle entry")?);
    }
    Ok(entries)
}

/// Labels for a highlighted position
///
/// # Parameters
/// - `index`: circle position 0-11
/// - `side_js`: `"major"` or `"minor"`; undefined means major
///
/// # Returns
/// `{ index, side, tonic, enharmonic?, relative, neighbors, keySignature }`
#[wasm_bindgen(js_name = getKeyCenterInfo)]
pub fn get_key_center_info(index: usize, side_js: JsValue) -> Result<JsValue, JsValue> {
    let side: Side = if side_js.is_undefined() || side_js.is_null() {
        Side::Major
    } else {
        deserialize(side_js, "Invalid side")?
    };

    let info = key_center_info(index, side).map_err(|e| validation_error(e))?;
    serialize(&info, "Failed to serialize key center info")
}
