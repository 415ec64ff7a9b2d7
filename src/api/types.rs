//! Result objects returned to JavaScript

use serde::Serialize;

use crate::key_center::{circle_entry, key_signature, neighbors, KeySignature, Neighbors};
use crate::models::Side;

/// Everything the UI shows for a highlighted position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCenterInfo {
    pub index: usize,
    pub side: Side,
    pub tonic: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enharmonic: Option<&'static str>,
    pub relative: &'static str,
    pub neighbors: Neighbors,
    pub key_signature: KeySignature,
}

/// Build the info object for `index`, seen from `side`
pub fn key_center_info(index: usize, side: Side) -> Result<KeyCenterInfo, String> {
    let out_of_range = || format!("Key center index {} out of bounds (max: 11)", index);

    let entry = circle_entry(index).ok_or_else(out_of_range)?;
    let neighbors = neighbors(index).ok_or_else(out_of_range)?;
    let key_signature = key_signature(index).ok_or_else(out_of_range)?;

    Ok(KeyCenterInfo {
        index,
        side,
        tonic: entry.tonic(side),
        enharmonic: entry.enharmonic(side),
        relative: entry.tonic(side.other()),
        neighbors,
        key_signature,
    })
}
