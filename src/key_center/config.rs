//! Locator options
//!
//! Deserializable from the host as a partial object, e.g.
//! `{ "rootNormalization": "verbatim" }`; missing fields fall back to the
//! defaults.

use serde::{Deserialize, Serialize};

/// How the query root is compared against circle spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootNormalization {
    /// Normalize the query root as well as the circle labels,
    /// so `Bb` and `A#` land on the same position
    #[default]
    Symmetric,
    /// Compare the query root as given; only sharps-only roots match
    /// positions spelled with flats
    Verbatim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorConfig {
    pub root_normalization: RootNormalization,
    /// Emit the circle scan through `log::trace!`
    pub trace: bool,
}

impl LocatorConfig {
    pub fn verbatim() -> Self {
        Self {
            root_normalization: RootNormalization::Verbatim,
            ..Self::default()
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
