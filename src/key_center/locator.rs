//! Key locator
//!
//! Finds the Circle of Fifths position whose tonic matches a chord root.
//! Comparison happens in the sharps-only space: every circle spelling
//! (primary and enharmonic, on the side picked by the chord quality) is
//! normalized before it is compared with the query root.
//!
//! The locator is total. Empty names, unknown roots and odd qualities all
//! come back as [`KeyLocation::NotFound`].

use serde::Serialize;

use crate::models::{DetectedChord, ParsedChord, CIRCLE_OF_FIFTHS};

use super::config::{LocatorConfig, RootNormalization};
use super::normalizer::normalize;
use super::trace::{LogObserver, NoopObserver, ScanObserver};

/// Result of a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum KeyLocation {
    /// Zero-based circle position, always in 0..12
    Found(usize),
    NotFound,
}

impl KeyLocation {
    pub fn index(&self) -> Option<usize> {
        match self {
            KeyLocation::Found(index) => Some(*index),
            KeyLocation::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, KeyLocation::Found(_))
    }

    /// Integer form for the host: the index, or -1
    pub fn to_index(&self) -> i32 {
        match self {
            KeyLocation::Found(index) => *index as i32,
            KeyLocation::NotFound => -1,
        }
    }
}

impl From<Option<usize>> for KeyLocation {
    fn from(index: Option<usize>) -> Self {
        index.map_or(KeyLocation::NotFound, KeyLocation::Found)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLocator {
    config: LocatorConfig,
}

impl KeyLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn locate(&self, chord: &DetectedChord) -> KeyLocation {
        self.locate_name(&chord.name)
    }

    pub fn locate_name(&self, name: &str) -> KeyLocation {
        match name.parse::<ParsedChord>() {
            Ok(parsed) => self.locate_parsed(&parsed),
            Err(e) => {
                log::debug!("[key-center] rejecting chord '{}': {}", name, e);
                KeyLocation::NotFound
            }
        }
    }

    pub fn locate_parsed(&self, chord: &ParsedChord) -> KeyLocation {
        if self.config.trace {
            self.locate_parsed_with(chord, &mut LogObserver::new(chord.root.as_str()))
        } else {
            self.locate_parsed_with(chord, &mut NoopObserver)
        }
    }

    /// Scan the wheel in order, reporting each comparison to `observer`.
    /// First match wins.
    pub fn locate_parsed_with(&self, chord: &ParsedChord, observer: &mut dyn ScanObserver) -> KeyLocation {
        let side = chord.side();
        let root = match self.config.root_normalization {
            RootNormalization::Symmetric => normalize(&chord.root),
            RootNormalization::Verbatim => chord.root.as_str(),
        };

        let found = CIRCLE_OF_FIFTHS.iter().enumerate().find_map(|(index, entry)| {
            // `any` stops at the first matching spelling
            let matched = entry.spellings(side).any(|spelling| {
                let canonical = normalize(spelling);
                let matched = canonical == root;
                observer.on_candidate(index, side, spelling, canonical, matched);
                matched
            });
            matched.then_some(index)
        });

        let result = KeyLocation::from(found);
        observer.on_finish(&result);
        result
    }
}

/// Locate with the default configuration
pub fn locate(chord: &DetectedChord) -> KeyLocation {
    KeyLocator::default().locate(chord)
}

/// Locate a bare chord name with the default configuration
pub fn locate_name(name: &str) -> KeyLocation {
    KeyLocator::default().locate_name(name)
}
