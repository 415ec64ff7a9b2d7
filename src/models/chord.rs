//! Chord symbols as delivered by the chord detector
//!
//! The detector names chords as `<root> <quality words>`, e.g. `"F# Minor"`
//! or `"G Dominant 7"`. Key location only cares about the root token and
//! whether the quality says minor.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Chord object handed over by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedChord {
    pub name: String,
}

impl DetectedChord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Which half of a circle entry a chord belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Major,
    Minor,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Major => Side::Minor,
            Side::Minor => Side::Major,
        }
    }
}

/// Errors raised while splitting a chord name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    /// Name is empty or whitespace only
    #[error("chord name is empty")]
    EmptyName,
}

/// Chord reduced to what key location needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChord {
    pub root: String,
    pub is_minor: bool,
}

impl ParsedChord {
    pub fn side(&self) -> Side {
        if self.is_minor {
            Side::Minor
        } else {
            Side::Major
        }
    }
}

impl FromStr for ParsedChord {
    type Err = ChordParseError;

    /// Any occurrence of "minor" in the quality (case-insensitive) selects
    /// the minor side; every other quality is treated as major.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let mut tokens = name.split_whitespace();
        let root = tokens.next().ok_or(ChordParseError::EmptyName)?;
        let quality: String = tokens.collect::<String>().to_lowercase();

        Ok(ParsedChord {
            root: root.to_string(),
            is_minor: quality.contains("minor"),
        })
    }
}

impl TryFrom<&DetectedChord> for ParsedChord {
    type Error = ChordParseError;

    fn try_from(chord: &DetectedChord) -> Result<Self, Self::Error> {
        chord.name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_major() {
        let chord: ParsedChord = "C Major".parse().unwrap();
        assert_eq!(chord.root, "C");
        assert!(!chord.is_minor);
        assert_eq!(chord.side(), Side::Major);
    }

    #[test]
    fn test_parse_minor_case_insensitive() {
        assert!("A minor".parse::<ParsedChord>().unwrap().is_minor);
        assert!("A MINOR".parse::<ParsedChord>().unwrap().is_minor);
        assert!("A Minor 7".parse::<ParsedChord>().unwrap().is_minor);
    }

    #[test]
    fn test_parse_minor_major_seventh_is_minor() {
        let chord: ParsedChord = "C Minor Major 7".parse().unwrap();
        assert!(chord.is_minor);
    }

    #[test]
    fn test_parse_root_only() {
        let chord: ParsedChord = "F#".parse().unwrap();
        assert_eq!(chord.root, "F#");
        assert!(!chord.is_minor);
    }

    #[test]
    fn test_parse_other_qualities_are_major() {
        for name in ["G Dominant 7", "F# diminished", "D Augmented", "E Sus4"] {
            assert!(!name.parse::<ParsedChord>().unwrap().is_minor, "{}", name);
        }
    }

    #[test]
    fn test_quality_tokens_are_concatenated() {
        // "Mi nor" joins into "minor" once the whitespace is dropped
        assert!("D Mi nor".parse::<ParsedChord>().unwrap().is_minor);
    }

    #[test]
    fn test_root_is_not_mistaken_for_quality() {
        let chord: ParsedChord = "minor".parse().unwrap();
        assert_eq!(chord.root, "minor");
        assert!(!chord.is_minor);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<ParsedChord>(), Err(ChordParseError::EmptyName));
        assert_eq!("   ".parse::<ParsedChord>(), Err(ChordParseError::EmptyName));
    }

    #[test]
    fn test_try_from_detected_chord() {
        let detected = DetectedChord::new("  Bb   Minor ");
        let chord = ParsedChord::try_from(&detected).unwrap();
        assert_eq!(chord.root, "Bb");
        assert!(chord.is_minor);
    }

    #[test]
    fn test_detected_chord_deserializes_with_extra_fields() {
        let detected: DetectedChord =
            serde_json::from_str(r#"{"name":"E Minor","confidence":0.8}"#).unwrap();
        assert_eq!(detected.name, "E Minor");
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Major.other(), Side::Minor);
        assert_eq!(Side::Minor.other(), Side::Major);
    }
}
