/// The twelve canonical pitch classes of the host application
///
/// The piano UI and the chord detector only ever speak in sharps:
/// C, C#, D, D#, E, F, F#, G, G#, A, A#, B.
/// Flat spellings exist only on the Circle of Fifths and are folded onto
/// these labels by the pitch normalizer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Canonical sharps-only label
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Semitones above C (0-11)
    pub fn semitone(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = String;

    /// Parses canonical labels only. Flat spellings go through
    /// `key_center::normalize_to_pitch_class`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::ALL
            .iter()
            .copied()
            .find(|pc| pc.as_str() == s)
            .ok_or_else(|| format!("Invalid pitch class: '{}'. Expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B", s))
    }
}
