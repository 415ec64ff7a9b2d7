//! The Circle of Fifths table
//!
//! Twelve positions ordered clockwise from C. Position numbers are part of
//! the host contract: the highlighting code addresses the wheel as C=0, G=1,
//! ..., F=11.
//!
//! Spellings here follow key-signature convention (mixed sharps and flats),
//! not the host's sharps-only vocabulary.

use serde::Serialize;

use super::chord::Side;

/// Suffix marking a minor tonic in the table
pub const MINOR_MARKER: char = 'm';

/// One position on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleEntry {
    pub major: &'static str,
    pub minor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enharmonic_major: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enharmonic_minor: Option<&'static str>,
}

impl CircleEntry {
    const fn new(major: &'static str, minor: &'static str) -> Self {
        Self {
            major,
            minor,
            enharmonic_major: None,
            enharmonic_minor: None,
        }
    }

    const fn with_enharmonic_major(self, spelling: &'static str) -> Self {
        Self {
            enharmonic_major: Some(spelling),
            ..self
        }
    }

    const fn with_enharmonic_minor(self, spelling: &'static str) -> Self {
        Self {
            enharmonic_minor: Some(spelling),
            ..self
        }
    }

    /// Primary label on the given side, as written in the table
    /// (minor labels keep their `m`)
    pub fn tonic(&self, side: Side) -> &'static str {
        match side {
            Side::Major => self.major,
            Side::Minor => self.minor,
        }
    }

    /// Enharmonic label on the given side, if this position has one
    pub fn enharmonic(&self, side: Side) -> Option<&'static str> {
        match side {
            Side::Major => self.enharmonic_major,
            Side::Minor => self.enharmonic_minor,
        }
    }

    /// Bare pitch spellings of the tonic on one side, primary first.
    ///
    /// Minor labels have their trailing marker stripped.
    pub fn spellings(&self, side: Side) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.tonic(side))
            .chain(self.enharmonic(side))
            .map(move |label| match side {
                Side::Major => label,
                Side::Minor => strip_minor_marker(label),
            })
    }
}

/// Remove one trailing minor marker, if present
pub fn strip_minor_marker(label: &str) -> &str {
    label.strip_suffix(MINOR_MARKER).unwrap_or(label)
}

/// Number of positions on the wheel
pub const CIRCLE_SIZE: usize = 12;

/// The wheel, clockwise from C
pub static CIRCLE_OF_FIFTHS: [CircleEntry; CIRCLE_SIZE] = [
    CircleEntry::new("C", "Am"),
    CircleEntry::new("G", "Em"),
    CircleEntry::new("D", "Bm"),
    CircleEntry::new("A", "F#m"),
    CircleEntry::new("E", "C#m"),
    CircleEntry::new("B", "G#m").with_enharmonic_minor("Abm"),
    CircleEntry::new("F#", "D#m")
        .with_enharmonic_major("Gb")
        .with_enharmonic_minor("Ebm"),
    CircleEntry::new("Db", "A#m")
        .with_enharmonic_major("C#")
        .with_enharmonic_minor("Bbm"),
    CircleEntry::new("Ab", "Fm"),
    CircleEntry::new("Eb", "Cm"),
    CircleEntry::new("Bb", "Gm"),
    CircleEntry::new("F", "Dm"),
];
