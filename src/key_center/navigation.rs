//! Moving around the wheel once a key center is known
//!
//! Used by the piano UI to label the highlighted position: relative key,
//! the keys a fifth either side, and the key signature.

use serde::Serialize;

use crate::models::{CircleEntry, Side, CIRCLE_OF_FIFTHS, CIRCLE_SIZE};

pub fn circle_entry(index: usize) -> Option<&'static CircleEntry> {
    CIRCLE_OF_FIFTHS.get(index)
}

/// Tonic on the opposite side of the same position.
///
/// `side` is the side of the chord you start from: the relative key of
/// C major (index 0, `Side::Major`) is `"Am"`.
pub fn relative_key(index: usize, side: Side) -> Option<&'static str> {
    circle_entry(index).map(|entry| entry.tonic(side.other()))
}

/// Positions a fifth below and a fifth above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub subdominant: usize,
    pub dominant: usize,
}

pub fn neighbors(index: usize) -> Option<Neighbors> {
    if index >= CIRCLE_SIZE {
        return None;
    }

    Some(Neighbors {
        subdominant: (index + CIRCLE_SIZE - 1) % CIRCLE_SIZE,
        dominant: (index + 1) % CIRCLE_SIZE,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "accidental", content = "count", rename_all = "lowercase")]
pub enum KeySignature {
    Sharps(u8),
    Flats(u8),
}

impl KeySignature {
    /// Equivalent signature with the opposite accidental.
    /// Only the F#/Gb position has one in common use.
    pub fn enharmonic(&self) -> Option<KeySignature> {
        match self {
            KeySignature::Sharps(6) => Some(KeySignature::Flats(6)),
            KeySignature::Flats(6) => Some(KeySignature::Sharps(6)),
            _ => None,
        }
    }
}

/// Key signature of a position, following the primary major spelling
pub fn key_signature(index: usize) -> Option<KeySignature> {
    match index {
        0..=6 => Some(KeySignature::Sharps(index as u8)),
        7..=11 => Some(KeySignature::Flats((CIRCLE_SIZE - index) as u8)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_keys() {
        assert_eq!(relative_key(0, Side::Major), Some("Am"));
        assert_eq!(relative_key(0, Side::Minor), Some("C"));
        assert_eq!(relative_key(9, Side::Minor), Some("Eb"));
        assert_eq!(relative_key(12, Side::Major), None);
    }

    #[test]
    fn test_neighbors_wrap() {
        assert_eq!(neighbors(0), Some(Neighbors { subdominant: 11, dominant: 1 }));
        assert_eq!(neighbors(11), Some(Neighbors { subdominant: 10, dominant: 0 }));
        assert_eq!(neighbors(5), Some(Neighbors { subdominant: 4, dominant: 6 }));
        assert_eq!(neighbors(12), None);
    }

    #[test]
    fn test_key_signatures() {
        assert_eq!(key_signature(0), Some(KeySignature::Sharps(0)));
        assert_eq!(key_signature(2), Some(KeySignature::Sharps(2)));
        assert_eq!(key_signature(6), Some(KeySignature::Sharps(6)));
        assert_eq!(key_signature(7), Some(KeySignature::Flats(5)));
        assert_eq!(key_signature(11), Some(KeySignature::Flats(1)));
        assert_eq!(key_signature(12), None);
    }

    #[test]
    fn test_enharmonic_signature_only_at_the_split() {
        assert_eq!(KeySignature::Sharps(6).enharmonic(), Some(KeySignature::Flats(6)));
        assert_eq!(KeySignature::Flats(5).enharmonic(), None);
    }

    #[test]
    fn test_key_signature_serialization() {
        let json = serde_json::to_string(&KeySignature::Flats(3)).unwrap();
        assert_eq!(json, r#"{"accidental":"flats","count":3}"#);
    }
}
