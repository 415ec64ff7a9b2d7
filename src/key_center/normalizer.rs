//! Pitch normalization
//!
//! Folds the spellings used on the Circle of Fifths onto the host's
//! sharps-only vocabulary. Flats are respelled one semitone-letter up
//! (Gb → F#, Db → C#, Ab → G#, Eb → D#, Bb → A#); sharps and naturals map
//! to themselves.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::PitchClass;

/// Every spelling that appears on the wheel, with its canonical label
static NOTE_MAP: Lazy<HashMap<&'static str, PitchClass>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for pc in PitchClass::ALL {
        map.insert(pc.as_str(), pc);
    }

    map.insert("Gb", PitchClass::Fs);
    map.insert("Db", PitchClass::Cs);
    map.insert("Ab", PitchClass::Gs);
    map.insert("Eb", PitchClass::Ds);
    map.insert("Bb", PitchClass::As);

    map
});

/// Canonical sharps-only label for `label`.
///
/// Labels the map does not know are returned unchanged.
pub fn normalize(label: &str) -> &str {
    match NOTE_MAP.get(label) {
        Some(pc) => pc.as_str(),
        None => label,
    }
}

/// Typed form of [`normalize`]; `None` for labels outside the map
pub fn normalize_to_pitch_class(label: &str) -> Option<PitchClass> {
    NOTE_MAP.get(label).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Side, CIRCLE_OF_FIFTHS};

    #[test]
    fn test_flats_move_to_sharps() {
        assert_eq!(normalize("Gb"), "F#");
        assert_eq!(normalize("Db"), "C#");
        assert_eq!(normalize("Ab"), "G#");
        assert_eq!(normalize("Eb"), "D#");
        assert_eq!(normalize("Bb"), "A#");
    }

    #[test]
    fn test_canonical_labels_are_fixed_points() {
        for pc in PitchClass::ALL {
            assert_eq!(normalize(pc.as_str()), pc.as_str());
        }
    }

    #[test]
    fn test_unknown_labels_pass_through() {
        assert_eq!(normalize("H"), "H");
        assert_eq!(normalize("Cb"), "Cb");
        assert_eq!(normalize("bb"), "bb");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        for label in ["C", "Gb", "Db", "F#", "Bb", "H", "Cb", "A#"] {
            assert_eq!(normalize(normalize(label)), normalize(label));
        }
    }

    #[test]
    fn test_every_circle_spelling_is_in_the_map() {
        for entry in CIRCLE_OF_FIFTHS.iter() {
            for side in [Side::Major, Side::Minor] {
                for spelling in entry.spellings(side) {
                    assert!(
                        normalize_to_pitch_class(spelling).is_some(),
                        "{} not normalizable",
                        spelling
                    );
                }
            }
        }
    }

    #[test]
    fn test_enharmonic_twins_agree() {
        for entry in CIRCLE_OF_FIFTHS.iter() {
            for side in [Side::Major, Side::Minor] {
                let canon: Vec<_> = entry.spellings(side).map(normalize).collect();
                assert!(canon.windows(2).all(|w| w[0] == w[1]), "{:?}", entry);
            }
        }
    }

    #[test]
    fn test_normalize_to_pitch_class() {
        assert_eq!(normalize_to_pitch_class("Eb"), Some(PitchClass::Ds));
        assert_eq!(normalize_to_pitch_class("E"), Some(PitchClass::E));
        assert_eq!(normalize_to_pitch_class("E#"), None);
    }
}
