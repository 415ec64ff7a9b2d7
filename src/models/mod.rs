//! Models module for the key-center resolver
//!
//! Pitch vocabulary, the Circle of Fifths table, and chord symbols as the
//! chord detector hands them over.

pub mod chord;
pub mod circle;
pub mod pitch_class;

// Re-export commonly used types
pub use chord::{ChordParseError, DetectedChord, ParsedChord, Side};
pub use circle::{strip_minor_marker, CircleEntry, CIRCLE_OF_FIFTHS, CIRCLE_SIZE, MINOR_MARKER};
pub use pitch_class::PitchClass;
