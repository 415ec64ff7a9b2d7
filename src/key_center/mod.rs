//! Key-center resolution
//!
//! Maps a detected chord onto a Circle of Fifths position so the piano UI
//! can highlight it.

pub mod config;
pub mod locator;
pub mod navigation;
pub mod normalizer;
pub mod trace;

pub use config::{LocatorConfig, RootNormalization};
pub use locator::{locate, locate_name, KeyLocation, KeyLocator};
pub use navigation::{circle_entry, key_signature, neighbors, relative_key, KeySignature, Neighbors};
pub use normalizer::{normalize, normalize_to_pitch_class};
pub use trace::{LogObserver, NoopObserver, RecordingObserver, ScanObserver};
