//! Spoken-text helpers for inkgrid: numbers in words, letter spelling and
//! the platform text-to-speech capability.

pub mod speaker;
pub mod spell;
pub mod words;

pub use speaker::platform_speaker;
pub use spell::{letters_separated, spelled_for_speech};
pub use words::number_to_words;
