#![warn(rust_2018_idioms)]

//! Rule-based text processing for Brahmi-derived Indic scripts.
//!
//! The Indic scripts descend from Brahmi and share their layout: a
//! character's offset from its script's Unicode block base means the same
//! thing in Devanagari, Bengali, Tamil, or Kannada. Everything here runs
//! on those offsets, so one rule set covers sixteen languages:
//!
//! - [`script`]: the script registry and offset arithmetic.
//! - [`phonetic`]: per-character phonetic feature vectors.
//! - [`translit`]: transliteration between scripts and to/from ITRANS.
//! - [`syllable`]: orthographic syllabification.
//! - [`similarity`]: phonetic and lexical similarity measures.
//! - [`normalize`]: text cleanup ahead of the above.

pub mod error;
pub mod normalize;
pub mod phonetic;
pub mod script;
pub mod similarity;
pub mod syllable;
pub mod translit;

pub use crate::error::ScriptError;
pub use crate::normalize::{normalize, NormalizeOptions};
pub use crate::phonetic::{feature_vector, PhoneticVector};
pub use crate::script::Language;
pub use crate::similarity::{lcsr, similarity_matrix};
pub use crate::syllable::orthographic_syllabify;
pub use crate::translit::transliterate;
