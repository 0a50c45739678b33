//! libtaibun-core
//!
//! Language-agnostic text machinery shared by `libtaibun`: code-point
//! classification, the classification data it is configured with, text
//! normalization, the syllable segmenter and the word splitter.
//!
//! Public API:
//! - `Classification` - Punctuation sets, marks and composition operators
//! - `Normalizer` / `normalize` - Control-char blanking, legacy code points, NFC
//! - `Segmenter` / `Segmentation` - Tokens with light-tone and boundary flags
//! - `split_words` - Nest flat tokens into words
//! - `Error` / `Scheme` - Error kinds and romanization identifiers

pub mod classify;

pub mod config;
pub use config::{Classification, CONNECTOR, LIGHT_TONE_MARK};

pub mod error;
pub use error::{Error, Result, Scheme};

pub mod normalize;
pub use normalize::{normalize, Normalizer};

pub mod segment;
pub use segment::{segment, Segmentation, Segmenter};

pub mod split;
pub use split::split_words;
