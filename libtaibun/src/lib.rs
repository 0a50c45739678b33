//! # libtaibun
//!
//! Sentence model for written Taiwanese Hokkien, built on libtaibun-core.
//!
//! A `Sentence` holds `Word`s, a `Word` holds `Character`s, and each
//! character pairs a hanlo spelling with a lomaji spelling plus a light-tone
//! flag. Sentences come from `TaibunParser` (one or two tracks of text) and
//! render back to hanlo, lomaji or the compact kiphanlo form.
//!
//! ```
//! use libtaibun::Sentence;
//!
//! let sentence = Sentence::parse_pair("我食飽矣。", "Guá tsia̍h-pá--ah.").unwrap();
//! assert_eq!(sentence.render_romanized(), "Guá tsia̍h-pá--ah.");
//! assert_eq!(sentence.render_script(), "我 食飽--矣。");
//! ```

pub mod character;
pub mod config;
pub mod orthography;
pub mod parser;
pub mod sentence;
pub mod word;

pub use libtaibun_core::{
    normalize, split_words, Classification, Error, Normalizer, Result, Scheme, Segmentation,
    Segmenter,
};

pub use character::{Character, CompactPolicy, Form};
pub use config::TaibunConfig;
pub use orthography::{MappingTable, OrthographyTable};
pub use parser::TaibunParser;
pub use sentence::Sentence;
pub use word::Word;
