// core/src/error.rs
//
// Error kinds surfaced by segmentation, dual-track alignment and orthography
// conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Romanization orthography a syllable spelling belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Pe̍h-ōe-jī (church romanization).
    Poj,
    /// Kàu-io̍k-pō͘ Tâi-lô (ministry of education romanization).
    Kip,
}

impl Scheme {
    /// Tâi-lô is the same orthography as KIP.
    pub const TL: Scheme = Scheme::Kip;

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Poj => "POJ",
            Scheme::Kip => "KIP",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A composition sequence was cut short by whitespace or end of input.
    #[error("malformed composition sequence {sequence:?} at char {position}")]
    MalformedComposition { sequence: String, position: usize },

    /// Dual-track input segmented to a different number of syllables per track.
    #[error("sentence length mismatch: hanlo is {hanlo} chars, but lomaji is {lomaji} chars")]
    TrackLengthMismatch { hanlo: usize, lomaji: usize },

    /// The orthography table has no mapping for this syllable.
    #[error("no {scheme} spelling for syllable {syllable:?}")]
    UnsupportedSyllable { syllable: String, scheme: Scheme },
}

pub type Result<T> = std::result::Result<T, Error>;
