//! Taiwanese-specific configuration that extends the `Classification` data
//! from core.
//!
//! This configuration includes:
//! - All classification data from `libtaibun_core::Classification` (flattened via serde)
//! - The compact-form light-tone elision policy
//!
//! # Example
//!
//! ```rust
//! use libtaibun::{CompactPolicy, TaibunConfig};
//!
//! let config = TaibunConfig::from_toml_str("compact_policy = \"keep\"").unwrap();
//! assert_eq!(config.compact_policy, CompactPolicy::Keep);
//! assert!(config.base().is_sentence_split_punctuation("。"));
//! ```
use serde::{Deserialize, Serialize};

use libtaibun_core::Classification;

use crate::character::CompactPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaibunConfig {
    /// Punctuation sets, marks, composition operators, legacy code points
    #[serde(flatten)]
    pub base: Classification,

    /// When the compact (kiphanlo) form drops light-tone prefixes
    pub compact_policy: CompactPolicy,
}

impl TaibunConfig {
    /// Convert this config into the base classification data
    pub fn into_base(self) -> Classification {
        self.base
    }

    /// Get a reference to the base classification data
    pub fn base(&self) -> &Classification {
        &self.base
    }

    /// Get a mutable reference to the base classification data
    pub fn base_mut(&mut self) -> &mut Classification {
        &mut self.base
    }

    /// Load configuration from a TOML file. Missing keys keep defaults.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
