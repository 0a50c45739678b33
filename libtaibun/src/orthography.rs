// libtaibun/src/orthography.rs
//
// Orthography conversion plumbing. The spelling rules themselves belong to
// an external table; this module defines the collaborator trait, a
// data-driven table loadable from TOML, and the helper the model uses to
// route each syllable through a table.
//
// Tables operate on bare syllables: light-tone prefixes are stripped by the
// caller before lookup and re-attached afterwards.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use libtaibun_core::classify::is_latin_letter;
use libtaibun_core::{Error, Result, Scheme};

/// Converts one bare syllable spelling into another orthography.
pub trait OrthographyTable {
    /// Spell `syllable` in `target`. Fails with `Error::UnsupportedSyllable`
    /// when the table has no mapping.
    fn convert(&self, syllable: &str, target: Scheme) -> Result<String>;
}

impl<F> OrthographyTable for F
where
    F: Fn(&str, Scheme) -> Result<String>,
{
    fn convert(&self, syllable: &str, target: Scheme) -> Result<String> {
        self(syllable, target)
    }
}

/// Route one spelling through `table`. Spellings without a Latin letter
/// (Han characters, Bopomofo, numerals, punctuation) pass through as-is.
pub(crate) fn convert_spelling<T>(table: &T, spelling: &str, target: Scheme) -> Result<String>
where
    T: OrthographyTable + ?Sized,
{
    if !spelling.chars().any(is_latin_letter) {
        return Ok(spelling.to_string());
    }
    table.convert(spelling, target)
}

/// Lookup table built from POJ/KIP spelling pairs.
///
/// Lookups are case-insensitive; a capitalized input yields a capitalized
/// output. A spelling already in the target orthography converts to itself.
///
/// # Example
/// ```
/// use libtaibun::{MappingTable, OrthographyTable, Scheme};
///
/// let table = MappingTable::from_pairs([("chhut", "tshut"), ("chiah", "tsiah")]);
/// assert_eq!(table.convert("Chiah", Scheme::Kip).unwrap(), "Tsiah");
/// assert_eq!(table.convert("tshut", Scheme::Poj).unwrap(), "chhut");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    poj_to_kip: HashMap<String, String>,
    kip_to_poj: HashMap<String, String>,
}

/// On-disk layout: one `poj = "kip"` entry per syllable.
#[derive(Debug, Default, Deserialize, Serialize)]
struct TableFile {
    #[serde(default)]
    syllables: BTreeMap<String, String>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(poj, kip)` pairs.
    pub fn from_pairs<I, P, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, K)>,
        P: AsRef<str>,
        K: AsRef<str>,
    {
        let mut table = Self::new();
        for (poj, kip) in pairs {
            table.insert(poj.as_ref(), kip.as_ref());
        }
        table
    }

    pub fn insert(&mut self, poj: &str, kip: &str) {
        let poj = poj.to_lowercase();
        let kip = kip.to_lowercase();
        self.poj_to_kip.insert(poj.clone(), kip.clone());
        self.kip_to_poj.insert(kip, poj);
    }

    pub fn len(&self) -> usize {
        self.poj_to_kip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poj_to_kip.is_empty()
    }

    /// Parse a `[syllables]` TOML table of `poj = "kip"` entries.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: TableFile = toml::from_str(content)?;
        Ok(Self::from_pairs(file.syllables))
    }

    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl OrthographyTable for MappingTable {
    fn convert(&self, syllable: &str, target: Scheme) -> Result<String> {
        let (forward, reverse) = match target {
            Scheme::Kip => (&self.poj_to_kip, &self.kip_to_poj),
            Scheme::Poj => (&self.kip_to_poj, &self.poj_to_kip),
        };
        let key = syllable.to_lowercase();
        let converted = match forward.get(&key) {
            Some(spelling) => spelling.clone(),
            None if reverse.contains_key(&key) => key,
            None => {
                return Err(Error::UnsupportedSyllable {
                    syllable: syllable.to_string(),
                    scheme: target,
                })
            }
        };
        Ok(match_case(syllable, converted))
    }
}

/// Carry the capitalization of `original` over to `converted`: all caps
/// stays all caps, an initial capital stays an initial capital.
fn match_case(original: &str, converted: String) -> String {
    let mut letters = original.chars().filter(|c| c.is_alphabetic());
    let Some(first) = letters.next() else {
        return converted;
    };
    if !first.is_uppercase() {
        return converted;
    }
    let rest: Vec<char> = letters.collect();
    if !rest.is_empty() && rest.iter().all(|c| c.is_uppercase()) {
        return converted.to_uppercase();
    }
    let mut chars = converted.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => converted,
    }
}
