// core/src/config.rs
//
// Classification data consulted by the normalizer and the segmenter. The
// engine never reads module-level sets directly; everything swappable lives
// in this value so alternate tables can be injected (and tested).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::classify::IDEOGRAPHIC_DESCRIPTION;

/// The connector mark joining syllables of one word.
pub const CONNECTOR: char = '-';

/// The light-tone prefix: two connector marks.
pub const LIGHT_TONE_MARK: &str = "--";

const SENTENCE_PUNCTUATION: &[&str] = &[
    "、", "﹑", "､", "-", "—", "~", "～", "·", "‧", "'", "＇", "\"", "‘", "’", "“", "”", "〝",
    "〞", "′", "‵", "「", "」", "｢", "｣", "『", "』", "【", "】", "〈", "〉", "《", "》", "（",
    "）", "＜", "＞", "(", ")", "<", ">", "[", "]", "{", "}", "+", "*", "/", "=", "^", "＋",
    "－", "＊", "／", "＝", "$", "#", "＃", ":", "：", "﹕", "–", "―", "─", "──", "｜", "︱",
    "•",
];

const SENTENCE_SPLIT_PUNCTUATION: &[&str] = &[
    "\n", "，", "。", "．", "！", "？", "…", "……", "...", ",", ".", "!", "?", "﹐", "﹒", "﹗",
    "﹖", ";", "；", "﹔",
];

/// Bopomofo tone marks that attach to the preceding Bopomofo glyph.
const TONE_MARKS: &[&str] = &["ˊ", "ˋ", "ˇ", "˪", "˫", "˙", "+", "^"];

/// Fixed classification data for the engine.
///
/// Sets are stored as strings so that multi-character entries (`...`, `──`)
/// and TOML round-trips stay simple; the segmenter compiles them into lookup
/// structures once at construction.
///
/// # Example
/// ```
/// # use libtaibun_core::Classification;
/// let mut data = Classification::default();
/// data.sentence_punctuation.insert("※".to_string());
/// assert!(data.is_punctuation("※"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Classification {
    /// Character joining syllables within a word.
    pub connector: char,

    /// Prefix marking a light-tone syllable.
    pub light_tone_mark: String,

    /// Punctuation that stays inside a sentence.
    pub sentence_punctuation: BTreeSet<String>,

    /// Punctuation that ends a sentence (newline included).
    pub sentence_split_punctuation: BTreeSet<String>,

    /// Tone marks allowed after a Bopomofo glyph.
    pub tone_marks: BTreeSet<String>,

    /// Ideographic description operators and their operand counts.
    pub composition_operators: BTreeMap<String, u8>,

    /// Legacy private-use code points and their standard replacements.
    pub legacy_substitutions: BTreeMap<String, String>,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            connector: CONNECTOR,
            light_tone_mark: LIGHT_TONE_MARK.to_string(),
            sentence_punctuation: to_set(SENTENCE_PUNCTUATION),
            sentence_split_punctuation: to_set(SENTENCE_SPLIT_PUNCTUATION),
            tone_marks: to_set(TONE_MARKS),
            composition_operators: IDEOGRAPHIC_DESCRIPTION
                .entries()
                .map(|(op, arity)| (op.to_string(), *arity))
                .collect(),
            // Populated from deployment configuration; no substitutions by default.
            legacy_substitutions: BTreeMap::new(),
        }
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Classification {
    /// Load classification data from a TOML file. Missing keys keep defaults.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: Classification = toml::from_str(&content)?;
        Ok(data)
    }

    /// Save classification data to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn is_connector(&self, c: char) -> bool {
        c == self.connector
    }

    pub fn is_light_tone_mark(&self, s: &str) -> bool {
        s == self.light_tone_mark
    }

    pub fn is_sentence_punctuation(&self, s: &str) -> bool {
        self.sentence_punctuation.contains(s)
    }

    pub fn is_sentence_split_punctuation(&self, s: &str) -> bool {
        self.sentence_split_punctuation.contains(s)
    }

    /// Member of either punctuation set.
    pub fn is_punctuation(&self, s: &str) -> bool {
        self.is_sentence_punctuation(s) || self.is_sentence_split_punctuation(s)
    }

    /// Operand count of a composition operator, or `None` for other chars.
    pub fn composition_arity(&self, c: char) -> Option<u8> {
        let mut buf = [0u8; 4];
        self.composition_operators
            .get(&*c.encode_utf8(&mut buf))
            .copied()
    }

    pub fn is_composition_operator(&self, c: char) -> bool {
        self.composition_arity(c).is_some()
    }

    pub fn is_tone_mark(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.tone_marks.contains(&*c.encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_punctuation_sets() {
        let data = Classification::default();
        assert!(data.is_sentence_punctuation("「"));
        assert!(data.is_sentence_split_punctuation("。"));
        assert!(data.is_sentence_split_punctuation("\n"));
        assert!(data.is_punctuation("……"));
        assert!(!data.is_punctuation("食"));
    }

    #[test]
    fn composition_operators_from_table() {
        let data = Classification::default();
        assert_eq!(data.composition_arity('⿰'), Some(2));
        assert_eq!(data.composition_arity('⿲'), Some(3));
        assert!(!data.is_composition_operator('木'));
    }

    #[test]
    fn marks() {
        let data = Classification::default();
        assert!(data.is_connector('-'));
        assert!(data.is_light_tone_mark("--"));
        assert!(!data.is_light_tone_mark("-"));
        assert!(data.is_tone_mark('ˊ'));
        assert!(!data.is_tone_mark('a'));
    }

    #[test]
    fn toml_partial_override_keeps_defaults() {
        let toml = r#"
connector = "‑"

[legacy_substitutions]
"\uE701" = "𪜶"
"#;
        let data = Classification::from_toml_str(toml).unwrap();
        assert_eq!(data.connector, '‑');
        assert_eq!(data.legacy_substitutions.get("\u{e701}").map(String::as_str), Some("𪜶"));
        assert!(data.is_sentence_split_punctuation("。"));
    }

    #[test]
    fn toml_roundtrip() {
        let data = Classification::default();
        let s = data.to_toml_string().unwrap();
        let back = Classification::from_toml_str(&s).unwrap();
        assert_eq!(data, back);
    }
}
