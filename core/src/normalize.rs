// core/src/normalize.rs
//
// Text normalization run once on every input track before segmentation:
// control characters become spaces, legacy private-use code points are
// replaced, and the result is NFC-composed.

use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::classify::is_nonprintable;
use crate::config::Classification;

/// Normalizer bound to one substitution table.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Longest key first; values already resolved through the table.
    substitutions: Vec<(Vec<char>, String)>,
}

impl Normalizer {
    pub fn new(data: &Classification) -> Self {
        let mut table: Vec<(Vec<char>, String)> = data
            .legacy_substitutions
            .iter()
            .filter(|(from, _)| !from.is_empty())
            .map(|(from, to)| (from.chars().collect(), to.clone()))
            .collect();
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        // A replacement that contains another key is followed to its fixed
        // point, so one pass over the input is final.
        let substitutions = table
            .iter()
            .map(|(from, to)| {
                let mut value = to.clone();
                for _ in 0..table.len() {
                    let next = substitute(&table, &value);
                    if next == value {
                        break;
                    }
                    value = next;
                }
                if substitute(&table, &value) != value {
                    let key: String = from.iter().collect();
                    warn!(key = %key, "legacy substitutions form a cycle");
                }
                (from.clone(), value)
            })
            .collect();
        Self { substitutions }
    }

    /// Normalize `text`. Idempotent: a second pass returns its input.
    pub fn normalize(&self, text: &str) -> String {
        let blanked: String = text
            .chars()
            .map(|c| if is_nonprintable(c) { ' ' } else { c })
            .collect();
        let out = if self.substitutions.is_empty() {
            blanked
        } else {
            substitute(&self.substitutions, &blanked)
        };
        out.nfc().collect()
    }
}

/// One left-to-right pass: at each position the longest matching key is
/// replaced and scanning resumes after it. Replacements are not rescanned.
fn substitute(table: &[(Vec<char>, String)], text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < chars.len() {
        match table.iter().find(|(from, _)| chars[pos..].starts_with(from)) {
            Some((from, to)) => {
                out.push_str(to);
                pos += from.len();
            }
            None => {
                out.push(chars[pos]);
                pos += 1;
            }
        }
    }
    out
}

/// Normalize with the default classification data.
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_chars_become_spaces() {
        assert_eq!(normalize("a\u{0000}b\u{0007}c"), "a b c");
        assert_eq!(normalize("食\u{000B}飯"), "食 飯");
        assert_eq!(normalize("x\u{0090}y"), "x y");
    }

    #[test]
    fn line_structure_kept() {
        assert_eq!(normalize("a\tb\nc\r\n"), "a\tb\nc\r\n");
    }

    #[test]
    fn composes_tone_marks() {
        // o + combining acute composes; a + U+030D has no precomposed form
        assert_eq!(normalize("o\u{0301}"), "ó");
        assert_eq!(normalize("tsia\u{030D}h"), "tsia\u{030D}h");
    }

    #[test]
    fn legacy_code_points_replaced() {
        let mut data = Classification::default();
        data.legacy_substitutions
            .insert("\u{E701}".to_string(), "𪜶".to_string());
        let n = Normalizer::new(&data);
        assert_eq!(n.normalize("\u{E701}兜"), "𪜶兜");
    }

    #[test]
    fn chained_substitutions_resolve_in_one_pass() {
        let mut data = Classification::default();
        data.legacy_substitutions
            .insert("\u{E000}".to_string(), "X".to_string());
        data.legacy_substitutions
            .insert("\u{E001}".to_string(), "\u{E000}".to_string());
        let n = Normalizer::new(&data);
        let once = n.normalize("\u{E001}\u{E000}");
        assert_eq!(once, "XX");
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn longest_key_wins() {
        let mut data = Classification::default();
        data.legacy_substitutions
            .insert("\u{E000}".to_string(), "a".to_string());
        data.legacy_substitutions
            .insert("\u{E000}\u{E001}".to_string(), "b".to_string());
        let n = Normalizer::new(&data);
        assert_eq!(n.normalize("\u{E000}\u{E001}\u{E000}"), "ba");
    }

    #[test]
    fn idempotent() {
        let mut data = Classification::default();
        data.legacy_substitutions
            .insert("\u{E701}".to_string(), "𪜶".to_string());
        let n = Normalizer::new(&data);
        for text in [
            "Gua\u{0301} tsia\u{030D}h\u{0000}--bē",
            "\u{E701}\u{0085}食飯。",
            "⿰木子 ㄊㄞˊ",
            "",
        ] {
            let once = n.normalize(text);
            assert_eq!(n.normalize(&once), once);
        }
    }
}
