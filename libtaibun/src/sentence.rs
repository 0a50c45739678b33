// libtaibun/src/sentence.rs
//
// A sentence is an ordered run of words. Parsed words remember whether
// whitespace preceded them, and rendering puts a single space exactly there.
// Nothing goes around a line break.
//
// Hand-built words carry no such record and fall back to a punctuation rule:
// nothing before a punctuation word, a space after sentence-ending
// punctuation only when romanized text follows, and a space on both sides of
// a free-standing dash so it is not read back as a connector.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use libtaibun_core::classify::starts_lomaji;
use libtaibun_core::{Result, Scheme};

use crate::character::{Character, Form};
use crate::config::TaibunConfig;
use crate::orthography::OrthographyTable;
use crate::parser::TaibunParser;
use crate::word::Word;

static DEFAULT_CONFIG: Lazy<TaibunConfig> = Lazy::new(TaibunConfig::default);

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sentence {
    words: Vec<Word>,
}

impl Sentence {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse one hanlo (or lomaji) text with the default configuration.
    pub fn parse(text: &str) -> Result<Self> {
        TaibunParser::shared().parse(text)
    }

    /// Parse parallel hanlo and lomaji texts with the default configuration.
    pub fn parse_pair(hanlo: &str, lomaji: &str) -> Result<Self> {
        TaibunParser::shared().parse_pair(hanlo, lomaji)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.words.iter().flat_map(|w| w.characters().iter())
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn render_script(&self) -> String {
        self.render(Form::Script)
    }

    pub fn render_romanized(&self) -> String {
        self.render(Form::Romanized)
    }

    pub fn render_compact(&self) -> String {
        self.render(Form::Compact)
    }

    /// Render with the default configuration. Spacing of parsed words comes
    /// from the source text; the configuration only supplies the compact
    /// policy and the fallback punctuation sets for hand-built words. Use
    /// `render_with` to apply a parser's own configuration.
    pub fn render(&self, form: Form) -> String {
        self.render_with(form, &DEFAULT_CONFIG)
    }

    /// Render using `config` for the compact policy and the fallback
    /// punctuation spacing.
    pub fn render_with(&self, form: Form, config: &TaibunConfig) -> String {
        let data = config.base();
        let mut out = String::new();
        let mut prev: Option<String> = None;
        for word in &self.words {
            let text = match form {
                Form::Compact => word.render_compact_with(config.compact_policy),
                _ => word.render(form),
            };
            if let Some(prev) = &prev {
                let is_dash = |s: &str| s.chars().all(|c| data.is_connector(c));
                let separated = if prev == "\n" || text == "\n" {
                    false
                } else if let Some(spaced) = word.leading_space() {
                    spaced
                } else if is_dash(prev.as_str()) || is_dash(text.as_str()) {
                    true
                } else if data.is_punctuation(&text) {
                    false
                } else if data.is_punctuation(prev) {
                    data.is_sentence_split_punctuation(prev) && starts_lomaji(&text)
                } else {
                    true
                };
                if separated {
                    out.push(' ');
                }
            }
            out.push_str(&text);
            prev = Some(text);
        }
        out
    }

    /// Respell every word in `target`, keeping word structure and light tone.
    pub fn convert_orthography<T>(&self, table: &T, target: Scheme) -> Result<Self>
    where
        T: OrthographyTable + ?Sized,
    {
        let words = self
            .words
            .iter()
            .map(|w| w.convert_orthography(table, target))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { words })
    }

    pub fn to_poj<T>(&self, table: &T) -> Result<Self>
    where
        T: OrthographyTable + ?Sized,
    {
        self.convert_orthography(table, Scheme::Poj)
    }

    /// Respell in KIP (Tâi-lô).
    pub fn to_kip<T>(&self, table: &T) -> Result<Self>
    where
        T: OrthographyTable + ?Sized,
    {
        self.convert_orthography(table, Scheme::Kip)
    }
}

impl FromIterator<Word> for Sentence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_script())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(s: &str) -> Word {
        Word::new(vec![Character::new(s, None, false)])
    }

    #[test]
    fn spacing_around_punctuation() {
        let sentence: Sentence = vec![
            single("Guá"),
            single("tsia̍h"),
            single(","),
            single("lí"),
            single("ne"),
            single("?"),
        ]
        .into_iter()
        .collect();
        assert_eq!(sentence.render_script(), "Guá tsia̍h, lí ne?");
    }

    #[test]
    fn no_space_after_han_punctuation() {
        let sentence = Sentence::new(vec![single("我"), single("，"), single("你")]);
        assert_eq!(sentence.render_script(), "我，你");

        let sentence = Sentence::new(vec![single("「"), single("好"), single("」")]);
        assert_eq!(sentence.render_script(), "「好」");
    }

    #[test]
    fn free_standing_dash_keeps_spaces() {
        let sentence = Sentence::new(vec![single("a"), single("-"), single("b")]);
        assert_eq!(sentence.render_script(), "a - b");
    }

    #[test]
    fn recorded_spacing_wins() {
        let sentence = Sentence::new(vec![
            single("Guá").with_leading_space(false),
            single("(").with_leading_space(true),
            single("hó").with_leading_space(false),
            single(")").with_leading_space(false),
            single("我").with_leading_space(true),
            single("，").with_leading_space(false),
            single("lí").with_leading_space(false),
        ]);
        assert_eq!(sentence.render_script(), "Guá (hó) 我，lí");
    }

    #[test]
    fn line_breaks_are_bare() {
        let sentence = Sentence::new(vec![single("a"), single("\n"), single("b")]);
        assert_eq!(sentence.render_script(), "a\nb");
    }

    #[test]
    fn characters_flatten_words() {
        let sentence = Sentence::new(vec![
            Word::new(vec![Character::new("食", None, false), Character::new("飯", None, false)]),
            single("。"),
        ]);
        let spellings: Vec<&str> = sentence.characters().map(Character::script_form).collect();
        assert_eq!(spellings, vec!["食", "飯", "。"]);
        assert_eq!(sentence.len(), 2);
    }
}
