/*!
Sentence builder - `libtaibun/src/parser.rs`

Turns raw hanlo and/or lomaji text into the `Sentence` model:

  text -> normalize -> segment -> split_words -> Word / Character

With two tracks, both are segmented independently and paired token by
token. The lomaji track decides word boundaries and light tone, since the
hyphens and `--` marks are reliably written in romanized text and often
dropped from Han text.

Public API:
  - `TaibunParser::new(TaibunConfig)`
  - `parse(&self, text)` / `parse_pair(&self, hanlo, lomaji)`
  - `parse_optional(&self, Option<&str>, Option<&str>)`
  - `parse_document(&self, text)` - one `Sentence` per sentence
*/

use once_cell::sync::Lazy;
use tracing::{debug, debug_span, warn};

use libtaibun_core::{split_words, Error, Normalizer, Result, Segmentation, Segmenter};

use crate::character::Character;
use crate::config::TaibunConfig;
use crate::sentence::Sentence;
use crate::word::Word;

static DEFAULT_PARSER: Lazy<TaibunParser> = Lazy::new(TaibunParser::default);

/// Builds sentences from text. Immutable after construction; share freely
/// across threads.
#[derive(Debug, Clone)]
pub struct TaibunParser {
    config: TaibunConfig,
    normalizer: Normalizer,
    segmenter: Segmenter,
}

impl Default for TaibunParser {
    fn default() -> Self {
        Self::new(TaibunConfig::default())
    }
}

impl TaibunParser {
    pub fn new(config: TaibunConfig) -> Self {
        let normalizer = Normalizer::new(config.base());
        let segmenter = Segmenter::new(config.base());
        Self {
            config,
            normalizer,
            segmenter,
        }
    }

    /// Process-wide parser using the default configuration.
    pub fn shared() -> &'static TaibunParser {
        &DEFAULT_PARSER
    }

    pub fn config(&self) -> &TaibunConfig {
        &self.config
    }

    fn scan(&self, text: &str) -> Result<Segmentation> {
        let normalized = self.normalizer.normalize(text);
        self.segmenter.segment(&normalized)
    }

    /// Parse a single track. The text may be hanlo or lomaji; each token
    /// becomes a character whose lomaji spelling equals its hanlo spelling.
    pub fn parse(&self, text: &str) -> Result<Sentence> {
        let _span = debug_span!("parse", len = text.len()).entered();
        let (tokens, light_tone, boundary, spaced) = self.scan(text)?.into_parts();
        let (words, flags) = split_words(&tokens, &light_tone, &boundary);
        let leading = leading_spaces(&words, &spaced);

        let sentence: Sentence = words
            .into_iter()
            .zip(flags)
            .zip(leading)
            .map(|((word, flags), spaced)| {
                word.into_iter()
                    .zip(flags)
                    .map(|(token, light)| Character::new(token, None, light))
                    .collect::<Word>()
                    .with_leading_space(spaced)
            })
            .collect();
        debug!(tokens = tokens.len(), words = sentence.len(), "parsed");
        Ok(sentence)
    }

    /// Parse parallel hanlo and lomaji texts into one aligned sentence.
    ///
    /// Both tracks must yield the same number of syllables, otherwise
    /// `Error::TrackLengthMismatch` is returned and nothing is built.
    pub fn parse_pair(&self, hanlo: &str, lomaji: &str) -> Result<Sentence> {
        let _span = debug_span!("parse_pair", hanlo_len = hanlo.len(), lomaji_len = lomaji.len())
            .entered();
        let han = self.scan(hanlo)?;
        let lo = self.scan(lomaji)?;
        if han.len() != lo.len() {
            warn!(hanlo = han.len(), lomaji = lo.len(), "track lengths differ");
            return Err(Error::TrackLengthMismatch {
                hanlo: han.len(),
                lomaji: lo.len(),
            });
        }

        let (lo_tokens, light_tone, boundary, spaced) = lo.into_parts();
        let (han_words, _) = split_words(&han.tokens, &light_tone, &boundary);
        let (lo_words, flags) = split_words(&lo_tokens, &light_tone, &boundary);
        // word structure, and with it spacing, comes from the lomaji track
        let leading = leading_spaces(&lo_words, &spaced);

        let sentence: Sentence = han_words
            .into_iter()
            .zip(lo_words)
            .zip(flags)
            .zip(leading)
            .map(|(((han_word, lo_word), flags), spaced)| {
                han_word
                    .into_iter()
                    .zip(lo_word)
                    .zip(flags)
                    .map(|((h, l), light)| Character::new(h, Some(l.as_str()), light))
                    .collect::<Word>()
                    .with_leading_space(spaced)
            })
            .collect();
        debug!(tokens = lo_tokens.len(), words = sentence.len(), "parsed pair");
        Ok(sentence)
    }

    /// Parse whichever tracks are present. A lone lomaji track is parsed
    /// like a hanlo one; no text at all gives an empty sentence.
    pub fn parse_optional(&self, hanlo: Option<&str>, lomaji: Option<&str>) -> Result<Sentence> {
        match (hanlo, lomaji) {
            (Some(h), Some(l)) => self.parse_pair(h, l),
            (Some(text), None) | (None, Some(text)) => self.parse(text),
            (None, None) => Ok(Sentence::default()),
        }
    }

    /// Parse running text and cut it into sentences. Sentence-ending
    /// punctuation stays with the sentence it closes; line breaks end a
    /// sentence and are dropped.
    pub fn parse_document(&self, text: &str) -> Result<Vec<Sentence>> {
        let _span = debug_span!("parse_document", len = text.len()).entered();
        let data = self.config.base();
        let mut sentences = Vec::new();
        let mut current = Vec::new();

        for word in self.parse(text)?.words() {
            let script = word.render_script();
            if script == "\n" {
                if !current.is_empty() {
                    sentences.push(Sentence::new(std::mem::take(&mut current)));
                }
                continue;
            }
            let ends_sentence = data.is_sentence_split_punctuation(&script);
            current.push(word.clone());
            if ends_sentence {
                sentences.push(Sentence::new(std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            sentences.push(Sentence::new(current));
        }
        debug!(sentences = sentences.len(), "parsed document");
        Ok(sentences)
    }
}

/// Whitespace flag of each word's first token.
fn leading_spaces<T>(words: &[Vec<T>], spaced: &[bool]) -> Vec<bool> {
    let mut start = 0;
    words
        .iter()
        .map(|word| {
            let flag = spaced.get(start).copied().unwrap_or(false);
            start += word.len();
            flag
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Form;

    fn scripts(sentence: &Sentence) -> Vec<String> {
        sentence.words().iter().map(Word::render_script).collect()
    }

    #[test]
    fn single_track_words() {
        let parser = TaibunParser::default();
        let sentence = parser.parse("Guá tsia̍h-pá--ah.").unwrap();
        assert_eq!(scripts(&sentence), vec!["Guá", "tsia̍h-pá--ah", "."]);
        let word = &sentence.words()[1];
        assert_eq!(word.len(), 3);
        assert!(word.characters()[2].is_light_tone());
    }

    #[test]
    fn pair_aligns_characters() {
        let parser = TaibunParser::default();
        let sentence = parser.parse_pair("我食飽矣。", "Guá tsia̍h-pá--ah.").unwrap();
        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence.render(Form::Script), "我 食飽--矣。");
        assert_eq!(sentence.render(Form::Romanized), "Guá tsia̍h-pá--ah.");
        assert_eq!(sentence.render(Form::Compact), "我 食飽矣。");

        let chars: Vec<(&str, &str)> = sentence
            .characters()
            .map(|c| (c.bare_script_form(), c.bare_romanized_form()))
            .collect();
        assert_eq!(chars[1], ("食", "tsia̍h"));
        assert_eq!(chars[3], ("矣", "ah"));
    }

    #[test]
    fn words_remember_leading_space() {
        let parser = TaibunParser::default();
        let sentence = parser.parse("Guá kóng: hó").unwrap();
        let leading: Vec<Option<bool>> =
            sentence.words().iter().map(Word::leading_space).collect();
        assert_eq!(leading, vec![Some(false), Some(true), Some(false), Some(true)]);
    }

    #[test]
    fn pair_length_mismatch() {
        let parser = TaibunParser::default();
        let err = parser.parse_pair("我食", "Guá").unwrap_err();
        assert_eq!(err, Error::TrackLengthMismatch { hanlo: 2, lomaji: 1 });
    }

    #[test]
    fn optional_tracks() {
        let parser = TaibunParser::default();
        assert!(parser.parse_optional(None, None).unwrap().is_empty());
        let only_lomaji = parser.parse_optional(None, Some("li-ho")).unwrap();
        assert_eq!(only_lomaji.render_romanized(), "li-ho");
        let both = parser.parse_optional(Some("你好"), Some("lí-hó")).unwrap();
        assert_eq!(both.render_script(), "你好");
    }

    #[test]
    fn document_sentences() {
        let parser = TaibunParser::default();
        let sentences = parser.parse_document("你好。我食飽矣\n多謝！").unwrap();
        let rendered: Vec<String> = sentences.iter().map(Sentence::render_script).collect();
        assert_eq!(rendered, vec!["你好。", "我食飽矣", "多謝！"]);
        assert!(parser.parse_document("").unwrap().is_empty());
    }
}
