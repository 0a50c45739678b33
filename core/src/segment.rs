// core/src/segment.rs
//
// Single-pass segmenter: splits normalized text into syllable tokens with a
// light-tone flag, a "word ends here" flag and a "preceded by whitespace"
// flag per token.
//
// Word boundaries come only from surface cues:
// - whitespace and punctuation end a word
// - a connector mark or light-tone mark joins its neighbours into one word
// - a romanized token next to a non-romanized one ends a word, unless the
//   two are joined by a mark
// - adjacent Han characters stay in one word
//
// Composition sequences (⿰木子) are consumed whole as one token. The scan
// state is an explicit enum so the composition buffer only exists while a
// sequence is open.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::classify::{
    is_bopomofo, is_inline_space, is_romanized_constituent, is_romanized_start,
};
use crate::config::Classification;
use crate::error::{Error, Result};

/// Output of one segmentation pass: four parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub tokens: Vec<String>,
    pub light_tone: Vec<bool>,
    /// `boundary[i]` is true when token `i` is the last of its word.
    pub boundary: Vec<bool>,
    /// `spaced[i]` is true when whitespace came directly before token `i`.
    pub spaced: Vec<bool>,
}

impl Segmentation {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<bool>, Vec<bool>, Vec<bool>) {
        (self.tokens, self.light_tone, self.boundary, self.spaced)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Lomaji,
    Numeral,
    Bopomofo,
    Composed,
    Punctuation,
    Other,
}

impl TokenKind {
    fn is_lomaji(self) -> bool {
        matches!(self, TokenKind::Lomaji | TokenKind::Numeral)
    }
}

#[derive(Debug)]
enum ScanState {
    Normal,
    Composing {
        balance: i32,
        buffer: String,
        start: usize,
    },
}

/// Result of feeding one character to an open composition sequence.
enum ComposeStep {
    Open(ScanState),
    Saturated(String),
}

/// A romanized or numeral run still accepting characters.
#[derive(Debug)]
struct Pending {
    text: String,
    kind: TokenKind,
    has_digits: bool,
}

impl Pending {
    fn new(c: char, kind: TokenKind) -> Self {
        Self {
            text: c.to_string(),
            kind,
            has_digits: c.is_ascii_digit(),
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            TokenKind::Lomaji if c.is_ascii_digit() => true,
            // a letter after tone digits starts the next syllable
            TokenKind::Lomaji => {
                is_romanized_constituent(c) && !(self.has_digits && is_romanized_start(c))
            }
            TokenKind::Numeral => c.is_ascii_digit(),
            _ => false,
        }
    }

    fn push(&mut self, c: char) {
        self.has_digits |= c.is_ascii_digit();
        self.text.push(c);
    }
}

/// Accumulated output plus the flags carried between characters.
#[derive(Debug, Default)]
struct Scan {
    tokens: Vec<String>,
    light_tone: Vec<bool>,
    boundary: Vec<bool>,
    spaced: Vec<bool>,
    pending: Option<Pending>,
    last_kind: Option<TokenKind>,
    /// Next emitted token is light tone.
    light_next: bool,
    /// A connector or light-tone mark sits between the last token and the next.
    joined: bool,
    /// Char index right after the last Bopomofo token, for tone-mark attachment.
    bopomofo_end: Option<usize>,
    /// Whitespace seen since the last emitted token.
    after_space: bool,
}

impl Scan {
    fn emit(&mut self, token: String, kind: TokenKind) {
        let light = std::mem::take(&mut self.light_next);
        if let (Some(prev), Some(last)) = (self.last_kind, self.boundary.last_mut()) {
            if !*last && !self.joined && prev.is_lomaji() != kind.is_lomaji() {
                *last = true;
            }
        }
        self.tokens.push(token);
        self.light_tone.push(light);
        self.boundary.push(false);
        self.spaced.push(std::mem::take(&mut self.after_space));
        self.last_kind = Some(kind);
        self.joined = false;
        self.bopomofo_end = None;
    }

    fn emit_punctuation(&mut self, token: String) {
        self.mark_boundary();
        self.tokens.push(token);
        self.light_tone.push(false);
        self.boundary.push(true);
        self.spaced.push(std::mem::take(&mut self.after_space));
        self.last_kind = Some(TokenKind::Punctuation);
        self.light_next = false;
        self.joined = false;
        self.bopomofo_end = None;
    }

    fn begin(&mut self, c: char, kind: TokenKind) {
        self.pending = Some(Pending::new(c, kind));
    }

    fn flush(&mut self) {
        if let Some(p) = self.pending.take() {
            self.emit(p.text, p.kind);
        }
    }

    fn mark_boundary(&mut self) {
        if let Some(last) = self.boundary.last_mut() {
            *last = true;
        }
    }

    /// Whether the character at `pos` directly follows a token of the
    /// current word (so a connector there joins rather than punctuates).
    fn follows_token(&self, chars: &[char], pos: usize) -> bool {
        if self.pending.is_some() {
            return true;
        }
        pos > 0 && !chars[pos - 1].is_whitespace() && self.boundary.last() == Some(&false)
    }

    fn finish(self) -> Segmentation {
        Segmentation {
            tokens: self.tokens,
            light_tone: self.light_tone,
            boundary: self.boundary,
            spaced: self.spaced,
        }
    }
}

/// Segmenter bound to one set of classification data.
#[derive(Debug, Clone)]
pub struct Segmenter {
    data: Classification,
    punctuation: HashSet<String>,
    punctuation_starts: HashSet<char>,
    max_punctuation_len: usize,
    light_tone_mark: Vec<char>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(&Classification::default())
    }
}

impl Segmenter {
    pub fn new(data: &Classification) -> Self {
        let punctuation: HashSet<String> = data
            .sentence_punctuation
            .iter()
            .chain(data.sentence_split_punctuation.iter())
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();
        let punctuation_starts = punctuation.iter().filter_map(|p| p.chars().next()).collect();
        let max_punctuation_len = punctuation
            .iter()
            .map(|p| p.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            data: data.clone(),
            punctuation,
            punctuation_starts,
            max_punctuation_len,
            light_tone_mark: data.light_tone_mark.chars().collect(),
        }
    }

    pub fn classification(&self) -> &Classification {
        &self.data
    }

    /// Segment `text` into syllable tokens and per-token flags.
    ///
    /// Input made only of non-newline whitespace yields empty sequences. An
    /// unterminated composition sequence, or whitespace inside one, is an
    /// error.
    pub fn segment(&self, text: &str) -> Result<Segmentation> {
        if text.chars().all(is_inline_space) {
            return Ok(Segmentation::default());
        }

        let chars: Vec<char> = text.chars().collect();
        let mut scan = Scan::default();
        let mut state = ScanState::Normal;
        let mut pos = 0;

        while pos < chars.len() {
            state = match state {
                ScanState::Composing {
                    balance,
                    buffer,
                    start,
                } => {
                    let step = self.compose_step(balance, buffer, start, chars[pos])?;
                    pos += 1;
                    match step {
                        ComposeStep::Open(next) => next,
                        ComposeStep::Saturated(token) => {
                            trace!(token = %token, "composition sequence closed");
                            scan.emit(token, TokenKind::Composed);
                            ScanState::Normal
                        }
                    }
                }
                ScanState::Normal => {
                    let (next, consumed) = self.normal_step(&chars, pos, &mut scan);
                    pos += consumed;
                    next
                }
            };
        }

        if let ScanState::Composing { buffer, start, .. } = state {
            warn!(sequence = %buffer, position = start, "input ended inside composition sequence");
            return Err(Error::MalformedComposition {
                sequence: buffer,
                position: start,
            });
        }

        scan.flush();
        let seg = scan.finish();
        debug!(
            tokens = seg.len(),
            words = seg.boundary.iter().filter(|b| **b).count(),
            "segmented text"
        );
        Ok(seg)
    }

    /// Feed one character to an open composition sequence.
    ///
    /// An operator of arity n lowers the balance by n - 1, an operand raises
    /// it by one; the sequence is saturated at +1.
    fn compose_step(
        &self,
        balance: i32,
        mut buffer: String,
        start: usize,
        c: char,
    ) -> Result<ComposeStep> {
        if c.is_whitespace() {
            warn!(sequence = %buffer, position = start, "whitespace inside composition sequence");
            return Err(Error::MalformedComposition {
                sequence: buffer,
                position: start,
            });
        }
        buffer.push(c);
        let balance = balance
            + match self.data.composition_arity(c) {
                Some(arity) => 1 - i32::from(arity),
                None => 1,
            };
        if balance >= 1 {
            Ok(ComposeStep::Saturated(buffer))
        } else {
            Ok(ComposeStep::Open(ScanState::Composing {
                balance,
                buffer,
                start,
            }))
        }
    }

    /// Handle the character at `pos` in normal mode. Returns the next state
    /// and the number of characters consumed.
    fn normal_step(&self, chars: &[char], pos: usize, scan: &mut Scan) -> (ScanState, usize) {
        let c = chars[pos];

        if let Some(pending) = scan.pending.as_mut() {
            if pending.accepts(c) {
                pending.push(c);
                return (ScanState::Normal, 1);
            }
        }

        if let Some(arity) = self.data.composition_arity(c) {
            scan.flush();
            trace!(position = pos, "composition sequence opened");
            let state = ScanState::Composing {
                balance: 1 - i32::from(arity),
                buffer: c.to_string(),
                start: pos,
            };
            return (state, 1);
        }

        if self.light_tone_mark_at(chars, pos) {
            scan.flush();
            scan.light_next = true;
            scan.joined = true;
            return (ScanState::Normal, self.light_tone_mark.len());
        }

        if self.data.is_connector(c)
            && self.is_token_start(chars, pos + 1)
            && scan.follows_token(chars, pos)
        {
            scan.flush();
            scan.joined = true;
            return (ScanState::Normal, 1);
        }

        if scan.bopomofo_end == Some(pos) && self.data.is_tone_mark(c) {
            if let Some(last) = scan.tokens.last_mut() {
                last.push(c);
            }
            scan.bopomofo_end = None;
            return (ScanState::Normal, 1);
        }

        if let Some(len) = self.punctuation_len_at(chars, pos) {
            scan.flush();
            scan.emit_punctuation(chars[pos..pos + len].iter().collect());
            return (ScanState::Normal, len);
        }

        scan.flush();
        if c.is_whitespace() {
            scan.mark_boundary();
            scan.after_space = true;
        } else if is_romanized_start(c) {
            scan.begin(c, TokenKind::Lomaji);
        } else if c.is_ascii_digit() {
            scan.begin(c, TokenKind::Numeral);
        } else if is_bopomofo(c) {
            scan.emit(c.to_string(), TokenKind::Bopomofo);
            scan.bopomofo_end = Some(pos + 1);
        } else {
            scan.emit(c.to_string(), TokenKind::Other);
        }
        (ScanState::Normal, 1)
    }

    /// Light-tone mark at `pos` immediately followed by a token start.
    fn light_tone_mark_at(&self, chars: &[char], pos: usize) -> bool {
        let mark = &self.light_tone_mark;
        !mark.is_empty()
            && chars[pos..].starts_with(mark)
            && self.is_token_start(chars, pos + mark.len())
    }

    /// Whether a syllable can begin at `pos`.
    fn is_token_start(&self, chars: &[char], pos: usize) -> bool {
        match chars.get(pos) {
            Some(&c) => {
                !c.is_whitespace()
                    && !self.data.is_connector(c)
                    && self.punctuation_len_at(chars, pos).is_none()
            }
            None => false,
        }
    }

    /// Length in chars of the longest punctuation entry starting at `pos`.
    fn punctuation_len_at(&self, chars: &[char], pos: usize) -> Option<usize> {
        if !self.punctuation_starts.contains(&chars[pos]) {
            return None;
        }
        let longest = self.max_punctuation_len.min(chars.len() - pos);
        (1..=longest).rev().find(|len| {
            let candidate: String = chars[pos..pos + len].iter().collect();
            self.punctuation.contains(&candidate)
        })
    }
}

/// Segment with the default classification data.
pub fn segment(text: &str) -> Result<Segmentation> {
    Segmenter::default().segment(text)
}
