// libtaibun/src/word.rs
//
// A word is an ordered run of characters. Its display forms are derived
// from the characters alone, inserting connector marks where the written
// language expects them:
//
//   H, H   -> HH
//   H, L   -> HL
//   L, H   -> LH
//   L, L   -> L-L
//   L, --L -> L--L
//   --H, H -> --H-H   (everything after a light-tone syllable is joined)

use std::fmt;

use serde::{Deserialize, Serialize};

use libtaibun_core::classify::{ends_lomaji, starts_lomaji};
use libtaibun_core::{Result, Scheme, CONNECTOR, LIGHT_TONE_MARK};

use crate::character::{Character, CompactPolicy, Form};
use crate::orthography::OrthographyTable;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    characters: Vec<Character>,
    /// Whether the source text had whitespace before this word. `None` for
    /// words built by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    leading_space: Option<bool>,
}

impl Word {
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            characters,
            leading_space: None,
        }
    }

    /// Record whether whitespace preceded this word in its source text.
    pub fn with_leading_space(mut self, spaced: bool) -> Self {
        self.leading_space = Some(spaced);
        self
    }

    pub fn leading_space(&self) -> Option<bool> {
        self.leading_space
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn render(&self, form: Form) -> String {
        match form {
            Form::Script | Form::Romanized => self.join_with_connectors(form),
            Form::Compact => self.render_compact(),
        }
    }

    /// Hanlo form.
    pub fn render_script(&self) -> String {
        self.join_with_connectors(Form::Script)
    }

    /// Lomaji form.
    pub fn render_romanized(&self) -> String {
        self.join_with_connectors(Form::Romanized)
    }

    /// Kiphanlo form with the default compact policy.
    pub fn render_compact(&self) -> String {
        self.render_compact_with(CompactPolicy::default())
    }

    pub fn render_compact_with(&self, policy: CompactPolicy) -> String {
        let mut out = String::new();
        let mut prev_lomaji = false;
        for ch in &self.characters {
            let text = ch.compact_form(policy);
            if prev_lomaji && starts_lomaji(text) {
                if ch.is_light_tone() {
                    out.push_str(LIGHT_TONE_MARK);
                } else {
                    out.push(CONNECTOR);
                }
            }
            out.push_str(text);
            prev_lomaji = ends_lomaji(text);
        }
        out
    }

    fn join_with_connectors(&self, form: Form) -> String {
        let mut out = String::new();
        let mut prev_lomaji = false;
        let mut has_light_tone = false;
        for ch in &self.characters {
            let text = ch.render(form);
            if ch.is_light_tone() {
                // the prefix stands in for the connector
                has_light_tone = true;
            } else if (prev_lomaji && starts_lomaji(text)) || has_light_tone {
                out.push(CONNECTOR);
            }
            out.push_str(text);
            prev_lomaji = ends_lomaji(text);
        }
        out
    }

    /// Respell every character in `target`, keeping light-tone flags.
    pub fn convert_orthography<T>(&self, table: &T, target: Scheme) -> Result<Self>
    where
        T: OrthographyTable + ?Sized,
    {
        let characters = self
            .characters
            .iter()
            .map(|ch| ch.convert_orthography(table, target))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            characters,
            leading_space: self.leading_space,
        })
    }
}

impl FromIterator<Character> for Word {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_script())
    }
}
