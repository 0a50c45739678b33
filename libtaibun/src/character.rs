// libtaibun/src/character.rs
//
// One syllable unit: its hanlo spelling, its lomaji spelling and whether it
// is pronounced in the light tone. A light-tone character stores both
// spellings with the `--` prefix already applied.

use serde::{Deserialize, Serialize};

use libtaibun_core::classify::starts_lomaji;
use libtaibun_core::{Result, Scheme, LIGHT_TONE_MARK};

use crate::orthography::{convert_spelling, OrthographyTable};

/// Display form of a character, word or sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// Han characters mixed with romanization (hanlo).
    Script,
    /// Romanization only (lomaji).
    Romanized,
    /// Hanlo with light-tone prefixes elided next to Han text (kiphanlo).
    Compact,
}

/// When the compact form drops a light-tone prefix from the hanlo spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompactPolicy {
    /// Drop the prefix unless the syllable itself is romanized.
    #[default]
    ElideBeforeHan,
    /// Never drop the prefix.
    Keep,
    /// Always drop the prefix; words re-insert it between romanized syllables.
    ElideAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    script_form: String,
    romanized_form: String,
    light_tone: bool,
}

impl Character {
    /// Build a character. Without a lomaji spelling the hanlo spelling is
    /// used for both. A spelling that already carries the light-tone prefix
    /// forces the flag on, and a light-tone flag adds the prefix to any
    /// spelling lacking it.
    pub fn new(script_form: impl Into<String>, romanized_form: Option<&str>, light_tone: bool) -> Self {
        let script_form = script_form.into();
        let romanized_form = romanized_form
            .map(str::to_string)
            .unwrap_or_else(|| script_form.clone());
        let light_tone = light_tone
            || script_form.starts_with(LIGHT_TONE_MARK)
            || romanized_form.starts_with(LIGHT_TONE_MARK);
        if light_tone {
            Self {
                script_form: with_light_tone(script_form),
                romanized_form: with_light_tone(romanized_form),
                light_tone,
            }
        } else {
            Self {
                script_form,
                romanized_form,
                light_tone,
            }
        }
    }

    /// Hanlo spelling, light-tone prefix included.
    pub fn script_form(&self) -> &str {
        &self.script_form
    }

    /// Lomaji spelling, light-tone prefix included.
    pub fn romanized_form(&self) -> &str {
        &self.romanized_form
    }

    pub fn is_light_tone(&self) -> bool {
        self.light_tone
    }

    pub fn bare_script_form(&self) -> &str {
        strip_light_tone(&self.script_form)
    }

    pub fn bare_romanized_form(&self) -> &str {
        strip_light_tone(&self.romanized_form)
    }

    /// Compact spelling under `policy`.
    pub fn compact_form(&self, policy: CompactPolicy) -> &str {
        if !self.light_tone {
            return &self.script_form;
        }
        let bare = self.bare_script_form();
        match policy {
            CompactPolicy::Keep => &self.script_form,
            CompactPolicy::ElideAll => bare,
            CompactPolicy::ElideBeforeHan if starts_lomaji(bare) => &self.script_form,
            CompactPolicy::ElideBeforeHan => bare,
        }
    }

    pub fn render(&self, form: Form) -> &str {
        match form {
            Form::Script => &self.script_form,
            Form::Romanized => &self.romanized_form,
            Form::Compact => self.compact_form(CompactPolicy::default()),
        }
    }

    /// Respell both forms in `target`. The table sees bare syllables; the
    /// light-tone flag and prefix carry over unchanged.
    pub fn convert_orthography<T>(&self, table: &T, target: Scheme) -> Result<Self>
    where
        T: OrthographyTable + ?Sized,
    {
        let script = convert_spelling(table, self.bare_script_form(), target)?;
        let romanized = convert_spelling(table, self.bare_romanized_form(), target)?;
        let (script_form, romanized_form) = if self.light_tone {
            (with_light_tone(script), with_light_tone(romanized))
        } else {
            (script, romanized)
        };
        Ok(Self {
            script_form,
            romanized_form,
            light_tone: self.light_tone,
        })
    }
}

fn with_light_tone(spelling: String) -> String {
    if spelling.starts_with(LIGHT_TONE_MARK) {
        spelling
    } else {
        format!("{LIGHT_TONE_MARK}{spelling}")
    }
}

fn strip_light_tone(spelling: &str) -> &str {
    spelling.strip_prefix(LIGHT_TONE_MARK).unwrap_or(spelling)
}
