// core/src/classify.rs
//
// Stateless code-point predicates used by the segmenter and by the word
// renderers. Predicates that depend on swappable data (punctuation sets,
// connector mark, composition operators) live on `Classification` instead.

use unicode_normalization::char::is_combining_mark;

/// Ideographic Description Characters and the number of operands each takes.
///
/// ⿲ and ⿳ arrange three components, ⿿ (rotation) takes one, every other
/// operator takes two.
pub static IDEOGRAPHIC_DESCRIPTION: phf::Map<char, u8> = phf::phf_map! {
    '⿰' => 2u8,
    '⿱' => 2u8,
    '⿲' => 3u8,
    '⿳' => 3u8,
    '⿴' => 2u8,
    '⿵' => 2u8,
    '⿶' => 2u8,
    '⿷' => 2u8,
    '⿸' => 2u8,
    '⿹' => 2u8,
    '⿺' => 2u8,
    '⿻' => 2u8,
    '⿿' => 1u8,
};

/// Marks that may begin a romanized syllable besides letters.
const NASAL_MARKS: [char; 2] = ['ᴺ', 'ⁿ'];

/// Marks that only continue a romanized syllable already begun.
const JOINING_MARKS: [char; 2] = ['_', '\''];

/// Latin letter in any of the blocks used by POJ and Tâi-lô spellings.
pub fn is_latin_letter(c: char) -> bool {
    if c.is_ascii_alphabetic() {
        return true;
    }
    if !c.is_alphabetic() {
        return false;
    }
    matches!(c,
        '\u{00C0}'..='\u{024F}'
        | '\u{0250}'..='\u{02AF}'
        | '\u{1D00}'..='\u{1D7F}'
        | '\u{1E00}'..='\u{1EFF}'
        | '\u{2C60}'..='\u{2C7F}'
        | '\u{A720}'..='\u{A7FF}'
        | '\u{FF21}'..='\u{FF3A}'
        | '\u{FF41}'..='\u{FF5A}')
}

/// True for characters that may start a romanized syllable: Latin letters,
/// combining tone/nasalization marks, and the superscript nasal marks.
pub fn is_romanized_start(c: char) -> bool {
    is_latin_letter(c) || is_combining_mark(c) || NASAL_MARKS.contains(&c)
}

/// True for any character that belongs to a romanized syllable once begun.
pub fn is_romanized_constituent(c: char) -> bool {
    is_romanized_start(c) || JOINING_MARKS.contains(&c)
}

/// True iff `s` is non-empty and every character is ASCII 0–9.
pub fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

pub fn is_bopomofo(c: char) -> bool {
    matches!(c, '\u{3100}'..='\u{312F}' | '\u{31A0}'..='\u{31BF}')
}

/// Letter, digit or tone mark: the characters that make a rendered form
/// count as romanized when deciding where connector marks go.
pub fn is_lomaji_char(c: char) -> bool {
    is_romanized_constituent(c) || c.is_ascii_digit()
}

/// Whether the first character of `s` is romanized.
pub fn starts_lomaji(s: &str) -> bool {
    s.chars().next().is_some_and(is_lomaji_char)
}

/// Whether the last character of `s` is romanized.
pub fn ends_lomaji(s: &str) -> bool {
    s.chars().next_back().is_some_and(is_lomaji_char)
}

/// Non-printable control characters that the normalizer blanks out.
/// Tab, line feed and carriage return are kept.
pub fn is_nonprintable(c: char) -> bool {
    matches!(c,
        '\u{0000}'..='\u{0008}'
        | '\u{000B}'
        | '\u{000C}'
        | '\u{000E}'..='\u{001F}'
        | '\u{007F}'..='\u{009F}')
}

/// Whitespace that separates words without ending a line.
pub fn is_inline_space(c: char) -> bool {
    c.is_whitespace() && c != '\n'
}
