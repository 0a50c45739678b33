//! Orthography conversion through the sentence model
//!
//! Conversion respells lomaji syllables while keeping word structure,
//! light-tone flags and Han spellings untouched.

use libtaibun::{Error, MappingTable, Result, Scheme, Sentence};

fn table() -> MappingTable {
    MappingTable::from_toml_str(
        r#"
[syllables]
"goá" = "guá"
"chia̍h" = "tsia̍h"
"pá" = "pá"
"ah" = "ah"
"#,
    )
    .unwrap()
}

#[test]
fn kip_to_poj_and_back() {
    let table = table();
    let kip = Sentence::parse_pair("我食飽矣。", "Guá tsia̍h-pá--ah.").unwrap();

    let poj = kip.convert_orthography(&table, Scheme::Poj).unwrap();
    assert_eq!(poj.render_romanized(), "Goá chia̍h-pá--ah.");
    assert_eq!(poj.render_script(), kip.render_script());

    let back = poj.convert_orthography(&table, Scheme::TL).unwrap();
    assert_eq!(back, kip);

    // a second round trip changes nothing further
    let again = back
        .convert_orthography(&table, Scheme::Poj)
        .unwrap()
        .convert_orthography(&table, Scheme::Kip)
        .unwrap();
    assert_eq!(again, kip);
}

#[test]
fn scheme_shortcuts() {
    let table = table();
    let kip = Sentence::parse("Guá tsia̍h").unwrap();
    let poj = kip.to_poj(&table).unwrap();
    assert_eq!(poj.render_script(), "Goá chia̍h");
    assert_eq!(poj.to_kip(&table).unwrap(), kip);
}

#[test]
fn light_tone_survives_conversion() {
    let sentence = Sentence::parse("tsia̍h-pá--ah").unwrap();
    let poj = sentence.convert_orthography(&table(), Scheme::Poj).unwrap();
    let flags: Vec<bool> = poj.characters().map(|c| c.is_light_tone()).collect();
    assert_eq!(flags, vec![false, false, true]);
    assert_eq!(poj.render_script(), "chia̍h-pá--ah");
}

#[test]
fn unknown_syllable_fails() {
    let sentence = Sentence::parse("Guá bô").unwrap();
    let err = sentence.convert_orthography(&table(), Scheme::Poj).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedSyllable {
            syllable: "bô".to_string(),
            scheme: Scheme::Poj
        }
    );
}

#[test]
fn closure_as_table() {
    let upper = |s: &str, _: Scheme| -> Result<String> { Ok(s.to_uppercase()) };
    let sentence = Sentence::parse("食 pn̄g").unwrap();
    let converted = sentence.convert_orthography(&upper, Scheme::Kip).unwrap();
    assert_eq!(converted.render_script(), "食 PN̄G");
}
