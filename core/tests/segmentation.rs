//! Normalize -> segment -> split pipeline tests
//!
//! Exercises the core crate the way `libtaibun` drives it, with both the
//! default classification data and injected tables.

use libtaibun_core::{normalize, split_words, Classification, Normalizer, Segmenter};

fn words(text: &str) -> Vec<Vec<String>> {
    let segmenter = Segmenter::default();
    let seg = segmenter.segment(&normalize(text)).unwrap();
    split_words(&seg.tokens, &seg.light_tone, &seg.boundary).0
}

#[test]
fn mixed_hanlo_sentence() {
    let got = words("我 beh 去 Tâi-pak，你--ah?");
    let want: Vec<Vec<&str>> = vec![
        vec!["我"],
        vec!["beh"],
        vec!["去"],
        vec!["Tâi", "pak"],
        vec!["，"],
        vec!["你", "ah"],
        vec!["?"],
    ];
    assert_eq!(got, want);
}

#[test]
fn control_characters_become_spaces() {
    assert_eq!(words("lí\u{0007}hó"), vec![vec!["lí"], vec!["hó"]]);
}

#[test]
fn decomposed_input_is_composed_first() {
    // "á" written as a + combining acute
    let got = words("Gua\u{0301}");
    assert_eq!(got, vec![vec!["Guá"]]);
}

#[test]
fn light_tone_flags_follow_words() {
    let segmenter = Segmenter::default();
    let seg = segmenter.segment("kóng--tshut-lâi ah").unwrap();
    let (nested, flags) = split_words(&seg.tokens, &seg.light_tone, &seg.boundary);
    assert_eq!(nested.len(), 2);
    assert_eq!(flags[0], vec![false, true, false]);
    assert_eq!(flags[1], vec![false]);
}

#[test]
fn injected_data_drives_both_stages() {
    let data: Classification = Classification::from_toml_str(
        r#"
sentence_split_punctuation = ["\n", "。", "※"]

[legacy_substitutions]
"\uE701" = "𪜶"
"#,
    )
    .unwrap();
    let normalized = Normalizer::new(&data).normalize("\u{E701}※食");
    assert_eq!(normalized, "𪜶※食");

    let seg = Segmenter::new(&data).segment(&normalized).unwrap();
    assert_eq!(seg.tokens, vec!["𪜶", "※", "食"]);
    assert_eq!(seg.boundary, vec![true, true, false]);
}
