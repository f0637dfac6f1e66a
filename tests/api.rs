//! Integration tests over the public API.

use brahmic::normalize::{normalize, NormalizeOptions};
use brahmic::phonetic::feature_vector;
use brahmic::script::{self, Language, COORDINATED_RANGE_END};
use brahmic::similarity::{self, equal, lcsr, similarity_matrix};
use brahmic::syllable::orthographic_syllabify;
use brahmic::translit::transliterate;

#[test]
fn transliteration_round_trips_over_the_coordinated_range() {
    // Devanagari and Kannada assign compatible offsets, so the mapping
    // inverts exactly for every coordinated character.
    for offset in 0..=COORDINATED_RANGE_END {
        let c = script::char_of(offset, Language::Hi).to_string();
        let there = transliterate(&c, "hi", "kn");
        let back = transliterate(&there, "kn", "hi");
        assert_eq!(back, c, "offset {:#x}", offset);
    }
}

#[test]
fn transliteration_leaves_foreign_text_alone() {
    assert_eq!(transliterate("hello, world", "hi", "ta"), "hello, world");
    assert_eq!(transliterate("\u{0915}", "xx", "ta"), "\u{0915}");
}

#[test]
fn devanagari_zero_maps_to_tamil_zero() {
    assert_eq!(transliterate("\u{0966}", "hi", "ta"), "\u{0BE6}");
}

#[test]
fn syllables_concatenate_back_to_the_word() {
    let words: &[(&str, Language)] = &[
        ("\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}", Language::Hi),
        ("\u{0938}\u{0902}\u{0924}", Language::Hi),
        ("\u{0B95}\u{0BAE}\u{0BB2}", Language::Ta),
        ("\u{0C95}\u{0CA8}\u{0CCD}\u{0CA8}\u{0CA1}", Language::Kn),
    ];
    for &(word, lang) in words {
        assert_eq!(orthographic_syllabify(word, lang, None).concat(), word);
    }
}

#[test]
fn halant_suppresses_a_consonant_boundary() {
    // ka-sa-ta splits between every consonant; ka-s.ta keeps the cluster
    let plain = orthographic_syllabify("\u{0915}\u{0938}\u{0924}", Language::Hi, None);
    let clustered =
        orthographic_syllabify("\u{0915}\u{0938}\u{094D}\u{0924}", Language::Hi, None);
    assert_eq!(plain.len(), clustered.len() + 1);
}

#[test]
fn foreign_characters_get_the_invalid_vector() {
    for ch in ['q', ' ', '9', '\u{4E2D}'] {
        let v = feature_vector(ch, Language::Hi);
        assert!(!v.is_valid());
        assert!(v.as_slice().iter().all(|&b| b == 0));
    }
}

#[test]
fn equal_is_reflexive() {
    for ch in ['\u{0915}', '\u{0905}', '\u{093E}', '\u{0902}'] {
        let v = feature_vector(ch, Language::Hi);
        assert_eq!(equal(&v, &v), 1.0);
    }
}

#[test]
fn lcsr_of_a_word_with_itself_is_one() {
    for word in ["\u{0915}\u{092E}\u{0932}", "kamala"] {
        let (ratio, _, _) = lcsr(word, word, "hi", "hi");
        assert_eq!(ratio, 1.0);
    }
}

#[test]
fn normalized_similarity_rows_sum_to_one() {
    let m = similarity_matrix(similarity::softmax, Language::Hi, Language::Pa, true);
    for (i, row) in m.iter().enumerate() {
        let total: f64 = row.iter().sum();
        // softmax is positive everywhere, so every row normalizes
        assert!((total - 1.0).abs() < 1e-9, "row {:#x} sums to {}", i, total);
    }
}

#[test]
fn normalization_feeds_clean_text_downstream() {
    // a BOM and a precomposed qa both disappear before syllabification
    let raw = "\u{FEFF}\u{0958}\u{092E}";
    let clean = normalize(raw, Language::Hi, &NormalizeOptions::default());
    assert_eq!(clean, "\u{0915}\u{093C}\u{092E}");
    assert_eq!(orthographic_syllabify(&clean, Language::Hi, None).concat(), clean);
}

#[test]
fn tamil_target_collapses_aspirated_rows() {
    // gha has no Tamil counterpart and maps to the row representative ka
    assert_eq!(transliterate("\u{0918}", "hi", "ta"), "\u{0B95}");
}

#[test]
fn sinhala_round_trips_through_devanagari() {
    // ka + aa sign
    let si = "\u{0D9A}\u{0DCF}";
    let hi = transliterate(si, "si", "hi");
    assert_eq!(hi, "\u{0915}\u{093E}");
    assert_eq!(transliterate(&hi, "hi", "si"), si);
}
