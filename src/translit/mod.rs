//! Transliteration between Brahmi-derived scripts.
//!
//! Because the supported scripts share one codepoint template, rewriting a
//! string from one script to another is offset arithmetic: subtract the
//! source base, add the target base. The exceptions live here too: Tamil's
//! reduced consonant inventory collapses whole template rows, and Sinhala's
//! divergent block layout is bridged through Devanagari.

pub mod itrans;
pub mod sinhala;

use crate::script::{
    self, Language, DANDA, DOUBLE_DANDA,
};

/// Transliterate `text` from `src` to `tgt` script, given raw language
/// codes. If either code has no registry descriptor the input is returned
/// unchanged, so mixed-script text can be passed through a pipeline without
/// validation up front.
pub fn transliterate(text: &str, src: &str, tgt: &str) -> String {
    match (Language::from_code(src), Language::from_code(tgt)) {
        (Ok(src), Ok(tgt)) => transliterate_between(text, src, tgt),
        _ => text.to_string(),
    }
}

/// Transliterate between two registered languages.
pub fn transliterate_between(text: &str, src: Language, tgt: Language) -> String {
    // Sinhala's block does not follow the shared template, so it enters and
    // leaves through Devanagari as an intermediate hop.
    let (text, src) = if src == Language::Si {
        (sinhala::to_devanagari(text), Language::Hi)
    } else {
        (text.to_string(), src)
    };
    let (tgt, si_target) = if tgt == Language::Si {
        (Language::Hi, true)
    } else {
        (tgt, false)
    };

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let offset = script::offset_of(ch, src);
        if script::in_coordinated_range(offset) && ch != DANDA && ch != DOUBLE_DANDA {
            let offset = if tgt == Language::Ta {
                correct_tamil_mapping(offset)
            } else {
                offset
            };
            out.push(script::char_of(offset, tgt));
        } else {
            out.push(ch);
        }
    }

    if si_target {
        sinhala::from_devanagari(&out)
    } else {
        out
    }
}

/// Remap offsets whose characters are missing from the Tamil block.
///
/// Tamil has no unaspirated/voiced plosive distinctions: the first four
/// consonant rows collapse onto their unvoiced unaspirated representative
/// (column 0), keeping `ja` (which Tamil has) and the nasal column. The
/// fifth row collapses onto `pa`, and `sh` substitutes to `Sh`. Lossy and
/// intentional.
fn correct_tamil_mapping(offset: i32) -> i32 {
    let mut offset = offset;

    // first 4 consonant rows of the varnamala; ja (0x1C) is the exception
    if (0x15..=0x28).contains(&offset)
        && offset != 0x1C
        && !((offset - 0x15) % 5 == 0 || (offset - 0x15) % 5 == 4)
    {
        let row = (offset - 0x15) / 5;
        offset = 0x15 + 5 * row;
    }

    // 5th consonant row
    if (0x2B..=0x2D).contains(&offset) {
        offset = 0x2A;
    }

    // 'sh' becomes 'Sh'
    if offset == 0x36 {
        offset = 0x37;
    }

    offset
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    mod offset_mapping {
        use super::*;

        #[test]
        fn test_devanagari_to_bengali() {
            // ka: same offset, different base
            assert_eq!(transliterate("\u{0915}", "hi", "bn"), "\u{0995}");
        }

        #[test]
        fn test_digit_zero_to_tamil() {
            // offset 0x66 under 0x0900 maps to the Tamil digit at 0x0BE6
            assert_eq!(transliterate("\u{0966}", "hi", "ta"), "\u{0BE6}");
        }

        #[test]
        fn test_danda_passes_through() {
            assert_eq!(transliterate("\u{0964}", "hi", "ta"), "\u{0964}");
        }

        #[test]
        fn test_foreign_chars_pass_through() {
            assert_eq!(transliterate("abc ", "hi", "ta"), "abc ");
        }

        #[test]
        fn test_unsupported_language_is_noop() {
            assert_eq!(transliterate("\u{0915}", "hi", "en"), "\u{0915}");
            assert_eq!(transliterate("\u{0915}", "xx", "ta"), "\u{0915}");
        }

        #[test]
        fn test_round_trip_compatible_pair() {
            let word = "\u{0915}\u{093E}\u{0930}\u{094D}"; // kaar + halant
            let there = transliterate(word, "hi", "kn");
            let back = transliterate(&there, "kn", "hi");
            assert_eq!(back, word);
        }
    }

    mod tamil_correction {
        use super::*;

        #[test]
        fn test_row_collapse() {
            assert_eq!(correct_tamil_mapping(0x17), 0x15); // ga -> ka
            assert_eq!(correct_tamil_mapping(0x16), 0x15); // kha -> ka
            assert_eq!(correct_tamil_mapping(0x21), 0x1F); // dda -> tta
        }

        #[test]
        fn test_ja_exception() {
            assert_eq!(correct_tamil_mapping(0x1C), 0x1C);
        }

        #[test]
        fn test_nasal_column_preserved() {
            assert_eq!(correct_tamil_mapping(0x19), 0x19); // nga
            assert_eq!(correct_tamil_mapping(0x28), 0x28); // na
        }

        #[test]
        fn test_fifth_row_collapse() {
            assert_eq!(correct_tamil_mapping(0x2B), 0x2A); // pha -> pa
            assert_eq!(correct_tamil_mapping(0x2C), 0x2A); // ba -> pa
            assert_eq!(correct_tamil_mapping(0x2D), 0x2A); // bha -> pa
            assert_eq!(correct_tamil_mapping(0x2E), 0x2E); // ma stays
        }

        #[test]
        fn test_sh_substitution() {
            assert_eq!(correct_tamil_mapping(0x36), 0x37);
        }

        #[test]
        fn test_ga_to_tamil_char() {
            // Devanagari ga becomes Tamil ka
            assert_eq!(transliterate("\u{0917}", "hi", "ta"), "\u{0B95}");
        }
    }

    mod sinhala_hop {
        use super::*;

        #[test]
        fn test_sinhala_to_hindi() {
            // ka + sign aa
            assert_eq!(
                transliterate("\u{0D9A}\u{0DCF}", "si", "hi"),
                "\u{0915}\u{093E}"
            );
        }

        #[test]
        fn test_hindi_to_sinhala() {
            assert_eq!(
                transliterate("\u{0915}\u{093E}", "hi", "si"),
                "\u{0D9A}\u{0DCF}"
            );
        }

        #[test]
        fn test_sinhala_to_tamil_two_hop() {
            // Sinhala ga -> (Devanagari ga) -> Tamil ka
            assert_eq!(transliterate("\u{0D9C}", "si", "ta"), "\u{0B95}");
        }
    }
}
