//! Script coordinate registry for Brahmi-derived scripts.
//!
//! Every supported script occupies a 128-codepoint Unicode block laid out on
//! the same template, so a character is identified by its *offset* from the
//! script's base codepoint. Offsets in the coordinated range `0..=0x6F` mean
//! the same thing in every script, which is what lets transliteration,
//! syllabification, and similarity scoring operate script-independently.

use std::fmt;
use std::str::FromStr;

use crate::error::ScriptError;

/// First offset of the coordinated range (inclusive).
pub const COORDINATED_RANGE_START: i32 = 0;
/// Last offset of the coordinated range (inclusive).
pub const COORDINATED_RANGE_END: i32 = 0x6F;
/// Number of offsets in the coordinated range.
pub const COORDINATED_RANGE_LEN: usize = (COORDINATED_RANGE_END + 1) as usize;

pub const HALANTA_OFFSET: i32 = 0x4D;
pub const NUKTA_OFFSET: i32 = 0x3C;
pub const AUM_OFFSET: i32 = 0x50;
pub const DANDA_OFFSET: i32 = 0x64;
pub const DOUBLE_DANDA_OFFSET: i32 = 0x65;

pub const NUMERIC_OFFSET_START: i32 = 0x66;
pub const NUMERIC_OFFSET_END: i32 = 0x6F;

/// Sentence-final punctuation shared by all Indic scripts. Danda and double
/// danda keep the Devanagari codepoints regardless of script.
pub const DANDA: char = '\u{0964}';
pub const DOUBLE_DANDA: char = '\u{0965}';

const VELAR_RANGE: (i32, i32) = (0x15, 0x19);
const PALATAL_RANGE: (i32, i32) = (0x1A, 0x1E);
const RETROFLEX_RANGE: (i32, i32) = (0x1F, 0x23);
const DENTAL_RANGE: (i32, i32) = (0x24, 0x29);
const LABIAL_RANGE: (i32, i32) = (0x2A, 0x2E);

const VOICED_LIST: &[i32] = &[0x17, 0x18, 0x1C, 0x1D, 0x21, 0x22, 0x26, 0x27, 0x2C, 0x2D];
const UNVOICED_LIST: &[i32] = &[0x15, 0x16, 0x1A, 0x1B, 0x1F, 0x20, 0x24, 0x25, 0x2A, 0x2B];
const ASPIRATED_LIST: &[i32] = &[0x16, 0x18, 0x1B, 0x1D, 0x20, 0x22, 0x25, 0x27, 0x2B, 0x2D];
const UNASPIRATED_LIST: &[i32] = &[0x15, 0x17, 0x1A, 0x1C, 0x1F, 0x21, 0x24, 0x26, 0x2A, 0x2C];
const NASAL_LIST: &[i32] = &[0x19, 0x1E, 0x23, 0x28, 0x29, 0x2E];
const FRICATIVE_LIST: &[i32] = &[0x36, 0x37, 0x38];
const APPROXIMANT_LIST: &[i32] = &[0x2F, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35];

/// A supported language, identified by its ISO-639-derived code.
///
/// Several languages share a script (e.g. Hindi, Marathi, Sanskrit, Nepali
/// all use Devanagari); the language is the registry key, the script
/// supplies the base codepoint.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    /// Hindi
    Hi,
    /// Marathi
    Mr,
    /// Sanskrit
    Sa,
    /// Konkani
    Kok,
    /// Nepali
    Ne,
    /// Sindhi
    Sd,
    /// Bengali
    Bn,
    /// Assamese
    As,
    /// Punjabi
    Pa,
    /// Gujarati
    Gu,
    /// Oriya
    Or,
    /// Tamil
    Ta,
    /// Telugu
    Te,
    /// Kannada
    Kn,
    /// Malayalam
    Ml,
    /// Sinhala
    Si,
}

/// The Unicode block a language is written in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BrahmicScript {
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::Hi,
        Language::Mr,
        Language::Sa,
        Language::Kok,
        Language::Ne,
        Language::Sd,
        Language::Bn,
        Language::As,
        Language::Pa,
        Language::Gu,
        Language::Or,
        Language::Ta,
        Language::Te,
        Language::Kn,
        Language::Ml,
        Language::Si,
    ];

    /// Registry lookup. Fails with `ScriptError::UnsupportedLanguage` for a
    /// code with no descriptor.
    pub fn from_code(code: &str) -> Result<Language, ScriptError> {
        match code {
            "hi" => Ok(Language::Hi),
            "mr" => Ok(Language::Mr),
            "sa" => Ok(Language::Sa),
            "kK" => Ok(Language::Kok),
            "ne" => Ok(Language::Ne),
            "sd" => Ok(Language::Sd),
            "bn" => Ok(Language::Bn),
            "as" => Ok(Language::As),
            "pa" => Ok(Language::Pa),
            "gu" => Ok(Language::Gu),
            "or" => Ok(Language::Or),
            "ta" => Ok(Language::Ta),
            "te" => Ok(Language::Te),
            "kn" => Ok(Language::Kn),
            "ml" => Ok(Language::Ml),
            "si" => Ok(Language::Si),
            _ => Err(ScriptError::UnsupportedLanguage(code.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Sa => "sa",
            Language::Kok => "kK",
            Language::Ne => "ne",
            Language::Sd => "sd",
            Language::Bn => "bn",
            Language::As => "as",
            Language::Pa => "pa",
            Language::Gu => "gu",
            Language::Or => "or",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Kn => "kn",
            Language::Ml => "ml",
            Language::Si => "si",
        }
    }

    pub fn script(self) -> BrahmicScript {
        match self {
            Language::Hi => BrahmicScript::Devanagari,
            Language::Mr => BrahmicScript::Devanagari,
            Language::Sa => BrahmicScript::Devanagari,
            Language::Kok => BrahmicScript::Devanagari,
            Language::Ne => BrahmicScript::Devanagari,
            Language::Sd => BrahmicScript::Devanagari,
            Language::Bn => BrahmicScript::Bengali,
            Language::As => BrahmicScript::Bengali,
            Language::Pa => BrahmicScript::Gurmukhi,
            Language::Gu => BrahmicScript::Gujarati,
            Language::Or => BrahmicScript::Oriya,
            Language::Ta => BrahmicScript::Tamil,
            Language::Te => BrahmicScript::Telugu,
            Language::Kn => BrahmicScript::Kannada,
            Language::Ml => BrahmicScript::Malayalam,
            Language::Si => BrahmicScript::Sinhala,
        }
    }

    /// Dravidian languages use the Tamil-family phonology; everything else
    /// in the registry is Indo-European.
    pub fn is_dravidian(self) -> bool {
        matches!(
            self,
            Language::Ta | Language::Te | Language::Kn | Language::Ml
        )
    }

    /// Returns `true` if danda/double danda can delimit sentences in this
    /// language.
    pub fn is_danda_delimited(self) -> bool {
        matches!(
            self,
            Language::As
                | Language::Bn
                | Language::Hi
                | Language::Ne
                | Language::Or
                | Language::Pa
                | Language::Sa
                | Language::Sd
        )
    }
}

impl FromStr for Language {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl BrahmicScript {
    /// Base codepoint of the script's Unicode block. Bases never overlap in
    /// their 128-codepoint ranges.
    pub fn base(self) -> u32 {
        match self {
            BrahmicScript::Devanagari => 0x0900,
            BrahmicScript::Bengali => 0x0980,
            BrahmicScript::Gurmukhi => 0x0A00,
            BrahmicScript::Gujarati => 0x0A80,
            BrahmicScript::Oriya => 0x0B00,
            BrahmicScript::Tamil => 0x0B80,
            BrahmicScript::Telugu => 0x0C00,
            BrahmicScript::Kannada => 0x0C80,
            BrahmicScript::Malayalam => 0x0D00,
            BrahmicScript::Sinhala => 0x0D80,
        }
    }
}

/// Offset of `ch` from the base codepoint of `lang`'s script. Negative or
/// past the block end for characters foreign to the script.
pub fn offset_of(ch: char, lang: Language) -> i32 {
    ch as i32 - lang.script().base() as i32
}

/// Inverse of `offset_of`. All registered bases sit well below the surrogate
/// range, so the conversion cannot fail for offsets within a script block;
/// out-of-block offsets fall back to U+FFFD.
pub fn char_of(offset: i32, lang: Language) -> char {
    let cp = lang.script().base() as i32 + offset;
    u32::try_from(cp)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('\u{FFFD}')
}

/// Is the offset within the coordinated range shared by all scripts?
pub fn in_coordinated_range(offset: i32) -> bool {
    (COORDINATED_RANGE_START..=COORDINATED_RANGE_END).contains(&offset)
}

/// Is `ch` part of `lang`'s script block, or one of the shared
/// danda/double-danda punctuation codepoints?
pub fn is_script_char(ch: char, lang: Language) -> bool {
    let o = offset_of(ch, lang);
    (0..=0x7F).contains(&o) || ch == DANDA || ch == DOUBLE_DANDA
}

pub fn is_vowel_offset(offset: i32) -> bool {
    (0x04..=0x14).contains(&offset)
}

pub fn is_vowel_sign_offset(offset: i32) -> bool {
    (0x3E..=0x4C).contains(&offset)
}

pub fn is_halanta_offset(offset: i32) -> bool {
    offset == HALANTA_OFFSET
}

pub fn is_nukta_offset(offset: i32) -> bool {
    offset == NUKTA_OFFSET
}

pub fn is_aum_offset(offset: i32) -> bool {
    offset == AUM_OFFSET
}

pub fn is_consonant_offset(offset: i32) -> bool {
    (0x15..=0x39).contains(&offset)
}

pub fn is_velar_offset(offset: i32) -> bool {
    (VELAR_RANGE.0..=VELAR_RANGE.1).contains(&offset)
}

pub fn is_palatal_offset(offset: i32) -> bool {
    (PALATAL_RANGE.0..=PALATAL_RANGE.1).contains(&offset)
}

pub fn is_retroflex_offset(offset: i32) -> bool {
    (RETROFLEX_RANGE.0..=RETROFLEX_RANGE.1).contains(&offset)
}

pub fn is_dental_offset(offset: i32) -> bool {
    (DENTAL_RANGE.0..=DENTAL_RANGE.1).contains(&offset)
}

pub fn is_labial_offset(offset: i32) -> bool {
    (LABIAL_RANGE.0..=LABIAL_RANGE.1).contains(&offset)
}

pub fn is_voiced_offset(offset: i32) -> bool {
    VOICED_LIST.contains(&offset)
}

pub fn is_unvoiced_offset(offset: i32) -> bool {
    UNVOICED_LIST.contains(&offset)
}

pub fn is_aspirated_offset(offset: i32) -> bool {
    ASPIRATED_LIST.contains(&offset)
}

pub fn is_unaspirated_offset(offset: i32) -> bool {
    UNASPIRATED_LIST.contains(&offset)
}

pub fn is_nasal_offset(offset: i32) -> bool {
    NASAL_LIST.contains(&offset)
}

pub fn is_fricative_offset(offset: i32) -> bool {
    FRICATIVE_LIST.contains(&offset)
}

pub fn is_approximant_offset(offset: i32) -> bool {
    APPROXIMANT_LIST.contains(&offset)
}

pub fn is_number_offset(offset: i32) -> bool {
    (NUMERIC_OFFSET_START..=NUMERIC_OFFSET_END).contains(&offset)
}

pub fn is_vowel(ch: char, lang: Language) -> bool {
    is_vowel_offset(offset_of(ch, lang))
}

pub fn is_vowel_sign(ch: char, lang: Language) -> bool {
    is_vowel_sign_offset(offset_of(ch, lang))
}

pub fn is_halanta(ch: char, lang: Language) -> bool {
    is_halanta_offset(offset_of(ch, lang))
}

pub fn is_nukta(ch: char, lang: Language) -> bool {
    is_nukta_offset(offset_of(ch, lang))
}

pub fn is_aum(ch: char, lang: Language) -> bool {
    is_aum_offset(offset_of(ch, lang))
}

pub fn is_consonant(ch: char, lang: Language) -> bool {
    is_consonant_offset(offset_of(ch, lang))
}

pub fn is_number(ch: char, lang: Language) -> bool {
    is_number_offset(offset_of(ch, lang))
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    mod registry {
        use super::*;

        #[test]
        fn test_from_code() {
            assert_eq!(Language::from_code("hi"), Ok(Language::Hi));
            assert_eq!(Language::from_code("ta"), Ok(Language::Ta));
            assert_eq!(
                Language::from_code("en"),
                Err(ScriptError::UnsupportedLanguage("en".to_string()))
            );
        }

        #[test]
        fn test_code_round_trip() {
            for &lang in Language::ALL {
                assert_eq!(Language::from_code(lang.code()), Ok(lang));
            }
        }

        #[test]
        fn test_bases_do_not_overlap() {
            let mut bases: Vec<u32> = Language::ALL.iter().map(|l| l.script().base()).collect();
            bases.sort_unstable();
            bases.dedup();
            for pair in bases.windows(2) {
                assert!(pair[1] - pair[0] >= 0x80);
            }
        }
    }

    mod offsets {
        use super::*;

        #[test]
        fn test_offset_of_devanagari_ka() {
            assert_eq!(offset_of('\u{0915}', Language::Hi), 0x15);
        }

        #[test]
        fn test_offset_of_foreign_char() {
            assert_eq!(offset_of('a', Language::Hi), 0x61 - 0x0900);
        }

        #[test]
        fn test_char_of_round_trip() {
            for offset in 0..=0x7F {
                let ch = char_of(offset, Language::Ta);
                assert_eq!(offset_of(ch, Language::Ta), offset);
            }
        }

        #[test]
        fn test_coordinated_range() {
            assert!(in_coordinated_range(0));
            assert!(in_coordinated_range(0x6F));
            assert!(!in_coordinated_range(0x70));
            assert!(!in_coordinated_range(-1));
        }

        #[test]
        fn test_is_script_char_danda() {
            // Danda is shared across scripts regardless of base
            assert!(is_script_char(DANDA, Language::Bn));
            assert!(is_script_char(DOUBLE_DANDA, Language::Ta));
            assert!(!is_script_char('a', Language::Hi));
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn test_consonant_rows() {
            assert!(is_velar_offset(0x15)); // ka
            assert!(is_palatal_offset(0x1A)); // ca
            assert!(is_retroflex_offset(0x1F)); // tta
            assert!(is_dental_offset(0x24)); // ta
            assert!(is_labial_offset(0x2A)); // pa
        }

        #[test]
        fn test_voicing_aspiration() {
            assert!(is_voiced_offset(0x17)); // ga
            assert!(is_unvoiced_offset(0x15)); // ka
            assert!(is_aspirated_offset(0x16)); // kha
            assert!(is_unaspirated_offset(0x15)); // ka
        }

        #[test]
        fn test_vowel_and_sign() {
            assert!(is_vowel('\u{0905}', Language::Hi)); // a
            assert!(is_vowel_sign('\u{093E}', Language::Hi)); // sign aa
            assert!(is_halanta('\u{094D}', Language::Hi));
            assert!(is_number('\u{0966}', Language::Hi)); // digit zero
        }
    }
}
