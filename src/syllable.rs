//! Orthographic syllabification.
//!
//! Words are broken into orthographic syllables, the unit a reader would
//! spell out: a consonant cluster with its vowel and any attached nasal
//! sign. Boundaries are decided from the phonetic feature vectors of
//! adjacent characters, so the same rules serve every supported script.
//!
//! Malayalam chillus and Gurmukhi tippi/addak are pre-expanded into the
//! consonant-plus-virama spellings the rules expect and recomposed
//! afterwards, tracked through a per-character mask so the expansion is
//! lossless.

use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashSet;

use crate::phonetic::{feature_vector, PhoneticVector};
use crate::script::Language;

/// Malayalam chillu letters and the base consonants they contract.
const CHILLU_MAP: &[(char, char)] = &[
    ('\u{0D7A}', '\u{0D23}'), // Chillu Nn
    ('\u{0D7B}', '\u{0D28}'), // Chillu N
    ('\u{0D7C}', '\u{0D30}'), // Chillu Rr
    ('\u{0D7D}', '\u{0D32}'), // Chillu L
    ('\u{0D7E}', '\u{0D33}'), // Chillu Ll
    ('\u{0D7F}', '\u{0D15}'), // Chillu K
];

const MALAYALAM_VIRAMA: char = '\u{0D4D}';

const TIPPI: char = '\u{0A70}';
const ADDAK: char = '\u{0A71}';
const GURMUKHI_BINDI: char = '\u{0A02}';
const GURMUKHI_VIRAMA: char = '\u{0A4D}';

pub(crate) fn chillu_to_consonant(ch: char) -> Option<char> {
    CHILLU_MAP
        .iter()
        .find(|&&(chillu, _)| chillu == ch)
        .map(|&(_, cons)| cons)
}

fn consonant_to_chillu(ch: char) -> Option<char> {
    CHILLU_MAP
        .iter()
        .find(|&&(_, cons)| cons == ch)
        .map(|&(chillu, _)| chillu)
}

/// Tracks where a character in the working buffer came from, so expanded
/// clusters can be recomposed after boundaries are inserted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Mask {
    /// Character taken from the input as-is.
    Plain,
    /// Trailing character of an expanded cluster.
    Tail,
    /// Bindi substituted for a tippi.
    Tippi,
    /// First consonant of an expanded addak gemination.
    Addak,
    /// Consonant substituted for a chillu; a virama tail follows.
    Chillu,
}

/// Expand chillus into consonant plus virama.
fn normalize_malayalam(word: &str) -> Vec<(char, Mask)> {
    let mut out = Vec::with_capacity(word.len());
    for ch in word.chars() {
        match chillu_to_consonant(ch) {
            Some(cons) => {
                out.push((cons, Mask::Chillu));
                out.push((MALAYALAM_VIRAMA, Mask::Tail));
            }
            None => out.push((ch, Mask::Plain)),
        }
    }
    out
}

/// Replace tippi with bindi and expand addak gemination into an explicit
/// consonant-virama-consonant cluster.
fn normalize_punjabi(word: &str) -> Vec<(char, Mask)> {
    let mut out = Vec::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == TIPPI {
            out.push((GURMUKHI_BINDI, Mask::Tippi));
        } else if ch == ADDAK {
            match chars.next() {
                Some(cons) => {
                    out.push((cons, Mask::Addak));
                    out.push((GURMUKHI_VIRAMA, Mask::Tail));
                    out.push((cons, Mask::Tail));
                }
                None => out.push((ch, Mask::Plain)),
            }
        } else {
            out.push((ch, Mask::Plain));
        }
    }
    out
}

/// Undo the expansions recorded in the mask.
fn recompose(marked: &[(char, Mask)]) -> String {
    let mut out = String::with_capacity(marked.len() * 3);
    let mut i = 0;
    while i < marked.len() {
        let (ch, mask) = marked[i];
        match mask {
            Mask::Tippi => {
                out.push(TIPPI);
                i += 1;
            }
            Mask::Addak if i + 2 < marked.len() => {
                out.push(ADDAK);
                out.push(ch);
                i += 3;
            }
            Mask::Chillu if i + 1 < marked.len() => {
                out.push(consonant_to_chillu(ch).unwrap_or(ch));
                i += 2;
            }
            _ => {
                out.push(ch);
                i += 1;
            }
        }
    }
    out
}

/// Should a syllable boundary follow character `i`?
///
/// An anusvaar attaches to the following syllable when that syllable
/// starts with a plosive (it stands for the homorganic nasal); otherwise
/// it nasalizes the current one and stays.
fn wants_boundary(pv: &[PhoneticVector], i: usize) -> bool {
    let v = pv[i];
    let n = pv.len();

    if i + 1 < n && (!pv[i + 1].is_valid() || pv[i + 1].is_misc()) {
        true
    } else if !v.is_valid() || v.is_misc() {
        true
    } else if v.is_vowel() {
        let anu_nonplosive =
            i + 2 < n && pv[i + 1].is_anusvaar() && !pv[i + 2].is_plosive();
        let anu_word_final = i + 2 == n && pv[i + 1].is_anusvaar();
        !(anu_nonplosive || anu_word_final)
    } else if i + 1 < n && (v.is_consonant() || v.is_nukta()) {
        if pv[i + 1].is_consonant() {
            true
        } else if pv[i + 1].is_vowel() && !pv[i + 1].is_dependent_vowel() {
            true
        } else if pv[i + 1].is_anusvaar() {
            let anu_nonplosive = i + 2 < n && !pv[i + 2].is_plosive();
            let anu_word_final = i + 2 == n;
            !(anu_nonplosive || anu_word_final)
        } else {
            false
        }
    } else {
        false
    }
}

/// Simplified rule set: break after every vowel and between any two
/// consonants, with no anusvaar lookahead.
fn wants_boundary_simple(pv: &[PhoneticVector], i: usize) -> bool {
    let v = pv[i];
    let n = pv.len();

    if i + 1 < n && (!pv[i + 1].is_valid() || pv[i + 1].is_misc()) {
        true
    } else if !v.is_valid() || v.is_misc() || v.is_vowel() {
        true
    } else {
        i + 1 < n
            && (v.is_consonant() || v.is_nukta())
            && (pv[i + 1].is_consonant() || pv[i + 1].is_anusvaar())
    }
}

/// Replace syllables missing from `vocab` with their individual
/// characters. No vocabulary means no backoff.
fn char_backoff(
    syllables: Vec<String>,
    vocab: Option<&FxHashSet<String>>,
) -> Vec<String> {
    let Some(vocab) = vocab else { return syllables };
    let mut out = Vec::with_capacity(syllables.len());
    for s in syllables {
        if vocab.contains(&s) {
            out.push(s);
        } else {
            out.extend(s.chars().map(String::from));
        }
    }
    out
}

fn split_syllables(joined: &str) -> Vec<String> {
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(' ').map(str::to_string).collect()
}

fn syllabify_marked(
    marked: Vec<(char, Mask)>,
    lang: Language,
    boundary: fn(&[PhoneticVector], usize) -> bool,
) -> String {
    let pv: Vec<PhoneticVector> = marked
        .iter()
        .map(|&(ch, _)| feature_vector(ch, lang))
        .collect();

    let mut with_breaks: Vec<(char, Mask)> = Vec::with_capacity(marked.len() * 2);
    for (i, &item) in marked.iter().enumerate() {
        with_breaks.push(item);
        if boundary(&pv, i) {
            with_breaks.push((' ', Mask::Plain));
        }
    }

    if with_breaks
        .iter()
        .tuple_windows()
        .any(|(a, b)| a.0 == ' ' && b.1 == Mask::Tail)
    {
        debug!("syllable boundary split an expanded {} cluster", lang.code());
    }

    recompose(&with_breaks)
}

/// Break `word` into orthographic syllables.
///
/// Syllables absent from `vocab` (when one is supplied) back off to
/// single characters.
pub fn orthographic_syllabify(
    word: &str,
    lang: Language,
    vocab: Option<&FxHashSet<String>>,
) -> Vec<String> {
    let marked: Vec<(char, Mask)> =
        word.chars().map(|ch| (ch, Mask::Plain)).collect();
    let joined = syllabify_marked(marked, lang, wants_boundary);
    char_backoff(split_syllables(&joined), vocab)
}

/// Like [`orthographic_syllabify`], but Malayalam chillus and Gurmukhi
/// tippi/addak are expanded before the rules run and losslessly
/// recomposed afterwards, so concatenating the syllables reproduces the
/// exact input spelling.
pub fn orthographic_syllabify_improved(
    word: &str,
    lang: Language,
    vocab: Option<&FxHashSet<String>>,
) -> Vec<String> {
    let marked = match lang {
        Language::Ml => normalize_malayalam(word),
        Language::Pa => normalize_punjabi(word),
        _ => word.chars().map(|ch| (ch, Mask::Plain)).collect(),
    };
    let joined = syllabify_marked(marked, lang, wants_boundary);
    char_backoff(split_syllables(&joined), vocab)
}

/// Break `word` with the simplified rule set.
pub fn orthographic_simple_syllabify(
    word: &str,
    lang: Language,
    vocab: Option<&FxHashSet<String>>,
) -> Vec<String> {
    let marked: Vec<(char, Mask)> =
        word.chars().map(|ch| (ch, Mask::Plain)).collect();
    let joined = syllabify_marked(marked, lang, wants_boundary_simple);
    char_backoff(split_syllables(&joined), vocab)
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn syllables(word: &str, lang: Language) -> Vec<String> {
        orthographic_syllabify(word, lang, None)
    }

    mod boundaries {
        use super::*;

        #[test]
        fn test_consonant_clusters_stay_together() {
            // namaste
            assert_eq!(
                syllables("\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}", Language::Hi),
                vec!["\u{0928}", "\u{092E}", "\u{0938}\u{094D}\u{0924}\u{0947}"]
            );
        }

        #[test]
        fn test_anusvaar_joins_following_plosive() {
            // santa: anusvaar stands for the homorganic nasal of "ta"
            assert_eq!(
                syllables("\u{0938}\u{0902}\u{0924}", Language::Hi),
                vec!["\u{0938}", "\u{0902}\u{0924}"]
            );
        }

        #[test]
        fn test_anusvaar_stays_before_non_plosive() {
            // ansha: anusvaar nasalizes the vowel before the fricative
            assert_eq!(
                syllables("\u{0905}\u{0902}\u{0936}", Language::Hi),
                vec!["\u{0905}\u{0902}\u{0936}"]
            );
        }

        #[test]
        fn test_word_final_anusvaar_stays() {
            // mein
            assert_eq!(
                syllables("\u{092E}\u{0947}\u{0902}", Language::Hi),
                vec!["\u{092E}\u{0947}\u{0902}"]
            );
        }

        #[test]
        fn test_danda_splits_off() {
            assert_eq!(
                syllables("\u{0915}\u{0964}\u{0916}", Language::Hi),
                vec!["\u{0915}", "\u{0964}", "\u{0916}"]
            );
        }

        #[test]
        fn test_independent_vowel_starts_new_syllable() {
            // ka-i
            assert_eq!(
                syllables("\u{0915}\u{0907}", Language::Hi),
                vec!["\u{0915}", "\u{0907}"]
            );
        }

        #[test]
        fn test_concatenation_reconstructs_word() {
            for word in [
                "\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}",
                "\u{0938}\u{0902}\u{0924}",
                "\u{092D}\u{093E}\u{0930}\u{0924}",
            ] {
                assert_eq!(syllables(word, Language::Hi).concat(), word);
            }
        }

        #[test]
        fn test_empty_word() {
            assert!(syllables("", Language::Hi).is_empty());
        }
    }

    mod simple {
        use super::*;

        #[test]
        fn test_breaks_after_every_vowel() {
            assert_eq!(
                orthographic_simple_syllabify("\u{0905}\u{0902}\u{0936}", Language::Hi, None),
                vec!["\u{0905}", "\u{0902}\u{0936}"]
            );
        }
    }

    mod improved {
        use super::*;

        #[test]
        fn test_malayalam_chillu_recomposed() {
            // avan, ending in chillu n
            let word = "\u{0D05}\u{0D35}\u{0D7B}";
            let syll = orthographic_syllabify_improved(word, Language::Ml, None);
            assert_eq!(syll, vec!["\u{0D05}", "\u{0D35}", "\u{0D7B}"]);
            assert_eq!(syll.concat(), word);
        }

        #[test]
        fn test_punjabi_addak_recomposed() {
            // kutta, with addak gemination
            let word = "\u{0A15}\u{0A41}\u{0A71}\u{0A24}\u{0A3E}";
            let syll = orthographic_syllabify_improved(word, Language::Pa, None);
            assert_eq!(syll, vec!["\u{0A15}\u{0A41}", "\u{0A71}\u{0A24}\u{0A3E}"]);
            assert_eq!(syll.concat(), word);
        }

        #[test]
        fn test_punjabi_tippi_recomposed() {
            let word = "\u{0A2E}\u{0A70}\u{0A17}";
            let syll = orthographic_syllabify_improved(word, Language::Pa, None);
            assert_eq!(syll, vec!["\u{0A2E}", "\u{0A70}\u{0A17}"]);
            assert_eq!(syll.concat(), word);
        }

        #[test]
        fn test_non_special_language_matches_plain() {
            let word = "\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}";
            assert_eq!(
                orthographic_syllabify_improved(word, Language::Hi, None),
                orthographic_syllabify(word, Language::Hi, None)
            );
        }
    }

    mod backoff {
        use super::*;

        #[test]
        fn test_unknown_syllables_back_off_to_chars() {
            let mut vocab = FxHashSet::default();
            vocab.insert("\u{0928}".to_string());
            vocab.insert("\u{092E}".to_string());
            let syll = orthographic_syllabify(
                "\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}",
                Language::Hi,
                Some(&vocab),
            );
            assert_eq!(
                syll,
                vec!["\u{0928}", "\u{092E}", "\u{0938}", "\u{094D}", "\u{0924}", "\u{0947}"]
            );
        }

        #[test]
        fn test_no_vocab_is_no_backoff() {
            let word = "\u{0938}\u{0902}\u{0924}";
            assert_eq!(
                orthographic_syllabify(word, Language::Hi, None),
                syllables(word, Language::Hi)
            );
        }
    }
}
