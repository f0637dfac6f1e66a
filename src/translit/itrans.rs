//! ITRANS romanization.
//!
//! ITRANS is an ASCII transliteration scheme for Indic scripts. The mapping
//! is keyed on template offsets, so one table serves every supported script:
//! romanize by offset lookup, indicize by longest-match parsing against the
//! reverse map.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::script::{self, Language, HALANTA_OFFSET};
use crate::syllable::chillu_to_consonant;

/// Longest ITRANS code considered during reverse matching.
const MAXCODE: usize = 4;

/// Offset used as a schwa placeholder while parsing ITRANS input. It marks
/// "the inherent vowel of the preceding consonant": the preceding halant is
/// deleted in post-processing and the placeholder itself is stripped.
const SCHWA_PLACEHOLDER_OFFSET: i32 = 0x7F;

/// ITRANS representation of a template offset. Offsets without a stable
/// ITRANS form are absent; callers pass the raw character through.
#[rustfmt::skip]
fn itrans_of(offset: i32) -> Option<&'static str> {
    match offset {
        0x01 => Some(".N"),   // Candrabindu
        0x02 => Some(".m"),   // Anusvara
        0x03 => Some("H"),    // Visarga
        0x05 => Some("a"),    // A
        0x06 => Some("aa"),   // Aa
        0x07 => Some("i"),    // I
        0x08 => Some("ii"),   // Ii
        0x09 => Some("u"),    // U
        0x0A => Some("uu"),   // Uu
        0x0B => Some("R^i"),  // Vocalic R
        0x0C => Some("L^i"),  // Vocalic L
        0x0F => Some("e"),    // E
        0x10 => Some("ai"),   // Ai
        0x13 => Some("o"),    // O
        0x14 => Some("au"),   // Au
        0x15 => Some("ka"),   // Ka
        0x16 => Some("kha"),  // Kha
        0x17 => Some("ga"),   // Ga
        0x18 => Some("gha"),  // Gha
        0x19 => Some("~Na"),  // Nga
        0x1A => Some("cha"),  // Ca
        0x1B => Some("Cha"),  // Cha
        0x1C => Some("ja"),   // Ja
        0x1D => Some("jha"),  // Jha
        0x1E => Some("~na"),  // Nya
        0x1F => Some("Ta"),   // Tta
        0x20 => Some("Tha"),  // Ttha
        0x21 => Some("Da"),   // Dda
        0x22 => Some("Dha"),  // Ddha
        0x23 => Some("Na"),   // Nna
        0x24 => Some("ta"),   // Ta
        0x25 => Some("tha"),  // Tha
        0x26 => Some("da"),   // Da
        0x27 => Some("dha"),  // Dha
        0x28 => Some("na"),   // Na
        0x2A => Some("pa"),   // Pa
        0x2B => Some("pha"),  // Pha
        0x2C => Some("ba"),   // Ba
        0x2D => Some("bha"),  // Bha
        0x2E => Some("ma"),   // Ma
        0x2F => Some("ya"),   // Ya
        0x30 => Some("ra"),   // Ra
        0x32 => Some("la"),   // La
        0x33 => Some("La"),   // Lla
        0x35 => Some("va"),   // Va
        0x36 => Some("sha"),  // Sha
        0x37 => Some("Sha"),  // Ssa
        0x38 => Some("sa"),   // Sa
        0x39 => Some("ha"),   // Ha
        0x3E => Some("aa"),   // Sign Aa
        0x3F => Some("i"),    // Sign I
        0x40 => Some("ii"),   // Sign Ii
        0x41 => Some("u"),    // Sign U
        0x42 => Some("uu"),   // Sign Uu
        0x43 => Some("R^i"),  // Sign Vocalic R
        0x44 => Some("R^I"),  // Sign Vocalic Rr
        0x47 => Some("e"),    // Sign E
        0x48 => Some("ai"),   // Sign Ai
        0x4B => Some("o"),    // Sign O
        0x4C => Some("au"),   // Sign Au
        0x50 => Some("AUM"),  // Om
        0x58 => Some("qa"),   // Qa
        0x59 => Some("Kha"),  // Khha
        0x5A => Some("Ga"),   // Ghha
        0x5B => Some("za"),   // Za
        0x5C => Some(".Da"),  // Dddha
        0x5D => Some(".Dha"), // Rha
        0x5E => Some("fa"),   // Fa
        0x60 => Some("R^I"),  // Vocalic Rr
        0x61 => Some("L^I"),  // Vocalic Ll
        0x62 => Some("L^i"),  // Sign Vocalic L
        0x63 => Some("L^I"),  // Sign Vocalic Ll
        0x66 => Some("0"),
        0x67 => Some("1"),
        0x68 => Some("2"),
        0x69 => Some("3"),
        0x6A => Some("4"),
        0x6B => Some("5"),
        0x6C => Some("6"),
        0x6D => Some("7"),
        0x6E => Some("8"),
        0x6F => Some("9"),
        _ => None,
    }
}

fn is_consonant_like(offset: i32) -> bool {
    script::is_consonant_offset(offset) || (0x58..=0x5F).contains(&offset)
}

fn is_independent_vowel(offset: i32) -> bool {
    script::is_vowel_offset(offset) || offset == 0x60 || offset == 0x61
}

lazy_static! {
    /// Reverse map from ITRANS code to offsets. Consonant entries strip the
    /// inherent vowel and gain a halant; shared vowel codes list the
    /// independent form before the dependent sign; the inherent-vowel entry
    /// `"a"` additionally carries the schwa placeholder.
    static ref ITRANS_TO_OFFSET: FxHashMap<&'static str, Vec<i32>> = {
        let mut map: FxHashMap<&'static str, Vec<i32>> = FxHashMap::default();
        for offset in 0..=script::COORDINATED_RANGE_END {
            let Some(itrans) = itrans_of(offset) else { continue };
            if is_consonant_like(offset) {
                let stem = &itrans[..itrans.len() - 1];
                map.entry(stem)
                    .or_default()
                    .extend([offset, HALANTA_OFFSET]);
            } else if is_independent_vowel(offset) {
                map.entry(itrans).or_default().insert(0, offset);
            } else {
                map.entry(itrans).or_default().push(offset);
            }
        }
        map.entry("a").or_default().push(SCHWA_PLACEHOLDER_OFFSET);
        map
    };
}

/// Alternate spellings rewritten to their canonical ITRANS code before
/// parsing. Order matters: multi-letter keys run before their prefixes.
const DUPLICATE_REPRESENTATIONS: &[(&str, &str)] = &[
    ("A", "aa"),
    ("I", "ii"),
    ("U", "uu"),
    ("RRi", "R^i"),
    ("RRI", "R^I"),
    ("LLi", "L^i"),
    ("LLI", "L^I"),
    ("L", "ld"),
    ("w", "v"),
    ("x", "kSh"),
    ("gj", "j~n"),
    ("dny", "j~n"),
    (".n", ".m"),
    ("M", ".m"),
    ("OM", "AUM"),
];

/// Romanize `text` to ITRANS. A halant drops the inherent vowel of the
/// preceding consonant; a vowel sign replaces it. Characters without a
/// table entry pass through unchanged.
pub fn to_itrans(text: &str, lang: Language) -> String {
    // chillus carry an implicit virama; expand them before offset lookup
    let expanded: String = if lang == Language::Ml {
        text.chars()
            .flat_map(|ch| match chillu_to_consonant(ch) {
                Some(cons) => vec![cons, '\u{0D4D}'],
                None => vec![ch],
            })
            .collect()
    } else {
        text.to_string()
    };

    let mut out: Vec<char> = Vec::new();
    for ch in expanded.chars() {
        let offset = script::offset_of(ch, lang);
        if script::is_halanta_offset(offset) {
            out.pop();
        } else {
            if script::is_vowel_sign_offset(offset) && !out.is_empty() {
                out.pop();
            }
            match itrans_of(offset) {
                Some(itrans) => out.extend(itrans.chars()),
                None => out.push(ch),
            }
        }
    }
    out.into_iter().collect()
}

/// Parse ITRANS `text` into `lang`'s script by longest-match scanning.
pub fn from_itrans(text: &str, lang: Language) -> String {
    let mut text = text.to_string();
    for &(from, to) in DUPLICATE_REPRESENTATIONS {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }

    let chars: Vec<char> = text.chars().collect();
    let mut solution: Vec<char> = Vec::new();
    let mut matched: Option<(usize, String)> = None;
    let mut start = 0;
    let mut i = start + 1;

    while i <= chars.len() {
        let code: String = chars[start..i].iter().collect();

        if let Some(offsets) = ITRANS_TO_OFFSET.get(code.as_str()) {
            // a two-element vowel entry is [independent, dependent]: pick
            // the dependent sign after a halant, the letter otherwise
            let chosen: &[i32] =
                if offsets.len() == 2 && is_independent_vowel(offsets[0]) {
                    let after_halant = solution
                        .last()
                        .map_or(false, |&c| script::is_halanta(c, lang));
                    if after_halant {
                        &offsets[1..2]
                    } else {
                        &offsets[0..1]
                    }
                } else {
                    offsets
                };
            let s: String = chosen.iter().map(|&o| script::char_of(o, lang)).collect();
            matched = Some((i, s));
        } else if i - start == 1 {
            // unknown single character passes through
            matched = Some((i, code));
        } else if i < chars.len() && (i - start) < MAXCODE + 1 {
            i += 1;
            continue;
        } else {
            // no longer match possible: commit the last match and restart
            match matched.take() {
                Some((end, s)) => {
                    solution.extend(s.chars());
                    start = end;
                    i = start;
                }
                None => {
                    start += 1;
                    i = start;
                }
            }
        }

        i += 1;
    }

    if let Some((_, s)) = matched {
        solution.extend(s.chars());
    }

    // drop halants made redundant by a following vowel sign, nukta, or
    // schwa placeholder, then strip the placeholders themselves
    let placeholder = script::char_of(SCHWA_PLACEHOLDER_OFFSET, lang);
    let mut out = String::with_capacity(solution.len() * 3);
    for (i, &ch) in solution.iter().enumerate() {
        if script::is_halanta(ch, lang) {
            if let Some(&next) = solution.get(i + 1) {
                if script::is_vowel_sign(next, lang)
                    || script::is_nukta(next, lang)
                    || next == placeholder
                {
                    continue;
                }
            }
        }
        if ch != placeholder {
            out.push(ch);
        }
    }
    out
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
