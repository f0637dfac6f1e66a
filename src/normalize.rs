//! Text normalization for Indic scripts.
//!
//! Indic text in the wild carries byte order marks, zero-width characters,
//! typing-convenience variants, and precomposed nukta consonants that a
//! rule-based pipeline must not see. `normalize` strips the invisible
//! characters, optionally canonicalizes punctuation and chandra variants,
//! and decomposes the precomposed nukta consonants of scripts that have
//! them, so downstream offset arithmetic sees one spelling per sound.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::script::{self, BrahmicScript, Language, NUKTA_OFFSET};

const ZERO_WIDTH_SPACE: char = '\u{200B}';
const NO_BREAK_SPACE: char = '\u{00A0}';
const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';
const REVERSED_BYTE_ORDER_MARK: char = '\u{FFFE}';

/// Chandra variants folded to their closest stable codepoint, as offset
/// pairs applied in the language's own script.
const CHANDRA_SUBSTITUTIONS: &[(i32, i32)] = &[
    (0x0D, 0x0F), // chandra e, independent
    (0x11, 0x13), // chandra o, independent
    (0x45, 0x47), // chandra e, dependent
    (0x49, 0x4B), // chandra o, dependent
    (0x00, 0x02), // inverted chandrabindu
    (0x01, 0x02), // chandrabindu
];

/// Precomposed nukta consonants and their decompositions, per script.
/// Scripts absent here encode nukta consonants only as pairs already.
#[rustfmt::skip]
fn nukta_decompositions(script: BrahmicScript) -> &'static [(char, char)] {
    match script {
        BrahmicScript::Devanagari => &[
            ('\u{0929}', '\u{0928}'), // Nnna
            ('\u{0931}', '\u{0930}'), // Rra
            ('\u{0934}', '\u{0933}'), // Llla
            ('\u{0958}', '\u{0915}'), // Qa
            ('\u{0959}', '\u{0916}'), // Khha
            ('\u{095A}', '\u{0917}'), // Ghha
            ('\u{095B}', '\u{091C}'), // Za
            ('\u{095C}', '\u{0921}'), // Dddha
            ('\u{095D}', '\u{0922}'), // Rha
            ('\u{095E}', '\u{092B}'), // Fa
            ('\u{095F}', '\u{092F}'), // Yya
        ],
        BrahmicScript::Bengali => &[
            ('\u{09DC}', '\u{09A1}'), // Rra
            ('\u{09DD}', '\u{09A2}'), // Rha
            ('\u{09DF}', '\u{09AF}'), // Yya
        ],
        BrahmicScript::Gurmukhi => &[
            ('\u{0A33}', '\u{0A32}'), // Lla
            ('\u{0A36}', '\u{0A38}'), // Sha
            ('\u{0A59}', '\u{0A16}'), // Khha
            ('\u{0A5A}', '\u{0A17}'), // Ghha
            ('\u{0A5B}', '\u{0A1C}'), // Za
            ('\u{0A5E}', '\u{0A2B}'), // Fa
        ],
        _ => &[],
    }
}

/// Punctuation variants folded to their ASCII equivalents.
const PUNCTUATION_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\u{201E}", "\""),
    ("\u{201C}", "\""),
    ("\u{201D}", "\""),
    ("\u{2013}", "-"),
    ("\u{2014}", " - "),
    ("\u{00B4}", "'"),
    ("\u{2018}", "'"),
    ("\u{201A}", "'"),
    ("\u{2019}", "'"),
    ("''", "\""),
    ("\u{2026}", "..."),
];

/// Controls for the optional normalization passes.
#[derive(Clone, Copy, Debug)]
pub struct NormalizeOptions {
    /// Delete zero-width joiner and non-joiner.
    pub remove_joiners: bool,
    /// Fold curly quotes, dashes, and ellipsis to ASCII.
    pub normalize_punctuation: bool,
    /// Fold chandra vowel variants to their stable codepoints.
    pub normalize_chandras: bool,
    /// Delete nukta signs after decomposition.
    pub remove_nuktas: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            remove_joiners: true,
            normalize_punctuation: true,
            normalize_chandras: false,
            remove_nuktas: false,
        }
    }
}

/// Normalize `text` for processing as `lang`. The invisible-character and
/// nukta-decomposition passes always run; the rest follow `options`.
pub fn normalize(text: &str, lang: Language, options: &NormalizeOptions) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ZERO_WIDTH_SPACE | NO_BREAK_SPACE => out.push(' '),
            REVERSED_BYTE_ORDER_MARK => {}
            ZERO_WIDTH_NON_JOINER | ZERO_WIDTH_JOINER => {
                if !options.remove_joiners {
                    out.push(ch);
                }
            }
            // BOM, word joiner, soft hyphen, directional marks
            _ if get_general_category(ch) == GeneralCategory::Format => {}
            _ => out.push(ch),
        }
    }
    let mut text = out;

    if options.normalize_punctuation {
        for &(from, to) in PUNCTUATION_SUBSTITUTIONS {
            if text.contains(from) {
                text = text.replace(from, to);
            }
        }
    }

    if options.normalize_chandras {
        for &(from, to) in CHANDRA_SUBSTITUTIONS {
            let from = script::char_of(from, lang);
            if text.contains(from) {
                text = text.replace(from, &script::char_of(to, lang).to_string());
            }
        }
    }

    let nukta = script::char_of(NUKTA_OFFSET, lang);
    for &(composed, consonant) in nukta_decompositions(lang.script()) {
        if text.contains(composed) {
            let decomposed: String = [consonant, nukta].iter().collect();
            text = text.replace(composed, &decomposed);
        }
    }

    if options.remove_nuktas {
        text = text.replace(nukta, "");
    }

    text
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
