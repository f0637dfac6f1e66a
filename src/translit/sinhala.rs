//! Sinhala ↔ Devanagari character maps.
//!
//! The Sinhala block does not realize the shared Brahmi template, so offset
//! arithmetic cannot reach it directly. Instead, Sinhala text is mapped to
//! Devanagari character-by-character on entry and back on exit. Sinhala's
//! prenasalized consonants have no Devanagari counterpart and map lossily
//! onto their plain voiced forms, so the reverse direction never produces
//! them.

/// Map Sinhala text onto Devanagari. Unmapped characters pass through.
pub fn to_devanagari(text: &str) -> String {
    text.chars()
        .map(|ch| devanagari_char(ch).unwrap_or(ch))
        .collect()
}

/// Map Devanagari text back onto Sinhala. Unmapped characters pass through.
pub fn from_devanagari(text: &str) -> String {
    text.chars()
        .map(|ch| sinhala_char(ch).unwrap_or(ch))
        .collect()
}

#[rustfmt::skip]
fn devanagari_char(ch: char) -> Option<char> {
    match ch {
        // signs
        '\u{0D82}' => Some('\u{0902}'), // Anusvara
        '\u{0D83}' => Some('\u{0903}'), // Visarga

        // independent vowels
        '\u{0D85}' => Some('\u{0905}'), // A
        '\u{0D86}' => Some('\u{0906}'), // Aa
        '\u{0D87}' => Some('\u{090D}'), // Ae -> Candra E
        '\u{0D88}' => Some('\u{090D}'), // Aae -> Candra E (lossy)
        '\u{0D89}' => Some('\u{0907}'), // I
        '\u{0D8A}' => Some('\u{0908}'), // Ii
        '\u{0D8B}' => Some('\u{0909}'), // U
        '\u{0D8C}' => Some('\u{090A}'), // Uu
        '\u{0D8D}' => Some('\u{090B}'), // Vocalic R
        '\u{0D8E}' => Some('\u{0960}'), // Vocalic Rr
        '\u{0D8F}' => Some('\u{090C}'), // Vocalic L
        '\u{0D90}' => Some('\u{0961}'), // Vocalic Ll
        '\u{0D91}' => Some('\u{090E}'), // E -> Short E
        '\u{0D92}' => Some('\u{090F}'), // Ee -> E
        '\u{0D93}' => Some('\u{0910}'), // Ai
        '\u{0D94}' => Some('\u{0912}'), // O -> Short O
        '\u{0D95}' => Some('\u{0913}'), // Oo -> O
        '\u{0D96}' => Some('\u{0914}'), // Au

        // consonants
        '\u{0D9A}' => Some('\u{0915}'), // Ka
        '\u{0D9B}' => Some('\u{0916}'), // Kha
        '\u{0D9C}' => Some('\u{0917}'), // Ga
        '\u{0D9D}' => Some('\u{0918}'), // Gha
        '\u{0D9E}' => Some('\u{0919}'), // Nga
        '\u{0D9F}' => Some('\u{0917}'), // Nnga -> Ga (lossy)
        '\u{0DA0}' => Some('\u{091A}'), // Ca
        '\u{0DA1}' => Some('\u{091B}'), // Cha
        '\u{0DA2}' => Some('\u{091C}'), // Ja
        '\u{0DA3}' => Some('\u{091D}'), // Jha
        '\u{0DA4}' => Some('\u{091E}'), // Nya
        '\u{0DA5}' => Some('\u{091C}'), // Jnya -> Ja (lossy)
        '\u{0DA6}' => Some('\u{091C}'), // Nyja -> Ja (lossy)
        '\u{0DA7}' => Some('\u{091F}'), // Tta
        '\u{0DA8}' => Some('\u{0920}'), // Ttha
        '\u{0DA9}' => Some('\u{0921}'), // Dda
        '\u{0DAA}' => Some('\u{0922}'), // Ddha
        '\u{0DAB}' => Some('\u{0923}'), // Nna
        '\u{0DAC}' => Some('\u{0921}'), // Nndda -> Dda (lossy)
        '\u{0DAD}' => Some('\u{0924}'), // Ta
        '\u{0DAE}' => Some('\u{0925}'), // Tha
        '\u{0DAF}' => Some('\u{0926}'), // Da
        '\u{0DB0}' => Some('\u{0927}'), // Dha
        '\u{0DB1}' => Some('\u{0928}'), // Na
        '\u{0DB3}' => Some('\u{0926}'), // Nda -> Da (lossy)
        '\u{0DB4}' => Some('\u{092A}'), // Pa
        '\u{0DB5}' => Some('\u{092B}'), // Pha
        '\u{0DB6}' => Some('\u{092C}'), // Ba
        '\u{0DB7}' => Some('\u{092D}'), // Bha
        '\u{0DB8}' => Some('\u{092E}'), // Ma
        '\u{0DB9}' => Some('\u{092C}'), // Mba -> Ba (lossy)
        '\u{0DBA}' => Some('\u{092F}'), // Ya
        '\u{0DBB}' => Some('\u{0930}'), // Ra
        '\u{0DBD}' => Some('\u{0932}'), // La
        '\u{0DC0}' => Some('\u{0935}'), // Va
        '\u{0DC1}' => Some('\u{0936}'), // Sha
        '\u{0DC2}' => Some('\u{0937}'), // Ssa
        '\u{0DC3}' => Some('\u{0938}'), // Sa
        '\u{0DC4}' => Some('\u{0939}'), // Ha
        '\u{0DC5}' => Some('\u{0933}'), // Lla
        '\u{0DC6}' => Some('\u{095E}'), // Fa

        // virama and dependent vowels
        '\u{0DCA}' => Some('\u{094D}'), // Virama
        '\u{0DCF}' => Some('\u{093E}'), // Sign Aa
        '\u{0DD0}' => Some('\u{0945}'), // Sign Ae -> Sign Candra E
        '\u{0DD1}' => Some('\u{0945}'), // Sign Aae -> Sign Candra E (lossy)
        '\u{0DD2}' => Some('\u{093F}'), // Sign I
        '\u{0DD3}' => Some('\u{0940}'), // Sign Ii
        '\u{0DD4}' => Some('\u{0941}'), // Sign U
        '\u{0DD6}' => Some('\u{0942}'), // Sign Uu
        '\u{0DD8}' => Some('\u{0943}'), // Sign Vocalic R
        '\u{0DD9}' => Some('\u{0946}'), // Sign E -> Sign Short E
        '\u{0DDA}' => Some('\u{0947}'), // Sign Ee -> Sign E
        '\u{0DDB}' => Some('\u{0948}'), // Sign Ai
        '\u{0DDC}' => Some('\u{094A}'), // Sign O -> Sign Short O
        '\u{0DDD}' => Some('\u{094B}'), // Sign Oo -> Sign O
        '\u{0DDE}' => Some('\u{094C}'), // Sign Au
        '\u{0DDF}' => Some('\u{0962}'), // Sign Vocalic L
        '\u{0DF2}' => Some('\u{0944}'), // Sign Vocalic Rr
        '\u{0DF3}' => Some('\u{0963}'), // Sign Vocalic Ll

        // digits
        '\u{0DE6}' => Some('\u{0966}'),
        '\u{0DE7}' => Some('\u{0967}'),
        '\u{0DE8}' => Some('\u{0968}'),
        '\u{0DE9}' => Some('\u{0969}'),
        '\u{0DEA}' => Some('\u{096A}'),
        '\u{0DEB}' => Some('\u{096B}'),
        '\u{0DEC}' => Some('\u{096C}'),
        '\u{0DED}' => Some('\u{096D}'),
        '\u{0DEE}' => Some('\u{096E}'),
        '\u{0DEF}' => Some('\u{096F}'),

        _ => None,
    }
}

#[rustfmt::skip]
fn sinhala_char(ch: char) -> Option<char> {
    match ch {
        // signs
        '\u{0902}' => Some('\u{0D82}'), // Anusvara
        '\u{0903}' => Some('\u{0D83}'), // Visarga

        // independent vowels
        '\u{0905}' => Some('\u{0D85}'), // A
        '\u{0906}' => Some('\u{0D86}'), // Aa
        '\u{090D}' => Some('\u{0D87}'), // Candra E -> Ae
        '\u{0907}' => Some('\u{0D89}'), // I
        '\u{0908}' => Some('\u{0D8A}'), // Ii
        '\u{0909}' => Some('\u{0D8B}'), // U
        '\u{090A}' => Some('\u{0D8C}'), // Uu
        '\u{090B}' => Some('\u{0D8D}'), // Vocalic R
        '\u{0960}' => Some('\u{0D8E}'), // Vocalic Rr
        '\u{090C}' => Some('\u{0D8F}'), // Vocalic L
        '\u{0961}' => Some('\u{0D90}'), // Vocalic Ll
        '\u{090E}' => Some('\u{0D91}'), // Short E -> E
        '\u{090F}' => Some('\u{0D92}'), // E -> Ee
        '\u{0910}' => Some('\u{0D93}'), // Ai
        '\u{0912}' => Some('\u{0D94}'), // Short O -> O
        '\u{0913}' => Some('\u{0D95}'), // O -> Oo
        '\u{0914}' => Some('\u{0D96}'), // Au

        // consonants
        '\u{0915}' => Some('\u{0D9A}'), // Ka
        '\u{0916}' => Some('\u{0D9B}'), // Kha
        '\u{0917}' => Some('\u{0D9C}'), // Ga
        '\u{0918}' => Some('\u{0D9D}'), // Gha
        '\u{0919}' => Some('\u{0D9E}'), // Nga
        '\u{091A}' => Some('\u{0DA0}'), // Ca
        '\u{091B}' => Some('\u{0DA1}'), // Cha
        '\u{091C}' => Some('\u{0DA2}'), // Ja
        '\u{091D}' => Some('\u{0DA3}'), // Jha
        '\u{091E}' => Some('\u{0DA4}'), // Nya
        '\u{091F}' => Some('\u{0DA7}'), // Tta
        '\u{0920}' => Some('\u{0DA8}'), // Ttha
        '\u{0921}' => Some('\u{0DA9}'), // Dda
        '\u{0922}' => Some('\u{0DAA}'), // Ddha
        '\u{0923}' => Some('\u{0DAB}'), // Nna
        '\u{0924}' => Some('\u{0DAD}'), // Ta
        '\u{0925}' => Some('\u{0DAE}'), // Tha
        '\u{0926}' => Some('\u{0DAF}'), // Da
        '\u{0927}' => Some('\u{0DB0}'), // Dha
        '\u{0928}' => Some('\u{0DB1}'), // Na
        '\u{092A}' => Some('\u{0DB4}'), // Pa
        '\u{092B}' => Some('\u{0DB5}'), // Pha
        '\u{092C}' => Some('\u{0DB6}'), // Ba
        '\u{092D}' => Some('\u{0DB7}'), // Bha
        '\u{092E}' => Some('\u{0DB8}'), // Ma
        '\u{092F}' => Some('\u{0DBA}'), // Ya
        '\u{0930}' => Some('\u{0DBB}'), // Ra
        '\u{0932}' => Some('\u{0DBD}'), // La
        '\u{0935}' => Some('\u{0DC0}'), // Va
        '\u{0936}' => Some('\u{0DC1}'), // Sha
        '\u{0937}' => Some('\u{0DC2}'), // Ssa
        '\u{0938}' => Some('\u{0DC3}'), // Sa
        '\u{0939}' => Some('\u{0DC4}'), // Ha
        '\u{0933}' => Some('\u{0DC5}'), // Lla
        '\u{095E}' => Some('\u{0DC6}'), // Fa

        // virama and dependent vowels
        '\u{094D}' => Some('\u{0DCA}'), // Virama
        '\u{093E}' => Some('\u{0DCF}'), // Sign Aa
        '\u{0945}' => Some('\u{0DD0}'), // Sign Candra E -> Sign Ae
        '\u{093F}' => Some('\u{0DD2}'), // Sign I
        '\u{0940}' => Some('\u{0DD3}'), // Sign Ii
        '\u{0941}' => Some('\u{0DD4}'), // Sign U
        '\u{0942}' => Some('\u{0DD6}'), // Sign Uu
        '\u{0943}' => Some('\u{0DD8}'), // Sign Vocalic R
        '\u{0946}' => Some('\u{0DD9}'), // Sign Short E -> Sign E
        '\u{0947}' => Some('\u{0DDA}'), // Sign E -> Sign Ee
        '\u{0948}' => Some('\u{0DDB}'), // Sign Ai
        '\u{094A}' => Some('\u{0DDC}'), // Sign Short O -> Sign O
        '\u{094B}' => Some('\u{0DDD}'), // Sign O -> Sign Oo
        '\u{094C}' => Some('\u{0DDE}'), // Sign Au
        '\u{0962}' => Some('\u{0DDF}'), // Sign Vocalic L
        '\u{0944}' => Some('\u{0DF2}'), // Sign Vocalic Rr
        '\u{0963}' => Some('\u{0DF3}'), // Sign Vocalic Ll

        // digits
        '\u{0966}' => Some('\u{0DE6}'),
        '\u{0967}' => Some('\u{0DE7}'),
        '\u{0968}' => Some('\u{0DE8}'),
        '\u{0969}' => Some('\u{0DE9}'),
        '\u{096A}' => Some('\u{0DEA}'),
        '\u{096B}' => Some('\u{0DEB}'),
        '\u{096C}' => Some('\u{0DEC}'),
        '\u{096D}' => Some('\u{0DED}'),
        '\u{096E}' => Some('\u{0DEE}'),
        '\u{096F}' => Some('\u{0DEF}'),

        _ => None,
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_for_primary_mappings() {
        // every Devanagari -> Sinhala entry must invert exactly
        for cp in 0x0900..=0x096F_u32 {
            if let Some(deva) = char::from_u32(cp) {
                if let Some(si) = sinhala_char(deva) {
                    assert_eq!(devanagari_char(si), Some(deva), "for {:#x}", cp);
                }
            }
        }
    }

    #[test]
    fn test_prenasalized_is_lossy() {
        // Nnga maps onto Ga, which maps back to plain Ga
        assert_eq!(devanagari_char('\u{0D9F}'), Some('\u{0917}'));
        assert_eq!(sinhala_char('\u{0917}'), Some('\u{0D9C}'));
    }

    #[test]
    fn test_unmapped_passes_through() {
        assert_eq!(to_devanagari("abc"), "abc");
        assert_eq!(from_devanagari("xyz"), "xyz");
    }
}
