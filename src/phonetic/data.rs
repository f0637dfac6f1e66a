//! Static phonetic feature tables.
//!
//! One table covers every language sharing the generic Brahmi template; a
//! second, sparser table reflects Tamil's reduced consonant inventory (no
//! aspiration or voicing contrasts in the plosive rows). Rows are described
//! with typed articulation features and compiled to flat vectors once, on
//! first use.

use lazy_static::lazy_static;

use super::{PhoneticVector, PHONETIC_VECTOR_LENGTH};
use crate::script::{Language, COORDINATED_RANGE_LEN};

#[derive(Copy, Clone)]
enum Row {
    Vowel(VowelRow),
    Consonant(ConsonantRow),
    Nukta,
    Halant,
    Anusvaar,
    Misc,
}

#[derive(Copy, Clone)]
struct VowelRow {
    length: Length,
    strength: Strength,
    dependent: bool,
    horizontal: Horizontal,
    vertical: Vertical,
    rounded: bool,
}

#[derive(Copy, Clone)]
struct ConsonantRow {
    kind: Kind,
    place: Option<Place>,
    aspirated: bool,
    voiced: bool,
}

#[derive(Copy, Clone)]
enum Length {
    Short,
    Long,
}

#[derive(Copy, Clone)]
enum Strength {
    Weak,
    Medium,
    Strong,
}

#[derive(Copy, Clone)]
enum Horizontal {
    Front,
    Central,
    Back,
}

#[derive(Copy, Clone)]
enum Vertical {
    Close,
    CloseMid,
    OpenMid,
    Open,
}

#[derive(Copy, Clone)]
enum Kind {
    Plosive,
    Fricative,
    Approximant,
    Flap,
    Nasal,
}

#[derive(Copy, Clone)]
enum Place {
    Velar,
    Palatal,
    Retroflex,
    Dental,
    Labial,
}

impl Row {
    fn compile(self) -> PhoneticVector {
        let mut v = [0u8; PHONETIC_VECTOR_LENGTH];
        match self {
            Row::Vowel(vw) => {
                v[0] = 1;
                match vw.length {
                    Length::Short => v[6] = 1,
                    Length::Long => v[7] = 1,
                }
                match vw.strength {
                    Strength::Weak => v[8] = 1,
                    Strength::Medium => v[9] = 1,
                    Strength::Strong => v[10] = 1,
                }
                if vw.dependent {
                    v[12] = 1;
                } else {
                    v[11] = 1;
                }
                // vowels are voiced and oral
                v[25] = 1;
                v[28] = 1;
                match vw.horizontal {
                    Horizontal::Front => v[29] = 1,
                    Horizontal::Central => v[30] = 1,
                    Horizontal::Back => v[31] = 1,
                }
                match vw.vertical {
                    Vertical::Close => v[32] = 1,
                    Vertical::CloseMid => v[33] = 1,
                    Vertical::OpenMid => v[34] = 1,
                    Vertical::Open => v[35] = 1,
                }
                if vw.rounded {
                    v[36] = 1;
                } else {
                    v[37] = 1;
                }
            }
            Row::Consonant(c) => {
                v[1] = 1;
                match c.kind {
                    Kind::Plosive => v[13] = 1,
                    Kind::Fricative => v[14] = 1,
                    Kind::Approximant => v[15] = 1,
                    Kind::Flap => v[16] = 1,
                    Kind::Nasal => v[17] = 1,
                }
                match c.place {
                    Some(Place::Velar) => v[18] = 1,
                    Some(Place::Palatal) => v[19] = 1,
                    Some(Place::Retroflex) => v[20] = 1,
                    Some(Place::Dental) => v[21] = 1,
                    Some(Place::Labial) => v[22] = 1,
                    None => {}
                }
                if c.aspirated {
                    v[23] = 1;
                } else {
                    v[24] = 1;
                }
                if c.voiced {
                    v[25] = 1;
                } else {
                    v[26] = 1;
                }
                if matches!(c.kind, Kind::Nasal) {
                    v[27] = 1;
                } else {
                    v[28] = 1;
                }
            }
            Row::Nukta => v[2] = 1,
            Row::Halant => v[3] = 1,
            Row::Anusvaar => {
                v[4] = 1;
                v[27] = 1;
            }
            Row::Misc => v[5] = 1,
        }
        PhoneticVector::new(v)
    }
}

fn vowel(
    length: Length,
    strength: Strength,
    horizontal: Horizontal,
    vertical: Vertical,
    rounded: bool,
) -> Row {
    Row::Vowel(VowelRow {
        length,
        strength,
        dependent: false,
        horizontal,
        vertical,
        rounded,
    })
}

fn matra(
    length: Length,
    strength: Strength,
    horizontal: Horizontal,
    vertical: Vertical,
    rounded: bool,
) -> Row {
    Row::Vowel(VowelRow {
        length,
        strength,
        dependent: true,
        horizontal,
        vertical,
        rounded,
    })
}

fn stop(place: Place, aspirated: bool, voiced: bool) -> Row {
    Row::Consonant(ConsonantRow {
        kind: Kind::Plosive,
        place: Some(place),
        aspirated,
        voiced,
    })
}

fn nasal(place: Place) -> Row {
    Row::Consonant(ConsonantRow {
        kind: Kind::Nasal,
        place: Some(place),
        aspirated: false,
        voiced: true,
    })
}

fn fricative(place: Option<Place>, voiced: bool) -> Row {
    Row::Consonant(ConsonantRow {
        kind: Kind::Fricative,
        place,
        aspirated: false,
        voiced,
    })
}

fn approximant(place: Place) -> Row {
    Row::Consonant(ConsonantRow {
        kind: Kind::Approximant,
        place: Some(place),
        aspirated: false,
        voiced: true,
    })
}

fn flap(place: Place, aspirated: bool) -> Row {
    Row::Consonant(ConsonantRow {
        kind: Kind::Flap,
        place: Some(place),
        aspirated,
        voiced: true,
    })
}

/// Phonetic row for an offset of the generic Brahmi template. `None` marks
/// offsets with no valid phonetic representation. Character names follow the
/// Devanagari block, which realizes the template in full.
#[rustfmt::skip]
fn template_row(offset: usize) -> Option<Row> {
    use Horizontal::*;
    use Length::*;
    use Place::*;
    use Strength::*;
    use Vertical::*;

    match offset {
        0x00 => Some(Row::Anusvaar),                                 // Inverted Candrabindu
        0x01 => Some(Row::Anusvaar),                                 // Candrabindu
        0x02 => Some(Row::Anusvaar),                                 // Anusvara
        0x03 => Some(Row::Misc),                                     // Visarga
        0x04 => Some(vowel(Short, Strong, Central, Open, false)),    // Short A
        0x05 => Some(vowel(Short, Strong, Central, Open, false)),    // A
        0x06 => Some(vowel(Long, Strong, Central, Open, false)),     // Aa
        0x07 => Some(vowel(Short, Weak, Front, Close, false)),       // I
        0x08 => Some(vowel(Long, Weak, Front, Close, false)),        // Ii
        0x09 => Some(vowel(Short, Weak, Back, Close, true)),         // U
        0x0A => Some(vowel(Long, Weak, Back, Close, true)),          // Uu
        0x0B => Some(vowel(Short, Weak, Central, Close, false)),     // Vocalic R
        0x0C => Some(vowel(Short, Weak, Central, Close, false)),     // Vocalic L
        0x0D => Some(vowel(Short, Medium, Front, OpenMid, false)),   // Candra E
        0x0E => Some(vowel(Short, Medium, Front, CloseMid, false)),  // Short E
        0x0F => Some(vowel(Long, Medium, Front, CloseMid, false)),   // E
        0x10 => Some(vowel(Long, Medium, Front, OpenMid, false)),    // Ai
        0x11 => Some(vowel(Short, Medium, Back, OpenMid, true)),     // Candra O
        0x12 => Some(vowel(Short, Medium, Back, CloseMid, true)),    // Short O
        0x13 => Some(vowel(Long, Medium, Back, CloseMid, true)),     // O
        0x14 => Some(vowel(Long, Medium, Back, OpenMid, true)),      // Au
        0x15 => Some(stop(Velar, false, false)),                     // Ka
        0x16 => Some(stop(Velar, true, false)),                      // Kha
        0x17 => Some(stop(Velar, false, true)),                      // Ga
        0x18 => Some(stop(Velar, true, true)),                       // Gha
        0x19 => Some(nasal(Velar)),                                  // Nga
        0x1A => Some(stop(Palatal, false, false)),                   // Ca
        0x1B => Some(stop(Palatal, true, false)),                    // Cha
        0x1C => Some(stop(Palatal, false, true)),                    // Ja
        0x1D => Some(stop(Palatal, true, true)),                     // Jha
        0x1E => Some(nasal(Palatal)),                                // Nya
        0x1F => Some(stop(Retroflex, false, false)),                 // Tta
        0x20 => Some(stop(Retroflex, true, false)),                  // Ttha
        0x21 => Some(stop(Retroflex, false, true)),                  // Dda
        0x22 => Some(stop(Retroflex, true, true)),                   // Ddha
        0x23 => Some(nasal(Retroflex)),                              // Nna
        0x24 => Some(stop(Dental, false, false)),                    // Ta
        0x25 => Some(stop(Dental, true, false)),                     // Tha
        0x26 => Some(stop(Dental, false, true)),                     // Da
        0x27 => Some(stop(Dental, true, true)),                      // Dha
        0x28 => Some(nasal(Dental)),                                 // Na
        0x29 => Some(nasal(Dental)),                                 // Nnna
        0x2A => Some(stop(Labial, false, false)),                    // Pa
        0x2B => Some(stop(Labial, true, false)),                     // Pha
        0x2C => Some(stop(Labial, false, true)),                     // Ba
        0x2D => Some(stop(Labial, true, true)),                      // Bha
        0x2E => Some(nasal(Labial)),                                 // Ma
        0x2F => Some(approximant(Palatal)),                          // Ya
        0x30 => Some(approximant(Dental)),                           // Ra
        0x31 => Some(approximant(Dental)),                           // Rra
        0x32 => Some(approximant(Dental)),                           // La
        0x33 => Some(approximant(Retroflex)),                        // Lla
        0x34 => Some(approximant(Retroflex)),                        // Llla
        0x35 => Some(approximant(Labial)),                           // Va
        0x36 => Some(fricative(Some(Palatal), false)),               // Sha
        0x37 => Some(fricative(Some(Retroflex), false)),             // Ssa
        0x38 => Some(fricative(Some(Dental), false)),                // Sa
        0x39 => Some(fricative(None, true)),                         // Ha (glottal)
        0x3A => None,                                                // unassigned
        0x3B => None,                                                // unassigned
        0x3C => Some(Row::Nukta),                                    // Nukta
        0x3D => Some(Row::Misc),                                     // Avagraha
        0x3E => Some(matra(Long, Strong, Central, Open, false)),     // Sign Aa
        0x3F => Some(matra(Short, Weak, Front, Close, false)),       // Sign I
        0x40 => Some(matra(Long, Weak, Front, Close, false)),        // Sign Ii
        0x41 => Some(matra(Short, Weak, Back, Close, true)),         // Sign U
        0x42 => Some(matra(Long, Weak, Back, Close, true)),          // Sign Uu
        0x43 => Some(matra(Short, Weak, Central, Close, false)),     // Sign Vocalic R
        0x44 => Some(matra(Long, Weak, Central, Close, false)),      // Sign Vocalic Rr
        0x45 => Some(matra(Short, Medium, Front, OpenMid, false)),   // Sign Candra E
        0x46 => Some(matra(Short, Medium, Front, CloseMid, false)),  // Sign Short E
        0x47 => Some(matra(Long, Medium, Front, CloseMid, false)),   // Sign E
        0x48 => Some(matra(Long, Medium, Front, OpenMid, false)),    // Sign Ai
        0x49 => Some(matra(Short, Medium, Back, OpenMid, true)),     // Sign Candra O
        0x4A => Some(matra(Short, Medium, Back, CloseMid, true)),    // Sign Short O
        0x4B => Some(matra(Long, Medium, Back, CloseMid, true)),     // Sign O
        0x4C => Some(matra(Long, Medium, Back, OpenMid, true)),      // Sign Au
        0x4D => Some(Row::Halant),                                   // Virama
        0x4E => None,                                                // unassigned
        0x4F => None,                                                // Sign Aw
        0x50 => Some(Row::Misc),                                     // Om
        0x51..=0x57 => None,                                         // vedic tone / length marks
        0x58 => Some(stop(Velar, false, false)),                     // Qa
        0x59 => Some(fricative(Some(Velar), false)),                 // Khha
        0x5A => Some(fricative(Some(Velar), true)),                  // Ghha
        0x5B => Some(fricative(Some(Dental), true)),                 // Za
        0x5C => Some(flap(Retroflex, false)),                        // Dddha
        0x5D => Some(flap(Retroflex, true)),                         // Rha
        0x5E => Some(fricative(Some(Labial), false)),                // Fa
        0x5F => Some(approximant(Palatal)),                          // Yya
        0x60 => Some(vowel(Long, Weak, Central, Close, false)),      // Vocalic Rr
        0x61 => Some(vowel(Long, Weak, Central, Close, false)),      // Vocalic Ll
        0x62 => Some(matra(Short, Weak, Central, Close, false)),     // Sign Vocalic L
        0x63 => Some(matra(Long, Weak, Central, Close, false)),      // Sign Vocalic Ll
        0x64 => None,                                                // Danda
        0x65 => None,                                                // Double Danda
        0x66..=0x6F => Some(Row::Misc),                              // Digits 0-9
        _ => None,
    }
}

/// Offsets assigned in the Tamil block. Tamil keeps the template layout but
/// drops the aspirated and voiced plosive columns, the nukta, and most of
/// the extended rows.
fn tamil_has(offset: usize) -> bool {
    match offset {
        0x02 => true,               // Anusvara
        0x03 => true,               // Visarga (aytham)
        0x05..=0x0A => true,        // A..Uu
        0x0E..=0x10 => true,        // E, Ee, Ai
        0x12..=0x14 => true,        // O, Oo, Au
        0x15 => true,               // Ka
        0x19 => true,               // Nga
        0x1A => true,               // Ca
        0x1C => true,               // Ja
        0x1E => true,               // Nya
        0x1F => true,               // Tta
        0x23 => true,               // Nna
        0x24 => true,               // Ta
        0x28 | 0x29 => true,        // Na, Nnna
        0x2A => true,               // Pa
        0x2E..=0x35 => true,        // Ma..Va
        0x36..=0x39 => true,        // Sha..Ha (Grantha)
        0x3E..=0x42 => true,        // Sign Aa..Sign Uu
        0x46..=0x48 => true,        // Sign E, Sign Ee, Sign Ai
        0x4A..=0x4C => true,        // Sign O, Sign Oo, Sign Au
        0x4D => true,               // Virama
        0x50 => true,               // Om
        0x66..=0x6F => true,        // Digits
        _ => false,
    }
}

fn compile_table(has: impl Fn(usize) -> bool) -> [PhoneticVector; COORDINATED_RANGE_LEN] {
    let mut table = [PhoneticVector::INVALID; COORDINATED_RANGE_LEN];
    for (offset, slot) in table.iter_mut().enumerate() {
        if has(offset) {
            if let Some(row) = template_row(offset) {
                *slot = row.compile();
            }
        }
    }
    table
}

lazy_static! {
    static ref ALL_PHONETIC_VECTORS: [PhoneticVector; COORDINATED_RANGE_LEN] =
        compile_table(|_| true);
    static ref TAMIL_PHONETIC_VECTORS: [PhoneticVector; COORDINATED_RANGE_LEN] =
        compile_table(tamil_has);
}

pub(super) fn vectors_for(lang: Language) -> &'static [PhoneticVector; COORDINATED_RANGE_LEN] {
    match lang {
        Language::Ta => &TAMIL_PHONETIC_VECTORS,
        _ => &ALL_PHONETIC_VECTORS,
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
