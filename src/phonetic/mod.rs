//! Phonetic feature vectors for coordinated offsets.
//!
//! Each offset in the coordinated range carries a fixed-length vector of 38
//! articulation features. The all-zero vector is the sentinel for "no
//! phonetic entry": symbols, unassigned template slots, and offsets outside
//! the coordinated range all yield it, which keeps every operation in this
//! module total.

mod data;

use std::ops::Range;

use crate::script::{self, Language};

/// Number of feature slots in a phonetic vector.
pub const PHONETIC_VECTOR_LENGTH: usize = 38;

// Basic-type slots. One-hot within the first six positions.
const BT_VOWEL: usize = 0;
const BT_CONSONANT: usize = 1;
const BT_NUKTA: usize = 2;
const BT_HALANT: usize = 3;
const BT_ANUSVAAR: usize = 4;
const BT_MISC: usize = 5;

// Pinned positions within named properties.
const VSTAT_DEPENDENT: usize = 12;
const CTYPE_PLOSIVE: usize = 13;

/// A named sub-range of the feature vector.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Property {
    BasicType,
    VowelLength,
    VowelStrength,
    VowelStatus,
    ConsonantType,
    ArticulationPlace,
    Aspiration,
    Voicing,
    Nasalization,
    VowelHorizontal,
    VowelVertical,
    VowelRoundness,
}

impl Property {
    pub fn range(self) -> Range<usize> {
        match self {
            Property::BasicType => 0..6,
            Property::VowelLength => 6..8,
            Property::VowelStrength => 8..11,
            Property::VowelStatus => 11..13,
            Property::ConsonantType => 13..18,
            Property::ArticulationPlace => 18..23,
            Property::Aspiration => 23..25,
            Property::Voicing => 25..27,
            Property::Nasalization => 27..29,
            Property::VowelHorizontal => 29..32,
            Property::VowelVertical => 32..36,
            Property::VowelRoundness => 36..38,
        }
    }
}

/// A phonetic feature vector.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PhoneticVector([u8; PHONETIC_VECTOR_LENGTH]);

impl PhoneticVector {
    /// The all-zero sentinel for offsets without a phonetic entry.
    pub const INVALID: PhoneticVector = PhoneticVector([0; PHONETIC_VECTOR_LENGTH]);

    pub(crate) const fn new(slots: [u8; PHONETIC_VECTOR_LENGTH]) -> Self {
        PhoneticVector(slots)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// A vector is valid iff any slot is set.
    pub fn is_valid(&self) -> bool {
        self.0.iter().any(|&b| b != 0)
    }

    pub fn is_vowel(&self) -> bool {
        self.0[BT_VOWEL] == 1
    }

    pub fn is_consonant(&self) -> bool {
        self.0[BT_CONSONANT] == 1
    }

    pub fn is_nukta(&self) -> bool {
        self.0[BT_NUKTA] == 1
    }

    pub fn is_halant(&self) -> bool {
        self.0[BT_HALANT] == 1
    }

    pub fn is_anusvaar(&self) -> bool {
        self.0[BT_ANUSVAAR] == 1
    }

    pub fn is_misc(&self) -> bool {
        self.0[BT_MISC] == 1
    }

    pub fn is_dependent_vowel(&self) -> bool {
        self.is_vowel() && self.0[VSTAT_DEPENDENT] == 1
    }

    pub fn is_plosive(&self) -> bool {
        self.is_consonant() && self.0[CTYPE_PLOSIVE] == 1
    }

    /// Elementwise boolean OR.
    pub fn or(&self, other: &PhoneticVector) -> PhoneticVector {
        let mut out = [0; PHONETIC_VECTOR_LENGTH];
        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *o = u8::from(a + b >= 1);
        }
        PhoneticVector(out)
    }

    /// Elementwise boolean XOR.
    pub fn xor(&self, other: &PhoneticVector) -> PhoneticVector {
        let mut out = [0; PHONETIC_VECTOR_LENGTH];
        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *o = u8::from(a != b);
        }
        PhoneticVector(out)
    }

    pub fn dot(&self, other: &PhoneticVector) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| u32::from(a) * u32::from(b))
            .sum()
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&b| u32::from(b)).sum()
    }

    /// The sub-slice of the vector holding `prop`.
    pub fn property_slice(&self, prop: Property) -> &[u8] {
        &self.0[prop.range()]
    }

    /// Interprets the property's bits as a binary number, most significant
    /// bit first, for ordinal comparison.
    pub fn property_value(&self, prop: Property) -> u32 {
        self.property_slice(prop)
            .iter()
            .fold(0, |acc, &b| (acc << 1) | u32::from(b))
    }
}

/// Feature vector for `ch` interpreted against `lang`'s script. Total: any
/// character without a table entry yields `PhoneticVector::INVALID`.
pub fn feature_vector(ch: char, lang: Language) -> PhoneticVector {
    feature_vector_by_offset(script::offset_of(ch, lang), lang)
}

/// Feature vector for a raw coordinated offset. Used when iterating offsets
/// directly, e.g. to build similarity matrices.
pub fn feature_vector_by_offset(offset: i32, lang: Language) -> PhoneticVector {
    if !script::in_coordinated_range(offset) {
        return PhoneticVector::INVALID;
    }
    data::vectors_for(lang)[offset as usize]
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    mod lookup {
        use super::*;

        #[test]
        fn test_consonant_vector() {
            let v = feature_vector('\u{0915}', Language::Hi); // ka
            assert!(v.is_valid());
            assert!(v.is_consonant());
            assert!(v.is_plosive());
            assert!(!v.is_vowel());
        }

        #[test]
        fn test_vowel_vector() {
            let v = feature_vector('\u{0905}', Language::Hi); // a
            assert!(v.is_vowel());
            assert!(!v.is_dependent_vowel());
        }

        #[test]
        fn test_matra_is_dependent() {
            let v = feature_vector('\u{093E}', Language::Hi); // sign aa
            assert!(v.is_vowel());
            assert!(v.is_dependent_vowel());
        }

        #[test]
        fn test_halant_and_anusvaar() {
            assert!(feature_vector('\u{094D}', Language::Hi).is_halant());
            assert!(feature_vector('\u{0902}', Language::Hi).is_anusvaar());
        }

        #[test]
        fn test_out_of_range_is_invalid() {
            let v = feature_vector('a', Language::Hi);
            assert_eq!(v, PhoneticVector::INVALID);
            assert!(!v.is_valid());
        }

        #[test]
        fn test_tamil_missing_consonant_is_invalid() {
            // Tamil has no kha (0x16)
            let v = feature_vector_by_offset(0x16, Language::Ta);
            assert!(!v.is_valid());
            // but the generic table has it
            assert!(feature_vector_by_offset(0x16, Language::Hi).is_valid());
        }

        #[test]
        fn test_tamil_shared_consonant_matches_generic() {
            assert_eq!(
                feature_vector_by_offset(0x15, Language::Ta),
                feature_vector_by_offset(0x15, Language::Hi)
            );
        }
    }

    mod ops {
        use super::*;

        #[test]
        fn test_xor_self_is_zero() {
            let v = feature_vector_by_offset(0x15, Language::Hi);
            assert_eq!(v.xor(&v).sum(), 0);
        }

        #[test]
        fn test_or_is_union() {
            let a = feature_vector_by_offset(0x15, Language::Hi); // ka
            let b = feature_vector_by_offset(0x05, Language::Hi); // a
            let u = a.or(&b);
            assert!(u.is_vowel());
            assert!(u.is_consonant());
        }

        #[test]
        fn test_property_value_msb_first() {
            let v = feature_vector_by_offset(0x15, Language::Hi);
            // ka: plosive, so the consonant_type slice reads 0b10000
            assert_eq!(v.property_value(Property::ConsonantType), 0b10000);
        }

        #[test]
        fn test_property_slice_length() {
            let v = PhoneticVector::INVALID;
            assert_eq!(v.property_slice(Property::BasicType).len(), 6);
            assert_eq!(v.property_slice(Property::VowelRoundness).len(), 2);
        }
    }
}
