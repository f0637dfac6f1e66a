//! Phonetic and lexical similarity measures.
//!
//! The phonetic measures compare feature vectors; `similarity_matrix`
//! tabulates one of them over every pair of coordinated offsets in a
//! source and target script. `lcsr` measures surface similarity of two
//! words, matching characters across scripts through their offsets.

use crate::phonetic::{feature_vector_by_offset, PhoneticVector, PHONETIC_VECTOR_LENGTH};
use crate::script::{self, Language, COORDINATED_RANGE_LEN, COORDINATED_RANGE_START};

/// 1.0 when the vectors are identical, 0.0 otherwise.
pub fn equal(v1: &PhoneticVector, v2: &PhoneticVector) -> f64 {
    if v1.xor(v2).sum() > 0 {
        0.0
    } else {
        1.0
    }
}

/// Dice coefficient over the set bits.
pub fn dice(v1: &PhoneticVector, v2: &PhoneticVector) -> f64 {
    let dot = f64::from(v1.dot(v2));
    2.0 * dot / (PHONETIC_VECTOR_LENGTH * 2) as f64
}

/// Jaccard index over the set bits.
pub fn jaccard(v1: &PhoneticVector, v2: &PhoneticVector) -> f64 {
    let dot = f64::from(v1.dot(v2));
    dot / ((PHONETIC_VECTOR_LENGTH * 2) as f64 - dot)
}

/// Cosine similarity, with a small additive term so invalid (all-zero)
/// vectors compare as 0.0 instead of dividing by zero.
pub fn cosine(v1: &PhoneticVector, v2: &PhoneticVector) -> f64 {
    let dot = f64::from(v1.dot(v2));
    let norm1 = f64::from(v1.dot(v1));
    let norm2 = f64::from(v2.dot(v2));
    dot / ((norm1 * norm2).sqrt() + 0.00001)
}

/// Raw dot product of the two vectors.
pub fn dotprod(v1: &PhoneticVector, v2: &PhoneticVector) -> f64 {
    f64::from(v1.dot(v2))
}

/// `base` raised to the dot product of the vectors.
pub fn exponential_sim(v1: &PhoneticVector, v2: &PhoneticVector, base: f64) -> f64 {
    base.powf(dotprod(v1, v2))
}

/// [`exponential_sim`] with base e. Rows of a matrix of these, once
/// normalized, form a softmax distribution over the target offsets.
pub fn softmax(v1: &PhoneticVector, v2: &PhoneticVector) -> f64 {
    exponential_sim(v1, v2, std::f64::consts::E)
}

/// Tabulate `sim` over every pair of coordinated offsets, source offsets
/// as rows and target offsets as columns.
///
/// With `normalize` set, each row is divided by its sum. A row that sums
/// to zero normalizes to non-finite values; this can happen even for an
/// assigned source offset when `sim` finds nothing across the whole
/// target table (e.g. `equal` against Tamil for an aspirated plosive).
pub fn similarity_matrix<F>(
    sim: F,
    slang: Language,
    tlang: Language,
    normalize: bool,
) -> Vec<Vec<f64>>
where
    F: Fn(&PhoneticVector, &PhoneticVector) -> f64,
{
    let source_vectors: Vec<PhoneticVector> = (0..COORDINATED_RANGE_LEN as i32)
        .map(|offset| feature_vector_by_offset(COORDINATED_RANGE_START + offset, slang))
        .collect();
    let target_vectors: Vec<PhoneticVector> = (0..COORDINATED_RANGE_LEN as i32)
        .map(|offset| feature_vector_by_offset(COORDINATED_RANGE_START + offset, tlang))
        .collect();

    let mut matrix = Vec::with_capacity(COORDINATED_RANGE_LEN);
    for v1 in &source_vectors {
        let mut row: Vec<f64> = target_vectors.iter().map(|v2| sim(v1, v2)).collect();
        if normalize {
            let total: f64 = row.iter().sum();
            for cell in &mut row {
                *cell /= total;
            }
        }
        matrix.push(row);
    }
    matrix
}

fn lcs_length<M>(src: &[char], tgt: &[char], matches: M) -> usize
where
    M: Fn(char, char) -> bool,
{
    let mut score = vec![vec![0usize; tgt.len() + 1]; src.len() + 1];
    for (si, &sc) in src.iter().enumerate() {
        for (ti, &tc) in tgt.iter().enumerate() {
            score[si + 1][ti + 1] = if matches(sc, tc) {
                score[si][ti] + 1
            } else {
                score[si + 1][ti].max(score[si][ti + 1])
            };
        }
    }
    score[src.len()][tgt.len()]
}

fn lcs_ratio(lcs: usize, src_len: usize, tgt_len: usize) -> (f64, usize, usize) {
    let longest = src_len.max(tgt_len);
    if longest == 0 {
        return (0.0, 0, 0);
    }
    (lcs as f64 / longest as f64, src_len, tgt_len)
}

/// Longest common subsequence ratio between two words of different Indic
/// scripts. Characters match when they share a coordinated offset, or
/// when both fall outside the coordinated range and are equal.
pub fn lcsr_indic(
    srcw: &str,
    tgtw: &str,
    slang: Language,
    tlang: Language,
) -> (f64, usize, usize) {
    let src: Vec<char> = srcw.chars().collect();
    let tgt: Vec<char> = tgtw.chars().collect();
    let lcs = lcs_length(&src, &tgt, |sc, tc| {
        let so = script::offset_of(sc, slang);
        let to = script::offset_of(tc, tlang);
        if script::in_coordinated_range(so) && script::in_coordinated_range(to) {
            so == to
        } else {
            !script::in_coordinated_range(so)
                && !script::in_coordinated_range(to)
                && sc == tc
        }
    });
    lcs_ratio(lcs, src.len(), tgt.len())
}

/// Longest common subsequence ratio over plain character equality.
pub fn lcsr_any(srcw: &str, tgtw: &str) -> (f64, usize, usize) {
    let src: Vec<char> = srcw.chars().collect();
    let tgt: Vec<char> = tgtw.chars().collect();
    let lcs = lcs_length(&src, &tgt, |sc, tc| sc == tc);
    lcs_ratio(lcs, src.len(), tgt.len())
}

/// Longest common subsequence ratio between `srcw` and `tgtw`, with the
/// languages given by code. Distinct supported Indic languages compare
/// through their script offsets; the same language, or an unrecognized
/// code, falls back to plain character equality.
pub fn lcsr(srcw: &str, tgtw: &str, slang: &str, tlang: &str) -> (f64, usize, usize) {
    match (Language::from_code(slang), Language::from_code(tlang)) {
        (Ok(sl), Ok(tl)) if sl != tl => lcsr_indic(srcw, tgtw, sl, tl),
        _ => lcsr_any(srcw, tgtw),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
