//! Vector similarity and ranking.
//!
//! All scores accumulate in `f64` even though stored vectors are `f32`,
//! keeping rounding error small over high-dimensional inputs. Degenerate
//! inputs (length mismatch, empty vectors, zero norm) resolve to a policy
//! value rather than an error.

use std::cmp::Ordering;

use crate::table::EmbeddingVector;

/// Cosine similarity of two vectors, in `[-1.0, 1.0]`.
///
/// Returns `0.0` when the lengths differ, either vector is empty, or either
/// squared norm is non-positive. This is a degenerate-case policy, not a
/// failure: callers never see an error from scoring.
///
/// # Examples
///
/// ```rust
/// use embedrank_core::similarity::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]);
/// assert!((sim - 1.0).abs() < 1e-9);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Dot product of two vectors.
///
/// Returns `0.0` on length mismatch or empty input.
pub fn dot_product(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}

/// Euclidean (L2) distance between two vectors.
///
/// Returns `f64::MAX` on length mismatch or empty input, so mismatched
/// pairs sort behind every real distance.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return f64::MAX;
    }
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff = f64::from(x) - f64::from(y);
            diff * diff
        })
        .sum();
    sum.sqrt()
}

/// Scale a vector to unit length.
///
/// An empty or zero-norm vector is returned unchanged.
pub fn normalize(v: &[f32]) -> EmbeddingVector {
    if v.is_empty() {
        return Vec::new();
    }
    let norm_sq: f64 = v.iter().map(|&x| f64::from(x) * f64::from(x)).sum();
    if norm_sq <= 0.0 {
        return v.to_vec();
    }
    let norm = norm_sq.sqrt();
    v.iter().map(|&x| (f64::from(x) / norm) as f32).collect()
}

/// Indices that would sort `values`.
///
/// The sort is stable, so equal values keep their original relative order.
pub fn argsort<T: PartialOrd>(values: &[T], ascending: bool) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&i, &j| {
        let ord = values[i]
            .partial_cmp(&values[j])
            .unwrap_or(Ordering::Equal);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    indices
}

/// Rank candidates by cosine similarity against `query` and return the ids
/// of the `min(k, candidates)` best matches.
///
/// Every candidate is scored; there is no pruning or early termination. The
/// sort is stable and descending by score, so candidates with equal scores
/// keep their original order and rankings are deterministic for a given
/// candidate sequence.
///
/// `k == 0` and an empty candidate sequence both yield an empty vector.
pub fn top_k<'a, I>(query: &[f32], candidates: I, k: usize) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a [f32])>,
{
    let mut scored: Vec<(&str, f64)> = candidates
        .into_iter()
        .map(|(id, vector)| (id, cosine_similarity(query, vector)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(k);
    scored.into_iter().map(|(id, _)| id.to_string()).collect()
}
