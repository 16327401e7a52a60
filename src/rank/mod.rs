//! Similarity scoring and top-K ranking
//!
//! Exact brute-force cosine search over candidate vectors. At personal
//! library scale this beats the operational cost of an approximate index;
//! swapping one in later only has to honor `rank`'s contract.

use serde::{Deserialize, Serialize};

/// A retrieved chunk with its similarity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub text: String,
    pub document_name: String,
    pub score: f32,
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for empty inputs or when either vector has zero norm,
/// never NaN or infinity.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Score candidates against a query vector and return the top `k`.
///
/// Results are ordered by descending score; exact ties keep the original
/// candidate order (the sort is stable and the comparator is strict).
pub fn rank<T>(query: &[f32], candidates: Vec<(Vec<f32>, T)>, k: usize) -> Vec<(T, f32)> {
    let mut scored: Vec<(T, f32)> = candidates
        .into_iter()
        .map(|(vector, payload)| {
            let score = cosine_similarity(query, &vector);
            (payload, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let v = vec![0.3, -0.4, 0.5, 0.1];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let zero = vec![0.0; 4];
        let v = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
    }

    #[test]
    fn test_empty_vector_scores_zero() {
        let v = vec![1.0, 2.0];
        assert_eq!(cosine_similarity(&[], &v), 0.0);
        assert_eq!(cosine_similarity(&v, &[]), 0.0);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rank_returns_min_k_and_n() {
        let query = vec![1.0, 0.0];
        let candidates = vec![
            (vec![1.0, 0.0], "a"),
            (vec![0.0, 1.0], "b"),
            (vec![0.7, 0.7], "c"),
        ];

        let top = rank(&query, candidates.clone(), 2);
        assert_eq!(top.len(), 2);

        let all = rank(&query, candidates, 10);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_rank_descending_order() {
        let query = vec![1.0, 0.0];
        let candidates = vec![
            (vec![0.0, 1.0], "far"),
            (vec![1.0, 0.0], "exact"),
            (vec![0.9, 0.1], "close"),
        ];

        let ranked = rank(&query, candidates, 3);
        assert_eq!(ranked[0].0, "exact");
        assert_eq!(ranked[1].0, "close");
        assert_eq!(ranked[2].0, "far");
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_exact_tie_preserves_insertion_order() {
        let query = vec![1.0, 0.0];
        // Identical vectors, identical scores
        let candidates = vec![
            (vec![0.5, 0.5], "first"),
            (vec![0.5, 0.5], "second"),
            (vec![1.0, 0.0], "best"),
        ];

        let ranked = rank(&query, candidates, 3);
        assert_eq!(ranked[0].0, "best");
        assert_eq!(ranked[1].0, "first");
        assert_eq!(ranked[2].0, "second");
    }

    #[test]
    fn test_rank_empty_candidates() {
        let ranked: Vec<(&str, f32)> = rank(&[1.0, 0.0], Vec::new(), 5);
        assert!(ranked.is_empty());
    }
}
