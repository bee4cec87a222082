// Cosine distance between embedding vectors.
//
// Distance = 1 - cosine similarity, so 0.0 means identical direction and
// 2.0 means opposite. Degenerate inputs (empty, zero magnitude, mismatched
// dimensions) read as 1.0 — maximally dissimilar rather than accidentally
// similar, so a broken vector can never cause a merge.

/// Cosine distance between two vectors, clamped to [0.0, 2.0].
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 1.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        return 1.0;
    }

    (1.0 - dot / denom).clamp(0.0, 2.0)
}
