/// Cosine distance `1 - dot(a, b) / (‖a‖·‖b‖)` between two feature slices.
///
/// For nonnegative frequency vectors the result is in `[0, 1]`: 0 for
/// identical direction, 1 for orthogonal vectors.
///
/// If either vector has zero norm the cosine is undefined; the pair is then
/// treated as maximally dissimilar and the distance is exactly `1.0`. This
/// fallback is applied uniformly (it also covers the empty-vocabulary case,
/// where both feature slices are empty).
#[inline]
#[must_use]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }

    let sim = dot / (norm_a.sqrt() * norm_b.sqrt());
    1.0 - sim.clamp(-1.0, 1.0)
}
