/// Converts consecutive onset sample indices into inter-onset intervals in
/// seconds. The result has one element fewer than `onsets`.
pub fn inter_onset_intervals(onsets: &[usize], sample_rate: f32) -> Vec<f32> {
    onsets
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f32 / sample_rate)
        .collect()
}

/// Median of `values`; the mean of the two middle values for even counts and
/// 0 for an empty slice. The input order is left untouched.
pub fn median(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
