/// Beats per bar reported when the intervals do not form a usable grouping.
pub const FALLBACK_BEATS_PER_BAR: u32 = 4;

/// Fraction of the reference beat an interval may deviate by and still count
/// as the same beat.
pub const BEAT_TOLERANCE: f32 = 0.25;

/// Groups consecutive intervals close to `reference_beat` into runs and
/// returns the most common run length.
///
/// The first interval always opens a run without being compared. A run of
/// length one still open at the end of the walk is discarded, while closed runs
/// of length one are kept.
pub fn estimate_beats_per_bar(intervals: &[f32], reference_beat: f32) -> u32 {
    if intervals.len() < 2 {
        return FALLBACK_BEATS_PER_BAR;
    }

    let tolerance = reference_beat * BEAT_TOLERANCE;
    let mut runs = Vec::new();
    let mut current = 1u32;

    for &interval in &intervals[1..] {
        if (interval - reference_beat).abs() < tolerance {
            current += 1;
        } else {
            runs.push(current);
            current = 1;
        }
    }
    if current > 1 {
        runs.push(current);
    }

    mode(&runs).unwrap_or(FALLBACK_BEATS_PER_BAR)
}

/// Most frequent value. Ties go to the value that first appeared earliest.
pub fn mode(values: &[u32]) -> Option<u32> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for &value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(u32, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}
