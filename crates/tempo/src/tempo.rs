/// Beats per minute for a beat lasting `interval` seconds, rounded to the
/// nearest whole number. `None` when the interval is not a positive finite
/// duration.
pub fn bpm_from_interval(interval: f32) -> Option<f32> {
    if !interval.is_finite() || interval <= 0.0 {
        return None;
    }
    Some((60.0 / interval).round())
}
