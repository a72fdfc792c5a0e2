use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use orbloop_domain::{EstimationResult, EstimatorConfig};
use orbloop_tempo::OnsetTempoEstimator;

const SAMPLE_RATE: f32 = 44_100.0;
const WINDOW: usize = 441;

fn estimator() -> OnsetTempoEstimator {
    OnsetTempoEstimator::new(EstimatorConfig::new(SAMPLE_RATE, WINDOW, 0.01, 1.3).unwrap())
        .unwrap()
}

/// `count` one-window bursts every `spacing_windows` windows, padded to
/// `total_windows`.
fn click_track(count: usize, spacing_windows: usize, total_windows: usize) -> Vec<f32> {
    let mut samples = vec![0.0f32; total_windows * WINDOW];
    for click in 0..count {
        let start = click * spacing_windows * WINDOW;
        samples[start..start + WINDOW].fill(1.0);
    }
    samples
}

#[test]
fn test_short_buffer_returns_sentinel() {
    let samples = vec![1.0f32; 2 * WINDOW - 1];
    assert_eq!(estimator().estimate(&samples), EstimationResult::undetermined());
    assert_eq!(
        OnsetTempoEstimator::default().estimate(&samples),
        EstimationResult::undetermined()
    );
}

#[test]
fn test_silence_returns_sentinel() {
    let samples = vec![0.0f32; 44_100 * 3];
    assert_eq!(estimator().estimate(&samples), EstimationResult::undetermined());
}

#[test]
fn test_click_track_tempo_and_bar() {
    // 0.5 s between clicks
    let analysis = estimator().analyze(&click_track(4, 50, 200));
    assert_eq!(analysis.onsets.len(), 4);
    assert_eq!(analysis.intervals.len(), analysis.onsets.len() - 1);
    assert_relative_eq!(analysis.median_interval, 0.5);
    assert_eq!(analysis.result, EstimationResult::new(120.0, 3));
}

#[test]
fn test_two_intervals_form_bar_of_two() {
    let result = estimator().estimate(&click_track(3, 50, 120));
    assert_eq!(result, EstimationResult::new(120.0, 2));
}

#[test]
fn test_two_clicks_fall_back_to_four() {
    let result = estimator().estimate(&click_track(2, 70, 100));
    // 0.7 s between clicks
    assert_eq!(result.bpm, 86.0);
    assert_eq!(result.beats_per_bar, 4);
}

#[test]
fn test_default_config_on_long_click_track() {
    let mut samples = vec![0.0f32; 44_100 * 4];
    // 22 528 samples = 22 windows of 1024
    for click in 0..6 {
        let start = click * 22 * 1024;
        samples[start..start + 1024].fill(0.8);
    }
    let result = OnsetTempoEstimator::default().estimate(&samples);
    assert_eq!(result.bpm, (60.0f32 / (22.0 * 1024.0 / 44_100.0)).round());
    assert_eq!(result.beats_per_bar, 5);
}

#[test]
fn test_estimate_is_deterministic() {
    let estimator = estimator();
    let samples = click_track(5, 37, 200);
    let first = estimator.estimate(&samples);
    let second = estimator.estimate(&samples);
    assert_eq!(first.bpm.to_bits(), second.bpm.to_bits());
    assert_eq!(first.beats_per_bar, second.beats_per_bar);
}

#[test]
fn test_concurrent_estimates_do_not_interfere() {
    let estimator = Arc::new(estimator());
    let handles: Vec<_> = [(4, 50), (3, 50), (6, 25)]
        .into_iter()
        .map(|(count, spacing)| {
            let estimator = Arc::clone(&estimator);
            thread::spawn(move || {
                let samples = click_track(count, spacing, 200);
                (0..20)
                    .map(|_| estimator.estimate(&samples))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected = [
        EstimationResult::new(120.0, 3),
        EstimationResult::new(120.0, 2),
        EstimationResult::new(240.0, 5),
    ];
    for (handle, expected) in handles.into_iter().zip(expected) {
        let results = handle.join().unwrap();
        assert!(results.iter().all(|result| *result == expected));
    }
}
