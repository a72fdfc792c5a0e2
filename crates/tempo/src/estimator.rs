use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use orbloop_domain::{DomainError, EstimationResult, EstimatorConfig};

use crate::bar::{estimate_beats_per_bar, FALLBACK_BEATS_PER_BAR};
use crate::interval::{inter_onset_intervals, median};
use crate::onset::OnsetDetector;
use crate::tempo::bpm_from_interval;

/// Intermediate values of one estimation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TempoAnalysis {
    /// Sample index of the first sample of each onset window.
    pub onsets: Vec<usize>,
    /// Seconds between consecutive onsets, in temporal order.
    pub intervals: Vec<f32>,
    pub median_interval: f32,
    pub result: EstimationResult,
}

/// Estimates tempo and beats per bar from mono sample buffers.
///
/// Holds only its configuration, so a single instance can be shared across
/// threads and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct OnsetTempoEstimator {
    config: EstimatorConfig,
}

impl OnsetTempoEstimator {
    pub fn new(config: EstimatorConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn estimate(&self, samples: &[f32]) -> EstimationResult {
        self.analyze(samples).result
    }

    pub fn analyze(&self, samples: &[f32]) -> TempoAnalysis {
        let window_size = self.config.window_size;
        if samples.len() < window_size.saturating_mul(2) {
            debug!(
                sample_count = samples.len(),
                window_size, "buffer too short for tempo estimation"
            );
            return TempoAnalysis::default();
        }

        let onsets = OnsetDetector::from_config(&self.config).detect(samples);
        if onsets.len() < 2 {
            debug!(onsets = onsets.len(), "not enough onsets for tempo estimation");
            return TempoAnalysis {
                onsets,
                ..TempoAnalysis::default()
            };
        }

        let intervals = inter_onset_intervals(&onsets, self.config.sample_rate);
        let median_interval = median(&intervals);
        let result = match bpm_from_interval(median_interval) {
            Some(bpm) => {
                EstimationResult::new(bpm, estimate_beats_per_bar(&intervals, median_interval))
            }
            None => {
                warn!(median_interval, "degenerate median interval");
                EstimationResult::new(0.0, FALLBACK_BEATS_PER_BAR)
            }
        };
        debug!(
            onsets = onsets.len(),
            median_interval,
            bpm = result.bpm,
            beats_per_bar = result.beats_per_bar,
            "estimated tempo"
        );

        TempoAnalysis {
            onsets,
            intervals,
            median_interval,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> OnsetTempoEstimator {
        OnsetTempoEstimator::new(EstimatorConfig::new(1000.0, 10, 0.01, 1.3).unwrap()).unwrap()
    }

    fn clicks(starts: &[usize], len: usize) -> Vec<f32> {
        let mut samples = vec![0.0; len];
        for &start in starts {
            samples[start..start + 10].fill(1.0);
        }
        samples
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EstimatorConfig {
            window_size: 0,
            ..EstimatorConfig::default()
        };
        assert!(OnsetTempoEstimator::new(config).is_err());
    }

    #[test]
    fn huge_window_is_undetermined() {
        let config = EstimatorConfig::from_yaml_str("window_size: 18446744073709551615").unwrap();
        let estimator = OnsetTempoEstimator::new(config).unwrap();
        assert_eq!(estimator.estimate(&[0.5; 16]), EstimationResult::undetermined());
    }

    #[test]
    fn short_buffer_is_undetermined() {
        let result = estimator().estimate(&[1.0; 19]);
        assert_eq!(result, EstimationResult::undetermined());
    }

    #[test]
    fn single_onset_is_undetermined() {
        let analysis = estimator().analyze(&clicks(&[0], 100));
        assert_eq!(analysis.onsets, vec![0]);
        assert_eq!(analysis.result, EstimationResult::undetermined());
    }

    #[test]
    fn two_onsets_use_fallback_bar() {
        // one interval of 0.5 s
        let analysis = estimator().analyze(&clicks(&[0, 500], 1000));
        assert_eq!(analysis.onsets, vec![0, 500]);
        assert_eq!(analysis.intervals.len(), 1);
        assert_eq!(analysis.result, EstimationResult::new(120.0, 4));
    }

    #[test]
    fn intervals_keep_temporal_order() {
        // gaps: 1.0 s, 0.5 s, 0.5 s, 1.0 s, 0.5 s
        let analysis = estimator().analyze(&clicks(&[0, 1000, 1500, 2000, 3000, 3500], 4000));
        assert_eq!(analysis.intervals, vec![1.0, 0.5, 0.5, 1.0, 0.5]);
        assert_eq!(analysis.median_interval, 0.5);
        assert_eq!(analysis.result, EstimationResult::new(120.0, 3));
    }
}
