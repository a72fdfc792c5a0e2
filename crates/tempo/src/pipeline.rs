use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use orbloop_audio::io::AudioDecoder;
use orbloop_domain::{EstimatorConfig, TempoReport};

use crate::estimator::OnsetTempoEstimator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempoJob {
    pub audio_path: String,
}

/// Decodes clips from disk and estimates their tempo.
pub struct TempoPipeline {
    config: EstimatorConfig,
}

impl TempoPipeline {
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configured sample rate is replaced by the decoded clip's rate.
    #[instrument(skip(self))]
    pub fn analyze(&self, job: &TempoJob) -> Result<TempoReport> {
        info!("loading audio path={}", job.audio_path);
        let audio = AudioDecoder::open(&job.audio_path)?;
        let mono = audio.to_mono();
        let estimator =
            OnsetTempoEstimator::new(self.config.with_sample_rate(audio.sample_rate as f32))?;
        let analysis = estimator.analyze(&mono);
        info!(result = %analysis.result, "analyzed clip");
        Ok(TempoReport {
            source: job.audio_path.clone(),
            sample_rate: audio.sample_rate,
            channels: audio.channels,
            duration_seconds: audio.duration_seconds(),
            onsets: analysis.onsets.len(),
            result: analysis.result,
        })
    }
}

impl Default for TempoPipeline {
    fn default() -> Self {
        Self {
            config: EstimatorConfig::default(),
        }
    }
}
