use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Tuning for the onset and tempo estimator.
///
/// Fields missing from a config file fall back to [`EstimatorConfig::default`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Sample rate of the analyzed buffer in Hz.
    pub sample_rate: f32,
    /// Samples per analysis window.
    pub window_size: usize,
    /// Minimum mean-squared window energy considered audible.
    pub silence_threshold: f32,
    /// Factor by which a window's energy must exceed the previous window's.
    pub energy_increase_ratio: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            window_size: 1024,
            silence_threshold: 0.01,
            energy_increase_ratio: 1.3,
        }
    }
}

impl EstimatorConfig {
    pub fn new(
        sample_rate: f32,
        window_size: usize,
        silence_threshold: f32,
        energy_increase_ratio: f32,
    ) -> Result<Self, DomainError> {
        let config = Self {
            sample_rate,
            window_size,
            silence_threshold,
            energy_increase_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(DomainError::validation(
                "sample rate must be a positive number",
            ));
        }
        if self.window_size == 0 {
            return Err(DomainError::validation("window size must be at least 1"));
        }
        if !self.silence_threshold.is_finite() || self.silence_threshold < 0.0 {
            return Err(DomainError::validation(
                "silence threshold must be zero or positive",
            ));
        }
        if !self.energy_increase_ratio.is_finite() || self.energy_increase_ratio <= 1.0 {
            return Err(DomainError::validation(
                "energy increase ratio must be greater than 1.0",
            ));
        }
        Ok(())
    }

    pub fn with_sample_rate(self, sample_rate: f32) -> Self {
        Self {
            sample_rate,
            ..self
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, DomainError> {
        let config: Self = serde_yaml::from_str(source)
            .map_err(|err| DomainError::Serialization(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> Result<Self, DomainError> {
        let config: Self = serde_json::from_str(source)
            .map_err(|err| DomainError::Serialization(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, picking the parser from the file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            Some("json") => Self::from_json_str(&source),
            other => Err(DomainError::validation(format!(
                "unsupported config extension {:?}",
                other
            ))),
        }
    }
}
