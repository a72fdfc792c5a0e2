use serde::{Deserialize, Serialize};

/// A recorded clip held by an orb.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Take {
    pub name: String,
    pub sample_rate: u32,
    /// Mono samples.
    pub samples: Vec<f32>,
}

impl Take {
    pub fn new(name: impl Into<String>, sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            sample_rate,
            samples,
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Formats the name of the `index`th take of an orb, e.g. `A-03`.
pub fn take_name(label: &str, index: u32) -> String {
    format!("{}-{:02}", label, index)
}
