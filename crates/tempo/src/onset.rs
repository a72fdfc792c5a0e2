use orbloop_audio::dsp::window_energies;
use orbloop_domain::EstimatorConfig;

/// Flags windows whose energy jumps above both the silence floor and the
/// previous window's energy scaled by the increase ratio.
#[derive(Clone, Copy, Debug)]
pub struct OnsetDetector {
    window_size: usize,
    silence_threshold: f32,
    energy_increase_ratio: f32,
}

impl OnsetDetector {
    pub fn new(window_size: usize, silence_threshold: f32, energy_increase_ratio: f32) -> Self {
        Self {
            window_size,
            silence_threshold,
            energy_increase_ratio,
        }
    }

    pub fn from_config(config: &EstimatorConfig) -> Self {
        Self::new(
            config.window_size,
            config.silence_threshold,
            config.energy_increase_ratio,
        )
    }

    /// Returns the sample index of the first sample of every onset window.
    pub fn detect(&self, samples: &[f32]) -> Vec<usize> {
        let mut onsets = Vec::new();
        let mut previous_energy = 0.0f32;

        for (index, energy) in window_energies(samples, self.window_size).enumerate() {
            if energy > self.silence_threshold
                && energy > previous_energy * self.energy_increase_ratio
            {
                onsets.push(index * self.window_size);
            }
            // updated on every window, so a sustained plateau only fires once
            previous_energy = energy;
        }

        onsets
    }
}
