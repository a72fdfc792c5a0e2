use std::slice::ChunksExact;

/// Mean of the squared samples. No square root is taken: onset thresholds are
/// tuned against this quantity.
pub fn mean_square(window: &[f32]) -> f32 {
    if window.is_empty() {
        return 0.0;
    }
    let mut energy = 0.0f32;
    for sample in window {
        energy += sample * sample;
    }
    energy / window.len() as f32
}

/// Lazily yields one energy value per complete, non-overlapping window.
#[derive(Clone, Debug)]
pub struct WindowEnergies<'a> {
    windows: ChunksExact<'a, f32>,
}

impl<'a> Iterator for WindowEnergies<'a> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.windows.next().map(mean_square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<'a> ExactSizeIterator for WindowEnergies<'a> {}

/// Splits `samples` into windows of `window_size` samples and yields their
/// mean-squared energy in buffer order. A trailing partial window is skipped.
///
/// # Panics
///
/// Panics if `window_size` is zero.
pub fn window_energies(samples: &[f32], window_size: usize) -> WindowEnergies<'_> {
    assert!(window_size > 0, "window size must be non-zero");
    WindowEnergies {
        windows: samples.chunks_exact(window_size),
    }
}

/// Averages interleaved frames into a single channel. A trailing partial frame
/// is dropped.
pub fn downmix_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    let channels = channels as usize;
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}
