pub mod dsp;
pub mod io;

pub use dsp::{downmix_to_mono, mean_square, window_energies, WindowEnergies};
pub use io::{AudioDecoder, AudioReader};
