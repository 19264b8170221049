//! Windowing, spectrum conversions and spectrograms

pub mod analysis;
pub mod spectrogram;
pub mod windows;

pub use analysis::{bin_frequency, frequency_axis, magnitude, magnitude_db, power};
pub use spectrogram::{analyze, Spectrogram};
pub use windows::{apply_window, generate_window, WindowType};
