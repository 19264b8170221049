//! Per-frame spectra of a framed signal
//!
//! Rows are frames in time order, columns are frequency bins.

use ndarray::{Array2, ArrayView1, Axis};
use num_complex::Complex64;

use super::analysis::to_db;
use super::windows::{apply_window, WindowType};
use crate::config::SpectrogramConfig;
use crate::error::Result;
use crate::framing::FrameSequence;
use crate::transform::{check_length, SpectrumTransform, TransformSelector};

/// Complex spectrogram
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    data: Array2<Complex64>,
    transform_length: usize,
}

impl Spectrogram {
    /// Transform every frame of `frames`
    ///
    /// # Arguments
    /// * `frames` - Frame sequence; its frame length must equal the transform length
    /// * `transform` - Transform applied to each windowed frame
    /// * `window` - Window applied before the transform
    ///
    /// # Returns
    /// `Error::LengthMismatch` when the frame length and transform length differ
    pub fn compute(
        frames: &FrameSequence<'_>,
        transform: &dyn SpectrumTransform,
        window: WindowType,
    ) -> Result<Self> {
        if !frames.is_empty() {
            check_length(transform.length(), frames.samples_per_frame())?;
        }

        let bins = transform.spectrum_len();
        let mut data = Array2::<Complex64>::zeros((frames.len(), bins));

        for (frame, mut row) in frames.iter().zip(data.axis_iter_mut(Axis(0))) {
            let windowed = apply_window(frame.samples(), window);
            let spectrum = transform.forward(&windowed)?;
            row.assign(&ArrayView1::from(&spectrum[..]));
        }

        log::debug!(
            "Computed spectrogram: {} frames x {} bins ({})",
            frames.len(),
            bins,
            transform.name()
        );

        Ok(Self {
            data,
            transform_length: transform.length(),
        })
    }

    pub fn frame_count(&self) -> usize {
        self.data.nrows()
    }

    pub fn bin_count(&self) -> usize {
        self.data.ncols()
    }

    /// Length of the transform each row was computed with
    pub fn transform_length(&self) -> usize {
        self.transform_length
    }

    /// Spectrum of frame `index`
    pub fn spectrum(&self, index: usize) -> Option<ArrayView1<'_, Complex64>> {
        (index < self.frame_count()).then(|| self.data.row(index))
    }

    pub fn as_array(&self) -> &Array2<Complex64> {
        &self.data
    }

    pub fn into_array(self) -> Array2<Complex64> {
        self.data
    }

    /// |X| for every frame and bin
    pub fn magnitude(&self) -> Array2<f64> {
        self.data.mapv(|c| c.norm())
    }

    /// 20*log10(|X|/reference) for every frame and bin
    pub fn magnitude_db(&self, reference: f64) -> Array2<f64> {
        self.data.mapv(|c| to_db(c.norm(), reference))
    }
}

/// Frame `samples`, select a transform and compute the spectrogram
///
/// # Arguments
/// * `samples` - Source samples
/// * `config` - Framing, window and transform selection parameters
pub fn analyze(samples: &[f64], config: &SpectrogramConfig) -> Result<Spectrogram> {
    config.validate()?;

    let frames = FrameSequence::with_policy(
        samples,
        config.frame_length,
        config.overlap,
        config.boundary,
    )?;
    let transform = TransformSelector::new().select_with_hint(config.frame_length, config.hint)?;

    Spectrogram::compute(&frames, transform.as_ref(), config.window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::spectrum::analysis::bin_frequency;
    use crate::transform::{PowerOfTwoFft, RealInputFft, TransformHint};
    use std::f64::consts::PI;

    fn tone(freq_hz: f64, sample_rate: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_shape() {
        let signal = tone(1000.0, 8000.0, 4096);
        let frames = FrameSequence::new(&signal, 256, 128).unwrap();
        let fft = PowerOfTwoFft::new(256).unwrap();

        let spec = Spectrogram::compute(&frames, &fft, WindowType::Hann).unwrap();

        assert_eq!(spec.frame_count(), frames.len());
        assert_eq!(spec.bin_count(), 256);
        assert_eq!(spec.transform_length(), 256);
        assert!(spec.spectrum(frames.len()).is_none());
    }

    #[test]
    fn test_tone_peak_in_every_frame() {
        let sample_rate = 8000.0;
        let signal = tone(1000.0, sample_rate, 8192);
        let frames = FrameSequence::new(&signal, 512, 256).unwrap();
        let fft = RealInputFft::new(512).unwrap();

        let spec = Spectrogram::compute(&frames, &fft, WindowType::Hamming).unwrap();
        let magnitude = spec.magnitude();

        assert_eq!(spec.bin_count(), 257);
        for row in magnitude.axis_iter(Axis(0)) {
            let (peak, _) = row
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
                .unwrap();
            assert!((bin_frequency(peak, 512, sample_rate) - 1000.0).abs() < 20.0);
        }
    }

    #[test]
    fn test_frame_length_must_match_transform() {
        let signal = vec![0.0; 1024];
        let frames = FrameSequence::new(&signal, 128, 0).unwrap();
        let fft = PowerOfTwoFft::new(256).unwrap();

        assert!(matches!(
            Spectrogram::compute(&frames, &fft, WindowType::Rectangular),
            Err(Error::LengthMismatch { expected: 256, actual: 128 })
        ));
    }

    #[test]
    fn test_empty_frames_give_empty_spectrogram() {
        let signal = vec![0.0; 100];
        let frames = FrameSequence::new(&signal, 256, 0).unwrap();
        let fft = PowerOfTwoFft::new(256).unwrap();

        let spec = Spectrogram::compute(&frames, &fft, WindowType::Hann).unwrap();
        assert_eq!(spec.frame_count(), 0);
        assert_eq!(spec.bin_count(), 256);
    }

    #[test]
    fn test_analyze_with_config() {
        let signal = tone(440.0, 44100.0, 44100);
        let config = SpectrogramConfig {
            frame_length: 1000,
            overlap: 500,
            hint: TransformHint::Memory,
            ..Default::default()
        };

        let spec = analyze(&signal, &config).unwrap();
        assert_eq!(spec.bin_count(), 501);
        assert_eq!(spec.frame_count(), 87);

        let db = spec.magnitude_db(1.0);
        assert_eq!(db.dim(), (87, 501));
    }

    #[test]
    fn test_analyze_speed_hint_needs_power_of_two() {
        let signal = vec![0.0; 4000];
        let config = SpectrogramConfig {
            frame_length: 1000,
            overlap: 0,
            ..Default::default()
        };

        assert!(matches!(
            analyze(&signal, &config),
            Err(Error::InvalidLength { length: 1000, .. })
        ));
    }
}
