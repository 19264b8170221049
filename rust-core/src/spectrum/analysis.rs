//! Conversions from complex spectra to magnitude, power and frequency axes

use num_complex::Complex64;

/// |X[k]| for every bin
pub fn magnitude(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// |X[k]|² for every bin
pub fn power(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm_sqr()).collect()
}

/// Magnitude in dB: 20*log10(|X[k]|/reference)
pub fn magnitude_db(spectrum: &[Complex64], reference: f64) -> Vec<f64> {
    spectrum.iter().map(|c| to_db(c.norm(), reference)).collect()
}

/// Convert one magnitude to dB, clamped to avoid log(0)
pub fn to_db(magnitude: f64, reference: f64) -> f64 {
    20.0 * (magnitude.max(1e-10) / reference).log10()
}

/// Frequency in Hz of bin `bin` for a transform of `length` samples
pub fn bin_frequency(bin: usize, length: usize, sample_rate: f64) -> f64 {
    bin as f64 * sample_rate / length as f64
}

/// Frequencies in Hz of the first `num_bins` bins
///
/// # Arguments
/// * `num_bins` - Number of bins, e.g. `spectrum_len()` of a transform
/// * `length` - Transform length N
/// * `sample_rate` - Sample rate in Hz
pub fn frequency_axis(num_bins: usize, length: usize, sample_rate: f64) -> Vec<f64> {
    (0..num_bins)
        .map(|bin| bin_frequency(bin, length, sample_rate))
        .collect()
}

/// Index and magnitude of the strongest bin, ignoring DC
pub fn peak_bin(spectrum: &[Complex64]) -> Option<(usize, f64)> {
    spectrum
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, c)| (k, c.norm()))
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_and_power() {
        let spectrum = vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, -2.0)];

        assert_eq!(magnitude(&spectrum), vec![5.0, 2.0]);
        assert_eq!(power(&spectrum), vec![25.0, 4.0]);
    }

    #[test]
    fn test_db_conversion() {
        let spectrum = vec![Complex64::new(10.0, 0.0), Complex64::new(0.0, 0.0)];
        let db = magnitude_db(&spectrum, 1.0);

        assert!((db[0] - 20.0).abs() < 1e-12);
        // Zero clamps to 1e-10
        assert!((db[1] + 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_axis() {
        let axis = frequency_axis(513, 1024, 48000.0);

        assert_eq!(axis.len(), 513);
        assert_eq!(axis[0], 0.0);
        assert!((axis[512] - 24000.0).abs() < 1e-9);
        assert!((bin_frequency(1, 1024, 48000.0) - 46.875).abs() < 1e-12);
    }

    #[test]
    fn test_peak_bin() {
        let spectrum = vec![
            Complex64::new(100.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 7.0),
            Complex64::new(2.0, 0.0),
        ];

        assert_eq!(peak_bin(&spectrum), Some((2, 7.0)));
        assert_eq!(peak_bin(&spectrum[..1]), None);
    }
}
