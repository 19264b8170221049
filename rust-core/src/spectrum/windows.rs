//! Window functions applied to frames before a forward transform
//!
//! Tapering a frame towards zero at its edges reduces spectral leakage.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WindowType {
    /// w[n] = 1
    Rectangular,

    /// w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    Hann,

    /// w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    #[default]
    Hamming,

    /// w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,

    /// Triangle reaching zero at both ends
    Barlett,

    /// Five-term cosine sum with a flat passband, scaled to a unit peak
    Flattop,

    /// Gaussian bell; `sigma` is relative to half the window length
    Gaussian(f64),
}

fn cosine_sum(coefficients: &[f64], n: usize, length: usize) -> f64 {
    let x = 2.0 * PI * n as f64 / (length as f64 - 1.0);
    coefficients
        .iter()
        .enumerate()
        .map(|(k, &a)| {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            sign * a * (k as f64 * x).cos()
        })
        .sum()
}

impl WindowType {
    /// Window coefficient at index `n` of a window of `length` samples
    pub fn value(&self, n: usize, length: usize) -> f64 {
        if length <= 1 {
            return 1.0;
        }

        let half = (length as f64 - 1.0) / 2.0;
        match *self {
            WindowType::Rectangular => 1.0,
            WindowType::Hann => cosine_sum(&[0.5, 0.5], n, length),
            WindowType::Hamming => cosine_sum(&[0.54, 0.46], n, length),
            WindowType::Blackman => cosine_sum(&[0.42, 0.5, 0.08], n, length),
            WindowType::Barlett => 1.0 - ((n as f64 - half) / half).abs(),
            WindowType::Flattop => {
                cosine_sum(&[1.0, 1.93, 1.29, 0.388, 0.028], n, length) / 4.636
            }
            WindowType::Gaussian(sigma) => {
                let x = (n as f64 - half) / (sigma * half);
                (-0.5 * x * x).exp()
            }
        }
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    (0..length).map(|n| window_type.value(n, length)).collect()
}

/// Multiply `signal` by a window of the same length
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    if window_type == WindowType::Rectangular {
        return signal.to_vec();
    }

    signal
        .iter()
        .enumerate()
        .map(|(n, &s)| s * window_type.value(n, signal.len()))
        .collect()
}

/// Amplitude correction (M / Σw) restoring the level of a windowed tone
pub fn amplitude_correction(window_type: WindowType, length: usize) -> f64 {
    let sum: f64 = generate_window(window_type, length).iter().sum();
    if sum > 0.0 {
        length as f64 / sum
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetry_and_peak() {
        let length = 129;
        let center = length / 2;

        for window in [
            WindowType::Hann,
            WindowType::Hamming,
            WindowType::Blackman,
            WindowType::Barlett,
            WindowType::Flattop,
            WindowType::Gaussian(0.4),
        ] {
            let w = generate_window(window, length);
            assert_eq!(w.len(), length);
            for n in 0..length {
                assert!((w[n] - w[length - 1 - n]).abs() < 1e-10, "{:?} asymmetric", window);
            }
            assert!((w[center] - 1.0).abs() < 1e-10, "{:?} peak", window);
        }
    }

    #[test]
    fn test_endpoints() {
        let hann = generate_window(WindowType::Hann, 64);
        let hamming = generate_window(WindowType::Hamming, 64);
        let barlett = generate_window(WindowType::Barlett, 64);

        assert!(hann[0].abs() < 1e-12);
        assert!((hamming[0] - 0.08).abs() < 1e-12);
        assert!(barlett[63].abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(generate_window(WindowType::Hann, 0).is_empty());
        assert_eq!(generate_window(WindowType::Blackman, 1), vec![1.0]);
    }

    #[test]
    fn test_apply_window() {
        let signal = vec![2.0; 9];
        let windowed = apply_window(&signal, WindowType::Hann);

        assert_eq!(windowed.len(), 9);
        assert!(windowed[0].abs() < 1e-12);
        assert!((windowed[4] - 2.0).abs() < 1e-12);
        assert_eq!(apply_window(&signal, WindowType::Rectangular), signal);
    }

    #[test]
    fn test_amplitude_correction() {
        assert!((amplitude_correction(WindowType::Rectangular, 100) - 1.0).abs() < 1e-12);

        let hann = amplitude_correction(WindowType::Hann, 1024);
        assert!(hann > 1.9 && hann < 2.1);
    }
}
