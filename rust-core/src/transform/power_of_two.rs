//! Radix-4 FFT restricted to power-of-two lengths

use std::sync::Arc;

use num_complex::Complex64;
use rustfft::algorithm::Radix4;
use rustfft::FftDirection;

use super::{ComplexKernel, Spectrum, SpectrumTransform};
use crate::error::{Error, Result};

/// Fastest kernel available here; twiddle tables are built once per instance
#[derive(Clone)]
pub struct PowerOfTwoFft {
    kernel: ComplexKernel,
}

impl PowerOfTwoFft {
    pub const NAME: &'static str = "power-of-two radix-4";

    /// Plan a transform of `length` samples
    ///
    /// # Returns
    /// `Error::InvalidLength` when `length` is not a power of two
    pub fn new(length: usize) -> Result<Self> {
        if !length.is_power_of_two() {
            return Err(Error::InvalidLength {
                length,
                requirement: "must be a power of two",
            });
        }

        let forward = Arc::new(Radix4::<f64>::new(length, FftDirection::Forward));
        let inverse = Arc::new(Radix4::<f64>::new(length, FftDirection::Inverse));

        Ok(Self {
            kernel: ComplexKernel::new(forward, inverse),
        })
    }

    /// Inverse transform without discarding the imaginary part
    pub fn inverse_complex(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        self.kernel.inverse_complex(spectrum)
    }
}

impl SpectrumTransform for PowerOfTwoFft {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn length(&self) -> usize {
        self.kernel.len()
    }

    fn forward(&self, samples: &[f64]) -> Result<Spectrum> {
        self.kernel.forward(samples)
    }

    fn forward_complex(&self, samples: &[Complex64]) -> Result<Spectrum> {
        self.kernel.forward_complex(samples)
    }

    fn inverse(&self, spectrum: &[Complex64]) -> Result<Vec<f64>> {
        self.kernel.inverse(spectrum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::{max_relative_error, naive_dft, sinusoid};

    #[test]
    fn test_rejects_non_power_of_two() {
        for length in [0, 3, 6, 100, 1000] {
            assert!(matches!(
                PowerOfTwoFft::new(length),
                Err(Error::InvalidLength { .. })
            ));
        }
        assert!(PowerOfTwoFft::new(1).is_ok());
        assert!(PowerOfTwoFft::new(1024).is_ok());
    }

    #[test]
    fn test_matches_direct_dft() {
        let signal = sinusoid(64, 5.0);
        let fft = PowerOfTwoFft::new(64).unwrap();

        let spectrum = fft.forward(&signal).unwrap();
        let expected = naive_dft(&signal);

        assert_eq!(spectrum.len(), 64);
        for (a, b) in spectrum.iter().zip(&expected) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_sinusoid_peak_and_dc() {
        let signal = sinusoid(256, 8.0);
        let fft = PowerOfTwoFft::new(256).unwrap();
        let spectrum = fft.forward(&signal).unwrap();

        // Unnormalized: DC is the sum, a unit sine peaks at N/2
        assert!((spectrum[0].re - 0.25 * 256.0).abs() < 1e-9);
        assert!((spectrum[8].norm() - 128.0).abs() < 1e-9);
        assert!((spectrum[256 - 8].norm() - 128.0).abs() < 1e-9);
        assert!(spectrum[20].norm() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let signal = sinusoid(1024, 13.0);
        let fft = PowerOfTwoFft::new(1024).unwrap();

        let restored = fft.inverse(&fft.forward(&signal).unwrap()).unwrap();
        assert!(max_relative_error(&signal, &restored) < 1e-9);
    }

    #[test]
    fn test_complex_round_trip() {
        let input: Vec<Complex64> = (0..16)
            .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
            .collect();
        let fft = PowerOfTwoFft::new(16).unwrap();

        let restored = fft
            .inverse_complex(&fft.forward_complex(&input).unwrap())
            .unwrap();
        for (a, b) in input.iter().zip(&restored) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let fft = PowerOfTwoFft::new(8).unwrap();

        assert_eq!(
            fft.forward(&[0.0; 7]).unwrap_err(),
            Error::LengthMismatch {
                expected: 8,
                actual: 7
            }
        );
        assert!(matches!(
            fft.inverse(&[Complex64::new(0.0, 0.0); 9]),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
