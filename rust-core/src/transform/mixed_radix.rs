//! Arbitrary-length FFT planned by rustfft
//!
//! The planner factors the length and combines mixed-radix, Rader and
//! Bluestein algorithms, so any non-zero length is accepted.

use num_complex::Complex64;
use rustfft::FftPlanner;

use super::{ComplexKernel, Spectrum, SpectrumTransform};
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct MixedRadixFft {
    kernel: ComplexKernel,
}

impl MixedRadixFft {
    pub const NAME: &'static str = "mixed-radix planned";

    /// Plan a transform of `length` samples
    ///
    /// # Returns
    /// `Error::InvalidLength` when `length` is zero
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidLength {
                length,
                requirement: "must be non-zero",
            });
        }

        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(length);
        let inverse = planner.plan_fft_inverse(length);

        Ok(Self {
            kernel: ComplexKernel::new(forward, inverse),
        })
    }

    pub fn inverse_complex(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        self.kernel.inverse_complex(spectrum)
    }
}

impl SpectrumTransform for MixedRadixFft {
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
