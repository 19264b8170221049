//! Spectral transform capability and its FFT implementations
//!
//! All implementations share one numeric convention: `forward` computes
//! the unnormalized DFT `X[j] = sum x[i] * exp(-2πi·ij/N)` and `inverse`
//! applies the `1/N` scaling, so `inverse(forward(x)) == x` up to
//! floating-point error.

pub mod mixed_radix;
pub mod power_of_two;
pub mod real;
pub mod selector;

use std::sync::Arc;

use num_complex::Complex64;
use rustfft::{Fft, Length};

use crate::error::{Error, Result};

pub use mixed_radix::MixedRadixFft;
pub use power_of_two::PowerOfTwoFft;
pub use real::RealInputFft;
pub use selector::{select_transform, TransformConstructor, TransformHint, TransformSelector};

/// Complex frequency-domain values; bin `j` sits at `j * sample_rate / N`
pub type Spectrum = Vec<Complex64>;

/// Computes spectra of a fixed, construction-time length
pub trait SpectrumTransform: Send + Sync {
    /// Implementation name, for logging and diagnostics
    fn name(&self) -> &'static str;

    /// Number of time-domain samples accepted by `forward`
    fn length(&self) -> usize;

    /// Number of bins produced by `forward` and accepted by `inverse`
    fn spectrum_len(&self) -> usize {
        self.length()
    }

    /// Transform real samples into a spectrum
    ///
    /// # Returns
    /// `Error::LengthMismatch` unless `samples.len() == self.length()`
    fn forward(&self, samples: &[f64]) -> Result<Spectrum>;

    /// Transform complex samples into a spectrum
    fn forward_complex(&self, _samples: &[Complex64]) -> Result<Spectrum> {
        Err(Error::UnsupportedInput {
            transform: self.name(),
        })
    }

    /// Reconstruct real samples from a spectrum produced by `forward`
    fn inverse(&self, spectrum: &[Complex64]) -> Result<Vec<f64>>;
}

pub(crate) fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, actual })
    }
}

/// Forward/inverse plan pair for complex-to-complex kernels
#[derive(Clone)]
pub(crate) struct ComplexKernel {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl ComplexKernel {
    pub(crate) fn new(forward: Arc<dyn Fft<f64>>, inverse: Arc<dyn Fft<f64>>) -> Self {
        Self { forward, inverse }
    }

    pub(crate) fn len(&self) -> usize {
        self.forward.len()
    }

    fn run(fft: &dyn Fft<f64>, buffer: &mut [Complex64]) {
        let mut scratch = vec![Complex64::new(0.0, 0.0); fft.get_inplace_scratch_len()];
        fft.process_with_scratch(buffer, &mut scratch);
    }

    pub(crate) fn forward(&self, samples: &[f64]) -> Result<Spectrum> {
        check_length(self.len(), samples.len())?;

        let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        Self::run(self.forward.as_ref(), &mut buffer);
        Ok(buffer)
    }

    pub(crate) fn forward_complex(&self, samples: &[Complex64]) -> Result<Spectrum> {
        check_length(self.len(), samples.len())?;

        let mut buffer = samples.to_vec();
        Self::run(self.forward.as_ref(), &mut buffer);
        Ok(buffer)
    }

    /// Inverse transform scaled by `1/N`, keeping the complex result
    pub(crate) fn inverse_complex(&self, spectrum: &[Complex64]) -> Result<Vec<Complex64>> {
        check_length(self.len(), spectrum.len())?;

        let mut buffer = spectrum.to_vec();
        Self::run(self.inverse.as_ref(), &mut buffer);

        let scale = 1.0 / self.len() as f64;
        for value in buffer.iter_mut() {
            *value *= scale;
        }
        Ok(buffer)
    }

    pub(crate) fn inverse(&self, spectrum: &[Complex64]) -> Result<Vec<f64>> {
        Ok(self
            .inverse_complex(spectrum)?
            .into_iter()
            .map(|c| c.re)
            .collect())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length() {
        assert!(check_length(8, 8).is_ok());
        assert_eq!(
            check_length(8, 7),
            Err(Error::LengthMismatch {
                expected: 8,
                actual: 7
            })
        );
    }
}
