//! Real-input FFT returning only the non-negative frequency bins

use std::sync::Arc;

use num_complex::Complex64;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};

use super::{check_length, Spectrum, SpectrumTransform};
use crate::error::{Error, Result};

/// Real-to-complex transform producing `N/2 + 1` bins
///
/// The negative-frequency half of a real signal's spectrum is the complex
/// conjugate of the positive half, so it is neither computed nor stored.
#[derive(Clone)]
pub struct RealInputFft {
    length: usize,
    r2c: Arc<dyn RealToComplex<f64>>,
    c2r: Arc<dyn ComplexToReal<f64>>,
}

impl RealInputFft {
    pub const NAME: &'static str = "real-input";

    /// Plan a transform of `length` real samples
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

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(length);
        let c2r = planner.plan_fft_inverse(length);

        Ok(Self { length, r2c, c2r })
    }

    /// Rebuild the full `N`-bin spectrum from the stored half
    pub fn expand_spectrum(&self, half: &[Complex64]) -> Result<Spectrum> {
        check_length(self.spectrum_len(), half.len())?;

        let mut full = Vec::with_capacity(self.length);
        full.extend_from_slice(half);
        // Mirror conjugates of bins 1..ceil(N/2) into the upper half
        for k in (self.length / 2 + 1)..self.length {
            full.push(half[self.length - k].conj());
        }
        Ok(full)
    }
}

fn backend(err: realfft::FftError) -> Error {
    Error::Backend(err.to_string())
}

impl SpectrumTransform for RealInputFft {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn length(&self) -> usize {
        self.length
    }

    fn spectrum_len(&self) -> usize {
        self.length / 2 + 1
    }

    fn forward(&self, samples: &[f64]) -> Result<Spectrum> {
        check_length(self.length, samples.len())?;

        // The kernel uses its input as workspace
        let mut input = samples.to_vec();
        let mut output = self.r2c.make_output_vec();
        let mut scratch = self.r2c.make_scratch_vec();
        self.r2c
            .process_with_scratch(&mut input, &mut output, &mut scratch)
            .map_err(backend)?;

        Ok(output)
    }

    fn inverse(&self, spectrum: &[Complex64]) -> Result<Vec<f64>> {
        check_length(self.spectrum_len(), spectrum.len())?;

        let mut input = spectrum.to_vec();
        // DC and (for even N) Nyquist bins of a real signal are purely real
        input[0].im = 0.0;
        if self.length % 2 == 0 {
            if let Some(last) = input.last_mut() {
                last.im = 0.0;
            }
        }

        let mut output = self.c2r.make_output_vec();
        let mut scratch = self.c2r.make_scratch_vec();
        self.c2r
            .process_with_scratch(&mut input, &mut output, &mut scratch)
            .map_err(backend)?;

        let scale = 1.0 / self.length as f64;
        for sample in output.iter_mut() {
            *sample *= scale;
        }
        Ok(output)
    }
}
