//! Owned sample storage that frames borrow from

use std::f64::consts::PI;
use std::ops::Index;

use crate::error::Result;
use crate::framing::FrameSequence;

/// Contiguous block of samples resident in memory
///
/// Frames created from a buffer borrow it, so the buffer cannot be mutated
/// or dropped while any of them are alive.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl SampleBuffer {
    /// Wrap existing samples
    ///
    /// # Arguments
    /// * `samples` - Sample values
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Generate a sine wave
    ///
    /// # Arguments
    /// * `frequency` - Tone frequency in Hz
    /// * `amplitude` - Peak amplitude
    /// * `sample_rate` - Sample rate in Hz
    /// * `length` - Number of samples
    pub fn sine(frequency: f64, amplitude: f64, sample_rate: f64, length: usize) -> Self {
        let step = 2.0 * PI * frequency / sample_rate;
        let samples = (0..length)
            .map(|n| amplitude * (step * n as f64).sin())
            .collect();

        Self::new(samples, sample_rate)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Mutable access; only possible while no frame borrows the buffer
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Signal duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate > 0.0 {
            self.samples.len() as f64 / self.sample_rate
        } else {
            0.0
        }
    }

    /// Divide this buffer into frames with the default boundary policy
    pub fn frames(
        &self,
        samples_per_frame: usize,
        samples_per_overlap: usize,
    ) -> Result<FrameSequence<'_>> {
        FrameSequence::new(&self.samples, samples_per_frame, samples_per_overlap)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.samples
    }
}

impl Index<usize> for SampleBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl AsRef<[f64]> for SampleBuffer {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
