//! Configuration parameters for framed spectral analysis

use crate::error::{Error, Result};
use crate::framing::BoundaryPolicy;
use crate::spectrum::windows::WindowType;
use crate::transform::TransformHint;

/// Spectrogram configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrogramConfig {
    /// Samples per frame, also the transform length (default: 1024)
    pub frame_length: usize,

    /// Samples shared by adjacent frames (default: 512)
    pub overlap: usize,

    /// Window applied to each frame before the transform (default: Hamming)
    pub window: WindowType,

    /// Transform selection hint (default: Speed, power-of-two lengths only)
    pub hint: TransformHint,

    /// Whether the last frame may end exactly at the source length
    pub boundary: BoundaryPolicy,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            frame_length: 1024,
            overlap: 512,
            window: WindowType::Hamming,
            hint: TransformHint::Speed,
            boundary: BoundaryPolicy::Exclusive,
        }
    }
}

impl SpectrogramConfig {
    /// Distance between consecutive frame starts
    pub fn hop_size(&self) -> usize {
        self.frame_length.saturating_sub(self.overlap)
    }

    /// Check that frame length and overlap leave a positive hop
    pub fn validate(&self) -> Result<()> {
        if self.frame_length == 0 || self.overlap >= self.frame_length {
            return Err(Error::InvalidFraming {
                samples_per_frame: self.frame_length,
                samples_per_overlap: self.overlap,
            });
        }
        Ok(())
    }
}
