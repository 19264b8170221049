//! Spectral Frames - framing and FFT front end for spectral analysis
//!
//! Divides a sample buffer into overlapping, non-owning frames and computes
//! spectra through interchangeable FFT implementations.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod config;
pub mod error;
pub mod framing;
pub mod source;
pub mod spectrum;
pub mod transform;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::SpectrogramConfig;
pub use error::{Error, Result};
pub use framing::{divide, BoundaryPolicy, Frame, FrameSequence};
pub use source::SampleBuffer;
pub use spectrum::{Spectrogram, WindowType};
pub use transform::{
    select_transform, Spectrum, SpectrumTransform, TransformHint, TransformSelector,
};
