//! Error types for framing and spectral transforms

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transform length does not satisfy the algorithm's structural requirement
    #[error("Invalid transform length {length}: {requirement}")]
    InvalidLength {
        length: usize,
        requirement: &'static str,
    },

    /// Input passed to forward/inverse does not match the configured length
    #[error("Length mismatch: transform expects {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Frame length and overlap leave no positive hop size
    #[error("Invalid framing: {samples_per_frame} samples per frame with {samples_per_overlap} overlap gives no forward hop")]
    InvalidFraming {
        samples_per_frame: usize,
        samples_per_overlap: usize,
    },

    #[error("Invalid frame bounds [{begin}, {end}) for source of {source_len} samples")]
    InvalidFrameBounds {
        begin: usize,
        end: usize,
        source_len: usize,
    },

    #[error("{transform} does not accept complex input")]
    UnsupportedInput { transform: &'static str },

    #[error("No transform registered for hint {hint}")]
    NoTransformForHint { hint: String },

    /// Failure reported by the underlying FFT kernel
    #[error("FFT backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;
