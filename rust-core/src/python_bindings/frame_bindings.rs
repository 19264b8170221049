//! Python bindings for framing and spectrograms

use numpy::{PyArray2, PyReadonlyArray1};
use pyo3::prelude::*;

use super::enum_bindings::{PyTransformHint, PyWindowType};
use crate::config::SpectrogramConfig;
use crate::framing::{self, BoundaryPolicy};
use crate::spectrum;

fn policy(inclusive: bool) -> BoundaryPolicy {
    if inclusive {
        BoundaryPolicy::Inclusive
    } else {
        BoundaryPolicy::Exclusive
    }
}

/// Frame boundaries as (begin, end) pairs
///
/// Args:
///     source_len: Number of samples in the signal
///     samples_per_frame: Frame length
///     samples_per_overlap: Samples shared by adjacent frames
///     inclusive: Allow the last frame to end exactly at source_len
#[pyfunction]
#[pyo3(signature = (source_len, samples_per_frame, samples_per_overlap=0, inclusive=false))]
pub fn frame_bounds(
    source_len: usize,
    samples_per_frame: usize,
    samples_per_overlap: usize,
    inclusive: bool,
) -> PyResult<Vec<(usize, usize)>> {
    let bounds = framing::frame_bounds(
        source_len,
        samples_per_frame,
        samples_per_overlap,
        policy(inclusive),
    )?;
    Ok(bounds.into_iter().map(|r| (r.start, r.end)).collect())
}

/// Spectrogram magnitude in dB, shape (frames, bins)
#[pyfunction]
#[pyo3(signature = (
    signal,
    frame_length=1024,
    overlap=512,
    window=PyWindowType::Hamming,
    hint=PyTransformHint::Speed,
    inclusive=false,
    reference=1.0
))]
#[allow(clippy::too_many_arguments)]
pub fn spectrogram_db<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    frame_length: usize,
    overlap: usize,
    window: PyWindowType,
    hint: PyTransformHint,
    inclusive: bool,
    reference: f64,
) -> PyResult<&'py PyArray2<f64>> {
    let config = SpectrogramConfig {
        frame_length,
        overlap,
        window: window.into(),
        hint: hint.into(),
        boundary: policy(inclusive),
    };

    let spectrogram = spectrum::analyze(signal.as_slice()?, &config)?;
    Ok(PyArray2::from_owned_array(py, spectrogram.magnitude_db(reference)))
}
