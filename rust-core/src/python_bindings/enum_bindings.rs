//! Enum parameters exposed to Python

use pyo3::prelude::*;

use crate::spectrum::WindowType;
use crate::transform::TransformHint;

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Rectangular,
    Hann,
    Hamming,
    Blackman,
    Barlett,
    Flattop,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Rectangular => WindowType::Rectangular,
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::Barlett => WindowType::Barlett,
            PyWindowType::Flattop => WindowType::Flattop,
        }
    }
}

/// Transform selection hint exposed to Python
#[pyclass(name = "TransformHint")]
#[derive(Clone)]
pub enum PyTransformHint {
    Speed,
    Memory,
    AnyLength,
}

impl From<PyTransformHint> for TransformHint {
    fn from(py_hint: PyTransformHint) -> Self {
        match py_hint {
            PyTransformHint::Speed => TransformHint::Speed,
            PyTransformHint::Memory => TransformHint::Memory,
            PyTransformHint::AnyLength => TransformHint::AnyLength,
        }
    }
}
