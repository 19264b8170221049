//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::Error;

mod enum_bindings;
mod frame_bindings;
mod transform_bindings;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn spectral_frames(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<transform_bindings::PySpectrumTransform>()?;
    m.add_class::<enum_bindings::PyWindowType>()?;
    m.add_class::<enum_bindings::PyTransformHint>()?;

    m.add_function(wrap_pyfunction!(frame_bindings::frame_bounds, m)?)?;
    m.add_function(wrap_pyfunction!(frame_bindings::spectrogram_db, m)?)?;

    Ok(())
}
