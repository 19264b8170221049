//! Python bindings for spectral transforms

use num_complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::enum_bindings::PyTransformHint;
use crate::transform::{SpectrumTransform, TransformSelector};

/// Transform selected for a fixed length, exposed to Python
#[pyclass(name = "SpectrumTransform")]
pub struct PySpectrumTransform {
    transform: Box<dyn SpectrumTransform>,
}

#[pymethods]
impl PySpectrumTransform {
    /// Select a transform
    ///
    /// Args:
    ///     length: Transform length (power of two for the Speed hint)
    ///     hint: Optimization hint used to pick the implementation
    #[new]
    #[pyo3(signature = (length, hint=PyTransformHint::Speed))]
    fn new(length: usize, hint: PyTransformHint) -> PyResult<Self> {
        let transform = TransformSelector::new().select_with_hint(length, hint.into())?;
        Ok(Self { transform })
    }

    /// Forward transform of real samples
    ///
    /// Args:
    ///     signal: Exactly `length` samples as numpy array
    ///
    /// Returns:
    ///     Complex spectrum as numpy array
    fn forward<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let spectrum = self.transform.forward(signal.as_slice()?)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Inverse transform back to real samples
    fn inverse<'py>(
        &self,
        py: Python<'py>,
        spectrum: PyReadonlyArray1<Complex64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let samples = self.transform.inverse(spectrum.as_slice()?)?;
        Ok(PyArray1::from_vec(py, samples))
    }

    /// Number of input samples
    #[getter]
    fn length(&self) -> usize {
        self.transform.length()
    }

    /// Number of spectrum bins
    #[getter]
    fn spectrum_len(&self) -> usize {
        self.transform.spectrum_len()
    }

    /// Name of the selected implementation
    #[getter]
    fn name(&self) -> &'static str {
        self.transform.name()
    }
}
