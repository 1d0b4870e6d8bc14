//! utils — Python input conversion for the PyO3 bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature.
//! Series arrive from Python as numpy arrays, pandas Series, or plain
//! sequences; these helpers turn them into contiguous `f64` buffers without
//! copying when the input already is one.

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Borrow a Python 1-D array-like as a read-only `float64` numpy array.
///
/// Tries, in order: a contiguous `numpy.ndarray[float64]`, an object with a
/// `to_numpy` method (pandas), and finally any sequence of floats, which is
/// copied into a fresh array.
///
/// Errors
/// ------
/// - `TypeError` when none of the above conversions succeed.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// View a borrowed array as a contiguous slice, naming the argument on
/// failure.
#[cfg(feature = "python-bindings")]
pub fn contiguous_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>, name: &str) -> PyResult<&'a [f64]> {
    arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })
}
