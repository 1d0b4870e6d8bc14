//! cochrane_orcutt — corrected simple regression for autocorrelated series, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the Cochrane–Orcutt corrector to Python via the `_cochrane_orcutt`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing classes and the `regression` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`regression`) as the public crate
//!   surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_cochrane_orcutt` Python extension.
//! - Create and register the `regression` submodule under `cochrane_orcutt`
//!   so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in `regression`; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - Python-visible results mirror the Rust record: the six fields are
//!   available both as attributes and by key (`fit["slope"]`).
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_cochrane_orcutt.regression` and are
//!   typically wrapped by a thin pure-Python facade.
//! - Errors from core Rust code are propagated as [`COError`] internally and
//!   converted to `PyErr` at the PyO3 boundary (`ValueError`, or `KeyError`
//!   for unknown result keys).
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`regression`] and can
//!   ignore the items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in `regression` and by the
//!   integration tests under `tests/`. The PyO3 wrappers add no arithmetic
//!   of their own.
//!
//! [`COError`]: crate::regression::COError

pub mod regression;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyDict};

#[cfg(feature = "python-bindings")]
use crate::{
    regression::{
        COField, COOptions, COOutcome, DegeneracyPolicy, LinRegress, linregress,
    },
    utils::{contiguous_slice, extract_f64_array},
};

/// CochraneOrcutt — Python-facing wrapper for the corrected regression.
///
/// Purpose
/// -------
/// Run one Cochrane–Orcutt correction pass on Python inputs and expose the
/// resulting [`COOutcome`] with both attribute and key access.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `CochraneOrcutt(yt, xt, mean=False, degeneracy="propagate", verbose=False)`:
/// - `yt`, `xt`: `&PyAny`
///   One-dimensional array-likes of `f64` of equal length ≥ 3.
/// - `mean`: `bool`
///   Mean-centre `xt` before fitting.
/// - `degeneracy`: `Option<&str>`
///   `"propagate"` (NaN fields for constant inputs) or `"reject"`
///   (raise `ValueError`).
/// - `verbose`: `bool`
///   Log per-stage diagnostics when built with `obs_slog`.
///
/// Fields
/// ------
/// - `inner`: [`COOutcome`]
///   Rust-side result record used by every accessor.
///
/// Performance
/// -----------
/// - At most one copy per input when the Python object is not already a
///   contiguous `float64` array; accessors are O(1).
#[cfg(feature = "python-bindings")]
#[pyclass(module = "cochrane_orcutt.regression", frozen)]
pub struct CochraneOrcutt {
    inner: COOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl CochraneOrcutt {
    #[new]
    #[pyo3(
        text_signature = "(yt, xt, /, mean=False, degeneracy='propagate', verbose=False)",
        signature = (yt, xt, mean = false, degeneracy = None, verbose = false)
    )]
    pub fn new<'py>(
        py: Python<'py>, yt: &Bound<'py, PyAny>, xt: &Bound<'py, PyAny>, mean: bool,
        degeneracy: Option<&str>, verbose: bool,
    ) -> PyResult<Self> {
        let y_arr = extract_f64_array(py, yt)?;
        let x_arr = extract_f64_array(py, xt)?;
        let y = contiguous_slice(&y_arr, "yt")?;
        let x = contiguous_slice(&x_arr, "xt")?;

        let policy = match degeneracy {
            Some(name) => name.parse::<DegeneracyPolicy>()?,
            None => DegeneracyPolicy::default(),
        };
        let opts = COOptions::new(mean, policy, verbose);

        let inner = COOutcome::cochrane_orcutt_with(y, x, &opts)?;
        Ok(CochraneOrcutt { inner })
    }

    /// First-pass OLS slope.
    #[getter]
    pub fn slope(&self) -> f64 {
        self.inner.slope()
    }

    /// First-pass OLS intercept.
    #[getter]
    pub fn intercept(&self) -> f64 {
        self.inner.intercept()
    }

    /// Two-sided p-value for a zero slope.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.pvalue()
    }

    /// Pearson correlation of `xt` and `yt`.
    #[getter]
    pub fn rvalue(&self) -> f64 {
        self.inner.rvalue()
    }

    /// Corrected slope standard error.
    #[getter]
    pub fn stderr(&self) -> f64 {
        self.inner.stderr()
    }

    /// Corrected intercept standard error.
    #[getter]
    pub fn intercept_stderr(&self) -> f64 {
        self.inner.intercept_stderr()
    }

    /// `fit[key]`; raises `KeyError` for names outside the six fields.
    pub fn __getitem__(&self, key: &str) -> PyResult<f64> {
        let field = key.parse::<COField>()?;
        Ok(self.inner.field(field))
    }

    pub fn __contains__(&self, key: &str) -> bool {
        self.inner.get(key).is_some()
    }

    pub fn __len__(&self) -> usize {
        COField::ALL.len()
    }

    /// Field names in canonical order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.inner.keys().to_vec()
    }

    /// Plain `dict` copy of the six fields, in canonical order.
    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        for (name, value) in self.inner.iter() {
            dict.set_item(name, value)?;
        }
        Ok(dict)
    }

    pub fn __repr__(&self) -> String {
        let fields: Vec<String> =
            self.inner.iter().map(|(name, value)| format!("{name}={value}")).collect();
        format!("CochraneOrcutt({})", fields.join(", "))
    }
}

/// LinearRegression — Python-facing wrapper for plain OLS.
///
/// Constructed via `LinearRegression(x, y)` and delegating to
/// [`linregress`]. Exposes `slope`, `intercept`, `rvalue`, `pvalue`,
/// `stderr`, and `intercept_stderr` as read-only properties with the
/// classical (uncorrected) standard errors.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "cochrane_orcutt.regression", frozen)]
pub struct LinearRegression {
    inner: LinRegress,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LinearRegression {
    #[new]
    #[pyo3(text_signature = "(x, y, /)", signature = (x, y))]
    pub fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
    ) -> PyResult<Self> {
        let x_arr = extract_f64_array(py, x)?;
        let y_arr = extract_f64_array(py, y)?;
        let inner = linregress(x_arr.as_array(), y_arr.as_array())?;
        Ok(LinearRegression { inner })
    }

    #[getter]
    pub fn slope(&self) -> f64 {
        self.inner.slope
    }

    #[getter]
    pub fn intercept(&self) -> f64 {
        self.inner.intercept
    }

    #[getter]
    pub fn rvalue(&self) -> f64 {
        self.inner.rvalue
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.pvalue
    }

    #[getter]
    pub fn stderr(&self) -> f64 {
        self.inner.stderr
    }

    #[getter]
    pub fn intercept_stderr(&self) -> f64 {
        self.inner.intercept_stderr
    }

    pub fn __repr__(&self) -> String {
        let LinRegress { slope, intercept, rvalue, pvalue, stderr, intercept_stderr } =
            self.inner;
        format!(
            "LinearRegression(slope={slope}, intercept={intercept}, rvalue={rvalue}, \
             pvalue={pvalue}, stderr={stderr}, intercept_stderr={intercept_stderr})"
        )
    }
}

/// _cochrane_orcutt — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_cochrane_orcutt` Python module and register its
/// `regression` submodule used by the public `cochrane_orcutt` package.
///
/// Key behaviors
/// -------------
/// - Create the `regression` submodule and attach it to the parent module.
/// - Register the submodule in `sys.modules` so it is importable via a
///   dotted path from Python.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - Invoked automatically by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _cochrane_orcutt<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let regression_mod = PyModule::new(py, "regression")?;
    regression(py, m, &regression_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    py.import("sys")?
        .getattr("modules")?
        .set_item("cochrane_orcutt.regression", regression_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn regression<'py>(
    _py: Python, cochrane_orcutt: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<CochraneOrcutt>()?;
    m.add_class::<LinearRegression>()?;
    cochrane_orcutt.add_submodule(m)?;
    Ok(())
}
