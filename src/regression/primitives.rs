//! regression::primitives — detrending, correlation, and differencing.
//!
//! Purpose
//! -------
//! Provide the series-level building blocks of the Cochrane–Orcutt
//! procedure: linear detrending against the time index, Pearson
//! correlation, lag-1 autocorrelation, and the generalized-difference
//! transform.
//!
//! Key behaviors
//! -------------
//! - [`detrend`] removes the least-squares line fitted against the index
//!   `0..n-1` (not just the mean).
//! - [`corrcoef`] computes the Pearson correlation of two equal-length
//!   series, clipped to `[-1, 1]`.
//! - [`lag1_autocorr`] correlates `e[1..]` with `e[..n-1]`.
//! - [`generalized_difference`] maps `z` to `z[1..] - ρ · z[..n-1]`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Zero-variance inputs are not errors here. Correlations of a constant
//!   series evaluate to NaN (0/0) and flow onward; the corrector decides
//!   whether to reject them.
//! - Series of length `< 2` detrend to zeros and have NaN autocorrelation.
//!
//! Conventions
//! -----------
//! - Time index `t = 0, …, n-1`; lag 1 pairs `(z_t, z_{t-1})` for
//!   `t = 1, …, n-1`.
//! - Inputs are taken as `ArrayView1<f64>` so callers can pass slices
//!   (`ArrayView1::from(&data[..])`) or views of owned arrays without
//!   copying.
//!
//! Testing notes
//! -------------
//! - Unit tests verify detrended residuals against hand-computed values,
//!   that detrending annihilates exact lines, correlation sign/scale
//!   invariance, the lag-1 pairing, and the difference transform.
use crate::regression::errors::{COError, COResult};
use ndarray::{Array1, ArrayView1, s};
use statrs::statistics::Statistics;

/// Remove the best-fit linear trend against the time index.
///
/// Parameters
/// ----------
/// - `y`: `ArrayView1<f64>`
///   Series {yₜ} of length n.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Residuals `yₜ − (a + b·t)` where `(a, b)` is the OLS fit of `y` on
///   `t = 0, …, n-1`. For `n < 2` the residuals are all zero.
///
/// Notes
/// -----
/// - The index is centred at `(n-1)/2` before forming the cross-moments,
///   so the slope is `Σ(t − t̄)(yₜ − ȳ) / Σ(t − t̄)²`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use cochrane_orcutt::regression::primitives::detrend;
/// let y = array![1.0, 3.0, 5.0, 7.0];
/// let e = detrend(y.view());
/// assert!(e.iter().all(|v| v.abs() < 1e-12));
/// ```
pub fn detrend(y: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = y.len();
    if n < 2 {
        return Array1::zeros(n);
    }
    let t_mean = (n - 1) as f64 / 2.0;
    let y_mean = y.iter().mean();

    let (sxx, sxy) = y.iter().enumerate().fold((0.0, 0.0), |(sxx, sxy), (t, &y_t)| {
        let dt = t as f64 - t_mean;
        (sxx + dt * dt, sxy + dt * (y_t - y_mean))
    });
    let slope = sxy / sxx;
    let intercept = y_mean - slope * t_mean;

    Array1::from_iter(y.iter().enumerate().map(|(t, &y_t)| y_t - (intercept + slope * t as f64)))
}

/// Pearson correlation coefficient of two equal-length series.
///
/// Parameters
/// ----------
/// - `a`, `b`: `ArrayView1<f64>`
///   Series of the same length.
///
/// Returns
/// -------
/// `COResult<f64>`
///   The correlation clipped to `[-1, 1]`, or NaN when either series has
///   zero variance or fewer than two observations.
///
/// Errors
/// ------
/// - `COError::DimensionMismatch { left, right }`
///   When `a.len() != b.len()`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use cochrane_orcutt::regression::primitives::corrcoef;
/// let a = array![1.0, 2.0, 3.0];
/// let b = array![6.0, 4.0, 2.0];
/// assert!((corrcoef(a.view(), b.view()).unwrap() + 1.0).abs() < 1e-12);
/// ```
pub fn corrcoef(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> COResult<f64> {
    if a.len() != b.len() {
        return Err(COError::DimensionMismatch { left: a.len(), right: b.len() });
    }
    Ok(pearson(a, b))
}

/// Lag-1 autocorrelation: Pearson correlation of `e[1..]` with `e[..n-1]`.
///
/// Returns NaN when `e.len() < 2`, and typically also for `e.len() == 2`
/// with equal values, since each shifted slice then has zero variance.
pub fn lag1_autocorr(e: ArrayView1<'_, f64>) -> f64 {
    let n = e.len();
    if n < 2 {
        return f64::NAN;
    }
    pearson(e.slice(s![1..]), e.slice(s![..n - 1]))
}

/// Generalized-difference transform `z'ₜ = zₜ − ρ · zₜ₋₁`.
///
/// Parameters
/// ----------
/// - `z`: `ArrayView1<f64>`
///   Series of length n ≥ 1.
/// - `rho`: `f64`
///   First-order autocorrelation coefficient to remove.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Transformed series of length n − 1 (empty when n ≤ 1).
pub fn generalized_difference(z: ArrayView1<'_, f64>, rho: f64) -> Array1<f64> {
    let n = z.len();
    if n < 2 {
        return Array1::zeros(0);
    }
    let lagged = z.slice(s![..n - 1]).mapv(|v| rho * v);
    &z.slice(s![1..]) - &lagged
}

// ---- Helper methods ----

/// Pearson correlation for series already known to have equal length.
#[inline]
fn pearson(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let a_c = &a - a.iter().mean();
    let b_c = &b - b.iter().mean();
    let r = a_c.dot(&b_c) / (a_c.dot(&a_c).sqrt() * b_c.dot(&b_c).sqrt());
    r.clamp(-1.0, 1.0)
}
