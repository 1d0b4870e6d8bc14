//! regression::ols — simple ordinary-least-squares regression.
//!
//! Purpose
//! -------
//! Fit `y = intercept + slope · x` by ordinary least squares and report the
//! Pearson correlation, a two-sided Student-t p-value for `H₀: slope = 0`,
//! and the classical standard errors of both coefficients. Both passes of
//! the Cochrane–Orcutt corrector run through [`linregress`].
//!
//! Key behaviors
//! -------------
//! - Moments use the biased (1/n) normalization; only ratios of moments
//!   enter the estimates, so the choice does not affect them.
//! - The correlation is clipped to `[-1, 1]`; it is defined as 0 when
//!   either series has zero variance.
//! - With exactly two observations the fit is exact: both standard errors
//!   are 0 and the p-value is 1 if the two `y` values coincide, else 0.
//! - With n ≥ 3 the t statistic is
//!   `t = r · √(df / ((1 − r + TINY)(1 + r + TINY)))`, `df = n − 2`, and the
//!   p-value is `2 · P(T_df > |t|)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constant `x` makes the slope 0/0 = NaN; the NaN flows into every
//!   derived quantity rather than raising an error.
//! - A constant `y` (with varying `x`) gives slope 0, r = 0, zero standard
//!   errors, and p-value 1.
//! - A NaN anywhere in `x` or `y` makes every output NaN, p-value included.
//!
//! Conventions
//! -----------
//! - `stderr` is the slope standard error
//!   `√((1 − r²) · s_yy / s_xx / df)`; `intercept_stderr` is
//!   `stderr · √(s_xx + x̄²)`.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against a hand-checked textbook example, the exact
//!   two-point case, and the zero-variance conventions above.
use crate::regression::{
    errors::{COError, COResult},
    validation::MIN_REGRESSION_LEN,
};
use ndarray::ArrayView1;
use statrs::{
    distribution::{ContinuousCDF, StudentsT},
    statistics::Statistics,
};

/// Guard against division by zero in the t statistic when |r| = 1.
const TINY: f64 = 1.0e-20;

/// LinRegress — outcome of a simple OLS fit.
///
/// Fields
/// ------
/// - `slope`: `f64` — estimated slope.
/// - `intercept`: `f64` — estimated intercept.
/// - `rvalue`: `f64` — Pearson correlation between `x` and `y`.
/// - `pvalue`: `f64` — two-sided p-value for `H₀: slope = 0`.
/// - `stderr`: `f64` — standard error of the slope.
/// - `intercept_stderr`: `f64` — standard error of the intercept.
///
/// Notes
/// -----
/// - Plain value object; derives `Copy` so it can be embedded in
///   diagnostics and handed across the FFI boundary by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinRegress {
    pub slope: f64,
    pub intercept: f64,
    pub rvalue: f64,
    pub pvalue: f64,
    pub stderr: f64,
    pub intercept_stderr: f64,
}

/// Ordinary-least-squares fit of `y` on `x`.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView1<f64>`
///   Independent variable.
/// - `y`: `ArrayView1<f64>`
///   Dependent variable, same length as `x`.
///
/// Returns
/// -------
/// `COResult<LinRegress>`
///   The fitted coefficients and their inference statistics.
///
/// Errors
/// ------
/// - `COError::DimensionMismatch { left, right }`
///   When `y.len() != x.len()` (`left` is the length of `y`).
/// - `COError::InsufficientData { needed: 2, got }`
///   When fewer than two observations are supplied.
/// - `COError::NumericDegeneracy { stage: "p-value" }`
///   When the Student-t reference distribution cannot be built. This is
///   unreachable for n ≥ 3 since `df ≥ 1`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use cochrane_orcutt::regression::ols::linregress;
/// let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = array![2.0, 4.0, 5.0, 4.0, 5.0];
/// let fit = linregress(x.view(), y.view()).unwrap();
/// assert!((fit.slope - 0.6).abs() < 1e-12);
/// assert!((fit.intercept - 2.2).abs() < 1e-12);
/// ```
pub fn linregress(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> COResult<LinRegress> {
    if y.len() != x.len() {
        return Err(COError::DimensionMismatch { left: y.len(), right: x.len() });
    }
    let n = x.len();
    if n < MIN_REGRESSION_LEN {
        return Err(COError::InsufficientData { needed: MIN_REGRESSION_LEN, got: n });
    }
    let n_f = n as f64;

    let x_mean = x.iter().mean();
    let y_mean = y.iter().mean();
    let x_c = &x - x_mean;
    let y_c = &y - y_mean;
    let ssxm = x_c.dot(&x_c) / n_f;
    let ssym = y_c.dot(&y_c) / n_f;
    let ssxym = x_c.dot(&y_c) / n_f;

    let r_den = (ssxm * ssym).sqrt();
    let rvalue = if r_den == 0.0 { 0.0 } else { (ssxym / r_den).clamp(-1.0, 1.0) };

    let slope = ssxym / ssxm;
    let intercept = y_mean - slope * x_mean;

    if n == MIN_REGRESSION_LEN {
        let pvalue = if y[0] == y[1] { 1.0 } else { 0.0 };
        return Ok(LinRegress {
            slope,
            intercept,
            rvalue,
            pvalue,
            stderr: 0.0,
            intercept_stderr: 0.0,
        });
    }

    let df = n_f - 2.0;
    let t_stat = rvalue * (df / ((1.0 - rvalue + TINY) * (1.0 + rvalue + TINY))).sqrt();
    let pvalue = two_sided_t_pvalue(t_stat, df)?;
    let stderr = ((1.0 - rvalue * rvalue) * ssym / ssxm / df).sqrt();
    let intercept_stderr = stderr * (ssxm + x_mean * x_mean).sqrt();

    Ok(LinRegress { slope, intercept, rvalue, pvalue, stderr, intercept_stderr })
}

// ---- Helper methods ----

/// Two-sided tail probability `2 · P(T_df > |t|)` of a Student-t statistic.
///
/// A NaN statistic yields a NaN p-value; statrs panics on NaN arguments.
#[inline]
fn two_sided_t_pvalue(t_stat: f64, df: f64) -> COResult<f64> {
    if t_stat.is_nan() {
        return Ok(f64::NAN);
    }
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|_| COError::NumericDegeneracy { stage: "p-value" })?;
    Ok((2.0 * dist.sf(t_stat.abs())).min(1.0))
}
