//! regression::cochrane_orcutt — one-pass Cochrane–Orcutt corrected regression.
//!
//! Purpose
//! -------
//! Fit a straight line to two time-ordered series whose residuals follow a
//! first-order autoregression, and replace the classical OLS standard
//! errors with Cochrane–Orcutt corrected ones (Cochrane & Orcutt, 1949,
//! JASA 44(245), 32–61).
//!
//! Key behaviors
//! -------------
//! - Detrend `yt` against its time index and estimate the lag-1
//!   autocorrelation ρ̂ of the residuals.
//! - Regress `yt` on `xt` by OLS (first pass). Its slope, intercept,
//!   correlation, and p-value are reported unchanged.
//! - Rebuild `fitted + residuals`, apply the generalized difference
//!   `zₜ − ρ̂ zₜ₋₁` to it and to `xt`, and regress again (second pass).
//! - Re-estimate the lag-1 autocorrelation ρ̂₂ on the detrended
//!   second-pass dependent series and report
//!   `stderr = SE₂(slope)` and `intercept_stderr = SE₂(intercept) / (1 − ρ̂₂)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `slope`, `intercept`, `pvalue`, and `rvalue` are exactly the
//!   first-pass OLS outputs; only the two standard errors are corrected.
//! - The intercept correction divides by `1 − ρ̂₂`, the *re-estimated*
//!   coefficient, not the `ρ̂` used for differencing.
//! - Exactly one correction pass is made; there is no iteration to
//!   convergence.
//! - Mean-centering (when requested) is applied to `xt` before every other
//!   step and persists through the whole pipeline.
//!
//! Conventions
//! -----------
//! - Intermediate series are immutable named values: `residuals`,
//!   `autocorr`, `fitted_plus_resid`, `diffed_y`, `diffed_x`,
//!   `residuals2`, `autocorr2`.
//! - Zero-variance inputs produce NaN fields by default; pass
//!   [`DegeneracyPolicy::Reject`] to get `COError::NumericDegeneracy`
//!   naming the first stage that turned non-finite.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code calls
//!
//!   ```rust
//!   use cochrane_orcutt::regression::COOutcome;
//!
//!   let x: Vec<f64> = (0..10).map(|t| t as f64).collect();
//!   let y = [0.1, 1.7, 3.3, 4.6, 6.4, 8.0, 9.5, 11.3, 12.8, 14.5];
//!   let fit = COOutcome::cochrane_orcutt(&y, &x, false)?;
//!   println!("slope = {} ± {}", fit.slope(), fit.stderr());
//!   # Ok::<(), cochrane_orcutt::regression::COError>(())
//!   ```
//!
//! - Fields can also be looked up by name (`fit["intercept_stderr"]`,
//!   `fit.get("pvalue")`) or by typed key ([`COField`]).
//! - [`COOutcome::cochrane_orcutt_detailed`] additionally returns both
//!   regression passes and both autocorrelation estimates.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the outputs on two reference series (one with mild
//!   negative, one with strong positive residual autocorrelation), check
//!   first-pass passthrough, mean-centering neutrality, determinism, dual
//!   access, shape errors, and both degeneracy policies.
use crate::regression::{
    errors::{COError, COResult},
    ols::{LinRegress, linregress},
    options::COOptions,
    primitives::{detrend, generalized_difference, lag1_autocorr},
    validation::{MIN_CORRECTION_LEN, validate_pair},
};
use ndarray::{Array1, ArrayView1};
use statrs::statistics::Statistics;
use std::{fmt, ops::Index, str::FromStr};

/// COField — typed key for the six fields of [`COOutcome`].
///
/// Parsing via `FromStr` is exact and case-sensitive, matching the field
/// names used for key lookup. Unknown names return
/// `COError::UnknownField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum COField {
    Slope,
    Intercept,
    PValue,
    RValue,
    StdErr,
    InterceptStdErr,
}

impl COField {
    /// All keys in their canonical order.
    pub const ALL: [COField; 6] = [
        COField::Slope,
        COField::Intercept,
        COField::PValue,
        COField::RValue,
        COField::StdErr,
        COField::InterceptStdErr,
    ];

    /// Lookup name of this key.
    pub fn name(&self) -> &'static str {
        match self {
            COField::Slope => "slope",
            COField::Intercept => "intercept",
            COField::PValue => "pvalue",
            COField::RValue => "rvalue",
            COField::StdErr => "stderr",
            COField::InterceptStdErr => "intercept_stderr",
        }
    }
}

impl FromStr for COField {
    type Err = COError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| COError::UnknownField { name: s.to_string() })
    }
}

impl fmt::Display for COField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// COOutcome — result of a Cochrane–Orcutt corrected regression.
///
/// Purpose
/// -------
/// Hold the six reported quantities of one correction pass: the first-pass
/// OLS point estimates and inference, plus the corrected standard errors.
///
/// Key behaviors
/// -------------
/// - Immutable once built; only the constructors in this module create it.
/// - Dual access: named accessors (`slope()`, …) and key lookup by string
///   ([`get`](Self::get), `outcome["slope"]`) or by [`COField`]
///   ([`field`](Self::field), `outcome[COField::Slope]`) return identical
///   values.
///
/// Fields
/// ------
/// - `slope`: first-pass OLS slope.
/// - `intercept`: first-pass OLS intercept (the fitted line's value at
///   `mean(xt)` when mean-centering was requested).
/// - `pvalue`: first-pass two-sided p-value for `H₀: slope = 0`.
/// - `rvalue`: first-pass Pearson correlation.
/// - `stderr`: second-pass slope standard error.
/// - `intercept_stderr`: second-pass intercept standard error divided by
///   `1 − ρ̂₂`.
///
/// Invariants
/// ----------
/// - Every field is populated. Under the default degeneracy policy some may
///   be NaN for zero-variance inputs; [`is_finite`](Self::is_finite) reports
///   whether all six are finite.
///
/// Performance
/// -----------
/// - Six scalars, `Copy`; cheap to return by value and to share across
///   threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct COOutcome {
    slope: f64,
    intercept: f64,
    pvalue: f64,
    rvalue: f64,
    stderr: f64,
    intercept_stderr: f64,
}

/// CODiagnostics — intermediate quantities of one correction pass.
///
/// - `n`: number of observations in the input pair.
/// - `autocorr`: lag-1 autocorrelation ρ̂ of the detrended `yt`, used for
///   differencing.
/// - `autocorr2`: lag-1 autocorrelation ρ̂₂ of the detrended differenced
///   series, used for the intercept correction.
/// - `first`: OLS fit of `yt` on `xt` (possibly mean-centred).
/// - `second`: OLS fit on the generalized-differenced series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CODiagnostics {
    pub n: usize,
    pub autocorr: f64,
    pub autocorr2: f64,
    pub first: LinRegress,
    pub second: LinRegress,
}

impl COOutcome {
    /// Run one Cochrane–Orcutt correction pass.
    ///
    /// Parameters
    /// ----------
    /// - `yt`: `&[f64]`
    ///   Dependent series, time-ordered, length n ≥ 3.
    /// - `xt`: `&[f64]`
    ///   Independent series, same length as `yt`.
    /// - `mean_center`: `bool`
    ///   If `true`, `xt` is shifted by its mean first, and the returned
    ///   intercept is the fitted line's value at `mean(xt)`.
    ///
    /// Returns
    /// -------
    /// `COResult<COOutcome>`
    ///   The first-pass point estimates with corrected standard errors.
    ///   Zero-variance inputs yield NaN fields rather than an error.
    ///
    /// Errors
    /// ------
    /// - `COError::DimensionMismatch`
    ///   When `yt` and `xt` differ in length.
    /// - `COError::InsufficientData`
    ///   When n < 3.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use cochrane_orcutt::regression::COOutcome;
    ///
    /// let x: Vec<f64> = (0..10).map(|t| t as f64).collect();
    /// let y = [0.1, 1.7, 3.3, 4.6, 6.4, 8.0, 9.5, 11.3, 12.8, 14.5];
    ///
    /// let fit = COOutcome::cochrane_orcutt(&y, &x, false).unwrap();
    /// assert!((1.59..=1.65).contains(&fit.slope()));
    /// assert!(fit.rvalue() > 0.99 && fit.pvalue() < 1e-3);
    /// assert_eq!(fit["slope"], fit.slope());
    /// ```
    pub fn cochrane_orcutt(yt: &[f64], xt: &[f64], mean_center: bool) -> COResult<Self> {
        let opts = COOptions::default().with_mean_center(mean_center);
        Self::cochrane_orcutt_with(yt, xt, &opts)
    }

    /// Run one correction pass with explicit [`COOptions`].
    ///
    /// Errors
    /// ------
    /// - Same as [`cochrane_orcutt`](Self::cochrane_orcutt), plus
    ///   `COError::NumericDegeneracy { stage }` when
    ///   `opts.degeneracy == DegeneracyPolicy::Reject` and a stage produced
    ///   a non-finite value.
    pub fn cochrane_orcutt_with(yt: &[f64], xt: &[f64], opts: &COOptions) -> COResult<Self> {
        Self::cochrane_orcutt_detailed(yt, xt, opts).map(|(outcome, _)| outcome)
    }

    /// Run one correction pass and also return the intermediate fits.
    ///
    /// Notes
    /// -----
    /// - When `opts.verbose` is set and the `obs_slog` feature is enabled,
    ///   one structured log record per stage is written to the terminal.
    pub fn cochrane_orcutt_detailed(
        yt: &[f64], xt: &[f64], opts: &COOptions,
    ) -> COResult<(Self, CODiagnostics)> {
        let n = validate_pair(yt, xt, MIN_CORRECTION_LEN)?;
        let policy = opts.degeneracy;

        let y = ArrayView1::from(yt);
        let x_raw = ArrayView1::from(xt);
        let x: Array1<f64> =
            if opts.mean_center { &x_raw - x_raw.iter().mean() } else { x_raw.to_owned() };

        let residuals = detrend(y);
        policy.check("detrending", residuals.iter().copied())?;
        let autocorr = lag1_autocorr(residuals.view());
        policy.check("lag-1 autocorrelation", [autocorr])?;

        let first = linregress(x.view(), y)?;
        policy.check(
            "first-pass regression",
            [first.slope, first.intercept, first.rvalue, first.pvalue],
        )?;

        let fitted_plus_resid = x.mapv(|x_t| first.slope * x_t + first.intercept) + &residuals;
        let diffed_y = generalized_difference(fitted_plus_resid.view(), autocorr);
        let diffed_x = generalized_difference(x.view(), autocorr);
        policy.check("generalized differencing", diffed_y.iter().chain(diffed_x.iter()).copied())?;

        let second = linregress(diffed_x.view(), diffed_y.view())?;
        policy.check("second-pass regression", [second.stderr, second.intercept_stderr])?;

        let residuals2 = detrend(diffed_y.view());
        let autocorr2 = lag1_autocorr(residuals2.view());
        policy.check("second lag-1 autocorrelation", [autocorr2])?;

        let intercept_stderr = second.intercept_stderr / (1.0 - autocorr2);
        policy.check("intercept standard-error correction", [intercept_stderr])?;

        let outcome = COOutcome {
            slope: first.slope,
            intercept: first.intercept,
            pvalue: first.pvalue,
            rvalue: first.rvalue,
            stderr: second.stderr,
            intercept_stderr,
        };
        let diagnostics = CODiagnostics { n, autocorr, autocorr2, first, second };

        #[cfg(feature = "obs_slog")]
        if opts.verbose {
            crate::regression::observer::log_correction(opts, &outcome, &diagnostics);
        }

        Ok((outcome, diagnostics))
    }

    /// First-pass OLS slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// First-pass OLS intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// First-pass two-sided p-value for `H₀: slope = 0`.
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// First-pass Pearson correlation.
    pub fn rvalue(&self) -> f64 {
        self.rvalue
    }

    /// Corrected slope standard error.
    pub fn stderr(&self) -> f64 {
        self.stderr
    }

    /// Corrected intercept standard error.
    pub fn intercept_stderr(&self) -> f64 {
        self.intercept_stderr
    }

    /// Value of the field identified by a typed key.
    pub fn field(&self, key: COField) -> f64 {
        *self.field_ref(key)
    }

    /// Value of the field with the given name, or `None` for names outside
    /// the six-field key set.
    pub fn get(&self, key: &str) -> Option<f64> {
        key.parse::<COField>().ok().map(|field| self.field(field))
    }

    /// Field names in canonical order.
    pub fn keys(&self) -> [&'static str; 6] {
        COField::ALL.map(|field| field.name())
    }

    /// `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        COField::ALL.into_iter().map(move |field| (field.name(), self.field(field)))
    }

    /// `true` when all six fields are finite.
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, value)| value.is_finite())
    }

    fn field_ref(&self, key: COField) -> &f64 {
        match key {
            COField::Slope => &self.slope,
            COField::Intercept => &self.intercept,
            COField::PValue => &self.pvalue,
            COField::RValue => &self.rvalue,
            COField::StdErr => &self.stderr,
            COField::InterceptStdErr => &self.intercept_stderr,
        }
    }
}

impl Index<COField> for COOutcome {
    type Output = f64;

    fn index(&self, key: COField) -> &f64 {
        self.field_ref(key)
    }
}

/// Key lookup by name.
///
/// # Panics
/// Panics if `key` is not one of the six field names; use
/// [`COOutcome::get`] for a fallible lookup.
impl Index<&str> for COOutcome {
    type Output = f64;

    fn index(&self, key: &str) -> &f64 {
        match key.parse::<COField>() {
            Ok(field) => self.field_ref(field),
            Err(err) => panic!("{err}"),
        }
    }
}
