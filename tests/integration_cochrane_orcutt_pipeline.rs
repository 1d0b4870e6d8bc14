//! Integration tests for the Cochrane–Orcutt corrected regression.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline through the public crate surface:
//!   shape validation, first-pass OLS, generalized differencing, the
//!   second-pass fit, and the corrected standard errors.
//! - Exercise realistic series (smooth trends with AR-like disturbances,
//!   irregular regressors, tiny samples) rather than toy inputs only.
//!
//! Coverage
//! --------
//! - `regression::cochrane_orcutt`:
//!   - `COOutcome::cochrane_orcutt`, `_with`, and `_detailed`.
//!   - Key access, typed access, and iteration over the result record.
//! - `regression::primitives` and `regression::ols`:
//!   - Recomposition of the corrector from its public building blocks.
//! - `regression::options`:
//!   - Policy parsing from strings and both degeneracy policies.
//!
//! Exclusions
//! ----------
//! - Formula-level checks of the primitives, which are covered by unit
//!   tests.
//! - Python bindings, which are thin wrappers over the same entry points.
use approx::assert_relative_eq;
use cochrane_orcutt::regression::{
    COError, COField, COOptions, COOutcome, DegeneracyPolicy, detrend, generalized_difference,
    lag1_autocorr, linregress,
};
use ndarray::{Array1, ArrayView1};

/// Time index `0, 1, …, n−1` as `f64`.
fn time_index(n: usize) -> Vec<f64> {
    (0..n).map(|t| t as f64).collect()
}

/// Purpose
/// -------
/// Linear trend plus a smooth, slowly varying disturbance, rounded to
/// three decimals: `1.5 + 0.8·t + 0.6·sin(0.5·t)` for `t = 0..15`.
///
/// Returns
/// -------
/// - `(yt, xt)` with `xt` the time index. Residuals about the OLS line are
///   strongly positively autocorrelated (ρ̂ ≈ 0.855).
fn drift_series() -> (Vec<f64>, Vec<f64>) {
    let yt = vec![
        1.5, 2.588, 3.605, 4.498, 5.246, 5.859, 6.385, 6.89, 7.446, 8.113, 8.925, 9.877, 10.932,
        12.029, 13.094, 14.063,
    ];
    let xt = time_index(yt.len());
    (yt, xt)
}

/// Purpose
/// -------
/// Near-linear series with residuals that are almost serially
/// uncorrelated (ρ̂ ≈ −0.001).
///
/// Returns
/// -------
/// - `(yt, xt)` with `xt = 0..13`.
fn white_noise_series() -> (Vec<f64>, Vec<f64>) {
    let yt = vec![
        1.09, 2.94, 4.73, 6.81, 9.25, 11.03, 13.11, 14.87, 17.08, 18.75, 20.92, 22.73, 25.24,
        27.25,
    ];
    let xt = time_index(yt.len());
    (yt, xt)
}

#[test]
// Purpose
// -------
// Check that the corrector agrees with a manual composition of the public
// primitives, stage by stage.
//
// Given
// -----
// - The drift series and its time index, without mean-centering.
//
// Expect
// ------
// - Diagnostics equal the manually computed ρ̂, ρ̂₂, and both fits.
// - stderr and intercept_stderr equal the second-pass slope SE and
//   second-pass intercept SE / (1 − ρ̂₂), bit for bit.
fn pipeline_matches_manual_composition_of_primitives() {
    // Arrange
    let (yt, xt) = drift_series();
    let y = ArrayView1::from(&yt[..]);
    let x = Array1::from(xt.clone());

    let residuals = detrend(y);
    let autocorr = lag1_autocorr(residuals.view());
    let first = linregress(x.view(), y).expect("valid inputs");
    let fitted_plus_resid = x.mapv(|x_t| first.slope * x_t + first.intercept) + &residuals;
    let diffed_y = generalized_difference(fitted_plus_resid.view(), autocorr);
    let diffed_x = generalized_difference(x.view(), autocorr);
    let second = linregress(diffed_x.view(), diffed_y.view()).expect("valid inputs");
    let autocorr2 = lag1_autocorr(detrend(diffed_y.view()).view());

    // Act
    let (fit, diag) = COOutcome::cochrane_orcutt_detailed(&yt, &xt, &COOptions::default())
        .expect("valid inputs");

    // Assert
    assert_eq!(diag.n, 16);
    assert_eq!(diag.autocorr, autocorr);
    assert_eq!(diag.autocorr2, autocorr2);
    assert_eq!(diag.first, first);
    assert_eq!(diag.second, second);
    assert_eq!(fit.slope(), first.slope);
    assert_eq!(fit.stderr(), second.stderr);
    assert_eq!(fit.intercept_stderr(), second.intercept_stderr / (1.0 - autocorr2));
    assert_relative_eq!(second.slope, 0.8443038864973706, max_relative = 1e-8);
    assert_relative_eq!(second.intercept_stderr, 0.1944895924402402, max_relative = 1e-8);
}

#[test]
// Purpose
// -------
// With residuals that are nearly white noise, the correction should stay
// close to plain OLS.
//
// Given
// -----
// - The white-noise series (ρ̂ ≈ −0.001).
//
// Expect
// ------
// - Slope/intercept/rvalue/pvalue identical to plain OLS.
// - Corrected SEs within 25% of the OLS SEs, and equal to the pinned
//   reference values.
fn near_white_noise_residuals_leave_errors_close_to_ols() {
    // Arrange
    let (yt, xt) = white_noise_series();
    let ols = linregress(ArrayView1::from(&xt[..]), ArrayView1::from(&yt[..]))
        .expect("valid inputs");

    // Act
    let fit = COOutcome::cochrane_orcutt(&yt, &xt, false).expect("valid inputs");

    // Assert
    assert_eq!(
        (fit.slope(), fit.intercept(), fit.rvalue(), fit.pvalue()),
        (ols.slope, ols.intercept, ols.rvalue, ols.pvalue)
    );
    assert_relative_eq!(fit.slope(), 2.007824175824176, max_relative = 1e-10);
    assert_relative_eq!(fit.intercept(), 0.9348571428571422, max_relative = 1e-8);
    assert_relative_eq!(fit.stderr(), 0.01467681528124421, max_relative = 1e-8);
    assert_relative_eq!(fit.intercept_stderr(), 0.11624319515182864, max_relative = 1e-8);

    let slope_ratio = fit.stderr() / ols.stderr;
    let intercept_ratio = fit.intercept_stderr() / ols.intercept_stderr;
    assert!((0.8..1.25).contains(&slope_ratio), "slope SE ratio {slope_ratio}");
    assert!((0.8..1.25).contains(&intercept_ratio), "intercept SE ratio {intercept_ratio}");
}

#[test]
// Purpose
// -------
// Mean-centering must not change slope, correlation, or p-value on any
// input, including an irregularly spaced regressor.
//
// Given
// -----
// - The drift series, the white-noise series, and a 5-point series with
//   xt = [1, 2, 4, 5, 7].
//
// Expect
// ------
// - Equal slope, rvalue, and pvalue (to rounding) with and without
//   centering; all fields finite.
// - Centred intercept equals the line's value at mean(xt).
fn mean_centering_preserves_slope_across_inputs() {
    // Arrange
    let short_y = vec![2.1, 3.9, 8.2, 9.8, 14.1];
    let short_x = vec![1.0, 2.0, 4.0, 5.0, 7.0];
    let cases = [drift_series(), white_noise_series(), (short_y, short_x)];

    for (yt, xt) in cases {
        // Act
        let raw = COOutcome::cochrane_orcutt(&yt, &xt, false).expect("valid inputs");
        let centred = COOutcome::cochrane_orcutt(&yt, &xt, true).expect("valid inputs");

        // Assert
        let x_mean = xt.iter().sum::<f64>() / xt.len() as f64;
        assert!(raw.is_finite() && centred.is_finite());
        assert_relative_eq!(raw.slope(), centred.slope(), max_relative = 1e-10);
        assert_relative_eq!(raw.rvalue(), centred.rvalue(), max_relative = 1e-10);
        assert_relative_eq!(raw.pvalue(), centred.pvalue(), max_relative = 1e-6, epsilon = 1e-15);
        assert_relative_eq!(
            centred.intercept(),
            raw.intercept() + raw.slope() * x_mean,
            epsilon = 1e-9
        );
    }
}

#[test]
// Purpose
// -------
// Pin the corrected errors on a small, irregularly spaced sample.
//
// Given
// -----
// - xt = [1, 2, 4, 5, 7], yt = [2.1, 3.9, 8.2, 9.8, 14.1].
//
// Expect
// ------
// - slope ≈ 2.000877, stderr ≈ 0.011741, intercept_stderr ≈ 0.060580.
fn small_irregular_sample_matches_reference() {
    // Arrange
    let yt = [2.1, 3.9, 8.2, 9.8, 14.1];
    let xt = [1.0, 2.0, 4.0, 5.0, 7.0];

    // Act
    let fit = COOutcome::cochrane_orcutt(&yt, &xt, false).expect("valid inputs");

    // Assert
    assert_relative_eq!(fit.slope(), 2.000877192982456, max_relative = 1e-10);
    assert_relative_eq!(fit.stderr(), 0.011741438076847438, max_relative = 1e-8);
    assert_relative_eq!(fit.intercept_stderr(), 0.060580199850003826, max_relative = 1e-8);
}

#[test]
// Purpose
// -------
// Document the behavior at the minimum accepted length.
//
// Given
// -----
// - Three observations (the second pass fits two points exactly).
//
// Expect
// ------
// - Ok result; stderr is exactly 0 and intercept_stderr is NaN because
//   ρ̂₂ of a two-point series is undefined.
// - The rejecting policy reports the second autocorrelation stage.
fn minimum_length_series_has_undefined_intercept_correction() {
    // Arrange
    let yt = [1.0, 2.5, 2.9];
    let xt = [0.0, 1.0, 2.0];
    let reject = COOptions::default().with_degeneracy(DegeneracyPolicy::Reject);

    // Act
    let fit = COOutcome::cochrane_orcutt(&yt, &xt, false).expect("n = 3 is accepted");
    let rejected = COOutcome::cochrane_orcutt_with(&yt, &xt, &reject);

    // Assert
    assert!(fit.slope().is_finite());
    assert_eq!(fit.stderr(), 0.0);
    assert!(fit.intercept_stderr().is_nan());
    assert_eq!(
        rejected,
        Err(COError::NumericDegeneracy { stage: "second lag-1 autocorrelation" })
    );
}

#[test]
// Purpose
// -------
// Verify the record's access paths through the public surface.
//
// Given
// -----
// - An outcome on the drift series.
//
// Expect
// ------
// - `iter()` yields the six keys in canonical order with the accessor
//   values; string and typed indexing agree.
fn outcome_access_paths_agree() {
    // Arrange
    let (yt, xt) = drift_series();
    let fit = COOutcome::cochrane_orcutt(&yt, &xt, false).expect("valid inputs");

    // Act
    let pairs: Vec<(&str, f64)> = fit.iter().collect();

    // Assert
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs[0], ("slope", fit.slope()));
    assert_eq!(pairs[5], ("intercept_stderr", fit.intercept_stderr()));
    for (name, value) in pairs {
        let field: COField = name.parse().expect("canonical key");
        assert_eq!(fit[name], value);
        assert_eq!(fit[field], value);
    }
}

#[test]
// Purpose
// -------
// Drive the policy from a configuration string, as a caller reading
// settings from a file or CLI would.
//
// Given
// -----
// - Policy names "REJECT" and "maybe", and a constant regressor.
//
// Expect
// ------
// - "REJECT" parses and the constant regressor is rejected at the first
//   regression; "maybe" is an `InvalidPolicy` error.
fn policy_parsed_from_string_controls_degeneracy() {
    // Arrange
    let yt = [0.5, 1.0, 1.8, 2.2, 3.1, 3.3];
    let xt = [4.0; 6];

    // Act
    let policy: DegeneracyPolicy = "REJECT".parse().expect("known policy");
    let opts = COOptions::new(true, policy, false);
    let result = COOutcome::cochrane_orcutt_with(&yt, &xt, &opts);
    let bad = "maybe".parse::<DegeneracyPolicy>();

    // Assert
    assert_eq!(result, Err(COError::NumericDegeneracy { stage: "first-pass regression" }));
    assert_eq!(bad, Err(COError::InvalidPolicy { name: "maybe".to_string() }));
}

#[test]
// Purpose
// -------
// Under the default policy, degenerate or missing data must come back as
// NaN fields rather than aborting.
//
// Given
// -----
// - A constant series of length 6 against its time index.
// - A series with one missing observation (NaN) at t = 1.
//
// Expect
// ------
// - Constant series: Ok with slope 0, intercept 2, and NaN standard errors.
// - Missing observation: Ok with NaN slope, pvalue, and standard errors.
fn default_policy_returns_nan_fields_for_degenerate_input() {
    // Arrange
    let flat_y = [2.0; 6];
    let flat_x = time_index(6);
    let gappy_y = [0.1, f64::NAN, 3.3, 4.6, 6.4];
    let gappy_x = time_index(5);

    // Act
    let flat = COOutcome::cochrane_orcutt(&flat_y, &flat_x, false).expect("NaN policy");
    let gappy = COOutcome::cochrane_orcutt(&gappy_y, &gappy_x, false).expect("NaN policy");

    // Assert
    assert_eq!(flat.slope(), 0.0);
    assert_relative_eq!(flat.intercept(), 2.0, epsilon = 1e-12);
    assert!(flat.stderr().is_nan() && flat.intercept_stderr().is_nan());
    assert!(gappy.slope().is_nan());
    assert!(gappy.pvalue().is_nan());
    assert!(gappy.stderr().is_nan() && gappy.intercept_stderr().is_nan());
    assert!(!flat.is_finite() && !gappy.is_finite());
}
