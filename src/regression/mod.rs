//! regression — Cochrane–Orcutt corrected simple regression and helpers.
//!
//! Purpose
//! -------
//! Collect the corrected-regression routine and the series primitives it is
//! built from. The main entry point fits `yt = intercept + slope · xt` by
//! OLS and replaces the classical standard errors with Cochrane–Orcutt
//! corrected ones, for series whose residuals follow an AR(1) process.
//!
//! Key behaviors
//! -------------
//! - Expose the corrector through [`COOutcome`] and its constructors
//!   [`COOutcome::cochrane_orcutt`](cochrane_orcutt::COOutcome::cochrane_orcutt),
//!   [`COOutcome::cochrane_orcutt_with`](cochrane_orcutt::COOutcome::cochrane_orcutt_with),
//!   and
//!   [`COOutcome::cochrane_orcutt_detailed`](cochrane_orcutt::COOutcome::cochrane_orcutt_detailed).
//! - Expose the building blocks ([`detrend`], [`corrcoef`],
//!   [`lag1_autocorr`], [`generalized_difference`], [`linregress`]) for
//!   callers who need one stage on its own.
//! - Centralize shape guards in [`validate_pair`] and errors in
//!   [`COError`] / [`COResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Routines never panic on user-facing invalid input; shape problems are
//!   returned as [`COError`]. Indexing an outcome with an unknown name is
//!   the one exception and mirrors map indexing.
//! - All routines are pure functions of their inputs and hold no state
//!   between calls.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use cochrane_orcutt::regression::prelude::*;
//!
//!   let xt = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//!   let yt = [2.1, 3.9, 6.2, 7.8, 10.1, 12.2];
//!   let fit: COOutcome = COOutcome::cochrane_orcutt(&yt, &xt, true)?;
//!   # Ok::<(), COError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; `tests/` exercises the
//!   public pipeline end to end.

pub mod cochrane_orcutt;
pub mod errors;
#[cfg(feature = "obs_slog")]
pub mod observer;
pub mod ols;
pub mod options;
pub mod primitives;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cochrane_orcutt::{CODiagnostics, COField, COOutcome};
pub use self::errors::{COError, COResult};
pub use self::ols::{LinRegress, linregress};
pub use self::options::{COOptions, DegeneracyPolicy};
pub use self::primitives::{corrcoef, detrend, generalized_difference, lag1_autocorr};
pub use self::validation::validate_pair;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::cochrane_orcutt::{CODiagnostics, COField, COOutcome};
    pub use super::errors::{COError, COResult};
    pub use super::options::{COOptions, DegeneracyPolicy};
}
