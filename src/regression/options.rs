//! regression::options — configuration for the Cochrane–Orcutt corrector.
//!
//! - [`COOptions`]: mean-centering flag, degeneracy policy, and verbosity.
//! - [`DegeneracyPolicy`]: what to do when a constant series drives a
//!   variance to zero and some stage of the pipeline turns non-finite.
//!
//! The boolean-only entry point
//! [`COOutcome::cochrane_orcutt`](crate::regression::cochrane_orcutt::COOutcome::cochrane_orcutt)
//! builds a [`COOptions`] from its `mean_center` argument and otherwise uses
//! the defaults.
use crate::regression::errors::{COError, COResult};
use std::str::FromStr;

/// Handling of non-finite intermediate values.
///
/// Variants:
/// - `Propagate`: let NaN/±∞ flow into the outcome, following the IEEE
///   conventions of the underlying arithmetic. This is the default.
/// - `Reject`: stop at the first stage that produced a non-finite value and
///   return `COError::NumericDegeneracy { stage }`.
///
/// Parsing:
/// Implements `FromStr` with case-insensitive names. `"propagate"` and
/// `"nan"` map to `Propagate`; `"reject"` and `"error"` map to `Reject`.
/// Anything else returns `COError::InvalidPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneracyPolicy {
    #[default]
    Propagate,
    Reject,
}

impl FromStr for DegeneracyPolicy {
    type Err = COError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "propagate" | "nan" => Ok(DegeneracyPolicy::Propagate),
            "reject" | "error" => Ok(DegeneracyPolicy::Reject),
            _ => Err(COError::InvalidPolicy { name: s.to_string() }),
        }
    }
}

impl DegeneracyPolicy {
    /// Apply the policy to the values produced by one pipeline stage.
    ///
    /// Under `Propagate` this always succeeds. Under `Reject` it fails with
    /// `NumericDegeneracy { stage }` if any value is NaN or infinite.
    pub fn check<I>(&self, stage: &'static str, values: I) -> COResult<()>
    where
        I: IntoIterator<Item = f64>,
    {
        match self {
            DegeneracyPolicy::Propagate => Ok(()),
            DegeneracyPolicy::Reject => {
                if values.into_iter().all(f64::is_finite) {
                    Ok(())
                } else {
                    Err(COError::NumericDegeneracy { stage })
                }
            }
        }
    }
}

/// Corrector-level configuration.
///
/// Fields:
/// - `mean_center: bool` — shift `xt` by its own mean before any other step.
///   The returned intercept is then the fitted line's value at the mean of
///   `xt`; slope, p-value, and correlation are unaffected.
/// - `degeneracy: DegeneracyPolicy` — NaN propagation vs. early rejection.
/// - `verbose: bool` — if `true`, emits per-stage diagnostics through a
///   terminal logger (behind the `obs_slog` feature; a no-op otherwise).
///
/// Default:
/// - `mean_center`: `false`
/// - `degeneracy`: `Propagate`
/// - `verbose`: `false`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct COOptions {
    pub mean_center: bool,
    pub degeneracy: DegeneracyPolicy,
    pub verbose: bool,
}

impl COOptions {
    pub fn new(mean_center: bool, degeneracy: DegeneracyPolicy, verbose: bool) -> Self {
        Self { mean_center, degeneracy, verbose }
    }

    pub fn with_mean_center(mut self, mean_center: bool) -> Self {
        self.mean_center = mean_center;
        self
    }

    pub fn with_degeneracy(mut self, degeneracy: DegeneracyPolicy) -> Self {
        self.degeneracy = degeneracy;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
