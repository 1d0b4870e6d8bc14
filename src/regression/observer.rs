//! regression::observer — terminal diagnostics for verbose correction runs.
//!
//! Compiled only with the `obs_slog` feature. When
//! [`COOptions::verbose`](crate::regression::options::COOptions) is set, the
//! corrector hands its outcome and intermediate fits to [`log_correction`],
//! which writes one structured record per pipeline stage to stderr through a
//! non-blocking `slog` terminal drain.
//!
//! The logger is built per call and dropped on return; dropping the async
//! drain flushes every pending record before the corrector returns.
use crate::regression::{
    cochrane_orcutt::{CODiagnostics, COOutcome},
    options::COOptions,
};
use slog::{Drain, Logger, info, o};

/// Build a non-blocking terminal logger tagged with the series length.
pub fn term_logger(n: usize) -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::Block)
        .build()
        .fuse();
    Logger::root(drain, o!("component" => "cochrane_orcutt", "n" => n))
}

/// Emit per-stage records for one completed correction pass.
pub fn log_correction(opts: &COOptions, outcome: &COOutcome, diag: &CODiagnostics) {
    let log = term_logger(diag.n);
    info!(log, "input";
        "mean_center" => opts.mean_center,
        "degeneracy" => format!("{:?}", opts.degeneracy));
    info!(log, "lag-1 autocorrelation"; "autocorr" => diag.autocorr);
    info!(log, "first-pass regression";
        "slope" => diag.first.slope,
        "intercept" => diag.first.intercept,
        "rvalue" => diag.first.rvalue,
        "pvalue" => diag.first.pvalue);
    info!(log, "second-pass regression";
        "stderr" => diag.second.stderr,
        "intercept_stderr" => diag.second.intercept_stderr);
    info!(log, "second lag-1 autocorrelation"; "autocorr2" => diag.autocorr2);
    info!(log, "corrected standard errors";
        "stderr" => outcome.stderr(),
        "intercept_stderr" => outcome.intercept_stderr());
}
