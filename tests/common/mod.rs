//! Shared helpers for the integration suites.

use prove::{CaseRegistry, RunSummary, Runner};

/// Runs a registry with colors off, returning the summary and the
/// exact report text.
pub fn plain_run(registry: &CaseRegistry) -> (RunSummary, String) {
    prove::run_to_string(&Runner::new(), registry)
}
