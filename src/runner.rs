//! Deterministic, non-aborting execution of registered cases.
//!
//! The runner executes every case in registration order, streaming one
//! report block per failing assertion as it happens and finishing with
//! `All N test cases passed.` only when nothing failed. Failing
//! assertions never stop the run; a panic in a case body outside a
//! wrapped assertion is not masked and propagates out.
//!
//! The report line format is a textual contract for downstream
//! tooling: `*****FAILED: <case> at: <file>:<line>: <text>` followed
//! by the diagnostic message on its own line. Colors only ever wrap
//! that text, so a color-blind capture sees the exact same bytes.

use std::cell::{Cell, RefCell};

use miette::Diagnostic;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use thiserror::Error;

use crate::context::{CaseContext, FailureHandler};
use crate::registry::{CaseRegistry, RegisteredCase};

/// Reporting configuration.
///
/// `use_colors` defaults to whether stdout is a terminal.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl RunConfig {
    fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

/// One reported assertion failure, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub case: String,
    pub file: String,
    pub line: u32,
    pub text: String,
    pub message: String,
}

/// Aggregate outcome of one run.
#[derive(Debug)]
pub struct RunSummary {
    cases: usize,
    failed_cases: usize,
    failures: Vec<Failure>,
}

impl RunSummary {
    /// Number of cases executed.
    pub fn cases(&self) -> usize {
        self.cases
    }

    /// Number of cases with at least one failing assertion.
    pub fn failed_cases(&self) -> usize {
        self.failed_cases
    }

    /// Every reported assertion failure, in report order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts the summary into a host-facing result, for embedders
    /// that propagate a diagnostic instead of mapping an exit code
    /// themselves.
    pub fn into_result(self) -> Result<(), RunError> {
        if self.all_passed() {
            Ok(())
        } else {
            Err(RunError {
                cases: self.cases,
                failed_cases: self.failed_cases,
            })
        }
    }
}

/// Aggregate failure of a run, as a diagnostic for embedding hosts.
#[derive(Debug, Error, Diagnostic)]
#[error("{failed_cases} of {cases} test cases failed")]
#[diagnostic(
    code(prove::cases_failed),
    help("failing assertions are listed in the run output")
)]
pub struct RunError {
    cases: usize,
    failed_cases: usize,
}

impl RunError {
    pub fn cases(&self) -> usize {
        self.cases
    }

    pub fn failed_cases(&self) -> usize {
        self.failed_cases
    }
}

/// Executes a registry's cases and reports failures as they happen.
///
/// # Examples
///
/// ```rust
/// use prove::{CaseRegistry, Runner};
///
/// let mut registry = CaseRegistry::new();
/// registry.register("arithmetic", |cx| prove::check!(cx, 1 + 1 == 2));
///
/// let summary = Runner::new().run(&registry);
/// assert!(summary.all_passed());
/// ```
#[derive(Debug, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RunConfig) -> Self {
        Self { config }
    }

    /// Runs every registered case, reporting to stdout.
    pub fn run(&self, registry: &CaseRegistry) -> RunSummary {
        let mut stream = StandardStream::stdout(self.config.color_choice());
        self.run_to(registry, &mut stream)
    }

    /// Runs every registered case, reporting to `out`.
    ///
    /// Tests hand in a [`termcolor::Buffer`] to capture the report;
    /// report-stream write errors are ignored, matching console
    /// behavior.
    pub fn run_to(&self, registry: &CaseRegistry, out: &mut dyn WriteColor) -> RunSummary {
        let out = RefCell::new(out);
        let failures = RefCell::new(Vec::new());
        let mut failed_cases = 0;

        for case in registry.cases() {
            let case_failed = Cell::new(false);
            execute_case(case, &|ctx, message| {
                case_failed.set(true);
                failures.borrow_mut().push(Failure {
                    case: case.name().to_string(),
                    file: ctx.file.to_string(),
                    line: ctx.line,
                    text: ctx.text.to_string(),
                    message: message.to_string(),
                });
                let mut out = out.borrow_mut();
                let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
                let _ = write!(out, "*****FAILED: ");
                let _ = out.reset();
                let _ = writeln!(out, "{} at: {}:{}: {}", case.name(), ctx.file, ctx.line, ctx.text);
                let _ = writeln!(out, "{message}");
            });
            if case_failed.get() {
                failed_cases += 1;
            }
        }

        if failures.borrow().is_empty() {
            let mut out = out.borrow_mut();
            let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
            let _ = writeln!(out, "All {} test cases passed.", registry.len());
            let _ = out.reset();
        }

        RunSummary {
            cases: registry.len(),
            failed_cases,
            failures: failures.into_inner(),
        }
    }
}

fn execute_case(case: &RegisteredCase, on_failure: &FailureHandler<'_>) {
    case.run(&CaseContext::new(on_failure));
}

/// Captures a run's report as a plain string, colors off.
pub fn run_to_string(runner: &Runner, registry: &CaseRegistry) -> (RunSummary, String) {
    let mut buffer = Buffer::no_color();
    let summary = runner.run_to(registry, &mut buffer);
    let output = String::from_utf8_lossy(buffer.as_slice()).into_owned();
    (summary, output)
}
