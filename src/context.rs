//! Per-assertion context and the per-case service container.
//!
//! Every assertion binds three pieces of call-site metadata (source
//! text, file, line) to the failure handler of its enclosing case.
//! [`CaseContext`] holds the handler for the duration of one case run
//! and is what a case body receives; [`Context`] is the per-assertion
//! binding it hands out.

use std::fmt;

use crate::outcome::IntoOutcome;

/// A failure handler: receives the failing assertion's context and its
/// diagnostic message.
///
/// The lifetime covers the handler's captures, so a runner can report
/// into state it holds on its own stack.
pub type FailureHandler<'h> = dyn Fn(&Context<'_>, &str) + 'h;

/// Call-site metadata for a single assertion, bound to the enclosing
/// case's failure handler.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub text: &'a str,
    pub file: &'a str,
    pub line: u32,
    on_failure: &'a FailureHandler<'a>,
}

impl Context<'_> {
    /// Reports a failure through the bound handler, passing this
    /// context along with `message`.
    pub fn fail(&self, message: &str) {
        (self.on_failure)(self, message);
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("text", &self.text)
            .field("file", &self.file)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

/// A container for the services a case body needs during one run.
///
/// The runner owns the failure handler and lends it to the case; every
/// check goes through here so a failing assertion reaches the runner's
/// report while a passing one has no observable effect.
pub struct CaseContext<'a> {
    on_failure: &'a FailureHandler<'a>,
}

impl<'a> CaseContext<'a> {
    pub fn new(on_failure: &'a FailureHandler<'a>) -> Self {
        Self { on_failure }
    }

    /// Binds call-site metadata to this case's failure handler.
    pub fn context<'t>(&self, text: &'t str, file: &'t str, line: u32) -> Context<'t>
    where
        'a: 't,
    {
        Context {
            text,
            file,
            line,
            on_failure: self.on_failure,
        }
    }

    /// Normalizes `outcome` and reports it through `ctx` on failure.
    pub fn check(&self, outcome: impl IntoOutcome, ctx: Context<'_>) {
        let outcome = outcome.into_outcome();
        if !outcome.passed() {
            ctx.fail(outcome.message());
        }
    }

    /// Checks with expression text but no usable source location, for
    /// call sites where file/line capture is unavailable.
    pub fn check_that(&self, outcome: impl IntoOutcome, text: &str) {
        self.check(outcome, self.context(text, "", 0));
    }

    /// Checks a bare boolean, reporting `message` verbatim on failure.
    pub fn check_msg(&self, passed: bool, message: &str) {
        if !passed {
            self.context("", "", 0).fail(message);
        }
    }
}
