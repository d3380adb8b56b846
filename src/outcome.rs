use std::fmt;

/// The result of a single evaluated assertion: a pass/fail verdict
/// plus an append-only diagnostic message.
///
/// An `Outcome` is built once per assertion and consumed exactly once
/// by a check. The message buffer is only read when the verdict is
/// failure, so passing assertions usually carry an empty message.
///
/// # Examples
///
/// ```rust
/// use prove::Outcome;
/// let mut outcome = Outcome::new(false);
/// outcome.append("[ ").append(5).append(" == ").append(6).append(" ]");
/// assert!(!outcome.passed());
/// assert_eq!(outcome.message(), "[ 5 == 6 ]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    passed: bool,
    message: String,
}

impl Outcome {
    /// Creates an outcome with the given verdict and an empty message.
    pub fn new(passed: bool) -> Self {
        Self {
            passed,
            message: String::new(),
        }
    }

    /// Creates an outcome with the given verdict and an initial message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prove::Outcome;
    /// let outcome = Outcome::with_message(false, "unexpected state");
    /// assert_eq!(outcome.message(), "unexpected state");
    /// ```
    pub fn with_message(passed: bool, message: impl fmt::Display) -> Self {
        let mut outcome = Self::new(passed);
        outcome.append(message);
        outcome
    }

    /// Renders `part` to text and appends it to the message buffer.
    ///
    /// Returns `&mut Self` so appends can be chained.
    pub fn append(&mut self, part: impl fmt::Display) -> &mut Self {
        use fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.message, "{part}");
        self
    }

    /// Returns the verdict.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Overrides the verdict, keeping the accumulated message.
    ///
    /// Helper predicates use this to stream diagnostics first and
    /// decide afterwards.
    pub fn set_passed(&mut self, passed: bool) {
        self.passed = passed;
    }

    /// Returns the accumulated diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Write for Outcome {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.message.push_str(s);
        Ok(())
    }
}

/// Normalization into an [`Outcome`].
///
/// This is the single rule that lets `check!(a == b)`, `check!(flag)`
/// and `check!(some_predicate())` share one evaluation path: an
/// `Outcome` passes through unchanged, while anything exposing a
/// boolean value becomes `Outcome::new(value)` with its rendered form
/// appended on failure.
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Outcome {
        let mut outcome = Outcome::new(self);
        if !self {
            outcome.append(self);
        }
        outcome
    }
}
