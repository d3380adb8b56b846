//! The ordered test-case registry.
//!
//! The registry is a single source of truth: it is built once at the
//! entrypoint, populated by explicit registration calls (one `register`
//! function per case module is the usual shape), and passed by
//! reference to the runner. Registration is a pure append and cannot
//! fail; insertion order is execution order, and registering the same
//! name twice yields two distinct entries, never a merge.
//!
//! # Examples
//!
//! ```rust
//! use prove::{CaseContext, CaseRegistry};
//!
//! fn addition(cx: &CaseContext<'_>) {
//!     prove::check!(cx, 1 + 1 == 2);
//! }
//!
//! let mut registry = CaseRegistry::new();
//! registry.register("addition", addition);
//! assert_eq!(registry.len(), 1);
//! ```

use std::fmt;

use crate::context::CaseContext;

/// A test case with persistent setup state.
///
/// The registry constructs a fresh `Self::default()` for every run, so
/// state set up in `default` is visible to all assertions of one run
/// and never leaks into the next.
pub trait Fixture: Default {
    fn test(&mut self, cx: &CaseContext<'_>);
}

/// One named, runnable test case.
pub struct RegisteredCase {
    name: String,
    body: Box<dyn Fn(&CaseContext<'_>)>,
}

impl RegisteredCase {
    pub fn new(name: impl Into<String>, body: impl Fn(&CaseContext<'_>) + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes the case body against the given per-run services.
    pub fn run(&self, cx: &CaseContext<'_>) {
        (self.body)(cx);
    }
}

impl fmt::Debug for RegisteredCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The process-wide ordered collection of registered cases.
#[derive(Debug, Default)]
pub struct CaseRegistry {
    cases: Vec<RegisteredCase>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named bare-function case.
    pub fn register(&mut self, name: impl Into<String>, body: impl Fn(&CaseContext<'_>) + 'static) {
        self.register_case(RegisteredCase::new(name, body));
    }

    /// Appends an already-built case.
    pub fn register_case(&mut self, case: RegisteredCase) {
        self.cases.push(case);
    }

    /// Appends an object-style case under its derived type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prove::{CaseContext, CaseRegistry, Fixture};
    ///
    /// #[derive(Default)]
    /// struct Arithmetic;
    ///
    /// impl Fixture for Arithmetic {
    ///     fn test(&mut self, cx: &CaseContext<'_>) {
    ///         prove::check!(cx, 2 * 2 == 4);
    ///     }
    /// }
    ///
    /// let mut registry = CaseRegistry::new();
    /// registry.register_fixture::<Arithmetic>();
    /// assert_eq!(registry.names(), vec!["Arithmetic"]);
    /// ```
    pub fn register_fixture<F: Fixture + 'static>(&mut self) {
        self.register(short_type_name::<F>(), |cx| {
            let mut fixture = F::default();
            fixture.test(cx);
        });
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterates the cases in registration order.
    pub fn cases(&self) -> impl Iterator<Item = &RegisteredCase> {
        self.cases.iter()
    }

    /// Lists the registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(|case| case.name()).collect()
    }
}

/// The bare name of `T`, module path stripped. Generic types keep
/// their full rendering, since their parameters carry paths of their
/// own.
fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    match name.rfind("::") {
        Some(index) if !name.contains('<') => &name[index + 2..],
        _ => name,
    }
}
