//! Assertion macros: the user-facing surface of the engine.
//!
//! [`check!`] stringifies its condition for the report, evaluates it
//! under [`crate::eval::evaluate`] so a panic inside the condition
//! becomes an ordinary failure, and splits `lhs <op> rhs` comparisons
//! into a [`crate::capture::Captured`] pair so the failure message can
//! show the operand values instead of a bare `false`.
//!
//! The splitter works on the condition's token stream:
//!
//! - A top-level `&&` or `||` turns splitting off for the whole
//!   condition. The expression is evaluated natively, keeping Rust's
//!   short-circuit semantics, and a failure renders as `false`.
//! - Otherwise the condition is split at its top-level comparison
//!   (`==`, `!=`, `<`, `<=`, `>`, `>=`) if it has one. Comparisons
//!   bind looser than every arithmetic and bitwise operator, so the
//!   split point is exactly where Rust itself would parse the
//!   comparison.
//! - A condition with neither is evaluated as-is and must produce a
//!   `bool` or an [`crate::outcome::Outcome`].
//!
//! Splitting sees only top-level tokens. A bare turbofish such as
//! `iter.collect::<Vec<i32>>()` puts `<` and `>` at the top level and
//! will not expand; wrap that operand in parentheses. Parenthesized
//! conditions like `(a == b)` are a single token group and evaluate
//! natively, losing operand capture but nothing else.
//!
//! # Examples
//!
//! ```rust
//! use prove::{CaseContext, CaseRegistry, Runner};
//!
//! fn arithmetic(cx: &CaseContext<'_>) {
//!     let total = 2 + 2;
//!     prove::check!(cx, total == 4);
//! }
//!
//! let mut registry = CaseRegistry::new();
//! prove::register_cases!(registry, arithmetic);
//! assert!(Runner::new().run(&registry).all_passed());
//! ```

/// Checks a condition against a case context.
///
/// On failure the context's handler receives the stringified
/// condition, the call site, and a message carrying the captured
/// operand values where the condition was a comparison.
#[macro_export]
macro_rules! check {
    ($cx:expr, $($cond:tt)+) => {{
        let __cx = &$cx;
        __cx.check(
            $crate::eval::evaluate(|| $crate::__capture!($($cond)+)),
            __cx.context(stringify!($($cond)+), file!(), line!()),
        )
    }};
}

/// Checks that a statement panics.
///
/// Fails with `Failed to throw` when the statement runs to completion.
#[macro_export]
macro_rules! throws {
    ($cx:expr, $($stmt:tt)+) => {{
        let __cx = &$cx;
        __cx.check(
            $crate::eval::throws(|| { $($stmt)+; }, "Failed to throw"),
            __cx.context(stringify!($($stmt)+), file!(), line!()),
        )
    }};
}

/// Checks that a statement panics with a payload of the given type.
///
/// Fails with `Failed to throw exception <Kind>` when the statement
/// runs to completion. A panic carrying any other payload type is
/// reported as a failure, not propagated.
#[macro_export]
macro_rules! throws_as {
    ($cx:expr, $stmt:expr, $kind:ty) => {{
        let __cx = &$cx;
        __cx.check(
            $crate::eval::throws_as::<$kind, _>(
                || { $stmt; },
                concat!("Failed to throw exception ", stringify!($kind)),
            ),
            __cx.context(stringify!($stmt), file!(), line!()),
        )
    }};
}

/// Checks a condition at compile time.
#[macro_export]
macro_rules! static_check {
    ($cond:expr $(, $msg:literal)? $(,)?) => {
        const _: () = assert!($cond $(, $msg)?);
    };
}

/// Registers named case functions, in order, under their own names.
///
/// Each case is a `fn(&CaseContext<'_>)`; bring cases from other
/// modules into scope with `use` before registering them.
#[macro_export]
macro_rules! register_cases {
    ($registry:expr $(, $case:ident)+ $(,)?) => {{
        let __registry = &mut $registry;
        $( __registry.register(stringify!($case), $case); )+
    }};
}

/// Token-stream splitter behind [`check!`].
///
/// Internal arms come before the entry arm so an `@scan`/`@split`
/// recursion never re-enters through the catch-all.
#[doc(hidden)]
#[macro_export]
macro_rules! __capture {
    // Scan pass: a top-level logical operator means the condition must
    // keep native evaluation order, so splitting is skipped entirely.
    (@scan [$($seen:tt)*] && $($rest:tt)*) => {
        ($($seen)* && $($rest)*)
    };
    (@scan [$($seen:tt)*] || $($rest:tt)*) => {
        ($($seen)* || $($rest)*)
    };
    (@scan [$($seen:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__capture!(@scan [$($seen)* $next] $($rest)*)
    };
    (@scan [$($seen:tt)*]) => {
        $crate::__capture!(@split [] $($seen)*)
    };

    // Split pass: break at the top-level comparison. Two-character
    // operators come before their one-character prefixes.
    (@split [$($lhs:tt)*] == $($rhs:tt)+) => {
        $crate::capture::capture($($lhs)*).compare::<_, $crate::capture::Equal>($($rhs)+)
    };
    (@split [$($lhs:tt)*] != $($rhs:tt)+) => {
        $crate::capture::capture($($lhs)*).compare::<_, $crate::capture::NotEqual>($($rhs)+)
    };
    (@split [$($lhs:tt)*] <= $($rhs:tt)+) => {
        $crate::capture::capture($($lhs)*).compare::<_, $crate::capture::LessThanEqual>($($rhs)+)
    };
    (@split [$($lhs:tt)*] >= $($rhs:tt)+) => {
        $crate::capture::capture($($lhs)*).compare::<_, $crate::capture::GreaterThanEqual>($($rhs)+)
    };
    (@split [$($lhs:tt)*] < $($rhs:tt)+) => {
        $crate::capture::capture($($lhs)*).compare::<_, $crate::capture::LessThan>($($rhs)+)
    };
    (@split [$($lhs:tt)*] > $($rhs:tt)+) => {
        $crate::capture::capture($($lhs)*).compare::<_, $crate::capture::GreaterThan>($($rhs)+)
    };
    (@split [$($lhs:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__capture!(@split [$($lhs)* $next] $($rest)*)
    };
    (@split [$($lhs:tt)*]) => {
        ($($lhs)*)
    };

    ($($cond:tt)+) => {
        $crate::__capture!(@scan [] $($cond)+)
    };
}
