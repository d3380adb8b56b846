//! Operand capture for assertion diagnostics.
//!
//! An assertion like `check!(cx, a + b == c)` needs the values of both
//! comparison operands and the comparison symbol to build its failure
//! message. Capture is a two-stage builder: [`capture`] wraps the left
//! operand by value, then a comparison method ([`Captured::eq`],
//! [`Captured::lt`], ...) wraps the right operand and the comparison
//! kind into a [`Comparison`]. The kind is a zero-sized tag type, so
//! the comparison rule and its symbol are resolved at compile time.
//!
//! Operand values are taken eagerly (a side-effecting subexpression
//! runs exactly once no matter the verdict), but stringification is
//! deferred until a failure is confirmed.
//!
//! # Examples
//!
//! ```rust
//! use prove::{capture, IntoOutcome};
//! let failing = capture(5).eq(6).into_outcome();
//! assert!(!failing.passed());
//! assert_eq!(failing.message(), "[ 5 == 6 ]");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Rem, Sub};

use crate::outcome::{IntoOutcome, Outcome};

/// A comparison kind: its source symbol plus its evaluation rule.
///
/// Implemented by the six zero-sized tag types ([`Equal`],
/// [`NotEqual`], [`LessThan`], [`LessThanEqual`], [`GreaterThan`],
/// [`GreaterThanEqual`]), each delegating to the native
/// `PartialEq`/`PartialOrd` operator for the operand types.
pub trait CompareOp<L, R> {
    /// The operator symbol as it appears in a rendered failure.
    const SYMBOL: &'static str;

    /// Applies the comparison with the host language's semantics.
    fn eval(lhs: &L, rhs: &R) -> bool;
}

macro_rules! compare_tags {
    ($($(#[$meta:meta])* $name:ident, $bound:ident, $symbol:literal, $lhs:ident $op:tt $rhs:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl<L, R> CompareOp<L, R> for $name
            where
                L: $bound<R>,
            {
                const SYMBOL: &'static str = $symbol;

                fn eval($lhs: &L, $rhs: &R) -> bool {
                    $lhs $op $rhs
                }
            }
        )+
    };
}

compare_tags! {
    /// The `==` comparison.
    Equal, PartialEq, "==", lhs == rhs;
    /// The `!=` comparison.
    NotEqual, PartialEq, "!=", lhs != rhs;
    /// The `<` comparison.
    LessThan, PartialOrd, "<", lhs < rhs;
    /// The `<=` comparison.
    LessThanEqual, PartialOrd, "<=", lhs <= rhs;
    /// The `>` comparison.
    GreaterThan, PartialOrd, ">", lhs > rhs;
    /// The `>=` comparison.
    GreaterThanEqual, PartialOrd, ">=", lhs >= rhs;
}

/// Wraps the left operand of an assertion by value.
///
/// Copying the operand in means later mutation of the source value
/// cannot change what the assertion saw.
pub fn capture<T>(value: T) -> Captured<T> {
    Captured { value }
}

/// A captured left operand, waiting for a comparison or a combining
/// operator.
///
/// If neither follows, the captured value's own truthiness is the
/// verdict (only `Captured<bool>` normalizes to an [`Outcome`]).
#[derive(Debug, Clone, Copy)]
pub struct Captured<T> {
    value: T,
}

impl<T> Captured<T> {
    /// Borrows the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the captured value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Compares against `rhs` with an explicit kind tag.
    ///
    /// The shorthand methods below fix the tag; this form exists for
    /// generic callers.
    pub fn compare<U, Op>(self, rhs: U) -> Comparison<T, U, Op>
    where
        Op: CompareOp<T, U>,
    {
        Comparison::new(self.value, rhs)
    }

    /// `lhs == rhs`.
    pub fn eq<U>(self, rhs: U) -> Comparison<T, U, Equal>
    where
        T: PartialEq<U>,
    {
        self.compare(rhs)
    }

    /// `lhs != rhs`.
    pub fn ne<U>(self, rhs: U) -> Comparison<T, U, NotEqual>
    where
        T: PartialEq<U>,
    {
        self.compare(rhs)
    }

    /// `lhs < rhs`.
    pub fn lt<U>(self, rhs: U) -> Comparison<T, U, LessThan>
    where
        T: PartialOrd<U>,
    {
        self.compare(rhs)
    }

    /// `lhs <= rhs`.
    pub fn le<U>(self, rhs: U) -> Comparison<T, U, LessThanEqual>
    where
        T: PartialOrd<U>,
    {
        self.compare(rhs)
    }

    /// `lhs > rhs`.
    pub fn gt<U>(self, rhs: U) -> Comparison<T, U, GreaterThan>
    where
        T: PartialOrd<U>,
    {
        self.compare(rhs)
    }

    /// `lhs >= rhs`.
    pub fn ge<U>(self, rhs: U) -> Comparison<T, U, GreaterThanEqual>
    where
        T: PartialOrd<U>,
    {
        self.compare(rhs)
    }

    /// `lhs + rhs`, re-captured as the new left operand.
    pub fn add<U>(self, rhs: U) -> Captured<T::Output>
    where
        T: Add<U>,
    {
        capture(self.value + rhs)
    }

    /// `lhs - rhs`, re-captured.
    pub fn sub<U>(self, rhs: U) -> Captured<T::Output>
    where
        T: Sub<U>,
    {
        capture(self.value - rhs)
    }

    /// `lhs * rhs`, re-captured.
    pub fn mul<U>(self, rhs: U) -> Captured<T::Output>
    where
        T: Mul<U>,
    {
        capture(self.value * rhs)
    }

    /// `lhs / rhs`, re-captured.
    pub fn div<U>(self, rhs: U) -> Captured<T::Output>
    where
        T: Div<U>,
    {
        capture(self.value / rhs)
    }

    /// `lhs % rhs`, re-captured.
    pub fn rem<U>(self, rhs: U) -> Captured<T::Output>
    where
        T: Rem<U>,
    {
        capture(self.value % rhs)
    }

    /// `lhs & rhs`, re-captured.
    pub fn bitand<U>(self, rhs: U) -> Captured<T::Output>
    where
        T: BitAnd<U>,
    {
        capture(self.value & rhs)
    }

    /// `lhs | rhs`, re-captured.
    pub fn bitor<U>(self, rhs: U) -> Captured<T::Output>
    where
        T: BitOr<U>,
    {
        capture(self.value | rhs)
    }
}

impl Captured<bool> {
    /// Logical and. Both operands are already evaluated, so this does
    /// not short-circuit.
    pub fn and(self, rhs: bool) -> Captured<bool> {
        capture(self.value && rhs)
    }

    /// Logical or. Does not short-circuit.
    pub fn or(self, rhs: bool) -> Captured<bool> {
        capture(self.value || rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Captured<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl IntoOutcome for Captured<bool> {
    fn into_outcome(self) -> Outcome {
        self.value.into_outcome()
    }
}

/// A fully captured comparison: both operand values plus the kind tag.
///
/// Immutable once built; evaluated and rendered on demand.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<L, R, Op> {
    lhs: L,
    rhs: R,
    kind: PhantomData<Op>,
}

impl<L, R, Op> Comparison<L, R, Op>
where
    Op: CompareOp<L, R>,
{
    pub fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs,
            rhs,
            kind: PhantomData,
        }
    }

    /// Applies the stored comparison rule.
    pub fn value(&self) -> bool {
        Op::eval(&self.lhs, &self.rhs)
    }
}

impl<L, R, Op> fmt::Display for Comparison<L, R, Op>
where
    L: fmt::Display,
    R: fmt::Display,
    Op: CompareOp<L, R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} {} {} ]", self.lhs, Op::SYMBOL, self.rhs)
    }
}

impl<L, R, Op> IntoOutcome for Comparison<L, R, Op>
where
    L: fmt::Display,
    R: fmt::Display,
    Op: CompareOp<L, R>,
{
    fn into_outcome(self) -> Outcome {
        let passed = self.value();
        let mut outcome = Outcome::new(passed);
        if !passed {
            outcome.append(&self);
        }
        outcome
    }
}
