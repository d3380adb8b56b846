//! The single fault boundary for assertion evaluation.
//!
//! [`evaluate`] runs a zero-argument thunk exactly once, normalizes
//! whatever it yields (a boolean, an [`Outcome`], or a capture object)
//! and absorbs any panic the thunk raises, so one faulting assertion
//! never aborts the remaining assertions of its case. Panics raised
//! outside a wrapped thunk are untouched and stay fatal.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};

use once_cell::sync::OnceCell;

use crate::outcome::{IntoOutcome, Outcome};

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// The hook that was active before the silencer was installed.
/// Non-absorbed panics are forwarded here unchanged.
static FALLBACK_HOOK: OnceCell<PanicHook> = OnceCell::new();

thread_local! {
    static ABSORB_DEPTH: Cell<u32> = Cell::new(0);
}

/// Installs the process panic-hook silencer once. While a thread is
/// inside an absorbing wrapper its panics produce no hook output;
/// every other thread keeps normal reporting.
fn ensure_hook_silencer() {
    FALLBACK_HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            let absorbing = ABSORB_DEPTH.with(|depth| depth.get()) > 0;
            if !absorbing {
                if let Some(previous) = FALLBACK_HOOK.get() {
                    previous(info);
                }
            }
        }));
        previous
    });
}

/// Catches an unwind out of `f` without letting the hook print.
fn absorb_unwind<R>(f: impl FnOnce() -> R) -> Result<R, Box<dyn Any + Send>> {
    ensure_hook_silencer();
    ABSORB_DEPTH.with(|depth| depth.set(depth.get() + 1));
    // An unwound thunk becomes a failing outcome, not a broken
    // invariant; the closure's captures are the caller's test state.
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    ABSORB_DEPTH.with(|depth| depth.set(depth.get() - 1));
    result
}

fn panic_description(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

fn fault_outcome(payload: &(dyn Any + Send)) -> Outcome {
    let mut outcome = Outcome::new(false);
    match panic_description(payload) {
        Some(description) => {
            outcome.append("Exception thrown: ").append(description);
        }
        None => {
            outcome.append("An unknown exception has occured");
        }
    }
    outcome
}

/// Invokes `thunk` exactly once and normalizes its value into an
/// [`Outcome`].
///
/// A panic during the thunk is absorbed here and converted into a
/// failing outcome: payloads carrying a `&str` or `String` description
/// yield `"Exception thrown: "` followed by that description, any
/// other payload yields `"An unknown exception has occured"`.
///
/// # Examples
///
/// ```rust
/// use prove::{capture, evaluate};
/// assert!(evaluate(|| capture(5).eq(5)).passed());
/// let faulted = evaluate(|| -> bool { panic!("boom") });
/// assert!(!faulted.passed());
/// assert_eq!(faulted.message(), "Exception thrown: boom");
/// ```
pub fn evaluate<T, F>(thunk: F) -> Outcome
where
    T: IntoOutcome,
    F: FnOnce() -> T,
{
    match absorb_unwind(thunk) {
        Ok(value) => value.into_outcome(),
        Err(payload) => fault_outcome(payload.as_ref()),
    }
}

/// Runs `f`, passing iff it panics.
///
/// The outcome carries `message` either way; the text is only read
/// when the expectation fails.
pub fn throws<F: FnOnce()>(f: F, message: &str) -> Outcome {
    match absorb_unwind(f) {
        Ok(()) => Outcome::with_message(false, message),
        Err(_) => Outcome::with_message(true, message),
    }
}

/// Runs `f`, passing iff it panics with a payload of type `E`.
///
/// A panic of a different kind is reported as a failure rather than
/// re-propagated; by the time the payload kind is known the unwind has
/// already been absorbed.
pub fn throws_as<E: Any, F: FnOnce()>(f: F, message: &str) -> Outcome {
    match absorb_unwind(f) {
        Ok(()) => Outcome::with_message(false, message),
        Err(payload) => Outcome::with_message(payload.downcast::<E>().is_ok(), message),
    }
}
