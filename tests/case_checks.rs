//! End-user assertion scenarios driven through the whole engine:
//! registration, capture, fault absorption, and reporting.

mod common;

use prove::{CaseContext, CaseRegistry, Fixture};

fn within_bounds(value: i32, limit: i32) -> bool {
    value >= 0 && value < limit
}

#[derive(Debug)]
struct OutOfRange(usize);

fn guarded_fetch(values: &[i32], index: usize) -> i32 {
    if index >= values.len() {
        std::panic::panic_any(OutOfRange(index));
    }
    values[index]
}

fn arithmetic(cx: &CaseContext<'_>) {
    let i = 5;
    prove::check!(cx, i == 5);
    prove::check!(cx, i != 6);
    prove::check!(cx, i + 1 <= 6);
    prove::check!(cx, i * 2 > 9);
}

fn predicates(cx: &CaseContext<'_>) {
    prove::check!(cx, within_bounds(2, 3));
    prove::check!(cx, !within_bounds(7, 3));
    prove::check!(cx, within_bounds(1, 3) && !within_bounds(3, 3));
}

fn strings(cx: &CaseContext<'_>) {
    let greeting = String::from("hello");
    prove::check!(cx, greeting.len() < 10);
    prove::check!(cx, greeting == "hello");
}

fn faults(cx: &CaseContext<'_>) {
    let empty: Vec<i32> = Vec::new();
    prove::throws!(cx, empty[0]);
    prove::throws!(cx, panic!("forced"));
}

fn typed_faults(cx: &CaseContext<'_>) {
    let values = [1, 2, 3];
    prove::check!(cx, guarded_fetch(&values, 1) == 2);
    prove::throws_as!(cx, guarded_fetch(&values, 9), OutOfRange);
}

#[derive(Debug)]
struct Scoreboard {
    scores: Vec<u32>,
    limit: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            scores: vec![3, 1, 4],
            limit: 16,
        }
    }
}

impl Fixture for Scoreboard {
    fn test(&mut self, cx: &CaseContext<'_>) {
        self.scores.push(1);
        prove::check!(cx, self.scores.len() == 4);
        let total: u32 = self.scores.iter().sum();
        prove::check!(cx, total <= self.limit);
    }
}

#[test]
fn the_demo_suite_passes_cleanly() {
    let mut registry = CaseRegistry::new();
    prove::register_cases!(registry, arithmetic, predicates, strings, faults, typed_faults);
    registry.register_fixture::<Scoreboard>();

    let (summary, output) = common::plain_run(&registry);
    assert!(summary.all_passed(), "unexpected report:\n{output}");
    assert_eq!(output, "All 6 test cases passed.\n");
}

#[test]
fn failing_checks_render_their_operands() {
    let mut registry = CaseRegistry::new();
    registry.register("score_mismatch", |cx| {
        let expected = 10;
        let actual = 3 + 4;
        prove::check!(cx, actual == expected);
    });

    let (summary, output) = common::plain_run(&registry);
    assert_eq!(summary.failures().len(), 1);
    let failure = &summary.failures()[0];
    assert_eq!(failure.case, "score_mismatch");
    assert_eq!(failure.text, "actual == expected");
    assert_eq!(failure.message, "[ 7 == 10 ]");
    assert!(!output.contains("test cases passed."));
}

#[test]
fn a_missing_panic_is_an_ordinary_failure() {
    let mut registry = CaseRegistry::new();
    registry.register("expects_a_panic", |cx| {
        prove::throws!(cx, drop(41));
    });

    let (summary, _) = common::plain_run(&registry);
    assert_eq!(summary.failures().len(), 1);
    assert_eq!(summary.failures()[0].message, "Failed to throw");
}

#[test]
fn a_panic_outside_any_check_is_not_masked() {
    let mut registry = CaseRegistry::new();
    registry.register("detonates", |_| panic!("setup failed"));

    let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        common::plain_run(&registry)
    }));
    assert!(caught.is_err());
}
