//! Exact report text across whole runs.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use prove::CaseRegistry;

fn answer() -> i32 {
    5
}

#[test]
fn a_mixed_suite_reports_exactly_one_block() {
    let check_line = Rc::new(Cell::new(0u32));
    let marker = Rc::clone(&check_line);

    let mut registry = CaseRegistry::new();
    registry.register("starts_clean", |cx| prove::check!(cx, answer() == 5));
    registry.register("compares_sums", move |cx| {
        marker.set(line!() + 1);
        prove::check!(cx, answer() == 6);
    });
    registry.register("ends_clean", |cx| prove::check!(cx, answer() < 9));

    let (summary, output) = common::plain_run(&registry);
    let expected = format!(
        "*****FAILED: compares_sums at: {}:{}: answer() == 6\n[ 5 == 6 ]\n",
        file!(),
        check_line.get(),
    );
    assert_eq!(output, expected);
    assert_eq!(summary.cases(), 3);
    assert_eq!(summary.failed_cases(), 1);
    assert!(!output.contains("test cases passed."));
}

#[test]
fn one_case_with_mixed_checks_reports_only_the_failing_one() {
    let check_line = Rc::new(Cell::new(0u32));
    let marker = Rc::clone(&check_line);

    let mut registry = CaseRegistry::new();
    registry.register("mixed_verdicts", move |cx| {
        prove::check!(cx, 5 == 5);
        marker.set(line!() + 1);
        prove::check!(cx, 5 == 6);
        prove::check!(cx, true);
    });

    let (summary, output) = common::plain_run(&registry);
    let expected = format!(
        "*****FAILED: mixed_verdicts at: {}:{}: 5 == 6\n[ 5 == 6 ]\n",
        file!(),
        check_line.get(),
    );
    assert_eq!(output, expected);
    assert_eq!(summary.failures().len(), 1);
    assert!(!output.contains("test cases passed."));
}

#[test]
fn a_clean_suite_prints_the_single_summary_line() {
    let mut registry = CaseRegistry::new();
    registry.register("one", |cx| prove::check!(cx, 1 == 1));
    registry.register("two", |cx| prove::check!(cx, 2 == 2));
    registry.register("three", |cx| prove::check!(cx, 3 == 3));

    let (summary, output) = common::plain_run(&registry);
    assert_eq!(output, "All 3 test cases passed.\n");
    assert!(summary.all_passed());
}

#[test]
fn an_empty_run_counts_zero_cases() {
    let (summary, output) = common::plain_run(&CaseRegistry::new());
    assert_eq!(output, "All 0 test cases passed.\n");
    assert_eq!(summary.cases(), 0);
}

#[test]
fn later_checks_and_cases_still_run_after_a_failure() {
    let mut registry = CaseRegistry::new();
    registry.register("breaks_twice", |cx| {
        prove::check!(cx, 1 == 2);
        prove::check!(cx, 3 == 4);
    });
    registry.register("still_runs", |cx| prove::check!(cx, 5 == 5));

    let (summary, output) = common::plain_run(&registry);
    assert_eq!(summary.cases(), 2);
    assert_eq!(summary.failed_cases(), 1);
    assert_eq!(summary.failures().len(), 2);

    let first = output.find("[ 1 == 2 ]").unwrap();
    let second = output.find("[ 3 == 4 ]").unwrap();
    assert!(first < second);
    assert!(!output.contains("test cases passed."));
}

#[test]
fn panicking_conditions_render_as_exception_messages() {
    let mut registry = CaseRegistry::new();
    registry.register("reads_past_the_end", |cx| {
        let values = vec![1];
        prove::check!(cx, values[3] == 1);
    });

    let (summary, output) = common::plain_run(&registry);
    assert_eq!(summary.failures().len(), 1);
    assert!(summary.failures()[0].message.starts_with("Exception thrown: "));
    assert!(output.contains("Exception thrown: "));
    assert!(!output.contains("test cases passed."));
}

#[test]
fn opaque_panic_payloads_use_the_fallback_description() {
    struct Opaque;

    fn faulty_flag() -> bool {
        std::panic::panic_any(Opaque)
    }

    let mut registry = CaseRegistry::new();
    registry.register("raises_an_opaque_fault", |cx| {
        prove::check!(cx, faulty_flag());
    });

    let (summary, _) = common::plain_run(&registry);
    assert_eq!(
        summary.failures()[0].message,
        "An unknown exception has occured"
    );
}
