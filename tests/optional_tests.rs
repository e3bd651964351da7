#![cfg(feature = "optional")]
//! Tests for the optional combinators.

use effectual::optional::{fold, sequence, traverse, zip2, zip2_with, zip3, zip3_with};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::RefCell;

// =============================================================================
// zip2 / zip3
// =============================================================================

#[rstest]
#[case(Some(2), Some(3), Some(5))]
#[case(None, Some(3), None)]
#[case(Some(2), None, None)]
#[case(None, None, None)]
fn zip2_requires_both(
    #[case] first: Option<i32>,
    #[case] second: Option<i32>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(zip2(first, second, |a, b| a + b), expected);
}

#[rstest]
#[case(Some(1), Some(2), Some(3), Some(6))]
#[case(None, Some(2), Some(3), None)]
#[case(Some(1), None, Some(3), None)]
#[case(Some(1), Some(2), None, None)]
fn zip3_requires_all(
    #[case] first: Option<i32>,
    #[case] second: Option<i32>,
    #[case] third: Option<i32>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(zip3(first, second, third, |a, b, c| a + b + c), expected);
}

#[rstest]
fn zip2_with_checks_first_before_forcing_second() {
    let order = RefCell::new(Vec::new());
    let first = || {
        order.borrow_mut().push("a");
        None::<i32>
    };

    let result = zip2_with(
        first(),
        || {
            order.borrow_mut().push("b");
            Some(3)
        },
        |a, b| a + b,
    );

    assert_eq!(result, None);
    assert_eq!(*order.borrow(), vec!["a"]);
}

#[rstest]
fn zip3_with_forces_in_order() {
    let order = RefCell::new(Vec::new());

    let result = zip3_with(
        Some("a"),
        || {
            order.borrow_mut().push("b");
            Some("b")
        },
        || {
            order.borrow_mut().push("c");
            Some("c")
        },
        |a, b, c| format!("{a}{b}{c}"),
    );

    assert_eq!(result.as_deref(), Some("abc"));
    assert_eq!(*order.borrow(), vec!["b", "c"]);
}

// =============================================================================
// sequence / traverse
// =============================================================================

#[rstest]
#[case::all_present(vec![Some('a'), Some('b'), Some('c')], Some(vec!['a', 'b', 'c']))]
#[case::middle_absent(vec![Some('a'), None, Some('c')], None)]
#[case::empty(vec![], Some(vec![]))]
fn sequence_cases(#[case] items: Vec<Option<char>>, #[case] expected: Option<Vec<char>>) {
    assert_eq!(sequence(items), expected);
}

#[rstest]
fn sequence_does_not_inspect_past_first_absent() {
    let inspected = RefCell::new(0);
    let items = (0..10).map(|index| {
        *inspected.borrow_mut() += 1;
        (index != 2).then_some(index)
    });

    assert_eq!(sequence(items), None);
    assert_eq!(*inspected.borrow(), 3);
}

#[rstest]
fn traverse_parses_all_or_nothing() {
    assert_eq!(traverse(["1", "2"], |s| s.parse::<u8>().ok()), Some(vec![1, 2]));
    assert_eq!(traverse(["1", "300"], |s| s.parse::<u8>().ok()), None);
}

// =============================================================================
// fold
// =============================================================================

#[rstest]
#[case(None, "empty")]
#[case(Some(7), "v:7")]
fn fold_selects_branch(#[case] value: Option<i32>, #[case] expected: &str) {
    assert_eq!(fold(value, || "empty".to_string(), |x| format!("v:{x}")), expected);
}

#[rstest]
fn fold_never_invokes_unused_branch() {
    let calls = RefCell::new(Vec::new());

    fold(
        None::<i32>,
        || calls.borrow_mut().push("absent"),
        |_| calls.borrow_mut().push("present"),
    );
    fold(
        Some(1),
        || calls.borrow_mut().push("absent"),
        |_| calls.borrow_mut().push("present"),
    );

    assert_eq!(*calls.borrow(), vec!["absent", "present"]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// sequence is present exactly when every element is present
    #[test]
    fn prop_sequence_matches_all_present(items: Vec<Option<i16>>) {
        let all_present = items.iter().all(Option::is_some);
        let result = sequence(items.clone());

        prop_assert_eq!(result.is_some(), all_present);
        if let Some(values) = result {
            let expected: Vec<i16> = items.into_iter().flatten().collect();
            prop_assert_eq!(values, expected);
        }
    }

    /// zip2 agrees with Option::zip
    #[test]
    fn prop_zip2_agrees_with_std_zip(first: Option<i32>, second: Option<i32>) {
        let expected = first.zip(second).map(|(a, b)| a.wrapping_sub(b));
        prop_assert_eq!(zip2(first, second, i32::wrapping_sub), expected);
    }

    /// fold agrees with map_or_else
    #[test]
    fn prop_fold_agrees_with_map_or_else(value: Option<u32>) {
        let expected = value.map_or_else(|| 0, |x| u64::from(x) + 1);
        prop_assert_eq!(fold(value, || 0, |x| u64::from(x) + 1), expected);
    }
}
