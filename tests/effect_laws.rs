#![cfg(feature = "effect")]
//! Property-based tests for Effect laws.
//!
//! This module verifies that `Effect` satisfies the Functor and Monad laws,
//! for successful values and for failures alike:
//! - Functor Identity: map(id) == id
//! - Functor Composition: map(f).map(g) == map(g . f)
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))

use effectual::effect::{Effect, Error, Outcome};
use proptest::prelude::*;

/// An effect that fails with a checked error for negative inputs.
fn validated(value: i32) -> Effect<i32> {
    Effect::of(move || {
        if value < 0 {
            Err(Error::checked(format!("negative: {value}")))
        } else {
            Ok(value)
        }
    })
}

/// Projects an outcome onto something comparable.
fn observe(outcome: &Outcome<i32>) -> Result<i32, String> {
    match outcome {
        Outcome::Success(value) => Ok(*value),
        Outcome::Failure(error) => Err(error.message().to_string()),
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: map(id) == id
    #[test]
    fn prop_effect_functor_identity(value: i32) {
        let left_result = observe(&validated(value).map(|x| x).attempt());
        let right_result = observe(&validated(value).attempt());

        prop_assert_eq!(left_result, right_result);
    }

    /// Functor Composition Law: map(f).map(g) == map(g . f)
    #[test]
    fn prop_effect_functor_composition(value: i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left_result = observe(&validated(value).map(function1).map(function2).attempt());
        let right_result = observe(
            &validated(value)
                .map(move |x| function2(function1(x)))
                .attempt(),
        );

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_effect_left_identity(value: i32) {
        let left_result = observe(&Effect::pure(value).flat_map(validated).attempt());
        let right_result = observe(&validated(value).attempt());

        prop_assert_eq!(left_result, right_result);
    }

    /// Right Identity Law: m.flat_map(pure) == m
    #[test]
    fn prop_effect_right_identity(value: i32) {
        let left_result = observe(&validated(value).flat_map(Effect::pure).attempt());
        let right_result = observe(&validated(value).attempt());

        prop_assert_eq!(left_result, right_result);
    }

    /// Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_effect_associativity(value: i32, offset: i32) {
        let function1 = move |n: i32| validated(n.wrapping_sub(offset));
        let function2 = |n: i32| Effect::pure(n.wrapping_mul(3));

        let left_result = observe(
            &validated(value)
                .flat_map(function1)
                .flat_map(function2)
                .attempt(),
        );
        let right_result = observe(
            &validated(value)
                .flat_map(move |x| function1(x).flat_map(function2))
                .attempt(),
        );

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Runner Properties
// =============================================================================

proptest! {
    /// pure(x).run_unsafe() == x
    #[test]
    fn prop_pure_run_unsafe_returns_value(value: Option<i64>) {
        prop_assert_eq!(Effect::pure(value).run_unsafe().unwrap(), value);
    }

    /// The three runners agree on successful values.
    #[test]
    fn prop_runners_agree_on_success(value in 0..i32::MAX) {
        let effect = validated(value);

        prop_assert_eq!(effect.run_unsafe().unwrap(), value);
        prop_assert_eq!(effect.run_optional(), Some(value));
        prop_assert_eq!(effect.attempt().into_value(), Some(value));
    }

    /// Every runner reports failure for negative input.
    #[test]
    fn prop_runners_agree_on_failure(value in i32::MIN..0) {
        let effect = validated(value).map(|x| x.wrapping_add(1));

        prop_assert!(effect.run_unsafe().unwrap_err().is_execution());
        prop_assert_eq!(effect.run_optional(), None);
        prop_assert!(effect.attempt().error().unwrap().is_checked());
    }

    /// map2 is consistent with flat_map and map
    #[test]
    fn prop_effect_map2_consistency(a: i32, b: i32) {
        let combine = |x: i32, y: i32| x.wrapping_add(y);

        let left_result = observe(&validated(a).map2(validated(b), combine).attempt());
        let right_result = observe(
            &validated(a)
                .flat_map(move |x| validated(b).map(move |y| combine(x, y)))
                .attempt(),
        );

        prop_assert_eq!(left_result, right_result);
    }
}
