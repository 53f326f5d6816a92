#![cfg(feature = "compose")]
//! Property-based tests for chaining laws.
//!
//! ## Identity
//! - `wrap!(op, identity_wrapper)(x) == op(x)`
//! - `wrap!(op, identity_wrapper, f)(x) == wrap!(op, f)(x)`
//!
//! ## Associativity
//! - Applying `[f, g, h]` in one fold equals applying `[f, g]` then `[h]`
//!
//! ## Driver consistency
//! - `Chain`, `apply_all` and `wrap!` build the same operation

use proptest::prelude::*;
use structural_patterns::compose::{
    BoxedOperation, Chain, WrapperFactory, apply_all, boxed, identity_wrapper,
};
use structural_patterns::wrap;

fn base() -> BoxedOperation<i64, i64> {
    boxed(|x: i64| x.wrapping_mul(3))
}

fn increment(operation: BoxedOperation<i64, i64>) -> BoxedOperation<i64, i64> {
    boxed(move |x: i64| operation(x).wrapping_add(1))
}

fn double(operation: BoxedOperation<i64, i64>) -> BoxedOperation<i64, i64> {
    boxed(move |x: i64| operation(x).wrapping_mul(2))
}

fn negate_input(operation: BoxedOperation<i64, i64>) -> BoxedOperation<i64, i64> {
    boxed(move |x: i64| operation(x.wrapping_neg()))
}

const TABLE: [WrapperFactory<i64, i64>; 4] = [increment, double, negate_input, identity_wrapper];

fn factories() -> impl Strategy<Value = Vec<WrapperFactory<i64, i64>>> {
    prop::collection::vec(0..TABLE.len(), 0..8)
        .prop_map(|indices| indices.into_iter().map(|index| TABLE[index]).collect())
}

// =============================================================================
// Identity Laws
// =============================================================================

proptest! {
    /// Left identity: wrapping with identity_wrapper changes nothing.
    #[test]
    fn prop_identity_wrapper_is_neutral(x in any::<i64>()) {
        let wrapped = wrap!(base(), identity_wrapper);
        prop_assert_eq!(wrapped(x), base()(x));
    }

    /// identity_wrapper in front of a factory is a no-op.
    #[test]
    fn prop_identity_before_factory(x in any::<i64>()) {
        let with_identity = wrap!(base(), identity_wrapper, increment);
        let without = wrap!(base(), increment);
        prop_assert_eq!(with_identity(x), without(x));
    }
}

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    /// Folding a list in one go equals folding any split of it in two steps.
    #[test]
    fn prop_apply_all_is_associative(
        x in any::<i64>(),
        list in factories(),
        split in 0usize..8,
    ) {
        let split = split.min(list.len());
        let (front, back) = list.split_at(split);

        let at_once = apply_all(base(), list.iter().copied());
        let in_two = apply_all(apply_all(base(), front.iter().copied()), back.iter().copied());

        prop_assert_eq!(at_once(x), in_two(x));
    }
}

// =============================================================================
// Driver Consistency
// =============================================================================

proptest! {
    /// Chain::wrap applied in order equals apply_all over the same list.
    #[test]
    fn prop_chain_matches_apply_all(x in any::<i64>(), list in factories()) {
        let chain = list
            .iter()
            .fold(Chain::from_boxed(base()), |chain, factory| chain.wrap(*factory));
        prop_assert_eq!(chain.depth(), list.len());

        let by_chain = chain.build();
        let by_fold = apply_all(base(), list.iter().copied());
        prop_assert_eq!(by_chain(x), by_fold(x));
    }

    /// wrap! with three factories equals apply_all over the same three.
    #[test]
    fn prop_wrap_macro_matches_apply_all(x in any::<i64>()) {
        let by_macro = wrap!(base(), negate_input, increment, double);
        let by_fold = apply_all(base(), [negate_input as WrapperFactory<i64, i64>, increment, double]);
        prop_assert_eq!(by_macro(x), by_fold(x));
    }
}
