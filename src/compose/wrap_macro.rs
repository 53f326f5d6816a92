//! The `wrap!` macro for stacking wrapper factories.
//!
//! This module provides the [`wrap!`] macro which applies wrapper factories
//! to an operation from left to right.

/// Applies wrapper factories to an operation from left to right.
///
/// `wrap!(op, f, g, h)` is equivalent to `h(g(f(op)))`: each factory wraps
/// the result of the previous one, so the last factory listed produces the
/// outermost layer.
///
/// # Ordering
///
/// For wrappers that post-process the output, the last factory's change is
/// observed last and wins on conflicts. For wrappers that pre-process the
/// input, the last factory's change runs first.
///
/// # Syntax
///
/// - `wrap!(op)` - Returns `op` unchanged
/// - `wrap!(op, f)` - Returns `f(op)`
/// - `wrap!(op, f, g)` - Returns `g(f(op))`
/// - `wrap!(op, f, g, h, ...)` - Wraps with any number of factories
///
/// # Type Requirements
///
/// Each factory is called exactly once, so it only needs to implement
/// [`FnOnce`]. Every factory must accept and return the same operation type.
///
/// # Examples
///
/// ## Post-processing layers
///
/// ```
/// use structural_patterns::compose::{boxed, map_output};
/// use structural_patterns::wrap;
///
/// let base = boxed(|()| vec!["base"]);
/// let layered = wrap!(
///     base,
///     map_output(|mut log: Vec<&'static str>| { log.push("first"); log }),
///     map_output(|mut log: Vec<&'static str>| { log.push("second"); log }),
/// );
///
/// assert_eq!(layered(()), vec!["base", "first", "second"]);
/// ```
///
/// ## Pre-processing layers
///
/// ```
/// use structural_patterns::compose::{boxed, map_input};
/// use structural_patterns::wrap;
///
/// let base = boxed(|x: i32| x);
/// let layered = wrap!(base, map_input(|x: i32| x + 1), map_input(|x: i32| x * 10));
///
/// // The outermost layer (x * 10) sees the input first.
/// assert_eq!(layered(2), 21);
/// ```
///
/// ## Function pointer factories
///
/// ```
/// use structural_patterns::compose::{boxed, BoxedOperation};
/// use structural_patterns::wrap;
///
/// fn negate(operation: BoxedOperation<i32, i32>) -> BoxedOperation<i32, i32> {
///     Box::new(move |x| -operation(x))
/// }
///
/// let twice_negated = wrap!(boxed(|x: i32| x + 1), negate, negate);
/// assert_eq!(twice_negated(4), 5);
/// ```
#[macro_export]
macro_rules! wrap {
    // Operation only: no layers
    ($operation:expr) => {
        $operation
    };

    // Single factory: wrap once
    ($operation:expr, $factory:expr $(,)?) => {
        ($factory)($operation)
    };

    // Several factories: wrap with the first, then recurse on the rest
    ($operation:expr, $factory:expr, $($remaining_factories:expr),+ $(,)?) => {
        $crate::wrap!(($factory)($operation), $($remaining_factories),+)
    };
}
