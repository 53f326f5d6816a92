//! Wrapper constructors for building chains.
//!
//! - [`identity_wrapper`]: returns the operation unchanged (unit of chaining)
//! - [`map_output`]: transforms the result after delegating
//! - [`map_input`]: transforms the input before delegating
//! - [`adapt`]: bridges an operation whose input type differs from the caller's

use super::operation::{BoxedOperation, boxed};

/// Returns the operation unchanged.
///
/// `identity_wrapper` is the unit element of chaining:
/// - `wrap!(op, identity_wrapper, f)` behaves like `wrap!(op, f)`
/// - `wrap!(op, f, identity_wrapper)` behaves like `wrap!(op, f)`
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::{boxed, identity_wrapper};
///
/// let operation = identity_wrapper(boxed(|x: i32| x - 1));
/// assert_eq!(operation(10), 9);
/// ```
#[inline]
pub fn identity_wrapper<Input, Output>(
    operation: BoxedOperation<Input, Output>,
) -> BoxedOperation<Input, Output> {
    operation
}

/// Builds a wrapper that post-processes the wrapped operation's result.
///
/// The returned wrapper first invokes the operation it is given, then passes
/// the result through `transform`. This is the decorator shape: the call
/// signature is unchanged and the output is augmented.
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::{boxed, map_output};
///
/// let with_total = map_output(|mut values: Vec<i32>| {
///     values.push(values.iter().sum());
///     values
/// });
/// let operation = with_total(boxed(|()| vec![1, 2, 3]));
///
/// assert_eq!(operation(()), vec![1, 2, 3, 6]);
/// ```
pub fn map_output<Input, Output, Transform>(
    transform: Transform,
) -> impl FnOnce(BoxedOperation<Input, Output>) -> BoxedOperation<Input, Output>
where
    Input: 'static,
    Output: 'static,
    Transform: Fn(Output) -> Output + Send + Sync + 'static,
{
    move |operation: BoxedOperation<Input, Output>| boxed(move |input: Input| transform(operation(input)))
}

/// Builds a wrapper that pre-processes the input before delegating.
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::{boxed, map_input};
///
/// let trimmed = map_input(|text: String| text.trim().to_string());
/// let operation = trimmed(boxed(|text: String| text.len()));
///
/// assert_eq!(operation("  four  ".to_string()), 4);
/// ```
pub fn map_input<Input, Output, Transform>(
    transform: Transform,
) -> impl FnOnce(BoxedOperation<Input, Output>) -> BoxedOperation<Input, Output>
where
    Input: 'static,
    Output: 'static,
    Transform: Fn(Input) -> Input + Send + Sync + 'static,
{
    move |operation: BoxedOperation<Input, Output>| boxed(move |input: Input| operation(transform(input)))
}

/// Bridges an operation expecting `Inner` to a caller that supplies `Outer`.
///
/// Every invocation converts the input once and delegates exactly once.
/// This is the adapter shape: the wrapped operation is not modified, only
/// the call shape presented to the caller changes.
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::adapt;
///
/// let count_chars = |text: String| text.chars().count();
/// let from_number = adapt(count_chars, |number: u64| number.to_string());
///
/// assert_eq!(from_number(12_345), 5);
/// ```
pub fn adapt<Outer, Inner, Output, Target, Convert>(
    target: Target,
    convert: Convert,
) -> impl Fn(Outer) -> Output
where
    Target: Fn(Inner) -> Output,
    Convert: Fn(Outer) -> Inner,
{
    move |input| target(convert(input))
}
