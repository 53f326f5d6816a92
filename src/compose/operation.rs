//! The [`Operation`] trait and its boxed form.

use static_assertions::assert_impl_all;

/// A unit of work with a fixed input and output shape.
///
/// Any `Fn(Input) -> Output` is an operation, so plain functions, closures
/// and [`BoxedOperation`] values can all be passed wherever an operation is
/// expected. Zero-argument operations use `()` as their input.
///
/// Operations take `&self`: invoking one never changes it, so the same
/// operation called twice with the same input describes the same work.
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::Operation;
///
/// fn run_twice<O: Operation<i32, Output = i32>>(operation: &O, input: i32) -> i32 {
///     operation.invoke(operation.invoke(input))
/// }
///
/// assert_eq!(run_twice(&|x: i32| x * 3, 2), 18);
/// ```
pub trait Operation<Input> {
    /// The value produced by one invocation.
    type Output;

    /// Invokes the operation once.
    fn invoke(&self, input: Input) -> Self::Output;
}

impl<Input, Output, Function> Operation<Input> for Function
where
    Function: Fn(Input) -> Output + ?Sized,
{
    type Output = Output;

    #[inline]
    fn invoke(&self, input: Input) -> Output {
        self(input)
    }
}

/// An owned, type-erased operation.
///
/// Wrapping an operation changes its concrete closure type; boxing keeps the
/// type stable so a chain can grow one wrapper at a time without the caller
/// needing to know its depth.
pub type BoxedOperation<Input, Output> = Box<dyn Fn(Input) -> Output + Send + Sync>;

assert_impl_all!(BoxedOperation<(), ()>: Send, Sync);

/// Erases a closure into a [`BoxedOperation`].
///
/// The closure is moved into the box, so any parameters it captured are
/// owned exclusively by the returned operation.
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::{boxed, BoxedOperation};
///
/// let suffix = String::from("-v2");
/// let tag: BoxedOperation<&str, String> = boxed(move |name: &str| format!("{name}{suffix}"));
///
/// assert_eq!(tag("build"), "build-v2");
/// ```
#[inline]
pub fn boxed<Input, Output, Function>(operation: Function) -> BoxedOperation<Input, Output>
where
    Function: Fn(Input) -> Output + Send + Sync + 'static,
{
    Box::new(operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_operation_is_an_operation() {
        let operation: BoxedOperation<i32, i32> = boxed(|x: i32| x + 1);
        assert_eq!(operation.invoke(1), 2);
    }

    #[test]
    fn test_function_pointer_is_an_operation() {
        fn negate(value: i32) -> i32 {
            -value
        }

        assert_eq!(negate.invoke(4), -4);
    }

    #[test]
    fn test_unit_input_operation() {
        let operation = boxed(|()| "generated");
        assert_eq!(operation(()), "generated");
    }
}
