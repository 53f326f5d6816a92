//! Composition drivers: [`Chain`] and [`apply_all`].

use super::operation::{BoxedOperation, boxed};

/// A wrapper factory as a plain function pointer.
///
/// Function pointers have no captured state, which makes them suitable for
/// lookup tables that map a request to the wrapper it should apply.
pub type WrapperFactory<Input, Output> =
    fn(BoxedOperation<Input, Output>) -> BoxedOperation<Input, Output>;

/// Applies every wrapper factory to `base`, first to last.
///
/// The last factory in the iterator produces the outermost operation, so
/// its behaviour runs last for post-processing wrappers and first for
/// pre-processing ones. An empty iterator returns `base` unchanged.
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::{apply_all, boxed, BoxedOperation, WrapperFactory};
///
/// fn add_ten(operation: BoxedOperation<i32, i32>) -> BoxedOperation<i32, i32> {
///     boxed(move |x: i32| operation(x) + 10)
/// }
///
/// fn double(operation: BoxedOperation<i32, i32>) -> BoxedOperation<i32, i32> {
///     boxed(move |x: i32| operation(x) * 2)
/// }
///
/// let wrappers: [WrapperFactory<i32, i32>; 2] = [add_ten, double];
/// let composed = apply_all(boxed(|x: i32| x), wrappers);
///
/// assert_eq!(composed(1), 22);
/// ```
pub fn apply_all<Input, Output, Factory, Factories>(
    base: BoxedOperation<Input, Output>,
    factories: Factories,
) -> BoxedOperation<Input, Output>
where
    Factories: IntoIterator<Item = Factory>,
    Factory: FnOnce(BoxedOperation<Input, Output>) -> BoxedOperation<Input, Output>,
{
    factories
        .into_iter()
        .fold(base, |operation, factory| factory(operation))
}

/// A builder that stacks wrappers around a base operation.
///
/// `Chain` is the step-by-step form of [`apply_all`]: each call to
/// [`wrap`](Chain::wrap) replaces the current operation with the wrapped one
/// and counts the layer.
///
/// # Examples
///
/// ```
/// use structural_patterns::compose::{Chain, map_output};
///
/// let chain = Chain::new(|name: &'static str| name.to_string())
///     .wrap(map_output(|text: String| text.to_uppercase()))
///     .wrap(map_output(|text: String| format!("[{text}]")));
///
/// assert_eq!(chain.depth(), 2);
///
/// let label = chain.build();
/// assert_eq!(label("draft"), "[DRAFT]");
/// ```
pub struct Chain<Input, Output> {
    operation: BoxedOperation<Input, Output>,
    depth: usize,
}

impl<Input, Output> Chain<Input, Output> {
    /// Starts a chain from a base operation.
    pub fn new<Function>(base: Function) -> Self
    where
        Function: Fn(Input) -> Output + Send + Sync + 'static,
    {
        Self::from_boxed(boxed(base))
    }

    /// Starts a chain from an operation that is already boxed.
    #[must_use]
    pub fn from_boxed(base: BoxedOperation<Input, Output>) -> Self {
        Self {
            operation: base,
            depth: 0,
        }
    }

    /// Wraps the current operation with one more layer.
    #[must_use]
    pub fn wrap<Factory>(self, factory: Factory) -> Self
    where
        Factory: FnOnce(BoxedOperation<Input, Output>) -> BoxedOperation<Input, Output>,
    {
        Self {
            operation: factory(self.operation),
            depth: self.depth + 1,
        }
    }

    /// Wraps the current operation only when `condition` holds.
    ///
    /// A skipped layer does not count towards [`depth`](Chain::depth).
    #[must_use]
    pub fn wrap_if<Factory>(self, condition: bool, factory: Factory) -> Self
    where
        Factory: FnOnce(BoxedOperation<Input, Output>) -> BoxedOperation<Input, Output>,
    {
        if condition { self.wrap(factory) } else { self }
    }

    /// Number of wrappers applied so far.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Finishes the chain and returns the composed operation.
    #[must_use]
    pub fn build(self) -> BoxedOperation<Input, Output> {
        self.operation
    }
}

impl<Input, Output> std::fmt::Debug for Chain<Input, Output> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Chain")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
