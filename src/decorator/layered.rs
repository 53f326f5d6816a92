//! Decorators as trait implementations.
//!
//! [`ApiResponse`] is the component interface. [`BlogPostResponse`] is the
//! concrete component; each `*Decorator<R>` owns the response it wraps and
//! adds one block on top of it.

use super::response::{
    DEBUG_KEY, MODERATION_KEY, Response, STATS_KEY, blog_post_payload, debug_payload,
    moderation_payload, stats_payload,
};
use super::roles::UserRole;

/// Anything that can generate a response body.
pub trait ApiResponse {
    /// Builds the body.
    fn generate(&self) -> Response;
}

impl<R: ApiResponse + ?Sized> ApiResponse for Box<R> {
    fn generate(&self) -> Response {
        (**self).generate()
    }
}

/// The base blog post response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPostResponse {
    post_id: u64,
}

impl BlogPostResponse {
    /// Creates the response for `post_id`.
    #[must_use]
    pub const fn new(post_id: u64) -> Self {
        Self { post_id }
    }
}

impl ApiResponse for BlogPostResponse {
    fn generate(&self) -> Response {
        blog_post_payload(self.post_id)
    }
}

macro_rules! response_decorator {
    ($(#[$meta:meta])* $name:ident, $key:expr, $payload:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<R> {
            wrapped: R,
        }

        impl<R> $name<R> {
            /// Wraps `wrapped`.
            pub const fn new(wrapped: R) -> Self {
                Self { wrapped }
            }

            /// Returns the wrapped response.
            pub fn into_inner(self) -> R {
                self.wrapped
            }
        }

        impl<R: ApiResponse> ApiResponse for $name<R> {
            fn generate(&self) -> Response {
                let mut response = self.wrapped.generate();
                response.insert($key.to_string(), $payload());
                response
            }
        }
    };
}

response_decorator!(
    /// Adds view statistics for the post's author.
    AuthorStatsDecorator,
    STATS_KEY,
    stats_payload
);

response_decorator!(
    /// Adds moderation info for an editor.
    EditorModerationDecorator,
    MODERATION_KEY,
    moderation_payload
);

response_decorator!(
    /// Adds debug and profiling info for a developer.
    DebugProfilingDecorator,
    DEBUG_KEY,
    debug_payload
);

/// Stacks one trait-object decorator per role around a [`BlogPostResponse`].
///
/// # Examples
///
/// ```rust
/// use structural_patterns::decorator::{respond_with_layers, ApiResponse, UserRole};
///
/// let response = respond_with_layers(101, &[UserRole::Author]);
/// assert!(response.generate().contains_key("stats"));
/// ```
#[must_use]
pub fn respond_with_layers(post_id: u64, roles: &[UserRole]) -> Box<dyn ApiResponse + Send + Sync> {
    let base: Box<dyn ApiResponse + Send + Sync> = Box::new(BlogPostResponse::new(post_id));
    roles.iter().fold(base, |inner, role| match role {
        UserRole::Author => Box::new(AuthorStatsDecorator::new(inner)),
        UserRole::Editor => Box::new(EditorModerationDecorator::new(inner)),
        UserRole::Debugger => Box::new(DebugProfilingDecorator::new(inner)),
    })
}
