//! Response decorators.
//!
//! A blog post API returns the same base JSON to everyone. Authors also see
//! view statistics, editors see moderation state, and developers see
//! profiling data. Instead of one response type per role combination, each
//! extra block is a decorator that wraps the response operation and adds one
//! key.
//!
//! - [`blog_post_response`]: the base operation
//! - [`author_stats_decorator`], [`editor_moderation_decorator`],
//!   [`debug_profiling_decorator`]: the wrapper factories
//! - [`UserRole`] and [`decorate_for_roles`]: role lookup table plus a fold
//! - [`ApiResponse`] and the `*Decorator` structs: the same layering with
//!   trait objects
//! - [`inline_response`]: the version without decorators
//!
//! # Examples
//!
//! ```rust
//! use structural_patterns::decorator::{handle_api_request, UserRole};
//!
//! let reply = handle_api_request(&[UserRole::Editor, UserRole::Debugger]);
//!
//! assert_eq!(reply.context, "Context: Request with 2 special role(s).");
//! assert!(reply.body.contains_key("moderation"));
//! assert!(reply.body.contains_key("_debug"));
//! assert!(!reply.body.contains_key("stats"));
//! ```

mod handler;
mod inline;
mod layered;
mod layers;
mod response;
mod roles;

pub use handler::{ApiReply, DEMO_POST_ID, handle_api_request};
pub use inline::inline_response;
pub use layered::{
    ApiResponse, AuthorStatsDecorator, BlogPostResponse, DebugProfilingDecorator,
    EditorModerationDecorator, respond_with_layers,
};
pub use layers::{author_stats_decorator, debug_profiling_decorator, editor_moderation_decorator};
pub use response::{
    DEBUG_KEY, MODERATION_KEY, Response, ResponseOperation, STATS_KEY, blog_post_payload,
    blog_post_response, debug_payload, moderation_payload, stats_payload,
};
pub use roles::{UserRole, decorate_for_roles};
