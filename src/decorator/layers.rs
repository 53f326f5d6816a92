//! Decorators as wrapper factories.
//!
//! Each one invokes the wrapped operation first, then inserts its key into
//! the resulting mapping. Inserting overwrites, so when two decorators write
//! the same key the one applied last wins.

use serde_json::Value;
use tracing::debug;

use super::response::{
    DEBUG_KEY, MODERATION_KEY, Response, ResponseOperation, STATS_KEY, debug_payload,
    moderation_payload, stats_payload,
};
use crate::compose::map_output;

fn with_key(
    key: &'static str,
    payload: fn() -> Value,
) -> impl FnOnce(ResponseOperation) -> ResponseOperation {
    map_output(move |mut response: Response| {
        debug!(key, "decorating response");
        response.insert(key.to_string(), payload());
        response
    })
}

/// Adds the `stats` block for the post's author.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::decorator::{author_stats_decorator, blog_post_response};
///
/// let response = author_stats_decorator(blog_post_response(101))(());
/// assert_eq!(response["stats"]["views"], 1024);
/// ```
#[must_use]
pub fn author_stats_decorator(response: ResponseOperation) -> ResponseOperation {
    with_key(STATS_KEY, stats_payload)(response)
}

/// Adds the `moderation` block for editors.
#[must_use]
pub fn editor_moderation_decorator(response: ResponseOperation) -> ResponseOperation {
    with_key(MODERATION_KEY, moderation_payload)(response)
}

/// Adds the `_debug` block for developers.
#[must_use]
pub fn debug_profiling_decorator(response: ResponseOperation) -> ResponseOperation {
    with_key(DEBUG_KEY, debug_payload)(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::blog_post_response;
    use crate::wrap;

    #[test]
    fn test_decorators_append_after_base_keys() {
        let response = wrap!(
            blog_post_response(101),
            author_stats_decorator,
            editor_moderation_decorator,
            debug_profiling_decorator,
        )(());

        let keys: Vec<&str> = response.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["postId", "title", "content", "stats", "moderation", "_debug"]
        );
    }

    #[test]
    fn test_debug_payload_values() {
        let response = debug_profiling_decorator(blog_post_response(1))(());
        assert_eq!(response["_debug"]["cacheHit"], false);
        assert_eq!(response["_debug"]["serverNode"], "prod-us-east-5a");
    }
}
