//! The response mapping, its base operation and the per-role payloads.

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::compose::{BoxedOperation, boxed};

/// A JSON object, keys in insertion order.
pub type Response = Map<String, Value>;

/// A zero-argument operation producing a [`Response`].
pub type ResponseOperation = BoxedOperation<(), Response>;

/// Key added by the author decorator.
pub const STATS_KEY: &str = "stats";

/// Key added by the editor decorator.
pub const MODERATION_KEY: &str = "moderation";

/// Key added by the debugger decorator.
pub const DEBUG_KEY: &str = "_debug";

const POST_TITLE: &str = "Decorator Pattern in the Real World";
const POST_CONTENT: &str = "This pattern is great for...";

/// The base blog post fields.
pub fn blog_post_payload(post_id: u64) -> Response {
    let mut response = Response::new();
    response.insert("postId".to_string(), json!(post_id));
    response.insert("title".to_string(), json!(POST_TITLE));
    response.insert("content".to_string(), json!(POST_CONTENT));
    response
}

/// View statistics shown to the post's author.
pub fn stats_payload() -> Value {
    json!({ "views": 1024, "comments": 25 })
}

/// Moderation state shown to editors.
pub fn moderation_payload() -> Value {
    json!({ "status": "published", "lastEditedBy": "editor01" })
}

/// Profiling data shown to developers.
pub fn debug_payload() -> Value {
    json!({ "dbQueryMs": 45, "cacheHit": false, "serverNode": "prod-us-east-5a" })
}

/// Returns the base operation generating the response for `post_id`.
///
/// Nothing happens until the operation is invoked; each invocation builds a
/// fresh mapping.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::decorator::blog_post_response;
///
/// let generate = blog_post_response(7);
/// let response = generate(());
///
/// assert_eq!(response["postId"], 7);
/// assert_eq!(response.len(), 3);
/// ```
#[must_use]
pub fn blog_post_response(post_id: u64) -> ResponseOperation {
    boxed(move |()| {
        debug!(post_id, "generating base response");
        blog_post_payload(post_id)
    })
}
