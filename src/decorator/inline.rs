//! The response built without decorators.
//!
//! One function checks every role and mutates a single mapping in place.
//! Adding a role means editing this function.

use super::response::{
    DEBUG_KEY, MODERATION_KEY, Response, STATS_KEY, blog_post_payload, debug_payload,
    moderation_payload, stats_payload,
};
use super::roles::UserRole;

/// Builds the response for `post_id` by checking each role in turn.
///
/// Roles are checked in a fixed order (author, editor, debugger) regardless
/// of how they are listed.
#[must_use]
pub fn inline_response(post_id: u64, roles: &[UserRole]) -> Response {
    let mut response = blog_post_payload(post_id);

    if roles.contains(&UserRole::Author) {
        response.insert(STATS_KEY.to_string(), stats_payload());
    }

    if roles.contains(&UserRole::Editor) {
        response.insert(MODERATION_KEY.to_string(), moderation_payload());
    }

    if roles.contains(&UserRole::Debugger) {
        response.insert(DEBUG_KEY.to_string(), debug_payload());
    }

    response
}
