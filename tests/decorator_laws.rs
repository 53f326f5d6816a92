#![cfg(feature = "decorator")]
//! Property-based tests for decorator stacking.
//!
//! - **Set union**: a stack contains every key contributed by its layers
//! - **Last wins**: for overlapping keys the outermost layer's value is kept
//! - **Order of keys**: base keys first, then first-applied layer keys

use proptest::prelude::*;
use serde_json::{Value, json};
use structural_patterns::compose::{apply_all, boxed, map_output};
use structural_patterns::decorator::{
    Response, ResponseOperation, UserRole, blog_post_payload, blog_post_response,
    decorate_for_roles, inline_response,
};

fn roles() -> impl Strategy<Value = Vec<UserRole>> {
    prop::collection::vec(prop::sample::select(UserRole::ALL.to_vec()), 0..6)
}

fn set_key(
    key: String,
    value: i64,
) -> impl FnOnce(ResponseOperation) -> ResponseOperation {
    map_output(move |mut response: Response| {
        response.insert(key.clone(), json!(value));
        response
    })
}

proptest! {
    /// Every role's key is present, and nothing else is added.
    #[test]
    fn prop_set_union(roles in roles()) {
        let body = decorate_for_roles(blog_post_response(101), &roles)(());

        let mut expected: Vec<&str> = vec!["postId", "title", "content"];
        for role in &roles {
            let key = match role {
                UserRole::Author => "stats",
                UserRole::Editor => "moderation",
                UserRole::Debugger => "_debug",
            };
            if !expected.contains(&key) {
                expected.push(key);
            }
        }

        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Stacking by roles matches the inline role checks as a mapping.
    #[test]
    fn prop_decorated_equals_inline(roles in roles()) {
        let decorated = decorate_for_roles(blog_post_response(101), &roles)(());
        prop_assert_eq!(decorated, inline_response(101, &roles));
    }

    /// For a key written by several layers, the last-applied value wins.
    #[test]
    fn prop_last_applied_wins(values in prop::collection::vec(any::<i64>(), 1..6)) {
        let layers: Vec<_> = values.iter().map(|value| set_key("shared".to_string(), *value)).collect();
        let body = apply_all(boxed(|()| blog_post_payload(1)), layers)(());

        let last = values.last().copied().unwrap_or_default();
        prop_assert_eq!(&body["shared"], &Value::from(last));
        prop_assert_eq!(body.len(), 4);
    }
}
