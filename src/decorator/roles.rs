//! Mapping user roles to decorators.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::layers::{author_stats_decorator, debug_profiling_decorator, editor_moderation_decorator};
use super::response::{Response, ResponseOperation};
use crate::compose::{WrapperFactory, apply_all};

/// A role that unlocks an extra block in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// The post's author; sees view statistics.
    Author,
    /// An editor; sees moderation state.
    Editor,
    /// A developer; sees profiling data.
    Debugger,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 3] = [Self::Author, Self::Editor, Self::Debugger];

    /// The decorator this role applies.
    pub const fn decorator(self) -> WrapperFactory<(), Response> {
        match self {
            Self::Author => author_stats_decorator,
            Self::Editor => editor_moderation_decorator,
            Self::Debugger => debug_profiling_decorator,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Author => "AUTHOR",
            Self::Editor => "EDITOR",
            Self::Debugger => "DEBUGGER",
        };
        formatter.write_str(name)
    }
}

/// Wraps `base` with one decorator per role, in the order given.
///
/// The last role's decorator is outermost. Repeating a role applies its
/// decorator again, which leaves the mapping unchanged because each
/// decorator writes a fixed value.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::decorator::{blog_post_response, decorate_for_roles, UserRole};
///
/// let plain = decorate_for_roles(blog_post_response(101), &[]);
/// assert_eq!(plain(()), blog_post_response(101)(()));
/// ```
#[must_use]
pub fn decorate_for_roles(base: ResponseOperation, roles: &[UserRole]) -> ResponseOperation {
    apply_all(base, roles.iter().map(|role| role.decorator()))
}
