//! Request handling: build the chain for the caller's roles, invoke once.

use std::fmt;

use serde_json::Value;
use tracing::info;

use super::response::{Response, blog_post_response};
use super::roles::{UserRole, decorate_for_roles};

/// The post every demo request asks for.
pub const DEMO_POST_ID: u64 = 101;

/// The result of one API request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    /// Line describing the request context.
    pub context: String,
    /// The final response body.
    pub body: Response,
}

impl ApiReply {
    /// The body as indented JSON.
    pub fn to_pretty_json(&self) -> String {
        format!("{:#}", Value::Object(self.body.clone()))
    }
}

impl fmt::Display for ApiReply {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "--- New Request ---")?;
        writeln!(formatter, "{}", self.context)?;
        writeln!(formatter)?;
        writeln!(formatter, "Final JSON Response:")?;
        writeln!(formatter, "{}", self.to_pretty_json())?;
        write!(formatter, "---------------------")
    }
}

/// Handles a request for [`DEMO_POST_ID`] made with `roles`.
///
/// Builds a fresh chain for this request, invokes it once and discards it.
#[must_use]
pub fn handle_api_request(roles: &[UserRole]) -> ApiReply {
    info!(roles = roles.len(), "handling api request");
    let response = decorate_for_roles(blog_post_response(DEMO_POST_ID), roles);
    ApiReply {
        context: format!("Context: Request with {} special role(s).", roles.len()),
        body: response(()),
    }
}
