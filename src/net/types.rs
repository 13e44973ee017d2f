//! Wire types for the user-info endpoint.
//!
//! DESIGN
//! ======
//! `InfoResponse` stays an opaque JSON value: `fetch_info` never asserts a
//! shape. Pages that want named fields go through `InfoResponse::user_info`,
//! which is allowed to fail without turning a successful fetch into an error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::ops::Deref;

use serde::{Deserialize, Serialize};

// =============================================================================
// RESPONSES
// =============================================================================

/// JSON payload returned by `GET /api/info`, passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoResponse(serde_json::Value);

impl InfoResponse {
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Typed view of the payload, or `None` when it is not a user record.
    #[must_use]
    pub fn user_info(&self) -> Option<UserInfo> {
        UserInfo::deserialize(&self.0).ok()
    }
}

impl Deref for InfoResponse {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<serde_json::Value> for InfoResponse {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl PartialEq<serde_json::Value> for InfoResponse {
    fn eq(&self, other: &serde_json::Value) -> bool {
        &self.0 == other
    }
}

/// User record as the backend encodes it. Keys are capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub date: String,
    #[serde(default)]
    pub bio: String,
}

impl UserInfo {
    /// `"First Last"`, falling back to the username when both are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.firstname.trim(), self.lastname.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a user-info request. Every variant is terminal for the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailed {
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The request could not be sent or the body could not be read.
    #[error("request could not complete: {0}")]
    Transport(String),

    /// The body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(String),
}

impl RequestFailed {
    /// True for 401/403 answers, which callers usually treat as "not signed in".
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403 })
    }
}
