//! Domain DTOs for the user API.
//!
//! # Design
//! Output shapes are exact: `deny_unknown_fields` makes deserialization
//! reject a body carrying fields beyond those declared, at the envelope
//! level and inside `User`. The types mirror the mock-server's schema but
//! are defined independently; integration tests catch any drift between the
//! two crates.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single user as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub name: String,
    pub surname: String,
    pub age: u32,
}

/// Response shape of [`get_user`](crate::query::get_user): the user rides in
/// a `user` field. Exact like `User` itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GetUserResponse {
    pub user: User,
}

/// Typed parameters for the `get_user` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserParams {
    pub id: u64,
}

impl GetUserParams {
    /// Decode a raw path parameter into typed params.
    ///
    /// Path parameters arrive as strings; the id must be a base-10 unsigned
    /// integer. Anything else fails with [`ApiError::InvalidParam`] before a
    /// request is built.
    pub fn from_raw(id: &str) -> Result<Self, ApiError> {
        let id = id.parse().map_err(|_| ApiError::InvalidParam {
            name: "id",
            value: id.to_string(),
        })?;
        Ok(Self { id })
    }
}
