//! Stateless HTTP request builder and response parser for the user API.
//!
//! # Design
//! `UserApiClient` derives its origin from a [`ConnectionConfig`] once at
//! construction and carries no mutable state between calls. Each query is
//! split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`. The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and free of I/O
//! dependencies.

use crate::config::ConnectionConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{self, Query};
use crate::types::{GetUserParams, GetUserResponse};

/// Synchronous, stateless client binding query descriptors to a connection.
#[derive(Debug)]
pub struct UserApiClient {
    origin: String,
    get_user: Query<GetUserParams, GetUserResponse>,
}

impl UserApiClient {
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            origin: config.origin(),
            get_user: query::get_user(),
        }
    }

    /// Build the `getUser` request from already-decoded params.
    pub fn build_get_user(&self, params: &GetUserParams) -> HttpRequest {
        self.get_user.build(&self.origin, params)
    }

    /// Build the `getUser` request from a raw string id, decoding it first.
    /// A non-numeric id fails here, before anything reaches the wire.
    pub fn build_get_user_raw(&self, id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.build_get_user(&GetUserParams::from_raw(id)?))
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<GetUserResponse, ApiError> {
        self.get_user.parse(response)
    }
}
