//! Synchronous API client core for the user service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - Queries are declarative: a [`Query`] couples an HTTP method, a path
//!   builder, and the output shape it deserializes into. [`get_user`] is the
//!   one shipped query.
//! - `UserApiClient` is stateless — it holds only the origin derived from a
//!   [`ConnectionConfig`] and its bound query descriptors.
//! - Output shapes are exact: a response body with fields beyond those
//!   declared fails parsing.
//! - Raw path parameters are decoded before a request is built; a
//!   non-numeric id never reaches the wire.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod types;

pub use client::UserApiClient;
pub use config::{ConnectionConfig, Protocol};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{get_user, Query};
pub use types::{GetUserParams, GetUserResponse, User};
