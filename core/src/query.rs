//! Declarative query descriptors.
//!
//! # Design
//! A [`Query`] couples an HTTP method with a path builder from typed params
//! and carries its output shape statically. Descriptors hold no connection
//! state; the client supplies the origin at build time. `build` and `parse`
//! mirror the host-does-IO split: the caller executes the HTTP round-trip
//! between the two.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{GetUserParams, GetUserResponse};

/// A typed query: HTTP method, path template, and output shape.
#[derive(Debug)]
pub struct Query<P, O> {
    method: HttpMethod,
    path: fn(&P) -> String,
    _output: PhantomData<fn() -> O>,
}

impl<P, O> Query<P, O> {
    pub const fn new(method: HttpMethod, path: fn(&P) -> String) -> Self {
        Self {
            method,
            path,
            _output: PhantomData,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Relative path for `params`, without a leading slash.
    pub fn path_for(&self, params: &P) -> String {
        (self.path)(params)
    }

    /// Produce the request for `params` against `origin`.
    pub fn build(&self, origin: &str, params: &P) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: format!("{}/{}", origin, self.path_for(params)),
            headers: Vec::new(),
        }
    }
}

impl<P, O: DeserializeOwned> Query<P, O> {
    /// Interpret a response: expect 200, then deserialize the body into the
    /// output shape.
    pub fn parse(&self, response: HttpResponse) -> Result<O, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// The `getUser` query: `GET user/{id}`, answered with a [`GetUserResponse`].
pub fn get_user() -> Query<GetUserParams, GetUserResponse> {
    Query::new(HttpMethod::Get, |params| format!("user/{}", params.id))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_user_path_interpolates_id() {
        let query = get_user();
        assert_eq!(query.path_for(&GetUserParams { id: 42 }), "user/42");
    }

    #[test]
    fn get_user_is_a_get() {
        assert_eq!(get_user().method(), HttpMethod::Get);
    }

    #[test]
    fn build_prepends_origin() {
        let query = get_user();
        let req = query.build("http://localhost:1337/localhost", &GetUserParams { id: 42 });
        assert_eq!(req.url, "http://localhost:1337/localhost/user/42");
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.headers.is_empty());
    }

    #[test]
    fn parse_maps_404_to_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = get_user().parse(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_maps_other_status_to_http_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = get_user().parse(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_bad_json_is_deserialization_error() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = get_user().parse(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
