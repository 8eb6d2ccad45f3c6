//! HTTP client types for Nylas API communication.
//!
//! This module provides the transport layer and the REST client built on it.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client; owns the default headers
//!   (Basic auth, `X-Nylas-API-Wrapper`, `User-Agent`)
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a response from the API
//! - [`HttpMethod`], [`DataType`], [`RequestBody`]: request building blocks
//! - [`HttpError`]: the error type of every API operation
//! - [`rest::RestClient`]: the resource-level client
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "/account").build()?;
//! let response = client.request(request).await?;
//! println!("{}", response.text());
//! ```
//!
//! # Failures
//!
//! Nothing is retried. A non-2xx status surfaces as [`HttpError::Api`] with
//! the raw body; the caller decides what to do with it.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{basic_auth_header, HttpClient, SDK_VERSION, WRAPPER_HEADER};
pub use http_request::{
    DataType, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartPart, RequestBody,
};
pub use http_response::HttpResponse;

pub use rest::RestClient;
