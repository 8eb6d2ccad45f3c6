//! # Nylas API Rust Client
//!
//! An async client for the Nylas v1 REST API: mail, calendar and contacts
//! data for connected accounts.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`NylasConfig`] and [`NylasConfigBuilder`]
//! - Validated newtypes for credentials, tokens, namespaces and the server URL
//! - The OAuth 2.0 authorization-code flow via [`auth::oauth`]
//! - Generic list/get/create/update/delete over nine resource kinds via
//!   [`RestClient`] and [`rest::ResourceKind`]
//! - Filterable collection views and typed models in [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use nylas_api::{NylasConfig, AppId, AppSecret, AccessToken};
//!
//! let config = NylasConfig::builder()
//!     .app_id(AppId::new("your-app-id").unwrap())
//!     .app_secret(AppSecret::new("your-app-secret").unwrap())
//!     .access_token(AccessToken::new("an-existing-token"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use nylas_api::RestClient;
//! use nylas_api::auth::oauth::{validate_callback, AuthCallback};
//!
//! let mut client = RestClient::new(config)?;
//!
//! // Step 1: redirect the user to the authorization URL
//! let request = client.authorization_url("https://your-app.com/callback", Some("ben@example.com"));
//! // store request.state, redirect to request.auth_url
//!
//! // Step 2: handle the redirect
//! let code = validate_callback(&callback, &stored_state)?;
//! let token = client.exchange_code(code).await?;
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use nylas_api::NamespaceId;
//! use nylas_api::rest::{Filters, FileUpload, ResourceKind};
//! use nylas_api::rest::resources::{Account, Thread};
//!
//! let account: Account = client.account().await?.parse()?;
//! let ns = NamespaceId::new(account.namespace_id.unwrap_or_default())?;
//!
//! // Generic operations
//! let unread = client
//!     .list(ResourceKind::Thread, Some(&ns), &Filters::new().with("unread", "true"))
//!     .await?;
//!
//! // Collection views
//! let newest: Option<Thread> = client
//!     .threads(Some(&ns))
//!     .first()
//!     .await?
//!     .map(|t| t.parse())
//!     .transpose()?;
//!
//! // File uploads are sent as multipart
//! let file = client
//!     .files(Some(&ns))
//!     .create(FileUpload::new("notes.txt", b"hello".to_vec()))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and the token live in the client instance
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No hidden work**: no caching, retries or pagination

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiServer, AppId, AppSecret, NamespaceId, NylasConfig, NylasConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RestClient,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    authorization_url, validate_callback, AuthCallback, AuthorizationRequest, OAuthError,
    StateParam,
};
