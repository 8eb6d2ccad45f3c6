//! OAuth 2.0 authorization-code flow.
//!
//! 1. **Authorization** ([`authorization_url`]): build the URL to redirect the
//!    user to, together with a fresh [`StateParam`].
//! 2. **Callback** ([`validate_callback`]): compare the `state` echoed on the
//!    redirect with the stored one (constant time) and take the `code`.
//! 3. **Exchange** ([`RestClient::exchange_code`]): trade the code for an
//!    access token, which the client then uses for every request.
//!
//! # Example
//!
//! ```rust,ignore
//! use nylas_api::{NylasConfig, AppId, AppSecret, RestClient};
//! use nylas_api::auth::oauth::{validate_callback, AuthCallback};
//!
//! let config = NylasConfig::builder()
//!     .app_id(AppId::new("your-app-id")?)
//!     .app_secret(AppSecret::new("your-secret")?)
//!     .build()?;
//! let mut client = RestClient::new(config)?;
//!
//! // Step 1: redirect the user
//! let request = client.authorization_url("https://your-app.com/callback", None);
//! // store request.state, redirect to request.auth_url
//!
//! // Step 2 + 3: handle the redirect
//! let code = validate_callback(&AuthCallback { code, state }, &stored_state)?;
//! let token = client.exchange_code(code).await?;
//! ```
//!
//! [`RestClient::exchange_code`]: crate::clients::RestClient::exchange_code

mod authorize;
mod callback;
mod error;
mod state;
mod token;

pub use authorize::{authorization_url, AuthorizationRequest, AUTHORIZE_PATH};
pub use callback::{validate_callback, AuthCallback};
pub use error::OAuthError;
pub use state::StateParam;
pub use token::{request_access_token, TOKEN_PATH};
