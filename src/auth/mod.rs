//! Authentication for the Nylas API.
//!
//! Requests authenticate with HTTP Basic auth: the access token is the user
//! name and the password is empty. Tokens are obtained through the OAuth 2.0
//! authorization-code flow in [`oauth`], or supplied directly with
//! [`NylasConfigBuilder::access_token`](crate::NylasConfigBuilder::access_token).
//!
//! ```rust,ignore
//! use nylas_api::auth::oauth::validate_callback;
//!
//! // 1. Generate the authorization URL
//! let request = client.authorization_url("https://your-app.com/callback", None);
//! // Redirect the user to request.auth_url, store request.state
//!
//! // 2. Handle the redirect and exchange the code
//! let code = validate_callback(&callback, &request.state)?;
//! let token = client.exchange_code(code).await?;
//! ```

pub mod oauth;
