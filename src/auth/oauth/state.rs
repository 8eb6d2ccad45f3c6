//! The OAuth `state` parameter.
//!
//! A [`StateParam`] is generated for every authorization URL and echoed back
//! by the provider on the redirect. Generated values are random UUID v4
//! strings.
//!
//! # Example
//!
//! ```rust
//! use nylas_api::auth::oauth::StateParam;
//!
//! let state = StateParam::new();
//! assert_eq!(state.as_ref().len(), 36);
//! assert_ne!(state, StateParam::new());
//! ```

use std::fmt;

use uuid::Uuid;

/// OAuth state parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam(String);

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    /// Generates a fresh random state (hyphenated lowercase UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Wraps a state value restored from storage.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
