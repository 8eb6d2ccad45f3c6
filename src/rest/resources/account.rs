//! The account behind the current access token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A connected email account.
///
/// Returned by [`RestClient::account`](crate::clients::RestClient::account).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Account {
    /// Account id.
    pub id: String,

    /// Equal to `id` for single-account tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Namespace used in resource URLs for this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Provider name, e.g. `gmail` or `eas`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// `folder` or `label`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_state: Option<String>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_at: Option<DateTime<Utc>>,
}
