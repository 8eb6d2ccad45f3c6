//! Calendar models.

use serde::{Deserialize, Serialize};

use super::{null_as_empty, EventWhen, Participant};

/// A calendar.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Calendar {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `true` if events cannot be created or modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

/// A calendar event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Event {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    /// Whether the event blocks time on the calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy: Option<bool>,

    /// `confirmed`, `tentative` or `cancelled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<EventWhen>,
}
