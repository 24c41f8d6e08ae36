//! Wire payloads and error taxonomy for the collaborator API.

use std::time::Duration;

use crate::model::Channel;

/// Generic `{ok, error?}` envelope returned by every mutating endpoint.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ApiReply {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ChannelsReply {
    pub ok: bool,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct SendRequest<'a> {
    pub(super) team_id: &'a str,
    pub(super) channel: &'a str,
    pub(super) text: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct ScheduleRequest<'a> {
    pub(super) team_id: &'a str,
    pub(super) channel: &'a str,
    pub(super) text: &'a str,
    /// Epoch seconds, sent as a decimal string.
    pub(super) post_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API answered `ok: false`; `reason` is its `error` field.
    #[error("rejected: {}", reason.as_deref().unwrap_or("no reason given"))]
    Rejected { reason: Option<String> },
    #[error("http {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("decode response: {0}")]
    Decode(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    pub fn rejected(reason: Option<String>) -> Self {
        let reason = reason.filter(|r| !r.trim().is_empty());
        ApiError::Rejected { reason }
    }

    /// True when no server-reported outcome exists to show the user.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Rejected { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { reason } => reason.as_deref(),
            _ => None,
        }
    }
}
