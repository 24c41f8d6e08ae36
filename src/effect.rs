//! Instructions emitted by the controllers and the outcomes fed back to them.

use crate::api::ApiError;
use crate::compose::SubmitMode;
use crate::model::{Channel, ScheduledMessage, WorkspaceId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    ListChannels {
        team: WorkspaceId,
    },
    SendNow {
        team: WorkspaceId,
        channel: String,
        text: String,
    },
    Schedule {
        team: WorkspaceId,
        channel: String,
        text: String,
        post_at: i64,
    },
    ListScheduled {
        team: WorkspaceId,
        /// Orders refreshes so a late reply cannot replace a newer listing.
        generation: u64,
    },
    CancelScheduled {
        id: String,
    },
}

impl ApiCall {
    pub fn label(&self) -> &'static str {
        match self {
            ApiCall::ListChannels { .. } => "list channels",
            ApiCall::SendNow { .. } => "send now",
            ApiCall::Schedule { .. } => "schedule",
            ApiCall::ListScheduled { .. } => "list scheduled",
            ApiCall::CancelScheduled { .. } => "cancel scheduled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Api(ApiCall),
    /// Leave the client for the install flow at this URL.
    Navigate(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Channels {
        team: WorkspaceId,
        result: Result<Vec<Channel>, ApiError>,
    },
    Submitted {
        mode: SubmitMode,
        result: Result<(), ApiError>,
    },
    Scheduled {
        team: WorkspaceId,
        generation: u64,
        result: Result<Vec<ScheduledMessage>, ApiError>,
    },
    Cancelled {
        id: String,
        result: Result<(), ApiError>,
    },
}
