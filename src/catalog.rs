//! Channel list for the connected workspace.

use crate::api::ApiError;
use crate::effect::ApiCall;
use crate::model::{Channel, StatusNotice, WorkspaceId};
use crate::session::SessionContext;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<Channel>),
    Failed(String),
}

/// What the shell should do with a finished load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogUpdate {
    pub default_channel: Option<String>,
    pub notice: Option<StatusNotice>,
}

#[derive(Clone, Debug, Default)]
pub struct ChannelCatalog {
    state: CatalogState,
    requested_for: Option<WorkspaceId>,
}

impl ChannelCatalog {
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CatalogState::Loading)
    }

    pub fn channels(&self) -> &[Channel] {
        match &self.state {
            CatalogState::Ready(channels) => channels,
            _ => &[],
        }
    }

    pub fn channel_name(&self, id: &str) -> Option<&str> {
        self.channels()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Requests the list once per workspace id.
    pub fn load(&mut self, session: &SessionContext) -> Option<ApiCall> {
        let team = session.workspace()?;
        if self.requested_for.as_ref() == Some(team) {
            return None;
        }
        tracing::debug!(workspace = %team, "loading channels");
        self.requested_for = Some(team.clone());
        self.state = CatalogState::Loading;
        Some(ApiCall::ListChannels { team: team.clone() })
    }

    pub fn on_loaded(
        &mut self,
        team: &WorkspaceId,
        result: Result<Vec<Channel>, ApiError>,
    ) -> CatalogUpdate {
        if self.requested_for.as_ref() != Some(team) {
            tracing::warn!(workspace = %team, "channel list for another workspace ignored");
            return CatalogUpdate::default();
        }

        match result {
            Ok(channels) => {
                tracing::info!(count = channels.len(), "channels loaded");
                let default_channel = channels.first().map(|c| c.id.clone());
                self.state = CatalogState::Ready(channels);
                CatalogUpdate {
                    default_channel,
                    notice: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "channel list failed");
                let message = if err.is_transport() {
                    "An unexpected error occurred while fetching channels.".to_string()
                } else {
                    format!(
                        "Failed to fetch channels: {}",
                        err.reason().unwrap_or("Unknown error")
                    )
                };
                self.state = CatalogState::Failed(err.to_string());
                CatalogUpdate {
                    default_channel: None,
                    notice: Some(StatusNotice::error(message)),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
