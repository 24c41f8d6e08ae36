//! Connection detection from the navigation context.
//!
//! The workspace identifier is read exactly once, at startup, and the
//! resulting [`SessionContext`] is handed to every component that needs it.

use anyhow::{Context, Result};

use crate::model::WorkspaceId;

pub const WORKSPACE_QUERY_PARAM: &str = "team_id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Connected(WorkspaceId),
    NotConnected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    state: ConnectionState,
    install_url: String,
}

impl SessionContext {
    pub fn new(workspace: Option<WorkspaceId>, install_url: impl Into<String>) -> Self {
        let state = match workspace {
            Some(id) => ConnectionState::Connected(id),
            None => ConnectionState::NotConnected,
        };
        Self {
            state,
            install_url: install_url.into(),
        }
    }

    /// Resolves the session from a navigation URL such as
    /// `http://localhost:5173/?team_id=T1`. A missing or empty `team_id` is a
    /// valid "not connected" outcome.
    pub fn resolve(navigation_url: &str, install_url: impl Into<String>) -> Result<Self> {
        let url = reqwest::Url::parse(navigation_url)
            .with_context(|| format!("parse navigation url {:?}", navigation_url))?;
        let workspace = url
            .query_pairs()
            .find(|(k, _)| k == WORKSPACE_QUERY_PARAM)
            .and_then(|(_, v)| WorkspaceId::new(v.into_owned()));

        match &workspace {
            Some(id) => tracing::info!(workspace = %id, "workspace connected"),
            None => tracing::info!("no workspace identifier in navigation context"),
        }
        Ok(Self::new(workspace, install_url))
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn workspace(&self) -> Option<&WorkspaceId> {
        match &self.state {
            ConnectionState::Connected(id) => Some(id),
            ConnectionState::NotConnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.workspace().is_some()
    }

    pub fn install_url(&self) -> &str {
        &self.install_url
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
