//! Async client for the workspace collaborator API.

use std::time::Duration;

use anyhow::Context;

use crate::config::ClientConfig;
use crate::model::{Channel, ScheduledMessage, WorkspaceId};

mod http_client;

mod types;
pub use self::types::*;

mod messages;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(cfg: &ClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("slack-connect")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: cfg.backend_url.trim_end_matches('/').to_string(),
            timeout: cfg.request_timeout(),
            client,
        })
    }

    pub async fn list_channels(&self, team: &WorkspaceId) -> Result<Vec<Channel>, ApiError> {
        self.bounded(self.fetch_channels(team)).await
    }

    pub async fn send_now(
        &self,
        team: &WorkspaceId,
        channel: &str,
        text: &str,
    ) -> Result<(), ApiError> {
        self.bounded(self.post_send(team, channel, text)).await
    }

    pub async fn schedule(
        &self,
        team: &WorkspaceId,
        channel: &str,
        text: &str,
        post_at: i64,
    ) -> Result<(), ApiError> {
        self.bounded(self.post_schedule(team, channel, text, post_at))
            .await
    }

    pub async fn list_scheduled(
        &self,
        team: &WorkspaceId,
    ) -> Result<Vec<ScheduledMessage>, ApiError> {
        self.bounded(self.fetch_scheduled(team)).await
    }

    pub async fn cancel_scheduled(&self, id: &str) -> Result<(), ApiError> {
        self.bounded(self.delete_scheduled(id)).await
    }
}
