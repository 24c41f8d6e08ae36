use super::http_client::{decode_json, decode_reply};
use super::*;

impl ApiClient {
    pub(super) async fn fetch_channels(
        &self,
        team: &WorkspaceId,
    ) -> Result<Vec<Channel>, ApiError> {
        let req = self
            .client
            .get(self.url("/api/channels"))
            .query(&[("team_id", team.as_str())]);
        let (status, body) = self.send(req, "list channels").await?;
        let reply: ChannelsReply = decode_json(status, &body, "list channels")?;
        if !reply.ok {
            return Err(ApiError::rejected(reply.error));
        }
        Ok(reply.channels)
    }

    pub(super) async fn post_send(
        &self,
        team: &WorkspaceId,
        channel: &str,
        text: &str,
    ) -> Result<(), ApiError> {
        let req = self
            .client
            .post(self.url("/api/message/send"))
            .json(&SendRequest {
                team_id: team.as_str(),
                channel,
                text,
            });
        let (status, body) = self.send(req, "send message").await?;
        decode_reply(status, &body, "send message")
    }

    pub(super) async fn post_schedule(
        &self,
        team: &WorkspaceId,
        channel: &str,
        text: &str,
        post_at: i64,
    ) -> Result<(), ApiError> {
        let req = self
            .client
            .post(self.url("/api/message/schedule"))
            .json(&ScheduleRequest {
                team_id: team.as_str(),
                channel,
                text,
                post_at: post_at.to_string(),
            });
        let (status, body) = self.send(req, "schedule message").await?;
        decode_reply(status, &body, "schedule message")
    }

    pub(super) async fn fetch_scheduled(
        &self,
        team: &WorkspaceId,
    ) -> Result<Vec<ScheduledMessage>, ApiError> {
        let req = self
            .client
            .get(self.url("/api/message/scheduled"))
            .query(&[("team_id", team.as_str())]);
        let (status, body) = self.send(req, "list scheduled").await?;
        decode_json(status, &body, "list scheduled")
    }

    pub(super) async fn delete_scheduled(&self, id: &str) -> Result<(), ApiError> {
        let req = self
            .client
            .delete(self.url(&format!("/api/message/scheduled/{}", urlencoding::encode(id))));
        let (status, body) = self.send(req, "cancel scheduled").await?;
        decode_reply(status, &body, "cancel scheduled")
    }
}

#[cfg(test)]
#[path = "../tests/api/messages_tests.rs"]
mod tests;
