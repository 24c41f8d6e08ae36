use std::future::Future;

use super::*;

impl ApiClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Runs `fut` under the configured deadline. An elapsed deadline drops the
    /// in-flight request and reports [`ApiError::Timeout`].
    pub(super) async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => res,
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "collaborator request timed out");
                Err(ApiError::Timeout(self.timeout))
            }
        }
    }

    pub(super) async fn send(
        &self,
        req: reqwest::RequestBuilder,
        label: &str,
    ) -> Result<(reqwest::StatusCode, Vec<u8>), ApiError> {
        let resp = req.send().await.map_err(|err| {
            tracing::warn!(op = label, error = %err, "request failed");
            ApiError::Transport(format!("{}: {}", label, err))
        })?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(format!("{} body: {}", label, err)))?;
        tracing::debug!(op = label, status = status.as_u16(), "response received");
        Ok((status, body.to_vec()))
    }
}

/// Maps a response carrying the `{ok, error?}` envelope.
pub(super) fn decode_reply(
    status: reqwest::StatusCode,
    body: &[u8],
    label: &str,
) -> Result<(), ApiError> {
    match serde_json::from_slice::<ApiReply>(body) {
        Ok(reply) if reply.ok && status.is_success() => Ok(()),
        Ok(reply) if !reply.ok => Err(ApiError::rejected(reply.error)),
        Ok(_) => Err(status_error(status, body)),
        Err(err) if status.is_success() => {
            Err(ApiError::Decode(format!("{}: {}", label, err)))
        }
        Err(_) => Err(status_error(status, body)),
    }
}

/// Decodes a success body as `T`; non-success statuses still surface an
/// `ok: false` envelope as a rejection when the server sent one.
pub(super) fn decode_json<T>(
    status: reqwest::StatusCode,
    body: &[u8],
    label: &str,
) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !status.is_success() {
        return match serde_json::from_slice::<ApiReply>(body) {
            Ok(reply) if !reply.ok => Err(ApiError::rejected(reply.error)),
            _ => Err(status_error(status, body)),
        };
    }
    serde_json::from_slice(body).map_err(|err| ApiError::Decode(format!("{}: {}", label, err)))
}

fn status_error(status: reqwest::StatusCode, body: &[u8]) -> ApiError {
    let body = String::from_utf8_lossy(body);
    let body: String = body.chars().take(200).collect();
    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}
