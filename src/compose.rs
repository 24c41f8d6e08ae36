//! Compose form state machine: draft fields, validation and the single
//! in-flight submission.

use time::{OffsetDateTime, UtcOffset};

use crate::api::ApiError;
use crate::effect::ApiCall;
use crate::model::{Channel, StatusNotice};
use crate::session::SessionContext;

mod schedule_time;
pub use self::schedule_time::{
    ScheduleInstantError, format_post_at, parse_schedule_instant, schedule_epoch_seconds,
};

pub const SENT_NOTICE: &str = "Message sent immediately.";
pub const SCHEDULED_NOTICE: &str = "Message scheduled successfully.";
pub const UNEXPECTED_NOTICE: &str = "An unexpected error occurred. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    SendNow,
    Schedule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposePhase {
    Idle,
    Submitting(SubmitMode),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    pub channel_id: String,
    pub text: String,
    /// Empty means no instant chosen.
    pub schedule_instant: String,
}

#[derive(Clone, Debug)]
pub struct ComposeController {
    draft: ComposeDraft,
    phase: ComposePhase,
    notice: Option<StatusNotice>,
    offset: UtcOffset,
}

impl ComposeController {
    /// `offset` is the local offset used to read schedule instants.
    pub fn new(offset: UtcOffset) -> Self {
        Self {
            draft: ComposeDraft::default(),
            phase: ComposePhase::Idle,
            notice: None,
            offset,
        }
    }

    pub fn draft(&self) -> &ComposeDraft {
        &self.draft
    }

    pub fn phase(&self) -> ComposePhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, ComposePhase::Submitting(_))
    }

    pub fn notice(&self) -> Option<&StatusNotice> {
        self.notice.as_ref()
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    pub fn publish(&mut self, notice: StatusNotice) {
        self.notice = Some(notice);
    }

    pub fn select_channel(&mut self, channel_id: impl Into<String>) {
        self.draft.channel_id = channel_id.into();
    }

    /// Takes a catalog default only when nothing is selected yet.
    pub fn adopt_default_channel(&mut self, channel_id: &str) -> bool {
        if !self.draft.channel_id.is_empty() {
            return false;
        }
        self.draft.channel_id = channel_id.to_string();
        true
    }

    /// Moves the selection `step` places through `channels`, wrapping.
    pub fn cycle_channel(&mut self, channels: &[Channel], step: isize) {
        if channels.is_empty() {
            return;
        }
        let len = channels.len() as isize;
        let next = match channels.iter().position(|c| c.id == self.draft.channel_id) {
            Some(i) => (i as isize + step).rem_euclid(len),
            None => 0,
        };
        self.draft.channel_id = channels[next as usize].id.clone();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_schedule_instant(&mut self, raw: impl Into<String>) {
        self.draft.schedule_instant = raw.into();
    }

    /// Validates the draft and, when it passes, enters `Submitting` and
    /// returns the request to issue. Calls made while a submission is in
    /// flight return `None` and change nothing.
    pub fn submit(
        &mut self,
        mode: SubmitMode,
        session: &SessionContext,
        now: OffsetDateTime,
    ) -> Option<ApiCall> {
        if self.is_submitting() {
            tracing::debug!(?mode, "submit ignored while a submission is in flight");
            return None;
        }
        self.notice = None;

        match self.validate(mode, session, now) {
            Ok(call) => {
                tracing::info!(?mode, channel = %self.draft.channel_id, "submitting message");
                self.phase = ComposePhase::Submitting(mode);
                Some(call)
            }
            Err(msg) => {
                tracing::debug!(?mode, reason = msg, "draft failed validation");
                self.notice = Some(StatusNotice::error(msg));
                None
            }
        }
    }

    fn validate(
        &self,
        mode: SubmitMode,
        session: &SessionContext,
        now: OffsetDateTime,
    ) -> Result<ApiCall, &'static str> {
        let Some(team) = session.workspace() else {
            return Err("Team ID is missing.");
        };
        if self.draft.channel_id.trim().is_empty() {
            return Err("Please select a channel.");
        }
        if self.draft.text.trim().is_empty() {
            return Err("Please write a message.");
        }

        let team = team.clone();
        let channel = self.draft.channel_id.clone();
        let text = self.draft.text.clone();
        match mode {
            SubmitMode::SendNow => Ok(ApiCall::SendNow {
                team,
                channel,
                text,
            }),
            SubmitMode::Schedule => {
                let post_at =
                    schedule_epoch_seconds(&self.draft.schedule_instant, self.offset, now)
                        .map_err(|err| match err {
                            ScheduleInstantError::Missing => {
                                "Please select a date and time to schedule."
                            }
                            ScheduleInstantError::Invalid(_) => {
                                "Schedule time is not a valid date and time."
                            }
                            ScheduleInstantError::NotInFuture { .. } => {
                                "Schedule time must be in the future."
                            }
                        })?;
                Ok(ApiCall::Schedule {
                    team,
                    channel,
                    text,
                    post_at,
                })
            }
        }
    }

    /// Applies the outcome of the in-flight submission and returns to `Idle`.
    pub fn on_submitted(&mut self, mode: SubmitMode, result: Result<(), ApiError>) {
        if self.phase != ComposePhase::Submitting(mode) {
            tracing::warn!(?mode, phase = ?self.phase, "stray submission outcome ignored");
            return;
        }
        self.phase = ComposePhase::Idle;

        match result {
            Ok(()) => {
                tracing::info!(?mode, "submission accepted");
                self.draft.text.clear();
                self.draft.schedule_instant.clear();
                self.notice = Some(StatusNotice::success(match mode {
                    SubmitMode::SendNow => SENT_NOTICE,
                    SubmitMode::Schedule => SCHEDULED_NOTICE,
                }));
            }
            Err(err) if err.is_transport() => {
                tracing::warn!(?mode, error = %err, "submission failed in transport");
                self.notice = Some(StatusNotice::error(UNEXPECTED_NOTICE));
            }
            Err(err) => {
                tracing::warn!(?mode, error = %err, "submission rejected");
                self.notice = Some(StatusNotice::error(format!(
                    "Failed to send message: {}",
                    err.reason().unwrap_or("Unknown error")
                )));
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/compose_tests.rs"]
mod tests;
