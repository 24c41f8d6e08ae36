//! Pending scheduled messages and the confirm-before-delete flow.

use std::collections::HashSet;

use crate::api::ApiError;
use crate::effect::ApiCall;
use crate::gate::ConfirmationGate;
use crate::model::{ScheduledMessage, StatusNotice};
use crate::session::SessionContext;

pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel this scheduled message?";
pub const CANCELLED_NOTICE: &str = "Message cancelled successfully.";

/// Result of a finished cancellation: the notice to show and, on success,
/// the follow-up refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CancelOutcome {
    pub notice: Option<StatusNotice>,
    pub refresh: Option<ApiCall>,
}

#[derive(Clone, Debug, Default)]
pub struct ScheduledSet {
    messages: Vec<ScheduledMessage>,
    gate: ConfirmationGate<String>,
    /// Generation of the most recently issued refresh.
    issued: u64,
    /// Newest generation whose reply has been handled.
    settled: u64,
    selected: usize,
}

impl ScheduledSet {
    pub fn messages(&self) -> &[ScheduledMessage] {
        &self.messages
    }

    pub fn gate(&self) -> &ConfirmationGate<String> {
        &self.gate
    }

    pub fn pending_cancel(&self) -> Option<&str> {
        self.gate.pending().map(String::as_str)
    }

    pub fn is_refreshing(&self) -> bool {
        self.settled < self.issued
    }

    pub fn selected(&self) -> Option<&ScheduledMessage> {
        self.messages.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn move_selection(&mut self, step: isize) {
        if self.messages.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.messages.len() as isize - 1;
        self.selected = (self.selected as isize + step).clamp(0, last) as usize;
    }

    pub fn refresh(&mut self, session: &SessionContext) -> Option<ApiCall> {
        let team = session.workspace()?;
        self.issued += 1;
        tracing::debug!(workspace = %team, generation = self.issued, "refreshing scheduled messages");
        Some(ApiCall::ListScheduled {
            team: team.clone(),
            generation: self.issued,
        })
    }

    /// Replaces the whole set. A failed refresh keeps what was shown before,
    /// and a reply no newer than one already handled is dropped.
    pub fn on_refreshed(
        &mut self,
        generation: u64,
        result: Result<Vec<ScheduledMessage>, ApiError>,
    ) {
        if generation <= self.settled {
            tracing::debug!(
                generation,
                settled = self.settled,
                "stale scheduled listing ignored"
            );
            return;
        }
        self.settled = generation;
        match result {
            Ok(listing) => {
                let mut seen = HashSet::new();
                let before = listing.len();
                self.messages = listing
                    .into_iter()
                    .filter(|m| seen.insert(m.id.clone()))
                    .collect();
                if self.messages.len() != before {
                    tracing::warn!(
                        dropped = before - self.messages.len(),
                        "duplicate scheduled message ids dropped"
                    );
                }
                self.move_selection(0);
                tracing::info!(count = self.messages.len(), "scheduled messages refreshed");
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch scheduled messages");
            }
        }
    }

    /// Marks `id` as awaiting confirmation. Never touches the network.
    pub fn request_cancel(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(id = %id, "cancel requested");
        self.gate.open(id, CANCEL_PROMPT);
    }

    /// Issues the delete for the pending id, if any, and closes the gate.
    pub fn confirm_cancel(&mut self) -> Option<ApiCall> {
        let id = self.gate.confirm()?;
        tracing::info!(id = %id, "cancel confirmed");
        Some(ApiCall::CancelScheduled { id })
    }

    pub fn dismiss(&mut self) {
        self.gate.dismiss();
    }

    pub fn on_cancelled(
        &mut self,
        id: &str,
        result: Result<(), ApiError>,
        session: &SessionContext,
    ) -> CancelOutcome {
        match result {
            Ok(()) => {
                tracing::info!(id, "scheduled message cancelled");
                CancelOutcome {
                    notice: Some(StatusNotice::success(CANCELLED_NOTICE)),
                    refresh: self.refresh(session),
                }
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "cancel failed");
                let message = if err.is_transport() {
                    crate::compose::UNEXPECTED_NOTICE.to_string()
                } else {
                    format!(
                        "Failed to cancel message: {}",
                        err.reason().unwrap_or("Unknown error")
                    )
                };
                CancelOutcome {
                    notice: Some(StatusNotice::error(message)),
                    refresh: None,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scheduled_tests.rs"]
mod tests;
