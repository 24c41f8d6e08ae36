//! Owner of every client component. User actions and API completions go in,
//! effects come out; nothing here touches the network directly.

use time::{OffsetDateTime, UtcOffset};

use crate::catalog::ChannelCatalog;
use crate::compose::{ComposeController, SubmitMode};
use crate::effect::{ApiCall, Completion, Effect};
use crate::model::StatusNotice;
use crate::scheduled::ScheduledSet;
use crate::session::SessionContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Connect,
    SelectChannel(String),
    CycleChannel(isize),
    SetText(String),
    SetScheduleInstant(String),
    Submit(SubmitMode),
    RequestCancel(String),
    ConfirmCancel,
    DismissCancel,
    Refresh,
}

pub struct Shell {
    session: SessionContext,
    catalog: ChannelCatalog,
    compose: ComposeController,
    scheduled: ScheduledSet,
    notice: Option<StatusNotice>,
    navigated: bool,
}

impl Shell {
    pub fn new(session: SessionContext, offset: UtcOffset) -> Self {
        Self {
            session,
            catalog: ChannelCatalog::default(),
            compose: ComposeController::new(offset),
            scheduled: ScheduledSet::default(),
            notice: None,
            navigated: false,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn catalog(&self) -> &ChannelCatalog {
        &self.catalog
    }

    pub fn compose(&self) -> &ComposeController {
        &self.compose
    }

    pub fn scheduled(&self) -> &ScheduledSet {
        &self.scheduled
    }

    pub fn scheduled_mut(&mut self) -> &mut ScheduledSet {
        &mut self.scheduled
    }

    /// Shell-level notice (cancellation outcomes), separate from the form's.
    pub fn notice(&self) -> Option<&StatusNotice> {
        self.notice.as_ref()
    }

    /// Initial loads for a connected session: channels and scheduled set.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut out = Vec::new();
        if !self.session.is_connected() {
            return out;
        }
        push_api(&mut out, self.catalog.load(&self.session));
        push_api(&mut out, self.scheduled.refresh(&self.session));
        out
    }

    pub fn handle(&mut self, action: Action, now: OffsetDateTime) -> Vec<Effect> {
        let mut out = Vec::new();
        match action {
            Action::Connect => {
                if self.session.is_connected() || self.navigated {
                    tracing::debug!("connect ignored");
                } else {
                    self.navigated = true;
                    tracing::info!(url = self.session.install_url(), "redirecting to install");
                    out.push(Effect::Navigate(self.session.install_url().to_string()));
                }
            }
            Action::SelectChannel(id) => self.compose.select_channel(id),
            Action::CycleChannel(step) => {
                self.compose.cycle_channel(self.catalog.channels(), step);
            }
            Action::SetText(text) => self.compose.set_text(text),
            Action::SetScheduleInstant(raw) => self.compose.set_schedule_instant(raw),
            Action::Submit(mode) => {
                push_api(&mut out, self.compose.submit(mode, &self.session, now));
            }
            Action::RequestCancel(id) => self.scheduled.request_cancel(id),
            Action::ConfirmCancel => push_api(&mut out, self.scheduled.confirm_cancel()),
            Action::DismissCancel => self.scheduled.dismiss(),
            Action::Refresh => push_api(&mut out, self.scheduled.refresh(&self.session)),
        }
        out
    }

    pub fn apply(&mut self, completion: Completion) -> Vec<Effect> {
        let mut out = Vec::new();
        match completion {
            Completion::Channels { team, result } => {
                let update = self.catalog.on_loaded(&team, result);
                if let Some(id) = update.default_channel {
                    self.compose.adopt_default_channel(&id);
                }
                if let Some(notice) = update.notice {
                    self.compose.publish(notice);
                }
            }
            Completion::Submitted { mode, result } => self.compose.on_submitted(mode, result),
            Completion::Scheduled {
                team,
                generation,
                result,
            } => {
                if self.session.workspace() == Some(&team) {
                    self.scheduled.on_refreshed(generation, result);
                } else {
                    tracing::warn!(workspace = %team, "scheduled listing for another workspace ignored");
                }
            }
            Completion::Cancelled { id, result } => {
                let outcome = self.scheduled.on_cancelled(&id, result, &self.session);
                if let Some(notice) = outcome.notice {
                    self.notice = Some(notice);
                }
                push_api(&mut out, outcome.refresh);
            }
        }
        out
    }
}

fn push_api(out: &mut Vec<Effect>, call: Option<ApiCall>) {
    if let Some(call) = call {
        out.push(Effect::Api(call));
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
