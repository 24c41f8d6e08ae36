//! Runs API effects on a tokio runtime and hands their completions back to
//! the loop that owns the [`Shell`].

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::api::ApiClient;
use crate::effect::{ApiCall, Completion, Effect};
use crate::shell::Shell;

pub struct Dispatcher {
    client: ApiClient,
    handle: Handle,
    tx: UnboundedSender<Completion>,
    in_flight: usize,
}

impl Dispatcher {
    pub fn new(client: ApiClient, handle: Handle) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = unbounded_channel();
        (
            Self {
                client,
                handle,
                tx,
                in_flight: 0,
            },
            rx,
        )
    }

    pub fn dispatch(&mut self, call: ApiCall) {
        tracing::debug!(op = call.label(), "dispatching");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;
        self.handle.spawn(async move {
            let completion = execute(&client, call).await;
            if tx.send(completion).is_err() {
                tracing::debug!("completion dropped; receiver closed");
            }
        });
    }

    /// Dispatches every API effect and returns the navigation targets, which
    /// the caller must perform itself.
    pub fn dispatch_all(&mut self, effects: Vec<Effect>) -> Vec<String> {
        let mut navigations = Vec::new();
        for effect in effects {
            match effect {
                Effect::Api(call) => self.dispatch(call),
                Effect::Navigate(url) => navigations.push(url),
            }
        }
        navigations
    }

    /// Feeds one completion to the shell and dispatches what follows from it.
    pub fn complete(&mut self, shell: &mut Shell, completion: Completion) -> Vec<String> {
        self.in_flight = self.in_flight.saturating_sub(1);
        let effects = shell.apply(completion);
        self.dispatch_all(effects)
    }

    /// Applies every completion already delivered, without waiting.
    pub fn drain(
        &mut self,
        shell: &mut Shell,
        rx: &mut UnboundedReceiver<Completion>,
    ) -> Vec<String> {
        let mut navigations = Vec::new();
        while let Ok(completion) = rx.try_recv() {
            navigations.extend(self.complete(shell, completion));
        }
        navigations
    }

    /// Waits until no request is in flight, applying completions as they
    /// arrive. Requests are time-bounded, so this terminates.
    pub async fn settle(
        &mut self,
        shell: &mut Shell,
        rx: &mut UnboundedReceiver<Completion>,
    ) -> Vec<String> {
        let mut navigations = Vec::new();
        while self.in_flight > 0 {
            let Some(completion) = rx.recv().await else {
                break;
            };
            navigations.extend(self.complete(shell, completion));
        }
        navigations
    }
}

pub async fn execute(client: &ApiClient, call: ApiCall) -> Completion {
    match call {
        ApiCall::ListChannels { team } => {
            let result = client.list_channels(&team).await;
            Completion::Channels { team, result }
        }
        ApiCall::SendNow {
            team,
            channel,
            text,
        } => Completion::Submitted {
            mode: crate::compose::SubmitMode::SendNow,
            result: client.send_now(&team, &channel, &text).await,
        },
        ApiCall::Schedule {
            team,
            channel,
            text,
            post_at,
        } => Completion::Submitted {
            mode: crate::compose::SubmitMode::Schedule,
            result: client.schedule(&team, &channel, &text, post_at).await,
        },
        ApiCall::ListScheduled { team, generation } => {
            let result = client.list_scheduled(&team).await;
            Completion::Scheduled {
                team,
                generation,
                result,
            }
        }
        ApiCall::CancelScheduled { id } => {
            let result = client.cancel_scheduled(&id).await;
            Completion::Cancelled { id, result }
        }
    }
}
