use std::sync::Arc;

use tokio::sync::mpsc;

use crate::presentation::{Presenter, Route};
use crate::shutdown::ShutdownSignal;

use super::types::StackCommand;

pub struct PresenterServer<V> {
    pub(super) receiver: mpsc::Receiver<StackCommand<V>>,
}

impl<V: 'static> PresenterServer<V> {
    pub fn new(receiver: mpsc::Receiver<StackCommand<V>>) -> Self {
        Self { receiver }
    }

    /// Apply commands in arrival order until every client is gone or
    /// `shutdown` fires. Commands already queued at shutdown still run.
    pub async fn run(mut self, presenter: Presenter<V>, shutdown: ShutdownSignal) {
        tracing::debug!("presenter server started");
        loop {
            tokio::select! {
                biased;
                command = self.receiver.recv() => match command {
                    Some(command) => handle(&presenter, command),
                    None => break,
                },
                _ = shutdown.wait() => {
                    self.receiver.close();
                    while let Some(command) = self.receiver.recv().await {
                        handle(&presenter, command);
                    }
                    break;
                }
            }
        }
        tracing::debug!("presenter server stopped");
    }
}

/// Acknowledgements are sent from the mutation's completion, so a reply
/// always reflects the stack after that command was applied, even when
/// another thread is draining the queue at the time.
fn handle<V: 'static>(presenter: &Presenter<V>, command: StackCommand<V>) {
    match command {
        StackCommand::Present {
            kind,
            render,
            on_dismiss,
            respond_to,
        } => {
            let route = Route::from_render_fn(kind, render, on_dismiss);
            let id = route.id();
            presenter.present_then(
                route,
                Box::new(move |_| {
                    if respond_to.send(id).is_err() {
                        tracing::trace!("dispatch: Present response dropped (receiver gone)");
                    }
                }),
            );
        }
        StackCommand::Dismiss { level, respond_to } => {
            presenter.dismiss_then(
                level,
                Box::new(move |state| {
                    if respond_to.send(state.len()).is_err() {
                        tracing::trace!("dispatch: Dismiss response dropped (receiver gone)");
                    }
                }),
            );
        }
        StackCommand::Snapshot { respond_to } => {
            presenter.observe(Box::new(move |state| {
                if respond_to.send(Arc::clone(state)).is_err() {
                    tracing::trace!("dispatch: Snapshot response dropped (receiver gone)");
                }
            }));
        }
    }
}
