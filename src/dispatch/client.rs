use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::presentation::{OnDismiss, PresentationKind, PresentedBinding, RouteId, StackState};

use super::types::{DispatchError, StackCommand};

pub struct PresenterClient<V> {
    pub(super) sender: mpsc::Sender<StackCommand<V>>,
    timeout: Duration,
}

impl<V> Clone for PresenterClient<V> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            timeout: self.timeout,
        }
    }
}

impl<V> PresenterClient<V> {
    pub fn new(sender: mpsc::Sender<StackCommand<V>>, timeout: Duration) -> Self {
        Self { sender, timeout }
    }

    pub async fn present<F>(
        &self,
        kind: PresentationKind,
        render: F,
        on_dismiss: Option<OnDismiss>,
    ) -> Result<RouteId, DispatchError>
    where
        F: Fn(PresentedBinding) -> V + Send + Sync + 'static,
    {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StackCommand::Present {
                kind,
                render: Arc::new(render),
                on_dismiss,
                respond_to,
            })
            .await
            .map_err(|_| DispatchError::Disconnected)?;

        self.recv_with_timeout(receiver).await
    }

    /// Returns the stack length after the dismissal.
    pub async fn dismiss(&self, level: usize) -> Result<usize, DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StackCommand::Dismiss { level, respond_to })
            .await
            .map_err(|_| DispatchError::Disconnected)?;

        self.recv_with_timeout(receiver).await
    }

    pub async fn dismiss_all(&self) -> Result<usize, DispatchError> {
        self.dismiss(0).await
    }

    pub async fn snapshot(&self) -> Result<Arc<StackState<V>>, DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StackCommand::Snapshot { respond_to })
            .await
            .map_err(|_| DispatchError::Disconnected)?;

        self.recv_with_timeout(receiver).await
    }

    async fn recv_with_timeout<T>(&self, receiver: oneshot::Receiver<T>) -> Result<T, DispatchError> {
        match tokio::time::timeout(self.timeout, receiver).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => Err(DispatchError::Disconnected),
            Err(_) => Err(DispatchError::Timeout),
        }
    }
}
