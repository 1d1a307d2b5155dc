use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;

use crate::presentation::{OnDismiss, PresentationKind, RenderFn, RouteId, StackState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Presenter channel disconnected")]
    Disconnected,
    #[error("Presenter request timed out")]
    Timeout,
}

/// Every command is answered after the mutations queued before it.
pub enum StackCommand<V> {
    /// Answered with the new route's id once it is on the stack.
    Present {
        kind: PresentationKind,
        render: RenderFn<V>,
        on_dismiss: Option<OnDismiss>,
        respond_to: oneshot::Sender<RouteId>,
    },
    /// Answered with the stack length once the dismissal is applied.
    Dismiss {
        level: usize,
        respond_to: oneshot::Sender<usize>,
    },
    /// Answered with the stack as of this command's turn in the queue.
    Snapshot {
        respond_to: oneshot::Sender<Arc<StackState<V>>>,
    },
}
