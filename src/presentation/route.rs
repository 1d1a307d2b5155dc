//! A single stack level: what to show and what to run when it goes away.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::binding::PresentedBinding;
use super::kind::PresentationKind;

/// Type-erased content builder for one level.
///
/// Receives the level's [`PresentedBinding`] so the content can close itself.
pub type RenderFn<V> = Arc<dyn Fn(PresentedBinding) -> V + Send + Sync>;

/// Callback run once when a route leaves the stack.
pub type OnDismiss = Box<dyn FnOnce() + Send>;

/// Stable identity of a presented route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(Uuid);

impl RouteId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened when a route's dismiss hook was fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HookOutcome {
    Ran,
    Panicked,
    Empty,
}

/// Holder for the optional dismiss callback. Firing consumes it.
struct DismissHook {
    callback: Mutex<Option<OnDismiss>>,
}

impl DismissHook {
    fn new(callback: Option<OnDismiss>) -> Self {
        Self {
            callback: Mutex::new(callback),
        }
    }

    fn fire(&self) -> HookOutcome {
        // Take first so the lock is not held while user code runs.
        let Some(callback) = self.callback.lock().take() else {
            return HookOutcome::Empty;
        };
        match panic::catch_unwind(AssertUnwindSafe(callback)) {
            Ok(()) => HookOutcome::Ran,
            Err(_) => HookOutcome::Panicked,
        }
    }

    fn is_armed(&self) -> bool {
        self.callback.lock().is_some()
    }
}

/// One modal's presentation record at a stack position.
///
/// Clones share the same render function, dismiss hook and dismissal latch,
/// so a route fires its hook at most once no matter how many snapshots hold it.
/// For the same reason a route and its clones occupy at most one level, ever.
pub struct Route<V> {
    id: RouteId,
    kind: PresentationKind,
    render: RenderFn<V>,
    on_dismiss: Arc<DismissHook>,
    dismiss_requested: Arc<AtomicBool>,
    claimed: Arc<AtomicBool>,
}

impl<V> Route<V> {
    pub fn new<F>(kind: PresentationKind, render: F, on_dismiss: Option<OnDismiss>) -> Self
    where
        F: Fn(PresentedBinding) -> V + Send + Sync + 'static,
    {
        Self::from_render_fn(kind, Arc::new(render), on_dismiss)
    }

    pub fn from_render_fn(
        kind: PresentationKind,
        render: RenderFn<V>,
        on_dismiss: Option<OnDismiss>,
    ) -> Self {
        Self {
            id: RouteId::new(),
            kind,
            render,
            on_dismiss: Arc::new(DismissHook::new(on_dismiss)),
            dismiss_requested: Arc::new(AtomicBool::new(false)),
            claimed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn kind(&self) -> PresentationKind {
        self.kind
    }

    /// Build this route's content.
    pub fn render(&self, presented: PresentedBinding) -> V {
        (self.render)(presented)
    }

    /// True while the dismiss callback has not run yet.
    pub fn has_pending_on_dismiss(&self) -> bool {
        self.on_dismiss.is_armed()
    }

    pub(crate) fn fire_on_dismiss(&self) -> HookOutcome {
        self.on_dismiss.fire()
    }

    pub(crate) fn dismiss_latch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.dismiss_requested)
    }

    /// Reserve this route for a stack level. False if it (or a clone) was
    /// reserved before.
    pub(crate) fn claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::SeqCst)
    }
}

impl<V> Clone for Route<V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            render: Arc::clone(&self.render),
            on_dismiss: Arc::clone(&self.on_dismiss),
            dismiss_requested: Arc::clone(&self.dismiss_requested),
            claimed: Arc::clone(&self.claimed),
        }
    }
}

impl<V> PartialEq for Route<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind
    }
}

impl<V> fmt::Debug for Route<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("has_pending_on_dismiss", &self.has_pending_on_dismiss())
            .finish()
    }
}
