//! Shared presentation stack with serialized mutation.
//!
//! Every `present`/`dismiss` becomes a queued mutation. Whoever finds the
//! queue idle becomes its drainer and applies mutations one at a time, in
//! arrival order, until the queue is empty. Mutations submitted while a
//! drain is in flight (from other threads, or re-entrantly from a dismiss
//! callback) are applied by that drainer after the current one completes.
//!
//! Submitters that find a drain in flight return at once. The drainer does
//! not: it keeps applying until the queue is empty, so under sustained
//! contention it also runs the `on_dismiss` callbacks of routes other
//! threads dismissed. Code that must not stall should go through
//! [`crate::dispatch`] and let the server task do the draining.
//!
//! Readers never take part in the queue: they clone the current
//! `Arc<StackState>`, which is replaced wholesale once per mutation.

use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;

use crate::config::PresenterConfig;
use crate::ui::mvi::{Intent, Reducer};

use super::binding::{LevelControl, PresentedBinding};
use super::error::PresentError;
use super::history::{Transition, TransitionEvent, TransitionLog};
use super::intent::StackIntent;
use super::kind::PresentationKind;
use super::reducer::StackReducer;
use super::route::{HookOutcome, OnDismiss, Route, RouteId};
use super::state::StackState;

/// Runs on the draining thread once its mutation has been applied (or
/// skipped), with the stack as it stands right after.
pub(crate) type Completion<V> = Box<dyn FnOnce(&Arc<StackState<V>>) + Send>;

/// Handle to one presentation stack. Clones share the same stack.
pub struct Presenter<V> {
    inner: Arc<PresenterInner<V>>,
}

enum Mutation<V> {
    Intent(StackIntent<V>),
    /// Dismissal requested through a binding; dropped if the route has
    /// already left its level by the time it is applied.
    DismissRoute { level: usize, route: RouteId },
    /// Changes nothing. Only its completion runs, in queue order.
    Observe,
}

struct Queued<V> {
    mutation: Mutation<V>,
    done: Option<Completion<V>>,
}

struct MutationQueue<V> {
    pending: VecDeque<Queued<V>>,
    draining: bool,
}

struct PresenterInner<V> {
    state: RwLock<Arc<StackState<V>>>,
    queue: Mutex<MutationQueue<V>>,
    revision: watch::Sender<u64>,
    history: Mutex<TransitionLog>,
}

impl<V: 'static> Presenter<V> {
    pub fn new() -> Self {
        Self::from_config(&PresenterConfig::default())
    }

    pub fn from_config(config: &PresenterConfig) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(PresenterInner {
                state: RwLock::new(Arc::new(StackState::new())),
                queue: Mutex::new(MutationQueue {
                    pending: VecDeque::new(),
                    draining: false,
                }),
                revision,
                history: Mutex::new(TransitionLog::new(config.history_limit)),
            }),
        }
    }

    /// Show a new modal on top of the stack.
    pub fn present<F>(&self, kind: PresentationKind, render: F, on_dismiss: Option<OnDismiss>) -> RouteId
    where
        F: Fn(PresentedBinding) -> V + Send + Sync + 'static,
    {
        self.enqueue_fresh(Route::new(kind, render, on_dismiss), None)
    }

    /// Present a route built ahead of time.
    ///
    /// A route (or any clone of it) can be presented once. Presenting it
    /// again, whether it is still on the stack or was dismissed, is rejected.
    pub fn present_route(&self, route: Route<V>) -> Result<RouteId, PresentError> {
        let id = route.id();
        if !route.claim() {
            tracing::warn!(route = %id, "route already presented; ignored");
            return Err(PresentError::AlreadyPresented { route: id });
        }
        self.inner.submit(Mutation::Intent(StackIntent::Present(route)), None);
        Ok(id)
    }

    /// Remove `level` and every level above it. Past the top this is a no-op.
    pub fn dismiss(&self, level: usize) {
        self.inner
            .submit(Mutation::Intent(StackIntent::Dismiss { level }), None);
    }

    pub fn dismiss_all(&self) {
        self.dismiss(0);
    }

    /// Like `present`, but `done` runs once the route is on the stack.
    pub(crate) fn present_then(&self, route: Route<V>, done: Completion<V>) {
        self.enqueue_fresh(route, Some(done));
    }

    /// Like `dismiss`, but `done` runs once the dismissal has been applied.
    pub(crate) fn dismiss_then(&self, level: usize, done: Completion<V>) {
        self.inner
            .submit(Mutation::Intent(StackIntent::Dismiss { level }), Some(done));
    }

    /// Run `done` after every mutation queued so far.
    pub(crate) fn observe(&self, done: Completion<V>) {
        self.inner.submit(Mutation::Observe, Some(done));
    }

    fn enqueue_fresh(&self, route: Route<V>, done: Option<Completion<V>>) -> RouteId {
        let id = route.id();
        let fresh = route.claim();
        debug_assert!(fresh, "newly built route was already claimed");
        self.inner
            .submit(Mutation::Intent(StackIntent::Present(route)), done);
        id
    }

    /// Current stack. The returned value never changes.
    pub fn snapshot(&self) -> Arc<StackState<V>> {
        self.inner.snapshot()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn top_level(&self) -> Option<usize> {
        self.snapshot().top_level()
    }

    pub fn route_at(&self, level: usize) -> Option<Route<V>> {
        self.snapshot().route_at(level).cloned()
    }

    pub fn kind_at(&self, level: usize) -> Option<PresentationKind> {
        self.snapshot().kind_at(level)
    }

    pub fn is_sheet(&self, level: usize) -> bool {
        self.snapshot().is_sheet(level)
    }

    pub fn is_bottom_sheet(&self, level: usize) -> bool {
        self.snapshot().is_bottom_sheet(level)
    }

    pub fn is_overlay(&self, level: usize) -> bool {
        self.snapshot().is_overlay(level)
    }

    /// Presented handle for whatever route currently occupies `level`.
    pub fn binding_for(&self, level: usize) -> Option<PresentedBinding> {
        let snapshot = self.snapshot();
        let route = snapshot.route_at(level)?;
        Some(self.binding(level, route))
    }

    pub(crate) fn binding(&self, level: usize, route: &Route<V>) -> PresentedBinding {
        let control: Weak<dyn LevelControl> = Arc::downgrade(&self.inner) as Weak<dyn LevelControl>;
        PresentedBinding::new(control, level, route.id(), route.dismiss_latch())
    }

    /// Number of mutations applied so far.
    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }

    /// Receiver that is notified once per applied mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    /// Recent transitions, oldest first.
    pub fn history(&self) -> Vec<Transition> {
        self.inner.history.lock().entries()
    }
}

impl<V: 'static> Default for Presenter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Presenter<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> std::fmt::Debug for Presenter<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("stack", &*self.inner.snapshot())
            .field("revision", &*self.inner.revision.borrow())
            .finish()
    }
}

impl<V> PresenterInner<V> {
    fn snapshot(&self) -> Arc<StackState<V>> {
        Arc::clone(&self.state.read())
    }
}

impl<V: 'static> PresenterInner<V> {
    fn submit(&self, mutation: Mutation<V>, done: Option<Completion<V>>) {
        {
            let mut queue = self.queue.lock();
            queue.pending.push_back(Queued { mutation, done });
            if queue.draining {
                tracing::trace!(
                    pending = queue.pending.len(),
                    "mutation queued behind in-flight drain"
                );
                return;
            }
            queue.draining = true;
        }
        self.drain();
    }

    fn drain(&self) {
        // If anything below unwinds, hand the queue back so the next
        // submitter can pick up what is left.
        let _reset = scopeguard::guard_on_unwind((), |()| {
            self.queue.lock().draining = false;
        });

        loop {
            let next = {
                let mut queue = self.queue.lock();
                match queue.pending.pop_front() {
                    Some(queued) => queued,
                    None => {
                        queue.draining = false;
                        return;
                    }
                }
            };
            self.apply(next.mutation);
            if let Some(done) = next.done {
                done(&self.snapshot());
            }
        }
    }

    /// Only the drainer calls this, so `current` cannot go stale before the
    /// new state is published.
    fn apply(&self, mutation: Mutation<V>) {
        let current = self.snapshot();

        let intent = match mutation {
            Mutation::Intent(intent) => intent,
            Mutation::DismissRoute { level, route } => {
                if current.route_at(level).map(Route::id) != Some(route) {
                    tracing::debug!(level, route = %route, "binding dismissal skipped; route already gone");
                    return;
                }
                StackIntent::Dismiss { level }
            }
            Mutation::Observe => return,
        };
        tracing::trace!(intent = intent.name(), len = current.len(), "applying");

        match &intent {
            StackIntent::Present(route) => {
                let level = current.len();
                tracing::debug!(level, kind = %route.kind(), route = %route.id(), "presented");
                self.history
                    .lock()
                    .record(TransitionEvent::Presented, level, route.kind(), route.id());
            }
            StackIntent::Dismiss { level } => {
                if *level >= current.len() {
                    tracing::debug!(level, len = current.len(), "dismiss past top ignored");
                    return;
                }
                tracing::debug!(level, removed = current.len() - level, "dismissing");
                // Callbacks run against the untouched stack, topmost first.
                for (at, route) in current.dismissal_order(*level) {
                    match route.fire_on_dismiss() {
                        HookOutcome::Ran => {
                            tracing::trace!(level = at, route = %route.id(), "on_dismiss ran")
                        }
                        HookOutcome::Panicked => tracing::warn!(
                            level = at,
                            route = %route.id(),
                            "on_dismiss panicked; continuing cascade"
                        ),
                        HookOutcome::Empty => {}
                    }
                    self.history
                        .lock()
                        .record(TransitionEvent::Dismissed, at, route.kind(), route.id());
                }
            }
        }

        let next = StackReducer::<V>::reduce(StackState::clone(&current), intent);
        *self.state.write() = Arc::new(next);
        self.revision.send_modify(|revision| *revision += 1);
    }
}

impl<V: 'static> LevelControl for PresenterInner<V> {
    fn route_id_at(&self, level: usize) -> Option<RouteId> {
        self.snapshot().route_at(level).map(Route::id)
    }

    fn request_dismiss(&self, level: usize, route: RouteId) {
        self.submit(Mutation::DismissRoute { level, route }, None);
    }
}
