//! Two-way "is presented" handle handed to a level's content.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use super::route::RouteId;

/// What a binding needs from the stack that owns its route.
pub(crate) trait LevelControl: Send + Sync {
    fn route_id_at(&self, level: usize) -> Option<RouteId>;

    /// Queue a dismissal of `level`, applied only if `route` is still there.
    fn request_dismiss(&self, level: usize, route: RouteId);
}

/// Readable/writable presented flag for one route.
///
/// Reading tells whether the route is still on screen. Writing `false`
/// closes the route's level (and everything above it). The render layer
/// writes it on swipe, backdrop tap or back gesture; content writes it to
/// close itself. Either way the level is dismissed at most once.
#[derive(Clone)]
pub struct PresentedBinding {
    control: Weak<dyn LevelControl>,
    level: usize,
    route: RouteId,
    latch: Arc<AtomicBool>,
}

impl PresentedBinding {
    pub(crate) fn new(
        control: Weak<dyn LevelControl>,
        level: usize,
        route: RouteId,
        latch: Arc<AtomicBool>,
    ) -> Self {
        Self {
            control,
            level,
            route,
            latch,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn route(&self) -> RouteId {
        self.route
    }

    pub fn get(&self) -> bool {
        if self.latch.load(Ordering::SeqCst) {
            return false;
        }
        self.control
            .upgrade()
            .is_some_and(|control| control.route_id_at(self.level) == Some(self.route))
    }

    /// Setting `true` has no effect: a route cannot be re-presented
    /// through its own handle.
    pub fn set(&self, presented: bool) {
        if presented {
            return;
        }
        let Some(control) = self.control.upgrade() else {
            tracing::trace!(level = self.level, "binding outlived its presenter");
            return;
        };
        if control.route_id_at(self.level) != Some(self.route) {
            tracing::debug!(
                level = self.level,
                route = %self.route,
                "stale binding ignored; route no longer at its level"
            );
            return;
        }
        if self.latch.swap(true, Ordering::SeqCst) {
            return;
        }
        control.request_dismiss(self.level, self.route);
    }

    pub fn dismiss(&self) {
        self.set(false);
    }
}

impl std::fmt::Debug for PresentedBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentedBinding")
            .field("level", &self.level)
            .field("route", &self.route)
            .field("presented", &self.get())
            .finish()
    }
}
