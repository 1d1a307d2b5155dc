//! Per-level projection of the presentation stack for a render layer.
//!
//! A `LevelHost` stands in for one stack level. It asks the stack what is
//! active at its level, builds that route's content, and hands level + 1 to
//! the next host. `project` walks the same chain iteratively over a single
//! snapshot.

use crate::config::HostConfig;
use crate::presentation::{PresentationKind, PresentedBinding, Presenter, RouteId, StackState};

/// Everything a render layer needs to draw one level.
pub struct LevelFrame<V> {
    pub level: usize,
    pub kind: PresentationKind,
    pub route: RouteId,
    pub content: V,
    /// Write `false` here on swipe, backdrop tap or back gesture.
    ///
    /// Holds only a weak link to the stack. Once every `Presenter` clone is
    /// dropped it reads `false` and ignores writes.
    pub binding: PresentedBinding,
}

impl<V: std::fmt::Debug> std::fmt::Debug for LevelFrame<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelFrame")
            .field("level", &self.level)
            .field("kind", &self.kind)
            .field("route", &self.route)
            .field("content", &self.content)
            .finish()
    }
}

pub struct LevelHost<V> {
    presenter: Presenter<V>,
    level: usize,
    max_depth: usize,
}

impl<V: 'static> LevelHost<V> {
    /// Host for level 0. Levels at or beyond `max_depth` are never probed.
    pub fn root(presenter: Presenter<V>, max_depth: usize) -> Self {
        Self {
            presenter,
            level: 0,
            max_depth,
        }
    }

    pub fn from_config(presenter: Presenter<V>, config: &HostConfig) -> Self {
        Self::root(presenter, config.max_depth)
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_within_depth(&self) -> bool {
        self.level < self.max_depth
    }

    /// What is active at this level right now, rendered.
    pub fn frame(&self) -> Option<LevelFrame<V>> {
        if !self.is_within_depth() {
            return None;
        }
        self.frame_in(&self.presenter.snapshot(), self.level)
    }

    /// Host for the level above, while this level is occupied and the
    /// next one is still within the probed depth.
    pub fn next(&self) -> Option<Self> {
        let next = self.level + 1;
        if next >= self.max_depth || self.presenter.route_at(self.level).is_none() {
            return None;
        }
        Some(Self {
            presenter: self.presenter.clone(),
            level: next,
            max_depth: self.max_depth,
        })
    }

    /// Translate a user-driven dismissal (swipe, backdrop tap, back
    /// gesture) of this level into one `dismiss(at: level)`.
    ///
    /// Returns false when nothing is presented here.
    pub fn user_dismiss(&self) -> bool {
        match self.presenter.binding_for(self.level) {
            Some(binding) => {
                tracing::debug!(level = self.level, "user dismissed level");
                binding.set(false);
                true
            }
            None => false,
        }
    }

    /// Frames for this level and every occupied level above it, bottom-up,
    /// all taken from one snapshot.
    pub fn project(&self) -> Vec<LevelFrame<V>> {
        let snapshot = self.presenter.snapshot();
        let end = snapshot.len().min(self.max_depth);
        if end < snapshot.len() {
            tracing::warn!(
                len = snapshot.len(),
                max_depth = self.max_depth,
                "stack deeper than host depth; upper levels not rendered"
            );
        }
        (self.level..end)
            .filter_map(|level| self.frame_in(&snapshot, level))
            .collect()
    }

    fn frame_in(&self, snapshot: &StackState<V>, level: usize) -> Option<LevelFrame<V>> {
        let route = snapshot.route_at(level)?;
        let binding = self.presenter.binding(level, route);
        let content = route.render(binding.clone());
        Some(LevelFrame {
            level,
            kind: route.kind(),
            route: route.id(),
            content,
            binding,
        })
    }
}
