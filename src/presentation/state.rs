use crate::ui::mvi::UiState;

use super::kind::PresentationKind;
use super::route::{Route, RouteId};

/// Immutable snapshot of the presentation stack.
///
/// Index 0 is the bottommost modal. Level `i` is occupied iff `i < len()`.
pub struct StackState<V> {
    routes: Vec<Route<V>>,
}

impl<V: 'static> UiState for StackState<V> {}

impl<V> StackState<V> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Level of the topmost route, if any.
    pub fn top_level(&self) -> Option<usize> {
        self.routes.len().checked_sub(1)
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn route_at(&self, level: usize) -> Option<&Route<V>> {
        self.routes.get(level)
    }

    pub fn kind_at(&self, level: usize) -> Option<PresentationKind> {
        self.route_at(level).map(Route::kind)
    }

    pub fn is_sheet(&self, level: usize) -> bool {
        self.kind_at(level) == Some(PresentationKind::Sheet)
    }

    pub fn is_bottom_sheet(&self, level: usize) -> bool {
        self.kind_at(level) == Some(PresentationKind::BottomSheet)
    }

    pub fn is_overlay(&self, level: usize) -> bool {
        self.kind_at(level) == Some(PresentationKind::Overlay)
    }

    pub fn level_of(&self, id: RouteId) -> Option<usize> {
        self.routes.iter().position(|route| route.id() == id)
    }

    pub fn kinds(&self) -> Vec<PresentationKind> {
        self.routes.iter().map(Route::kind).collect()
    }

    /// Routes removed by dismissing `level`, topmost first.
    ///
    /// Empty when `level` is past the top.
    pub fn dismissal_order(&self, level: usize) -> impl Iterator<Item = (usize, &Route<V>)> {
        let start = level.min(self.routes.len());
        self.routes[start..]
            .iter()
            .enumerate()
            .rev()
            .map(move |(offset, route)| (start + offset, route))
    }

    pub(crate) fn push(&mut self, route: Route<V>) {
        self.routes.push(route);
    }

    pub(crate) fn truncate(&mut self, level: usize) {
        self.routes.truncate(level);
    }
}

impl<V> Default for StackState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for StackState<V> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<V> PartialEq for StackState<V> {
    fn eq(&self, other: &Self) -> bool {
        self.routes == other.routes
    }
}

impl<V> std::fmt::Debug for StackState<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.routes.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(kinds: &[PresentationKind]) -> StackState<()> {
        let mut state = StackState::new();
        for kind in kinds {
            state.push(Route::new(*kind, |_| (), None));
        }
        state
    }

    #[test]
    fn predicates_follow_kind() {
        let state = state_of(&[
            PresentationKind::Sheet,
            PresentationKind::BottomSheet,
            PresentationKind::Overlay,
        ]);
        assert!(state.is_sheet(0));
        assert!(state.is_bottom_sheet(1));
        assert!(state.is_overlay(2));
        assert!(!state.is_sheet(1));
        assert!(!state.is_overlay(3));
        assert_eq!(state.kind_at(3), None);
        assert_eq!(state.top_level(), Some(2));
    }

    #[test]
    fn dismissal_order_is_top_down() {
        let state = state_of(&[PresentationKind::Sheet; 4]);
        let levels: Vec<usize> = state.dismissal_order(1).map(|(level, _)| level).collect();
        assert_eq!(levels, vec![3, 2, 1]);
    }

    #[test]
    fn dismissal_order_past_top_is_empty() {
        let state = state_of(&[PresentationKind::Sheet; 2]);
        assert_eq!(state.dismissal_order(2).count(), 0);
        assert_eq!(state.dismissal_order(usize::MAX).count(), 0);
    }

    #[test]
    fn empty_state_has_no_top() {
        let state: StackState<()> = StackState::default();
        assert!(state.is_empty());
        assert_eq!(state.top_level(), None);
        assert!(state.route_at(0).is_none());
    }
}
