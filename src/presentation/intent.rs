use crate::ui::mvi::Intent;

use super::route::Route;

/// A requested change to the presentation stack.
pub enum StackIntent<V> {
    /// Append a route as the new top level.
    Present(Route<V>),
    /// Remove `level` and every level above it.
    Dismiss { level: usize },
}

impl<V: 'static> Intent for StackIntent<V> {
    fn name(&self) -> &'static str {
        match self {
            StackIntent::Present(_) => "present",
            StackIntent::Dismiss { .. } => "dismiss",
        }
    }
}

impl<V> std::fmt::Debug for StackIntent<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackIntent::Present(route) => f.debug_tuple("Present").field(route).finish(),
            StackIntent::Dismiss { level } => {
                f.debug_struct("Dismiss").field("level", level).finish()
            }
        }
    }
}
