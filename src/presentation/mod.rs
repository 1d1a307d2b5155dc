//! Presentation stack: ordered modal routes with cascading dismissal.
//!
//! Level `N` is the `N`th modal presented and still active (0 is the
//! bottommost). Dismissing level `N` removes `N` and everything above it,
//! firing each removed route's `on_dismiss` from the top down.

mod binding;
mod error;
mod history;
mod intent;
mod kind;
mod presenter;
mod reducer;
mod route;
mod state;

pub use binding::PresentedBinding;
pub use error::PresentError;
pub use history::{Transition, TransitionEvent};
pub use intent::StackIntent;
pub use kind::{ParseKindError, PresentationKind};
pub use presenter::Presenter;
pub use reducer::StackReducer;
pub use route::{OnDismiss, RenderFn, Route, RouteId};
pub use state::StackState;
