//! Presentation-state manager for modal surfaces in declarative UIs.
//!
//! Callers present sheets, bottom sheets and overlays onto an ordered stack.
//! Dismissing level `N` removes every level from `N` up, running each removed
//! route's dismiss callback from the top down. A render layer reads the stack
//! level by level through [`ui::LevelHost`].

pub mod config;
pub mod dispatch;
pub mod logging;
pub mod presentation;
pub mod replay;
pub mod session;
pub mod shutdown;
pub mod ui;

pub use presentation::{PresentationKind, PresentedBinding, Presenter, Route, RouteId};
pub use session::Session;
