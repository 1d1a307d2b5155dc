use thiserror::Error;

use super::route::RouteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PresentError {
    /// The route, or a clone of it, already took a level once.
    #[error("Route {route} was already presented")]
    AlreadyPresented { route: RouteId },
}
