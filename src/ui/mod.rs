//! Render-facing side of the presentation stack.

pub mod host;
pub mod mvi;

pub use host::{LevelFrame, LevelHost};
