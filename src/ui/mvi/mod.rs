//! State, intent and reducer vocabulary shared by the presentation stack.
//!
//! ```text
//! present / dismiss ──→ StackIntent ──→ StackReducer ──→ StackState ──→ LevelHost
//!        ↑                                                                  │
//!        └──────────────── PresentedBinding::set(false) ────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
