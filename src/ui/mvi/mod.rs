//! Model-View-Intent primitives shared by the screen's state machines.
//!
//! ```text
//! key / click / fetch outcome ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure. Anything with side effects (issuing requests,
//! posting notices) happens in `App` around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
