//! Model-View-Intent (MVI) primitives shared by the screen controllers.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one screen
//! - **Intent**: user actions or results of background work
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **StateHolder**: observable cell that applies intents through a reducer

mod holder;
mod intent;
mod reducer;
mod state;

pub use holder::StateHolder;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
