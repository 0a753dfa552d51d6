//! Splash screen feature module.
//!
//! Uses the MVI pattern:
//! - `state.rs` - Loading → NavigateToLogin | NavigateToHome
//! - `intent.rs` - Auth status results
//! - `reducer.rs` - Pure transitions, terminal once navigation is decided
//! - `controller.rs` - Pacing delay and the one-shot status read

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{SplashController, DEFAULT_SPLASH_DELAY};
pub use intent::SplashIntent;
pub use reducer::SplashReducer;
pub use state::SplashUiState;
