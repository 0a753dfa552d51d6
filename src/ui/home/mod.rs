//! Home screen feature module.
//!
//! Uses the MVI pattern:
//! - `state.rs` - Mirror of the logged-in and skip-login flags
//! - `intent.rs` - Flag changes
//! - `reducer.rs` - Pure transitions
//! - `controller.rs` - Flag observation and scoped logout

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::HomeController;
pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::{HomeStatus, HomeUiState};
