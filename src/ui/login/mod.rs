//! Login screen feature module.
//!
//! Uses the MVI pattern:
//! - `state.rs` - Idle, Loading, Success, Skipped, Error(message)
//! - `intent.rs` - Validation outcome and use case results
//! - `reducer.rs` - Pure transitions
//! - `controller.rs` - Credential validation and scoped login/skip work

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{LoginController, LOGIN_FAILED, MISSING_CREDENTIALS, SKIP_FAILED};
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::LoginUiState;
