//! Persistence gateway.
//!
//! A small durable key-value store holding the auth record
//! (`is_logged_in`, `skip_login`, `user_token`, `user_id`). Each field is
//! observable: subscribers get the current value immediately and a new
//! value after every committed write to that field.

mod error;
mod keys;
mod repository;
mod store;

pub use error::StoreError;
pub use keys::PrefKey;
pub use store::{Preferences, PreferencesStore, DEFAULT_STORE_NAME};
