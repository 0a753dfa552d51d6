use thiserror::Error;

use crate::prefs::StoreError;

/// Errors surfaced by the auth use cases.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
