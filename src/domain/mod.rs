//! Authentication domain.
//!
//! Derives [`AuthStatus`] from the persisted flags and exposes the three
//! auth intents as use cases over a [`UserRepository`].

mod auth_status;
mod error;
mod repository;
mod usecases;

pub use auth_status::{derive_auth_status, AuthStatus, AuthStatusStream};
pub use error::AuthError;
pub use repository::{FieldStream, UserRepository};
pub use usecases::{
    GetAuthStatusUseCase, LoginUseCase, LogoutUseCase, SkipLoginUseCase, DEFAULT_LOGIN_DELAY,
};
