use crate::domain::AuthStatus;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum SplashIntent {
    /// First auth status value arrived.
    AuthResolved(AuthStatus),
    /// The status stream failed or ended without a value.
    AuthUnavailable,
}

impl Intent for SplashIntent {}
