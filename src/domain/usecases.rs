//! Auth intents: login, logout, skip-login, and the derived status stream.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::auth_status::AuthStatusStream;
use super::error::AuthError;
use super::repository::UserRepository;

/// Default simulated authentication delay.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Combines the persisted flags into an [`AuthStatusStream`].
#[derive(Clone)]
pub struct GetAuthStatusUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetAuthStatusUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> AuthStatusStream {
        AuthStatusStream::new(self.repository.logged_in(), self.repository.skip_login())
    }
}

/// Signs a user in.
///
/// There is no remote service: authentication is a fixed delay, after which
/// the session is recorded locally. Credentials are validated by the caller.
#[derive(Clone)]
pub struct LoginUseCase {
    repository: Arc<dyn UserRepository>,
    delay: Duration,
}

impl LoginUseCase {
    pub fn new(repository: Arc<dyn UserRepository>, delay: Duration) -> Self {
        Self { repository, delay }
    }

    pub async fn execute(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;

        let token = new_session_token();
        self.repository.set_logged_in(true).await?;
        self.repository.set_user_token(token).await?;
        self.repository.set_user_id(email.trim().to_string()).await?;

        tracing::info!(user = %email.trim(), "Login succeeded");
        Ok(())
    }
}

/// Clears the whole persisted record.
#[derive(Clone)]
pub struct LogoutUseCase {
    repository: Arc<dyn UserRepository>,
}

impl LogoutUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<(), AuthError> {
        self.repository.clear_user_data().await?;
        Ok(())
    }
}

/// Lets the user continue without signing in.
#[derive(Clone)]
pub struct SkipLoginUseCase {
    repository: Arc<dyn UserRepository>,
}

impl SkipLoginUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<(), AuthError> {
        self.repository.set_skip_login(true).await?;
        Ok(())
    }
}

fn new_session_token() -> String {
    format!("session-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_tokens_are_unique_and_prefixed() {
        let a = new_session_token();
        let b = new_session_token();
        assert!(a.starts_with("session-"));
        assert_ne!(a, b);
    }
}
