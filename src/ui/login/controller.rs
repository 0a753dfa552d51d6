use tokio::sync::watch;

use crate::domain::{AuthError, LoginUseCase, SkipLoginUseCase};
use crate::ui::mvi::StateHolder;
use crate::ui::scope::ControllerScope;

use super::intent::LoginIntent;
use super::reducer::LoginReducer;
use super::state::LoginUiState;

/// Shown when either credential field is blank.
pub const MISSING_CREDENTIALS: &str = "missing credentials";
/// Fallback when a login failure has no message.
pub const LOGIN_FAILED: &str = "login failed";
/// Fallback when a skip failure has no message.
pub const SKIP_FAILED: &str = "something went wrong";

/// Drives the login screen.
///
/// A second `login` or `skip_login` while one is in flight is not
/// cancelled; the view disables its controls while `Loading`.
pub struct LoginController {
    state: StateHolder<LoginReducer>,
    scope: ControllerScope,
    login: LoginUseCase,
    skip: SkipLoginUseCase,
}

impl LoginController {
    pub fn new(login: LoginUseCase, skip: SkipLoginUseCase) -> Self {
        let scope = ControllerScope::new("login");
        let state = StateHolder::new(scope.token());
        Self {
            state,
            scope,
            login,
            skip,
        }
    }

    pub fn state(&self) -> LoginUiState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginUiState> {
        self.state.subscribe()
    }

    /// Validate synchronously, then sign in in the background.
    ///
    /// Must be called inside a tokio runtime.
    pub fn login(&self, email: &str, password: &str) {
        if email.trim().is_empty() || password.trim().is_empty() {
            tracing::debug!("Login rejected: missing credentials");
            self.state.dispatch(LoginIntent::Rejected {
                message: MISSING_CREDENTIALS.to_string(),
            });
            return;
        }

        self.state.dispatch(LoginIntent::Submit);

        let state = self.state.clone();
        let login = self.login.clone();
        let email = email.to_string();
        let password = password.to_string();
        self.scope.launch("login", async move {
            let intent = match login.execute(&email, &password).await {
                Ok(()) => LoginIntent::Succeeded,
                Err(err) => {
                    tracing::error!(error = %err, "Login failed");
                    LoginIntent::Failed {
                        message: failure_message(&err, LOGIN_FAILED),
                    }
                }
            };
            state.dispatch(intent);
        });
    }

    /// Continue without signing in.
    ///
    /// Must be called inside a tokio runtime.
    pub fn skip_login(&self) {
        let state = self.state.clone();
        let skip = self.skip.clone();
        self.scope.launch("skip-login", async move {
            let intent = match skip.execute().await {
                Ok(()) => {
                    tracing::info!("Login skipped");
                    LoginIntent::Skipped
                }
                Err(err) => {
                    tracing::error!(error = %err, "Skip login failed");
                    LoginIntent::Failed {
                        message: failure_message(&err, SKIP_FAILED),
                    }
                }
            };
            state.dispatch(intent);
        });
    }

    /// Wait for every in-flight login or skip to finish.
    pub async fn idle(&self) {
        self.scope.idle().await;
    }

    /// Cancel in-flight work. No state update follows.
    pub fn dispose(&self) {
        self.scope.cancel();
    }
}

fn failure_message(err: &AuthError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
