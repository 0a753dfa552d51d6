use std::time::Duration;

use tokio::sync::watch;
use tokio_stream::StreamExt;

use crate::domain::GetAuthStatusUseCase;
use crate::navigation::Route;
use crate::ui::mvi::StateHolder;
use crate::ui::scope::ControllerScope;

use super::intent::SplashIntent;
use super::reducer::SplashReducer;
use super::state::SplashUiState;

/// Default pacing delay before the auth status is read.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(2000);

/// Decides the first real screen.
///
/// After `delay`, takes the first auth status and moves to
/// `NavigateToHome` or `NavigateToLogin`. Errors and an empty stream fall
/// back to login so the user is never stuck on the splash screen.
pub struct SplashController {
    state: StateHolder<SplashReducer>,
    scope: ControllerScope,
}

impl SplashController {
    /// Must be called inside a tokio runtime.
    pub fn new(auth_status: GetAuthStatusUseCase, delay: Duration) -> Self {
        let scope = ControllerScope::new("splash");
        let state = StateHolder::new(scope.token());

        let holder = state.clone();
        scope.launch("check-auth-status", async move {
            tokio::time::sleep(delay).await;

            let intent = match auth_status.execute().next().await {
                Some(Ok(status)) => {
                    tracing::debug!(status = ?status, "Auth status resolved");
                    SplashIntent::AuthResolved(status)
                }
                Some(Err(err)) => {
                    tracing::error!(error = %err, "Error checking auth status");
                    SplashIntent::AuthUnavailable
                }
                None => {
                    tracing::warn!("Auth status stream ended without a value");
                    SplashIntent::AuthUnavailable
                }
            };
            holder.dispatch(intent);
        });

        Self { state, scope }
    }

    pub fn state(&self) -> SplashUiState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<SplashUiState> {
        self.state.subscribe()
    }

    /// Wait until the splash screen has decided where to go.
    ///
    /// A disposed controller that never decided routes to login.
    pub async fn destination(&self) -> Route {
        let mut rx = self.subscribe();
        let token = self.scope.token();
        let decided = tokio::select! {
            biased;
            decided = rx.wait_for(SplashUiState::is_terminal) => {
                decided.ok().and_then(|state| state.destination())
            }
            _ = token.cancelled() => self.state().destination(),
        };
        decided.unwrap_or(Route::Login)
    }

    /// Stop the pending status check. No state update follows.
    pub fn dispose(&self) {
        self.scope.cancel();
    }
}
