use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::StreamExt;

use crate::domain::{FieldStream, LogoutUseCase, UserRepository};
use crate::ui::mvi::StateHolder;
use crate::ui::scope::ControllerScope;

use super::intent::HomeIntent;
use super::reducer::HomeReducer;
use super::state::HomeUiState;

/// Drives the home screen.
///
/// Follows the logged-in and skip-login flags for as long as the
/// controller lives. Logout failures are logged only; the home screen has
/// no error state.
pub struct HomeController {
    repository: Arc<dyn UserRepository>,
    logout: LogoutUseCase,
    state: StateHolder<HomeReducer>,
    scope: ControllerScope,
}

impl HomeController {
    /// Must be called inside a tokio runtime.
    pub fn new(repository: Arc<dyn UserRepository>, logout: LogoutUseCase) -> Self {
        let scope = ControllerScope::new("home");
        let state = StateHolder::new(scope.token());

        let holder = state.clone();
        let logged_in = repository.logged_in();
        let skip_login = repository.skip_login();
        scope.observe("observe-flags", follow_flags(holder, logged_in, skip_login));

        Self {
            repository,
            logout,
            state,
            scope,
        }
    }

    pub fn state(&self) -> HomeUiState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeUiState> {
        self.state.subscribe()
    }

    /// Logged-in flag, straight from the repository.
    pub fn logged_in(&self) -> FieldStream<bool> {
        self.repository.logged_in()
    }

    /// Skip-login flag, straight from the repository.
    pub fn skip_login(&self) -> FieldStream<bool> {
        self.repository.skip_login()
    }

    /// Must be called inside a tokio runtime.
    pub fn logout(&self) {
        let logout = self.logout.clone();
        self.scope.launch("logout", async move {
            match logout.execute().await {
                Ok(()) => tracing::info!("User logged out"),
                Err(err) => tracing::error!(error = %err, "Logout failed"),
            }
        });
    }

    /// Wait for an in-flight logout to finish.
    pub async fn idle(&self) {
        self.scope.idle().await;
    }

    pub fn dispose(&self) {
        self.scope.cancel();
    }
}

async fn follow_flags(
    state: StateHolder<HomeReducer>,
    mut logged_in: FieldStream<bool>,
    mut skip_login: FieldStream<bool>,
) {
    let mut logged_in_open = true;
    let mut skip_login_open = true;
    loop {
        tokio::select! {
            item = logged_in.next(), if logged_in_open => match item {
                Some(Ok(value)) => {
                    state.dispatch(HomeIntent::LoggedInChanged(value));
                }
                Some(Err(err)) => tracing::warn!(error = %err, "Logged-in flag unavailable"),
                None => logged_in_open = false,
            },
            item = skip_login.next(), if skip_login_open => match item {
                Some(Ok(value)) => {
                    state.dispatch(HomeIntent::SkipLoginChanged(value));
                }
                Some(Err(err)) => tracing::warn!(error = %err, "Skip-login flag unavailable"),
                None => skip_login_open = false,
            },
            else => break,
        }
    }
}
