//! Application context: built once at startup, passed to every screen.

use std::sync::Arc;

use crate::config::{AppConfig, TimingConfig};
use crate::domain::{
    GetAuthStatusUseCase, LoginUseCase, LogoutUseCase, SkipLoginUseCase, UserRepository,
};
use crate::prefs::{PreferencesStore, StoreError};
use crate::ui::home::HomeController;
use crate::ui::login::LoginController;
use crate::ui::splash::SplashController;

/// Shared repository, use cases and timing.
///
/// Controllers are created on demand and own their own task scope, so
/// dropping one tears down only that screen.
#[derive(Clone)]
pub struct AppContext {
    repository: Arc<dyn UserRepository>,
    timing: TimingConfig,
    auth_status: GetAuthStatusUseCase,
    login: LoginUseCase,
    logout: LogoutUseCase,
    skip_login: SkipLoginUseCase,
}

impl AppContext {
    /// Open the configured preferences store and wire the use cases.
    pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let dir = config.store.resolved_dir();
        let store = PreferencesStore::open(&dir, &config.store.name)?;
        tracing::info!(path = %store.path().display(), "Using preferences store");
        Ok(Self::new(Arc::new(store), config.timing.clone()))
    }

    pub fn new(repository: Arc<dyn UserRepository>, timing: TimingConfig) -> Self {
        Self {
            auth_status: GetAuthStatusUseCase::new(Arc::clone(&repository)),
            login: LoginUseCase::new(Arc::clone(&repository), timing.login_delay()),
            logout: LogoutUseCase::new(Arc::clone(&repository)),
            skip_login: SkipLoginUseCase::new(Arc::clone(&repository)),
            repository,
            timing,
        }
    }

    pub fn repository(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.repository)
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn auth_status(&self) -> &GetAuthStatusUseCase {
        &self.auth_status
    }

    /// Must be called inside a tokio runtime.
    pub fn splash_controller(&self) -> SplashController {
        SplashController::new(self.auth_status.clone(), self.timing.splash_delay())
    }

    pub fn login_controller(&self) -> LoginController {
        LoginController::new(self.login.clone(), self.skip_login.clone())
    }

    /// Must be called inside a tokio runtime.
    pub fn home_controller(&self) -> HomeController {
        HomeController::new(self.repository(), self.logout.clone())
    }
}
