//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::TempDir;

use haepari::app::AppContext;
use haepari::config::TimingConfig;
use haepari::domain::{FieldStream, UserRepository};
use haepari::prefs::{PreferencesStore, StoreError, DEFAULT_STORE_NAME};

/// Open a fresh store in a temp dir. Keep the `TempDir` alive.
pub fn temp_store() -> (TempDir, Arc<PreferencesStore>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = PreferencesStore::open(dir.path(), DEFAULT_STORE_NAME).expect("open store");
    (dir, Arc::new(store))
}

/// Context over `repository` with every delay set to zero.
pub fn context(repository: Arc<dyn UserRepository>) -> AppContext {
    AppContext::new(repository, TimingConfig::immediate())
}

/// Context over `repository` with the given splash and login delays.
pub fn context_with_delays(
    repository: Arc<dyn UserRepository>,
    splash: Duration,
    login: Duration,
) -> AppContext {
    let timing = TimingConfig {
        splash_delay_ms: splash.as_millis() as u64,
        navigation_delay_ms: 0,
        login_delay_ms: login.as_millis() as u64,
    };
    AppContext::new(repository, timing)
}

/// How a [`ScriptedRepository`] behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Streams emit `false` once; writes succeed.
    Healthy,
    /// Every write fails.
    FailWrites,
    /// Every stream yields one error.
    FailReads,
    /// Every stream ends without a value.
    Empty,
}

/// Repository with scripted failures that records attempted writes.
pub struct ScriptedRepository {
    behavior: Behavior,
    writes: Mutex<Vec<&'static str>>,
}

impl ScriptedRepository {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            writes: Mutex::new(Vec::new()),
        })
    }

    pub fn writes(&self) -> Vec<&'static str> {
        self.writes.lock().clone()
    }

    fn stream<T: Send + 'static>(&self, healthy: T) -> FieldStream<T> {
        match self.behavior {
            Behavior::FailReads => Box::pin(tokio_stream::once(Err::<T, _>(unavailable()))),
            Behavior::Empty => Box::pin(tokio_stream::empty::<Result<T, StoreError>>()),
            Behavior::Healthy | Behavior::FailWrites => {
                Box::pin(tokio_stream::once(Ok::<_, StoreError>(healthy)))
            }
        }
    }

    fn write(&self, key: &'static str) -> Result<(), StoreError> {
        self.writes.lock().push(key);
        match self.behavior {
            Behavior::FailWrites => Err(unavailable()),
            _ => Ok(()),
        }
    }
}

fn unavailable() -> StoreError {
    StoreError::Unavailable {
        message: "disk unavailable".to_string(),
    }
}

#[async_trait]
impl UserRepository for ScriptedRepository {
    fn logged_in(&self) -> FieldStream<bool> {
        self.stream(false)
    }

    fn skip_login(&self) -> FieldStream<bool> {
        self.stream(false)
    }

    fn user_token(&self) -> FieldStream<Option<String>> {
        self.stream(None)
    }

    async fn set_logged_in(&self, _logged_in: bool) -> Result<(), StoreError> {
        self.write("is_logged_in")
    }

    async fn set_skip_login(&self, _skip: bool) -> Result<(), StoreError> {
        self.write("skip_login")
    }

    async fn set_user_token(&self, _token: String) -> Result<(), StoreError> {
        self.write("user_token")
    }

    async fn set_user_id(&self, _user_id: String) -> Result<(), StoreError> {
        self.write("user_id")
    }

    async fn clear_user_data(&self) -> Result<(), StoreError> {
        self.write("clear")
    }
}
