//! File-backed preferences store.
//!
//! Holds the persisted auth record in memory, mirrors every committed write
//! to a TOML file, and publishes per-field changes over `watch` channels.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use super::error::StoreError;
use super::keys::PrefKey;

/// Default store name, used as the file stem.
pub const DEFAULT_STORE_NAME: &str = "app_preferences";

const FILE_SUFFIX: &str = "preferences.toml";

/// The persisted auth record. Absent keys mean defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_logged_in: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_login: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Preferences {
    pub fn logged_in(&self) -> bool {
        self.is_logged_in.unwrap_or(false)
    }

    pub fn skipped_login(&self) -> bool {
        self.skip_login.unwrap_or(false)
    }

    /// Remove every key, restoring defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Durable key-value store for the auth record.
///
/// Writes are serialized; readers never block on a write in progress and
/// always see the last committed record. A write runs to completion on its
/// own task, so dropping the caller's future never separates the file from
/// the in-memory record.
pub struct PreferencesStore {
    shared: Arc<Shared>,
}

struct Shared {
    path: PathBuf,
    record: RwLock<Preferences>,
    write_lock: Mutex<()>,
    logged_in: watch::Sender<bool>,
    skip_login: watch::Sender<bool>,
    user_token: watch::Sender<Option<String>>,
    user_id: watch::Sender<Option<String>>,
}

impl PreferencesStore {
    /// Default directory for store files.
    ///
    /// Uses the platform local data dir (`~/.local/share` on Linux),
    /// falling back to the current directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("haepari")
            .join("datastore")
    }

    /// Path of the file backing the store `name` inside `dir`.
    pub fn file_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, FILE_SUFFIX))
    }

    /// Open (or create) the store named `name` inside `dir`.
    ///
    /// A missing file yields an empty record. A file that does not parse
    /// is reported as `StoreError::Corrupt` rather than silently reset.
    pub fn open(dir: &Path, name: &str) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        let path = Self::file_path(dir, name);

        let record = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
            toml::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: path.clone(),
                source: e,
            })?
        } else {
            Preferences::default()
        };

        tracing::debug!(path = %path.display(), "Preferences store opened");
        Ok(Self::with_record(path, record))
    }

    fn with_record(path: PathBuf, record: Preferences) -> Self {
        let (logged_in, _) = watch::channel(record.logged_in());
        let (skip_login, _) = watch::channel(record.skipped_login());
        let (user_token, _) = watch::channel(record.user_token.clone());
        let (user_id, _) = watch::channel(record.user_id.clone());
        Self {
            shared: Arc::new(Shared {
                path,
                record: RwLock::new(record),
                write_lock: Mutex::new(()),
                logged_in,
                skip_login,
                user_token,
                user_id,
            }),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.shared.path
    }

    /// Clone of the last committed record.
    pub fn snapshot(&self) -> Preferences {
        self.shared.snapshot()
    }

    pub fn is_logged_in(&self) -> bool {
        self.shared.record.read().logged_in()
    }

    pub fn is_skip_login(&self) -> bool {
        self.shared.record.read().skipped_login()
    }

    pub fn user_token(&self) -> Option<String> {
        self.shared.record.read().user_token.clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.shared.record.read().user_id.clone()
    }

    pub fn watch_logged_in(&self) -> watch::Receiver<bool> {
        self.shared.logged_in.subscribe()
    }

    pub fn watch_skip_login(&self) -> watch::Receiver<bool> {
        self.shared.skip_login.subscribe()
    }

    pub fn watch_user_token(&self) -> watch::Receiver<Option<String>> {
        self.shared.user_token.subscribe()
    }

    pub fn watch_user_id(&self) -> watch::Receiver<Option<String>> {
        self.shared.user_id.subscribe()
    }

    pub async fn set_logged_in(&self, value: bool) -> Result<(), StoreError> {
        self.commit(&[PrefKey::IsLoggedIn], move |prefs| {
            prefs.is_logged_in = Some(value)
        })
        .await
    }

    pub async fn set_skip_login(&self, value: bool) -> Result<(), StoreError> {
        self.commit(&[PrefKey::SkipLogin], move |prefs| {
            prefs.skip_login = Some(value)
        })
        .await
    }

    pub async fn set_user_token(&self, token: String) -> Result<(), StoreError> {
        self.commit(&[PrefKey::UserToken], move |prefs| {
            prefs.user_token = Some(token)
        })
        .await
    }

    pub async fn set_user_id(&self, user_id: String) -> Result<(), StoreError> {
        self.commit(&[PrefKey::UserId], move |prefs| prefs.user_id = Some(user_id))
            .await
    }

    /// Remove all keys, restoring defaults.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.commit(PrefKey::all(), Preferences::clear).await
    }

    /// Run one commit on its own task and wait for it.
    ///
    /// Once started, the commit finishes even if this future is dropped.
    async fn commit<F>(&self, touched: &[PrefKey], mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Preferences) + Send + 'static,
    {
        let shared = Arc::clone(&self.shared);
        let touched = touched.to_vec();
        tokio::spawn(async move { shared.commit(&touched, mutate).await })
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

impl Shared {
    fn snapshot(&self) -> Preferences {
        self.record.read().clone()
    }

    /// Apply `mutate` to a copy of the record, persist it, then publish.
    ///
    /// The in-memory record and the channels are only updated after the
    /// file write succeeded, so subscribers never observe an uncommitted
    /// value.
    async fn commit<F>(&self, touched: &[PrefKey], mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Preferences) + Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut next = self.snapshot();
        mutate(&mut next);
        let contents = toml::to_string(&next)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &contents))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))??;

        *self.record.write() = next.clone();
        self.publish(touched, &next);

        let keys: Vec<&'static str> = touched.iter().map(PrefKey::as_str).collect();
        tracing::debug!(keys = ?keys, "Preferences committed");
        Ok(())
    }

    fn publish(&self, touched: &[PrefKey], record: &Preferences) {
        for key in touched {
            match key {
                PrefKey::IsLoggedIn => {
                    self.logged_in.send_replace(record.logged_in());
                }
                PrefKey::SkipLogin => {
                    self.skip_login.send_replace(record.skipped_login());
                }
                PrefKey::UserToken => {
                    self.user_token.send_replace(record.user_token.clone());
                }
                PrefKey::UserId => {
                    self.user_id.send_replace(record.user_id.clone());
                }
            }
        }
    }
}

/// Replace `path` with `contents` via temp file + rename.
///
/// Holds an exclusive lock on a sidecar `.lock` file for the duration so
/// two processes sharing the store never interleave their writes.
fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    let lock_path = path.with_extension("lock");
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(&lock_path)
        .map_err(|e| StoreError::io(&lock_path, e))?;
    FileExt::lock_exclusive(&lock_file).map_err(|e| StoreError::io(&lock_path, e))?;

    let tmp_path = path.with_extension("tmp");
    {
        let mut tmp = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.write_all(contents.as_bytes())
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.sync_all().map_err(|e| StoreError::io(&tmp_path, e))?;
    }
    fs::rename(&tmp_path, path).map_err(|e| StoreError::io(path, e))?;

    // Lock is released when `lock_file` is closed.
    drop(lock_file);
    Ok(())
}
