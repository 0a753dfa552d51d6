//! Persistence contract consumed by the auth domain.

use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;

use crate::prefs::StoreError;

/// Continuous stream of one persisted field.
///
/// Emits the current value on subscription, then a value after every
/// committed write to that field.
pub type FieldStream<T> = Pin<Box<dyn Stream<Item = Result<T, StoreError>> + Send>>;

/// Access to the persisted auth record.
///
/// Writes complete only once durably committed. There is no transactional
/// guarantee across fields.
#[async_trait]
pub trait UserRepository: Send + Sync {
    fn logged_in(&self) -> FieldStream<bool>;

    fn skip_login(&self) -> FieldStream<bool>;

    fn user_token(&self) -> FieldStream<Option<String>>;

    async fn set_logged_in(&self, logged_in: bool) -> Result<(), StoreError>;

    async fn set_skip_login(&self, skip: bool) -> Result<(), StoreError>;

    async fn set_user_token(&self, token: String) -> Result<(), StoreError>;

    async fn set_user_id(&self, user_id: String) -> Result<(), StoreError>;

    /// Remove every field, restoring defaults.
    async fn clear_user_data(&self) -> Result<(), StoreError>;
}
