use async_trait::async_trait;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;

use crate::domain::{FieldStream, UserRepository};

use super::error::StoreError;
use super::store::PreferencesStore;

#[async_trait]
impl UserRepository for PreferencesStore {
    fn logged_in(&self) -> FieldStream<bool> {
        Box::pin(WatchStream::new(self.watch_logged_in()).map(Ok::<_, StoreError>))
    }

    fn skip_login(&self) -> FieldStream<bool> {
        Box::pin(WatchStream::new(self.watch_skip_login()).map(Ok::<_, StoreError>))
    }

    fn user_token(&self) -> FieldStream<Option<String>> {
        Box::pin(WatchStream::new(self.watch_user_token()).map(Ok::<_, StoreError>))
    }

    async fn set_logged_in(&self, logged_in: bool) -> Result<(), StoreError> {
        PreferencesStore::set_logged_in(self, logged_in).await
    }

    async fn set_skip_login(&self, skip: bool) -> Result<(), StoreError> {
        PreferencesStore::set_skip_login(self, skip).await
    }

    async fn set_user_token(&self, token: String) -> Result<(), StoreError> {
        PreferencesStore::set_user_token(self, token).await
    }

    async fn set_user_id(&self, user_id: String) -> Result<(), StoreError> {
        PreferencesStore::set_user_id(self, user_id).await
    }

    async fn clear_user_data(&self) -> Result<(), StoreError> {
        self.clear().await
    }
}
