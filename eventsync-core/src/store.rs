//! The remote event store seam.

use async_trait::async_trait;
use url::Url;

use crate::error::SyncResult;
use crate::event::{Event, EventId};
use crate::form::NewEvent;
use crate::protocol::StoreStatus;

/// Trait for the server that persists events.
///
/// Implementations map each method onto one request. Nothing is cached,
/// batched or retried.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// `GET /events`
    async fn list_events(&self) -> SyncResult<Vec<Event>>;

    /// `POST /add`
    async fn create_event(&self, event: &NewEvent) -> SyncResult<StoreStatus>;

    /// `DELETE /delete/:id`
    async fn delete_event(&self, id: &EventId) -> SyncResult<StoreStatus>;

    /// `POST /event/:id/edit`
    async fn update_event(&self, id: &EventId, event: &NewEvent) -> SyncResult<StoreStatus>;

    /// Location of the PDF export (`/generate-pdf`).
    fn export_url(&self) -> Url;
}

#[async_trait]
impl<T: RemoteStore + ?Sized> RemoteStore for &T {
    async fn list_events(&self) -> SyncResult<Vec<Event>> {
        (**self).list_events().await
    }

    async fn create_event(&self, event: &NewEvent) -> SyncResult<StoreStatus> {
        (**self).create_event(event).await
    }

    async fn delete_event(&self, id: &EventId) -> SyncResult<StoreStatus> {
        (**self).delete_event(id).await
    }

    async fn update_event(&self, id: &EventId, event: &NewEvent) -> SyncResult<StoreStatus> {
        (**self).update_event(id, event).await
    }

    fn export_url(&self) -> Url {
        (**self).export_url()
    }
}
