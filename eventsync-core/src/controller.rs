//! Event sync controller.
//!
//! Mediates between a display surface and the remote store. Every mutation
//! is followed by a full re-fetch of the surface, and the re-fetch is only
//! issued after the mutation request has settled.

use tracing::{debug, info, warn};

use crate::error::SyncResult;
use crate::event::{EventClick, EventId};
use crate::form::{FormState, NewEvent};
use crate::protocol::StoreStatus;
use crate::store::RemoteStore;
use crate::surface::{Dialogs, DisplaySurface, Navigator};

/// What became of a form submission (add or edit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields were missing. Nothing was sent.
    Invalid,
    /// The store accepted it. The surface was re-fetched and the form cleared.
    Accepted,
    /// The store refused it or the request failed. The form is untouched.
    Rejected(String),
}

/// What became of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no. Nothing was sent.
    Declined,
    /// The store reported success.
    Deleted,
    /// The store reported failure or the request failed. The surface was
    /// re-fetched anyway.
    Unconfirmed(String),
}

pub struct EventSyncController<S, R, D, N> {
    surface: S,
    store: R,
    dialogs: D,
    navigator: N,
}

impl<S, R, D, N> EventSyncController<S, R, D, N>
where
    S: DisplaySurface,
    R: RemoteStore,
    D: Dialogs,
    N: Navigator,
{
    pub fn new(surface: S, store: R, dialogs: D, navigator: N) -> Self {
        EventSyncController {
            surface,
            store,
            dialogs,
            navigator,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Page-ready: draw the surface from its configured source.
    pub async fn init(&mut self) -> SyncResult<()> {
        self.surface.render().await
    }

    /// The user clicked an event: confirm, delete, re-fetch.
    pub async fn handle_delete(&mut self, click: EventClick) -> SyncResult<DeleteOutcome> {
        let prompt = format!("Delete event \"{}\"?", click.title);
        if !self.dialogs.confirm(&prompt) {
            debug!(id = %click.id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let outcome = match self.store.delete_event(&click.id).await {
            Ok(StoreStatus::Success) => {
                info!(id = %click.id, "event deleted");
                DeleteOutcome::Deleted
            }
            Ok(StoreStatus::Failure { message }) => {
                let reason = message.unwrap_or_else(|| "delete failed".to_string());
                warn!(id = %click.id, %reason, "server did not confirm delete");
                DeleteOutcome::Unconfirmed(reason)
            }
            Err(e) => {
                warn!(id = %click.id, error = %e, "delete request failed");
                DeleteOutcome::Unconfirmed(e.to_string())
            }
        };

        self.surface.refetch_events().await?;
        Ok(outcome)
    }

    /// The user submitted the add form.
    pub async fn handle_add(&mut self, form: &mut FormState) -> SyncResult<SubmitOutcome> {
        let Some(payload) = self.validated(form) else {
            return Ok(SubmitOutcome::Invalid);
        };

        let result = self.store.create_event(&payload).await;
        self.settle_submit("create", result, form).await
    }

    /// The user submitted the edit form for an existing event.
    pub async fn handle_edit(
        &mut self,
        id: &EventId,
        form: &mut FormState,
    ) -> SyncResult<SubmitOutcome> {
        let Some(payload) = self.validated(form) else {
            return Ok(SubmitOutcome::Invalid);
        };

        let result = self.store.update_event(id, &payload).await;
        self.settle_submit("update", result, form).await
    }

    /// The user asked for the PDF export.
    pub async fn handle_export(&mut self) -> SyncResult<()> {
        let url = self.store.export_url();
        debug!(%url, "navigating to export");
        self.navigator.navigate(&url).await
    }

    fn validated(&mut self, form: &FormState) -> Option<NewEvent> {
        match form.validate() {
            Ok(payload) => Some(payload),
            Err(e) => {
                self.dialogs.alert(&e.to_string());
                None
            }
        }
    }

    async fn settle_submit(
        &mut self,
        action: &str,
        result: SyncResult<StoreStatus>,
        form: &mut FormState,
    ) -> SyncResult<SubmitOutcome> {
        match result {
            Ok(StoreStatus::Success) => {
                info!(action, title = %form.title, "event saved");
                let refetched = self.surface.refetch_events().await;
                form.clear();
                refetched?;
                Ok(SubmitOutcome::Accepted)
            }
            Ok(StoreStatus::Failure { message }) => {
                let reason = message.unwrap_or_else(|| format!("{} failed", action));
                warn!(action, %reason, "server rejected event");
                Ok(SubmitOutcome::Rejected(reason))
            }
            Err(e) => {
                warn!(action, error = %e, "event request failed");
                Ok(SubmitOutcome::Rejected(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::event::Event;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use url::Url;

    type Log = Arc<Mutex<Vec<String>>>;

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    enum Reply {
        Status(StoreStatus),
        TransportError,
    }

    struct FakeStore {
        log: Log,
        reply: Reply,
    }

    impl FakeStore {
        fn reply(&self) -> SyncResult<StoreStatus> {
            match &self.reply {
                Reply::Status(s) => Ok(s.clone()),
                Reply::TransportError => Err(SyncError::Http("connection refused".into())),
            }
        }
    }

    #[async_trait]
    impl RemoteStore for FakeStore {
        async fn list_events(&self) -> SyncResult<Vec<Event>> {
            self.log.lock().unwrap().push("list".into());
            Ok(Vec::new())
        }

        async fn create_event(&self, event: &NewEvent) -> SyncResult<StoreStatus> {
            self.log
                .lock()
                .unwrap()
                .push(format!("create:{}", serde_json::to_string(event).unwrap()));
            self.reply()
        }

        async fn delete_event(&self, id: &EventId) -> SyncResult<StoreStatus> {
            self.log.lock().unwrap().push(format!("delete:{}", id));
            self.reply()
        }

        async fn update_event(&self, id: &EventId, _event: &NewEvent) -> SyncResult<StoreStatus> {
            self.log.lock().unwrap().push(format!("update:{}", id));
            self.reply()
        }

        fn export_url(&self) -> Url {
            Url::parse("http://calendar.test/generate-pdf").unwrap()
        }
    }

    struct FakeSurface {
        log: Log,
    }

    #[async_trait]
    impl DisplaySurface for FakeSurface {
        async fn render(&mut self) -> SyncResult<()> {
            self.log.lock().unwrap().push("render".into());
            Ok(())
        }

        async fn refetch_events(&mut self) -> SyncResult<()> {
            self.log.lock().unwrap().push("refetch".into());
            Ok(())
        }
    }

    struct FakeDialogs {
        log: Log,
        answer: bool,
    }

    impl Dialogs for FakeDialogs {
        fn confirm(&mut self, message: &str) -> bool {
            self.log.lock().unwrap().push(format!("confirm:{}", message));
            self.answer
        }

        fn alert(&mut self, message: &str) {
            self.log.lock().unwrap().push(format!("alert:{}", message));
        }
    }

    struct FakeNavigator {
        log: Log,
    }

    #[async_trait]
    impl Navigator for FakeNavigator {
        async fn navigate(&mut self, url: &Url) -> SyncResult<()> {
            self.log.lock().unwrap().push(format!("navigate:{}", url));
            Ok(())
        }
    }

    fn controller(
        reply: Reply,
        answer: bool,
    ) -> (
        EventSyncController<FakeSurface, FakeStore, FakeDialogs, FakeNavigator>,
        Log,
    ) {
        let log: Log = Arc::default();
        let controller = EventSyncController::new(
            FakeSurface { log: log.clone() },
            FakeStore {
                log: log.clone(),
                reply,
            },
            FakeDialogs {
                log: log.clone(),
                answer,
            },
            FakeNavigator { log: log.clone() },
        );
        (controller, log)
    }

    fn click() -> EventClick {
        EventClick {
            id: EventId::new("7"),
            title: "Standup".into(),
        }
    }

    #[tokio::test]
    async fn init_renders_surface() {
        let (mut c, log) = controller(Reply::Status(StoreStatus::Success), true);
        c.init().await.unwrap();
        assert_eq!(entries(&log), vec!["render"]);
    }

    #[tokio::test]
    async fn add_without_title_or_date_alerts_and_sends_nothing() {
        for mut form in [
            FormState::new("", "d", "2024-06-01", "09:00"),
            FormState::new("Standup", "d", "", "09:00"),
        ] {
            let (mut c, log) = controller(Reply::Status(StoreStatus::Success), true);
            let before = form.clone();

            let outcome = c.handle_add(&mut form).await.unwrap();

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(entries(&log), vec!["alert:Title and Date are required"]);
            assert_eq!(form, before);
        }
    }

    #[tokio::test]
    async fn add_success_refetches_then_clears_form() {
        let (mut c, log) = controller(Reply::Status(StoreStatus::Success), true);
        let mut form = FormState::new("Standup", "", "2024-06-01", "09:00");

        let outcome = c.handle_add(&mut form).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(
            entries(&log),
            vec![
                r#"create:{"title":"Standup","description":"","date":"2024-06-01","time":"09:00"}"#,
                "refetch",
            ]
        );
        assert_eq!(form.title, "");
        assert_eq!(form.description, "");
        assert_eq!(form.date, "");
        assert_eq!(form.time, "");
    }

    #[tokio::test]
    async fn add_rejected_keeps_form_and_skips_refetch() {
        let (mut c, log) = controller(
            Reply::Status(StoreStatus::Failure {
                message: Some("fail".into()),
            }),
            true,
        );
        let mut form = FormState::new("Standup", "notes", "2024-06-01", "09:00");
        let before = form.clone();

        let outcome = c.handle_add(&mut form).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected("fail".into()));
        assert_eq!(form, before);
        let log = entries(&log);
        assert_eq!(log.len(), 1);
        assert!(log[0].starts_with("create:"));
    }

    #[tokio::test]
    async fn add_transport_error_is_silent() {
        let (mut c, log) = controller(Reply::TransportError, true);
        let mut form = FormState::new("Standup", "", "2024-06-01", "");
        let before = form.clone();

        let outcome = c.handle_add(&mut form).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(form, before);
        assert!(!entries(&log).iter().any(|e| e.starts_with("alert:")));
        assert!(!entries(&log).contains(&"refetch".to_string()));
    }

    #[tokio::test]
    async fn declined_delete_is_a_no_op() {
        let (mut c, log) = controller(Reply::Status(StoreStatus::Success), false);

        let outcome = c.handle_delete(click()).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(entries(&log), vec![r#"confirm:Delete event "Standup"?"#]);
    }

    #[tokio::test]
    async fn confirmed_delete_sends_once_then_refetches_once() {
        let (mut c, log) = controller(Reply::Status(StoreStatus::Success), true);

        let outcome = c.handle_delete(click()).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            entries(&log),
            vec![r#"confirm:Delete event "Standup"?"#, "delete:7", "refetch"]
        );
    }

    #[tokio::test]
    async fn delete_refetches_regardless_of_response() {
        for reply in [
            Reply::Status(StoreStatus::Failure { message: None }),
            Reply::TransportError,
        ] {
            let (mut c, log) = controller(reply, true);

            let outcome = c.handle_delete(click()).await.unwrap();

            assert!(matches!(outcome, DeleteOutcome::Unconfirmed(_)));
            let log = entries(&log);
            assert_eq!(&log[1..], ["delete:7", "refetch"]);
        }
    }

    #[tokio::test]
    async fn edit_success_refetches_and_clears() {
        let (mut c, log) = controller(Reply::Status(StoreStatus::Success), true);
        let mut form = FormState::new("Retro", "", "2024-06-02", "");

        let outcome = c.handle_edit(&EventId::new("3"), &mut form).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(entries(&log), vec!["update:3", "refetch"]);
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn export_navigates_to_fixed_path() {
        let (mut c, log) = controller(Reply::Status(StoreStatus::Success), true);

        c.handle_export().await.unwrap();

        assert_eq!(
            entries(&log),
            vec!["navigate:http://calendar.test/generate-pdf"]
        );
    }
}
