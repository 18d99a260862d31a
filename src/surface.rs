//! Terminal display surface.

use async_trait::async_trait;
use eventsync_core::{DisplaySurface, Event, RemoteStore, SyncResult};

use crate::render::{render_events, sort_events};
use crate::utils::tui::with_spinner;

/// Calendar view printed to stdout.
///
/// Holds whatever the last fetch returned and nothing else; every load
/// replaces the whole list.
pub struct TerminalCalendar<S> {
    source: S,
    events: Vec<Event>,
}

impl<S: RemoteStore> TerminalCalendar<S> {
    pub fn new(source: S) -> Self {
        TerminalCalendar {
            source,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Fetch the full event list without drawing it.
    pub async fn load(&mut self) -> SyncResult<()> {
        let mut events = with_spinner("Loading events", self.source.list_events()).await?;
        sort_events(&mut events);
        tracing::debug!(count = events.len(), "events loaded");
        self.events = events;
        Ok(())
    }

    fn draw(&self) {
        let today = chrono::Local::now().date_naive();
        println!("{}", render_events(&self.events, today));
    }
}

#[async_trait]
impl<S: RemoteStore> DisplaySurface for TerminalCalendar<S> {
    async fn render(&mut self) -> SyncResult<()> {
        self.load().await?;
        self.draw();
        Ok(())
    }

    async fn refetch_events(&mut self) -> SyncResult<()> {
        self.load().await?;
        println!();
        self.draw();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventsync_core::{EventId, NewEvent, StoreStatus};
    use std::sync::Mutex;
    use url::Url;

    /// Serves a different list on every call.
    struct ScriptedStore {
        pages: Mutex<Vec<Vec<Event>>>,
    }

    #[async_trait]
    impl RemoteStore for ScriptedStore {
        async fn list_events(&self) -> SyncResult<Vec<Event>> {
            Ok(self.pages.lock().unwrap().remove(0))
        }

        async fn create_event(&self, _event: &NewEvent) -> SyncResult<StoreStatus> {
            unreachable!()
        }

        async fn delete_event(&self, _id: &EventId) -> SyncResult<StoreStatus> {
            unreachable!()
        }

        async fn update_event(&self, _id: &EventId, _event: &NewEvent) -> SyncResult<StoreStatus> {
            unreachable!()
        }

        fn export_url(&self) -> Url {
            unreachable!()
        }
    }

    fn event(id: &str, day: u32) -> Event {
        Event {
            id: EventId::new(id),
            title: format!("event {}", id),
            description: None,
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            time: None,
        }
    }

    #[tokio::test]
    async fn refetch_replaces_the_whole_list() {
        let store = ScriptedStore {
            pages: Mutex::new(vec![
                vec![event("2", 2), event("1", 1)],
                vec![event("3", 3)],
            ]),
        };
        let mut calendar = TerminalCalendar::new(store);

        calendar.render().await.unwrap();
        let ids: Vec<&str> = calendar.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        calendar.refetch_events().await.unwrap();
        let ids: Vec<&str> = calendar.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }
}
