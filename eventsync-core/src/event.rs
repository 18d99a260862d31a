//! Event types as served by the event server.
//!
//! The server is the only authority on events. Everything here is a
//! transient view that gets replaced wholesale on every re-fetch.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned event identifier.
///
/// The server hands out integer row ids, but the client treats them as
/// opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Str(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => EventId(n.to_string()),
            RawId::Str(s) => EventId(s),
        })
    }
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "WireEvent")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    /// `None` for untimed events.
    pub time: Option<NaiveTime>,
}

impl Event {
    /// The notification a click on this event produces.
    pub fn click(&self) -> EventClick {
        EventClick {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Emitted by a display surface when the user picks an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventClick {
    pub id: EventId,
    pub title: String,
}

/// Shape of an item in the `GET /events` array.
#[derive(Deserialize)]
struct WireEvent {
    id: EventId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    start: String,
}

impl TryFrom<WireEvent> for Event {
    type Error = String;

    fn try_from(wire: WireEvent) -> Result<Self, Self::Error> {
        let (date, time) = parse_start(&wire.start)?;
        Ok(Event {
            id: wire.id,
            title: wire.title,
            description: wire.description.filter(|d| !d.is_empty()),
            date,
            time,
        })
    }
}

/// Decode the items of a `GET /events` array one by one.
///
/// Items that don't describe a readable event (typically a `start` the
/// server stored unvalidated) are logged and dropped. The rest are kept.
pub fn decode_event_list(items: Vec<serde_json::Value>) -> Vec<Event> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Event>(item) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable event");
                None
            }
        })
        .collect()
}

/// Parse a `start` value into date and optional time.
///
/// The server fills in `00:00` for events stored without a time, so
/// midnight is read back as untimed.
pub fn parse_start(start: &str) -> Result<(NaiveDate, Option<NaiveTime>), String> {
    if let Ok(date) = NaiveDate::parse_from_str(start, "%Y-%m-%d") {
        return Ok((date, None));
    }

    let dt = NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| format!("Invalid event start '{}'", start))?;

    let time = Some(dt.time()).filter(|t| *t != NaiveTime::MIN);
    Ok((dt.date(), time))
}
