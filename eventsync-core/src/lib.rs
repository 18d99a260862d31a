//! Core types for eventsync.
//!
//! Shared by the terminal client and anything else that wants to drive the
//! event server:
//! - `Event`, `FormState` and the wire protocol types
//! - the `RemoteStore`, `DisplaySurface`, `Dialogs` and `Navigator` seams
//! - `EventSyncController`, which wires them together

pub mod controller;
pub mod error;
pub mod event;
pub mod form;
pub mod protocol;
pub mod store;
pub mod surface;

pub use controller::{DeleteOutcome, EventSyncController, SubmitOutcome};
pub use error::{SyncError, SyncResult, ValidationError};
pub use event::{Event, EventClick, EventId};
pub use form::{FormState, NewEvent};
pub use protocol::StoreStatus;
pub use store::RemoteStore;
pub use surface::{Dialogs, DisplaySurface, Navigator};
