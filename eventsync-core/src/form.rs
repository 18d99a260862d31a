//! The add/edit event form.

use serde::Serialize;

use crate::error::ValidationError;

/// Raw text of the four event form fields.
///
/// Values are kept exactly as typed. Nothing is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

impl FormState {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        FormState {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Build the create payload, requiring a non-empty title and date.
    pub fn validate(&self) -> Result<NewEvent, ValidationError> {
        if self.title.is_empty() || self.date.is_empty() {
            return Err(ValidationError);
        }

        Ok(NewEvent {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.date.clear();
        self.time.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.date.is_empty()
            && self.time.is_empty()
    }
}

/// Body of `POST /add` (and the edit form).
///
/// Optional fields go over the wire as empty strings, never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}
