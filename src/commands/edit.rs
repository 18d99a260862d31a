use anyhow::Result;
use eventsync_core::{Event, FormState, SubmitOutcome};
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::prompts::{fill_form, BrowserNavigator, TerminalDialogs};

use super::{controller, find_event};

pub async fn run(
    client: &Client,
    id: String,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() && description.is_none() && date.is_none() && time.is_none();

    let mut controller = controller(client, Box::new(TerminalDialogs), Box::new(BrowserNavigator));
    controller.surface_mut().load().await?;
    let event = find_event(controller.surface().events(), &id)?;
    let event_id = event.id.clone();

    let mut form = form_from_event(event);
    if let Some(t) = title {
        form.title = t;
    }
    if let Some(d) = description {
        form.description = d;
    }
    if let Some(d) = date {
        form.date = d;
    }
    if let Some(t) = time {
        form.time = t;
    }

    if interactive {
        if form.time.is_empty() {
            println!("{}", "  No time on record. Enter 00:00 to keep a midnight start.".dimmed());
        }
        fill_form(&mut form)?;
    }

    let title = form.title.clone();
    match controller.handle_edit(&event_id, &mut form).await? {
        SubmitOutcome::Accepted => {
            println!("{}", format!("  Updated: {}", title).yellow());
            Ok(())
        }
        SubmitOutcome::Invalid => anyhow::bail!("Event not updated"),
        SubmitOutcome::Rejected(reason) => {
            anyhow::bail!("The server did not save the event: {}", reason)
        }
    }
}

/// Pre-fill the form with an event's current values.
///
/// The server serves `T00:00` both for events stored without a time and for
/// events saved at 00:00, so both read back untimed and prefill an empty
/// time. Submitting that unchanged stores the event without a time.
fn form_from_event(event: &Event) -> FormState {
    FormState::new(
        event.title.clone(),
        event.description.clone().unwrap_or_default(),
        event.date.format("%Y-%m-%d").to_string(),
        event
            .time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default(),
    )
}
