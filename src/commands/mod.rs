pub mod add;
pub mod delete;
pub mod edit;
pub mod events;
pub mod export;
pub mod register;
pub mod ui;

use anyhow::{Context, Result};
use eventsync_core::{Dialogs, Event, EventSyncController, Navigator};

use crate::client::Client;
use crate::config::Config;
use crate::surface::TerminalCalendar;

pub type Controller<'a> = EventSyncController<
    TerminalCalendar<&'a Client>,
    &'a Client,
    Box<dyn Dialogs>,
    Box<dyn Navigator + 'a>,
>;

pub fn controller<'a>(
    client: &'a Client,
    dialogs: Box<dyn Dialogs>,
    navigator: Box<dyn Navigator + 'a>,
) -> Controller<'a> {
    EventSyncController::new(TerminalCalendar::new(client), client, dialogs, navigator)
}

/// Build a client for the configured server and log in if an account is set.
pub async fn connect(config: &Config) -> Result<Client> {
    let client = Client::new(config.server_url()?, config.timeout())?;

    if let Some(email) = &config.email {
        let password = match &config.password {
            Some(p) => p.clone(),
            None => rpassword::prompt_password(format!("Password for {}: ", email))
                .context("Failed to read password")?,
        };

        client
            .login(email, &password)
            .await
            .with_context(|| format!("Login failed for {}", email))?;
    }

    Ok(client)
}

/// Look up an event by id in the last loaded list.
pub fn find_event<'e>(events: &'e [Event], id: &str) -> Result<&'e Event> {
    events.iter().find(|e| e.id.as_str() == id).ok_or_else(|| {
        anyhow::anyhow!(
            "Event '{}' not found.\n\
            Run `eventsync events` to see event ids.",
            id
        )
    })
}
