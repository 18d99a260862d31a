use anyhow::Result;
use eventsync_core::{FormState, SubmitOutcome};
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::prompts::{fill_form, BrowserNavigator, TerminalDialogs};

use super::controller;

pub async fn run(
    client: &Client,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none();

    let mut form = FormState::new(
        title.unwrap_or_default(),
        description.unwrap_or_default(),
        date.unwrap_or_default(),
        time.unwrap_or_default(),
    );

    if interactive {
        fill_form(&mut form)?;
    }

    let title = form.title.clone();
    let mut controller = controller(client, Box::new(TerminalDialogs), Box::new(BrowserNavigator));

    match controller.handle_add(&mut form).await? {
        SubmitOutcome::Accepted => {
            println!("{}", format!("  Created: {}", title).green());
            Ok(())
        }
        SubmitOutcome::Invalid => anyhow::bail!("Event not created"),
        SubmitOutcome::Rejected(reason) => {
            anyhow::bail!("The server did not save the event: {}", reason)
        }
    }
}
