use anyhow::Result;
use eventsync_core::{DeleteOutcome, Dialogs};
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::prompts::{AssumeYes, BrowserNavigator, TerminalDialogs};

use super::{controller, find_event};

pub async fn run(client: &Client, id: String, yes: bool) -> Result<()> {
    let dialogs: Box<dyn Dialogs> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalDialogs)
    };
    let mut controller = controller(client, dialogs, Box::new(BrowserNavigator));

    controller.surface_mut().load().await?;
    let click = find_event(controller.surface().events(), &id)?.click();

    match controller.handle_delete(click).await? {
        DeleteOutcome::Declined => println!("{}", "  Nothing deleted".dimmed()),
        DeleteOutcome::Deleted => println!("{}", "  Deleted".red()),
        DeleteOutcome::Unconfirmed(reason) => {
            eprintln!("{}", format!("  The server did not confirm the delete: {}", reason).yellow())
        }
    }

    Ok(())
}
