use anyhow::Result;
use dialoguer::Select;
use eventsync_core::{DisplaySurface, EventClick, FormState};
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::prompts::{fill_form, BrowserNavigator, TerminalDialogs};
use crate::render::event_label;

use super::{controller, Controller};

const ACTIONS: [&str; 5] = ["Add event", "Delete event", "Download PDF", "Refresh", "Quit"];

/// One thing the user asked for from the menu.
#[derive(Debug)]
enum Action {
    /// Submit the add form as it stands.
    Add,
    Delete(EventClick),
    Export,
    Refresh,
    Quit,
}

/// Interactive session: draw the calendar, then handle one action at a time.
///
/// The add form keeps its contents between actions until an add succeeds.
/// A failed action is reported and the session carries on.
pub async fn run(client: &Client) -> Result<()> {
    let mut controller = controller(client, Box::new(TerminalDialogs), Box::new(BrowserNavigator));
    controller.init().await?;

    let mut form = FormState::default();

    loop {
        println!();
        let Some(action) = choose_action(&controller, &mut form)? else {
            continue;
        };

        if !step(&mut controller, &mut form, action).await {
            break;
        }
    }

    Ok(())
}

/// Show the menu and gather whatever the picked action needs.
///
/// `None` means the user backed out and nothing should happen.
fn choose_action(controller: &Controller<'_>, form: &mut FormState) -> Result<Option<Action>> {
    let choice = Select::new()
        .with_prompt("What next?")
        .items(&ACTIONS)
        .default(0)
        .interact()?;

    let action = match choice {
        0 => {
            fill_form(form)?;
            Action::Add
        }
        1 => {
            let events = controller.surface().events();
            if events.is_empty() {
                println!("{}", "No events to delete".dimmed());
                return Ok(None);
            }

            let labels: Vec<String> = events.iter().map(event_label).collect();
            let picked = Select::new()
                .with_prompt("Which event?")
                .items(&labels)
                .default(0)
                .interact_opt()?;

            let Some(index) = picked else { return Ok(None) };
            Action::Delete(events[index].click())
        }
        2 => Action::Export,
        3 => Action::Refresh,
        _ => Action::Quit,
    };

    Ok(Some(action))
}

/// Run one action. Returns `false` once the user quits.
///
/// Errors (server down, expired session, no browser) are printed and the
/// session keeps going.
async fn step(controller: &mut Controller<'_>, form: &mut FormState, action: Action) -> bool {
    let result = match action {
        Action::Quit => return false,
        Action::Add => controller.handle_add(form).await.map(drop),
        Action::Delete(click) => controller.handle_delete(click).await.map(drop),
        Action::Export => controller.handle_export().await,
        Action::Refresh => controller.surface_mut().refetch_events().await,
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, "action failed");
        eprintln!("{}", format!("Error: {}", e).red());
    }
    true
}
