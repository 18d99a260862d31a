use anyhow::Result;
use eventsync_core::DisplaySurface;

use crate::client::Client;
use crate::surface::TerminalCalendar;

pub async fn run(client: &Client) -> Result<()> {
    let mut calendar = TerminalCalendar::new(client);
    calendar.render().await?;
    Ok(())
}
