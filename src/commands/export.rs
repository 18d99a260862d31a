use std::path::PathBuf;

use anyhow::{Context, Result};
use eventsync_core::Navigator;

use crate::client::Client;
use crate::prompts::{BrowserNavigator, DownloadNavigator, TerminalDialogs};

use super::controller;

/// Open the PDF export in the browser, or save it with `--save`.
pub async fn run(client: &Client, save: Option<PathBuf>) -> Result<()> {
    let navigator: Box<dyn Navigator + '_> = match save {
        Some(dest) => Box::new(DownloadNavigator::new(client, dest)),
        None => Box::new(BrowserNavigator),
    };

    let mut controller = controller(client, Box::new(TerminalDialogs), navigator);
    controller
        .handle_export()
        .await
        .context("Failed to export events")
}
