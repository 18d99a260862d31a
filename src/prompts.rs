//! Terminal dialogs and navigators.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use dialoguer::{Confirm, Input};
use eventsync_core::{Dialogs, FormState, Navigator, SyncError, SyncResult};
use owo_colors::OwoColorize;
use url::Url;

use crate::client::Client;
use crate::utils::tui::with_spinner;

/// Blocking yes/no prompt and red alerts on stderr.
pub struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        eprintln!("  {}", message.red());
    }
}

/// Answers every confirmation with yes (`--yes`).
pub struct AssumeYes;

impl Dialogs for AssumeYes {
    fn confirm(&mut self, message: &str) -> bool {
        println!("{} {}", message, "yes".dimmed());
        true
    }

    fn alert(&mut self, message: &str) {
        eprintln!("  {}", message.red());
    }
}

/// Opens the URL in the default browser.
pub struct BrowserNavigator;

#[async_trait]
impl Navigator for BrowserNavigator {
    async fn navigate(&mut self, url: &Url) -> SyncResult<()> {
        open::that(url.as_str()).map_err(|e| SyncError::Navigation(e.to_string()))?;
        println!("Opened {}", url.dimmed());
        Ok(())
    }
}

/// Downloads the document through the logged-in client instead of a browser.
pub struct DownloadNavigator<'a> {
    client: &'a Client,
    dest: PathBuf,
}

impl<'a> DownloadNavigator<'a> {
    pub fn new(client: &'a Client, dest: PathBuf) -> Self {
        DownloadNavigator { client, dest }
    }
}

#[async_trait]
impl Navigator for DownloadNavigator<'_> {
    async fn navigate(&mut self, url: &Url) -> SyncResult<()> {
        let bytes = with_spinner("Downloading", self.client.download(url, &self.dest)).await?;
        println!(
            "{}",
            format!("Saved {} ({} bytes)", self.dest.display(), bytes).green()
        );
        Ok(())
    }
}

/// Prompt for every form field, starting from its current value.
pub fn fill_form(form: &mut FormState) -> Result<()> {
    form.title = prompt_field("  Title", &form.title)?;
    form.description = prompt_field("  Description (skip)", &form.description)?;
    form.date = prompt_field("  Date (YYYY-MM-DD)", &form.date)?;
    form.time = prompt_field("  Time (HH:MM, skip)", &form.time)?;
    Ok(())
}

fn prompt_field(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
