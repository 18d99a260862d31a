use anyhow::{Context, Result};
use dialoguer::Input;
use eventsync_core::StoreStatus;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::config::Config;

pub async fn run(config: &Config, name: Option<String>, email: Option<String>) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new().with_prompt("  Name").interact_text()?,
    };
    let email = match email.or_else(|| config.email.clone()) {
        Some(e) => e,
        None => Input::<String>::new().with_prompt("  Email").interact_text()?,
    };
    let password = rpassword::prompt_password("  Password: ").context("Failed to read password")?;

    let client = Client::new(config.server_url()?, config.timeout())?;

    match client.register(&name, &email, &password).await? {
        StoreStatus::Success => {
            println!("{}", format!("  Registered {}", email).green());
            println!();
            println!("Add your account to {}:", Config::config_path()?.display());
            println!();
            println!("email = \"{}\"", email);
            Ok(())
        }
        StoreStatus::Failure { message } => {
            anyhow::bail!(message.unwrap_or_else(|| "Registration failed".to_string()))
        }
    }
}
