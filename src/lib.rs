// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{NoteCreator, NoteDeleter, NoteLister};
use domain::{NoteDraft, NoteFilter};
use infrastructure::{ClientConfig, Config, NotehubClient};
use ports::TextPresenter;
use serde::Serialize;
use tracing::{debug, info};
use crate::cli::args::{Args, Command};
use crate::constants::TOKEN_ENV_VAR;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notehub with arguments");

    // Initialize configuration
    let config = Config::load_or_default(args.config.as_deref())?;
    let client_config = client_config(&config, &args, std::env::var(TOKEN_ENV_VAR).ok());
    debug!(base_url = %client_config.base_url, "Using NoteHub API");

    // Initialize infrastructure
    let client = NotehubClient::new(&client_config).context("Failed to set up NoteHub client")?;
    let presenter = TextPresenter::new();

    match args.command {
        Command::List {
            search,
            page,
            per_page,
            json,
        } => {
            let filter = NoteFilter::new()
                .page(page)
                .per_page(per_page.unwrap_or(config.defaults.per_page))
                .search(search.unwrap_or_default());

            info!(page = filter.page, per_page = filter.per_page, "Listing notes");
            let result = NoteLister::new(client)
                .list_notes(&filter)
                .await
                .context("Failed to list notes")?;

            if json {
                print_json(&result)?;
            } else {
                print!("{}", presenter.render_page(&result));
            }
        }
        Command::Create {
            title,
            content,
            tag,
            json,
        } => {
            let draft = NoteDraft::new(title, content, tag);

            info!(title = %draft.title, %tag, "Creating note");
            let note = NoteCreator::new(client)
                .create_note(&draft)
                .await
                .context("Failed to create note")?;

            if json {
                print_json(&note)?;
            } else {
                println!("Created note {}", note.id);
                print!("{}", presenter.render_note(&note));
            }
        }
        Command::Delete { note_id, json } => {
            info!(%note_id, "Deleting note");
            let note = NoteDeleter::new(client)
                .delete_note(&note_id)
                .await
                .with_context(|| format!("Failed to delete note {}", note_id))?;

            if json {
                print_json(&note)?;
            } else {
                println!("Deleted note {}", note.id);
                print!("{}", presenter.render_note(&note));
            }
        }
    }

    Ok(())
}

/// Merge the config file, CLI overrides and the environment token
pub fn client_config(config: &Config, args: &Args, env_token: Option<String>) -> ClientConfig {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    ClientConfig::new(base_url, config.resolve_token(env_token))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
