//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use club_roster::{
    cli::{Commands, RosterCli},
    commands::{handle_add, handle_delete, handle_edit, handle_list, handle_show, CommandContext},
    ClientConfig,
};
use env_logger::Env;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let app = RosterCli::parse();

    let config = ClientConfig::from_sources(app.api_url, app.token, app.timeout)
        .context("Failed to configure the player directory")?;
    let mut ctx = CommandContext::new(config, app.json)?;

    match app.command {
        Commands::List { category, team_id } => handle_list(&mut ctx, category, team_id)
            .await
            .context("Failed to list players")?,

        Commands::Show { id } => handle_show(&mut ctx, id)
            .await
            .with_context(|| format!("Failed to show player {}", id))?,

        Commands::Add { fields } => handle_add(&mut ctx, &fields)
            .await
            .context("Failed to add player")?,

        Commands::Edit { id, fields } => handle_edit(&mut ctx, id, &fields)
            .await
            .with_context(|| format!("Failed to edit player {}", id))?,

        Commands::Delete { id, yes } => handle_delete(&mut ctx, id, yes)
            .await
            .with_context(|| format!("Failed to delete player {}", id))?,
    }

    Ok(())
}
