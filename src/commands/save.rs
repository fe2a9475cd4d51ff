//! Adding and editing players through the roster form.

use super::common::{format_player_line, print_json, CommandContext};
use crate::{
    cli::PlayerFields,
    directory::PlayerDirectory,
    error::RosterError,
    models::PlayerId,
    view::{LoadOutcome, SaveOutcome},
    Result,
};

/// Open the add form, fill it from `fields` and save.
pub async fn handle_add(ctx: &mut CommandContext, fields: &PlayerFields) -> Result<()> {
    ctx.require(ctx.view.controls().can_add)?;

    ctx.view.open_add();
    fields.apply_to(ctx.view.draft_mut());

    let outcome = ctx.view.save(&ctx.directory).await;
    report_save(ctx, outcome)
}

/// Open the edit form on player `id`, patch the given fields and save.
pub async fn handle_edit(ctx: &mut CommandContext, id: PlayerId, fields: &PlayerFields) -> Result<()> {
    ctx.require(ctx.view.controls().can_edit)?;

    if ctx.view.load(&ctx.directory).await == LoadOutcome::Failed {
        return Err(ctx.failure("Loading the roster"));
    }
    let player = match ctx.view.find(id) {
        Some(player) => player.clone(),
        None => ctx.directory.get(id).await?,
    };

    ctx.view.open_edit(&player);
    fields.apply_to(ctx.view.draft_mut());

    let outcome = ctx.view.save(&ctx.directory).await;
    report_save(ctx, outcome)
}

fn report_save(ctx: &mut CommandContext, outcome: SaveOutcome) -> Result<()> {
    match outcome {
        SaveOutcome::Saved { message, player } => {
            if ctx.as_json {
                print_json(&player)?;
            } else {
                println!("✓ {}", message);
                println!("{}", format_player_line(&player));
            }
            Ok(())
        }
        SaveOutcome::Invalid(issues) => Err(RosterError::InvalidDraft { issues }),
        SaveOutcome::Failed => Err(ctx.failure("Saving the player")),
        SaveOutcome::NotOpen => {
            println!("Nothing to save.");
            Ok(())
        }
    }
}
