//! Player detail.

use super::common::{format_player_detail, print_json, CommandContext};
use crate::{
    directory::PlayerDirectory,
    models::PlayerId,
    view::{DetailState, LoadOutcome},
    Result,
};
use chrono::Local;

/// Show one player.
///
/// The roster is loaded and the player already in it is reused for the
/// detail panel; only a player missing from the roster is fetched by id.
pub async fn handle_show(ctx: &mut CommandContext, id: PlayerId) -> Result<()> {
    if ctx.view.load(&ctx.directory).await == LoadOutcome::Failed {
        return Err(ctx.failure("Loading the roster"));
    }

    let player = match ctx.view.find(id) {
        Some(player) => player.clone(),
        None => ctx.directory.get(id).await?,
    };
    ctx.view.view_details(&player);

    if let DetailState::Viewing(player) = ctx.view.detail() {
        if ctx.as_json {
            print_json(player)?;
        } else {
            let today = Local::now().date_naive();
            println!(
                "{}",
                format_player_detail(player, ctx.view.team_name(player), today)
            );
        }
    }
    ctx.view.close_details();
    Ok(())
}
