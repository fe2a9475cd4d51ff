//! Roster listing.

use super::common::{print_players, CommandContext};
use crate::{
    core::PlayerFilter,
    directory::PlayerDirectory,
    models::{is_known_category, TeamId, KNOWN_CATEGORIES},
    view::LoadOutcome,
    Result,
};
use log::warn;

/// List players for `category`, or all categories when omitted.
///
/// Category filtering goes through the roster view. The view exposes no team
/// dimension, so a `team_id` filter queries the directory directly.
pub async fn handle_list(
    ctx: &mut CommandContext,
    category: Option<String>,
    team_id: Option<TeamId>,
) -> Result<()> {
    if let Some(label) = category.as_deref().filter(|c| !c.trim().is_empty()) {
        if !is_known_category(label) {
            warn!(
                "Category '{}' is not one of {}; the roster may come back empty",
                label,
                KNOWN_CATEGORIES.join(", ")
            );
        }
    }

    if team_id.is_some() {
        let filter = PlayerFilter::default()
            .with_category(category)
            .with_team(team_id);
        let players = ctx.directory.list(&filter).await?;
        return print_players(&players, ctx.as_json);
    }

    match ctx.view.set_category(&ctx.directory, category).await {
        LoadOutcome::Failed => Err(ctx.failure("Listing players")),
        _ => print_players(ctx.view.roster(), ctx.as_json),
    }
}
