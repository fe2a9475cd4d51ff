//! Common utilities and helper functions shared across commands.

use crate::{
    core::ClientConfig,
    directory::HttpPlayerDirectory,
    error::{Result, RosterError},
    models::Player,
    view::RosterView,
    API_TOKEN_ENV_VAR,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Resources every command needs: the directory client, a roster view
/// driving it, and the output mode.
pub struct CommandContext {
    pub directory: HttpPlayerDirectory,
    pub view: RosterView,
    pub as_json: bool,
}

impl CommandContext {
    /// A session is admin when it carries an API token.
    pub fn new(config: ClientConfig, as_json: bool) -> Result<Self> {
        let is_admin = config.has_token();
        Ok(Self {
            directory: HttpPlayerDirectory::new(config)?,
            view: RosterView::new().with_admin(is_admin),
            as_json,
        })
    }

    /// Refuse actions whose control the view would not show.
    pub fn require(&self, control_visible: bool) -> Result<()> {
        if control_visible {
            Ok(())
        } else {
            Err(RosterError::AdminRequired {
                env_var: API_TOKEN_ENV_VAR.to_string(),
            })
        }
    }

    /// The error behind a `Failed` outcome of `action`.
    pub fn failure(&mut self, action: &str) -> RosterError {
        self.view
            .take_error()
            .unwrap_or_else(|| RosterError::ErrorTaken {
                action: action.to_string(),
            })
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One roster card as a text line: id, name, number, position, category.
pub fn format_player_line(player: &Player) -> String {
    let id = player
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut line = format!("{:>4}  {}", id, player.full_name());
    if let Some(number) = player.jersey_number {
        line.push_str(&format!("  #{}", number));
    }
    if let Some(position) = player.position {
        line.push_str(&format!("  {}", position.label()));
    }
    if let Some(category) = &player.category {
        line.push_str(&format!("  [{}]", category));
    }
    line
}

/// The detail panel as labelled lines. Unknown values are skipped; the age
/// is computed as of `today`.
pub fn format_player_detail(player: &Player, team_name: Option<&str>, today: NaiveDate) -> String {
    let mut rows: Vec<(&str, String)> = vec![("Name", player.full_name())];

    if let Some(number) = player.jersey_number {
        rows.push(("Number", number.to_string()));
    }
    if let Some(position) = player.position {
        rows.push(("Position", position.label().to_string()));
    }
    if let Some(born) = player.birth_date {
        rows.push(("Birth date", born.format("%d/%m/%Y").to_string()));
    }
    if let Some(age) = player.age_on(today) {
        rows.push(("Age", format!("{} years", age)));
    }
    if let Some(nationality) = &player.nationality {
        rows.push(("Nationality", nationality.clone()));
    }
    if let Some(height) = player.height {
        rows.push(("Height", format!("{} cm", height)));
    }
    if let Some(weight) = player.weight {
        rows.push(("Weight", format!("{} kg", weight)));
    }
    if let Some(team) = team_name {
        rows.push(("Team", team.to_string()));
    }
    if let Some(category) = &player.category {
        rows.push(("Category", category.clone()));
    }
    if let Some(bio) = &player.bio {
        rows.push(("Bio", bio.clone()));
    }

    rows.iter()
        .map(|(label, value)| format!("{:<12} {}", format!("{}:", label), value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_players(players: &[Player], as_json: bool) -> Result<()> {
    if as_json {
        return print_json(players);
    }
    if players.is_empty() {
        println!("No players found.");
    }
    for player in players {
        println!("{}", format_player_line(player));
    }
    Ok(())
}
