//! CLI argument definitions and parsing.

use crate::models::{Draft, PlayerId, Position, TeamId};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[clap(name = "club-roster", about = "Manage the club's player roster")]
pub struct RosterCli {
    /// API base URL, e.g. `http://localhost:5000/api` (or set `CLUB_ROSTER_API_URL`).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token for add/edit/delete (or set `CLUB_ROSTER_API_TOKEN`).
    #[clap(long, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds (or set `CLUB_ROSTER_TIMEOUT_SECS`).
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List players, optionally filtered by category or team.
    List {
        /// Category label (Seniors, U19, U17, U15). Omit for all categories.
        #[clap(long, short)]
        category: Option<String>,

        /// Only players of this team.
        #[clap(long)]
        team_id: Option<TeamId>,
    },

    /// Show a player's details.
    Show {
        /// Player ID.
        id: PlayerId,
    },

    /// Add a player. First and last name are required.
    Add {
        #[clap(flatten)]
        fields: PlayerFields,
    },

    /// Edit a player. Only the given fields change.
    Edit {
        /// Player ID.
        id: PlayerId,

        #[clap(flatten)]
        fields: PlayerFields,
    },

    /// Delete a player after confirmation.
    Delete {
        /// Player ID.
        id: PlayerId,

        /// Skip the confirmation prompt.
        #[clap(long, short)]
        yes: bool,
    },
}

/// Optional player attribute that `--clear` can unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClearField {
    JerseyNumber,
    Position,
    BirthDate,
    Nationality,
    PhotoUrl,
    Bio,
    Height,
    Weight,
    TeamId,
    Category,
}

impl ClearField {
    fn clear(self, draft: &mut Draft) {
        match self {
            ClearField::JerseyNumber => draft.jersey_number = None,
            ClearField::Position => draft.position = None,
            ClearField::BirthDate => draft.birth_date = None,
            ClearField::Nationality => draft.nationality = None,
            ClearField::PhotoUrl => draft.photo_url = None,
            ClearField::Bio => draft.bio = None,
            ClearField::Height => draft.height = None,
            ClearField::Weight => draft.weight = None,
            ClearField::TeamId => draft.team_id = None,
            ClearField::Category => draft.category = None,
        }
    }
}

/// Player attributes settable from the command line.
///
/// Passing an empty string to a text field clears it; `--clear` unsets any
/// optional field. A value given in the same command wins over `--clear`.
#[derive(Debug, Default, Args)]
pub struct PlayerFields {
    #[clap(long)]
    pub first_name: Option<String>,

    #[clap(long)]
    pub last_name: Option<String>,

    #[clap(long, allow_hyphen_values = true)]
    pub jersey_number: Option<i32>,

    /// goalkeeper | defender | midfielder | forward (French labels accepted).
    #[clap(long, value_parser = clap::value_parser!(Position))]
    pub position: Option<Position>,

    /// Birth date as YYYY-MM-DD.
    #[clap(long)]
    pub birth_date: Option<NaiveDate>,

    #[clap(long)]
    pub nationality: Option<String>,

    #[clap(long)]
    pub photo_url: Option<String>,

    #[clap(long)]
    pub bio: Option<String>,

    /// Height in centimeters.
    #[clap(long)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[clap(long)]
    pub weight: Option<f64>,

    #[clap(long)]
    pub team_id: Option<TeamId>,

    #[clap(long)]
    pub category: Option<String>,

    /// Unset an optional field. Repeatable.
    #[clap(long, value_enum)]
    pub clear: Vec<ClearField>,
}

impl PlayerFields {
    /// Copy every given field onto `draft`, leaving the rest untouched.
    pub fn apply_to(&self, draft: &mut Draft) {
        for field in &self.clear {
            field.clear(draft);
        }
        if let Some(first_name) = &self.first_name {
            draft.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = &self.last_name {
            draft.last_name = last_name.trim().to_string();
        }
        if let Some(jersey_number) = self.jersey_number {
            draft.jersey_number = Some(jersey_number);
        }
        if let Some(position) = self.position {
            draft.position = Some(position);
        }
        if let Some(birth_date) = self.birth_date {
            draft.birth_date = Some(birth_date);
        }
        if let Some(height) = self.height {
            draft.height = Some(height);
        }
        if let Some(weight) = self.weight {
            draft.weight = Some(weight);
        }
        if let Some(team_id) = self.team_id {
            draft.team_id = Some(team_id);
        }
        set_text(&mut draft.nationality, &self.nationality);
        set_text(&mut draft.photo_url, &self.photo_url);
        set_text(&mut draft.bio, &self.bio);
        set_text(&mut draft.category, &self.category);
    }
}

fn set_text(field: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        *field = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}
