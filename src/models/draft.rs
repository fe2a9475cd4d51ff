//! The editable player record behind the roster form.

use super::{Player, PlayerId, Position, TeamId};
use crate::error::{Result, RosterError};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Category a new draft starts with.
pub const DEFAULT_CATEGORY: &str = "Seniors";

/// Categories offered by the club site's selectors.
pub const KNOWN_CATEGORIES: [&str; 4] = ["Seniors", "U19", "U17", "U15"];

/// The server filters on exact labels, so `u19` matches nobody.
pub fn is_known_category(label: &str) -> bool {
    KNOWN_CATEGORIES.contains(&label.trim())
}

/// Reason a draft cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftIssue {
    MissingFirstName,
    MissingLastName,
    NonPositiveJersey,
    NonPositiveHeight,
    NonPositiveWeight,
    /// Editing a record the server never assigned an id to.
    MissingId,
}

impl fmt::Display for DraftIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DraftIssue::MissingFirstName => "first name is required",
            DraftIssue::MissingLastName => "last name is required",
            DraftIssue::NonPositiveJersey => "jersey number must be positive",
            DraftIssue::NonPositiveHeight => "height must be positive",
            DraftIssue::NonPositiveWeight => "weight must be positive",
            DraftIssue::MissingId => "player has no id",
        };
        write!(f, "{}", s)
    }
}

/// Player fields the client is allowed to send.
///
/// `id` identifies the record being edited and travels in the request path,
/// never in the body. Server-owned fields (timestamps, team summary) are not
/// part of a draft at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draft {
    #[serde(skip)]
    pub id: Option<PlayerId>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i32>,
    pub position: Option<Position>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team_id: Option<TeamId>,
    pub category: Option<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            jersey_number: None,
            position: None,
            birth_date: None,
            nationality: None,
            photo_url: None,
            bio: None,
            height: None,
            weight: None,
            team_id: None,
            category: Some(DEFAULT_CATEGORY.to_string()),
        }
    }
}

impl From<&Player> for Draft {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            jersey_number: player.jersey_number,
            position: player.position,
            birth_date: player.birth_date,
            nationality: player.nationality.clone(),
            photo_url: player.photo_url.clone(),
            bio: player.bio.clone(),
            height: player.height,
            weight: player.weight,
            team_id: player.team_id,
            category: player.category.clone(),
        }
    }
}

impl Draft {
    /// Blank draft with only the names set.
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Every problem that keeps this draft from being saved.
    ///
    /// Names are required and must contain something besides whitespace.
    /// Measurements, when given, must be strictly positive.
    pub fn validate(&self) -> Vec<DraftIssue> {
        let mut issues = Vec::new();

        if self.first_name.trim().is_empty() {
            issues.push(DraftIssue::MissingFirstName);
        }
        if self.last_name.trim().is_empty() {
            issues.push(DraftIssue::MissingLastName);
        }
        if matches!(self.jersey_number, Some(n) if n <= 0) {
            issues.push(DraftIssue::NonPositiveJersey);
        }
        if matches!(self.height, Some(h) if h.is_nan() || h <= 0.0) {
            issues.push(DraftIssue::NonPositiveHeight);
        }
        if matches!(self.weight, Some(w) if w.is_nan() || w <= 0.0) {
            issues.push(DraftIssue::NonPositiveWeight);
        }

        issues
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// [`Draft::validate`] as a `Result`.
    pub fn check(&self) -> Result<()> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(RosterError::InvalidDraft { issues })
        }
    }
}
