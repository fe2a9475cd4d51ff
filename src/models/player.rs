//! Player records as returned by the `/players` endpoints.

use super::{PlayerId, Position, TeamId};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error, Deserialize, Deserializer, Serialize};


/// Server timestamps come back either naive (`2024-05-01T10:00:00.123456`)
/// or with an offset (`2024-05-01T10:00:00+00:00`). Both normalize to UTC.
fn de_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.naive_utc())
            .or_else(|_| s.parse::<NaiveDateTime>())
            .map(Some)
            .map_err(D::Error::custom),
    }
}

/// Denormalized team reference sent alongside a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// A player as the server knows it.
///
/// Every attribute except the names is optional; `id` and the timestamps are
/// assigned by the server and never sent back by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlayerId>,
    pub first_name: String,
    pub last_name: String,
    /// Signed so that one bad record cannot fail a whole roster decode;
    /// drafts reject non-positive numbers.
    #[serde(default)]
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Height in centimeters.
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamSummary>,
}

impl Player {
    /// Minimal player with just the required names, as a fresh record
    /// would look before the server fills in anything else.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            jersey_number: None,
            position: None,
            birth_date: None,
            nationality: None,
            photo_url: None,
            bio: None,
            height: None,
            weight: None,
            team_id: None,
            category: None,
            created_at: None,
            updated_at: None,
            team: None,
        }
    }

    /// "First Last", as shown on a roster card.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years on `today`, when a birth date is known.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|born| today.years_since(born))
    }
}
