//! Playing positions.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field position of a player.
///
/// Serialized with the lowercase names the API validates against
/// (`goalkeeper`, `defender`, `midfielder`, `forward`). The club site shows
/// French labels, which [`Position::label`] returns and [`FromStr`] accepts.
///
/// # Examples
///
/// ```rust
/// use club_roster::Position;
///
/// let p: Position = "Milieu".parse().unwrap();
/// assert_eq!(p, Position::Midfielder);
/// assert_eq!(p.to_string(), "midfielder");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Wire name used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }

    /// Display label used on the club site.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Gardien",
            Position::Defender => "Défenseur",
            Position::Midfielder => "Milieu",
            Position::Forward => "Attaquant",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goalkeeper" | "gk" | "gardien" => Ok(Position::Goalkeeper),
            "defender" | "def" | "défenseur" | "defenseur" => Ok(Position::Defender),
            "midfielder" | "mid" | "milieu" => Ok(Position::Midfielder),
            "forward" | "fw" | "attaquant" => Ok(Position::Forward),
            _ => Err(RosterError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
