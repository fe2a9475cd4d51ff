//! ID types for players and teams.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for server-assigned player ids.
///
/// Keeps player ids from being mixed up with team ids or jersey numbers.
///
/// # Examples
///
/// ```rust
/// use club_roster::PlayerId;
///
/// let id = PlayerId::new(7);
/// assert_eq!(id.as_u64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RosterError::InvalidId {
                value: s.to_string(),
            })
    }
}

/// Type-safe wrapper for team ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RosterError::InvalidId {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&PlayerId::new(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&TeamId::new(1)).unwrap(), "1");

        let id: PlayerId = serde_json::from_str("42").unwrap();
        assert_eq!(id, PlayerId(42));
    }

    #[test]
    fn test_ids_from_str() {
        assert_eq!(" 12 ".parse::<PlayerId>().unwrap(), PlayerId(12));
        assert_eq!("5".parse::<TeamId>().unwrap(), TeamId(5));

        match "abc".parse::<PlayerId>() {
            Err(RosterError::InvalidId { value }) => assert_eq!(value, "abc"),
            other => panic!("Expected InvalidId error, got {:?}", other),
        }
        assert!("-1".parse::<TeamId>().is_err());
    }
}
