//! Roster filters for the `/players` endpoint.
//!
//! The API filters server-side on two dimensions, both optional:
//!
//! - **category**: exact match on the category label (`Seniors`, `U19`, ...)
//! - **team_id**: exact match on the team reference
//!
//! An absent dimension adds no query parameter and so places no constraint.

use crate::models::TeamId;

/// Filter parameters for `GET /players`.
///
/// Two filters compare equal when they would produce the same request, which
/// is what the roster view relies on to recognize stale responses.
///
/// # Examples
///
/// ```rust
/// use club_roster::PlayerFilter;
///
/// let filter = PlayerFilter::default().with_category(Some("U19".to_string()));
/// assert_eq!(filter.query_pairs(), vec![("category", "U19".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlayerFilter {
    pub category: Option<String>,
    pub team_id: Option<TeamId>,
}

impl PlayerFilter {
    /// Set the category constraint. Blank labels mean "any category".
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = normalize_category(category);
        self
    }

    pub fn with_team(mut self, team_id: Option<TeamId>) -> Self {
        self.team_id = team_id;
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.team_id.is_none()
    }

    /// Query-string pairs for this filter, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(team_id) = self.team_id {
            params.push(("team_id", team_id.to_string()));
        }
        params
    }
}

/// Trim a category label, treating blank input as no category.
pub fn normalize_category(category: Option<String>) -> Option<String> {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_filter_default() {
        let filter = PlayerFilter::default();
        assert!(filter.category.is_none());
        assert!(filter.team_id.is_none());
        assert!(filter.is_unconstrained());
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn test_player_filter_with_both_dimensions() {
        let filter = PlayerFilter::default()
            .with_category(Some("U19".to_string()))
            .with_team(Some(TeamId::new(3)));

        assert!(!filter.is_unconstrained());
        assert_eq!(
            filter.query_pairs(),
            vec![("category", "U19".to_string()), ("team_id", "3".to_string())]
        );
    }

    #[test]
    fn test_blank_category_is_no_constraint() {
        let filter = PlayerFilter::default().with_category(Some("   ".to_string()));
        assert!(filter.category.is_none());
        assert_eq!(filter, PlayerFilter::default());

        assert_eq!(
            normalize_category(Some(" U17 ".to_string())),
            Some("U17".to_string())
        );
        assert_eq!(normalize_category(None), None);
    }
}
