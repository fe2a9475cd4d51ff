//! Player data model: records as the API returns them, typed ids,
//! positions, and the editable draft used by the roster form.

pub mod draft;
pub mod ids;
pub mod player;
pub mod position;

pub use draft::{is_known_category, Draft, DraftIssue, DEFAULT_CATEGORY, KNOWN_CATEGORIES};
pub use ids::{PlayerId, TeamId};
pub use player::{Player, TeamSummary};
pub use position::Position;
