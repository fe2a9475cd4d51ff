//! Club Roster Client Library
//!
//! A Rust library for managing a sports club's player roster against the
//! club website's REST API: listing and filtering players, creating and
//! editing them through a validated draft, and deleting them behind an
//! explicit confirmation step.
//!
//! ## Features
//!
//! - **Player Directory**: Typed client for the `/players` endpoints
//! - **Server-side Filtering**: Filter the roster by category or team
//! - **Roster View**: Load/form/detail state machine with stale-result protection
//! - **Draft Validation**: Required names and positive measurements checked before any request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use club_roster::{ClientConfig, HttpPlayerDirectory, RosterView};
//!
//! # async fn example() -> club_roster::Result<()> {
//! let directory = HttpPlayerDirectory::new(ClientConfig::new("http://localhost:5000/api")?)?;
//! let mut view = RosterView::new();
//!
//! view.load(&directory).await;
//! view.set_category(&directory, Some("U19".to_string())).await;
//!
//! for player in view.roster() {
//!     println!("{}", player.full_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CLUB_ROSTER_API_URL=http://localhost:5000/api
//! export CLUB_ROSTER_API_TOKEN=<jwt>   # required for add/edit/delete
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod directory;
pub mod error;
pub mod models;
pub mod view;

// Re-export commonly used types
pub use core::{ClientConfig, PlayerFilter};
pub use directory::{HttpPlayerDirectory, PlayerDirectory, Saved};
pub use error::{Result, RosterError};
pub use models::{Draft, DraftIssue, Player, PlayerId, Position, TeamId, TeamSummary};
pub use view::RosterView;

pub const API_URL_ENV_VAR: &str = "CLUB_ROSTER_API_URL";
pub const API_TOKEN_ENV_VAR: &str = "CLUB_ROSTER_API_TOKEN";
pub const TIMEOUT_ENV_VAR: &str = "CLUB_ROSTER_TIMEOUT_SECS";
